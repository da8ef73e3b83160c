//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the active tab, carousel position, catalog state and an optional
//! status message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::config::theme::{parse_color, Theme};
use folio_core::profile::Tab;

use crate::app::CatalogStatus;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub active_tab: Tab,
    pub image_count: usize,
    pub visible_index: usize,
    pub capacity: usize,
    pub catalog: CatalogStatus,
    pub status_message: Option<&'a str>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let bar = Paragraph::new(status_line(props, theme)).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

fn status_line<'a>(props: &StatusBarProps<'a>, theme: &Theme) -> Line<'a> {
    let bg = parse_color(&theme.statusbar.bg);
    let fg = parse_color(&theme.statusbar.fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let position = if props.image_count > 0 {
        format!("  {}/{}", props.visible_index + 1, props.image_count)
    } else {
        "  0/0".to_owned()
    };
    let full = if props.image_count >= props.capacity {
        " [FULL]"
    } else {
        ""
    };
    let catalog = match props.catalog {
        CatalogStatus::Loading => "  catalog: loading…".to_owned(),
        CatalogStatus::Loaded(n) => format!("  catalog: {n}"),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {}", props.active_tab.label()),
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(position, Style::default().fg(fg).bg(bg)),
        Span::styled(
            full,
            Style::default().fg(message_fg).bg(bg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(catalog, Style::default().fg(fg).bg(bg)),
    ];
    if let Some(msg) = props.status_message {
        spans.push(Span::styled(
            format!("  {msg}"),
            Style::default()
                .fg(message_fg)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(image_count: usize, catalog: CatalogStatus) -> StatusBarProps<'static> {
        StatusBarProps {
            active_tab: Tab::About,
            image_count,
            visible_index: image_count.saturating_sub(1),
            capacity: 3,
            catalog,
            status_message: None,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_gallery_shows_zero_position() {
        let line = status_line(&props(0, CatalogStatus::Loading), &Theme::default());
        assert_eq!(text(&line), " About Me  0/0  catalog: loading…");
    }

    #[test]
    fn full_gallery_is_flagged() {
        let line = status_line(&props(3, CatalogStatus::Loaded(5)), &Theme::default());
        assert_eq!(text(&line), " About Me  3/3 [FULL]  catalog: 5");
    }

    #[test]
    fn status_message_is_appended() {
        let mut p = props(1, CatalogStatus::Loaded(0));
        p.status_message = Some("Removed a.png");
        let line = status_line(&p, &Theme::default());
        assert!(text(&line).ends_with("  Removed a.png"));
    }
}
