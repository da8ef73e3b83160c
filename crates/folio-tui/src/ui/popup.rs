use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::action::{ActionCategory, ActionRegistry};
use folio_core::config::keymap::Keymap;
use folio_core::config::theme::{parse_color, Theme};

use crate::input::CHOOSER_KEYS;

/// Renders a centered popup dialog with the given title and lines.
pub fn render_popup(f: &mut Frame, title: &str, lines: Vec<Line<'_>>, theme: &Theme) {
    let area = centered_rect(60, 90, f.area());
    let border_fg = parse_color(&theme.popup.border_fg);

    f.render_widget(Clear, area);

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Help overlay listing every bound action plus the chooser keys.
pub fn render_help_popup(f: &mut Frame, registry: &ActionRegistry, keymap: &Keymap, theme: &Theme) {
    render_popup(f, " Help ", help_lines(registry, keymap), theme);
}

fn help_lines(registry: &ActionRegistry, keymap: &Keymap) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for category in [ActionCategory::Profile, ActionCategory::Gallery, ActionCategory::System] {
        lines.push(Line::styled(category.label(), heading));
        for descriptor in registry.all().iter().filter(|d| d.category == category) {
            let keys = keymap
                .keys_for_action(descriptor.action)
                .map(|keys| keys.join("/"))
                .unwrap_or_else(|| "-".to_string());
            lines.push(key_line(&keys, descriptor.description));
        }
    }

    lines.push(Line::styled("Add image", heading));
    for (keys, description) in CHOOSER_KEYS {
        lines.push(key_line(keys, description));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press Esc or ? to close"));
    lines
}

fn key_line(keys: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {keys:<14}")),
        Span::raw(description.to_string()),
    ])
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let r = centered_rect(60, 70, parent);
        assert_eq!(r.width, 60);
        assert_eq!(r.x, 20);
        assert!(r.bottom() <= parent.bottom());
    }

    #[test]
    fn help_lists_bound_keys() {
        let lines = help_lines(&ActionRegistry::new(), &Keymap::default());
        let all: Vec<String> = lines.iter().map(text).collect();
        assert!(all.iter().any(|l| l.trim_start().starts_with('q') && l.contains("Exit Folio")));
        assert!(all.iter().any(|l| l.contains("Enter") && l.contains("Add image")));
        assert_eq!(all.last().map(String::as_str), Some("Press Esc or ? to close"));
    }
}
