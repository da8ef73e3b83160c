//! Tabbed profile card: label row, sliding indicator and tab body.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use folio_core::config::theme::{parse_color, Theme};
use folio_core::profile::{IndicatorGeometry, ProfileCard, ProfileContent, Tab};

use crate::layout::{profile_areas, profile_card_block, TabStripLayout};

/// Renders the profile card into `area`.
///
/// `layout` must be the same strip measurement the indicator was computed
/// from, so labels and indicator line up.
pub fn render_profile_card(
    f: &mut Frame,
    area: Rect,
    card: &ProfileCard,
    content: &ProfileContent,
    layout: &TabStripLayout,
    theme: &Theme,
) {
    let border_fg = parse_color(&theme.profile.border_fg);
    let block = profile_card_block()
        .title(" Profile ")
        .border_style(Style::default().fg(border_fg));
    f.render_widget(block, area);

    let areas = profile_areas(area);
    f.render_widget(
        Paragraph::new(tab_line(card.active_tab(), layout, theme)),
        areas.tabs,
    );
    f.render_widget(
        Paragraph::new(indicator_line(card.indicator(), theme)),
        areas.indicator,
    );
    f.render_widget(
        Paragraph::new(body_lines(content, card.active_tab(), theme)).wrap(Wrap { trim: false }),
        areas.body,
    );
}

fn tab_line(active: Tab, layout: &TabStripLayout, theme: &Theme) -> Line<'static> {
    let tab_fg = parse_color(&theme.profile.tab_fg);
    let active_fg = parse_color(&theme.profile.tab_active_fg);

    let mut spans = Vec::new();
    let mut cursor: u16 = 0;
    for (tab, slot) in layout.slots() {
        let Some(geometry) = slot else { break };
        if geometry.offset > cursor {
            spans.push(Span::raw(" ".repeat(usize::from(geometry.offset - cursor))));
        }
        let style = if tab == active {
            Style::default().fg(active_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tab_fg)
        };
        spans.push(Span::styled(TabStripLayout::label_text(tab), style));
        cursor = geometry.offset + geometry.width;
    }
    Line::from(spans)
}

fn indicator_line(geometry: IndicatorGeometry, theme: &Theme) -> Line<'static> {
    let indicator_fg = parse_color(&theme.profile.indicator_fg);
    Line::from(vec![
        Span::raw(" ".repeat(usize::from(geometry.offset))),
        Span::styled(
            "━".repeat(usize::from(geometry.width)),
            Style::default().fg(indicator_fg),
        ),
    ])
}

fn body_lines<'a>(content: &'a ProfileContent, tab: Tab, theme: &Theme) -> Vec<Line<'a>> {
    let text_fg = parse_color(&theme.profile.text_fg);
    let muted_fg = parse_color(&theme.profile.muted_fg);

    let mut lines = vec![Line::from("")];
    for (i, paragraph) in content.paragraphs(tab).into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let fg = if i == 0 { text_fg } else { muted_fg };
        lines.extend(
            paragraph
                .lines()
                .map(|l| Line::styled(l, Style::default().fg(fg))),
        );
    }
    lines
}
