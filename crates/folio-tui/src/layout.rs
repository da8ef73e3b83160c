//! Screen geometry shared by the renderer and the indicator measurement.
//!
//! Both the draw pass and [`App::with_viewport`](crate::app::App::with_viewport)
//! derive areas from the same functions, so the measured tab bounds always
//! match what ends up on screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use folio_core::profile::{ElementBounds, IndicatorGeometry, Tab};

/// Top-level page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub profile: Rect,
    pub gallery: Rect,
    pub statusbar: Rect,
}

/// Splits the screen into profile card | gallery, with a one-row status bar.
pub fn page_areas(area: Rect, panel_ratio: f64) -> PageAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let left = (panel_ratio.clamp(0.1, 0.9) * 100.0).round() as u16;
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(left), Constraint::Percentage(100 - left)])
        .split(vertical[0]);

    PageAreas {
        profile: horizontal[0],
        gallery: horizontal[1],
        statusbar: vertical[1],
    }
}

/// Profile card regions inside its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileAreas {
    /// Tab labels row.
    pub tabs: Rect,
    /// Indicator row directly under the labels.
    pub indicator: Rect,
    pub body: Rect,
}

pub fn profile_card_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

pub fn profile_areas(card: Rect) -> ProfileAreas {
    let inner = profile_card_block().inner(card);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    ProfileAreas {
        tabs: rows[0],
        indicator: rows[1],
        body: rows[2],
    }
}

/// Where each tab label sits within the tab row.
///
/// Labels are drawn as ` {label} ` separated by `gap` blank cells. A label
/// that would overflow the row is treated as not laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabStripLayout {
    strip: Rect,
    gap: u16,
}

impl TabStripLayout {
    pub fn new(strip: Rect, gap: u16) -> Self {
        Self { strip, gap }
    }

    /// Measures the tab strip for a full-screen `area`.
    pub fn for_screen(area: Rect, panel_ratio: f64, gap: u16) -> Self {
        let page = page_areas(area, panel_ratio);
        Self::new(profile_areas(page.profile).tabs, gap)
    }

    pub fn strip(&self) -> Rect {
        self.strip
    }

    /// Rendered text of a label.
    pub fn label_text(tab: Tab) -> String {
        format!(" {} ", tab.label())
    }

    /// Every tab with its geometry, or `None` if it does not fit.
    pub fn slots(&self) -> Vec<(Tab, Option<IndicatorGeometry>)> {
        let mut offset: u16 = 0;
        let mut fits = self.strip.height > 0;
        Tab::ALL
            .iter()
            .map(|&tab| {
                let width = Self::label_text(tab).chars().count() as u16;
                let end = offset.saturating_add(width);
                fits = fits && end <= self.strip.width;
                let slot = fits.then(|| IndicatorGeometry::new(offset, width));
                offset = end.saturating_add(self.gap);
                (tab, slot)
            })
            .collect()
    }
}

impl ElementBounds for TabStripLayout {
    fn bounds_of(&self, tab: Tab) -> Option<IndicatorGeometry> {
        self.slots()
            .into_iter()
            .find(|(t, _)| *t == tab)
            .and_then(|(_, geometry)| geometry)
    }
}
