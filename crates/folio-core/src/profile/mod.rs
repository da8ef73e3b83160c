//! Profile card: tab selection and the highlight indicator under the
//! active tab label.
//!
//! [`ProfileCard`] never measures anything itself. Geometry comes from an
//! [`ElementBounds`] implementation supplied by the frontend, which keeps the
//! indicator logic testable with synthetic layouts.

pub mod content;

pub use content::ProfileContent;

/// One of the three fixed profile tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Experiences,
    Recommended,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Experiences, Tab::Recommended];

    /// Label shown in the tab strip.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Experiences => "Experiences",
            Self::Recommended => "Recommended",
        }
    }

    /// Short stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experiences => "exp",
            Self::Recommended => "rec",
        }
    }

    /// Position within [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Experiences => 1,
            Self::Recommended => 2,
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Horizontal position and width of the highlight, in cells, relative to
/// the left edge of the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorGeometry {
    pub offset: u16,
    pub width: u16,
}

impl IndicatorGeometry {
    pub fn new(offset: u16, width: u16) -> Self {
        Self { offset, width }
    }
}

/// Measures where a tab label currently sits on screen.
///
/// Returns `None` when the label is not laid out (strip not rendered yet,
/// or too narrow to hold it).
pub trait ElementBounds {
    fn bounds_of(&self, tab: Tab) -> Option<IndicatorGeometry>;
}

/// Tabbed profile card state.
///
/// Immutable: every transition returns a new `ProfileCard`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCard {
    active: Tab,
    indicator: IndicatorGeometry,
    indicator_changed: bool,
}

impl ProfileCard {
    /// Creates a card with the About tab active and a zero-width indicator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn indicator(&self) -> IndicatorGeometry {
        self.indicator
    }

    /// `true` if the last recompute moved or resized the indicator.
    pub fn indicator_changed(&self) -> bool {
        self.indicator_changed
    }

    /// Activates `tab` and re-measures the indicator against `bounds`.
    pub fn select_tab(self, tab: Tab, bounds: &impl ElementBounds) -> Self {
        Self {
            active: tab,
            ..self
        }
        .recompute_indicator(bounds)
    }

    /// Re-reads the active tab's geometry.
    ///
    /// A missing target leaves the last known geometry in place.
    pub fn recompute_indicator(self, bounds: &impl ElementBounds) -> Self {
        match bounds.bounds_of(self.active) {
            Some(geometry) if geometry != self.indicator => Self {
                indicator: geometry,
                indicator_changed: true,
                ..self
            },
            Some(_) => Self {
                indicator_changed: false,
                ..self
            },
            None => {
                tracing::trace!(tab = self.active.id(), "indicator target not laid out");
                Self {
                    indicator_changed: false,
                    ..self
                }
            }
        }
    }
}
