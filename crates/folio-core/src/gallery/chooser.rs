//! State of the "Add image" overlay.

use crate::fs::picker::UploadPicker;

/// Which source the chooser is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChooserTab {
    #[default]
    Upload,
    Public,
}

impl ChooserTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Public => "Public",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Upload => Self::Public,
            Self::Public => Self::Upload,
        }
    }
}

/// Open flag, active source tab, transient error and per-tab cursors.
///
/// The error survives closing and reopening; only a successful add clears it.
#[derive(Debug, Clone, Default)]
pub struct ChooserState {
    open: bool,
    tab: ChooserTab,
    error: Option<String>,
    public_cursor: usize,
    picker: Option<UploadPicker>,
}

impl ChooserState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tab(&self) -> ChooserTab {
        self.tab
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn public_cursor(&self) -> usize {
        self.public_cursor
    }

    pub fn picker(&self) -> Option<&UploadPicker> {
        self.picker.as_ref()
    }

    pub fn toggled(self) -> Self {
        Self {
            open: !self.open,
            ..self
        }
    }

    pub fn opened(self) -> Self {
        Self { open: true, ..self }
    }

    pub fn closed(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }

    pub fn with_tab(self, tab: ChooserTab) -> Self {
        Self { tab, ..self }
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..self
        }
    }

    pub fn with_cleared_error(self) -> Self {
        Self {
            error: None,
            ..self
        }
    }

    pub fn with_picker(self, picker: Option<UploadPicker>) -> Self {
        Self { picker, ..self }
    }

    /// Moves the public-grid cursor by `delta`, clamped to `[0, catalog_len - 1]`.
    pub fn with_public_cursor_moved(self, delta: isize, catalog_len: usize) -> Self {
        let last = catalog_len.saturating_sub(1);
        let public_cursor = self.public_cursor.saturating_add_signed(delta).min(last);
        Self {
            public_cursor,
            ..self
        }
    }

    /// Re-clamps the public cursor after the catalog changed.
    pub fn with_catalog_len(self, catalog_len: usize) -> Self {
        let public_cursor = self.public_cursor.min(catalog_len.saturating_sub(1));
        Self {
            public_cursor,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_on_upload() {
        let chooser = ChooserState::default();
        assert!(!chooser.is_open());
        assert_eq!(chooser.tab(), ChooserTab::Upload);
        assert!(chooser.error().is_none());
    }

    #[test]
    fn flag_flips() {
        let chooser = ChooserState::default().toggled();
        assert!(chooser.is_open());
        let chooser = chooser.toggled();
        assert!(!chooser.is_open());
        assert!(ChooserState::default().opened().is_open());
        assert!(!ChooserState::default().opened().closed().is_open());
    }

    #[test]
    fn closing_keeps_error() {
        let chooser = ChooserState::default()
            .opened()
            .with_error("full")
            .closed()
            .opened();
        assert_eq!(chooser.error(), Some("full"));
        assert!(chooser.with_cleared_error().error().is_none());
    }

    #[test]
    fn public_cursor_is_clamped() {
        let chooser = ChooserState::default().with_public_cursor_moved(-1, 3);
        assert_eq!(chooser.public_cursor(), 0);
        let chooser = chooser.with_public_cursor_moved(5, 3);
        assert_eq!(chooser.public_cursor(), 2);
        let chooser = chooser.with_catalog_len(1);
        assert_eq!(chooser.public_cursor(), 0);
    }

    #[test]
    fn tab_toggles() {
        assert_eq!(ChooserTab::Upload.toggled(), ChooserTab::Public);
        assert_eq!(ChooserTab::Public.toggled(), ChooserTab::Upload);
        assert_eq!(ChooserTab::Public.label(), "Public");
    }
}
