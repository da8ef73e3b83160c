//! Commands sent from the UI to the widgets.
//!
//! The frontend translates input into [`Command`]s; the widgets apply them
//! and the frontend re-renders from the resulting state.

use std::path::PathBuf;

use crate::gallery::Direction;
use crate::profile::Tab;

/// A state change the UI requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate a profile tab.
    SelectTab(Tab),
    /// Activate the tab to the right (wrapping).
    NextTab,
    /// Activate the tab to the left (wrapping).
    PrevTab,
    /// Move the carousel focus.
    Navigate(Direction),
    /// Remove the image at the given index.
    DeleteImage(usize),
    /// Remove the focused image.
    DeleteFocused,
    /// Queue an image on disk for reading; it is appended once the read lands.
    AddLocalImage(PathBuf),
    /// Append a public catalog URL.
    AddPublicImage(String),
    ToggleChooser,
    OpenChooser,
    CloseChooser,
    /// Switch the chooser between Upload and Public.
    SwitchChooserTab,
    /// Move the chooser cursor by the given delta.
    MoveChooserCursor(isize),
    /// Act on the chooser selection (pick image or enter folder).
    Choose,
    /// Go to the parent folder in the Upload browser.
    ChooserParent,
}
