//! Cursor over an image-only directory listing, used by the Upload tab.

use std::path::{Path, PathBuf};

use super::entry::{read_image_directory, FileEntry};
use crate::error::CoreResult;

/// Immutable directory browser restricted to folders and image files.
///
/// Selection is always clamped to the listing bounds.
#[derive(Debug, Clone, Default)]
pub struct UploadPicker {
    dir: PathBuf,
    entries: Vec<FileEntry>,
    selected: usize,
}

impl UploadPicker {
    /// Reads `dir` and places the cursor on the first entry.
    pub fn open(dir: &Path) -> CoreResult<Self> {
        let dir = dir.canonicalize()?;
        let entries = read_image_directory(&dir)?;
        Ok(Self {
            dir,
            entries,
            selected: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected)
    }

    /// Moves the cursor up by one. No-op at the top.
    pub fn move_up(self) -> Self {
        Self {
            selected: self.selected.saturating_sub(1),
            ..self
        }
    }

    /// Moves the cursor down by one. No-op at the bottom.
    pub fn move_down(self) -> Self {
        let last = self.entries.len().saturating_sub(1);
        Self {
            selected: (self.selected + 1).min(last),
            ..self
        }
    }

    /// Descends into the selected directory.
    ///
    /// Returns `Ok(None)` if the selection is a file (or nothing is selected).
    pub fn enter(&self) -> CoreResult<Option<Self>> {
        match self.selected_entry() {
            Some(entry) if entry.is_dir() => Self::open(entry.path()).map(Some),
            _ => Ok(None),
        }
    }

    /// Moves to the parent directory, keeping the cursor on the folder we came from.
    pub fn parent(&self) -> CoreResult<Self> {
        let Some(parent) = self.dir.parent() else {
            return Ok(self.clone());
        };
        let picker = Self::open(parent)?;
        let selected = picker
            .entries
            .iter()
            .position(|e| e.path() == self.dir)
            .unwrap_or(0);
        Ok(Self { selected, ..picker })
    }
}
