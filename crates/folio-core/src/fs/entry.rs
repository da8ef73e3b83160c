//! File entry representation and image-only directory listing.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::error::{CoreError, CoreResult};

/// A directory or image file shown in the upload picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    size: u64,
    is_dir: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = file_name(&path);
        Self {
            path,
            name,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            is_dir: metadata.is_dir(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// Last path component, NFC-normalised so decomposed names display correctly.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().nfc().collect::<String>())
        .unwrap_or_else(|| path.display().to_string())
}

/// Returns `true` if the extension names an image format the `image` crate knows.
pub fn is_image_path(path: &Path) -> bool {
    image::ImageFormat::from_path(path).is_ok()
}

/// Lists subdirectories and image files inside `path`.
///
/// Hidden entries are skipped. Symlinks are followed, and only directories
/// and regular files are kept, so FIFOs and device nodes never reach the
/// picker. Directories come first, then files, each group sorted
/// case-insensitively by name.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::NotADirectory`] if `path` is a file.
/// - [`CoreError::PermissionDenied`] if the directory is not readable.
pub fn read_image_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries: Vec<FileEntry> = read_dir
        .filter_map(Result::ok)
        .filter_map(|dir_entry| {
            let path = dir_entry.path();
            let metadata = std::fs::metadata(&path).ok()?;
            let entry = FileEntry::new(path, &metadata);
            if entry.name().starts_with('.') {
                return None;
            }
            let keep = metadata.is_dir() || (metadata.is_file() && is_image_path(entry.path()));
            keep.then_some(entry)
        })
        .collect();

    entries.sort_by(|a, b| {
        b.is_dir()
            .cmp(&a.is_dir())
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
    });

    Ok(entries)
}
