//! File system helpers for the upload picker.
//!
//! - [`entry`] — [`FileEntry`](entry::FileEntry) and image-aware directory listing.
//! - [`picker`] — [`UploadPicker`](picker::UploadPicker), a cursor over one listing.

pub mod entry;
pub mod picker;

pub use entry::{is_image_path, read_image_directory, FileEntry};
pub use picker::UploadPicker;
