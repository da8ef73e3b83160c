//! Bounded image gallery with a carousel focus and an "Add image" chooser.
//!
//! [`GalleryWidget`] owns every piece of gallery state: the [`Carousel`]
//! (image list + visible index), the public catalog, the [`ChooserState`]
//! overlay and the [`ObjectUrlStore`] backing uploaded images. Transitions
//! consume the widget and return the next one. Rejected adds are reported
//! through the chooser error rather than a `Result`.
//!
//! Local uploads happen in three steps so the file read can run off the UI
//! thread: [`GalleryWidget::request_local_upload`] validates and queues a
//! path, the caller takes it with [`GalleryWidget::take_pending_upload`] and
//! reads it with [`read_upload`], then [`GalleryWidget::accept_upload`]
//! applies the result.

pub mod carousel;
pub mod chooser;
pub mod object_url;

use std::path::{Path, PathBuf};

pub use carousel::{visible_window, Carousel, ImageRef};
pub use chooser::{ChooserState, ChooserTab};
pub use object_url::{read_upload, Blob, ObjectUrl, ObjectUrlStore, MAX_UPLOAD_BYTES};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{file_name, is_image_path};
use crate::fs::picker::UploadPicker;

/// Default gallery capacity.
pub const MAX_IMAGES: usize = 3;

/// Carousel navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Notice shown when an add is attempted on a full gallery.
pub fn capacity_notice(max: usize) -> String {
    CoreError::CapacityExceeded(max).to_string()
}

/// Call-to-action shown in place of the carousel when there are no images.
pub fn empty_call_to_action(max: usize) -> String {
    format!("No images yet — add up to {max} images.")
}

/// The gallery widget.
#[derive(Debug)]
pub struct GalleryWidget {
    carousel: Carousel,
    catalog: Vec<String>,
    chooser: ChooserState,
    store: ObjectUrlStore,
    capacity: usize,
    upload_dir: PathBuf,
    pending_upload: Option<PathBuf>,
}

impl GalleryWidget {
    /// Creates an empty gallery holding at most `capacity` images (minimum 1).
    ///
    /// `upload_dir` is where the Upload tab starts browsing.
    pub fn new(capacity: usize, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            carousel: Carousel::new(),
            catalog: Vec::new(),
            chooser: ChooserState::default(),
            store: ObjectUrlStore::new(),
            capacity: capacity.max(1),
            upload_dir: upload_dir.into(),
            pending_upload: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn images(&self) -> &[ImageRef] {
        self.carousel.images()
    }

    pub fn visible_index(&self) -> usize {
        self.carousel.visible_index()
    }

    pub fn public_catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn chooser(&self) -> &ChooserState {
        &self.chooser
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// `true` once the list holds `capacity` images. Always derived from the
    /// current length.
    pub fn is_full(&self) -> bool {
        self.carousel.len() >= self.capacity
    }

    /// Bytes behind an uploaded image, if it is still live.
    pub fn blob(&self, image: &ImageRef) -> Option<&Blob> {
        match image {
            ImageRef::Local { url, .. } => self.store.get(url),
            ImageRef::Public(_) => None,
        }
    }

    /// Number of uploaded images whose bytes are still held.
    pub fn live_handles(&self) -> usize {
        self.store.live_count()
    }

    /// Installs the fetched public catalog.
    pub fn load_public_catalog(self, catalog: Vec<String>) -> Self {
        tracing::debug!(count = catalog.len(), "public catalog loaded");
        let chooser = self.chooser.with_catalog_len(catalog.len());
        Self {
            catalog,
            chooser,
            ..self
        }
    }

    /// Reads an image from disk on the calling thread and appends it.
    ///
    /// A full gallery, a non-image file or an unreadable file sets the
    /// chooser error and leaves the list untouched.
    pub fn add_local_image(self, path: &Path) -> Self {
        let (gallery, pending) = self.request_local_upload(path).take_pending_upload();
        match pending {
            Some(path) => {
                let loaded = read_upload(&path);
                gallery.accept_upload(&path, loaded)
            }
            None => gallery,
        }
    }

    /// Validates `path` and queues it for reading.
    ///
    /// A full gallery or a non-image extension is rejected here, before any
    /// bytes are touched.
    pub fn request_local_upload(self, path: &Path) -> Self {
        if self.is_full() {
            return self.reject_full();
        }
        if !is_image_path(path) {
            tracing::info!(path = %path.display(), "rejected non-image upload");
            return self.with_chooser_error(CoreError::NotAnImage(file_name(path)).to_string());
        }
        tracing::debug!(path = %path.display(), "upload queued");
        Self {
            pending_upload: Some(path.to_path_buf()),
            chooser: self.chooser.with_cleared_error(),
            ..self
        }
    }

    /// Hands the queued upload path, if any, to the caller.
    pub fn take_pending_upload(self) -> (Self, Option<PathBuf>) {
        let pending = self.pending_upload;
        (
            Self {
                pending_upload: None,
                ..self
            },
            pending,
        )
    }

    /// Applies the outcome of reading `path`.
    ///
    /// Capacity is re-checked: other adds can land while a read is in flight.
    pub fn accept_upload(self, path: &Path, loaded: CoreResult<Blob>) -> Self {
        let name = file_name(path);
        match loaded {
            Ok(blob) => {
                if self.is_full() {
                    return self.reject_full();
                }
                let mut store = self.store;
                let url = store.insert(blob);
                Self {
                    carousel: self.carousel.with_pushed(ImageRef::Local { url, name }),
                    chooser: self.chooser.with_cleared_error(),
                    store,
                    ..self
                }
            }
            Err(e) => {
                tracing::warn!("Could not load {}: {e}", path.display());
                self.with_chooser_error(format!("Could not load {name}: {e}"))
            }
        }
    }

    /// Appends a catalog URL and closes the chooser.
    pub fn add_public_image(self, url: &str) -> Self {
        if self.is_full() {
            return self.reject_full();
        }
        Self {
            carousel: self.carousel.with_pushed(ImageRef::Public(url.to_string())),
            chooser: self.chooser.with_cleared_error().closed(),
            ..self
        }
    }

    /// Adds the catalog entry under the public-grid cursor.
    pub fn add_selected_public(self) -> Self {
        match self.catalog.get(self.chooser.public_cursor()).cloned() {
            Some(url) => self.add_public_image(&url),
            None => self,
        }
    }

    /// Removes the image at `index` and re-clamps the visible index.
    ///
    /// Uploaded images release their bytes. Out-of-range indices are ignored.
    pub fn delete_image(self, index: usize) -> Self {
        let (carousel, removed) = self.carousel.without(index);
        let mut store = self.store;
        match removed {
            Some(ImageRef::Local { url, .. }) => {
                store.revoke(&url);
            }
            Some(ImageRef::Public(_)) => {}
            None => tracing::debug!(index, "delete ignored: index out of range"),
        }
        Self {
            carousel,
            store,
            ..self
        }
    }

    /// Removes the focused image, if any.
    pub fn delete_focused(self) -> Self {
        if self.carousel.is_empty() {
            return self;
        }
        let index = self.carousel.visible_index();
        self.delete_image(index)
    }

    /// Moves the carousel focus. No-op at either bound.
    pub fn navigate(self, direction: Direction) -> Self {
        let carousel = match direction {
            Direction::Prev => self.carousel.prev(),
            Direction::Next => self.carousel.next(),
        };
        Self { carousel, ..self }
    }

    pub fn toggle_chooser(self) -> Self {
        let chooser = self.chooser.toggled();
        Self { chooser, ..self }.ensure_picker()
    }

    pub fn open_chooser(self) -> Self {
        let chooser = self.chooser.opened();
        Self { chooser, ..self }.ensure_picker()
    }

    pub fn close_chooser(self) -> Self {
        Self {
            chooser: self.chooser.closed(),
            ..self
        }
    }

    /// Switches the chooser between Upload and Public.
    pub fn switch_chooser_tab(self) -> Self {
        let tab = self.chooser.tab().toggled();
        Self {
            chooser: self.chooser.with_tab(tab),
            ..self
        }
    }

    /// Moves the cursor of the active chooser tab by `delta`.
    pub fn move_chooser_cursor(self, delta: isize) -> Self {
        let chooser = match self.chooser.tab() {
            ChooserTab::Public => self
                .chooser
                .with_public_cursor_moved(delta, self.catalog.len()),
            ChooserTab::Upload => {
                let picker = self.chooser.picker().cloned().map(|p| {
                    if delta < 0 {
                        (0..delta.unsigned_abs()).fold(p, |p, _| p.move_up())
                    } else {
                        (0..delta.unsigned_abs()).fold(p, |p, _| p.move_down())
                    }
                });
                self.chooser.with_picker(picker)
            }
        };
        Self { chooser, ..self }
    }

    /// Acts on the active chooser tab's selection: adds the picked image, or
    /// descends into the selected folder.
    pub fn choose(self) -> Self {
        match self.chooser.tab() {
            ChooserTab::Public => self.add_selected_public(),
            ChooserTab::Upload => {
                let Some(picker) = self.chooser.picker().cloned() else {
                    return self;
                };
                let Some(entry) = picker.selected_entry().cloned() else {
                    return self;
                };
                if !entry.is_dir() {
                    return self.request_local_upload(entry.path());
                }
                match picker.enter() {
                    Ok(next) => {
                        let chooser = self.chooser.with_picker(next.or(Some(picker)));
                        Self { chooser, ..self }
                    }
                    Err(e) => {
                        tracing::warn!("Could not open {}: {e}", entry.path().display());
                        self.with_chooser_error(format!("Could not open {}: {e}", entry.name()))
                    }
                }
            }
        }
    }

    /// Moves the Upload browser to its parent folder. No-op on the Public tab.
    pub fn chooser_parent_dir(self) -> Self {
        if self.chooser.tab() != ChooserTab::Upload {
            return self;
        }
        let Some(picker) = self.chooser.picker().cloned() else {
            return self;
        };
        match picker.parent() {
            Ok(parent) => Self {
                chooser: self.chooser.with_picker(Some(parent)),
                ..self
            },
            Err(e) => {
                tracing::warn!("Could not open parent of {}: {e}", picker.dir().display());
                self
            }
        }
    }

    /// Releases every uploaded image. Call on teardown.
    ///
    /// Returns how many handles were released.
    pub fn dispose(mut self) -> usize {
        let released = self.store.revoke_all();
        tracing::debug!(released, "gallery disposed");
        released
    }

    fn reject_full(self) -> Self {
        tracing::info!(capacity = self.capacity, "add rejected: gallery full");
        let notice = capacity_notice(self.capacity);
        self.with_chooser_error(notice)
    }

    fn with_chooser_error(self, message: String) -> Self {
        Self {
            chooser: self.chooser.with_error(message),
            ..self
        }
    }

    /// Opens the Upload browser lazily the first time the chooser is shown.
    fn ensure_picker(self) -> Self {
        if !self.chooser.is_open() || self.chooser.picker().is_some() {
            return self;
        }
        match UploadPicker::open(&self.upload_dir) {
            Ok(picker) => Self {
                chooser: self.chooser.with_picker(Some(picker)),
                ..self
            },
            Err(e) => {
                tracing::warn!("Upload folder {} unavailable: {e}", self.upload_dir.display());
                self
            }
        }
    }
}
