//! Image preview caching and protocol state management.
//!
//! Uploaded images are decoded from their in-memory blobs and encoded for
//! the terminal graphics protocol once per (handle, area) pair. A blob that
//! fails to decode is remembered so it is not retried every frame.

use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

use folio_core::gallery::ObjectUrl;

/// Cache key: blob handle + render area dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageCacheKey {
    url: ObjectUrl,
    width: u16,
    height: u16,
}

/// Holds the picker and cached encoded image protocol.
pub struct ImagePreviewState {
    picker: Picker,
    cached_protocol: Option<StatefulProtocol>,
    cache_key: Option<ImageCacheKey>,
    failed_key: Option<ImageCacheKey>,
}

impl ImagePreviewState {
    pub fn new(picker: Picker) -> Self {
        Self {
            picker,
            cached_protocol: None,
            cache_key: None,
            failed_key: None,
        }
    }

    /// Returns `&mut StatefulProtocol` (cached or newly encoded).
    ///
    /// Re-encodes only when the handle or render area size changes.
    pub fn get_or_encode(
        &mut self,
        url: &ObjectUrl,
        bytes: &[u8],
        width: u16,
        height: u16,
    ) -> Option<&mut StatefulProtocol> {
        let new_key = ImageCacheKey {
            url: url.clone(),
            width,
            height,
        };

        if self.failed_key.as_ref() == Some(&new_key) {
            return None;
        }

        let needs_encode = self
            .cache_key
            .as_ref()
            .is_none_or(|existing| *existing != new_key);

        if needs_encode {
            let Some(dyn_img) = decode(url, bytes) else {
                self.cached_protocol = None;
                self.cache_key = None;
                self.failed_key = Some(new_key);
                return None;
            };
            let protocol = self.picker.new_resize_protocol(dyn_img);
            self.cached_protocol = Some(protocol);
            self.cache_key = Some(new_key);
        }

        self.cached_protocol.as_mut()
    }

    /// Drops the cached protocol (e.g. after the focused image is deleted).
    pub fn invalidate(&mut self) {
        self.cached_protocol = None;
        self.cache_key = None;
        self.failed_key = None;
    }
}

fn decode(url: &ObjectUrl, bytes: &[u8]) -> Option<image::DynamicImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::debug!(%url, "Image decode failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::gallery::ObjectUrlStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn png_bytes() -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::RgbaImage::new(3, 2)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    fn some_url() -> ObjectUrl {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.png");
        std::fs::write(&path, png_bytes()).unwrap();
        ObjectUrlStore::new().create(&path).unwrap()
    }

    #[test]
    fn decodes_png_blob() {
        let img = decode(&some_url(), &png_bytes()).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        assert!(decode(&some_url(), b"not an image").is_none());
    }

    #[test]
    fn failed_decode_is_not_retried_for_same_key() {
        let url = some_url();
        let mut state = ImagePreviewState::new(Picker::from_fontsize((8, 16)));

        assert!(state.get_or_encode(&url, b"not an image", 10, 5).is_none());
        assert!(state.failed_key.is_some());

        // Same handle and area: skipped without decoding, even with good bytes.
        assert!(state.get_or_encode(&url, &png_bytes(), 10, 5).is_none());

        // A new area is a new key and decodes again.
        assert!(state.get_or_encode(&url, &png_bytes(), 12, 5).is_some());
        assert!(state.failed_key.is_some());

        state.invalidate();
        assert!(state.failed_key.is_none());
        assert!(state.get_or_encode(&url, &png_bytes(), 10, 5).is_some());
    }
}
