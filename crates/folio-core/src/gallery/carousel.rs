//! Ordered image list with a focused ("visible") index.

use super::object_url::ObjectUrl;

/// A single gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Uploaded from disk; the bytes live in the gallery's object URL store.
    Local { url: ObjectUrl, name: String },
    /// Picked from the public catalog.
    Public(String),
}

impl ImageRef {
    /// The displayable reference (object URL or catalog URL).
    pub fn src(&self) -> &str {
        match self {
            Self::Local { url, .. } => url.as_str(),
            Self::Public(url) => url,
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Local { name, .. } => name,
            Self::Public(url) => url.rsplit('/').find(|s| !s.is_empty()).unwrap_or(url),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}

/// Insertion-ordered image list plus the carousel focus.
///
/// Immutable: all transitions return a new `Carousel`. The visible index is
/// clamped to `[0, len - 1]` and sits at `0` when the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<ImageRef>,
    visible: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn visible_index(&self) -> usize {
        self.visible
    }

    pub fn focused(&self) -> Option<&ImageRef> {
        self.images.get(self.visible)
    }

    /// Appends `image` and focuses it. Capacity is the caller's concern.
    pub fn with_pushed(self, image: ImageRef) -> Self {
        let mut images = self.images;
        images.push(image);
        let visible = images.len() - 1;
        Self { images, visible }
    }

    /// Removes the image at `index`, shifting later images left.
    ///
    /// Out-of-range indices leave the carousel untouched and return `None`.
    pub fn without(self, index: usize) -> (Self, Option<ImageRef>) {
        if index >= self.images.len() {
            return (self, None);
        }
        let mut images = self.images;
        let removed = images.remove(index);
        let carousel = Self {
            images,
            visible: self.visible,
        }
        .with_visible(self.visible);
        (carousel, Some(removed))
    }

    /// Focuses `index`, clamped to the list bounds.
    pub fn with_visible(self, index: usize) -> Self {
        let visible = if self.images.is_empty() {
            0
        } else {
            index.min(self.images.len() - 1)
        };
        Self { visible, ..self }
    }

    /// Focus one step left. No-op at the first image.
    pub fn prev(self) -> Self {
        let index = self.visible.saturating_sub(1);
        self.with_visible(index)
    }

    /// Focus one step right. No-op at the last image.
    pub fn next(self) -> Self {
        let index = self.visible + 1;
        self.with_visible(index)
    }

    pub fn can_prev(&self) -> bool {
        self.visible > 0
    }

    pub fn can_next(&self) -> bool {
        self.visible + 1 < self.images.len()
    }

    /// Range `(start, end)` of images to draw in a strip that fits
    /// `max_visible` items, keeping the focused image in view.
    pub fn scroll_window(&self, max_visible: usize) -> (usize, usize) {
        visible_window(self.visible, self.images.len(), max_visible)
    }
}

/// Range `(start, end)` of a `total`-item list that fits `max_visible` rows
/// and keeps `selected` in view, centring it once the list scrolls.
pub fn visible_window(selected: usize, total: usize, max_visible: usize) -> (usize, usize) {
    if total <= max_visible {
        return (0, total);
    }
    if max_visible == 0 {
        let at = selected.min(total);
        return (at, at);
    }
    let half = max_visible / 2;
    let start = if selected <= half {
        0
    } else if selected + half >= total {
        total.saturating_sub(max_visible)
    } else {
        selected - half
    };
    let end = (start + max_visible).min(total);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public(url: &str) -> ImageRef {
        ImageRef::Public(url.to_string())
    }

    fn carousel(urls: &[&str]) -> Carousel {
        urls.iter()
            .fold(Carousel::new(), |c, url| c.with_pushed(public(url)))
    }

    #[test]
    fn push_focuses_new_last() {
        let c = carousel(&["a", "b"]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.visible_index(), 1);
        assert_eq!(c.focused(), Some(&public("b")));
    }

    #[test]
    fn remove_shifts_and_keeps_order() {
        let (c, removed) = carousel(&["a", "b", "c"]).without(1);
        assert_eq!(removed, Some(public("b")));
        assert_eq!(c.images(), &[public("a"), public("c")]);
        assert_eq!(c.visible_index(), 1);
    }

    #[test]
    fn remove_last_reclamps_focus() {
        let (c, _) = carousel(&["a", "b", "c"]).without(2);
        assert_eq!(c.visible_index(), 1);
    }

    #[test]
    fn remove_before_focus_keeps_index_when_in_bounds() {
        let c = carousel(&["a", "b", "c"]).with_visible(1);
        let (c, _) = c.without(0);
        assert_eq!(c.visible_index(), 1);
        assert_eq!(c.focused(), Some(&public("c")));
    }

    #[test]
    fn remove_only_image_resets_to_zero() {
        let (c, _) = carousel(&["a"]).without(0);
        assert!(c.is_empty());
        assert_eq!(c.visible_index(), 0);
        assert!(c.focused().is_none());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let original = carousel(&["a", "b"]);
        let (c, removed) = original.clone().without(5);
        assert!(removed.is_none());
        assert_eq!(c, original);
    }

    #[test]
    fn prev_at_start_is_noop() {
        let c = carousel(&["a", "b"]).with_visible(0).prev();
        assert_eq!(c.visible_index(), 0);
        assert!(!c.can_prev());
    }

    #[test]
    fn next_at_end_is_noop() {
        let c = carousel(&["a", "b"]).next();
        assert_eq!(c.visible_index(), 1);
        assert!(!c.can_next());
    }

    #[test]
    fn navigation_on_empty_stays_at_zero() {
        let c = Carousel::new().next().prev();
        assert_eq!(c.visible_index(), 0);
    }

    #[test]
    fn scroll_window_follows_focus() {
        let c = carousel(&["a", "b", "c", "d", "e"]);
        assert_eq!(c.clone().with_visible(0).scroll_window(3), (0, 3));
        assert_eq!(c.clone().with_visible(2).scroll_window(3), (1, 4));
        assert_eq!(c.clone().with_visible(4).scroll_window(3), (2, 5));
        assert_eq!(c.scroll_window(10), (0, 5));
    }

    #[test]
    fn visible_window_keeps_selection_in_view() {
        assert_eq!(visible_window(0, 3, 10), (0, 3));
        assert_eq!(visible_window(9, 20, 5), (7, 12));
        assert_eq!(visible_window(19, 20, 5), (15, 20));
        assert_eq!(visible_window(4, 20, 0), (4, 4));
        assert_eq!(visible_window(0, 0, 0), (0, 0));
    }

    #[test]
    fn public_label_is_last_path_segment() {
        assert_eq!(public("https://cdn.example/img/a.png").label(), "a.png");
        assert_eq!(public("a.png").label(), "a.png");
    }
}
