//! Thumbnail set and selection tracking.

/// A clickable small image standing in for a full-size image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// Full image URL from the `data-original` attribute (empty when missing).
    pub full_image_url: String,
    /// Caption text from the `alt` attribute.
    pub alt_text: String,
    /// Filter-controlled visibility.
    pub visible: bool,
    /// Whether this thumbnail is the one shown in the preview.
    pub selected: bool,
}

impl Thumbnail {
    /// Create a visible, unselected thumbnail.
    pub fn new(full_image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            full_image_url: full_image_url.into(),
            alt_text: alt_text.into(),
            visible: true,
            selected: false,
        }
    }

    /// Build from raw element attributes, tolerating missing ones.
    pub fn from_attributes(full_image_url: Option<String>, alt_text: Option<String>) -> Self {
        Self::new(full_image_url.unwrap_or_default(), alt_text.unwrap_or_default())
    }

    /// Whether this thumbnail has something to show in the preview.
    pub fn has_image(&self) -> bool {
        !self.full_image_url.trim().is_empty()
    }
}

/// The fixed, ordered set of thumbnails on the page.
///
/// Indices are stable for the lifetime of the document; thumbnails are never
/// added or removed after load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    thumbnails: Vec<Thumbnail>,
}

impl Gallery {
    pub fn new(thumbnails: Vec<Thumbnail>) -> Self {
        Self { thumbnails }
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Thumbnail> {
        self.thumbnails.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Thumbnail> {
        self.thumbnails.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Thumbnail> {
        self.thumbnails.iter_mut()
    }

    /// Index of the selected thumbnail, if any.
    pub fn selected(&self) -> Option<usize> {
        self.thumbnails.iter().position(|t| t.selected)
    }

    /// Mark `index` as selected and every other thumbnail as unselected.
    ///
    /// Returns the indices whose selection flag changed. Out of range
    /// indices only clear the current selection.
    pub fn select(&mut self, index: usize) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, thumb) in self.thumbnails.iter_mut().enumerate() {
            let selected = i == index;
            if thumb.selected != selected {
                thumb.selected = selected;
                changed.push(i);
            }
        }
        changed
    }

    /// Clear every selection flag, returning the indices that were selected.
    pub fn clear_selection(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, thumb) in self.thumbnails.iter_mut().enumerate() {
            if thumb.selected {
                thumb.selected = false;
                changed.push(i);
            }
        }
        changed
    }

    pub fn visible_count(&self) -> usize {
        self.thumbnails.iter().filter(|t| t.visible).count()
    }

    /// Full image URLs of the visible thumbnails, in page order.
    pub fn visible_urls(&self) -> Vec<&str> {
        self.thumbnails
            .iter()
            .filter(|t| t.visible)
            .map(|t| t.full_image_url.as_str())
            .collect()
    }
}

impl FromIterator<Thumbnail> for Gallery {
    fn from_iter<I: IntoIterator<Item = Thumbnail>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gallery {
        Gallery::new(vec![
            Thumbnail::new("/img/a.png", "a"),
            Thumbnail::new("/img/b.png", "b"),
            Thumbnail::new("/img/c.png", "c"),
        ])
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut gallery = sample();
        assert_eq!(gallery.select(0), vec![0]);
        assert_eq!(gallery.select(2), vec![0, 2]);
        assert_eq!(gallery.selected(), Some(2));
        assert_eq!(gallery.iter().filter(|t| t.selected).count(), 1);
    }

    #[test]
    fn test_clear_selection() {
        let mut gallery = sample();
        gallery.select(1);
        assert_eq!(gallery.clear_selection(), vec![1]);
        assert_eq!(gallery.selected(), None);
        assert!(gallery.clear_selection().is_empty());
    }

    #[test]
    fn test_from_attributes_missing_url() {
        let thumb = Thumbnail::from_attributes(None, Some("caption".into()));
        assert!(!thumb.has_image());
        assert_eq!(thumb.alt_text, "caption");
        assert!(thumb.visible);

        let blank = Thumbnail::from_attributes(Some("   ".into()), None);
        assert!(!blank.has_image());
    }
}
