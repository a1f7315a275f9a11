//! Preview overlay state.

/// What the preview overlay is showing.
///
/// When `is_open` is true exactly one thumbnail in the
/// [`Gallery`](super::Gallery) is selected and `current_image_url` is its
/// full image URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub is_open: bool,
    pub current_image_url: String,
    pub current_caption: String,
}

impl PreviewState {
    /// State for an overlay showing the given image.
    pub fn showing(image_url: &str, caption: &str) -> Self {
        Self {
            is_open: true,
            current_image_url: image_url.to_string(),
            current_caption: caption.to_string(),
        }
    }

    /// Reset to the closed, empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
