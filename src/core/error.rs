//! Error types for the gallery viewer.
//!
//! None of these are fatal to the page: controllers turn rejections into
//! no-ops and wiring skips the affected feature.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// A required element is absent from the document.
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    /// Thumbnail has no usable `data-original` attribute.
    #[error("thumbnail {0} has no full image url")]
    MissingImageUrl(usize),
    /// Index does not refer to a thumbnail.
    #[error("no thumbnail at index {0}")]
    UnknownThumbnail(usize),
    /// Thumbnail is filtered out and cannot be previewed.
    #[error("thumbnail {0} is hidden by the filter")]
    HiddenThumbnail(usize),
    /// Config island could not be parsed.
    #[error("invalid gallery config: {0}")]
    Config(String),
    /// Browser API call failed.
    #[error("dom error: {0}")]
    Dom(String),
}
