//! Seam between the controllers and whatever renders them.
//!
//! The browser implementation lives in
//! [`DomSurface`](crate::components::DomSurface); tests use a recording fake.

/// Whether a visual change finishes immediately or signals completion later
/// through [`GalleryViewer::transition_finished`](super::GalleryViewer::transition_finished).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Instant,
    Animating,
}

/// Document geometry of a thumbnail, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Distance from the top of the document.
    pub offset_top: f64,
    pub height: f64,
}

/// Visual operations the controllers need from the page.
pub trait GallerySurface {
    /// Load the image and caption into the overlay and make it visible.
    fn show_preview(&mut self, image_url: &str, caption: &str) -> Transition;

    /// Start hiding the overlay.
    fn hide_preview(&mut self) -> Transition;

    /// A hide that reported [`Transition::Animating`] has completed.
    fn hide_finished(&mut self) {}

    /// Move an inline preview pane to `top` pixels from the document top.
    fn place_preview(&mut self, top: f64);

    /// Toggle the blur effect on the thumbnail container.
    fn set_blur(&mut self, on: bool);

    fn set_selected(&mut self, index: usize, selected: bool);

    fn set_visible(&mut self, index: usize, visible: bool);

    /// Current geometry of a thumbnail, read fresh from layout.
    fn metrics(&self, index: usize) -> Option<Metrics>;
}
