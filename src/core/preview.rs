//! Preview controller.
//!
//! Drives the enlarged-image overlay through an explicit phase machine:
//!
//! ```text
//! Closed --open--> Opening --finished--> Open
//!   ^                 |                   |
//!   |               close               close / open(other)
//!   |                 v                   v
//!   +---finished--- Closing { next } <----+
//! ```
//!
//! A new thumbnail is never shown until the previous close has finished, so
//! layout metrics for inline placement are always read after the old pane
//! is gone. Surfaces without animation report [`Transition::Instant`] and
//! the machine passes straight through the intermediate phases.

use leptos::logging::{log, warn};

use super::error::GalleryError;
use super::surface::{GallerySurface, Metrics, Transition};
use crate::config::PreviewLayout;
use crate::models::{Gallery, PreviewState};

/// Animation phase of the preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    /// Show animation running for the thumbnail at this index.
    Opening(usize),
    Open(usize),
    /// Hide animation running; `next` is opened once it finishes.
    Closing { next: Option<usize> },
}

/// Top offset of an inline pane placed below a thumbnail.
pub fn inline_top(metrics: Metrics, padding: f64) -> f64 {
    metrics.offset_top + metrics.height + padding
}

/// Owns the [`PreviewState`] and the phase machine.
#[derive(Debug)]
pub struct PreviewController {
    state: PreviewState,
    phase: Phase,
    layout: PreviewLayout,
    padding: f64,
}

impl PreviewController {
    pub fn new(layout: PreviewLayout, padding: f64) -> Self {
        Self {
            state: PreviewState::default(),
            phase: Phase::Closed,
            layout,
            padding,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Check that the thumbnail at `index` can be previewed.
    pub fn can_open(gallery: &Gallery, index: usize) -> Result<(), GalleryError> {
        let thumb = gallery
            .get(index)
            .ok_or(GalleryError::UnknownThumbnail(index))?;
        if !thumb.has_image() {
            return Err(GalleryError::MissingImageUrl(index));
        }
        if !thumb.visible {
            return Err(GalleryError::HiddenThumbnail(index));
        }
        Ok(())
    }

    /// Show the thumbnail at `index`.
    ///
    /// Thumbnails that cannot be previewed are ignored. If another
    /// thumbnail is showing it is closed first and this one is opened when
    /// the close completes.
    pub fn open<S: GallerySurface>(
        &mut self,
        gallery: &mut Gallery,
        surface: &mut S,
        index: usize,
    ) {
        if let Err(e) = Self::can_open(gallery, index) {
            warn!("preview: open ignored, {e}");
            return;
        }

        match self.phase {
            Phase::Closed => self.begin_open(gallery, surface, index),
            Phase::Open(current) | Phase::Opening(current) if current == index => {}
            Phase::Open(_) | Phase::Opening(_) => {
                self.begin_close(gallery, surface, Some(index))
            }
            Phase::Closing { .. } => self.phase = Phase::Closing { next: Some(index) },
        }
    }

    /// Hide the preview. A no-op when nothing is showing.
    ///
    /// While a close is already animating this only drops the queued open.
    pub fn close<S: GallerySurface>(&mut self, gallery: &mut Gallery, surface: &mut S) {
        match self.phase {
            Phase::Closed => {}
            Phase::Closing { .. } => self.phase = Phase::Closing { next: None },
            Phase::Open(_) | Phase::Opening(_) => self.begin_close(gallery, surface, None),
        }
    }

    /// Completion signal from the surface's current animation.
    pub fn transition_finished<S: GallerySurface>(
        &mut self,
        gallery: &mut Gallery,
        surface: &mut S,
    ) {
        match self.phase {
            Phase::Opening(index) => self.phase = Phase::Open(index),
            Phase::Closing { next } => {
                self.phase = Phase::Closed;
                surface.hide_finished();
                if let Some(index) = next {
                    self.open_queued(gallery, surface, index);
                }
            }
            Phase::Closed | Phase::Open(_) => {}
        }
    }

    fn open_queued<S: GallerySurface>(
        &mut self,
        gallery: &mut Gallery,
        surface: &mut S,
        index: usize,
    ) {
        match Self::can_open(gallery, index) {
            Ok(()) => self.begin_open(gallery, surface, index),
            Err(e) => warn!("preview: queued open dropped, {e}"),
        }
    }

    fn begin_open<S: GallerySurface>(
        &mut self,
        gallery: &mut Gallery,
        surface: &mut S,
        index: usize,
    ) {
        let Some(thumb) = gallery.get(index) else {
            return;
        };
        log!("preview: opening {}", thumb.full_image_url);
        self.state = PreviewState::showing(&thumb.full_image_url, &thumb.alt_text);

        for changed in gallery.select(index) {
            surface.set_selected(changed, changed == index);
        }
        surface.set_blur(true);

        if self.layout == PreviewLayout::Inline
            && let Some(metrics) = surface.metrics(index)
        {
            surface.place_preview(inline_top(metrics, self.padding));
        }

        let transition =
            surface.show_preview(&self.state.current_image_url, &self.state.current_caption);
        self.phase = match transition {
            Transition::Instant => Phase::Open(index),
            Transition::Animating => Phase::Opening(index),
        };
    }

    fn begin_close<S: GallerySurface>(
        &mut self,
        gallery: &mut Gallery,
        surface: &mut S,
        next: Option<usize>,
    ) {
        log!("preview: closing");
        self.state.clear();

        for changed in gallery.clear_selection() {
            surface.set_selected(changed, false);
        }
        surface.set_blur(false);

        match surface.hide_preview() {
            Transition::Instant => {
                self.phase = Phase::Closed;
                if let Some(index) = next {
                    self.open_queued(gallery, surface, index);
                }
            }
            Transition::Animating => self.phase = Phase::Closing { next },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::testing::RecordingSurface;
    use crate::models::Thumbnail;

    fn gallery() -> Gallery {
        Gallery::new(vec![
            Thumbnail::new("/img/a.png", "Cat A"),
            Thumbnail::new("/img/b.png", "Dog B"),
            Thumbnail::from_attributes(None, Some("broken".into())),
        ])
    }

    fn overlay() -> PreviewController {
        PreviewController::new(PreviewLayout::Overlay, 20.0)
    }

    #[test]
    fn test_open_then_close_restores_state() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::default();
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 0);
        assert!(preview.is_open());
        assert_eq!(preview.state().current_image_url, "/img/a.png");
        assert_eq!(preview.state().current_caption, "Cat A");
        assert!(gallery.get(0).unwrap().selected);
        assert!(surface.blurred);
        assert!(surface.overlay_visible);

        preview.close(&mut gallery, &mut surface);
        assert_eq!(preview.state(), &PreviewState::default());
        assert_eq!(gallery.selected(), None);
        assert!(!surface.blurred);
        assert!(!surface.overlay_visible);
        assert_eq!(preview.phase(), Phase::Closed);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::default();
        let mut preview = overlay();

        preview.close(&mut gallery, &mut surface);
        assert_eq!(preview.state(), &PreviewState::default());
        assert_eq!(surface.hide_calls, 0);
    }

    #[test]
    fn test_switch_thumbnail_without_closing() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::default();
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 0);
        preview.open(&mut gallery, &mut surface, 1);

        assert_eq!(preview.state().current_image_url, "/img/b.png");
        assert_eq!(preview.state().current_caption, "Dog B");
        assert!(!gallery.get(0).unwrap().selected);
        assert!(gallery.get(1).unwrap().selected);
        assert_eq!(preview.phase(), Phase::Open(1));
        assert_eq!(surface.hide_calls, 1);
    }

    #[test]
    fn test_missing_url_is_noop() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::default();
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 2);
        preview.open(&mut gallery, &mut surface, 99);
        assert!(!preview.is_open());
        assert_eq!(surface.show_calls, 0);
        assert_eq!(gallery.selected(), None);
    }

    #[test]
    fn test_hidden_thumbnail_cannot_open() {
        let mut gallery = gallery();
        gallery.iter_mut().next().unwrap().visible = false;
        assert_eq!(
            PreviewController::can_open(&gallery, 0),
            Err(GalleryError::HiddenThumbnail(0))
        );
    }

    #[test]
    fn test_animated_switch_waits_for_close() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::animated();
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 0);
        assert_eq!(preview.phase(), Phase::Opening(0));
        preview.transition_finished(&mut gallery, &mut surface);
        assert_eq!(preview.phase(), Phase::Open(0));

        preview.open(&mut gallery, &mut surface, 1);
        assert_eq!(preview.phase(), Phase::Closing { next: Some(1) });
        assert!(!preview.is_open());
        assert_eq!(surface.show_calls, 1);

        preview.transition_finished(&mut gallery, &mut surface);
        assert_eq!(surface.hides_finished, 1);
        assert_eq!(preview.phase(), Phase::Opening(1));
        assert_eq!(surface.show_calls, 2);
        assert_eq!(preview.state().current_image_url, "/img/b.png");
        assert_eq!(gallery.selected(), Some(1));
    }

    #[test]
    fn test_close_cancels_queued_open() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::animated();
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 0);
        preview.open(&mut gallery, &mut surface, 1);
        preview.close(&mut gallery, &mut surface);
        assert_eq!(preview.phase(), Phase::Closing { next: None });

        preview.transition_finished(&mut gallery, &mut surface);
        assert_eq!(preview.phase(), Phase::Closed);
        assert_eq!(surface.show_calls, 1);
        assert_eq!(gallery.selected(), None);
    }

    #[test]
    fn test_close_right_after_animated_open() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::animated();
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 0);
        preview.close(&mut gallery, &mut surface);
        assert_eq!(preview.phase(), Phase::Closing { next: None });

        // The reversed show transition is cancelled; that ends the hide.
        preview.transition_finished(&mut gallery, &mut surface);
        assert_eq!(preview.phase(), Phase::Closed);
        assert_eq!(surface.hides_finished, 1);

        // A late end event from the same hide changes nothing.
        preview.transition_finished(&mut gallery, &mut surface);
        assert_eq!(surface.hides_finished, 1);

        preview.open(&mut gallery, &mut surface, 1);
        assert_eq!(preview.phase(), Phase::Opening(1));
        assert_eq!(surface.show_calls, 2);
        assert_eq!(gallery.selected(), Some(1));
    }

    #[test]
    fn test_repeated_open_close_keeps_opening() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::animated();
        let mut preview = overlay();

        for round in 1..=5 {
            preview.open(&mut gallery, &mut surface, 1);
            assert_eq!(preview.phase(), Phase::Opening(1));
            assert_eq!(surface.show_calls, round);
            preview.close(&mut gallery, &mut surface);
            preview.transition_finished(&mut gallery, &mut surface);
            assert_eq!(preview.phase(), Phase::Closed);
        }

        preview.open(&mut gallery, &mut surface, 1);
        assert!(preview.is_open());
        assert!(surface.overlay_visible);
        assert_eq!(surface.show_calls, 6);
        assert_eq!(surface.hides_finished, 5);
    }

    #[test]
    fn test_inline_layout_places_below_thumbnail() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::default();
        surface.set_metrics(1, Metrics { offset_top: 300.0, height: 200.0 });
        let mut preview = PreviewController::new(PreviewLayout::Inline, 20.0);

        preview.open(&mut gallery, &mut surface, 1);
        assert_eq!(surface.placed_at, Some(520.0));
        assert!(surface.selected.contains(&1));
    }

    #[test]
    fn test_overlay_layout_does_not_place() {
        let mut gallery = gallery();
        let mut surface = RecordingSurface::default();
        surface.set_metrics(0, Metrics { offset_top: 10.0, height: 10.0 });
        let mut preview = overlay();

        preview.open(&mut gallery, &mut surface, 0);
        assert_eq!(surface.placed_at, None);
    }
}
