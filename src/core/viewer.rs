//! The gallery viewer: single owner of all viewer state.

use super::filter::FilterController;
use super::preview::{Phase, PreviewController};
use super::surface::GallerySurface;
use crate::config::ViewerConfig;
use crate::models::{FilterState, Gallery, PreviewState};

/// Gallery, preview and filter state together with the surface they render to.
///
/// All mutation goes through this type so the preview invariant (open
/// implies exactly one selected thumbnail) is maintained in one place.
pub struct GalleryViewer<S> {
    gallery: Gallery,
    preview: PreviewController,
    filter: FilterController,
    surface: S,
}

impl<S: GallerySurface> GalleryViewer<S> {
    pub fn new(gallery: Gallery, surface: S, config: &ViewerConfig) -> Self {
        Self {
            gallery,
            preview: PreviewController::new(config.layout, config.inline_padding_px),
            filter: FilterController::new(),
            surface,
        }
    }

    pub fn open(&mut self, index: usize) {
        self.preview.open(&mut self.gallery, &mut self.surface, index);
    }

    pub fn close(&mut self) {
        self.preview.close(&mut self.gallery, &mut self.surface);
    }

    pub fn transition_finished(&mut self) {
        self.preview
            .transition_finished(&mut self.gallery, &mut self.surface);
    }

    /// Returns the number of thumbnails left visible.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        self.filter
            .apply(&mut self.gallery, &mut self.preview, &mut self.surface, query)
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn preview_state(&self) -> &PreviewState {
        self.preview.state()
    }

    pub fn phase(&self) -> Phase {
        self.preview.phase()
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filter.state()
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}
