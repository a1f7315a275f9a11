//! Filter controller.
//!
//! Shows only the thumbnails whose full image URL contains the query.

use leptos::logging::log;

use super::preview::PreviewController;
use super::surface::GallerySurface;
use crate::models::{FilterState, Gallery};

/// Case-sensitive substring match; the empty query matches everything.
pub fn matches(full_image_url: &str, query: &str) -> bool {
    full_image_url.contains(query)
}

#[derive(Debug, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply `query` to every thumbnail, returning how many remain visible.
    ///
    /// Any open preview is closed first since its thumbnail may be hidden.
    /// The query is used as typed, without trimming.
    pub fn apply<S: GallerySurface>(
        &mut self,
        gallery: &mut Gallery,
        preview: &mut PreviewController,
        surface: &mut S,
        query: &str,
    ) -> usize {
        preview.close(gallery, surface);
        self.state.query = query.to_string();

        for (index, thumb) in gallery.iter_mut().enumerate() {
            thumb.visible = matches(&thumb.full_image_url, query);
            surface.set_visible(index, thumb.visible);
        }

        let shown = gallery.visible_count();
        log!("filter: {:?} shows {}/{}", query, shown, gallery.len());
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewLayout;
    use crate::core::surface::testing::RecordingSurface;
    use crate::models::Thumbnail;

    fn animals() -> Gallery {
        Gallery::new(vec![
            Thumbnail::new("/img/cat.png", "cat"),
            Thumbnail::new("/img/dog.png", "dog"),
            Thumbnail::new("/img/catfish.png", "catfish"),
        ])
    }

    fn run(gallery: &mut Gallery, surface: &mut RecordingSurface, query: &str) -> usize {
        let mut preview = PreviewController::new(PreviewLayout::Overlay, 20.0);
        FilterController::new().apply(gallery, &mut preview, surface, query)
    }

    #[test]
    fn test_substring_filter() {
        let mut gallery = animals();
        let mut surface = RecordingSurface::default();

        assert_eq!(run(&mut gallery, &mut surface, "cat"), 2);
        assert_eq!(gallery.visible_urls(), vec!["/img/cat.png", "/img/catfish.png"]);
        assert_eq!(surface.hidden.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_case_sensitive_untrimmed() {
        let mut gallery = animals();
        let mut surface = RecordingSurface::default();

        assert_eq!(run(&mut gallery, &mut surface, "CAT"), 0);
        assert_eq!(run(&mut gallery, &mut surface, " cat"), 0);
        assert_eq!(run(&mut gallery, &mut surface, "/cat"), 2);
    }

    #[test]
    fn test_empty_query_shows_all() {
        let mut gallery = animals();
        let mut surface = RecordingSurface::default();

        run(&mut gallery, &mut surface, "nothing matches this");
        assert_eq!(gallery.visible_count(), 0);

        assert_eq!(run(&mut gallery, &mut surface, ""), 3);
        assert!(surface.hidden.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut gallery = animals();
        let mut surface = RecordingSurface::default();

        run(&mut gallery, &mut surface, "dog");
        let once = gallery.clone();
        run(&mut gallery, &mut surface, "dog");
        assert_eq!(gallery, once);
    }

    #[test]
    fn test_filter_closes_preview() {
        let mut gallery = animals();
        let mut surface = RecordingSurface::default();
        let mut preview = PreviewController::new(PreviewLayout::Overlay, 20.0);
        let mut filter = FilterController::new();

        preview.open(&mut gallery, &mut surface, 1);
        assert!(preview.is_open());

        filter.apply(&mut gallery, &mut preview, &mut surface, "cat");
        assert!(!preview.is_open());
        assert_eq!(gallery.selected(), None);
        assert!(!surface.blurred);
        assert_eq!(filter.state().query, "cat");
    }
}
