//! Browser implementation of [`GallerySurface`].
//!
//! Reflects controller state onto the server-rendered page: inline styles
//! for visibility and placement, classes for blur and selection.

use web_sys::{HtmlElement, HtmlImageElement};

use crate::config::{
    OVERLAY_DISPLAY, PREVIEW_TRANSITION_PROPERTY, PreviewLayout, classes, selectors,
};
use crate::core::error::GalleryError;
use crate::core::{GallerySurface, Metrics, Transition};
use crate::utils::dom::{self, Page};

/// The overlay and the elements inside it.
#[derive(Clone)]
pub struct PreviewElements {
    pub container: HtmlElement,
    pub image: HtmlImageElement,
    pub caption: Option<HtmlElement>,
    pub close_button: Option<HtmlElement>,
}

impl PreviewElements {
    /// Find the overlay parts. The container and image are required.
    pub fn locate(page: &Page) -> Result<Self, GalleryError> {
        Ok(Self {
            container: page.by_id(selectors::PREVIEW_CONTAINER_ID)?,
            image: page.by_id(selectors::PREVIEW_IMAGE_ID)?,
            caption: page.by_id(selectors::PREVIEW_CAPTION_ID).ok(),
            close_button: page.first_by_class(selectors::CLOSE_BUTTON_CLASS),
        })
    }
}

pub struct DomSurface {
    thumbnails: Vec<HtmlElement>,
    containers: Vec<HtmlElement>,
    preview: Option<PreviewElements>,
    layout: PreviewLayout,
}

impl DomSurface {
    pub fn new(
        thumbnails: Vec<HtmlElement>,
        containers: Vec<HtmlElement>,
        preview: Option<PreviewElements>,
        layout: PreviewLayout,
    ) -> Self {
        Self {
            thumbnails,
            containers,
            preview,
            layout,
        }
    }

    fn transition_of(container: &HtmlElement) -> Transition {
        if dom::transitions(container, PREVIEW_TRANSITION_PROPERTY) {
            Transition::Animating
        } else {
            Transition::Instant
        }
    }
}

impl GallerySurface for DomSurface {
    fn show_preview(&mut self, image_url: &str, caption: &str) -> Transition {
        let Some(preview) = &self.preview else {
            return Transition::Instant;
        };
        preview.image.set_src(image_url);
        preview.image.set_alt(caption);
        if let Some(el) = &preview.caption {
            el.set_text_content(Some(caption));
        }

        dom::set_style(&preview.container, "display", Some(OVERLAY_DISPLAY));
        // Flush layout so the class change below starts a transition.
        let _ = preview.container.offset_height();
        dom::set_class(&preview.container, classes::OPEN, true);
        Self::transition_of(&preview.container)
    }

    fn hide_preview(&mut self) -> Transition {
        let Some(preview) = &self.preview else {
            return Transition::Instant;
        };
        dom::set_class(&preview.container, classes::OPEN, false);
        let transition = Self::transition_of(&preview.container);
        if transition == Transition::Instant {
            dom::set_style(&preview.container, "display", Some("none"));
        }
        transition
    }

    fn hide_finished(&mut self) {
        if let Some(preview) = &self.preview {
            dom::set_style(&preview.container, "display", Some("none"));
        }
    }

    fn place_preview(&mut self, top: f64) {
        if let Some(preview) = &self.preview {
            dom::set_style(&preview.container, "top", Some(&format!("{top}px")));
        }
    }

    fn set_blur(&mut self, on: bool) {
        for container in &self.containers {
            dom::set_class(container, classes::BLUR, on);
        }
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if self.layout != PreviewLayout::Inline {
            return;
        }
        if let Some(thumb) = self.thumbnails.get(index) {
            dom::set_class(thumb, classes::SELECTED, selected);
        }
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(thumb) = self.thumbnails.get(index) {
            dom::set_style(thumb, "display", (!visible).then_some("none"));
        }
    }

    fn metrics(&self, index: usize) -> Option<Metrics> {
        let thumb = self.thumbnails.get(index)?;
        Some(Metrics {
            offset_top: dom::document_offset_top(thumb),
            height: f64::from(thumb.offset_height()),
        })
    }
}
