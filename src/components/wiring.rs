//! Event wiring.
//!
//! Binds the page's events to a single [`GalleryViewer`] once, at load.
//! Each feature is wired independently: a page without an overlay still
//! gets filtering, a page without a filter field still gets previews.

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::{ev, prelude::*};
use web_sys::{HtmlElement, HtmlInputElement, MouseEvent, TransitionEvent};

use super::dom_surface::{DomSurface, PreviewElements};
use super::status::{FilterCounts, FilterStatus};
use crate::config::{
    PREVIEW_TRANSITION_EVENTS, PREVIEW_TRANSITION_PROPERTY, ViewerConfig, selectors,
};
use crate::core::error::GalleryError;
use crate::core::{Debouncer, GalleryViewer, keys};
use crate::models::{Gallery, Thumbnail};
use crate::utils::GlooScheduler;
use crate::utils::dom::{self, Page};

type Viewer = StoredValue<GalleryViewer<DomSurface>, LocalStorage>;
type FilterInput = Debouncer<String, GlooScheduler>;

/// A viewer bound to the current document.
///
/// Dropping the handle removes the window listeners, cancels a pending
/// filter update and disposes the viewer. Element listeners stay attached
/// but do nothing afterwards.
pub struct ViewerHandle {
    owner: Owner,
    window_listeners: Vec<WindowListenerHandle>,
    filter_input: Option<Rc<FilterInput>>,
}

impl Drop for ViewerHandle {
    fn drop(&mut self) {
        for listener in self.window_listeners.drain(..) {
            listener.remove();
        }
        if let Some(input) = self.filter_input.take() {
            input.cancel();
        }
        self.owner.cleanup();
    }
}

/// Enhance the current document. Returns `None` outside a browser.
pub fn mount() -> Option<ViewerHandle> {
    let Some(page) = Page::current() else {
        warn!("gallery: no document, viewer not started");
        return None;
    };

    let owner = Owner::new();
    let mut handle = ViewerHandle {
        owner: owner.clone(),
        window_listeners: Vec::new(),
        filter_input: None,
    };
    owner.with(|| wire(&page, &mut handle));
    Some(handle)
}

/// Enhance the current document for the rest of its lifetime.
pub fn start() {
    if let Some(handle) = mount() {
        // The viewer lives as long as the document.
        std::mem::forget(handle);
    }
}

fn wire(page: &Page, handle: &mut ViewerHandle) {
    let config = load_config(page);

    let thumbnails = page.by_class(selectors::THUMBNAIL_CLASS);
    let gallery: Gallery = thumbnails.iter().map(read_thumbnail).collect();
    let total = gallery.len();

    let preview = match PreviewElements::locate(page) {
        Ok(preview) => Some(preview),
        Err(e) => {
            warn!("gallery: preview disabled, {e}");
            None
        }
    };

    let surface = DomSurface::new(
        thumbnails.clone(),
        page.by_class(selectors::CONTAINER_CLASS),
        preview.clone(),
        config.layout,
    );
    let viewer: Viewer = StoredValue::new_local(GalleryViewer::new(gallery, surface, &config));
    let counts = RwSignal::new(FilterCounts::all(total));

    if let Some(preview) = &preview
        && let Err(e) = bind_preview(viewer, &thumbnails, preview, handle)
    {
        warn!("gallery: preview wiring failed, {e}");
    }

    match page.by_id::<HtmlInputElement>(selectors::FILTER_INPUT_ID) {
        Ok(input) => match bind_filter(viewer, &input, &config, counts) {
            Ok(on_input) => handle.filter_input = Some(on_input),
            Err(e) => warn!("gallery: filter wiring failed, {e}"),
        },
        Err(e) => warn!("gallery: filter disabled, {e}"),
    }

    if let Ok(el) = page.by_id::<HtmlElement>(selectors::FILTER_STATUS_ID) {
        mount_to(el, move || view! { <FilterStatus counts=counts /> }).forget();
    }

    log!("gallery: {} thumbnails wired ({:?} layout)", total, config.layout);
}

/// Config from the JSON island, falling back to defaults.
fn load_config(page: &Page) -> ViewerConfig {
    let Some(json) = page.text_of(selectors::CONFIG_ID) else {
        return ViewerConfig::default();
    };
    ViewerConfig::from_json(&json).unwrap_or_else(|e| {
        warn!("gallery: {e}, using defaults");
        ViewerConfig::default()
    })
}

fn read_thumbnail(element: &HtmlElement) -> Thumbnail {
    Thumbnail::from_attributes(
        element.get_attribute(selectors::FULL_IMAGE_ATTR),
        element.get_attribute("alt"),
    )
}

/// Run `f` on the viewer unless its handle has been dropped.
fn with_viewer(viewer: Viewer, f: impl FnOnce(&mut GalleryViewer<DomSurface>)) {
    let _ = viewer.try_update_value(f);
}

fn bind_preview(
    viewer: Viewer,
    thumbnails: &[HtmlElement],
    preview: &PreviewElements,
    handle: &mut ViewerHandle,
) -> Result<(), GalleryError> {
    for (index, thumb) in thumbnails.iter().enumerate() {
        dom::listen(thumb, "click", move |_: MouseEvent| {
            with_viewer(viewer, |v| v.open(index));
        })?;
    }

    // Only the backdrop closes; clicks on the image itself bubble up here too.
    let backdrop = preview.container.clone();
    dom::listen(&preview.container, "click", move |ev: MouseEvent| {
        if dom::is_own_target(&ev, &backdrop) {
            with_viewer(viewer, |v| v.close());
        }
    })?;

    if let Some(button) = &preview.close_button {
        dom::listen(button, "click", move |ev: MouseEvent| {
            ev.stop_propagation();
            with_viewer(viewer, |v| v.close());
        })?;
    }

    for event in PREVIEW_TRANSITION_EVENTS {
        let container = preview.container.clone();
        dom::listen(&preview.container, event, move |ev: TransitionEvent| {
            if dom::is_own_target(&ev, &container)
                && ev.property_name() == PREVIEW_TRANSITION_PROPERTY
            {
                with_viewer(viewer, |v| v.transition_finished());
            }
        })?;
    }

    // Layout changes invalidate the pane position.
    handle
        .window_listeners
        .push(window_event_listener(ev::resize, move |_| {
            with_viewer(viewer, |v| v.close());
        }));

    handle
        .window_listeners
        .push(window_event_listener(ev::keyup, move |ev| {
            if keys::is_escape(&ev.key(), ev.key_code()) {
                with_viewer(viewer, |v| v.close());
            }
        }));

    Ok(())
}

fn bind_filter(
    viewer: Viewer,
    input: &HtmlInputElement,
    config: &ViewerConfig,
    counts: RwSignal<FilterCounts>,
) -> Result<Rc<FilterInput>, GalleryError> {
    let apply = move |query: String| {
        if let Some(shown) = viewer.try_update_value(|v| v.apply_filter(&query)) {
            counts.update(|c| c.shown = shown);
        }
    };

    // Browsers restore form values on back navigation.
    let initial = input.value();
    if !initial.is_empty() {
        apply(initial);
    }

    let on_input = Rc::new(Debouncer::new(
        GlooScheduler,
        config.debounce_ms,
        config.debounce_edge,
        apply,
    ));
    let debounced = Rc::clone(&on_input);
    let field = input.clone();
    dom::listen(input, "input", move |_: web_sys::Event| {
        debounced.call(field.value());
    })?;
    Ok(on_input)
}
