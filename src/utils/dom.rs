//! DOM and Web API utility functions.
//!
//! [`Page`] is the one way the viewer looks elements up; everything else
//! here is a small helper over `web_sys` with errors folded into
//! [`GalleryError`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::core::error::GalleryError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The loaded document the viewer enhances.
#[derive(Clone)]
pub struct Page {
    document: Document,
}

impl Page {
    /// The current document, if running in a browser.
    pub fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }

    /// Element with the given id, cast to `T`.
    pub fn by_id<T: JsCast>(&self, id: &'static str) -> Result<T, GalleryError> {
        self.document
            .get_element_by_id(id)
            .ok_or(GalleryError::MissingElement(id))?
            .dyn_into::<T>()
            .map_err(|_| GalleryError::Dom(format!("#{id} has an unexpected element type")))
    }

    /// All HTML elements carrying `class`, in document order.
    pub fn by_class(&self, class: &str) -> Vec<HtmlElement> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    pub fn first_by_class(&self, class: &str) -> Option<HtmlElement> {
        self.by_class(class).into_iter().next()
    }

    /// Text content of an element, if present.
    pub fn text_of(&self, id: &'static str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }
}

/// Attach a document-lifetime listener to `target`.
///
/// The closure is leaked with `forget()`; listeners are never removed.
pub fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    event: &str,
    handler: impl Fn(E) + 'static,
) -> Result<(), GalleryError> {
    let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    }) as Box<dyn Fn(web_sys::Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| GalleryError::Dom(format!("failed to bind {event}")))?;

    closure.forget();
    Ok(())
}

/// Whether an event was dispatched on `element` itself rather than a child.
pub fn is_own_target(ev: &web_sys::Event, element: &Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|t| &t == element)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Set an inline style property, or remove it when `value` is `None`.
pub fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    let _ = match value {
        Some(v) => style.set_property(property, v),
        None => style.remove_property(property).map(|_| ()),
    };
}

/// Distance of the element's top edge from the top of the document.
pub fn document_offset_top(element: &HtmlElement) -> f64 {
    let scroll = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    element.get_bounding_client_rect().top() + scroll
}

/// Whether the computed style of `element` animates `property`.
pub fn transitions(element: &Element, property: &str) -> bool {
    let Some(style) = window().and_then(|w| w.get_computed_style(element).ok().flatten()) else {
        return false;
    };
    let properties = style.get_property_value("transition-property").unwrap_or_default();
    let durations = style.get_property_value("transition-duration").unwrap_or_default();
    animates(&properties, &durations, property)
}

/// Match a computed `transition-property` list against its durations.
///
/// Durations cycle when the list is shorter than the property list, as in
/// CSS.
pub fn animates(properties: &str, durations: &str, property: &str) -> bool {
    let durations: Vec<f64> = durations.split(',').map(parse_duration_ms).collect();
    if durations.is_empty() {
        return false;
    }
    properties
        .split(',')
        .map(str::trim)
        .enumerate()
        .any(|(i, p)| (p == property || p == "all") && durations[i % durations.len()] > 0.0)
}

/// Parse a CSS time value (`0.3s`, `200ms`) into milliseconds.
pub fn parse_duration_ms(value: &str) -> f64 {
    let value = value.trim();
    if let Some(ms) = value.strip_suffix("ms") {
        ms.trim().parse().unwrap_or(0.0)
    } else if let Some(s) = value.strip_suffix('s') {
        s.trim().parse::<f64>().map(|s| s * 1000.0).unwrap_or(0.0)
    } else {
        0.0
    }
}
