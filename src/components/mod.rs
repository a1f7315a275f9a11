//! Browser-facing pieces built on `web_sys` and Leptos.
//!
//! - [`start`] / [`mount`] - Event wiring, the entry points
//! - [`DomSurface`] - Renders viewer state onto the page
//! - [`FilterStatus`] - "N of M images" counter

mod dom_surface;
mod status;
mod wiring;

pub use dom_surface::{DomSurface, PreviewElements};
pub use status::{FilterCounts, FilterStatus};
pub use wiring::{ViewerHandle, mount, start};
