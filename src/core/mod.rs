//! Core viewer logic, independent of the browser.
//!
//! This module provides:
//! - [`GalleryViewer`] owning the gallery, preview and filter state
//! - [`PreviewController`] and its [`Phase`] machine
//! - [`FilterController`] substring filtering
//! - [`Debouncer`] over an abstract [`Scheduler`]
//! - [`GallerySurface`], the seam to the rendering side

mod debounce;
pub mod error;
mod filter;
pub mod keys;
mod preview;
mod surface;
mod viewer;

pub use debounce::{Debouncer, Scheduler};
pub use filter::{FilterController, matches};
pub use preview::{Phase, PreviewController, inline_top};
pub use surface::{GallerySurface, Metrics, Transition};
pub use viewer::GalleryViewer;
