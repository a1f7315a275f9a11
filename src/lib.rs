//! Image gallery lightbox for server-rendered index pages.
//!
//! Clicking a thumbnail enlarges it in a preview overlay; clicking the
//! backdrop, resizing the window or pressing Escape closes it. A text field
//! filters thumbnails by their full image URL.

pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use components::{ViewerHandle, mount, start};
