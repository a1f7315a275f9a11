//! Data models for the gallery viewer.
//!
//! Contains the transient UI state types:
//! - [`Thumbnail`], [`Gallery`] - The fixed thumbnail set read at load time
//! - [`PreviewState`] - What the preview overlay currently shows
//! - [`FilterState`] - The last applied filter query

mod filter;
mod gallery;
mod preview;

pub use filter::FilterState;
pub use gallery::{Gallery, Thumbnail};
pub use preview::PreviewState;
