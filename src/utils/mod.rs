//! Browser utilities.
//!
//! Provides:
//! - [`dom::Page`] - Element lookup over the loaded document
//! - [`GlooScheduler`] - `setTimeout` timers for debouncing

pub mod dom;
mod timer;

pub use timer::GlooScheduler;
