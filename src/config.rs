//! Application configuration.
//!
//! Centralizes the constants the viewer binds to and the tunables that a
//! page may override through a JSON island:
//!
//! ```html
//! <script type="application/json" id="gallery-config">
//!   { "debounce_ms": 400, "layout": "inline" }
//! </script>
//! ```

use serde::Deserialize;

use crate::core::error::GalleryError;

// =============================================================================
// Document Contract
// =============================================================================

/// Element ids and class names the page must provide.
pub mod selectors {
    /// Class carried by every thumbnail.
    pub const THUMBNAIL_CLASS: &str = "image-card";
    /// Wrapper around the thumbnail grid, target of the blur effect.
    pub const CONTAINER_CLASS: &str = "image-container";
    /// Overlay (or inline pane) holding the enlarged image.
    pub const PREVIEW_CONTAINER_ID: &str = "preview-container";
    /// Image element inside the overlay.
    pub const PREVIEW_IMAGE_ID: &str = "preview-pane";
    /// Caption element inside the overlay.
    pub const PREVIEW_CAPTION_ID: &str = "preview-caption";
    /// Optional dedicated close button.
    pub const CLOSE_BUTTON_CLASS: &str = "preview-close-button";
    /// Filter text input.
    pub const FILTER_INPUT_ID: &str = "filter";
    /// Optional element the filter status counter is mounted into.
    pub const FILTER_STATUS_ID: &str = "filter-status";
    /// Optional JSON config island.
    pub const CONFIG_ID: &str = "gallery-config";
    /// Attribute holding the full image URL.
    pub const FULL_IMAGE_ATTR: &str = "data-original";
}

/// CSS classes toggled by the viewer.
pub mod classes {
    /// Applied to the thumbnail container while the preview is open.
    pub const BLUR: &str = "blur";
    /// Applied to the active thumbnail in inline layout.
    pub const SELECTED: &str = "image-card-selected";
    /// Applied to the preview container while shown; CSS may transition
    /// its opacity.
    pub const OPEN: &str = "preview-open";
}

/// Property whose transition on the preview container drives show and hide.
pub const PREVIEW_TRANSITION_PROPERTY: &str = "opacity";

/// Events that end a preview transition. A hide reversed before the show
/// got anywhere is cancelled rather than ended.
pub const PREVIEW_TRANSITION_EVENTS: [&str; 2] = ["transitionend", "transitioncancel"];

// =============================================================================
// Defaults
// =============================================================================

/// Quiet period before a filter keystroke burst is applied.
pub const FILTER_DEBOUNCE_MS: u32 = 250;

/// Gap between a thumbnail and the inline preview pane below it.
pub const INLINE_PREVIEW_PADDING_PX: f64 = 20.0;

/// Overlay `display` value while visible (flex-centred image).
pub const OVERLAY_DISPLAY: &str = "flex";

// =============================================================================
// Runtime Configuration
// =============================================================================

/// How the preview is placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewLayout {
    /// Fixed full-viewport overlay, no positioning maths.
    #[default]
    Overlay,
    /// Pane rendered below the clicked thumbnail.
    Inline,
}

/// Which end of a keystroke burst the debouncer fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebounceEdge {
    /// Fire once, with the last input, after the quiet period.
    #[default]
    Trailing,
    /// Fire immediately, suppress calls until the quiet period passes.
    Leading,
}

/// Viewer tunables, every field optional in the JSON island.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub debounce_ms: u32,
    pub debounce_edge: DebounceEdge,
    pub layout: PreviewLayout,
    pub inline_padding_px: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: FILTER_DEBOUNCE_MS,
            debounce_edge: DebounceEdge::default(),
            layout: PreviewLayout::default(),
            inline_padding_px: INLINE_PREVIEW_PADDING_PX,
        }
    }
}

impl ViewerConfig {
    /// Parse the contents of the config island.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| GalleryError::Config(e.to_string()))
    }
}
