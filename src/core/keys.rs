//! Keyboard classification.

/// Legacy `keyCode` of the Escape key.
pub const ESCAPE_KEY_CODE: u32 = 27;

/// Whether a keyup closes the preview.
///
/// Accepts both the modern `key` value and the legacy key code, since
/// some browsers report only one of them for synthetic events.
pub fn is_escape(key: &str, key_code: u32) -> bool {
    key == "Escape" || key == "Esc" || key_code == ESCAPE_KEY_CODE
}
