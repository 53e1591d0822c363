//! Visual Arrays
//!
//! What a component renders as:
//! - style: Style bag, usually bound to a getter re-run on every read
//! - attrs: Pass-through host attributes
//! - text: Optional text content
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{Signal, TrackedSlotArray};

use crate::style::StyleBag;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Inline style.
    static STYLE: TrackedSlotArray<StyleBag> = TrackedSlotArray::new(Some(StyleBag::new()));

    /// Attributes forwarded to the host element.
    static ATTRS: TrackedSlotArray<Vec<(String, String)>> = TrackedSlotArray::new(Some(Vec::new()));

    /// Text content (None for elements without text).
    static TEXT: TrackedSlotArray<Option<String>> = TrackedSlotArray::new(Some(None));
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    STYLE.with(|arr| { let _ = arr.peek(index); });
    ATTRS.with(|arr| { let _ = arr.peek(index); });
    TEXT.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    STYLE.with(|arr| arr.clear(index));
    ATTRS.with(|arr| arr.clear(index));
    TEXT.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    STYLE.with(|arr| arr.clear_all());
    ATTRS.with(|arr| arr.clear_all());
    TEXT.with(|arr| arr.clear_all());
}

// =============================================================================
// Style
// =============================================================================

/// Current style at index (reactive).
///
/// A bound getter runs on every read, so the result reflects the latest
/// prop values.
pub fn get_style(index: usize) -> StyleBag {
    STYLE.with(|arr| arr.get(index))
}

/// Set a fixed style at index.
pub fn set_style(index: usize, style: StyleBag) {
    STYLE.with(|arr| arr.set_value(index, style));
}

/// Set style from a getter function.
pub fn set_style_getter<F>(index: usize, getter: F)
where
    F: Fn() -> StyleBag + 'static,
{
    STYLE.with(|arr| arr.set_getter(index, getter));
}

/// Set style from a signal.
pub fn set_style_signal(index: usize, sig: Signal<StyleBag>) {
    STYLE.with(|arr| arr.set_signal(index, sig));
}

// =============================================================================
// Attributes
// =============================================================================

pub fn get_attrs(index: usize) -> Vec<(String, String)> {
    ATTRS.with(|arr| arr.get(index))
}

pub fn set_attrs(index: usize, attrs: Vec<(String, String)>) {
    ATTRS.with(|arr| arr.set_value(index, attrs));
}

// =============================================================================
// Text
// =============================================================================

/// Text content at index, if any (reactive).
pub fn get_text(index: usize) -> Option<String> {
    TEXT.with(|arr| arr.get(index))
}

/// Set text content from a getter function.
pub fn set_text_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    TEXT.with(|arr| arr.set_getter(index, move || Some(getter())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    fn setup() {
        reset();
    }

    #[test]
    fn test_style_bindings() {
        setup();

        assert!(get_style(0).is_empty());

        set_style(0, StyleBag::new().with("color", "red"));
        assert_eq!(get_style(0).to_inline_css(), "color: red");

        let style = signal(StyleBag::new().with("display", "flex"));
        set_style_signal(1, style.clone());
        assert_eq!(get_style(1).to_inline_css(), "display: flex");
        style.set(StyleBag::new().with("display", "none"));
        assert_eq!(get_style(1).to_inline_css(), "display: none");

        clear_at_index(0);
        assert!(get_style(0).is_empty());
    }

    #[test]
    fn test_text_is_optional() {
        setup();

        assert_eq!(get_text(0), None);
        set_text_getter(0, || "caption".to_string());
        assert_eq!(get_text(0), Some("caption".to_string()));
    }
}
