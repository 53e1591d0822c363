//! Interaction Arrays
//!
//! Event handlers forwarded to host elements. Only click is carried.
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use std::fmt;
use std::rc::Rc;

use spark_signals::TrackedSlotArray;

/// Click handler.
pub type ClickHandler = Rc<dyn Fn()>;

/// Slot cell for a handler. Two cells are equal when they share a handler.
#[derive(Clone)]
struct HandlerCell(Rc<dyn Fn()>);

impl PartialEq for HandlerCell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HandlerCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandlerCell")
    }
}

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Click handler.
    static ON_CLICK: TrackedSlotArray<Option<HandlerCell>> = TrackedSlotArray::new(Some(None));
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    ON_CLICK.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    ON_CLICK.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    ON_CLICK.with(|arr| arr.clear_all());
}

// =============================================================================
// Click
// =============================================================================

pub fn set_on_click(index: usize, handler: ClickHandler) {
    ON_CLICK.with(|arr| arr.set_value(index, Some(HandlerCell(handler))));
}

pub fn has_on_click(index: usize) -> bool {
    ON_CLICK.with(|arr| arr.peek(index).is_some())
}

/// Invoke the click handler at index.
///
/// Returns false when the component has no handler.
pub fn dispatch_click(index: usize) -> bool {
    match ON_CLICK.with(|arr| arr.peek(index)) {
        Some(HandlerCell(handler)) => {
            handler();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_click() {
        reset();

        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        set_on_click(3, Rc::new(move || counter.set(counter.get() + 1)));

        assert!(has_on_click(3));
        assert!(dispatch_click(3));
        assert!(dispatch_click(3));
        assert_eq!(count.get(), 2);

        clear_at_index(3);
        assert!(!has_on_click(3));
        assert!(!dispatch_click(3));
    }
}
