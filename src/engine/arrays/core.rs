//! Core Arrays
//!
//! Structural component state:
//! - componentType: What occupies the index
//! - parentIndex: Parent in the element tree
//! - children: Child indices in creation order
//! - tag: Host element tag name
//! - placeholder: Grid item marked as an empty spacer
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::TrackedSlotArray;

use crate::types::ComponentType;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// What kind of component occupies the index.
    static COMPONENT_TYPE: TrackedSlotArray<ComponentType> = TrackedSlotArray::new(Some(ComponentType::None));

    /// Parent index (None at root).
    static PARENT_INDEX: TrackedSlotArray<Option<usize>> = TrackedSlotArray::new(Some(None));

    /// Child indices, in creation order.
    static CHILDREN: TrackedSlotArray<Vec<usize>> = TrackedSlotArray::new(Some(Vec::new()));

    /// Host tag name.
    static TAG: TrackedSlotArray<String> = TrackedSlotArray::new(Some(String::new()));

    /// Empty spacer flag.
    static PLACEHOLDER: TrackedSlotArray<bool> = TrackedSlotArray::new(Some(false));
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| { let _ = arr.peek(index); });
    PARENT_INDEX.with(|arr| { let _ = arr.peek(index); });
    CHILDREN.with(|arr| { let _ = arr.peek(index); });
    TAG.with(|arr| { let _ = arr.peek(index); });
    PLACEHOLDER.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index, detaching it from its parent.
pub fn clear_at_index(index: usize) {
    if let Some(parent) = PARENT_INDEX.with(|arr| arr.peek(index)) {
        remove_child(parent, index);
    }
    COMPONENT_TYPE.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    CHILDREN.with(|arr| arr.clear(index));
    TAG.with(|arr| arr.clear(index));
    PLACEHOLDER.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    CHILDREN.with(|arr| arr.clear_all());
    TAG.with(|arr| arr.clear_all());
    PLACEHOLDER.with(|arr| arr.clear_all());
}

// =============================================================================
// Component Type
// =============================================================================

/// Get component type at index (reactive).
pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.get(index))
}

pub fn set_component_type(index: usize, component_type: ComponentType) {
    COMPONENT_TYPE.with(|arr| arr.set_value(index, component_type));
}

// =============================================================================
// Parent / Children
// =============================================================================

/// Get parent index (reactive).
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index))
}

fn remove_child(parent: usize, child: usize) {
    CHILDREN.with(|arr| {
        let mut children = arr.peek(parent);
        if children.contains(&child) {
            children.retain(|&c| c != child);
            arr.set_value(parent, children);
        }
    });
}

/// Set the parent of `index`, appending it to the parent's child list.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    if let Some(old) = PARENT_INDEX.with(|arr| arr.peek(index)) {
        remove_child(old, index);
    }
    PARENT_INDEX.with(|arr| arr.set_value(index, parent));
    if let Some(parent) = parent {
        CHILDREN.with(|arr| {
            let mut children = arr.peek(parent);
            children.push(index);
            arr.set_value(parent, children);
        });
    }
}

/// Child indices of `index`, in creation order (reactive).
pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|arr| arr.get(index))
}

// =============================================================================
// Tag
// =============================================================================

pub fn get_tag(index: usize) -> String {
    TAG.with(|arr| arr.get(index))
}

pub fn set_tag(index: usize, tag: &str) {
    TAG.with(|arr| arr.set_value(index, tag.to_string()));
}

// =============================================================================
// Placeholder
// =============================================================================

pub fn is_placeholder(index: usize) -> bool {
    PLACEHOLDER.with(|arr| arr.get(index))
}

pub fn set_placeholder(index: usize, placeholder: bool) {
    PLACEHOLDER.with(|arr| arr.set_value(index, placeholder));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset();
    }

    #[test]
    fn test_children_follow_parent_changes() {
        setup();

        set_parent_index(1, Some(0));
        set_parent_index(2, Some(0));
        set_parent_index(3, Some(0));
        assert_eq!(get_children(0), vec![1, 2, 3]);

        set_parent_index(2, Some(1));
        assert_eq!(get_children(0), vec![1, 3]);
        assert_eq!(get_children(1), vec![2]);

        clear_at_index(3);
        assert_eq!(get_children(0), vec![1]);
        assert_eq!(get_parent_index(3), None);
    }

    #[test]
    fn test_defaults_for_unset_slots() {
        setup();

        assert_eq!(get_component_type(7), ComponentType::None);
        assert_eq!(get_tag(7), "");
        assert!(!is_placeholder(7));
        assert!(get_children(7).is_empty());
    }
}
