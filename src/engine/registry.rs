//! Component Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of component indices:
//! - ID ↔ Index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - ReactiveSet of allocated indices (deriveds react to mount/unmount)
//! - Parent context stack for nested component creation

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::ReactiveSet;

use super::arrays;
use super::context;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map component ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to component ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Set of currently allocated indices. Reading it from a derived
    /// tracks mounts and unmounts.
    static ALLOCATED_INDICES: ReactiveSet<usize> = ReactiveSet::new();

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };

    /// Stack of parent indices for nested component creation.
    static PARENT_STACK: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

// =============================================================================
// Parent Context Stack
// =============================================================================

/// Get current parent index (None at root).
pub fn get_current_parent_index() -> Option<usize> {
    PARENT_STACK.with(|stack| stack.borrow().last().copied())
}

/// Push a parent index onto the stack.
pub fn push_parent_context(index: usize) {
    PARENT_STACK.with(|stack| stack.borrow_mut().push(index))
}

/// Pop a parent index from the stack.
pub fn pop_parent_context() {
    PARENT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    })
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate an index for a new component.
///
/// # Arguments
/// * `id` - Optional component ID. If not provided, one is generated.
///
/// # Returns
/// The allocated index. An ID that is already registered returns its
/// existing index.
pub fn allocate_index(id: Option<&str>) -> usize {
    let component_id = match id {
        Some(id) => id.to_string(),
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("c{}", *counter);
            *counter += 1;
            id
        }),
    };

    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&component_id).copied());
    if let Some(index) = existing {
        return index;
    }

    // Reuse free index or allocate new
    let index = FREE_INDICES.with(|free| {
        free.borrow_mut().pop().unwrap_or_else(|| {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        })
    });

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(component_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, component_id);
    });
    ALLOCATED_INDICES.with(|set| {
        set.insert(index);
    });

    arrays::ensure_all_capacity(index);
    tracing::trace!(index, "allocated component index");

    index
}

/// Release an index back to the pool.
///
/// Also recursively releases all children.
pub fn release_index(index: usize) {
    let id = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned());
    let Some(id) = id else { return };

    for child_index in arrays::core::get_children(index) {
        release_index(child_index);
    }

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&id);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    ALLOCATED_INDICES.with(|set| {
        set.remove(&index);
    });

    arrays::clear_all_at_index(index);

    FREE_INDICES.with(|free| free.borrow_mut().push(index));
    tracing::trace!(index, "released component index");

    // Nothing mounted any more: drop the arrays entirely
    let is_empty = ALLOCATED_INDICES.with(|set| set.is_empty());
    if is_empty {
        arrays::reset_all_arrays();
        FREE_INDICES.with(|free| free.borrow_mut().clear());
        NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for a component ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Get all currently allocated indices, ascending.
pub fn get_allocated_indices() -> Vec<usize> {
    let mut indices = ALLOCATED_INDICES.with(|set| set.iter());
    indices.sort_unstable();
    indices
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.contains(&index))
}

/// Get the count of currently allocated components.
pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.len())
}

/// Allocated components without a parent, ascending.
pub fn get_root_indices() -> Vec<usize> {
    get_allocated_indices()
        .into_iter()
        .filter(|&index| arrays::core::get_parent_index(index).is_none())
        .collect()
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ALLOCATED_INDICES.with(|set| set.clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    PARENT_STACK.with(|stack| stack.borrow_mut().clear());
    context::reset_grid_context();
    arrays::reset_all_arrays();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_index() {
        reset_registry();

        let idx1 = allocate_index(None);
        let idx2 = allocate_index(None);
        let idx3 = allocate_index(Some("my_grid"));

        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);
        assert_eq!(idx3, 2);

        assert!(is_allocated(0));
        assert!(is_allocated(2));
        assert!(!is_allocated(3));
        assert_eq!(get_allocated_count(), 3);
    }

    #[test]
    fn test_release_and_reuse() {
        reset_registry();

        let idx1 = allocate_index(None);
        let idx2 = allocate_index(None);

        release_index(idx1);
        assert!(!is_allocated(idx1));
        assert!(is_allocated(idx2));

        let idx3 = allocate_index(None);
        assert_eq!(idx3, idx1);
    }

    #[test]
    fn test_release_is_recursive() {
        reset_registry();

        let parent = allocate_index(None);
        let child = allocate_index(None);
        let grandchild = allocate_index(None);
        let sibling = allocate_index(None);
        arrays::core::set_parent_index(child, Some(parent));
        arrays::core::set_parent_index(grandchild, Some(child));

        release_index(parent);
        assert!(!is_allocated(child));
        assert!(!is_allocated(grandchild));
        assert!(is_allocated(sibling));
        assert_eq!(get_root_indices(), vec![sibling]);
    }

    #[test]
    fn test_id_mapping() {
        reset_registry();

        let idx = allocate_index(Some("photos"));
        assert_eq!(get_index("photos"), Some(idx));
        assert_eq!(get_id(idx), Some("photos".to_string()));
        assert_eq!(allocate_index(Some("photos")), idx);
    }

    #[test]
    fn test_parent_context() {
        reset_registry();

        assert_eq!(get_current_parent_index(), None);
        push_parent_context(5);
        push_parent_context(10);
        assert_eq!(get_current_parent_index(), Some(10));
        pop_parent_context();
        assert_eq!(get_current_parent_index(), Some(5));
        pop_parent_context();
        assert_eq!(get_current_parent_index(), None);
    }
}
