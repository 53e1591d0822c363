//! Parallel Arrays
//!
//! All mounted component state lives in these arrays. Each array index
//! corresponds to one component allocated by the registry.
//!
//! # Array Categories
//!
//! - **core**: Component type, parent/children, tag, placeholder flag
//! - **visual**: Style getter, pass-through attributes, text
//! - **interaction**: Forwarded event handlers

pub mod core;
pub mod visual;
pub mod interaction;

use self::core as core_arrays;
use self::visual as visual_arrays;
use self::interaction as interaction_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    visual_arrays::ensure_capacity(index);
    interaction_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    visual_arrays::clear_at_index(index);
    interaction_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically once every component has been released.
pub fn reset_all_arrays() {
    core_arrays::reset();
    visual_arrays::reset();
    interaction_arrays::reset();
}
