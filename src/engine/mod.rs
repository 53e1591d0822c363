//! Engine - Component registry, grid context and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context
//! - Context: Ambient grid configuration published by containers
//! - Arrays: Parallel arrays for component state
//!
//! # Architecture
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: GridContainer (parent=None, tag=div,  style=outer getter)
//! Index 1: GridRow       (parent=0,    tag=div,  style=inner getter)
//! Index 2: GridItem      (parent=1,    tag=li,   style=item getter)
//! ```

mod registry;
mod context;
pub mod arrays;

pub use registry::*;
pub use context::*;
