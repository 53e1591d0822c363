//! Grid Primitives - Component building blocks.
//!
//! - [`element`] - Generic host element
//! - [`grid_container`] - Outer block + inner flex row, publishes configuration
//! - [`grid_item`] - Grid cell that inherits container configuration
//! - [`grid`] - Dispatches to container or item
//!
//! # Architecture
//!
//! Components are indices into parallel arrays. Each component:
//! 1. Allocates an index from the registry
//! 2. Stores a style getter instead of a computed style
//! 3. Renders children with itself as parent
//! 4. Returns a cleanup function
//!
//! Style getters read props every time, so a signal passed as a prop keeps
//! the rendered style current.

mod types;
mod options;
mod element;
mod container;
mod item;
mod grid;

pub use types::*;
pub use element::element;
pub use container::grid_container;
pub use item::grid_item;
pub use grid::grid;
