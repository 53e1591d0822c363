//! # fluid-grid
//!
//! Reactive flexbox grid components for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A grid is a container (an outer block plus an inner wrapping flex row)
//! and any number of items. Containers publish their configuration to the
//! items inside them; items overlay their own options and turn the result
//! into CSS. Nothing is measured at mount time: the browser, or the
//! [`layout`] module, wraps items using `flex-basis`, `min-width` and
//! `max-width`.
//!
//! Components are indices into parallel arrays rather than objects, and
//! every element stores a style getter:
//! ```text
//! Props (static | signal | getter) → GridConfig → compute_styles → StyleBag → markup / layout
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Grid configuration, dividers, alignment, option flags
//! - [`style`] - Style bags and the style computation
//! - [`engine`] - Component registry, parallel arrays, grid context
//! - [`primitives`] - `element`, `grid_container`, `grid_item`, `grid`
//! - [`layout`] - Taffy layout of mounted grids
//! - [`renderer`] - Markup output
//!
//! ## Example
//!
//! ```ignore
//! use fluid_grid::*;
//!
//! let cleanup = grid_container(GridContainerProps {
//!     spacing: Some(PropValue::Static(16.0)),
//!     min_width: Some("200px".into()),
//!     children: Some(Box::new(|| {
//!         grid_item(GridItemProps::default());
//!         grid_item(GridItemProps::default());
//!     })),
//!     ..Default::default()
//! });
//!
//! println!("{}", render_tree());
//! cleanup();
//! ```

pub mod engine;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use style::{ComputedStyles, CssValue, Declaration, StyleBag, compute_styles};

pub use engine::{
    GridContext, allocate_index, current_grid_context, get_allocated_count,
    get_allocated_indices, get_current_parent_index, get_id, get_index, get_root_indices,
    is_allocated, pop_parent_context, push_parent_context, release_index, reset_registry,
};

pub use primitives::{
    Cleanup, ElementProps, GridContainerProps, GridItemProps, GridProps, Host, PropValue,
    element, grid, grid_container, grid_item,
};

pub use layout::{
    ComputedLayout, CssError, LayoutBox, LayoutError, LayoutOptions, LayoutResult, TextMetrics,
    compute_layout,
};

pub use renderer::{render_markup, render_tree};
