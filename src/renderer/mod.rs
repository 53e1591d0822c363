//! Renderer - Markup output for mounted grids.
//!
//! - [`render_markup`] - One element and its subtree
//! - [`render_tree`] - Every mounted root

mod markup;

pub use markup::{escape, render_markup, render_tree};
