//! Layout Module - Positions for mounted grids.
//!
//! The grid components only produce CSS. This module turns that CSS into
//! boxes using [Taffy](https://github.com/DioxusLabs/taffy), so the wrap
//! behavior of a grid can be checked without a browser.
//!
//! # Architecture
//!
//! 1. Reads each element's style bag (style getters run here)
//! 2. Converts declarations to Taffy styles
//! 3. Mirrors the element tree into a Taffy tree
//! 4. Measures text leaves with fixed-advance metrics
//! 5. Extracts computed boxes into [`ComputedLayout`]
//!
//! # Example
//!
//! ```ignore
//! use fluid_grid::layout::{compute_layout, LayoutOptions};
//!
//! let layout = compute_layout(&LayoutOptions::with_width(400.0))?;
//! println!("{:?}", layout.get(2));
//! ```

mod types;
mod css;
mod taffy_bridge;

pub use types::*;
pub use taffy_bridge::compute_layout;
