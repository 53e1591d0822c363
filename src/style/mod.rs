//! Grid styles - CSS declaration bags and the style computer.
//!
//! - [`StyleBag`] - ordered CSS declarations with `!important` support
//! - [`compute_styles`] - pure mapping from [`GridConfig`](crate::types::GridConfig)
//!   to [`ComputedStyles`]

mod bag;
mod compute;

pub use bag::*;
pub use compute::*;
