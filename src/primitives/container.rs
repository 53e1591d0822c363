//! Grid Container - Outer block plus inner flex row.
//!
//! The container renders two elements: the host (outer, overflow hidden)
//! and an inner flex row that wraps every child. While the children run it
//! publishes its configuration as a [`GridContext`], which is how items
//! inherit spacing, dividers and width defaults.

use std::rc::Rc;

use crate::engine::{GridContext, get_current_parent_index, with_grid_context};
use crate::style::compute_styles;
use crate::types::{ComponentType, GridOption};

use super::element::{element, render_host};
use super::options::pass_through;
use super::types::{Cleanup, ElementProps, GridContainerProps, PropValue};

/// Create a grid container.
///
/// Returns a cleanup function that releases the container and everything
/// inside it.
pub fn grid_container(props: GridContainerProps) -> Cleanup {
    let config = props.config_getter();

    // Caller style goes on top of the computed outer style
    let outer_config = config.clone();
    let caller_style = props.style;
    let outer_style = move || {
        let computed = compute_styles(&outer_config()).outer_container;
        match &caller_style {
            Some(style) => computed.merge(&style.get()),
            None => computed,
        }
    };

    let children = props.children;
    let inner_row = move || {
        let inner_config = config.clone();
        element(ElementProps {
            kind: ComponentType::GridRow,
            style: Some(PropValue::Getter(Rc::new(move || {
                compute_styles(&inner_config()).inner_container
            }))),
            children: Some(Box::new(move || {
                let row = get_current_parent_index().unwrap_or_default();
                let context = Rc::new(GridContext::new(row, config));
                if let Some(children) = children {
                    with_grid_context(context, children);
                }
            })),
            ..Default::default()
        });
    };

    render_host(
        props.host,
        ElementProps {
            id: props.id,
            kind: ComponentType::GridContainer,
            style: Some(PropValue::Getter(Rc::new(outer_style))),
            attrs: pass_through(props.attrs, GridOption::CONTAINER_OPTIONS),
            on_click: props.on_click,
            children: Some(Box::new(inner_row)),
            ..Default::default()
        },
    )
}

// =============================================================================
// Tests
// =============================================================================
