//! Grid Item - A cell of the grid.
//!
//! Reads the enclosing container's [`GridContext`](crate::engine::GridContext)
//! at creation, overlays its own options, and renders its host with the
//! computed item style. The style getter re-reads both on every render.

use std::rc::Rc;

use crate::engine::current_grid_context;
use crate::style::compute_styles;
use crate::types::{ComponentType, GridOption};

use super::element::render_host;
use super::options::pass_through;
use super::types::{Cleanup, ElementProps, GridItemProps, PropValue};

/// Create a grid item.
///
/// Outside any container only the item's own options apply.
pub fn grid_item(props: GridItemProps) -> Cleanup {
    let context = current_grid_context();
    let own = props.config_getter();
    let caller_style = props.style;

    let style = move || {
        let inherited = context
            .as_ref()
            .map(|c| c.item_defaults())
            .unwrap_or_default();
        let computed = compute_styles(&inherited.merged_with(&own())).item;
        match &caller_style {
            Some(style) => computed.merge(&style.get()),
            None => computed,
        }
    };

    render_host(
        props.host,
        ElementProps {
            id: props.id,
            kind: ComponentType::GridItem,
            style: Some(PropValue::Getter(Rc::new(style))),
            attrs: pass_through(props.attrs, GridOption::ITEM_OPTIONS),
            on_click: props.on_click,
            placeholder: props.placeholder,
            children: props.children,
            ..Default::default()
        },
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, interaction, visual};
    use crate::engine::reset_registry;
    use crate::primitives::{GridContainerProps, grid_container};
    use crate::style::{CssValue, StyleBag};
    use crate::types::DividerSpec;
    use spark_signals::signal;
    use std::cell::Cell;

    fn setup() {
        reset_registry();
    }

    fn text(value: &str) -> Option<CssValue> {
        Some(CssValue::from(value))
    }

    #[test]
    fn test_item_inherits_spacing() {
        setup();

        let _cleanup = grid_container(GridContainerProps {
            spacing: Some(PropValue::Static(16.0)),
            children: Some(Box::new(|| {
                grid_item(GridItemProps::default());
            })),
            ..Default::default()
        });

        let item = visual::get_style(2);
        assert_eq!(core::get_component_type(2), ComponentType::GridItem);
        assert_eq!(item.get("padding-left"), text("8px").as_ref());
        assert_eq!(item.get("padding-right"), text("8px").as_ref());
        assert_eq!(item.get("padding-top"), text("8px").as_ref());
        assert_eq!(item.get("padding-bottom"), text("8px").as_ref());
        assert_eq!(item.get("flex-basis"), text("auto").as_ref());
        assert_eq!(item.get("flex-grow"), Some(&CssValue::Number(1.0)));
        assert_eq!(item.get("flex-shrink"), Some(&CssValue::Number(1.0)));
    }

    #[test]
    fn test_item_overrides_container_default() {
        setup();

        let _cleanup = grid_container(GridContainerProps {
            min_width: Some("150px".into()),
            children: Some(Box::new(|| {
                grid_item(GridItemProps::default());
                grid_item(GridItemProps {
                    min_width: Some("300px".into()),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        assert_eq!(visual::get_style(2).get("flex-basis"), text("150px").as_ref());
        assert_eq!(visual::get_style(3).get("flex-basis"), text("300px").as_ref());
    }

    #[test]
    fn test_item_divider_merges_with_container_divider() {
        setup();

        let _cleanup = grid_container(GridContainerProps {
            column_divider: Some(PropValue::Static(DividerSpec::default().with_color("blue"))),
            children: Some(Box::new(|| {
                grid_item(GridItemProps {
                    column_divider: Some(PropValue::Static(DividerSpec::width(2.0))),
                    ..Default::default()
                });
                grid_item(GridItemProps::default());
            })),
            ..Default::default()
        });

        assert_eq!(visual::get_style(2).get("border-left"), text("2px solid blue").as_ref());
        assert!(!visual::get_style(3).contains("border-left"));
    }

    #[test]
    fn test_nearest_container_wins() {
        setup();

        let _cleanup = grid_container(GridContainerProps {
            spacing: Some(PropValue::Static(20.0)),
            children: Some(Box::new(|| {
                grid_item(GridItemProps {
                    children: Some(Box::new(|| {
                        grid_container(GridContainerProps {
                            spacing: Some(PropValue::Static(4.0)),
                            children: Some(Box::new(|| {
                                grid_item(GridItemProps::default());
                            })),
                            ..Default::default()
                        });
                    })),
                    ..Default::default()
                });
                grid_item(GridItemProps::default());
            })),
            ..Default::default()
        });

        // 0 outer, 1 row, 2 item, 3 nested outer, 4 nested row, 5 nested item, 6 item
        assert_eq!(visual::get_style(2).get("padding-left"), text("10px").as_ref());
        assert_eq!(visual::get_style(5).get("padding-left"), text("2px").as_ref());
        assert_eq!(visual::get_style(6).get("padding-left"), text("10px").as_ref());
    }

    #[test]
    fn test_item_without_container() {
        setup();

        let _cleanup = grid_item(GridItemProps {
            max_width: Some("300px".into()),
            ..Default::default()
        });

        let item = visual::get_style(0);
        assert_eq!(item.get("flex-basis"), text("300px").as_ref());
        assert_eq!(item.get("flex-grow"), Some(&CssValue::Number(0.0)));
        assert!(!item.contains("padding-left"));
    }

    #[test]
    fn test_caller_style_cannot_override_margin() {
        setup();

        let _cleanup = grid_item(GridItemProps {
            style: Some(PropValue::Static(
                StyleBag::new().with("margin", "12px").with("background", "#F9F9F9"),
            )),
            ..Default::default()
        });

        let item = visual::get_style(0);
        assert_eq!(item.get("margin"), text("0").as_ref());
        assert_eq!(item.get("background"), text("#F9F9F9").as_ref());
    }

    #[test]
    fn test_caller_margin_longhand_is_dropped() {
        setup();

        let _cleanup = grid_item(GridItemProps {
            style: Some(PropValue::Static(
                StyleBag::new().with("margin-left", "40px").with("padding-left", "3px"),
            )),
            ..Default::default()
        });

        let item = visual::get_style(0);
        assert!(!item.contains("margin-left"));
        assert_eq!(item.get("padding-left"), text("3px").as_ref());
    }

    #[test]
    fn test_item_spacing_overrides_container() {
        setup();

        let _cleanup = grid_container(GridContainerProps {
            spacing: Some(PropValue::Static(16.0)),
            children: Some(Box::new(|| {
                grid_item(GridItemProps {
                    spacing: Some(PropValue::Static(4.0)),
                    ..Default::default()
                });
                grid_item(GridItemProps {
                    row_spacing: Some(PropValue::Static(0.0)),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        let own = visual::get_style(2);
        assert_eq!(own.get("padding-left"), text("2px").as_ref());
        assert_eq!(own.get("padding-top"), text("2px").as_ref());

        let rows_off = visual::get_style(3);
        assert_eq!(rows_off.get("padding-left"), text("8px").as_ref());
        assert!(!rows_off.contains("padding-top"));
    }

    #[test]
    fn test_container_signal_reaches_items() {
        setup();

        let min_width = signal(crate::types::CssLength::from("150px"));
        let min_width_prop = min_width.clone();
        let _cleanup = grid_container(GridContainerProps {
            min_width: Some(PropValue::Signal(min_width_prop)),
            children: Some(Box::new(|| {
                grid_item(GridItemProps::default());
            })),
            ..Default::default()
        });

        assert_eq!(visual::get_style(2).get("flex-basis"), text("150px").as_ref());
        min_width.set("250px".into());
        assert_eq!(visual::get_style(2).get("flex-basis"), text("250px").as_ref());
    }

    #[test]
    fn test_placeholder_and_pass_through() {
        setup();

        let clicked = Rc::new(Cell::new(false));
        let clicked_clone = clicked.clone();
        let _cleanup = grid_item(GridItemProps {
            placeholder: true,
            attrs: vec![
                ("placeholder".to_string(), "true".to_string()),
                ("flex-grow".to_string(), "2".to_string()),
                ("data-slot".to_string(), "empty".to_string()),
            ],
            on_click: Some(Rc::new(move || clicked_clone.set(true))),
            ..Default::default()
        });

        assert!(core::is_placeholder(0));
        assert_eq!(
            visual::get_attrs(0),
            vec![("data-slot".to_string(), "empty".to_string())]
        );
        assert!(interaction::dispatch_click(0));
        assert!(clicked.get());
    }
}
