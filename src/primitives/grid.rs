//! Grid - Single entry point for containers and items.

use super::container::grid_container;
use super::item::grid_item;
use super::types::{Cleanup, GridProps};

/// Create a grid container when `props.container` is set, otherwise an item.
///
/// Container-only options (alignment, overflow) are ignored on the item path.
pub fn grid(props: GridProps) -> Cleanup {
    if props.container {
        grid_container(props.into())
    } else {
        grid_item(props.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, visual};
    use crate::engine::reset_registry;
    use crate::primitives::PropValue;
    use crate::style::CssValue;
    use crate::types::ComponentType;

    #[test]
    fn test_grid_dispatch() {
        reset_registry();

        let _cleanup = grid(GridProps {
            container: true,
            column_spacing: Some(PropValue::Static(10.0)),
            children: Some(Box::new(|| {
                grid(GridProps {
                    spacing: Some(PropValue::Static(40.0)),
                    min_width: Some("120px".into()),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::GridContainer);
        assert_eq!(core::get_component_type(2), ComponentType::GridItem);

        let item = visual::get_style(2);
        assert_eq!(item.get("padding-left"), Some(&CssValue::from("5px")));
        // Column spacing inherited, row spacing from the item's own spacing
        assert_eq!(item.get("padding-top"), Some(&CssValue::from("20px")));
        assert_eq!(item.get("flex-basis"), Some(&CssValue::from("calc(120px + 10px)")));
    }
}
