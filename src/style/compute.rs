//! Style computer - grid configuration to CSS.
//!
//! A pure function from [`GridConfig`] to the three style bags a grid needs:
//! the outer container, the inner flex row, and each item.
//!
//! # Spacing model
//!
//! Spacing is implemented as padding on every item (half the spacing on each
//! side) and an equal negative margin on the inner row, so the outermost
//! items line up with the container edges. Dividers are left/top borders on
//! every item; the inner row's left/top margin also absorbs one divider
//! width so the leading divider sits outside the visible area.
//!
//! ```text
//! outer (block, overflow hidden)
//! └── inner (flex row wrap, margin -s/2)
//!     ├── item (padding s/2, border-left divider)
//!     └── item
//! ```

use crate::types::{CssLength, GridConfig};

use super::bag::StyleBag;

/// The three style bags computed for one configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedStyles {
    pub outer_container: StyleBag,
    pub inner_container: StyleBag,
    pub item: StyleBag,
}

/// Compute container and item styles from a configuration.
///
/// Total and deterministic: every unset option has a default and malformed
/// lengths are passed through as written.
pub fn compute_styles(config: &GridConfig) -> ComputedStyles {
    let column_spacing = config
        .column_spacing
        .or(config.spacing)
        .unwrap_or(0.0)
        .max(0.0);
    let row_spacing = config.row_spacing.or(config.spacing).unwrap_or(0.0).max(0.0);
    let column_divider = config.column_divider.resolve();
    let row_divider = config.row_divider.resolve();

    let flex_basis = non_empty(&config.flex_basis);
    let max_width = non_empty(&config.max_width);

    // Padding eats into the item, so a fixed min width has to include it.
    let min_width = non_empty(&config.min_width).map(|min| {
        if min.is_fixed() && column_spacing > 0.0 {
            format!("calc({min} + {column_spacing}px)")
        } else {
            min.to_string()
        }
    });

    let container_overflow = non_empty(&config.container_overflow)
        .map(CssLength::to_string)
        .unwrap_or_else(|| "0".to_string());

    // Outer container

    let outer_container = StyleBag::new()
        .with("box-sizing", "border-box")
        .with("position", "relative")
        .with("display", "block")
        .with("overflow", "hidden")
        .with(
            "padding",
            format!("0 {container_overflow} {container_overflow}"),
        )
        .with("margin", format!("0 -{container_overflow}"));

    // Inner container

    let mut inner_container = StyleBag::new()
        .with("box-sizing", "border-box")
        .with("position", "relative")
        .with("display", "flex")
        .with("flex-flow", "row wrap");
    if let Some(justify) = config.justify_content {
        inner_container.set("justify-content", justify.as_css());
    }
    if let Some(align) = config.align_content {
        inner_container.set("align-content", align.as_css());
    }
    if let Some(align) = config.align_items {
        inner_container.set("align-items", align.as_css());
    }

    // Item

    let basis = flex_basis
        .map(CssLength::to_string)
        .or_else(|| min_width.clone())
        .or_else(|| max_width.map(CssLength::to_string))
        .unwrap_or_else(|| "auto".to_string());

    // A max-width basis must not grow past itself
    let flex_grow = config.flex_grow.filter(|g| *g >= 0.0).unwrap_or(
        if max_width.is_some() && min_width.is_none() {
            0.0
        } else {
            1.0
        },
    );
    // A min-width basis must not shrink below itself
    let flex_shrink = config
        .flex_shrink
        .filter(|s| *s >= 0.0)
        .unwrap_or(if min_width.is_some() { 0.0 } else { 1.0 });

    let mut item = StyleBag::new()
        .with("box-sizing", "border-box")
        .with("flex-basis", basis)
        .with("flex-grow", flex_grow)
        .with("flex-shrink", flex_shrink);
    item.set_important("margin", "0");
    item.set("display", "flex");
    item.set("flex-flow", "column nowrap");

    if let (Some(_), Some(min)) = (flex_basis, &min_width) {
        item.set("min-width", min.as_str());
    }
    match (max_width, &min_width) {
        (Some(max), _) if flex_basis.is_some() || min_width.is_some() => {
            item.set("max-width", max.as_str());
        }
        // Lets a non-shrinking item still fit a row narrower than its minimum
        (_, Some(_)) => item.set("max-width", "100%"),
        _ => {}
    }

    if column_divider.width > 0.0 {
        item.set("border-left", column_divider.to_border());
    }
    if row_divider.width > 0.0 {
        item.set("border-top", row_divider.to_border());
    }

    if column_spacing > 0.0 {
        let half = column_spacing / 2.0;
        item.set("padding-left", px(half));
        item.set("padding-right", px(half));
        inner_container.set("margin-left", px(-(half + column_divider.width)));
        inner_container.set("margin-right", px(-half));
    }
    if row_spacing > 0.0 {
        let half = row_spacing / 2.0;
        item.set("padding-top", px(half));
        item.set("padding-bottom", px(half));
        inner_container.set("margin-top", px(-(half + row_divider.width)));
        inner_container.set("margin-bottom", px(-half));
    }

    ComputedStyles {
        outer_container,
        inner_container,
        item,
    }
}

fn non_empty(value: &Option<CssLength>) -> Option<&CssLength> {
    value.as_ref().filter(|v| !v.is_empty())
}

fn px(value: f32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CssValue;
    use crate::types::{AlignItems, DividerSpec, JustifyContent, LineStyle};

    fn text(value: &str) -> Option<CssValue> {
        Some(CssValue::from(value))
    }

    fn number(value: f32) -> Option<CssValue> {
        Some(CssValue::Number(value))
    }

    #[test]
    fn test_defaults() {
        let styles = compute_styles(&GridConfig::default());

        assert_eq!(
            styles.outer_container.to_inline_css(),
            "box-sizing: border-box; position: relative; display: block; \
             overflow: hidden; padding: 0 0 0; margin: 0 -0"
        );
        assert_eq!(
            styles.inner_container.to_inline_css(),
            "box-sizing: border-box; position: relative; display: flex; flex-flow: row wrap"
        );
        assert_eq!(
            styles.item.to_inline_css(),
            "box-sizing: border-box; flex-basis: auto; flex-grow: 1; flex-shrink: 1; \
             margin: 0 !important; display: flex; flex-flow: column nowrap"
        );
    }

    #[test]
    fn test_spacing_applies_to_both_axes() {
        let styles = compute_styles(&GridConfig {
            spacing: Some(16.0),
            ..Default::default()
        });

        assert_eq!(styles.item.get("padding-left"), text("8px").as_ref());
        assert_eq!(styles.item.get("padding-right"), text("8px").as_ref());
        assert_eq!(styles.item.get("padding-top"), text("8px").as_ref());
        assert_eq!(styles.item.get("padding-bottom"), text("8px").as_ref());
        assert_eq!(styles.item.get("flex-basis"), text("auto").as_ref());
        assert_eq!(styles.item.get("flex-grow"), number(1.0).as_ref());
        assert_eq!(styles.item.get("flex-shrink"), number(1.0).as_ref());

        assert_eq!(styles.inner_container.get("margin-left"), text("-8px").as_ref());
        assert_eq!(styles.inner_container.get("margin-right"), text("-8px").as_ref());
        assert_eq!(styles.inner_container.get("margin-top"), text("-8px").as_ref());
        assert_eq!(styles.inner_container.get("margin-bottom"), text("-8px").as_ref());
    }

    #[test]
    fn test_axis_spacing_overrides_spacing() {
        let styles = compute_styles(&GridConfig {
            spacing: Some(10.0),
            column_spacing: Some(0.0),
            row_spacing: Some(15.0),
            ..Default::default()
        });

        assert!(!styles.item.contains("padding-left"));
        assert!(!styles.inner_container.contains("margin-left"));
        assert_eq!(styles.item.get("padding-top"), text("7.5px").as_ref());
        assert_eq!(styles.inner_container.get("margin-top"), text("-7.5px").as_ref());
    }

    #[test]
    fn test_zero_spacing_emits_no_negative_margins() {
        for spacing in [None, Some(0.0)] {
            let styles = compute_styles(&GridConfig {
                spacing,
                column_divider: DividerSpec::width(2.0),
                ..Default::default()
            });
            for side in ["margin-left", "margin-right", "margin-top", "margin-bottom"] {
                assert!(!styles.inner_container.contains(side));
            }
        }
    }

    #[test]
    fn test_divider_offsets_margin() {
        let styles = compute_styles(&GridConfig {
            spacing: Some(16.0),
            column_divider: DividerSpec::width(2.0).with_color("blue"),
            row_divider: DividerSpec::width(1.0).with_style(LineStyle::Dashed),
            ..Default::default()
        });

        assert_eq!(styles.item.get("border-left"), text("2px solid blue").as_ref());
        assert_eq!(styles.item.get("border-top"), text("1px dashed #CFCFCF").as_ref());
        assert_eq!(styles.inner_container.get("margin-left"), text("-10px").as_ref());
        assert_eq!(styles.inner_container.get("margin-right"), text("-8px").as_ref());
        assert_eq!(styles.inner_container.get("margin-top"), text("-9px").as_ref());
    }

    #[test]
    fn test_zero_width_divider_emits_no_border() {
        let styles = compute_styles(&GridConfig {
            column_divider: DividerSpec::width(0.0).with_color("red"),
            row_divider: DividerSpec::default().with_style(LineStyle::Double),
            ..Default::default()
        });
        assert!(!styles.item.contains("border-left"));
        assert!(!styles.item.contains("border-top"));
    }

    #[test]
    fn test_fixed_min_width_includes_spacing() {
        let styles = compute_styles(&GridConfig {
            min_width: Some("200px".into()),
            column_spacing: Some(16.0),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("calc(200px + 16px)").as_ref());
    }

    #[test]
    fn test_percent_min_width_untouched() {
        let styles = compute_styles(&GridConfig {
            min_width: Some("50%".into()),
            column_spacing: Some(16.0),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("50%").as_ref());
    }

    #[test]
    fn test_max_width_only() {
        let styles = compute_styles(&GridConfig {
            max_width: Some("300px".into()),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("300px").as_ref());
        assert_eq!(styles.item.get("flex-grow"), number(0.0).as_ref());
        assert_eq!(styles.item.get("flex-shrink"), number(1.0).as_ref());
        assert!(!styles.item.contains("max-width"));
    }

    #[test]
    fn test_min_width_only() {
        let styles = compute_styles(&GridConfig {
            min_width: Some("150px".into()),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("150px").as_ref());
        assert_eq!(styles.item.get("flex-grow"), number(1.0).as_ref());
        assert_eq!(styles.item.get("flex-shrink"), number(0.0).as_ref());
        assert_eq!(styles.item.get("max-width"), text("100%").as_ref());
        assert!(!styles.item.contains("min-width"));
    }

    #[test]
    fn test_basis_with_min_and_max() {
        let styles = compute_styles(&GridConfig {
            flex_basis: Some("400px".into()),
            min_width: Some("50%".into()),
            max_width: Some("600px".into()),
            flex_grow: Some(99.0),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("400px").as_ref());
        assert_eq!(styles.item.get("min-width"), text("50%").as_ref());
        assert_eq!(styles.item.get("max-width"), text("600px").as_ref());
        assert_eq!(styles.item.get("flex-grow"), number(99.0).as_ref());
    }

    #[test]
    fn test_explicit_flex_factors_and_negative_fallback() {
        let explicit = compute_styles(&GridConfig {
            min_width: Some("100px".into()),
            flex_shrink: Some(2.0),
            flex_grow: Some(0.0),
            ..Default::default()
        });
        assert_eq!(explicit.item.get("flex-shrink"), number(2.0).as_ref());
        assert_eq!(explicit.item.get("flex-grow"), number(0.0).as_ref());

        let negative = compute_styles(&GridConfig {
            flex_grow: Some(-1.0),
            ..Default::default()
        });
        assert_eq!(negative.item.get("flex-grow"), number(1.0).as_ref());
    }

    #[test]
    fn test_empty_lengths_are_unset() {
        let styles = compute_styles(&GridConfig {
            flex_basis: Some("".into()),
            min_width: Some("".into()),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("auto").as_ref());
        assert_eq!(styles.item.get("flex-shrink"), number(1.0).as_ref());
    }

    #[test]
    fn test_container_overflow_and_alignment() {
        let styles = compute_styles(&GridConfig {
            container_overflow: Some("4px".into()),
            justify_content: Some(JustifyContent::SpaceBetween),
            align_items: Some(AlignItems::Center),
            ..Default::default()
        });
        assert_eq!(styles.outer_container.get("padding"), text("0 4px 4px").as_ref());
        assert_eq!(styles.outer_container.get("margin"), text("0 -4px").as_ref());
        assert_eq!(
            styles.inner_container.get("justify-content"),
            text("space-between").as_ref()
        );
        assert_eq!(styles.inner_container.get("align-items"), text("center").as_ref());
        assert!(!styles.inner_container.contains("align-content"));
    }

    #[test]
    fn test_idempotent() {
        let config = GridConfig {
            spacing: Some(12.0),
            min_width: Some("10rem".into()),
            row_divider: DividerSpec::width(1.0),
            ..Default::default()
        };
        assert_eq!(compute_styles(&config), compute_styles(&config));
    }

    #[test]
    fn test_malformed_lengths_pass_through() {
        let styles = compute_styles(&GridConfig {
            flex_basis: Some("banana".into()),
            min_width: Some("12 parsecs".into()),
            column_spacing: Some(8.0),
            ..Default::default()
        });
        assert_eq!(styles.item.get("flex-basis"), text("banana").as_ref());
        assert_eq!(styles.item.get("min-width"), text("12 parsecs").as_ref());
    }
}
