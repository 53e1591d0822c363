//! Core types for fluid-grid.
//!
//! Configuration values that flow from props into the style computer, plus
//! the small vocabulary the registry and renderer share.

use std::fmt;

// =============================================================================
// Alignment Keywords
// =============================================================================

/// Justify content (main axis distribution of the grid row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// CSS keyword.
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }
}

/// Align content (distribution of wrapped rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignContent {
    #[default]
    Stretch,
    Center,
    FlexStart,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

impl AlignContent {
    /// CSS keyword.
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Center => "center",
            Self::FlexStart => "flex-start",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }
}

/// Align items (cross axis alignment of items within a row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

impl AlignItems {
    /// CSS keyword.
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::Baseline => "baseline",
        }
    }
}

// =============================================================================
// Dividers
// =============================================================================

/// Border line style used for dividers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
    Hidden,
    None,
}

impl LineStyle {
    /// CSS keyword.
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
            Self::Groove => "groove",
            Self::Ridge => "ridge",
            Self::Inset => "inset",
            Self::Outset => "outset",
            Self::Hidden => "hidden",
            Self::None => "none",
        }
    }
}

/// Default divider color.
pub const DEFAULT_DIVIDER_COLOR: &str = "#CFCFCF";

/// A fully resolved divider: width in pixels, line style and color.
///
/// A width of 0 means no divider is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    pub width: f32,
    pub style: LineStyle,
    pub color: String,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            width: 0.0,
            style: LineStyle::Solid,
            color: DEFAULT_DIVIDER_COLOR.to_string(),
        }
    }
}

impl Divider {
    /// The `border-*` shorthand for this divider, e.g. `1px solid #CFCFCF`.
    pub fn to_border(&self) -> String {
        format!("{}px {} {}", self.width, self.style.as_css(), self.color)
    }
}

/// A partially specified divider.
///
/// Unset fields fall back to whatever they are merged over, and finally to
/// the [`Divider`] defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DividerSpec {
    pub width: Option<f32>,
    pub style: Option<LineStyle>,
    pub color: Option<String>,
}

impl DividerSpec {
    /// Divider of the given width with default style and color.
    pub fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            ..Default::default()
        }
    }

    /// Set the line style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Field-wise overlay: values set in `over` win.
    pub fn merged_with(&self, over: &DividerSpec) -> DividerSpec {
        DividerSpec {
            width: over.width.or(self.width),
            style: over.style.or(self.style),
            color: over.color.clone().or_else(|| self.color.clone()),
        }
    }

    /// Resolve against the defaults.
    ///
    /// Negative widths are clamped to 0.
    pub fn resolve(&self) -> Divider {
        let defaults = Divider::default();
        Divider {
            width: self.width.unwrap_or(defaults.width).max(0.0),
            style: self.style.unwrap_or(defaults.style),
            color: self.color.clone().unwrap_or(defaults.color),
        }
    }
}

// =============================================================================
// CSS Length
// =============================================================================

/// A CSS length string (`200px`, `50%`, `12rem`, `calc(...)`).
///
/// Stored uninterpreted; the style computer only inspects it to decide whether
/// it is a fixed length. Validation is left to whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CssLength(String);

impl CssLength {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the value ends in a digit followed by `px`, `em` or `rem`.
    ///
    /// Percentages and anything else are not fixed.
    pub fn is_fixed(&self) -> bool {
        ["px", "rem", "em"].iter().any(|unit| {
            self.0
                .strip_suffix(unit)
                .and_then(|number| number.chars().last())
                .is_some_and(|c| c.is_ascii_digit())
        })
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CssLength {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// Grid Configuration
// =============================================================================

/// The flat set of options that affect grid layout.
///
/// Every field is optional; the style computer defaults whatever is unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridConfig {
    pub justify_content: Option<JustifyContent>,
    pub align_content: Option<AlignContent>,
    pub align_items: Option<AlignItems>,

    /// Spacing in pixels, used for both axes unless overridden.
    pub spacing: Option<f32>,
    pub column_spacing: Option<f32>,
    pub row_spacing: Option<f32>,

    pub column_divider: DividerSpec,
    pub row_divider: DividerSpec,

    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<CssLength>,
    pub min_width: Option<CssLength>,
    pub max_width: Option<CssLength>,

    /// Room left around the grid for item content (shadows) to overflow into.
    pub container_overflow: Option<CssLength>,
}

impl GridConfig {
    /// Overlay `over` onto `self`: every option set in `over` wins.
    ///
    /// Dividers merge per field.
    pub fn merged_with(&self, over: &GridConfig) -> GridConfig {
        GridConfig {
            justify_content: over.justify_content.or(self.justify_content),
            align_content: over.align_content.or(self.align_content),
            align_items: over.align_items.or(self.align_items),
            spacing: over.spacing.or(self.spacing),
            column_spacing: over.column_spacing.or(self.column_spacing),
            row_spacing: over.row_spacing.or(self.row_spacing),
            column_divider: self.column_divider.merged_with(&over.column_divider),
            row_divider: self.row_divider.merged_with(&over.row_divider),
            flex_grow: over.flex_grow.or(self.flex_grow),
            flex_shrink: over.flex_shrink.or(self.flex_shrink),
            flex_basis: over.flex_basis.clone().or_else(|| self.flex_basis.clone()),
            min_width: over.min_width.clone().or_else(|| self.min_width.clone()),
            max_width: over.max_width.clone().or_else(|| self.max_width.clone()),
            container_overflow: over
                .container_overflow
                .clone()
                .or_else(|| self.container_overflow.clone()),
        }
    }

    /// The subset a container publishes for its items to inherit.
    ///
    /// Alignment and container overflow stay with the container.
    pub fn item_defaults(&self) -> GridConfig {
        GridConfig {
            spacing: self.spacing,
            column_spacing: self.column_spacing,
            row_spacing: self.row_spacing,
            column_divider: self.column_divider.clone(),
            row_divider: self.row_divider.clone(),
            flex_grow: self.flex_grow,
            flex_shrink: self.flex_shrink,
            flex_basis: self.flex_basis.clone(),
            min_width: self.min_width.clone(),
            max_width: self.max_width.clone(),
            ..Default::default()
        }
    }

    /// Options explicitly set on this config.
    pub fn explicit_options(&self) -> GridOption {
        let mut set = GridOption::empty();
        set.set(GridOption::JUSTIFY_CONTENT, self.justify_content.is_some());
        set.set(GridOption::ALIGN_CONTENT, self.align_content.is_some());
        set.set(GridOption::ALIGN_ITEMS, self.align_items.is_some());
        set.set(GridOption::SPACING, self.spacing.is_some());
        set.set(GridOption::COLUMN_SPACING, self.column_spacing.is_some());
        set.set(GridOption::ROW_SPACING, self.row_spacing.is_some());
        set.set(GridOption::COLUMN_DIVIDER, self.column_divider != DividerSpec::default());
        set.set(GridOption::ROW_DIVIDER, self.row_divider != DividerSpec::default());
        set.set(GridOption::FLEX_GROW, self.flex_grow.is_some());
        set.set(GridOption::FLEX_SHRINK, self.flex_shrink.is_some());
        set.set(GridOption::FLEX_BASIS, self.flex_basis.is_some());
        set.set(GridOption::MIN_WIDTH, self.min_width.is_some());
        set.set(GridOption::MAX_WIDTH, self.max_width.is_some());
        set.set(GridOption::CONTAINER_OVERFLOW, self.container_overflow.is_some());
        set
    }
}

// =============================================================================
// Recognized Options (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Option names the grid components recognize.
    ///
    /// Used as deny lists so recognized names never leak onto host elements
    /// as plain attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GridOption: u32 {
        const JUSTIFY_CONTENT = 1 << 0;
        const JUSTIFY = 1 << 1;
        const ALIGN_CONTENT = 1 << 2;
        const ALIGN_ITEMS = 1 << 3;
        const SPACING = 1 << 4;
        const COLUMN_SPACING = 1 << 5;
        const ROW_SPACING = 1 << 6;
        const COLUMN_DIVIDER = 1 << 7;
        const ROW_DIVIDER = 1 << 8;
        const FLEX_GROW = 1 << 9;
        const FLEX_SHRINK = 1 << 10;
        const FLEX_BASIS = 1 << 11;
        const MIN_WIDTH = 1 << 12;
        const MAX_WIDTH = 1 << 13;
        const CONTAINER_OVERFLOW = 1 << 14;
        const CONTAINER = 1 << 15;
        const ITEM = 1 << 16;
        const COMPONENT = 1 << 17;
        const PLACEHOLDER = 1 << 18;
        const STYLE = 1 << 19;
    }
}

const OPTION_NAMES: [(GridOption, &str); 20] = [
    (GridOption::JUSTIFY_CONTENT, "justifyContent"),
    (GridOption::JUSTIFY, "justify"),
    (GridOption::ALIGN_CONTENT, "alignContent"),
    (GridOption::ALIGN_ITEMS, "alignItems"),
    (GridOption::SPACING, "spacing"),
    (GridOption::COLUMN_SPACING, "columnSpacing"),
    (GridOption::ROW_SPACING, "rowSpacing"),
    (GridOption::COLUMN_DIVIDER, "columnDivider"),
    (GridOption::ROW_DIVIDER, "rowDivider"),
    (GridOption::FLEX_GROW, "flexGrow"),
    (GridOption::FLEX_SHRINK, "flexShrink"),
    (GridOption::FLEX_BASIS, "flexBasis"),
    (GridOption::MIN_WIDTH, "minWidth"),
    (GridOption::MAX_WIDTH, "maxWidth"),
    (GridOption::CONTAINER_OVERFLOW, "containerOverflow"),
    (GridOption::CONTAINER, "container"),
    (GridOption::ITEM, "item"),
    (GridOption::COMPONENT, "component"),
    (GridOption::PLACEHOLDER, "placeholder"),
    (GridOption::STYLE, "style"),
];

impl GridOption {
    /// Everything a container consumes itself.
    pub const CONTAINER_OPTIONS: Self = Self::all();

    /// Everything an item consumes itself.
    pub const ITEM_OPTIONS: Self = Self::SPACING
        .union(Self::COLUMN_SPACING)
        .union(Self::ROW_SPACING)
        .union(Self::COLUMN_DIVIDER)
        .union(Self::ROW_DIVIDER)
        .union(Self::FLEX_GROW)
        .union(Self::FLEX_SHRINK)
        .union(Self::FLEX_BASIS)
        .union(Self::MIN_WIDTH)
        .union(Self::MAX_WIDTH)
        .union(Self::ITEM)
        .union(Self::COMPONENT)
        .union(Self::PLACEHOLDER)
        .union(Self::STYLE);

    /// Look up an option by attribute name.
    ///
    /// Matching ignores case, `-` and `_`, so `minWidth`, `min-width` and
    /// `min_width` all resolve to [`GridOption::MIN_WIDTH`].
    pub fn from_attr_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        OPTION_NAMES
            .iter()
            .find(|(_, option_name)| normalize_name(option_name) == wanted)
            .map(|(option, _)| *option)
    }

    /// Canonical (camelCase) name of a single option.
    pub fn name(&self) -> Option<&'static str> {
        OPTION_NAMES
            .iter()
            .find(|(option, _)| option == self)
            .map(|(_, name)| *name)
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// =============================================================================
// Component Type
// =============================================================================

/// What kind of component occupies a registry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    None = 0,
    /// Generic host element.
    Element = 1,
    /// Outer element of a grid container.
    GridContainer = 2,
    /// Inner flex row of a grid container.
    GridRow = 3,
    /// Grid item.
    GridItem = 4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_length_detection() {
        assert!(CssLength::from("200px").is_fixed());
        assert!(CssLength::from("1.5em").is_fixed());
        assert!(CssLength::from("12rem").is_fixed());
        assert!(!CssLength::from("50%").is_fixed());
        assert!(!CssLength::from("px").is_fixed());
        assert!(!CssLength::from("calc(10px + 2px)").is_fixed());
        assert!(!CssLength::from("").is_fixed());
    }

    #[test]
    fn test_divider_resolve_defaults() {
        let divider = DividerSpec::default().resolve();
        assert_eq!(divider.width, 0.0);
        assert_eq!(divider.style, LineStyle::Solid);
        assert_eq!(divider.color, "#CFCFCF");
        assert_eq!(DividerSpec::width(2.0).resolve().to_border(), "2px solid #CFCFCF");
    }

    #[test]
    fn test_divider_merge_per_field() {
        let container = DividerSpec::default().with_color("red");
        let item = DividerSpec::width(3.0);
        let merged = container.merged_with(&item).resolve();
        assert_eq!(merged.width, 3.0);
        assert_eq!(merged.color, "red");
    }

    #[test]
    fn test_config_merge_item_wins() {
        let container = GridConfig {
            min_width: Some("150px".into()),
            spacing: Some(16.0),
            ..Default::default()
        };
        let item = GridConfig {
            min_width: Some("300px".into()),
            ..Default::default()
        };
        let merged = container.merged_with(&item);
        assert_eq!(merged.min_width, Some(CssLength::from("300px")));
        assert_eq!(merged.spacing, Some(16.0));
    }

    #[test]
    fn test_item_defaults_drop_container_only_options() {
        let config = GridConfig {
            justify_content: Some(JustifyContent::Center),
            container_overflow: Some("4px".into()),
            row_spacing: Some(8.0),
            ..Default::default()
        };
        let defaults = config.item_defaults();
        assert_eq!(defaults.justify_content, None);
        assert_eq!(defaults.container_overflow, None);
        assert_eq!(defaults.row_spacing, Some(8.0));
        assert_eq!(defaults.explicit_options(), GridOption::ROW_SPACING);
    }

    #[test]
    fn test_option_lookup() {
        assert_eq!(GridOption::from_attr_name("min-width"), Some(GridOption::MIN_WIDTH));
        assert_eq!(GridOption::from_attr_name("flex_grow"), Some(GridOption::FLEX_GROW));
        assert_eq!(GridOption::from_attr_name("data-test"), None);
        assert_eq!(GridOption::PLACEHOLDER.name(), Some("placeholder"));
        assert!(GridOption::ITEM_OPTIONS.contains(GridOption::PLACEHOLDER));
        assert!(GridOption::ITEM_OPTIONS.contains(GridOption::SPACING));
        assert!(!GridOption::ITEM_OPTIONS.contains(GridOption::JUSTIFY));
    }
}
