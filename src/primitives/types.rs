//! Primitive types - Props and cleanup.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

use crate::engine::ConfigGetter;
use crate::style::StyleBag;
use crate::types::{
    AlignContent, AlignItems, ComponentType, CssLength, DividerSpec, GridConfig, JustifyContent,
};

// =============================================================================
// Cleanup / Callbacks
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Children render function, run once with the component as parent.
pub type Children = Box<dyn FnOnce()>;

/// Click callback (Rc so it can be shared with the host element).
pub type ClickCallback = Rc<dyn Fn()>;

/// A caller-supplied host component.
///
/// Receives the fully prepared element props (computed style, forwarded
/// attributes, children) and is expected to mount an element from them,
/// usually by calling [`element`](super::element) with some additions.
pub type HostComponent = Rc<dyn Fn(ElementProps) -> Cleanup>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal.
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<CssLength> {
    fn from(value: &str) -> Self {
        PropValue::Static(CssLength::from(value))
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

fn read<T: Clone + PartialEq + 'static>(prop: &Option<PropValue<T>>) -> Option<T> {
    prop.as_ref().map(PropValue::get)
}

// =============================================================================
// Host
// =============================================================================

/// What a grid component renders as.
#[derive(Clone)]
pub enum Host {
    /// A plain element with this tag name.
    Tag(String),
    /// A caller-supplied component.
    Component(HostComponent),
}

impl Default for Host {
    fn default() -> Self {
        Host::Tag("div".to_string())
    }
}

impl From<&str> for Host {
    fn from(tag: &str) -> Self {
        Host::Tag(tag.to_string())
    }
}

// =============================================================================
// Element Props
// =============================================================================

/// Properties for a generic host element.
#[derive(Default)]
pub struct ElementProps {
    /// Component ID. Rendered as the `id` attribute when set.
    pub id: Option<String>,
    /// Tag name (default `div`).
    pub tag: Option<String>,
    /// What the element represents; grid components set this.
    pub kind: ComponentType,
    pub style: Option<PropValue<StyleBag>>,
    /// Attributes forwarded verbatim.
    pub attrs: Vec<(String, String)>,
    pub text: Option<PropValue<String>>,
    pub on_click: Option<ClickCallback>,
    /// Marks a grid item as an empty spacer. Never rendered.
    pub placeholder: bool,
    pub children: Option<Children>,
}

// =============================================================================
// Grid Container Props
// =============================================================================

/// Properties for [`grid_container`](super::grid_container).
///
/// # Example
///
/// ```ignore
/// use fluid_grid::primitives::{grid_container, grid_item, GridContainerProps, GridItemProps};
///
/// let cleanup = grid_container(GridContainerProps {
///     spacing: Some(16.0.into()),
///     min_width: Some("200px".into()),
///     children: Some(Box::new(|| {
///         grid_item(GridItemProps::default());
///         grid_item(GridItemProps {
///             min_width: Some("400px".into()),
///             ..Default::default()
///         });
///     })),
///     ..Default::default()
/// });
/// ```
#[derive(Default)]
pub struct GridContainerProps {
    pub id: Option<String>,
    pub host: Host,
    /// Merged on top of the computed outer container style.
    pub style: Option<PropValue<StyleBag>>,
    /// Forwarded to the host, minus recognized option names.
    pub attrs: Vec<(String, String)>,
    pub on_click: Option<ClickCallback>,

    // Container-specific options
    pub justify_content: Option<PropValue<JustifyContent>>,
    /// Alias for `justify_content`, which wins when both are set.
    pub justify: Option<PropValue<JustifyContent>>,
    pub align_content: Option<PropValue<AlignContent>>,
    pub align_items: Option<PropValue<AlignItems>>,
    pub spacing: Option<PropValue<f32>>,
    pub column_spacing: Option<PropValue<f32>>,
    pub row_spacing: Option<PropValue<f32>>,
    pub column_divider: Option<PropValue<DividerSpec>>,
    pub row_divider: Option<PropValue<DividerSpec>>,
    pub container_overflow: Option<PropValue<CssLength>>,

    // Item defaults, overridable per item
    pub flex_grow: Option<PropValue<f32>>,
    pub flex_shrink: Option<PropValue<f32>>,
    pub flex_basis: Option<PropValue<CssLength>>,
    pub min_width: Option<PropValue<CssLength>>,
    pub max_width: Option<PropValue<CssLength>>,

    pub children: Option<Children>,
}

impl GridContainerProps {
    /// A getter resolving the current container configuration.
    ///
    /// Alignment falls back to `flex-start` / `stretch` / `stretch`.
    pub(crate) fn config_getter(&self) -> ConfigGetter {
        let justify_content = self.justify_content.clone();
        let justify = self.justify.clone();
        let align_content = self.align_content.clone();
        let align_items = self.align_items.clone();
        let spacing = self.spacing.clone();
        let column_spacing = self.column_spacing.clone();
        let row_spacing = self.row_spacing.clone();
        let column_divider = self.column_divider.clone();
        let row_divider = self.row_divider.clone();
        let container_overflow = self.container_overflow.clone();
        let flex_grow = self.flex_grow.clone();
        let flex_shrink = self.flex_shrink.clone();
        let flex_basis = self.flex_basis.clone();
        let min_width = self.min_width.clone();
        let max_width = self.max_width.clone();

        Rc::new(move || GridConfig {
            justify_content: Some(
                read(&justify_content).or_else(|| read(&justify)).unwrap_or_default(),
            ),
            align_content: Some(read(&align_content).unwrap_or_default()),
            align_items: Some(read(&align_items).unwrap_or_default()),
            spacing: read(&spacing),
            column_spacing: read(&column_spacing),
            row_spacing: read(&row_spacing),
            column_divider: read(&column_divider).unwrap_or_default(),
            row_divider: read(&row_divider).unwrap_or_default(),
            flex_grow: read(&flex_grow),
            flex_shrink: read(&flex_shrink),
            flex_basis: read(&flex_basis),
            min_width: read(&min_width),
            max_width: read(&max_width),
            container_overflow: read(&container_overflow),
        })
    }
}

// =============================================================================
// Grid Item Props
// =============================================================================

/// Properties for [`grid_item`](super::grid_item).
///
/// Every option set here overrides the value inherited from the enclosing
/// container.
#[derive(Default)]
pub struct GridItemProps {
    pub id: Option<String>,
    pub host: Host,
    /// Merged on top of the computed item style.
    pub style: Option<PropValue<StyleBag>>,
    /// Forwarded to the host, minus recognized option names.
    pub attrs: Vec<(String, String)>,
    pub on_click: Option<ClickCallback>,
    /// Marks the item as an empty spacer.
    pub placeholder: bool,

    /// Spacing set per item changes this item's padding only.
    pub spacing: Option<PropValue<f32>>,
    pub column_spacing: Option<PropValue<f32>>,
    pub row_spacing: Option<PropValue<f32>>,
    /// Dividers set per item affect the left/top border of this item only.
    pub column_divider: Option<PropValue<DividerSpec>>,
    pub row_divider: Option<PropValue<DividerSpec>>,
    pub flex_grow: Option<PropValue<f32>>,
    pub flex_shrink: Option<PropValue<f32>>,
    pub flex_basis: Option<PropValue<CssLength>>,
    pub min_width: Option<PropValue<CssLength>>,
    pub max_width: Option<PropValue<CssLength>>,

    pub children: Option<Children>,
}

impl GridItemProps {
    /// A getter resolving the options set on this item alone.
    pub(crate) fn config_getter(&self) -> ConfigGetter {
        let spacing = self.spacing.clone();
        let column_spacing = self.column_spacing.clone();
        let row_spacing = self.row_spacing.clone();
        let column_divider = self.column_divider.clone();
        let row_divider = self.row_divider.clone();
        let flex_grow = self.flex_grow.clone();
        let flex_shrink = self.flex_shrink.clone();
        let flex_basis = self.flex_basis.clone();
        let min_width = self.min_width.clone();
        let max_width = self.max_width.clone();

        Rc::new(move || GridConfig {
            spacing: read(&spacing),
            column_spacing: read(&column_spacing),
            row_spacing: read(&row_spacing),
            column_divider: read(&column_divider).unwrap_or_default(),
            row_divider: read(&row_divider).unwrap_or_default(),
            flex_grow: read(&flex_grow),
            flex_shrink: read(&flex_shrink),
            flex_basis: read(&flex_basis),
            min_width: read(&min_width),
            max_width: read(&max_width),
            ..Default::default()
        })
    }
}

// =============================================================================
// Grid Props (facade)
// =============================================================================

/// Properties for the [`grid`](super::grid) facade: a container when
/// `container` is true, otherwise an item.
#[derive(Default)]
pub struct GridProps {
    pub container: bool,

    pub id: Option<String>,
    pub host: Host,
    pub style: Option<PropValue<StyleBag>>,
    pub attrs: Vec<(String, String)>,
    pub on_click: Option<ClickCallback>,

    // Container only
    pub justify_content: Option<PropValue<JustifyContent>>,
    pub justify: Option<PropValue<JustifyContent>>,
    pub align_content: Option<PropValue<AlignContent>>,
    pub align_items: Option<PropValue<AlignItems>>,
    pub container_overflow: Option<PropValue<CssLength>>,

    // Item only
    pub placeholder: bool,

    // Shared
    pub spacing: Option<PropValue<f32>>,
    pub column_spacing: Option<PropValue<f32>>,
    pub row_spacing: Option<PropValue<f32>>,
    pub column_divider: Option<PropValue<DividerSpec>>,
    pub row_divider: Option<PropValue<DividerSpec>>,
    pub flex_grow: Option<PropValue<f32>>,
    pub flex_shrink: Option<PropValue<f32>>,
    pub flex_basis: Option<PropValue<CssLength>>,
    pub min_width: Option<PropValue<CssLength>>,
    pub max_width: Option<PropValue<CssLength>>,

    pub children: Option<Children>,
}

impl From<GridProps> for GridContainerProps {
    fn from(props: GridProps) -> Self {
        GridContainerProps {
            id: props.id,
            host: props.host,
            style: props.style,
            attrs: props.attrs,
            on_click: props.on_click,
            justify_content: props.justify_content,
            justify: props.justify,
            align_content: props.align_content,
            align_items: props.align_items,
            spacing: props.spacing,
            column_spacing: props.column_spacing,
            row_spacing: props.row_spacing,
            column_divider: props.column_divider,
            row_divider: props.row_divider,
            container_overflow: props.container_overflow,
            flex_grow: props.flex_grow,
            flex_shrink: props.flex_shrink,
            flex_basis: props.flex_basis,
            min_width: props.min_width,
            max_width: props.max_width,
            children: props.children,
        }
    }
}

impl From<GridProps> for GridItemProps {
    fn from(props: GridProps) -> Self {
        GridItemProps {
            id: props.id,
            host: props.host,
            style: props.style,
            attrs: props.attrs,
            on_click: props.on_click,
            placeholder: props.placeholder,
            spacing: props.spacing,
            column_spacing: props.column_spacing,
            row_spacing: props.row_spacing,
            column_divider: props.column_divider,
            row_divider: props.row_divider,
            flex_grow: props.flex_grow,
            flex_shrink: props.flex_shrink,
            flex_basis: props.flex_basis,
            min_width: props.min_width,
            max_width: props.max_width,
            children: props.children,
        }
    }
}
