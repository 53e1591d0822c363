//! Element Primitive - Generic host element.
//!
//! Everything the grid renders ends up here: a tag, a style getter,
//! forwarded attributes, optional text and children. Grid components build
//! [`ElementProps`] and hand them to their [`Host`].
//!
//! # Example
//!
//! ```ignore
//! use fluid_grid::primitives::{element, ElementProps, PropValue};
//! use fluid_grid::style::StyleBag;
//!
//! let cleanup = element(ElementProps {
//!     tag: Some("p".to_string()),
//!     style: Some(PropValue::Static(StyleBag::new().with("flex", "auto"))),
//!     text: Some("Hello".into()),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::{core, interaction, visual};
use crate::engine::{
    allocate_index, get_current_parent_index, pop_parent_context, push_parent_context,
    release_index,
};
use crate::types::ComponentType;

use super::types::{Cleanup, ElementProps, Host, PropValue};

/// Mount a host element.
///
/// Returns a cleanup function that releases the element and its subtree.
pub fn element(props: ElementProps) -> Cleanup {
    // 1. ALLOCATE INDEX
    let index = allocate_index(props.id.as_deref());

    // 2. CORE SETUP - Type, tag, parent
    let kind = match props.kind {
        ComponentType::None => ComponentType::Element,
        kind => kind,
    };
    core::set_component_type(index, kind);
    core::set_tag(index, props.tag.as_deref().unwrap_or("div"));
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }
    if props.placeholder {
        core::set_placeholder(index, true);
    }

    // 3. BIND STYLE
    if let Some(style) = props.style {
        match style {
            PropValue::Static(v) => visual::set_style(index, v),
            PropValue::Signal(s) => visual::set_style_signal(index, s),
            PropValue::Getter(g) => visual::set_style_getter(index, move || g()),
        }
    }

    // 4. ATTRIBUTES - explicit id first
    let mut attrs = props.attrs;
    if let Some(id) = props.id {
        attrs.retain(|(name, _)| name != "id");
        attrs.insert(0, ("id".to_string(), id));
    }
    visual::set_attrs(index, attrs);

    // 5. TEXT
    if let Some(text) = props.text {
        match text {
            PropValue::Static(v) => visual::set_text_getter(index, move || v.clone()),
            PropValue::Signal(s) => visual::set_text_getter(index, move || s.get()),
            PropValue::Getter(g) => visual::set_text_getter(index, move || g()),
        }
    }

    // 6. INTERACTION
    if let Some(on_click) = props.on_click {
        interaction::set_on_click(index, on_click);
    }

    tracing::trace!(index, ?kind, "mounted element");

    // 7. RENDER CHILDREN
    if let Some(children) = props.children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }

    // 8. RETURN CLEANUP
    Box::new(move || release_index(index))
}

/// Mount `props` through a host: a plain tag or a caller's component.
pub(crate) fn render_host(host: Host, props: ElementProps) -> Cleanup {
    match host {
        Host::Tag(tag) => element(ElementProps {
            tag: Some(tag),
            ..props
        }),
        Host::Component(component) => component(props),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{get_index, is_allocated, reset_registry};
    use crate::style::StyleBag;
    use spark_signals::signal;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_element_creation() {
        setup();

        let cleanup = element(ElementProps {
            tag: Some("section".to_string()),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::Element);
        assert_eq!(core::get_tag(0), "section");

        cleanup();
        assert!(!is_allocated(0));
        assert_eq!(core::get_component_type(0), ComponentType::None);
    }

    #[test]
    fn test_element_children_in_order() {
        setup();

        let _cleanup = element(ElementProps {
            children: Some(Box::new(|| {
                element(ElementProps::default());
                element(ElementProps::default());
            })),
            ..Default::default()
        });

        assert_eq!(core::get_children(0), vec![1, 2]);
        assert_eq!(core::get_parent_index(2), Some(0));
    }

    #[test]
    fn test_element_reactive_style() {
        setup();

        let color = signal("red".to_string());
        let color_for_style = color.clone();
        let _cleanup = element(ElementProps {
            style: Some(PropValue::Getter(Rc::new(move || {
                StyleBag::new().with("color", color_for_style.get())
            }))),
            ..Default::default()
        });

        assert_eq!(visual::get_style(0).to_inline_css(), "color: red");
        color.set("blue".to_string());
        assert_eq!(visual::get_style(0).to_inline_css(), "color: blue");
    }

    #[test]
    fn test_element_id_and_attrs() {
        setup();

        let _cleanup = element(ElementProps {
            id: Some("gallery".to_string()),
            attrs: vec![("data-kind".to_string(), "photos".to_string())],
            ..Default::default()
        });

        let index = get_index("gallery");
        assert_eq!(index, Some(0));
        assert_eq!(
            visual::get_attrs(0),
            vec![
                ("id".to_string(), "gallery".to_string()),
                ("data-kind".to_string(), "photos".to_string()),
            ]
        );
    }

    #[test]
    fn test_element_click() {
        setup();

        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        let _cleanup = element(ElementProps {
            on_click: Some(Rc::new(move || clicks_clone.set(clicks_clone.get() + 1))),
            ..Default::default()
        });

        assert!(interaction::dispatch_click(0));
        assert!(interaction::dispatch_click(0));
        assert_eq!(clicks.get(), 2);
        assert!(!interaction::dispatch_click(7));
    }
}
