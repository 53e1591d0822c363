//! Taffy Bridge - Integration with Taffy layout engine
//!
//! Converts each mounted element's style bag to a Taffy style, mirrors the
//! element tree into a `TaffyTree`, runs layout, and extracts results back
//! to [`ComputedLayout`].

use taffy::{AvailableSpace, NodeId, Size, Style, TaffyTree};

use crate::engine::arrays::{core, visual};
use crate::engine::get_root_indices;

use super::css::to_taffy_style;
use super::types::{ComputedLayout, LayoutBox, LayoutError, LayoutOptions, LayoutResult, TextMetrics};

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Measure a text leaf with fixed-advance metrics, wrapping on a definite
/// available width.
fn measure_text(
    text: &str,
    metrics: TextMetrics,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    let chars = text.chars().count() as f32;
    if chars == 0.0 {
        return Size::ZERO;
    }
    let natural = chars * metrics.char_width;

    let width = known_dimensions.width.unwrap_or(match available_space.width {
        AvailableSpace::Definite(available) => natural.min(available.max(0.0)),
        AvailableSpace::MinContent => metrics.char_width,
        AvailableSpace::MaxContent => natural,
    });

    let per_line = (width / metrics.char_width).floor().max(1.0);
    let lines = (chars / per_line).ceil();
    let height = known_dimensions
        .height
        .unwrap_or(lines * metrics.line_height);

    Size { width, height }
}

// =============================================================================
// TREE CONSTRUCTION
// =============================================================================

/// Add `index` and its subtree to the Taffy tree, in child insertion order.
fn build_node(
    tree: &mut TaffyTree<usize>,
    index: usize,
    options: &LayoutOptions,
    nodes: &mut Vec<(usize, NodeId)>,
) -> LayoutResult<NodeId> {
    let style: Style = to_taffy_style(&visual::get_style(index), options.root_font_size);
    let children = core::get_children(index);

    let node = if children.is_empty() && visual::get_text(index).is_some() {
        tree.new_leaf_with_context(style, index)
    } else {
        tree.new_leaf(style)
    }
    .map_err(LayoutError::Taffy)?;
    nodes.push((index, node));

    for child in children {
        let child_node = build_node(tree, child, options, nodes)?;
        tree.add_child(node, child_node).map_err(LayoutError::Taffy)?;
    }

    Ok(node)
}

// =============================================================================
// MAIN LAYOUT FUNCTION
// =============================================================================

/// Compute layout for every mounted component tree.
///
/// Each root gets the viewport width. The viewport height constrains roots
/// only when set. Positions are relative to the parent's border box.
pub fn compute_layout(options: &LayoutOptions) -> LayoutResult<ComputedLayout> {
    let roots = get_root_indices();
    if roots.is_empty() {
        return Ok(ComputedLayout::new());
    }

    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut nodes: Vec<(usize, NodeId)> = Vec::new();
    let mut root_nodes = Vec::with_capacity(roots.len());
    for &root in &roots {
        root_nodes.push(build_node(&mut tree, root, options, &mut nodes)?);
    }

    let available = Size {
        width: AvailableSpace::Definite(options.width),
        height: match options.height {
            Some(height) => AvailableSpace::Definite(height),
            None => AvailableSpace::MaxContent,
        },
    };

    let metrics = options.text;
    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        match context.and_then(|&mut idx| visual::get_text(idx)) {
            Some(text) => measure_text(&text, metrics, known_dimensions, available_space),
            None => Size::ZERO,
        }
    };

    for &root_node in &root_nodes {
        tree.compute_layout_with_measure(root_node, available, &mut measure_fn)
            .map_err(LayoutError::Taffy)?;
    }

    let size = nodes.iter().map(|(idx, _)| idx + 1).max().unwrap_or(0);
    let mut result = ComputedLayout::with_capacity(size);
    for &(idx, node) in &nodes {
        let layout = tree.layout(node).map_err(LayoutError::Taffy)?;
        result.record(
            idx,
            LayoutBox {
                x: layout.location.x,
                y: layout.location.y,
                width: layout.size.width,
                height: layout.size.height,
            },
        );
    }

    if let Some(first) = result.get(roots[0]) {
        result.content_width = first.width;
        result.content_height = first.height;
    }

    tracing::debug!(
        roots = roots.len(),
        nodes = nodes.len(),
        width = result.content_width,
        height = result.content_height,
        "layout computed"
    );

    Ok(result)
}
