//! Mixed Widths Example - Items with different width constraints
//!
//! This example demonstrates:
//! - A container publishing spacing, a divider and a default min width
//! - Items overriding the default with their own min/max widths
//! - Re-rendering after a signal changes the container spacing
//! - Laying the grid out at two viewport widths
//!
//! Run with: cargo run --example mixed_widths

use fluid_grid::{
    CssLength, DividerSpec, GridContainerProps, GridItemProps, LayoutOptions, PropValue,
    StyleBag, compute_layout, get_root_indices, grid_container, grid_item, render_tree,
    reset_registry,
    engine::arrays::core,
};
use spark_signals::signal;

fn card() -> Option<PropValue<StyleBag>> {
    Some(PropValue::Static(
        StyleBag::new().with("background", "#F9F9F9").with("height", "48px"),
    ))
}

fn print_layout(width: f32) {
    let layout = match compute_layout(&LayoutOptions::with_width(width)) {
        Ok(layout) => layout,
        Err(error) => {
            eprintln!("layout failed: {error}");
            return;
        }
    };

    println!("--- viewport {width}px ---");
    let Some(&root) = get_root_indices().first() else {
        return;
    };
    for row in core::get_children(root) {
        for item in core::get_children(row) {
            if let Some(b) = layout.get(item) {
                println!(
                    "item {item}: x={:>6.1} y={:>6.1} w={:>6.1} h={:>6.1}",
                    b.x, b.y, b.width, b.height
                );
            }
        }
    }
    println!();
}

fn main() {
    // Reset to ensure clean state
    reset_registry();

    println!("=== fluid-grid Mixed Widths Example ===\n");

    let spacing = signal(16.0_f32);
    let spacing_prop = spacing.clone();

    let cleanup = grid_container(GridContainerProps {
        id: Some("gallery".to_string()),
        spacing: Some(PropValue::Signal(spacing_prop)),
        column_divider: Some(PropValue::Static(DividerSpec::width(1.0))),
        min_width: Some("150px".into()),
        children: Some(Box::new(|| {
            // Inherits the 150px minimum
            grid_item(GridItemProps {
                style: card(),
                ..Default::default()
            });

            // Wider minimum
            grid_item(GridItemProps {
                min_width: Some("300px".into()),
                style: card(),
                ..Default::default()
            });

            // Capped, does not grow past 200px
            grid_item(GridItemProps {
                min_width: Some(PropValue::Static(CssLength::new(""))),
                max_width: Some("200px".into()),
                style: card(),
                ..Default::default()
            });

            // Fills what is left
            grid_item(GridItemProps {
                flex_grow: Some(PropValue::Static(2.0)),
                style: card(),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    println!("Markup:\n{}\n", render_tree());

    print_layout(800.0);
    print_layout(420.0);

    // Spacing is read on every render
    spacing.set(4.0);
    println!("After spacing change:");
    print_layout(420.0);

    cleanup();
    println!("Mounted after cleanup: {}", get_root_indices().len());
}
