//! Markup serialisation of mounted elements.
//!
//! Reads the parallel arrays only. Style getters run once per element per
//! call, so repeated renders reflect the current props.

use crate::engine::arrays::{core, visual};
use crate::engine::{get_root_indices, is_allocated};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Whether `name` can be written as an attribute name without quoting.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    if !is_valid_attr_name(name) {
        tracing::warn!(attribute = %name, "skipping invalid attribute name");
        return;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn write_element(out: &mut String, index: usize) {
    let tag = core::get_tag(index);
    let attrs = visual::get_attrs(index);
    let style = visual::get_style(index);

    out.push('<');
    out.push_str(&tag);

    // id, then style, then everything else in insertion order
    let (ids, rest): (Vec<_>, Vec<_>) = attrs.iter().partition(|(name, _)| name == "id");
    for (name, value) in ids {
        push_attr(out, name, value);
    }
    if !style.is_empty() {
        push_attr(out, "style", &style.to_inline_css());
    }
    for (name, value) in rest {
        push_attr(out, name, value);
    }
    out.push('>');

    if let Some(text) = visual::get_text(index) {
        out.push_str(&escape(&text));
    }
    for child in core::get_children(index) {
        write_element(out, child);
    }

    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
}

/// Markup for the element at `index` and its subtree.
///
/// Empty for an index that is not mounted.
pub fn render_markup(index: usize) -> String {
    let mut out = String::new();
    if is_allocated(index) {
        write_element(&mut out, index);
    }
    out
}

/// Markup for every mounted root, concatenated in index order.
pub fn render_tree() -> String {
    let mut out = String::new();
    for root in get_root_indices() {
        write_element(&mut out, root);
    }
    out
}
