//! Layout types - options in, positions out.

use thiserror::Error;

// =============================================================================
// Options
// =============================================================================

/// Fixed-advance text measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Width of one character in pixels.
    pub char_width: f32,
    /// Height of one line in pixels.
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

/// Inputs to [`compute_layout`](super::compute_layout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height; `None` lets content decide.
    pub height: Option<f32>,
    pub text: TextMetrics,
    /// Pixels per `rem` (and per `em`, which is not inherited here).
    pub root_font_size: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: None,
            text: TextMetrics::default(),
            root_font_size: 16.0,
        }
    }
}

impl LayoutOptions {
    /// Default options with the given viewport width.
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// One laid-out box, relative to its parent's border box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Layout of every mounted component, indexed like the parallel arrays.
#[derive(Debug, Clone, Default)]
pub struct ComputedLayout {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub width: Vec<f32>,
    pub height: Vec<f32>,
    /// Size of the first root.
    pub content_width: f32,
    pub content_height: f32,
    laid_out: Vec<bool>,
}

impl ComputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(size: usize) -> Self {
        Self {
            x: vec![0.0; size],
            y: vec![0.0; size],
            width: vec![0.0; size],
            height: vec![0.0; size],
            laid_out: vec![false; size],
            ..Default::default()
        }
    }

    pub(crate) fn record(&mut self, index: usize, layout_box: LayoutBox) {
        if index >= self.laid_out.len() {
            return;
        }
        self.x[index] = layout_box.x;
        self.y[index] = layout_box.y;
        self.width[index] = layout_box.width;
        self.height[index] = layout_box.height;
        self.laid_out[index] = true;
    }

    /// Box of a component, if it took part in layout.
    pub fn get(&self, index: usize) -> Option<LayoutBox> {
        if !self.laid_out.get(index).copied().unwrap_or(false) {
            return None;
        }
        Some(LayoutBox {
            x: self.x[index],
            y: self.y[index],
            width: self.width[index],
            height: self.height[index],
        })
    }
}

// =============================================================================
// Errors
// =============================================================================

/// A CSS value the layout bridge cannot interpret.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    #[error("empty value")]
    Empty,

    #[error("invalid number in `{0}`")]
    InvalidNumber(String),

    #[error("unsupported unit in `{0}`")]
    UnsupportedUnit(String),

    #[error("`auto` is not allowed for {0}")]
    AutoNotAllowed(&'static str),

    #[error("calc() mixes lengths and percentages: `{0}`")]
    MixedCalc(String),

    #[error("malformed calc(): `{0}`")]
    MalformedCalc(String),

    #[error("unknown keyword `{value}` for {property}")]
    UnknownKeyword { property: String, value: String },
}

/// Layout failures.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout engine failure: {0}")]
    Taffy(taffy::TaffyError),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
