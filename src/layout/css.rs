//! CSS declarations to Taffy style.
//!
//! Interprets the subset of CSS the grid components emit, plus the common
//! sizing properties callers put on content. Anything else is ignored.

use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems, BoxSizing,
    Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    FlexWrap as TaffyFlexWrap, JustifyContent as TaffyJustifyContent, LengthPercentage,
    LengthPercentageAuto, Overflow as TaffyOverflow, Point, Position as TaffyPosition, Rect,
    Style,
};

use crate::style::{CssValue, StyleBag};

use super::types::CssError;

// =============================================================================
// Lengths
// =============================================================================

/// A resolved CSS length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Length {
    Px(f32),
    /// Fraction of the reference size (50% = 0.5).
    Percent(f32),
    Auto,
}

impl Length {
    fn to_dimension(self) -> TaffyDimension {
        match self {
            Length::Px(n) => TaffyDimension::Length(n),
            Length::Percent(p) => TaffyDimension::Percent(p),
            Length::Auto => TaffyDimension::Auto,
        }
    }

    fn to_lpa(self) -> LengthPercentageAuto {
        match self {
            Length::Px(n) => LengthPercentageAuto::Length(n),
            Length::Percent(p) => LengthPercentageAuto::Percent(p),
            Length::Auto => LengthPercentageAuto::Auto,
        }
    }

    fn to_lp(self, property: &'static str) -> Result<LengthPercentage, CssError> {
        match self {
            Length::Px(n) => Ok(LengthPercentage::Length(n)),
            Length::Percent(p) => Ok(LengthPercentage::Percent(p)),
            Length::Auto => Err(CssError::AutoNotAllowed(property)),
        }
    }
}

fn parse_number(text: &str, whole: &str) -> Result<f32, CssError> {
    text.parse::<f32>()
        .map_err(|_| CssError::InvalidNumber(whole.to_string()))
}

/// Parse a length: `0`, `12px`, `50%`, `2rem`, `1.5em`, `auto`, or a
/// `calc()` sum of terms that share a unit kind.
pub(crate) fn parse_length(value: &str, root_font_size: f32) -> Result<Length, CssError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CssError::Empty);
    }
    if value == "auto" {
        return Ok(Length::Auto);
    }
    if let Some(inner) = value.strip_prefix("calc(").and_then(|v| v.strip_suffix(')')) {
        return parse_calc(inner, value, root_font_size);
    }
    if let Some(n) = value.strip_suffix('%') {
        return Ok(Length::Percent(parse_number(n, value)? / 100.0));
    }
    if let Some(n) = value.strip_suffix("px") {
        return Ok(Length::Px(parse_number(n, value)?));
    }
    if let Some(n) = value.strip_suffix("rem") {
        return Ok(Length::Px(parse_number(n, value)? * root_font_size));
    }
    if let Some(n) = value.strip_suffix("em") {
        return Ok(Length::Px(parse_number(n, value)? * root_font_size));
    }
    match value.parse::<f32>() {
        Ok(n) if n == 0.0 => Ok(Length::Px(0.0)),
        Ok(_) => Err(CssError::UnsupportedUnit(value.to_string())),
        Err(_) if value.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '.') => {
            Err(CssError::UnsupportedUnit(value.to_string()))
        }
        Err(_) => Err(CssError::InvalidNumber(value.to_string())),
    }
}

fn parse_calc(inner: &str, whole: &str, root_font_size: f32) -> Result<Length, CssError> {
    let mut tokens = inner.split_whitespace();
    let first = tokens
        .next()
        .ok_or_else(|| CssError::MalformedCalc(whole.to_string()))?;
    let mut total = parse_length(first, root_font_size)?;

    while let Some(operator) = tokens.next() {
        let sign = match operator {
            "+" => 1.0,
            "-" => -1.0,
            _ => return Err(CssError::MalformedCalc(whole.to_string())),
        };
        let term = tokens
            .next()
            .ok_or_else(|| CssError::MalformedCalc(whole.to_string()))?;
        total = match (total, parse_length(term, root_font_size)?) {
            (Length::Px(a), Length::Px(b)) => Length::Px(a + sign * b),
            (Length::Percent(a), Length::Percent(b)) => Length::Percent(a + sign * b),
            _ => return Err(CssError::MixedCalc(whole.to_string())),
        };
    }

    match total {
        Length::Auto => Err(CssError::MalformedCalc(whole.to_string())),
        length => Ok(length),
    }
}

/// Expand a 1-4 value box shorthand into top/right/bottom/left.
fn parse_edges(value: &str, root_font_size: f32) -> Result<Rect<Length>, CssError> {
    let parts = value
        .split_whitespace()
        .map(|part| parse_length(part, root_font_size))
        .collect::<Result<Vec<_>, _>>()?;
    let (top, right, bottom, left) = match parts.as_slice() {
        [all] => (*all, *all, *all, *all),
        [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
        [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
        [top, right, bottom, left] => (*top, *right, *bottom, *left),
        _ => return Err(CssError::InvalidNumber(value.to_string())),
    };
    Ok(Rect {
        top,
        right,
        bottom,
        left,
    })
}

/// Width token of a `border` shorthand (`2px solid blue`).
fn parse_border_width(value: &str, root_font_size: f32) -> Result<f32, CssError> {
    for token in value.split_whitespace() {
        match token {
            "thin" => return Ok(1.0),
            "medium" => return Ok(3.0),
            "thick" => return Ok(5.0),
            "none" | "hidden" => return Ok(0.0),
            _ => {}
        }
        if let Ok(Length::Px(width)) = parse_length(token, root_font_size) {
            return Ok(width);
        }
    }
    // Style and color only: the initial width
    Ok(3.0)
}

fn unknown(property: &str, value: &str) -> CssError {
    CssError::UnknownKeyword {
        property: property.to_string(),
        value: value.to_string(),
    }
}

// =============================================================================
// Keywords
// =============================================================================

fn parse_justify(value: &str) -> Result<TaffyJustifyContent, CssError> {
    Ok(match value {
        "flex-start" | "start" => TaffyJustifyContent::FlexStart,
        "center" => TaffyJustifyContent::Center,
        "flex-end" | "end" => TaffyJustifyContent::FlexEnd,
        "space-between" => TaffyJustifyContent::SpaceBetween,
        "space-around" => TaffyJustifyContent::SpaceAround,
        "space-evenly" => TaffyJustifyContent::SpaceEvenly,
        "stretch" => TaffyJustifyContent::Stretch,
        _ => return Err(unknown("justify-content", value)),
    })
}

fn parse_align_content(value: &str) -> Result<TaffyAlignContent, CssError> {
    Ok(match value {
        "stretch" => TaffyAlignContent::Stretch,
        "flex-start" | "start" => TaffyAlignContent::FlexStart,
        "center" => TaffyAlignContent::Center,
        "flex-end" | "end" => TaffyAlignContent::FlexEnd,
        "space-between" => TaffyAlignContent::SpaceBetween,
        "space-around" => TaffyAlignContent::SpaceAround,
        "space-evenly" => TaffyAlignContent::SpaceEvenly,
        _ => return Err(unknown("align-content", value)),
    })
}

fn parse_align_items(value: &str) -> Result<TaffyAlignItems, CssError> {
    Ok(match value {
        "stretch" => TaffyAlignItems::Stretch,
        "flex-start" | "start" => TaffyAlignItems::FlexStart,
        "center" => TaffyAlignItems::Center,
        "flex-end" | "end" => TaffyAlignItems::FlexEnd,
        "baseline" => TaffyAlignItems::Baseline,
        _ => return Err(unknown("align-items", value)),
    })
}

fn parse_direction(value: &str) -> Option<TaffyFlexDirection> {
    match value {
        "row" => Some(TaffyFlexDirection::Row),
        "column" => Some(TaffyFlexDirection::Column),
        "row-reverse" => Some(TaffyFlexDirection::RowReverse),
        "column-reverse" => Some(TaffyFlexDirection::ColumnReverse),
        _ => None,
    }
}

fn parse_wrap(value: &str) -> Option<TaffyFlexWrap> {
    match value {
        "wrap" => Some(TaffyFlexWrap::Wrap),
        "nowrap" => Some(TaffyFlexWrap::NoWrap),
        "wrap-reverse" => Some(TaffyFlexWrap::WrapReverse),
        _ => None,
    }
}

fn parse_overflow(value: &str) -> Result<TaffyOverflow, CssError> {
    Ok(match value {
        "visible" => TaffyOverflow::Visible,
        "hidden" => TaffyOverflow::Hidden,
        "clip" => TaffyOverflow::Clip,
        "scroll" | "auto" => TaffyOverflow::Scroll,
        _ => return Err(unknown("overflow", value)),
    })
}

fn factor(value: &CssValue, property: &str) -> Result<f32, CssError> {
    match value {
        CssValue::Number(n) => Ok(*n),
        CssValue::Text(text) => text
            .trim()
            .parse::<f32>()
            .map_err(|_| unknown(property, text)),
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// Apply one declaration to a Taffy style.
///
/// Unknown properties are ignored.
pub(crate) fn apply_declaration(
    style: &mut Style,
    property: &str,
    value: &CssValue,
    root_font_size: f32,
) -> Result<(), CssError> {
    let text = value.to_string();
    let text = text.trim();
    let length = |v: &str| parse_length(v, root_font_size);

    match property {
        "display" => {
            style.display = match text {
                "block" => Display::Block,
                "flex" => Display::Flex,
                "none" => Display::None,
                _ => return Err(unknown(property, text)),
            }
        }
        "box-sizing" => {
            style.box_sizing = match text {
                "border-box" => BoxSizing::BorderBox,
                "content-box" => BoxSizing::ContentBox,
                _ => return Err(unknown(property, text)),
            }
        }
        "position" => {
            style.position = match text {
                "relative" | "static" => TaffyPosition::Relative,
                "absolute" => TaffyPosition::Absolute,
                _ => return Err(unknown(property, text)),
            }
        }
        "overflow" => {
            let overflow = parse_overflow(text)?;
            style.overflow = Point {
                x: overflow,
                y: overflow,
            };
        }
        "flex-flow" => {
            for token in text.split_whitespace() {
                if let Some(direction) = parse_direction(token) {
                    style.flex_direction = direction;
                } else if let Some(wrap) = parse_wrap(token) {
                    style.flex_wrap = wrap;
                } else {
                    return Err(unknown(property, token));
                }
            }
        }
        "flex-direction" => {
            style.flex_direction = parse_direction(text).ok_or_else(|| unknown(property, text))?;
        }
        "flex-wrap" => {
            style.flex_wrap = parse_wrap(text).ok_or_else(|| unknown(property, text))?;
        }
        "flex" => {
            let (grow, shrink, basis) = match text {
                "auto" => (1.0, 1.0, Length::Auto),
                "none" => (0.0, 0.0, Length::Auto),
                _ => {
                    let mut tokens = text.split_whitespace();
                    let grow = factor(&CssValue::from(tokens.next().unwrap_or("")), property)?;
                    let shrink = match tokens.next() {
                        Some(token) => factor(&CssValue::from(token), property)?,
                        None => 1.0,
                    };
                    let basis = match tokens.next() {
                        Some(token) => length(token)?,
                        None => Length::Px(0.0),
                    };
                    (grow, shrink, basis)
                }
            };
            style.flex_grow = grow;
            style.flex_shrink = shrink;
            style.flex_basis = basis.to_dimension();
        }
        "flex-grow" => style.flex_grow = factor(value, property)?,
        "flex-shrink" => style.flex_shrink = factor(value, property)?,
        "flex-basis" => style.flex_basis = length(text)?.to_dimension(),
        "justify-content" => style.justify_content = Some(parse_justify(text)?),
        "align-content" => style.align_content = Some(parse_align_content(text)?),
        "align-items" => style.align_items = Some(parse_align_items(text)?),
        "width" => style.size.width = length(text)?.to_dimension(),
        "height" => style.size.height = length(text)?.to_dimension(),
        "min-width" => style.min_size.width = length(text)?.to_dimension(),
        "min-height" => style.min_size.height = length(text)?.to_dimension(),
        "max-width" => style.max_size.width = none_or_length(text, root_font_size)?,
        "max-height" => style.max_size.height = none_or_length(text, root_font_size)?,
        "margin" => {
            let edges = parse_edges(text, root_font_size)?;
            style.margin = Rect {
                top: edges.top.to_lpa(),
                right: edges.right.to_lpa(),
                bottom: edges.bottom.to_lpa(),
                left: edges.left.to_lpa(),
            };
        }
        "margin-top" => style.margin.top = length(text)?.to_lpa(),
        "margin-right" => style.margin.right = length(text)?.to_lpa(),
        "margin-bottom" => style.margin.bottom = length(text)?.to_lpa(),
        "margin-left" => style.margin.left = length(text)?.to_lpa(),
        "padding" => {
            let edges = parse_edges(text, root_font_size)?;
            style.padding = Rect {
                top: edges.top.to_lp("padding")?,
                right: edges.right.to_lp("padding")?,
                bottom: edges.bottom.to_lp("padding")?,
                left: edges.left.to_lp("padding")?,
            };
        }
        "padding-top" => style.padding.top = length(text)?.to_lp("padding")?,
        "padding-right" => style.padding.right = length(text)?.to_lp("padding")?,
        "padding-bottom" => style.padding.bottom = length(text)?.to_lp("padding")?,
        "padding-left" => style.padding.left = length(text)?.to_lp("padding")?,
        "border" => {
            let width = LengthPercentage::Length(parse_border_width(text, root_font_size)?);
            style.border = Rect {
                top: width,
                right: width,
                bottom: width,
                left: width,
            };
        }
        "border-top" => {
            style.border.top = LengthPercentage::Length(parse_border_width(text, root_font_size)?)
        }
        "border-right" => {
            style.border.right = LengthPercentage::Length(parse_border_width(text, root_font_size)?)
        }
        "border-bottom" => {
            style.border.bottom =
                LengthPercentage::Length(parse_border_width(text, root_font_size)?)
        }
        "border-left" => {
            style.border.left = LengthPercentage::Length(parse_border_width(text, root_font_size)?)
        }
        _ => tracing::trace!(property, "ignoring declaration without layout effect"),
    }
    Ok(())
}

fn none_or_length(value: &str, root_font_size: f32) -> Result<TaffyDimension, CssError> {
    if value == "none" {
        return Ok(TaffyDimension::Auto);
    }
    Ok(parse_length(value, root_font_size)?.to_dimension())
}

/// Build a Taffy style from a style bag.
///
/// Elements start as `display: block`. `!important` declarations apply
/// after all normal ones. A declaration that cannot be interpreted is
/// logged and skipped, leaving the previous value.
pub(crate) fn to_taffy_style(bag: &StyleBag, root_font_size: f32) -> Style {
    let mut style = Style {
        display: Display::Block,
        ..Default::default()
    };
    let normal = bag.iter().filter(|d| !d.important);
    let important = bag.iter().filter(|d| d.important);
    for declaration in normal.chain(important) {
        if let Err(error) =
            apply_declaration(&mut style, &declaration.property, &declaration.value, root_font_size)
        {
            tracing::warn!(
                property = %declaration.property,
                value = %declaration.value,
                %error,
                "skipping CSS declaration"
            );
        }
    }
    style
}
