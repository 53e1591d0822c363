//! Style bags - ordered CSS declarations.

use std::fmt;

/// A single CSS value: numeric (`flex-grow: 1`) or textual (`8px`).
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    Number(f32),
    Text(String),
}

impl CssValue {
    /// Numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f32> for CssValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One `property: value [!important]` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: CssValue,
    pub important: bool,
}

/// An ordered bag of CSS declarations keyed by kebab-case property name.
///
/// Setting a property that already exists replaces its value in place, so
/// the order of first insertion is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBag {
    declarations: Vec<Declaration>,
}

impl StyleBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleBag::set`].
    pub fn with(mut self, property: &str, value: impl Into<CssValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a declaration.
    pub fn set(&mut self, property: &str, value: impl Into<CssValue>) {
        self.put(Declaration {
            property: property.to_string(),
            value: value.into(),
            important: false,
        });
    }

    /// Set a declaration flagged `!important`.
    pub fn set_important(&mut self, property: &str, value: impl Into<CssValue>) {
        self.put(Declaration {
            property: property.to_string(),
            value: value.into(),
            important: true,
        });
    }

    fn put(&mut self, declaration: Declaration) {
        match self
            .declarations
            .iter_mut()
            .find(|existing| existing.property == declaration.property)
        {
            Some(existing) => *existing = declaration,
            None => self.declarations.push(declaration),
        }
    }

    /// Value of a property.
    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.declaration(property).map(|d| &d.value)
    }

    /// Full declaration of a property.
    pub fn declaration(&self, property: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.property == property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.declaration(property).is_some()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Whether a non-important `property` is shadowed by an `!important`
    /// declaration of itself or of its shorthand.
    fn is_locked(&self, property: &str) -> bool {
        let important = |name: &str| self.declaration(name).is_some_and(|d| d.important);
        important(property) || shorthand_of(property).is_some_and(important)
    }

    /// Overlay `overrides` on top of this bag and return the result.
    ///
    /// An `!important` declaration here is only replaced by another
    /// `!important` declaration. An `!important` shorthand also keeps out
    /// its non-important longhands (`margin` locks `margin-left`).
    pub fn merge(&self, overrides: &StyleBag) -> StyleBag {
        let mut merged = self.clone();
        for declaration in &overrides.declarations {
            if !declaration.important && merged.is_locked(&declaration.property) {
                tracing::trace!(property = %declaration.property, "override shadowed by !important");
                continue;
            }
            merged.put(declaration.clone());
        }
        merged
    }

    /// Inline style text: `prop: value; prop: value !important`.
    pub fn to_inline_css(&self) -> String {
        self.declarations
            .iter()
            .map(|d| {
                if d.important {
                    format!("{}: {} !important", d.property, d.value)
                } else {
                    format!("{}: {}", d.property, d.value)
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Box shorthand a longhand belongs to (`padding-top` -> `padding`).
fn shorthand_of(property: &str) -> Option<&'static str> {
    ["margin", "padding", "border"].into_iter().find(|shorthand| {
        property
            .strip_prefix(shorthand)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|side| matches!(side, "top" | "right" | "bottom" | "left"))
    })
}
