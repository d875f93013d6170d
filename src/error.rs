//! Error types for importing and validating settings.

use thiserror::Error;

/// A settings import could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON syntax: {0}")]
    Syntax(String),

    /// A required key or sub-object is absent.
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    /// A field is present but holds the wrong kind of value.
    #[error("field `{field}` must be {expected}")]
    WrongType { field: String, expected: &'static str },

    /// A field has the right kind but an unsupported value.
    #[error("field `{field}` has unsupported value {value:?}")]
    InvalidValue { field: String, value: String },

    /// CSS input without a `.headline-widget` rule.
    #[error("no `.headline-widget` rule found in CSS input")]
    MissingHeadlineRule,
}

impl ParseError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub(crate) fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
        }
    }
}

/// Parsed settings fall outside the accepted ranges.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("font size must be between 8px and 200px (got {0})")]
    FontSize(f64),

    #[error("font weight must be between 100 and 900 (got {0})")]
    FontWeight(u16),

    #[error("outline width must be between 0 and 10px (got {0})")]
    OutlineWidth(f64),

    #[error("headline text is {len} characters, the limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("`{field}` must be a #rrggbb colour (got {value:?})")]
    InvalidColor { field: String, value: String },

    /// A free-form CSS value could end its declaration or the style block.
    #[error("`{field}` must not contain any of < > {{ }} ; (got {value:?})")]
    UnsafeCssValue { field: String, value: String },
}

/// Either stage of an import failed. Nothing was applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
