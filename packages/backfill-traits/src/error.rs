use std::fmt;

use cssparser::{BasicParseError, BasicParseErrorKind};

/// Why a raw CSS value could not be turned into a value object.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueParseError {
    /// The input held no tokens at all.
    Empty,
    /// A token of the wrong kind, e.g. an identifier where a length was expected.
    UnexpectedToken(String),
    /// A dimension with a unit this value type does not know.
    UnknownUnit(String),
    /// A valid value followed by more tokens.
    TrailingInput,
    /// The color parser rejected the input.
    InvalidColor(String),
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueParseError::Empty => write!(f, "empty value"),
            ValueParseError::UnexpectedToken(token) => write!(f, "unexpected token {token}"),
            ValueParseError::UnknownUnit(unit) => write!(f, "unknown unit \"{unit}\""),
            ValueParseError::TrailingInput => write!(f, "unexpected input after value"),
            ValueParseError::InvalidColor(reason) => write!(f, "invalid color: {reason}"),
        }
    }
}

impl std::error::Error for ValueParseError {}

impl<'i> From<BasicParseError<'i>> for ValueParseError {
    fn from(err: BasicParseError<'i>) -> Self {
        match err.kind {
            BasicParseErrorKind::EndOfInput => ValueParseError::Empty,
            BasicParseErrorKind::UnexpectedToken(token) => {
                ValueParseError::UnexpectedToken(format!("{token:?}"))
            }
            other => ValueParseError::UnexpectedToken(format!("{other:?}")),
        }
    }
}
