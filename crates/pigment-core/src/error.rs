//! Error types for pigment
//!
//! Only the textual parsing boundary can fail. Numeric conversions and
//! adjustments clamp or wrap out-of-range values instead of returning errors.

use thiserror::Error;

/// Result type for pigment parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while parsing textual color notation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Empty input string
    #[error("empty color string")]
    Empty,

    /// Hex literal with a length other than 3, 6 or 8 digits
    #[error("invalid hex color length: {0} digits")]
    HexLength(usize),

    /// Hex literal containing a non-hexadecimal character
    #[error("invalid hex digit in '{0}'")]
    HexDigit(String),

    /// Functional notation with an unrecognized keyword
    #[error("unknown color function: '{0}'")]
    UnknownFunction(String),

    /// Functional notation missing its parentheses
    #[error("malformed color function: '{0}'")]
    MalformedFunction(String),

    /// Wrong number of components inside the parentheses
    #[error("wrong component count: expected {expected}, got {actual}")]
    ComponentCount {
        /// Accepted component counts, e.g. "3 or 4"
        expected: &'static str,
        /// Number of components found
        actual: usize,
    },

    /// A component that failed numeric parsing
    #[error("invalid component: '{0}'")]
    InvalidComponent(String),
}
