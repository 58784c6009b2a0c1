//! Country error types.

use thiserror::Error;

/// Errors raised by checked construction and action parsing.
///
/// Plain record operations never fail; these only surface through
/// [`Country::try_with_actions`](crate::Country::try_with_actions) and
/// `str::parse::<Action>()`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CountryError {
    /// Negative population rejected by strict config
    #[error("Negative population {value} for country '{country}'")]
    NegativePopulation { country: String, value: f64 },

    /// Negative area rejected by strict config
    #[error("Negative area {value} for country '{country}'")]
    NegativeArea { country: String, value: f64 },

    /// Action text without a `kind=value` separator
    #[error("Malformed action '{0}': expected KIND=VALUE")]
    MalformedAction(String),

    /// Action kind is not population, area or capital
    #[error("Unknown action kind '{0}'")]
    UnknownActionKind(String),

    /// Numeric action value failed to parse
    #[error("Invalid number '{value}' for {kind} action")]
    InvalidNumber { kind: &'static str, value: String },
}
