//! Country configuration.

/// Validation settings for checked country construction.
#[derive(Debug, Clone, Default)]
pub struct CountryConfig {
    /// Reject negative population or area, in the record and in its actions
    /// (default: permissive)
    pub reject_negative_values: bool,
}

impl CountryConfig {
    /// Returns a config that rejects negative population and area.
    pub fn strict() -> Self {
        Self {
            reject_negative_values: true,
        }
    }
}
