use std::fmt;
use std::str::FromStr;

use crate::config::CountryConfig;
use crate::country::Country;
use crate::error::CountryError;

/// A single-field assignment to a country record.
///
/// Actions are plain assignments, so applying one twice leaves the record
/// in the same state as applying it once.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Assign a new population
    SetPopulation(f64),
    /// Assign a new area in km^2
    SetArea(f64),
    /// Assign a new capital
    SetCapital(String),
}

impl Action {
    /// Applies this action to `country`.
    pub fn apply(&self, country: &mut Country) {
        match self {
            Action::SetPopulation(population) => country.set_population(*population),
            Action::SetArea(area) => country.set_area(*area),
            Action::SetCapital(capital) => country.set_capital(capital.clone()),
        }
    }

    /// Returns a static label for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Action::SetPopulation(_) => "Set population",
            Action::SetArea(_) => "Set area",
            Action::SetCapital(_) => "Set capital",
        }
    }

    /// Checks the held value against `config` on behalf of `country`.
    ///
    /// # Arguments
    /// * `country` - Name of the country the action will be applied to
    /// * `config` - Validation settings
    ///
    /// # Returns
    /// `Result<(), CountryError>` indicating whether the value is accepted.
    pub fn check(&self, country: &str, config: &CountryConfig) -> Result<(), CountryError> {
        if !config.reject_negative_values {
            return Ok(());
        }

        match self {
            Action::SetPopulation(value) if *value < 0.0 => Err(CountryError::NegativePopulation {
                country: country.to_string(),
                value: *value,
            }),
            Action::SetArea(value) if *value < 0.0 => Err(CountryError::NegativeArea {
                country: country.to_string(),
                value: *value,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetPopulation(value) => write!(f, "{} to {}", self.describe(), value),
            Action::SetArea(value) => write!(f, "{} to {} km^2", self.describe(), value),
            Action::SetCapital(value) => write!(f, "{} to {}", self.describe(), value),
        }
    }
}

/// Parses `population=<number>`, `area=<number>` or `capital=<text>`.
impl FromStr for Action {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| CountryError::MalformedAction(s.to_string()))?;
        let value = value.trim();

        match kind.trim().to_ascii_lowercase().as_str() {
            "population" => parse_number("population", value).map(Action::SetPopulation),
            "area" => parse_number("area", value).map(Action::SetArea),
            "capital" => Ok(Action::SetCapital(value.to_string())),
            other => Err(CountryError::UnknownActionKind(other.to_string())),
        }
    }
}

fn parse_number(kind: &'static str, value: &str) -> Result<f64, CountryError> {
    value.parse::<f64>().map_err(|_| CountryError::InvalidNumber {
        kind,
        value: value.to_string(),
    })
}
