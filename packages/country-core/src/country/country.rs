use std::fmt;
use std::mem;

use crate::action::{Action, ActionList};
use crate::config::CountryConfig;
use crate::error::CountryError;

/// A country record with an owned list of replayable actions.
///
/// The record is move-only: it exclusively owns its [`ActionList`], so it
/// implements neither `Clone` nor `Copy`.
#[derive(Debug)]
pub struct Country {
    /// Country name, fixed at construction
    name: String,
    /// Number of inhabitants
    population: f64,
    /// Surface area in km^2
    area: f64,
    /// Capital city
    capital: String,
    /// Actions replayed by `execute`
    actions: ActionList,
}

impl Country {
    /// Creates a country with an empty action list.
    pub fn new(
        name: impl Into<String>,
        population: f64,
        area: f64,
        capital: impl Into<String>,
    ) -> Self {
        Self::with_actions(name, population, area, capital, ActionList::new())
    }

    /// Creates a country that takes ownership of `actions`.
    ///
    /// No values are checked; negative population or area is stored as given.
    pub fn with_actions(
        name: impl Into<String>,
        population: f64,
        area: f64,
        capital: impl Into<String>,
        actions: ActionList,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            area,
            capital: capital.into(),
            actions,
        }
    }

    /// Creates a country after checking its values and actions against `config`.
    ///
    /// # Arguments
    /// * `name` - Country name
    /// * `population` - Initial population
    /// * `area` - Initial area in km^2
    /// * `capital` - Initial capital
    /// * `actions` - Actions to own and replay on `execute`
    /// * `config` - Validation settings
    ///
    /// # Returns
    /// `Result<Country, CountryError>` with the first rejected value, if any.
    pub fn try_with_actions(
        name: impl Into<String>,
        population: f64,
        area: f64,
        capital: impl Into<String>,
        actions: ActionList,
        config: &CountryConfig,
    ) -> Result<Self, CountryError> {
        let name = name.into();

        let initial = [Action::SetPopulation(population), Action::SetArea(area)];
        for action in initial.iter().chain(actions.iter()) {
            if let Err(e) = action.check(&name, config) {
                tracing::warn!("Rejected country '{}': {}", name, e);
                return Err(e);
            }
        }

        Ok(Self::with_actions(name, population, area, capital, actions))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> f64 {
        self.population
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn capital(&self) -> &str {
        &self.capital
    }

    /// Returns the owned action list.
    pub fn actions(&self) -> &ActionList {
        &self.actions
    }

    pub fn set_population(&mut self, population: f64) {
        self.population = population;
    }

    pub fn set_area(&mut self, area: f64) {
        self.area = area;
    }

    pub fn set_capital(&mut self, capital: impl Into<String>) {
        self.capital = capital.into();
    }

    /// Returns inhabitants per km^2, or `0.0` when the area is exactly zero.
    pub fn density(&self) -> f64 {
        if self.area == 0.0 {
            return 0.0;
        }
        self.population / self.area
    }

    /// Applies every owned action to this country, in list order.
    ///
    /// Each call replays the whole list. Actions are assignments, so a
    /// second call leaves the record unchanged.
    pub fn execute(&mut self) {
        // Detach the list so each action can borrow the record mutably
        let actions = mem::take(&mut self.actions);

        tracing::debug!(
            "Replaying {} actions on country '{}'",
            actions.len(),
            self.name
        );
        for action in &actions {
            tracing::trace!("Country '{}': {}", self.name, action);
            action.apply(self);
        }

        self.actions = actions;
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Country: {}", self.name)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Area: {} km^2", self.area)?;
        write!(f, "Capital: {}", self.capital)
    }
}
