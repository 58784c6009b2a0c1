//! Country record with an owned, replayable action list.
//!
//! Provides the mutable country record, its derived population density,
//! single-field mutation actions, and opt-in value checks.

pub mod action;
pub mod config;
pub mod country;
pub mod error;

pub use action::{Action, ActionList};
pub use config::CountryConfig;
pub use country::Country;
pub use error::CountryError;
