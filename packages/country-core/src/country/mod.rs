//! The country record and its derived density.

#[allow(clippy::module_inception)]
mod country;

pub use country::Country;
