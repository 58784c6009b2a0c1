//! Concrete scenarios exercised through the public API only.

use anyhow::Result;
use ntest::timeout;

use country_core::{Action, ActionList, Country, CountryConfig, CountryError};

/// Sampleland: 5,000,000 people on 100,000 km^2
#[timeout(1000)]
#[test]
fn test_sampleland_density() {
    let country = Country::new("Sampleland", 5_000_000.0, 100_000.0, "Sample City");
    assert_eq!(country.density(), 50.0);
}

/// Flatland: zero area reports zero density instead of infinity
#[timeout(1000)]
#[test]
fn test_flatland_density() {
    let country = Country::new("Flatland", 100_000.0, 0.0, "Flat City");
    assert_eq!(country.density(), 0.0);
    assert!(country.density().is_finite());
}

/// Examplestan: capital replaced through the action list
#[timeout(1000)]
#[test]
fn test_examplestan_capital_replay() {
    let actions = ActionList::new().with(Action::SetCapital("New Capital".to_string()));
    let mut country =
        Country::with_actions("Examplestan", 3_000_000.0, 75_000.0, "Old Capital", actions);

    country.execute();

    assert_eq!(country.capital(), "New Capital");
    assert_eq!(country.population(), 3_000_000.0);
    assert_eq!(country.area(), 75_000.0);
}

/// Gigantica: large magnitudes stay within tolerance
#[timeout(1000)]
#[test]
fn test_gigantica_density() {
    let country = Country::new("Gigantica", 1e9, 5e6, "Mega City");
    assert!((country.density() - 200.0).abs() < 1e-6);
}

/// Full lifecycle: parse textual actions, check them, replay, inspect
#[test]
fn test_parsed_actions_lifecycle() -> Result<()> {
    let actions = ["population=2000000", "area=50000", "capital=Density City"]
        .iter()
        .map(|text| text.parse::<Action>())
        .collect::<Result<ActionList, CountryError>>()?;

    let mut country = Country::try_with_actions(
        "Densityland",
        2_000_000.0,
        40_000.0,
        "Old City",
        actions,
        &CountryConfig::strict(),
    )?;
    let before = country.density();

    country.execute();

    assert!(country.density() < before);
    assert_eq!(country.density(), 40.0);
    assert_eq!(
        country.to_string(),
        "Country: Densityland\nPopulation: 2000000\nArea: 50000 km^2\nCapital: Density City"
    );
    Ok(())
}

/// Strict config stops a bad action before the record exists
#[test]
fn test_strict_rejects_parsed_negative_area() -> Result<()> {
    let actions: ActionList = vec!["area=-1".parse::<Action>()?].into_iter().collect();

    let err = Country::try_with_actions(
        "Holeland",
        10.0,
        10.0,
        "Hole City",
        actions,
        &CountryConfig::strict(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Negative area -1 for country 'Holeland'");
    Ok(())
}
