//! CLI for building a country record and replaying actions on it.
//!
//! Prints the record before and after the action list is replayed,
//! followed by the resulting population density.

use anyhow::{Context, Result};
use clap::Parser;
use country_core::{Action, ActionList, Country, CountryConfig};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the country tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Country name
    #[arg(long)]
    name: String,

    /// Initial population
    #[arg(long, allow_negative_numbers = true)]
    population: f64,

    /// Initial area in km^2
    #[arg(long, allow_negative_numbers = true)]
    area: f64,

    /// Initial capital
    #[arg(long)]
    capital: String,

    /// Action to replay, as population=N, area=N or capital=NAME (repeatable, applied in order)
    #[arg(long = "action", value_name = "KIND=VALUE")]
    actions: Vec<String>,

    /// Reject negative population or area
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn config(&self) -> CountryConfig {
        CountryConfig {
            reject_negative_values: self.strict,
        }
    }
}

/// Builds the country described by `args`, replays its actions and renders a report.
fn run(args: &Args) -> Result<String> {
    let actions = args
        .actions
        .iter()
        .map(|text| {
            text.parse::<Action>()
                .with_context(|| format!("Invalid --action '{}'", text))
        })
        .collect::<Result<ActionList>>()?;

    let mut country = Country::try_with_actions(
        args.name.as_str(),
        args.population,
        args.area,
        args.capital.as_str(),
        actions,
        &args.config(),
    )
    .with_context(|| format!("Failed to build country '{}'", args.name))?;

    let mut report = format!("{}\n", country);

    if !country.actions().is_empty() {
        for action in country.actions() {
            report.push_str(&format!("> {}\n", action));
        }
        country.execute();
        report.push_str(&format!("{}\n", country));
    }

    report.push_str(&format!("Density: {} per km^2\n", country.density()));
    Ok(report)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!(
        "Building country '{}' with {} actions",
        args.name,
        args.actions.len()
    );

    let report = run(&args)?;
    print!("{}", report);
    Ok(())
}
