use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use runway::config::{FIELDS, apply_override, to_yaml, validate_assumptions};
use runway::report;
use runway::{generate_recommendations, init_logging, load_assumptions};
use runway_core::model::{
    CITY_MULTIPLIERS, CashPoint, CategoryTotal, DerivedMetrics, InputAssumptions,
};
use runway_core::{
    calculate_metrics, cash_projection, category_data, runway_sensitivity, scenarios,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "runway")]
#[command(about = "Fundraise runway and hotel revenue projections for an early-stage startup")]
struct Args {
    /// Path to a YAML assumption file (default: built-in plan)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override a single assumption, e.g. --set team.engineers=4 (see `runway fields`)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Burn breakdown, revenue ramp, budget categories and ratios
    Project,
    /// Cash left each month, with and without revenue
    Cash,
    /// Runway at a fixed set of raise amounts
    Scenarios,
    /// Runway across team sizes
    Sensitivity,
    /// Threshold-based advice for the current plan
    Recommend,
    /// Print the effective assumptions as YAML
    Defaults,
    /// Known cities and office seat costs
    Cities,
    /// Keys accepted by --set
    Fields,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ProjectionOutput<'a> {
    assumptions: &'a InputAssumptions,
    metrics: &'a DerivedMetrics,
    categories: Vec<CategoryTotal>,
    cash: Vec<CashPoint>,
}

#[derive(Serialize)]
struct CityRow {
    city: &'static str,
    multiplier: f64,
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut inputs = load_assumptions(args.config.as_deref())?;
    for spec in &args.overrides {
        apply_override(&mut inputs, spec)?;
    }
    validate_assumptions(&inputs)?;
    let inputs = inputs.normalized();

    let command = args.command.unwrap_or(Command::Project);
    tracing::info!(?command, overrides = args.overrides.len(), "Running projection");

    let metrics = calculate_metrics(&inputs);
    let json = args.format == OutputFormat::Json;
    let mut out = String::new();

    match command {
        Command::Project => {
            if json {
                return print_json(&ProjectionOutput {
                    assumptions: &inputs,
                    metrics: &metrics,
                    categories: category_data(&metrics),
                    cash: cash_projection(&metrics),
                });
            }
            report::render_projection(&mut out, &inputs, &metrics)?;
            out.push('\n');
            report::render_categories(&mut out, &category_data(&metrics), metrics.annual_burn())?;
        }
        Command::Cash => {
            let points = cash_projection(&metrics);
            if json {
                return print_json(&points);
            }
            report::render_cash(&mut out, &points)?;
        }
        Command::Scenarios => {
            let rows = scenarios(metrics.monthly_burn());
            if json {
                return print_json(&rows);
            }
            report::render_scenarios(&mut out, &rows)?;
        }
        Command::Sensitivity => {
            let points = runway_sensitivity(
                metrics.raise_dollars,
                metrics.monthly_burn(),
                metrics.total_headcount(),
            );
            if json {
                return print_json(&points);
            }
            report::render_sensitivity(&mut out, &points, metrics.total_headcount())?;
        }
        Command::Recommend => {
            let recs = generate_recommendations(&inputs, &metrics);
            if json {
                return print_json(&recs);
            }
            report::render_recommendations(&mut out, &recs)?;
        }
        Command::Defaults => {
            if json {
                return print_json(&inputs);
            }
            out = to_yaml(&inputs)?;
        }
        Command::Cities => {
            if json {
                let rows: Vec<CityRow> = CITY_MULTIPLIERS
                    .iter()
                    .map(|&(city, multiplier)| CityRow { city, multiplier })
                    .collect();
                return print_json(&rows);
            }
            report::render_cities(&mut out)?;
        }
        Command::Fields => {
            if json {
                return print_json(&FIELDS);
            }
            for field in FIELDS {
                out.push_str(field);
                out.push('\n');
            }
        }
    }

    print!("{out}");
    Ok(())
}
