//! country-timeline: timeline layout engine CLI
//!
//! Thin shell over the library: read a JSON layout request, run the
//! resolver and layout engine, write the layout model as JSON. A second
//! subcommand dumps the bundled country catalogue.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use country_timeline::{
    catalog,
    model::{Continent, YearMonth},
    pipeline::{self, TimelineRequest},
    LayoutConfig, TimelineError,
};
use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "country-timeline")]
#[command(version)]
#[command(about = "Timeline layout engine for countries visited by age", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Layout computed
    1  Empty selection (no visited countries in the request)
    2  Error occurred

EXAMPLES:
    # Compute a layout from a request file
    country-timeline layout request.json --pretty

    # Pin \"today\" for reproducible output
    country-timeline layout request.json --today 2025-08

    # List the bundled catalogue
    country-timeline countries --continent Europe")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a timeline layout from a JSON request
    Layout(LayoutArgs),
    /// List the bundled country catalogue
    Countries(CountriesArgs),
}

/// Arguments for the `layout` subcommand
#[derive(Parser)]
struct LayoutArgs {
    /// Path to the JSON request, or "-" for stdin
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Override "today" (YYYY-MM); beats the request's own value and the
    /// wall clock
    #[arg(long)]
    today: Option<YearMonth>,

    /// Flag glyph height in pixels (clamped to the supported range)
    #[arg(long)]
    flag_height: Option<f64>,
}

/// Arguments for the `countries` subcommand
#[derive(Parser)]
struct CountriesArgs {
    /// Only list countries on this continent
    #[arg(long)]
    continent: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let result = match cli.command {
        Commands::Layout(args) => run_layout(&args),
        Commands::Countries(args) => run_countries(&args),
    };
    if let Err(err) = result {
        // Exit code 2 for real failures; the empty-selection rejection
        // already exited with code 1 inside run_layout.
        eprintln!("Error: {err:#}");
        std::process::exit(2);
    }
}

fn run_layout(args: &LayoutArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let request: TimelineRequest =
        serde_json::from_str(&raw).context("Failed to parse layout request JSON")?;

    let config = args
        .flag_height
        .map_or_else(LayoutConfig::default, LayoutConfig::for_flag_height);

    let output = match pipeline::run(&request, args.today, &config) {
        Ok(output) => output,
        Err(TimelineError::EmptySelection) => {
            // The one expected rejection: report the user-facing message
            // and use a distinct exit code so scripts can tell it from a
            // real failure.
            eprintln!("{}", TimelineError::EmptySelection);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    write_output(args.output.as_deref(), &json)?;
    Ok(())
}

fn run_countries(args: &CountriesArgs) -> Result<()> {
    let countries = match &args.continent {
        Some(name) => {
            let continent = Continent::parse(name).ok_or_else(|| {
                TimelineError::InvalidRequest(format!("unknown continent: {name:?}"))
            })?;
            catalog::by_continent(continent)
        }
        None => catalog::all(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
    } else {
        for country in &countries {
            println!(
                "{}  {:<30}  {}",
                country.code,
                country.name,
                country.continent
            );
        }
    }
    Ok(())
}

fn read_input(path: &std::path::Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read request from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))
    }
}

fn write_output(path: Option<&std::path::Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(json.as_bytes())
                .and_then(|()| handle.write_all(b"\n"))
                .context("Failed to write output to stdout")?;
        }
    }
    Ok(())
}
