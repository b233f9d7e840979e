use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_planner::dataset::{Dataset, DatasetError, DatasetPaths};
use metro_planner::network::{Bounds, Network};
use metro_planner::planner::{PlanError, Planner, PlannerConfig};

/// Transfer chains considered by default. Enumerating every chain of lines
/// on a real network is exponential, so the CLI bounds it unless told not to.
const DEFAULT_MAX_LINES: usize = 4;

/// Plan journeys across a multi-line rail network.
#[derive(Debug, Parser)]
#[command(name = "metro-planner", version)]
struct Args {
    /// Directory containing lines.csv, stations.csv and routes.csv
    /// [default: datasets]
    #[arg(long)]
    data: Option<PathBuf>,

    /// Longest chain of lines to consider, first and last included
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Most stations to pass on a single line, endpoints included
    #[arg(long)]
    max_stops: Option<usize>,

    /// Search every simple path, ignoring --max-lines and --max-stops
    #[arg(long)]
    exhaustive: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print network statistics and exit
    #[arg(long)]
    summary: bool,

    /// Starting station, by name or id
    #[arg(required_unless_present = "summary")]
    from: Option<String>,

    /// Destination station, by name or id
    #[arg(required_unless_present = "summary")]
    to: Option<String>,
}

impl Args {
    fn dataset_paths(&self) -> DatasetPaths {
        self.data
            .as_ref()
            .map_or_else(DatasetPaths::default, DatasetPaths::in_dir)
    }

    fn planner_config(&self) -> PlannerConfig {
        if self.exhaustive {
            PlannerConfig::default()
        } else {
            PlannerConfig::new(self.max_stops, Some(self.max_lines))
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("no station named {0:?}")]
    UnknownStation(String),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Summary {
    stations: usize,
    lines: usize,
    interchanges: usize,
    bounds: Option<Bounds>,
}

impl Summary {
    fn of(network: &Network) -> Self {
        Self {
            stations: network.stations().len(),
            lines: network.lines().len(),
            interchanges: network.interchanges().len(),
            bounds: network.bounds(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Plan(PlanError::NoRoute { from, to })) => {
            println!("No route found from {from} to {to}.");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let network = Dataset::load(&args.dataset_paths())?.into_network()?;
    info!(
        stations = network.stations().len(),
        lines = network.lines().len(),
        interchanges = network.interchanges().len(),
        "loaded network"
    );

    if args.summary {
        return print_summary(&network, args.json);
    }

    let (Some(from), Some(to)) = (&args.from, &args.to) else {
        return Ok(());
    };
    let start = network
        .find_station(from)
        .ok_or_else(|| CliError::UnknownStation(from.clone()))?;
    let goal = network
        .find_station(to)
        .ok_or_else(|| CliError::UnknownStation(to.clone()))?;

    let config = args.planner_config();
    let planner = Planner::new(&network, &config);
    let route = planner.plan_route(start.id(), goal.id())?;
    info!(
        from = %start,
        to = %goal,
        transfers = route.transfer_count(),
        "route planned"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        println!("{route}");
    }
    Ok(())
}

fn print_summary(network: &Network, json: bool) -> Result<(), CliError> {
    let summary = Summary::of(network);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Stations:     {}", summary.stations);
    println!("Lines:        {}", summary.lines);
    println!("Interchanges: {}", summary.interchanges);
    if let Some(b) = summary.bounds {
        println!("Longitude:    {} .. {}", b.min_lon, b.max_lon);
        println!("Latitude:     {} .. {}", b.min_lat, b.max_lat);
    }
    Ok(())
}
