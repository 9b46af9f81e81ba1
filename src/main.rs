//! tworoute: split delivery stops between two drivers.
//!
//! Reads a location file, runs the genetic search and prints (or writes)
//! the resulting itinerary.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use u_tworoute::ga::GaConfig;
use u_tworoute::io::{load_locations, Itinerary};
use u_tworoute::models::{DeliveryInstance, Location};
use u_tworoute::routes::{CrossoverMode, TwoDriverProblem};

#[derive(Parser, Debug)]
#[command(name = "tworoute")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Location file: four-line text records, or a JSON array (.json)
    #[arg(value_name = "FILE")]
    locations: PathBuf,

    /// Engine configuration as JSON; flags below override its fields
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "Farmers Fridge Corporate Office")]
    depot_name: String,

    #[arg(long, default_value = "Lake & Racine")]
    depot_address: String,

    #[arg(long, default_value_t = 41.8851024, allow_hyphen_values = true)]
    depot_latitude: f64,

    #[arg(long, default_value_t = -87.6618988, allow_hyphen_values = true)]
    depot_longitude: f64,

    #[arg(long)]
    population_size: Option<usize>,

    /// Stop once total distance drops below this many meters
    #[arg(long, value_name = "METERS")]
    max_distance: Option<f64>,

    #[arg(long)]
    max_generations: Option<usize>,

    #[arg(long)]
    mutation_probability: Option<f64>,

    #[arg(long)]
    crossover_probability: Option<f64>,

    #[arg(long)]
    tournament_size: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Give each crossover child the mirror image of the other's contested stops
    #[arg(long)]
    complementary: bool,

    /// Write the itinerary here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn engine_config(&self) -> u_tworoute::Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => GaConfig::default(),
        };
        if let Some(v) = self.population_size {
            config.population_size = v;
        }
        if let Some(meters) = self.max_distance {
            config.fitness_threshold = -meters;
        }
        if let Some(v) = self.max_generations {
            config.max_generations = v;
        }
        if let Some(v) = self.mutation_probability {
            config.mutation_probability = v;
        }
        if let Some(v) = self.crossover_probability {
            config.crossover_probability = v;
        }
        if let Some(v) = self.tournament_size {
            config.tournament_size = v;
        }
        if let Some(v) = self.seed {
            config.seed = Some(v);
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> u_tworoute::Result<()> {
    let config = cli.engine_config()?;
    let depot = Location::new(
        cli.depot_name.as_str(),
        cli.depot_address.as_str(),
        cli.depot_latitude,
        cli.depot_longitude,
    );
    let stops = load_locations(&cli.locations)?;
    let instance = DeliveryInstance::new(depot, stops)?;
    let depot = instance.depot().clone();
    info!(stops = instance.num_stops(), "instance loaded");

    let mode = if cli.complementary {
        CrossoverMode::Complementary
    } else {
        CrossoverMode::Independent
    };
    let result = TwoDriverProblem::new(instance)
        .with_crossover_mode(mode)
        .solve(config)?;

    let itinerary = Itinerary::new(&result.best, &depot);
    info!(
        generations = result.generations,
        termination = ?result.termination,
        total_km = itinerary.total_km(),
        "search complete"
    );

    match &cli.output {
        Some(path) => itinerary.write_to(path)?,
        None => print!("{itinerary}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
