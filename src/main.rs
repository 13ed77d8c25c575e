//! Command line front end of the location ranker.

#[macro_use]
extern crate log;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

use location_ranker::config::{parse_sizes, Config};
use location_ranker::io::export;
use location_ranker::utils::generator::generate_places_near;
use location_ranker::utils::pipeline::{self, RankOptions};
use location_ranker::{Algorithm, Error, Location, Place, Result};

#[derive(Debug, Parser)]
#[command(name = "location-ranker", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a dataset against one of its places and benchmark the
    /// sorting algorithms on it
    Rank {
        /// CSV file with a header row
        dataset: PathBuf,

        /// Identity of the reference place (case-insensitive, trimmed)
        #[arg(short, long)]
        reference: String,

        /// Algorithm used to rank the full dataset
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Comma separated benchmark sizes, e.g. 100,500,1000
        #[arg(long)]
        sizes: Option<String>,

        /// Do not run the benchmark
        #[arg(long)]
        skip_benchmark: bool,

        /// Write the full ranking to this CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Column holding the identity of a place
        #[arg(long)]
        name_column: Option<String>,

        /// Column holding the latitude
        #[arg(long)]
        latitude_column: Option<String>,

        /// Column holding the longitude
        #[arg(long)]
        longitude_column: Option<String>,
    },

    /// Write a synthetic dataset of random places around a centre
    Generate {
        /// CSV file to create
        output: PathBuf,

        /// Number of random places, not counting the centre
        #[arg(short = 'n', long, default_value_t = 3000)]
        count: usize,

        /// Latitude of the centre in degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude of the centre in degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// Radius in kilometers
        #[arg(long, default_value_t = 500.0)]
        radius: f64,

        /// Seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("(main) {}", e);
        eprintln!("{}", e);
        if let Error::NotFound { suggestions, .. } = &e {
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
        }
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Rank {
            dataset,
            reference,
            algorithm,
            sizes,
            skip_benchmark,
            export,
            name_column,
            latitude_column,
            longitude_column,
        } => {
            let mut config = Config::try_from_env()?;
            debug!("(run) config: {:?}", config);
            if let Some(name_column) = name_column {
                config.name_column = name_column;
            }
            if let Some(latitude_column) = latitude_column {
                config.latitude_column = latitude_column;
            }
            if let Some(longitude_column) = longitude_column {
                config.longitude_column = longitude_column;
            }

            let sizes = match (skip_benchmark, sizes) {
                (true, _) => Vec::new(),
                (false, Some(sizes)) => parse_sizes(&sizes)?,
                (false, None) => config.benchmark_sizes()?,
            };

            let options = RankOptions {
                dataset,
                reference: reference.trim().to_string(),
                columns: config.columns(),
                algorithm: algorithm.unwrap_or(config.algorithm),
                sizes,
                export,
            };
            pipeline::run(&options, &mut io::stdout().lock())
        }
        Command::Generate {
            output,
            count,
            latitude,
            longitude,
            radius,
            seed,
        } => {
            let centre = Location::new(latitude, longitude);
            if !centre.is_valid() {
                return Err(Error::InvalidLocation {
                    latitude,
                    longitude,
                });
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let mut places = vec![Place {
                uid: String::from("origin"),
                location: centre,
            }];
            places.extend(generate_places_near(&mut rng, &centre, radius, count));

            info!(
                "Writing {} places to {}",
                places.len(),
                output.display()
            );
            export::write_places(File::create(&output)?, &places)
        }
    }
}
