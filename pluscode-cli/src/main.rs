//! Plus Code command-line tool.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PLUSCODE_LENGTH` | Code length for `encode` and `batch` | 10 |
//! | `PLUSCODE_REF_LAT` | Reference latitude for `shorten` and `recover` | None |
//! | `PLUSCODE_REF_LON` | Reference longitude for `shorten` and `recover` | None |
//! | `RUST_LOG` | Log filter (e.g., "pluscode=debug") | "pluscode=warn" |

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Plus Code (Open Location Code) CLI tool
#[derive(Parser)]
#[command(name = "pluscode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of digits to encode (2, 4, 6, 8, or 10-15)
    #[arg(
        short,
        long,
        env = "PLUSCODE_LENGTH",
        default_value = "10",
        global = true
    )]
    length: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate into a Plus Code
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a full Plus Code into its bounding box
    Decode {
        /// Full Plus Code (e.g., 8FVC9G8F+6W)
        code: String,

        /// Output result as JSON
        #[arg(short, long, conflicts_with = "geojson")]
        json: bool,

        /// Output the area as a GeoJSON Feature
        #[arg(short, long)]
        geojson: bool,
    },

    /// Shorten a full Plus Code relative to a nearby reference location
    Shorten {
        /// Full Plus Code
        code: String,

        /// Reference latitude
        #[arg(long, env = "PLUSCODE_REF_LAT", allow_negative_numbers = true)]
        ref_lat: f64,

        /// Reference longitude
        #[arg(long, env = "PLUSCODE_REF_LON", allow_negative_numbers = true)]
        ref_lon: f64,
    },

    /// Recover the nearest full Plus Code from a short code
    Recover {
        /// Short (or full) Plus Code
        code: String,

        /// Reference latitude
        #[arg(long, env = "PLUSCODE_REF_LAT", allow_negative_numbers = true)]
        ref_lat: f64,

        /// Reference longitude
        #[arg(long, env = "PLUSCODE_REF_LON", allow_negative_numbers = true)]
        ref_lon: f64,
    },

    /// Check whether a string is a valid Plus Code
    Validate {
        /// Candidate code
        code: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Encode multiple coordinates from a file
    Batch {
        /// Input file (CSV or GeoJSON)
        input: PathBuf,

        /// Output file (same format as input if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "lon")]
        lon_col: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pluscode=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { lat, lon, json } => commands::encode::run(lat, lon, cli.length, json),
        Commands::Decode {
            code,
            json,
            geojson,
        } => commands::decode::run(&code, json, geojson),
        Commands::Shorten {
            code,
            ref_lat,
            ref_lon,
        } => commands::shorten::run(&code, ref_lat, ref_lon),
        Commands::Recover {
            code,
            ref_lat,
            ref_lon,
        } => commands::recover::run(&code, ref_lat, ref_lon),
        Commands::Validate { code, json } => commands::validate::run(&code, json),
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
        } => commands::batch::run(input, output, cli.length, lat_col, lon_col),
    }
}
