mod alert;
mod features;
mod geo;
mod scene;
mod session;
mod solar;
mod tracker;
mod viewer;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::geo::GeoPoint;
use crate::tracker::{HttpPositionSource, PositionSource};
use crate::web::config::ConfigError;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "overhead")]
#[command(about = "Live satellite proximity and solar production dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web service
    Serve {
        #[arg(long)]
        config: Option<String>,
    },
    /// Fetch the tracked object's position once and print the readout
    Fetch {
        #[arg(long)]
        config: Option<String>,
    },
    /// Great-circle distance in km between two "lat, lon" coordinates
    Distance { from: String, to: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Fetch { config } => fetch(config.as_deref()).await,
        Commands::Distance { from, to } => distance(&from, &to),
    }
}

fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::from_file(p),
        None => Ok(Config::default()),
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn fetch(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = HttpPositionSource::new(&config.satellite.api_base);
    match source.fetch(config.satellite.id).await {
        Ok(fix) => {
            println!("{}", fix.readout());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fetch failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn distance(from: &str, to: &str) -> ExitCode {
    match (
        GeoPoint::from_coordinates(from),
        GeoPoint::from_coordinates(to),
    ) {
        (Some(a), Some(b)) => {
            println!("{:.1} km", geo::haversine_km(a, b));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Expected coordinates as \"lat, lon\"");
            ExitCode::FAILURE
        }
    }
}
