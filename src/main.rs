//! VisionCam - webcam frame captioning and visual Q&A
//!
//! Main entry point for the VisionCam server.

mod cli;
mod server;

use clap::Parser;
use tracing::{debug, info};

use visioncam_config::ConfigLoader;

use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = ConfigLoader::load_or_default(&cli.config)?;

    init_tracing(&config.logging)?;
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    match cli.command {
        None => run_server(config).await,
        Some(Commands::Run { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            run_server(config).await
        }
    }
}
