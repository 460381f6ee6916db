mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod presets;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::presets::PresetStore;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_ref())?;

    info!(
        "🚀 secstructartist CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let store = PresetStore::new()?;
    let result = match cli.command {
        Commands::Render(args) => {
            info!("Dispatching to 'render' command.");
            commands::render::run(args, &store)
        }
        Commands::Presets(args) => {
            info!("Dispatching to 'presets' command.");
            commands::presets::run(args, &store)
        }
    };

    match &result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    result
}
