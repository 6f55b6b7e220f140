mod cli;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use log::info;

use cli::Args;
use config::Configuration;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Configuration::load(path)?
        }
        None => Configuration::default(),
    };

    for line in report::report(&config, args.show_missing) {
        println!("{line}");
    }

    Ok(())
}
