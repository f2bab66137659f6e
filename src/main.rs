//! switchboard: strategy registry and dispatcher CLI
//!
//! Resolves a user-selected strategy key (payment provider or file format)
//! to a service, verifies its preconditions, and performs one simulated
//! operation. No real money moves and no real files are touched.

mod cli;
mod config;
mod domain;
mod service;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::ConfigService;
use service::{FileFlow, PaymentFlow};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    // Execute command
    match cli.command {
        Commands::Pay(args) => {
            let flow = PaymentFlow::new(&config);
            flow.run(&args)?;
        }
        Commands::File(args) => {
            let flow = FileFlow::new(&config);
            flow.run(&args)?;
        }
        Commands::List => {
            let payment_registry = domain::payment::registry(&config);
            let file_registry = domain::file::registry(&config);
            println!(
                "payment providers: {}",
                payment_registry.keys().collect::<Vec<_>>().join(", ")
            );
            println!(
                "file formats: {}",
                file_registry.keys().collect::<Vec<_>>().join(", ")
            );
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("switchboard {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
