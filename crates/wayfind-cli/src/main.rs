mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayfind_core::config::WayfindConfig;

#[derive(Parser)]
#[command(name = "wayfind", about = "Indoor wayfinding: routes, map viewport and AR guidance")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Load settings from a TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known destination
    Locations(commands::locations::LocationsArgs),
    /// Plan and describe the route to a destination
    Route(commands::route::RouteArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
    /// Drive an AR session against a simulated camera
    ArDemo(commands::ar_demo::ArDemoArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<WayfindConfig> {
    match path {
        Some(path) => WayfindConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(WayfindConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Locations(args) => commands::locations::run(args),
        Commands::Route(args) => commands::route::run(args, &load_config(cli.config.as_ref())?),
        Commands::Config(args) => commands::config::run(args),
        Commands::ArDemo(args) => commands::ar_demo::run(args, &load_config(cli.config.as_ref())?),
    }
}
