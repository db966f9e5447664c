//! Bhandara command line: find free food camps near you

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cmd;
mod config;
mod context;
mod render;

use config::Config;
use context::AppContext;

#[derive(Parser)]
#[command(name = "bhandara")]
#[command(about = "Find free food camps near you")]
#[command(version)]
struct Cli {
    /// Log requests and lookups to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List camps around a place or position
    Nearby(cmd::nearby::NearbyArgs),

    /// Show one camp in full
    Show(cmd::show::ShowArgs),

    /// Add a camp to the directory
    Add(cmd::add::AddArgs),

    /// Check that the camp directory is reachable
    Health,

    /// Search for a place by name or address
    Geocode {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Name the place at a position
    Reverse {
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        #[arg(allow_hyphen_values = true)]
        lng: f64,
    },

    /// Read queries from stdin, one per line, and print suggestions as they settle
    Suggest {
        /// Use the address form timing (500ms debounce, 3 characters)
        #[arg(long)]
        address: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,camp_directory=debug,geocoder=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Nearby(args) => cmd::nearby::run(&ctx, args).await,
        Commands::Show(args) => cmd::show::run(&ctx, args).await,
        Commands::Add(args) => cmd::add::run(&ctx, args).await,
        Commands::Health => cmd::health::run(&ctx).await,
        Commands::Geocode { query } => cmd::lookup::geocode(&ctx, &query.join(" ")).await,
        Commands::Reverse { lat, lng } => cmd::lookup::reverse(&ctx, lat, lng).await,
        Commands::Suggest { address } => cmd::lookup::suggest(&ctx, address).await,
    }
}
