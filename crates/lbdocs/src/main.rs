//! lbdocs CLI - configuration and homepage tooling for the documentation site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lbdocs")]
#[command(about = "Configuration and homepage tooling for the load balancer docs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to lbdocs.toml config file
    #[arg(short, long, default_value = "lbdocs.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default site configuration
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the site configuration
    Check,

    /// Print the resolved configuration as JSON
    Config {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Render the homepage feature grid
    Features {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `config` and `features` can be piped
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
        Commands::Config { pretty } => {
            commands::config::run(&cli.config, pretty)?;
        }
        Commands::Features { output } => {
            commands::features::run(&cli.config, output)?;
        }
    }

    Ok(())
}
