//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use idmapper::config::Config;
use idmapper::output::OutputMode;

/// idmapper - Resolve legacy content URLs to canonical UUIDs
#[derive(Parser, Debug)]
#[command(
    name = "idmapper",
    version,
    about = "Resolve legacy content URLs to canonical UUIDs",
    long_about = "Map a legacy content URL to the UUID the document store knows it by.\n\n\
                  The URL's host selects an authority from the configured table;\n\
                  the document store answers where that (authority, URL) pair lives."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (defaults to $IDMAPPER_CONFIG or ~/.idmapper/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a legacy URL to its content UUID
    Resolve {
        /// The legacy content URL
        url: String,

        /// Legacy post id (defaults to the URL's `p` query parameter)
        #[arg(short, long)]
        post_id: Option<String>,

        /// Transaction id to forward (generated when omitted)
        #[arg(short, long)]
        tid: Option<String>,
    },

    /// Check whether a content UUID exists in the document store
    Exists {
        /// Content UUID
        uuid: String,

        /// Transaction id to forward (generated when omitted)
        #[arg(short, long)]
        tid: Option<String>,
    },

    /// List the configured host to authority table
    Authorities,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Command::Resolve { url, post_id, tid }) => {
            let config = Config::load(&config_path)?;
            commands::resolve(&config, &url, post_id, tid, output_mode)
        },
        Some(Command::Exists { uuid, tid }) => {
            let config = Config::load(&config_path)?;
            commands::exists(&config, &uuid, tid, output_mode)
        },
        Some(Command::Authorities) => {
            let config = Config::load(&config_path)?;
            commands::authorities(&config, output_mode);
            Ok(())
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("idmapper v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("idmapper v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'idmapper --help' for usage");
            }
            Ok(())
        },
    }
}
