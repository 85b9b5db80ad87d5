// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use semrel_catalog::ErrorCatalog;
use semrel_cli::commands::{format_code_list, read_context, render_report};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "semrel-errors",
    version,
    about = "Render semantic-release error reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    /// Package manifest (package.json or .toml) providing name, version and homepage.
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every error code with its category.
    List,

    /// Render the report for one error code.
    Render {
        /// Error code, e.g. ETAGNOVERSION.
        code: String,

        /// Context object as inline JSON.
        #[arg(long)]
        context: Option<String>,

        /// Path to a JSON file holding the context object.
        #[arg(long)]
        context_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("semrel=debug")
    } else {
        EnvFilter::new("semrel=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(target: "semrel.cli", command = ?cli.command, "dispatching command");

    match cli.command {
        Commands::List => {
            print!("{}", format_code_list());
            Ok(())
        }
        Commands::Render {
            code,
            context,
            context_file,
        } => {
            let meta = semrel_config::load_metadata(cli.manifest.as_deref())?;
            let catalog = ErrorCatalog::new(&meta);
            let context = read_context(context.as_deref(), context_file.as_deref())?;
            print!("{}", render_report(&catalog, &code, &context)?);
            Ok(())
        }
    }
}
