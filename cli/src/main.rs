//! # tieba CLI
//!
//! Terminal front end for the tieba homepage router.
//!
//! ## Usage
//!
//! - `tieba` - Browse the page interactively
//! - `tieba --page '#hot'` - Load the page at a fragment
//! - `tieba visit hot rankings --back 1` - Click through pages and print the result
//! - `tieba layout` - Print the layout in effect as JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;
mod session;

use commands::{browse_command, layout_command, visit_command};
use config::LayoutLoader;

/// tieba - Forum homepage with hash-based page routing
#[derive(Parser)]
#[command(name = "tieba")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Forum homepage with hash-based page routing")]
#[command(long_about = None)]
struct Cli {
    /// Layout file or directory path
    #[arg(short, long, env = "TIEBA_CONFIG")]
    config: Option<PathBuf>,

    /// Address fragment the page is loaded with, e.g. "#hot"
    #[arg(short, long, default_value = "")]
    page: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the page interactively (default)
    Browse,

    /// Click the nav link of each page in turn, then print the page
    Visit {
        /// Pages to visit, in order
        pages: Vec<String>,

        /// Press back this many times afterwards
        #[arg(long, default_value_t = 0)]
        back: usize,
    },

    /// Print the layout in effect as JSON
    Layout,
}

/// Log filter for the verbosity flag
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Build a layout loader from CLI arguments
fn build_layout_loader(cli: &Cli) -> LayoutLoader {
    let mut loader = LayoutLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_filter(cli.verbose)))
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let loaded = build_layout_loader(&cli).load().await?;
    tracing::info!(source = %loaded.source, "layout loaded");

    match cli.command {
        Some(Commands::Visit { pages, back }) => visit_command(loaded, cli.page, pages, back).await,
        Some(Commands::Layout) => layout_command(loaded).await,
        Some(Commands::Browse) | None => browse_command(loaded, cli.page).await,
    }
}
