//! # CLI Argument Definitions
//!
//! Command-line interface of the `folio` static renderer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Render the profile page to static HTML")]
pub(crate) struct Cli {
    /// Configuration file (TOML, YAML or JSON); `FOLIO__*` variables override it
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log at DEBUG level (logs go to stderr)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render the full HTML document
    Render {
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render only the profile markup to stdout
    Fragment,
    /// List the technology badges in display order
    Badges,
}
