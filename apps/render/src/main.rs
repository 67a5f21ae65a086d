mod args;
mod output;

use crate::args::{Cli, Commands};
use anyhow::Context;
use clap::Parser;
use folio_domain::PROFILE;
use folio_domain::config::RenderConfig;
use folio_kernel::config::load_config;
use folio_logger::{LevelFilter, Logger};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: RenderConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _log = Logger::builder(env!("CARGO_PKG_NAME"))
        .ansi(false)
        .level(level)
        .config(cfg.log.clone())
        .init()?;
    debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Render { output: target } => {
            if target.is_some() {
                cfg.output = target;
            }

            let html = folio_profile::render_document(&cfg.document);
            debug!(bytes = html.len(), "Rendered document");
            output::write_markup(&html, cfg.output.as_deref())?;
        },
        Commands::Fragment => {
            output::write_markup(&folio_profile::render_fragment(), None)?;
        },
        Commands::Badges => {
            output::write_stdout(output::badge_lines(PROFILE.badges).as_bytes())?;
        },
    }

    Ok(())
}
