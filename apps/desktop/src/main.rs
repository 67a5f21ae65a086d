#![windows_subsystem = "windows"]

use anyhow::Context;
use folio_desktop::DesktopApp;
use folio_domain::config::DesktopConfig;
use folio_kernel::config::load_config;
use folio_logger::Logger;
use folio_profile::StaticProfileView;

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1);
    let cfg: DesktopConfig =
        load_config(path.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).config(cfg.log.clone()).init()?;

    DesktopApp::from(cfg).launch(StaticProfileView);

    Ok(())
}
