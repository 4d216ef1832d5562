//! Logging module using tui-logger
//!
//! Log records are captured in memory and shown in the logs popup.

use color_eyre::Result;
use log::LevelFilter;

/// Initialize the tui-logger system
pub fn init_logging() -> Result<()> {
    tui_logger::init_logger(LevelFilter::Trace)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to init logger: {}", e))?;

    tui_logger::set_default_level(LevelFilter::Info);

    if std::env::var("RUST_LOG").is_ok() {
        tui_logger::set_env_filter_from_env(Some("RUST_LOG"));
    }

    log::info!("Name Roulette {} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}
