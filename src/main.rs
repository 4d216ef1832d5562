//! Name Roulette - a spinning name wheel for the terminal
//!
//! Add names, spin the wheel, and watch it slow down and land on a winner.

mod animation;
mod app;
mod components;
mod config;
mod event;
mod logging;
mod roulette;
mod theme;
mod tui;
mod ui;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Capture logs for the in-app log viewer
    logging::init_logging()?;

    // Create and run the application
    let mut app = App::new()?;
    app.run().await?;

    Ok(())
}
