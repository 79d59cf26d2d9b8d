//! `Gopher` - Display a Gopher!
//!
//! Opens a window with a "Home" tab cycling through remote gopher pictures
//! and a "Shapes" tab demonstrating switchable layouts.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gopher::{
    config::ConfigManager,
    controller::ViewController,
    error::{GopherError, get_user_friendly_error},
    loader::UrlLoader,
    utils,
};
use gui::GuiController;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Initializes logging, loads configuration, builds the view controller,
/// loads the first image and runs the window until it is closed.
fn main() -> Result<()> {
    let config_dir = ConfigManager::get_config_dir();
    utils::init_logging(&config_dir).context("Failed to initialize logging system")?;

    info!("Gopher v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match ConfigManager::load().context("Failed to load application configuration")
    {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            report_startup_error(&e);
            return Err(e);
        }
    };
    info!("Configuration loaded with {} image(s)", config.images.len());

    let loader = UrlLoader::new(&config.network).context("Failed to create resource loader")?;
    let view = ViewController::from_config(&config, loader)
        .context("Failed to create view controller")?;
    let view = Arc::new(Mutex::new(view));

    info!("Creating GUI controller");
    let gui_controller =
        GuiController::new(Arc::clone(&view), &config).context("Failed to create GUI controller")?;

    gui_controller.load_initial_image();

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("Gopher shutting down");

    Ok(())
}

/// Print a readable explanation of a startup failure
fn report_startup_error(error: &anyhow::Error) {
    let message = if let Some(gopher_error) = error.downcast_ref::<GopherError>() {
        get_user_friendly_error(gopher_error)
    } else {
        format!("{error:#}")
    };
    eprintln!("ERROR: {message}");
}
