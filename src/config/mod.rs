//! Configuration management module
//!
//! This module handles loading application configuration. Configuration is
//! read from `config.json` in the Gopher config directory; a missing or
//! corrupt file falls back to defaults. The application never writes it.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, LayoutSettings, NetworkSettings, WindowState};
