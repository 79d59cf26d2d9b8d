//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use crate::layout::LayoutMode;
use serde::{Deserialize, Serialize};

/// Images shown when the configuration does not name any
pub const DEFAULT_IMAGE_URLS: [&str; 2] = [
    "https://t4.ftcdn.net/jpg/02/12/91/13/360_F_212911335_0jEapN9npAyc3hkJITBd5UWal14qnnod.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/c/cb/Pocket-Gopher_Ano-Nuevo-SP.jpg",
];

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ordered image references cycled by the "Next" button
    pub images: Vec<String>,
    /// HTTP settings for the resource loader
    pub network: NetworkSettings,
    /// Initial window size
    pub window: WindowState,
    /// Shape surface settings
    pub layout: LayoutSettings,
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

/// Window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

/// Shape surface settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Layout mode active when the window opens
    pub initial_mode: LayoutMode,
    /// Inset and spacing used by the padded and vbox layouts
    pub padding: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images: DEFAULT_IMAGE_URLS.iter().map(ToString::to_string).collect(),
            network: NetworkSettings::default(),
            window: WindowState::default(),
            layout: LayoutSettings::default(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            user_agent: format!("Gopher/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 640,
            height: 720,
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            initial_mode: LayoutMode::Max,
            padding: 4.0,
        }
    }
}
