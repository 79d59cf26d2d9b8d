//! `Gopher` - Display a Gopher!
//!
//! A small desktop demo that cycles through a fixed list of remote images
//! and arranges a few vector shapes under switchable layouts. This crate
//! holds everything except the window itself: the image cycler, the
//! resource loader, the layout function and the controller that turns
//! user actions into effects, plus configuration, errors and logging.
//!
//! The GUI (Slint) lives in the binary and only applies [`controller::Effect`]s.

// Module declarations
pub mod config;
pub mod controller;
pub mod cycler;
pub mod error;
pub mod layout;
pub mod loader;
pub mod utils;

// Re-export commonly used types
pub use error::{GopherError, Result};
