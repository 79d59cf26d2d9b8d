//! GUI module
//!
//! Provides the Slint-based graphical user interface. Callbacks from the
//! window are turned into controller actions, and the resulting effects
//! are applied back to the window.

pub mod gui_controller;

pub use gui_controller::GuiController;
