//! View logic controller module
//!
//! This module holds the state behind the window and turns user actions
//! into effects the GUI applies. It knows nothing about the GUI toolkit,
//! so the whole interaction loop can be exercised in tests.
//!
//! # Architecture
//!
//! - `ViewController`: owns the image cycler and the active layout mode
//! - `Action`: what the user did (button, menu item, key press)
//! - `Effect`: what the window must do in response
//! - `ViewState`: snapshot of the controller's state for display and tests
//!
//! # Event Flow
//!
//! ```text
//! Button / Menu / Escape → Action → ViewController::dispatch → Effect → GUI
//!                                         ↓
//!                                   ImageCycler → ResourceLoader
//! ```
//!
//! | Action             | Effect                                   | State change        |
//! |--------------------|------------------------------------------|---------------------|
//! | `AdvanceImage`     | `ReplaceImage` or `KeepImage` on failure | cursor on success   |
//! | `SelectLayout(m)`  | `Relayout(m)`                            | layout mode := m    |
//! | `ShowAbout`        | `PresentAbout`                           | none                |
//! | `Quit`             | `Exit`                                   | none                |

pub mod view_controller;

pub use view_controller::{AboutInfo, Action, Effect, ViewController, ViewState};
