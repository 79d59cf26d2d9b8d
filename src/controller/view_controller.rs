//! View controller implementation
//!
//! Owns the image cycler and the shape surface's layout mode, and applies
//! user actions to them.

use crate::config::AppConfig;
use crate::cycler::{Cursor, ImageCycler};
use crate::error::Result;
use crate::layout::LayoutMode;
use crate::loader::{Resource, ResourceLoader};
use tracing::{debug, info};

/// Something the user did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// "Next" button on the home tab
    AdvanceImage,
    /// One of the layout buttons on the shapes tab
    SelectLayout(LayoutMode),
    /// Help > About
    ShowAbout,
    /// File > Quit or the Escape key
    Quit,
}

/// What the window must do in response to an action
#[derive(Debug)]
pub enum Effect {
    /// Replace the displayed image and redraw
    ReplaceImage(Resource),
    /// The load failed; leave the display as it is
    KeepImage,
    /// Re-arrange and redraw the shape surface in the given mode
    Relayout(LayoutMode),
    /// Show the about panel
    PresentAbout(AboutInfo),
    /// Terminate the event loop
    Exit,
}

/// Contents of the about panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    /// Window and dialog title
    pub title: String,
    /// One-line description
    pub description: String,
    /// Application version
    pub version: String,
    /// Author credit
    pub author: String,
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self {
            title: "Gopher".to_string(),
            description: "Welcome to Gopher, a simple desktop app that displays a Gopher!"
                .to_string(),
            version: format!("v{}", env!("CARGO_PKG_VERSION")),
            author: "Ross Vincent".to_string(),
        }
    }
}

/// Snapshot of the view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Index of the displayed image
    pub cursor: Cursor,
    /// Active layout of the shape surface
    pub layout_mode: LayoutMode,
}

/// State object owned by the window
pub struct ViewController<L> {
    cycler: ImageCycler<L>,
    layout_mode: LayoutMode,
    about: AboutInfo,
}

impl<L: ResourceLoader> ViewController<L> {
    /// Create a controller around an existing cycler
    pub fn new(cycler: ImageCycler<L>, layout_mode: LayoutMode) -> Self {
        Self {
            cycler,
            layout_mode,
            about: AboutInfo::default(),
        }
    }

    /// Create a controller for the images and initial layout in `config`
    pub fn from_config(config: &AppConfig, loader: L) -> Result<Self> {
        let cycler = ImageCycler::new(config.images.iter().cloned(), loader)?;
        info!(
            "View controller created with {} image(s), layout {}",
            cycler.len(),
            config.layout.initial_mode
        );
        for (index, reference) in cycler.references().iter().enumerate() {
            debug!("Image {}: {}", index, reference);
        }
        Ok(Self::new(cycler, config.layout.initial_mode))
    }

    /// Apply `action` and return what the window must do
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatching {:?}", action);
        match action {
            Action::AdvanceImage => match self.cycler.advance().resource {
                Some(resource) => Effect::ReplaceImage(resource),
                None => Effect::KeepImage,
            },
            Action::SelectLayout(mode) => {
                if mode != self.layout_mode {
                    info!("Layout changed: {} -> {}", self.layout_mode, mode);
                }
                self.layout_mode = mode;
                Effect::Relayout(mode)
            }
            Action::ShowAbout => Effect::PresentAbout(self.about.clone()),
            Action::Quit => {
                info!("Quit requested");
                Effect::Exit
            }
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ViewState {
        ViewState {
            cursor: self.cycler.cursor(),
            layout_mode: self.layout_mode,
        }
    }

    /// Active layout mode
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    /// About panel contents
    pub fn about(&self) -> &AboutInfo {
        &self.about
    }

    /// The image cycler
    pub fn cycler(&self) -> &ImageCycler<L> {
        &self.cycler
    }
}
