//! GUI controller
//!
//! Owns the Slint `MainWindow` and the shared `ViewController`. Every window
//! callback becomes an [`Action`]; the controller lock is released before
//! the returned [`Effect`] is applied, so effects never run under the lock.

use crate::{MainWindow, ShapeFrame, SurfaceLayout};
use anyhow::{Context, Result};
use gopher::config::AppConfig;
use gopher::controller::{AboutInfo, Action, Effect, ViewController};
use gopher::layout::{LayoutMode, ShapeSurface, Size};
use gopher::loader::{Resource, ResourceLoader};
use parking_lot::Mutex;
use slint::{
    ComponentHandle, Image, ModelRc, Rgba8Pixel, SharedPixelBuffer, SharedString, VecModel, Weak,
};
use std::sync::Arc;
use tracing::{debug, error, info};

impl From<LayoutMode> for SurfaceLayout {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Max => Self::Max,
            LayoutMode::VBox => Self::Vbox,
            LayoutMode::Center => Self::Center,
            LayoutMode::Padded => Self::Padded,
        }
    }
}

impl From<SurfaceLayout> for LayoutMode {
    fn from(layout: SurfaceLayout) -> Self {
        match layout {
            SurfaceLayout::Max => Self::Max,
            SurfaceLayout::Vbox => Self::VBox,
            SurfaceLayout::Center => Self::Center,
            SurfaceLayout::Padded => Self::Padded,
        }
    }
}

/// Connects the main window to the view controller
pub struct GuiController<L> {
    window: MainWindow,
    view: Arc<Mutex<ViewController<L>>>,
}

impl<L: ResourceLoader + 'static> GuiController<L> {
    /// Create the main window and wire its callbacks to `view`
    pub fn new(view: Arc<Mutex<ViewController<L>>>, config: &AppConfig) -> Result<Self> {
        let window = MainWindow::new().context("Failed to create main window")?;

        #[expect(
            clippy::cast_precision_loss,
            reason = "Window dimensions are far below f32's exact integer range"
        )]
        let size = slint::LogicalSize::new(config.window.width as f32, config.window.height as f32);
        window.window().set_size(size);

        let (layout_mode, about) = {
            let guard = view.lock();
            (guard.layout_mode(), guard.about().clone())
        };
        window.set_surface_layout(layout_mode.into());
        window.set_layout_labels(layout_labels());
        set_about(&window, &about);

        let surface = ShapeSurface::new(config.layout.padding);
        window.on_arrange_shapes(move |width, height, layout| {
            let frames = surface.arrange(layout.into(), Size::new(width, height));
            let frames: Vec<ShapeFrame> = frames
                .into_iter()
                .map(|f| ShapeFrame {
                    x: f.x,
                    y: f.y,
                    width: f.width,
                    height: f.height,
                })
                .collect();
            ModelRc::new(VecModel::from(frames))
        });

        let controller = Self { window, view };
        controller.connect(|w, handler| w.on_next_image(move || handler(Action::AdvanceImage)));
        controller.connect(|w, handler| {
            w.on_select_layout(move |layout| handler(Action::SelectLayout(layout.into())));
        });
        controller.connect(|w, handler| w.on_show_about(move || handler(Action::ShowAbout)));
        controller.connect(|w, handler| w.on_quit(move || handler(Action::Quit)));

        info!("Main window created");
        Ok(controller)
    }

    /// Register one window callback that dispatches an action
    fn connect<F>(&self, register: F)
    where
        F: FnOnce(&MainWindow, Box<dyn Fn(Action)>),
    {
        let weak = self.window.as_weak();
        let view = Arc::clone(&self.view);
        register(
            &self.window,
            Box::new(move |action| dispatch(&weak, &view, action)),
        );
    }

    /// Load the first image before the window is shown
    pub fn load_initial_image(&self) {
        info!("Loading initial image");
        dispatch(&self.window.as_weak(), &self.view, Action::AdvanceImage);
    }

    /// Show the window and block until it is closed or quit is invoked
    pub fn run(self) -> Result<()> {
        self.window.run().context("Slint event loop failed")
    }
}

/// Run `action` through the controller and apply the effect to the window
fn dispatch<L: ResourceLoader>(
    window: &Weak<MainWindow>,
    view: &Arc<Mutex<ViewController<L>>>,
    action: Action,
) {
    // Lock is dropped at the end of this statement
    let effect = view.lock().dispatch(action);

    let Some(window) = window.upgrade() else {
        debug!("Window already gone, dropping {:?}", effect);
        return;
    };
    apply_effect(&window, effect);
}

fn apply_effect(window: &MainWindow, effect: Effect) {
    match effect {
        Effect::ReplaceImage(resource) => {
            debug!("Displaying {:?}", resource);
            window.set_gopher_image(to_slint_image(&resource));
        }
        Effect::KeepImage => debug!("Image load failed, keeping current image"),
        Effect::Relayout(mode) => window.set_surface_layout(mode.into()),
        Effect::PresentAbout(about) => {
            set_about(window, &about);
            window.invoke_open_about();
        }
        Effect::Exit => {
            if let Err(e) = slint::quit_event_loop() {
                error!("Failed to quit event loop: {}", e);
            }
        }
    }
}

fn layout_labels() -> ModelRc<SharedString> {
    let labels: Vec<SharedString> = LayoutMode::ALL
        .iter()
        .map(|mode| mode.label().into())
        .collect();
    ModelRc::new(VecModel::from(labels))
}

fn set_about(window: &MainWindow, about: &AboutInfo) {
    window.set_about_title(about.title.as_str().into());
    window.set_about_description(about.description.as_str().into());
    window.set_about_version(about.version.as_str().into());
    window.set_about_author(about.author.as_str().into());
}

fn to_slint_image(resource: &Resource) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        &resource.pixels,
        resource.width,
        resource.height,
    );
    Image::from_rgba8(buffer)
}
