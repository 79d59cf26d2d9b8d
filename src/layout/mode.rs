//! Layout mode selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the children of the shape surface are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Every child fills the whole surface, stacked on top of each other
    #[default]
    Max,
    /// Children stacked top to bottom at their minimum height
    VBox,
    /// Every child at its minimum size in the middle of the surface
    Center,
    /// Like `Max`, inset by the theme padding
    Padded,
}

impl LayoutMode {
    /// All modes, in the order their buttons appear
    pub const ALL: [Self; 4] = [Self::Max, Self::VBox, Self::Center, Self::Padded];

    /// Identifier used in configuration files and logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::VBox => "vbox",
            Self::Center => "center",
            Self::Padded => "padded",
        }
    }

    /// Caption of the button selecting this mode
    pub const fn label(self) -> &'static str {
        match self {
            Self::Max => "Max layout",
            Self::VBox => "VBox layout",
            Self::Center => "Center layout",
            Self::Padded => "Padded layout",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
