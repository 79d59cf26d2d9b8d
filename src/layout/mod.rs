//! Shape surface layout
//!
//! The shape surface can arrange its children in one of four ways. The
//! active strategy is a plain [`LayoutMode`] value, and [`arrange`] is the
//! single function that turns a mode, a container size and the children's
//! minimum sizes into concrete frames. The GUI calls it whenever the mode
//! or the surface size changes.
//!
//! | Mode     | Child frame                                         |
//! |----------|-----------------------------------------------------|
//! | `Max`    | fills the container                                 |
//! | `VBox`   | full width, minimum height, stacked with padding    |
//! | `Center` | minimum size, centered                              |
//! | `Padded` | fills the container inset by padding on every side  |

pub mod arrange;
pub mod mode;

pub use arrange::{Frame, ShapeSurface, Size, arrange};
pub use mode::LayoutMode;
