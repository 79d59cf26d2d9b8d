//! Frame computation for the shape surface

use super::LayoutMode;

/// Width and height in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Create a size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Position and size of one child, relative to the surface origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Frame {
    /// Create a frame
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of the frame
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Arrange `children` inside `container` according to `mode`
///
/// `children` holds the minimum size of each child; the result has one
/// frame per child, in the same order. `padding` is the inset used by
/// `Padded` and the gap between rows used by `VBox`. Negative padding is
/// treated as zero, and the `Padded` inset never exceeds half the container.
pub fn arrange(mode: LayoutMode, container: Size, children: &[Size], padding: f32) -> Vec<Frame> {
    let padding = padding.max(0.0);
    match mode {
        LayoutMode::Max => children
            .iter()
            .map(|_| Frame::new(0.0, 0.0, container.width, container.height))
            .collect(),
        LayoutMode::Padded => {
            let inset_x = padding.min(container.width / 2.0);
            let inset_y = padding.min(container.height / 2.0);
            let width = (container.width - 2.0 * inset_x).max(0.0);
            let height = (container.height - 2.0 * inset_y).max(0.0);
            children
                .iter()
                .map(|_| Frame::new(inset_x, inset_y, width, height))
                .collect()
        }
        LayoutMode::Center => children
            .iter()
            .map(|min| {
                Frame::new(
                    (container.width - min.width) / 2.0,
                    (container.height - min.height) / 2.0,
                    min.width,
                    min.height,
                )
            })
            .collect(),
        LayoutMode::VBox => {
            let mut y = 0.0;
            children
                .iter()
                .map(|min| {
                    let frame = Frame::new(0.0, y, container.width, min.height);
                    y += min.height + padding;
                    frame
                })
                .collect()
        }
    }
}

/// Columns in the button grid
pub const GRID_COLUMNS: u16 = 4;
/// Rows in the button grid
pub const GRID_ROWS: u16 = 2;
/// Minimum size of one grid cell
pub const GRID_CELL_MIN: Size = Size::new(112.0, 32.0);
/// Stroke width of the circle outline and the line
pub const STROKE_WIDTH: f32 = 5.0;

/// Minimum sizes of the demo shape surface's children
///
/// Paint order is rectangle, circle, line, then the button grid. The GUI
/// indexes the arranged frames in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSurface {
    children: Vec<Size>,
    padding: f32,
}

impl ShapeSurface {
    /// Create the demo surface using `padding` for insets and grid spacing
    ///
    /// Negative padding is clamped to zero.
    pub fn new(padding: f32) -> Self {
        let padding = padding.max(0.0);
        let columns = f32::from(GRID_COLUMNS);
        let rows = f32::from(GRID_ROWS);
        let grid_min = Size::new(
            columns * GRID_CELL_MIN.width + (columns - 1.0) * padding,
            rows * GRID_CELL_MIN.height + (rows - 1.0) * padding,
        );

        let children = vec![
            Size::new(300.0, 300.0),
            Size::new(2.0 * STROKE_WIDTH, 2.0 * STROKE_WIDTH),
            Size::new(STROKE_WIDTH, STROKE_WIDTH),
            grid_min,
        ];

        Self { children, padding }
    }

    /// Minimum size of each child, in paint order
    pub fn children(&self) -> &[Size] {
        &self.children
    }

    /// Frames of every child for a surface of `container` size
    pub fn arrange(&self, mode: LayoutMode, container: Size) -> Vec<Frame> {
        arrange(mode, container, &self.children, self.padding)
    }
}

impl Default for ShapeSurface {
    fn default() -> Self {
        Self::new(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CONTAINER: Size = Size::new(800.0, 600.0);

    fn children() -> Vec<Size> {
        vec![Size::new(300.0, 300.0), Size::new(10.0, 10.0), Size::new(460.0, 68.0)]
    }

    #[test]
    fn test_max_fills_container() {
        let frames = arrange(LayoutMode::Max, CONTAINER, &children(), 4.0);
        assert_eq!(frames.len(), 3);
        for frame in frames {
            assert_eq!(frame, Frame::new(0.0, 0.0, 800.0, 600.0));
        }
    }

    #[test]
    fn test_padded_insets_every_side() {
        let frames = arrange(LayoutMode::Padded, CONTAINER, &children(), 4.0);
        for frame in frames {
            assert_eq!(frame, Frame::new(4.0, 4.0, 792.0, 592.0));
        }
    }

    #[test]
    fn test_padded_never_negative() {
        let frames = arrange(LayoutMode::Padded, Size::new(6.0, 2.0), &children(), 4.0);
        assert!(frames.iter().all(|f| f.width == 0.0 && f.height == 0.0));
    }

    #[test]
    fn test_center_uses_min_size() {
        let frames = arrange(LayoutMode::Center, CONTAINER, &children(), 4.0);
        assert_eq!(frames[0], Frame::new(250.0, 150.0, 300.0, 300.0));
        assert_eq!(frames[1], Frame::new(395.0, 295.0, 10.0, 10.0));
        assert_eq!(frames[2].size(), Size::new(460.0, 68.0));
    }

    #[test]
    fn test_vbox_stacks_with_padding() {
        let frames = arrange(LayoutMode::VBox, CONTAINER, &children(), 4.0);
        assert_eq!(frames[0], Frame::new(0.0, 0.0, 800.0, 300.0));
        assert_eq!(frames[1], Frame::new(0.0, 304.0, 800.0, 10.0));
        assert_eq!(frames[2], Frame::new(0.0, 318.0, 800.0, 68.0));
    }

    #[test]
    fn test_no_children() {
        for mode in LayoutMode::ALL {
            assert!(arrange(mode, CONTAINER, &[], 4.0).is_empty());
        }
    }

    #[test]
    fn test_surface_children_in_paint_order() {
        let surface = ShapeSurface::default();
        assert_eq!(
            surface.children(),
            &[
                Size::new(300.0, 300.0),
                Size::new(10.0, 10.0),
                Size::new(5.0, 5.0),
                Size::new(460.0, 68.0),
            ]
        );
    }

    #[test]
    fn test_padded_inset_limited_to_half_container() {
        let frames = arrange(LayoutMode::Padded, Size::new(6.0, 2.0), &children(), 4.0);
        for frame in frames {
            assert_eq!(frame, Frame::new(3.0, 1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_negative_padding_treated_as_zero() {
        let surface = ShapeSurface::new(-10.0);
        for frame in surface.arrange(LayoutMode::Padded, Size::new(100.0, 100.0)) {
            assert_eq!(frame, Frame::new(0.0, 0.0, 100.0, 100.0));
        }

        let frames = arrange(LayoutMode::VBox, CONTAINER, &children(), -4.0);
        assert_eq!(frames[1], Frame::new(0.0, 300.0, 800.0, 10.0));
        assert_eq!(ShapeSurface::new(-10.0), ShapeSurface::new(0.0));
    }

    proptest! {
        /// Property: Max and Padded keep every child inside the surface
        #[test]
        fn filling_modes_stay_in_bounds(
            width in 0.0f32..4000.0,
            height in 0.0f32..4000.0,
            padding in -64.0f32..4096.0,
        ) {
            let container = Size::new(width, height);
            // Allow for rounding in `inset + (width - 2 * inset)`
            let slack = 1e-3;
            for mode in [LayoutMode::Max, LayoutMode::Padded] {
                for frame in arrange(mode, container, &children(), padding) {
                    prop_assert!(frame.x >= 0.0 && frame.y >= 0.0);
                    prop_assert!(frame.width >= 0.0 && frame.height >= 0.0);
                    prop_assert!(frame.x + frame.width <= width + slack);
                    prop_assert!(frame.y + frame.height <= height + slack);
                }
            }
        }

        /// Property: Center keeps each child's midpoint at the surface midpoint
        #[test]
        fn center_is_centered(width in 1.0f32..4000.0, height in 1.0f32..4000.0) {
            let container = Size::new(width, height);
            for frame in arrange(LayoutMode::Center, container, &children(), 4.0) {
                prop_assert!((frame.x + frame.width / 2.0 - width / 2.0).abs() < 0.01);
                prop_assert!((frame.y + frame.height / 2.0 - height / 2.0).abs() < 0.01);
            }
        }

        /// Property: arrangement is a pure function of its inputs
        #[test]
        fn arrange_is_deterministic(mode_index in 0usize..4, width in 0.0f32..4000.0) {
            let mode = LayoutMode::ALL[mode_index];
            let container = Size::new(width, 480.0);
            prop_assert_eq!(
                arrange(mode, container, &children(), 4.0),
                arrange(mode, container, &children(), 4.0)
            );
        }
    }
}
