use crate::{Color, Result};

/// A position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The drawing primitives the renderer depends on.
///
/// Implementors decide what the calls look like, the renderer only cares about the order in
/// which they are issued.
pub trait Surface {
    /// Clears the `width` x `height` area starting at the origin.
    fn clear(&mut self, width: f32, height: f32) -> Result<()>;

    /// Fills a `size` x `size` square with its top left corner at `(x, y)`.
    fn draw_rect(&mut self, x: f32, y: f32, color: Color, size: f32) -> Result<()>;

    /// Strokes a line from `start` to `end` using the current stroke style.
    fn draw_line_segment(&mut self, start: Point, end: Point) -> Result<()>;

    /// Sets the stroke style to a gradient spanning `(0, 0)` to `(size, size)`.
    fn set_gradient_stroke(&mut self, size: f32) -> Result<()>;
}
