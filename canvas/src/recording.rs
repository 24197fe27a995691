use crate::{Color, Point, Result, Surface, SurfaceErr};

/// A single call issued to a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    Rect { x: f32, y: f32, color: Color, size: f32 },
    Line { start: Point, end: Point },
    GradientStroke { size: f32 },
}

/// A surface that keeps every call since the last `clear`, in order.
///
/// Front-ends paint the recorded calls with whatever backend they have at hand.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    stroke: Option<f32>,
    unavailable: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `SurfaceErr::Unavailable` (or succeed again).
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// The size of the gradient stroke currently set, if any.
    pub fn stroke(&self) -> Option<f32> {
        self.stroke
    }

    /// The positions of every marker drawn since the last clear.
    pub fn markers(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                DrawCall::Rect { x, y, .. } => Some(Point::new(x, y)),
                _ => None,
            })
            .collect()
    }

    /// Every segment drawn since the last clear.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                DrawCall::Line { start, end } => Some((start, end)),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(SurfaceErr::Unavailable);
        }

        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) -> Result<()> {
        self.check()?;
        self.calls.clear();
        self.calls.push(DrawCall::Clear { width, height });
        Ok(())
    }

    fn draw_rect(&mut self, x: f32, y: f32, color: Color, size: f32) -> Result<()> {
        self.check()?;
        self.calls.push(DrawCall::Rect { x, y, color, size });
        Ok(())
    }

    fn draw_line_segment(&mut self, start: Point, end: Point) -> Result<()> {
        self.check()?;
        self.calls.push(DrawCall::Line { start, end });
        Ok(())
    }

    fn set_gradient_stroke(&mut self, size: f32) -> Result<()> {
        self.check()?;
        self.stroke = Some(size);
        self.calls.push(DrawCall::GradientStroke { size });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_calls() {
        let mut surface = RecordingSurface::new();
        surface.draw_rect(1., 1., Color::WHITE, 2.).unwrap();
        surface.clear(10., 10.).unwrap();

        assert_eq!(surface.calls(), [DrawCall::Clear { width: 10., height: 10. }]);
    }

    #[test]
    fn stroke_survives_clear() {
        let mut surface = RecordingSurface::new();
        surface.set_gradient_stroke(10.).unwrap();
        surface.clear(10., 10.).unwrap();
        assert_eq!(surface.stroke(), Some(10.));
    }

    #[test]
    fn unavailable_surface_rejects_calls() {
        let mut surface = RecordingSurface::new();
        surface.set_unavailable(true);

        assert_eq!(surface.clear(1., 1.), Err(SurfaceErr::Unavailable));
        assert_eq!(
            surface.draw_line_segment(Point::new(0., 0.), Point::new(1., 1.)),
            Err(SurfaceErr::Unavailable)
        );
        assert!(surface.calls().is_empty());
    }
}
