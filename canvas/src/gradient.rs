use crate::{Color, Point};

/// The stroke gradient used for the path: magenta at the origin, cyan halfway through the
/// diagonal and red at `(size, size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStroke {
    size: f32,
}

impl GradientStroke {
    const STOPS: [(f32, Color); 3] = [(0., Color::MAGENTA), (0.5, Color::CYAN), (1., Color::RED)];

    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// The stroke color at `point`, found by projecting it onto the gradient's diagonal.
    pub fn color_at(&self, point: Point) -> Color {
        if self.size <= 0. {
            return Self::STOPS[0].1;
        }

        let t = ((point.x + point.y) / (2. * self.size)).clamp(0., 1.);

        Self::STOPS
            .windows(2)
            .find(|w| t <= w[1].0)
            .map(|w| {
                let ((t0, c0), (t1, c1)) = (w[0], w[1]);
                c0.lerp(c1, (t - t0) / (t1 - t0))
            })
            .unwrap_or(Self::STOPS[2].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops() {
        let gradient = GradientStroke::new(10.);
        assert_eq!(gradient.color_at(Point::new(0., 0.)), Color::MAGENTA);
        assert_eq!(gradient.color_at(Point::new(5., 5.)), Color::CYAN);
        assert_eq!(gradient.color_at(Point::new(10., 10.)), Color::RED);
    }

    #[test]
    fn outside_the_box_is_clamped() {
        let gradient = GradientStroke::new(10.);
        assert_eq!(gradient.color_at(Point::new(-4., -9.)), Color::MAGENTA);
        assert_eq!(gradient.color_at(Point::new(30., 12.)), Color::RED);
    }

    #[test]
    fn degenerate_size() {
        assert_eq!(GradientStroke::new(0.).color_at(Point::new(1., 1.)), Color::MAGENTA);
    }
}
