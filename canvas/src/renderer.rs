use log::{debug, warn};
use machine_learning::Dataset;

use crate::{Color, Point, Result, Surface};

/// The extent of the coordinate space the path is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Side length of the square canvas.
    pub box_size: f32,
    /// Lowest value expected on either axis.
    pub min_val: f32,
    /// Highest value expected on either axis.
    pub max_val: f32,
}

impl CanvasBounds {
    /// Bounds spanning `[0, box_size]` on both axes.
    pub fn square(box_size: f32) -> Self {
        Self {
            box_size,
            min_val: 0.,
            max_val: box_size,
        }
    }

    /// Whether both coordinates of `point` fall inside `[min_val, max_val]`.
    pub fn contains(&self, point: Point) -> bool {
        let range = self.min_val..=self.max_val;
        range.contains(&point.x) && range.contains(&point.y)
    }
}

/// Everything that ends up on the canvas for a given dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// One marker per sample, in dataset order.
    pub markers: Vec<Point>,
    /// One segment per pair of consecutive samples.
    pub segments: Vec<(Point, Point)>,
}

impl RenderState {
    /// Maps every sample onto the canvas. Samples are placed as they are, callers are expected
    /// to keep them inside the canvas bounds.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let markers: Vec<_> = dataset.iter().map(|s| Point::new(s.x, s.y)).collect();
        let segments = markers.windows(2).map(|w| (w[0], w[1])).collect();

        Self { markers, segments }
    }
}

/// Draws the dataset as a path: a square marker per sample, joined by line segments.
#[derive(Debug, Clone)]
pub struct PathRenderer {
    bounds: CanvasBounds,
    dot_size: f32,
    dot_color: Color,
}

impl PathRenderer {
    /// Creates a new `PathRenderer`.
    ///
    /// # Arguments
    /// * `bounds` - The coordinate space of the canvas.
    /// * `dot_size` - The side of each marker.
    /// * `dot_color` - The fill color of each marker.
    pub fn new(bounds: CanvasBounds, dot_size: f32, dot_color: Color) -> Self {
        Self {
            bounds,
            dot_size,
            dot_color,
        }
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Sets up the stroke style of the surface, should be called once before rendering.
    pub fn prepare<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.set_gradient_stroke(self.bounds.box_size)
    }

    /// Clears the whole canvas.
    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear(self.bounds.box_size, self.bounds.box_size)
    }

    /// Draws every marker first and then every segment, so strokes are laid over the fills.
    ///
    /// # Arguments
    /// * `surface` - Where to draw.
    /// * `dataset` - The samples to draw, in path order.
    ///
    /// # Returns
    /// The drawn state, or the first error reported by the surface.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        dataset: &Dataset,
    ) -> Result<RenderState> {
        let state = RenderState::from_dataset(dataset);

        let outside = state
            .markers
            .iter()
            .filter(|&&p| !self.bounds.contains(p))
            .count();

        if outside > 0 {
            warn!(outside = outside; "points fall outside the canvas bounds");
        }

        for marker in &state.markers {
            surface.draw_rect(marker.x, marker.y, self.dot_color, self.dot_size)?;
        }

        for &(start, end) in &state.segments {
            surface.draw_line_segment(start, end)?;
        }

        debug!(
            markers = state.markers.len(),
            segments = state.segments.len();
            "path rendered"
        );

        Ok(state)
    }
}
