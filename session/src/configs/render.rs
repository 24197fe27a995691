use canvas::{CanvasBounds, Color, PathRenderer};
use serde::Deserialize;

use crate::{Result, SessionErr};

/// The coordinate space and the looks of the rendered path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub box_size: f32,
    pub min_val: f32,
    pub max_val: f32,
    pub dot_size: f32,
    /// A color name (`white`, `cyan`, ...) or a `#rrggbb` literal.
    pub dot_color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            box_size: 10.,
            min_val: 0.,
            max_val: 10.,
            dot_size: 2.,
            dot_color: "white".into(),
        }
    }
}

impl CanvasConfig {
    pub(super) fn validate(&self) -> Result<()> {
        if self.box_size.is_nan() || self.box_size <= 0. {
            return Err(SessionErr::InvalidConfig(format!(
                "box_size must be positive, got {}",
                self.box_size
            )));
        }

        if self.min_val.is_nan() || self.max_val.is_nan() || self.min_val > self.max_val {
            return Err(SessionErr::InvalidConfig(format!(
                "min_val ({}) must not exceed max_val ({})",
                self.min_val, self.max_val
            )));
        }

        if self.dot_size.is_nan() || self.dot_size < 0. {
            return Err(SessionErr::InvalidConfig(format!(
                "dot_size must not be negative, got {}",
                self.dot_size
            )));
        }

        self.color().map(|_| ())
    }

    fn color(&self) -> Result<Color> {
        Color::parse(&self.dot_color)
            .ok_or_else(|| SessionErr::InvalidConfig(format!("unknown color {:?}", self.dot_color)))
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds {
            box_size: self.box_size,
            min_val: self.min_val,
            max_val: self.max_val,
        }
    }

    /// Builds the renderer for this canvas.
    pub fn renderer(&self) -> Result<PathRenderer> {
        Ok(PathRenderer::new(self.bounds(), self.dot_size, self.color()?))
    }
}
