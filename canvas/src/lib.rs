mod color;
pub mod error;
mod gradient;
mod recording;
mod renderer;
mod surface;

pub use color::Color;
pub use error::{Result, SurfaceErr};
pub use gradient::GradientStroke;
pub use recording::{DrawCall, RecordingSurface};
pub use renderer::{CanvasBounds, PathRenderer, RenderState};
pub use surface::{Point, Surface};
