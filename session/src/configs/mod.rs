mod render;
mod session;
mod training;

pub use render::CanvasConfig;
pub use session::{AdmissionPolicy, CONFIG_ENV, SessionConfig};
pub use training::{InitConfig, TrainingConfig};
