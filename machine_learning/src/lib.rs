pub mod dataset;
pub mod error;
pub mod initialization;
pub mod loss;
pub mod model;
pub mod optimization;
pub mod training;

pub use dataset::{Dataset, DatasetStore, Sample};
pub use error::{MlErr, Result};
pub use model::{LinearModel, predict};
pub use training::{Fit, LinearTrainer};
