mod linear_trainer;
mod standardizer;
mod trainer;

pub use linear_trainer::{Fit, LinearTrainer};
pub use trainer::Trainer;
