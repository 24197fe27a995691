pub mod configs;
pub mod demo;
pub mod error;
pub mod gate;
pub mod input;
pub mod observer;
mod session;

pub use configs::{AdmissionPolicy, CanvasConfig, InitConfig, SessionConfig, TrainingConfig};
pub use error::{Result, SessionErr};
pub use observer::{CycleEvent, LogObserver, NoopObserver, StatusObserver};
pub use session::{CycleReport, Outcome, Phase, Session, TrainingTask};
