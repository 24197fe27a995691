mod app_state;
mod model;

pub use app_state::AppState;
pub use model::{AppView, LogLine, Prediction};
