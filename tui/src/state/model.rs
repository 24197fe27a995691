use std::time::Duration;

use canvas::{CanvasBounds, DrawCall};
use session::Phase;

/// A single log entry shown in the event panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// The last successful prediction.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub x: f32,
    pub y: f32,
    pub elapsed: Duration,
}

/// Full snapshot rendered by the TUI.
#[derive(Debug, Clone)]
pub struct AppView {
    pub phase: Phase,
    /// Admitted cycles still running.
    pub in_flight: usize,
    /// Requests spawned by the UI whose outcome has not been collected yet.
    pub busy: bool,
    pub samples: usize,
    pub bounds: CanvasBounds,
    /// Size of the gradient stroke set on the surface, if any.
    pub stroke: Option<f32>,
    pub calls: Vec<DrawCall>,
    pub last: Option<Prediction>,
    pub input: String,
    pub logs: Vec<LogLine>,
}
