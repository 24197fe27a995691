use std::time::Duration;

use log::{info, warn};
use tokio::sync::mpsc;

/// What a status observer hears about each cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleEvent {
    /// The cycle appended `(x, y)`. `elapsed` covers training and prediction.
    Predicted { x: f32, y: f32, elapsed: Duration },
    /// The cycle for `x` failed after its input was accepted.
    Failed { x: f32, reason: String },
}

impl CycleEvent {
    /// The elapsed time in milliseconds, for successful cycles.
    pub fn elapsed_ms(&self) -> Option<f64> {
        match self {
            CycleEvent::Predicted { elapsed, .. } => Some(elapsed.as_secs_f64() * 1000.),
            CycleEvent::Failed { .. } => None,
        }
    }
}

/// Receives the outcome of every admitted cycle with a valid input.
pub trait StatusObserver: Send + Sync {
    fn report(&self, event: CycleEvent);
}

/// Writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl StatusObserver for LogObserver {
    fn report(&self, event: CycleEvent) {
        let elapsed_ms = event.elapsed_ms().unwrap_or_default();

        match event {
            CycleEvent::Predicted { x, y, .. } => {
                info!(x = x, y = y; "predicted in {elapsed_ms:.3} ms")
            }
            CycleEvent::Failed { x, reason } => warn!(x = x; "cycle failed: {reason}"),
        }
    }
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StatusObserver for NoopObserver {
    fn report(&self, _event: CycleEvent) {}
}

/// Forwards events to a channel, front-ends drain it on every frame.
impl StatusObserver for mpsc::UnboundedSender<CycleEvent> {
    fn report(&self, event: CycleEvent) {
        if self.send(event).is_err() {
            warn!("status receiver dropped, event lost");
        }
    }
}
