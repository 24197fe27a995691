use std::sync::Arc;

use anyhow::Result;
use canvas::{CanvasBounds, RecordingSurface};
use log::{debug, error};
use rand::{rngs::StdRng, SeedableRng};
use session::{demo, CycleEvent, Outcome, Session, SessionConfig};
use tokio::{
    runtime::Runtime,
    sync::mpsc::{self, UnboundedReceiver},
    task::JoinHandle,
};

use super::{AppView, LogLine, Prediction};

const MAX_LOGS: usize = 200;

type Cycle = JoinHandle<session::Result<Outcome>>;

/// Drives the TUI state: owns the session, spawns cycles on its runtime and drains their
/// events once per frame.
pub struct AppState {
    pub input: String,
    runtime: Runtime,
    session: Arc<Session<RecordingSurface>>,
    events: UnboundedReceiver<CycleEvent>,
    pending: Vec<(String, Cycle)>,
    bounds: CanvasBounds,
    rng: StdRng,
    last: Option<Prediction>,
    logs: Vec<LogLine>,
}

impl AppState {
    /// Creates a new `AppState`, starting a session with the given config.
    ///
    /// # Errors
    /// Returns an error if the runtime or the session cannot be created.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let runtime = Runtime::new()?;
        let (tx, events) = mpsc::unbounded_channel();
        let session = Session::new(config, RecordingSurface::new(), Arc::new(tx))?;

        let mut state = Self {
            input: String::new(),
            runtime,
            session: Arc::new(session),
            events,
            pending: Vec::new(),
            bounds: config.canvas.bounds(),
            rng: StdRng::from_os_rng(),
            last: None,
            logs: Vec::new(),
        };

        state.push_log(
            "INFO",
            format!(
                "session started with {} samples",
                state.session.snapshot().len()
            ),
        );

        Ok(state)
    }

    /// Starts a compute cycle for the current input.
    pub fn compute(&mut self) {
        let input = self.input.clone();
        let session = Arc::clone(&self.session);
        debug!("spawning cycle for {input:?}");

        let cycle = {
            let input = input.clone();
            self.runtime
                .spawn(async move { session.compute(&input).await })
        };

        self.pending.push((input, cycle));
    }

    /// Fills the input with random pairs, the way the demo page did.
    pub fn generate(&mut self) {
        let (min, max) = (self.bounds.min_val as i32, self.bounds.max_val as i32);

        match demo::random_pairs_json(&mut self.rng, min, max) {
            Ok(json) => self.input = json,
            Err(e) => self.push_log("ERROR", e.to_string()),
        }
    }

    /// Drains every pending event and finished cycle. Non-blocking.
    ///
    /// Should be called once per TUI frame tick.
    pub fn tick(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }

        let (done, pending) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition::<Vec<_>, _>(|(_, cycle)| cycle.is_finished());
        self.pending = pending;

        for (input, cycle) in done {
            match self.runtime.block_on(cycle) {
                Ok(Ok(Outcome::Aborted)) => {
                    self.push_log("WARN", format!("{input:?} is not a usable number"))
                }
                Ok(Ok(Outcome::Rejected)) => {
                    self.push_log("WARN", format!("{input:?} rejected, a cycle is running"))
                }
                // completed and failed cycles already reported through the observer
                Ok(_) => {}
                Err(e) => {
                    error!("cycle task failed: {e}");
                    self.push_log("ERROR", format!("cycle task failed: {e}"));
                }
            }
        }
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> AppView {
        let surface = self.session.surface();
        let surface = surface.lock();

        AppView {
            phase: self.session.phase(),
            in_flight: self.session.cycles_in_flight(),
            busy: !self.pending.is_empty(),
            samples: self.session.store().len(),
            bounds: self.bounds,
            stroke: surface.stroke(),
            calls: surface.calls().to_vec(),
            last: self.last,
            input: self.input.clone(),
            logs: self.logs.clone(),
        }
    }

    fn apply(&mut self, event: CycleEvent) {
        let elapsed_ms = event.elapsed_ms().unwrap_or_default();

        match event {
            CycleEvent::Predicted { x, y, elapsed } => {
                self.push_log("INFO", format!("x = {x} -> y = {y:.4} in {elapsed_ms:.3} ms"));
                self.last = Some(Prediction { x, y, elapsed });
            }
            CycleEvent::Failed { x, reason } => {
                self.push_log("ERROR", format!("x = {x}: {reason}"));
            }
        }
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}
