use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use canvas::{PathRenderer, RenderState, Surface};
use log::{debug, info, warn};
use machine_learning::{
    Dataset, DatasetStore, Fit, LinearModel, LinearTrainer, Sample, predict, training::Trainer,
};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::{
    Result, SessionConfig, SessionErr,
    gate::AdmissionGate,
    input::parse_input,
    observer::{CycleEvent, StatusObserver},
};

/// The training step of a cycle, running in the background.
pub type TrainingTask = JoinHandle<machine_learning::Result<Fit>>;

/// The step a compute cycle is at. A session sits at `Idle` between cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Training,
    Predicting,
    Appending,
    Rendering,
}

/// A successful cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub x: f32,
    pub y: f32,
    /// The model the prediction came from.
    pub model: LinearModel,
    /// Time spent training and predicting.
    pub elapsed: Duration,
    /// Amount of samples the model was trained on.
    pub trained_on: usize,
}

/// How a compute request ended, when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed(CycleReport),
    /// The input was not a usable number, nothing changed.
    Aborted,
    /// Another cycle held the admission slot, nothing changed.
    Rejected,
}

/// The phase of every cycle in flight, oldest first.
#[derive(Debug, Default)]
struct Cycles {
    next_id: u64,
    active: Vec<(u64, Phase)>,
}

/// Tracks one cycle's phase and forgets it once the cycle leaves, whichever way it does.
struct PhaseGuard<'a> {
    cycles: &'a Mutex<Cycles>,
    id: u64,
}

impl<'a> PhaseGuard<'a> {
    fn enter(cycles: &'a Mutex<Cycles>, first: Phase) -> Self {
        let mut guard = cycles.lock();
        let id = guard.next_id;
        guard.next_id += 1;
        guard.active.push((id, first));

        Self { cycles, id }
    }

    fn advance(&self, next: Phase) {
        debug!(cycle = self.id; "cycle phase: {next:?}");

        let mut cycles = self.cycles.lock();
        if let Some((_, phase)) = cycles.active.iter_mut().find(|(id, _)| *id == self.id) {
            *phase = next;
        }
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.cycles.lock().active.retain(|(id, _)| *id != self.id);
    }
}

/// Owns everything a learn-predict-accumulate loop touches: the samples, the trainer settings,
/// the renderer and the surface it draws on.
pub struct Session<S: Surface> {
    store: Arc<DatasetStore>,
    trainer: LinearTrainer,
    renderer: PathRenderer,
    surface: Arc<Mutex<S>>,
    observer: Arc<dyn StatusObserver>,
    gate: AdmissionGate,
    cycles: Mutex<Cycles>,
}

impl<S: Surface> Session<S> {
    /// Creates a new `Session`, seeding the dataset and drawing its initial path.
    ///
    /// # Arguments
    /// * `config` - The session's configuration.
    /// * `surface` - Where the path is drawn.
    /// * `observer` - Who hears about each cycle's result.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the surface is unusable.
    pub fn new(
        config: &SessionConfig,
        surface: S,
        observer: Arc<dyn StatusObserver>,
    ) -> Result<Self> {
        config.validate()?;

        let session = Self {
            store: Arc::new(DatasetStore::seeded(config.seed_samples())),
            trainer: config.training.trainer(),
            renderer: config.canvas.renderer()?,
            surface: Arc::new(Mutex::new(surface)),
            observer,
            gate: AdmissionGate::new(config.admission),
            cycles: Mutex::default(),
        };

        session.renderer.prepare(&mut *session.surface.lock())?;
        session.redraw()?;

        info!(
            samples = session.store.len(),
            epochs = session.trainer.epochs(),
            admission:? = config.admission;
            "session started"
        );

        Ok(session)
    }

    /// Runs one compute cycle for `input`: validate, train, predict, append and render.
    ///
    /// # Returns
    /// `Outcome::Aborted` if the input is not a usable number, `Outcome::Rejected` if the
    /// admission gate refused the cycle, the cycle's report otherwise.
    ///
    /// # Errors
    /// Fails if training diverged (nothing is appended) or if rendering failed (the new sample
    /// is kept). Either way the status observer is told about it.
    pub async fn compute(&self, input: &str) -> Result<Outcome> {
        let Some(_admission) = self.gate.admit().await else {
            info!("another cycle is running, rejecting request");
            return Ok(Outcome::Rejected);
        };

        let phase = PhaseGuard::enter(&self.cycles, Phase::Validating);

        let x = match parse_input(input) {
            Ok(x) => x,
            Err(e) => {
                debug!("aborting cycle: {e}");
                return Ok(Outcome::Aborted);
            }
        };

        let started = Instant::now();
        phase.advance(Phase::Training);

        let (task, trained_on) = self.start_training();
        let fit = match Self::finish_training(task).await {
            Ok(fit) => fit,
            Err(e) => return Err(self.fail(x, e)),
        };

        phase.advance(Phase::Predicting);
        let y = predict(&fit.model, x);
        let elapsed = started.elapsed();

        phase.advance(Phase::Appending);
        self.store.append(Sample::new(x, y));

        phase.advance(Phase::Rendering);
        if let Err(e) = self.redraw() {
            return Err(self.fail(x, e));
        }

        self.observer.report(CycleEvent::Predicted { x, y, elapsed });

        Ok(Outcome::Completed(CycleReport {
            x,
            y,
            model: fit.model,
            elapsed,
            trained_on,
        }))
    }

    /// Spawns the training of a fresh model over the current snapshot.
    ///
    /// # Returns
    /// The running task and the amount of samples it trains on.
    pub fn start_training(&self) -> (TrainingTask, usize) {
        let snapshot = self.store.snapshot();
        let trained_on = snapshot.len();
        let mut trainer = self.trainer.clone();

        let task = tokio::task::spawn_blocking(move || trainer.train(&snapshot));
        (task, trained_on)
    }

    async fn finish_training(task: TrainingTask) -> Result<Fit> {
        let fit = task
            .await
            .map_err(|e| SessionErr::TrainingTask(e.to_string()))??;

        Ok(fit)
    }

    /// Clears the surface and draws the whole dataset again.
    fn redraw(&self) -> Result<RenderState> {
        let snapshot = self.store.snapshot();
        let mut surface = self.surface.lock();

        self.renderer.clear(&mut *surface)?;
        Ok(self.renderer.render(&mut *surface, &snapshot)?)
    }

    fn fail<E: Into<SessionErr>>(&self, x: f32, e: E) -> SessionErr {
        let e = e.into();
        warn!(x = x; "cycle failed: {e}");

        self.observer.report(CycleEvent::Failed {
            x,
            reason: e.to_string(),
        });

        e
    }

    /// The samples accumulated so far.
    pub fn snapshot(&self) -> Dataset {
        self.store.snapshot()
    }

    pub fn store(&self) -> Arc<DatasetStore> {
        Arc::clone(&self.store)
    }

    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    /// The phase of the oldest cycle in flight, `Idle` when there is none.
    pub fn phase(&self) -> Phase {
        self.cycles
            .lock()
            .active
            .first()
            .map_or(Phase::Idle, |&(_, phase)| phase)
    }

    /// Amount of admitted cycles that have not finished yet.
    pub fn cycles_in_flight(&self) -> usize {
        self.cycles.lock().active.len()
    }

    /// Whether a guarded cycle is in flight.
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }
}
