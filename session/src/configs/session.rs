use std::{env, fs, path::Path};

use log::info;
use machine_learning::Sample;
use serde::Deserialize;

use super::{CanvasConfig, TrainingConfig};
use crate::{Result, SessionErr};

/// Environment variable holding the path of an optional JSON configuration file.
pub const CONFIG_ENV: &str = "LEARNER_CONFIG";

/// What to do with a cycle requested while another one is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPolicy {
    /// Wait for the running cycle to finish, cycles run one after the other.
    #[default]
    Queue,
    /// Refuse the new cycle right away.
    Reject,
    /// Let cycles interleave, each one trains on whatever snapshot it reads.
    Unguarded,
}

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub training: TrainingConfig,
    pub canvas: CanvasConfig,
    pub admission: AdmissionPolicy,
    /// The `[x, y]` pairs known at startup.
    pub seed_dataset: Vec<(f32, f32)>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        // y = 2x - 1
        let seed_dataset = [-1., 0., 1., 2., 3., 4.]
            .into_iter()
            .zip([-3., -1., 1., 3., 5., 7.])
            .collect();

        Self {
            training: TrainingConfig::default(),
            canvas: CanvasConfig::default(),
            admission: AdmissionPolicy::default(),
            seed_dataset,
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from JSON, missing keys keep their default value.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or describes an invalid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds an invalid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        info!("loading config from {}", path.as_ref().display());
        Self::from_json(&content)
    }

    /// Loads the file named by `LEARNER_CONFIG`, or the defaults when it is not set.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks every value the session relies on.
    pub fn validate(&self) -> Result<()> {
        if self.seed_dataset.is_empty() {
            return Err(SessionErr::InvalidConfig(
                "seed_dataset must not be empty".into(),
            ));
        }

        self.training.validate()?;
        self.canvas.validate()
    }

    pub fn seed_samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.seed_dataset.iter().copied().map(Sample::from)
    }
}
