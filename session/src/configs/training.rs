use std::num::NonZeroUsize;

use machine_learning::{LinearTrainer, initialization::ParamInit};
use serde::Deserialize;

use crate::{Result, SessionErr};

const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitConfig {
    Const { value: f32 },
    Uniform { low: f32, high: f32 },
    XavierUniform,
    Normal { mean: f32, std_dev: f32 },
}

impl From<InitConfig> for ParamInit {
    fn from(value: InitConfig) -> Self {
        match value {
            InitConfig::Const { value } => ParamInit::Const { value },
            InitConfig::Uniform { low, high } => ParamInit::Uniform { low, high },
            InitConfig::XavierUniform => ParamInit::XavierUniform,
            InitConfig::Normal { mean, std_dev } => ParamInit::Normal { mean, std_dev },
        }
    }
}

/// How each cycle trains its model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Full passes over the dataset per cycle.
    pub epochs: NonZeroUsize,
    pub learning_rate: f32,
    pub weight_init: InitConfig,
    pub bias_init: InitConfig,
    /// Re-seeds the initialization of every cycle when set.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            learning_rate: 0.01,
            weight_init: InitConfig::XavierUniform,
            bias_init: InitConfig::Const { value: 0. },
            seed: None,
        }
    }
}

impl TrainingConfig {
    pub(super) fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(SessionErr::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }

    /// Builds the trainer every cycle clones before training.
    pub fn trainer(&self) -> LinearTrainer {
        LinearTrainer::gradient_descent(self.epochs, self.learning_rate)
            .with_init(self.weight_init.into(), self.bias_init.into())
            .with_seed(self.seed)
    }
}
