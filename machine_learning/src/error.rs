use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::InitErr;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    /// The trainer was handed a snapshot without samples.
    EmptyDataset,
    /// Training finished with at least one non-finite parameter.
    NumericDivergence { weight: f32, bias: f32 },
    /// The initial parameters could not be drawn.
    Init(InitErr),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::EmptyDataset => write!(f, "Tried to train on an empty dataset"),
            MlErr::NumericDivergence { weight, bias } => write!(
                f,
                "Training diverged, ended with weight {weight} and bias {bias}"
            ),
            MlErr::Init(e) => write!(f, "Failed to draw the initial parameters: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Init(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InitErr> for MlErr {
    fn from(value: InitErr) -> Self {
        Self::Init(value)
    }
}
