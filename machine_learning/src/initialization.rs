use std::{
    error::Error,
    fmt::{self, Display},
};

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError, Uniform, uniform};

/// The result type of drawing initial parameters.
pub type Result<T> = std::result::Result<T, InitErr>;

/// The distribution of an initialization policy cannot be built from its arguments.
#[derive(Debug)]
pub enum InitErr {
    Uniform(uniform::Error),
    Normal(NormalError),
}

impl Display for InitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitErr::Uniform(e) => write!(f, "invalid uniform range: {e}"),
            InitErr::Normal(e) => write!(f, "invalid normal distribution: {e}"),
        }
    }
}

impl Error for InitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InitErr::Uniform(e) => Some(e),
            InitErr::Normal(e) => Some(e),
        }
    }
}

impl From<uniform::Error> for InitErr {
    fn from(value: uniform::Error) -> Self {
        Self::Uniform(value)
    }
}

impl From<NormalError> for InitErr {
    fn from(value: NormalError) -> Self {
        Self::Normal(value)
    }
}

/// How a single parameter gets its value before training starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamInit {
    Const { value: f32 },
    /// `U(low, high)`, `high` excluded.
    Uniform { low: f32, high: f32 },
    /// Xavier uniform for a one input, one output unit: `U(-sqrt(3), sqrt(3))`.
    XavierUniform,
    Normal { mean: f32, std_dev: f32 },
}

impl ParamInit {
    /// Draws one parameter following this policy.
    ///
    /// # Arguments
    /// * `rng` - The random number generator, untouched by `Const`.
    ///
    /// # Returns
    /// The drawn value or an error if the distribution's arguments are invalid.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f32> {
        let value = match *self {
            ParamInit::Const { value } => value,
            ParamInit::Uniform { low, high } => Uniform::new(low, high)?.sample(rng),
            ParamInit::XavierUniform => {
                let range = 3f32.sqrt();
                Uniform::new_inclusive(-range, range)?.sample(rng)
            }
            ParamInit::Normal { mean, std_dev } => Normal::new(mean, std_dev)?.sample(rng),
        };

        Ok(value)
    }
}
