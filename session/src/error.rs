use std::{error::Error, fmt, io};

use canvas::SurfaceErr;
use machine_learning::MlErr;

/// The session module's result type.
pub type Result<T> = std::result::Result<T, SessionErr>;

/// All errors that can occur while running a session.
#[derive(Debug)]
pub enum SessionErr {
    /// The requested input is not a usable number.
    InvalidInput(String),
    /// Invalid configuration, caught before the session starts.
    InvalidConfig(String),
    /// A configuration file or a payload could not be (de)serialized.
    Json(serde_json::Error),
    /// Training failed, nothing was appended.
    Ml(MlErr),
    /// The drawing surface failed while rendering.
    Render(SurfaceErr),
    /// The background training task panicked or was cancelled.
    TrainingTask(String),
    /// An underlying I/O error not covered by the above variants.
    Io(io::Error),
}

impl fmt::Display for SessionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(input) => write!(f, "invalid input: {input:?}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Ml(e) => write!(f, "training error: {e}"),
            Self::Render(e) => write!(f, "render error: {e}"),
            Self::TrainingTask(msg) => write!(f, "training task failed: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for SessionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Ml(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlErr> for SessionErr {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}

impl From<SurfaceErr> for SessionErr {
    fn from(e: SurfaceErr) -> Self {
        Self::Render(e)
    }
}

impl From<serde_json::Error> for SessionErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<io::Error> for SessionErr {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Boundary conversion for binaries.
impl From<SessionErr> for io::Error {
    fn from(value: SessionErr) -> Self {
        match value {
            SessionErr::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
