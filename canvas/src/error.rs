use std::{error::Error, fmt};

/// The canvas module's result type.
pub type Result<T> = std::result::Result<T, SurfaceErr>;

/// Failures reported by a drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceErr {
    /// There is no surface to draw on.
    Unavailable,
    /// The surface's backend rejected a drawing call.
    Backend(String),
}

impl fmt::Display for SurfaceErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceErr::Unavailable => write!(f, "drawing surface unavailable"),
            SurfaceErr::Backend(msg) => write!(f, "drawing surface error: {msg}"),
        }
    }
}

impl Error for SurfaceErr {}
