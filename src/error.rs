use thiserror::Error;

/// Top-level error type for curvekit.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to random parameter sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sampling range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

/// Convenience type alias for results using [`CurveError`].
pub type Result<T> = std::result::Result<T, CurveError>;
