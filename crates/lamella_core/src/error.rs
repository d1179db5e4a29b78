use thiserror::Error;

/// Errors surfaced by the dispersion solver.
///
/// A mode that never accumulated enough samples to interpolate is not an
/// error: it is simply absent from the returned result set. Likewise,
/// candidate roots rejected inside a frequency slice are absorbed and only
/// observable as branch sparseness (and `tracing` diagnostics).
#[derive(Debug, Error)]
pub enum Error {
    /// The plate or sweep configuration violates a construction invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An interpolant was evaluated outside its own domain. Evaluation
    /// never extrapolates.
    #[error("fd = {fd} is outside the interpolant domain [{fd_min}, {fd_max}]")]
    Domain { fd: f64, fd_min: f64, fd_max: f64 },

    /// The caller cancelled a running computation.
    #[error("computation cancelled")]
    Cancelled,

    /// Spline construction over degenerate knots. Unreachable through the
    /// public facade, which only builds splines over strictly increasing
    /// fd samples.
    #[error("spline construction failed: {0}")]
    Spline(String),
}

pub type Result<T> = std::result::Result<T, Error>;
