use thiserror::Error;

/// Errors produced by the IVP solvers, the secant root finder and the
/// shooting driver. Every failure is local to one call; there is no retry
/// or global error state.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Bad solver input rejected before any integration work begins
    /// (N = 0, empty initial conditions, degenerate interval).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The secant iteration exhausted its iteration budget.
    #[error("secant method did not converge after {iterations} iterations")]
    NonConvergence { iterations: usize },
    /// Two consecutive residual values coincide, so the secant update has a
    /// zero denominator.
    #[error("secant method stalled at x = {at}: residual difference is zero")]
    SecantStalled { at: f64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
