//! Error types of the cavity solver
use thiserror::Error;

/// Errors reported by the cavity solver.
#[derive(Error, Debug)]
pub enum CavityError {
    /// A grid or fluid input violates its constraint.
    ///
    /// Reported from the validating constructors before any
    /// computation begins.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// The velocity field left the finite range.
    ///
    /// Only reported when the divergence check is enabled; the default
    /// run lets NaN/Inf propagate into the output arrays.
    #[error("Numerical divergence at time {time}")]
    NumericalDivergence {
        /// Simulated time at detection
        time: f64,
    },
}

/// Result type of the cavity solver
pub type Result<T> = std::result::Result<T, CavityError>;
