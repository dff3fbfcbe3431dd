//! # Pressure solvers
//!
//! Relaxation solvers of the pressure equation. The elliptic update is
//! behind the [`Solve`] trait so the time integrator never commits to
//! one iteration scheme.
pub mod poisson;
pub use poisson::Poisson;
use ndarray::Array2;

/// Solve an elliptic equation on the grid nodes.
pub trait Solve {
    /// Relax `output` towards the solution for the source `input`.
    ///
    /// The boundary treatment is owned by the implementor, interior
    /// nodes are updated from `input` and the previous `output`.
    fn solve(&mut self, input: &Array2<f64>, output: &mut Array2<f64>);
}
