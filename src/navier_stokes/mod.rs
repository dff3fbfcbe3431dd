//! Navier--Stokes solver for the lid-driven cavity
pub mod boundary_conditions;
pub mod cavity;
pub mod diagnostics;
pub mod functions;
pub mod momentum;
pub use cavity::Cavity2D;
