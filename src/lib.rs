//! # `cavityflow`: Finite-difference solver for the lid-driven cavity flow
//!
//! Solves the 2-dimensional incompressible Navier-Stokes equations in a
//! rectangular cavity whose lid slides with constant velocity. Space is
//! discretized by central differences on a uniform node grid, time by an
//! explicit fractional-step scheme:
//!
//! 1. Predict an intermediate velocity from diffusion and convection
//! 2. Relax a pressure Poisson equation on the predicted divergence
//! 3. Project the prediction onto the pressure gradient
//!
//! ## Implemented solver
//!
//! - `2-D lid-driven cavity flow: Direct numerical simulation`,
//! see [`navier_stokes::Cavity2D`]
//!
//! # Example
//! Solve the Re = 100 reference cavity
//! ```ignore
//! use cavityflow::grid::Grid;
//! use cavityflow::navier_stokes::Cavity2D;
//! use cavityflow::params::FluidParams;
//! use cavityflow::{integrate, Integrate};
//!
//! fn main() {
//!     // Parameters
//!     let (nx, ny) = (81, 81);
//!     let grid = Grid::new(nx, ny, 2., 2.).unwrap();
//!     let params = FluidParams::new(0.1, 1.15, 5., 1e-3, 5.).unwrap();
//!     let mut cavity = Cavity2D::new(grid, params);
//!     // Set initial conditions
//!     cavity.random_disturbance(1e-3);
//!     // Write first diagnostics
//!     cavity.callback();
//!     let tmax = cavity.params.tmax;
//!     integrate(&mut cavity, tmax, Some(0.5));
//! }
//! ```
//!
//! ## Documentation
//!
//! Download and run:
//!
//! `cargo doc --open`
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
pub mod error;
pub mod field;
pub mod grid;
pub mod navier_stokes;
pub mod params;
pub mod solver;

use std::time::{Duration, Instant};

const MAX_TIMESTEP: usize = 10_000_000;

/// Integrate trait, step forward in time, and write results
pub trait Integrate {
    /// Update solution
    fn update(&mut self);
    /// Receive current time
    fn get_time(&self) -> f64;
    /// Get timestep
    fn get_dt(&self) -> f64;
    /// Callback function (can be used for i/o)
    fn callback(&mut self);
    /// Additional break criteria
    fn exit(&mut self) -> bool;
}

/// Integrate a pde that implements the `Integrate` trait.
///
/// Specify `save_intervall` to force writing an output.
///
/// The loop steps until the time exceeds `max_time` by one timestep, a
/// run over a horizon that is an exact multiple of the timestep
/// therefore ends at `max_time + dt`.
///
/// Stop criteria:
/// 1. Time limit
/// 2. Timestep limit
/// 3. Break criteria of the pde itself
///
/// Returns the elapsed wall-clock time of the loop.
pub fn integrate<T: Integrate>(
    pde: &mut T,
    max_time: f64,
    save_intervall: Option<f64>,
) -> Duration {
    let now = Instant::now();
    let mut timestep: usize = 0;
    let eps_dt = pde.get_dt() * 1e-4;
    loop {
        // Update
        pde.update();
        timestep += 1;

        // Save
        if let Some(dt_save) = &save_intervall {
            if (pde.get_time() % dt_save) < pde.get_dt() / 2.
                || (pde.get_time() % dt_save) > dt_save - pde.get_dt() / 2.
            {
                pde.callback();
            }
        }

        // Break
        if pde.get_time() + eps_dt >= max_time + pde.get_dt() {
            log::info!("time limit reached: {:?}", pde.get_time());
            break;
        }
        if timestep >= MAX_TIMESTEP {
            log::warn!("timestep limit reached: {:?}", timestep);
            break;
        }
        if pde.exit() {
            log::warn!("break criteria triggered");
            break;
        }
    }
    now.elapsed()
}
