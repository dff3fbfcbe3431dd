//! # Direct numerical simulation
//! Solver for the 2-dimensional lid-driven cavity flow
//!
//! Advances the incompressible Navier-Stokes momentum equations with an
//! explicit fractional-step scheme. Every timestep predicts a starred
//! velocity without the pressure term, relaxes a pressure Poisson
//! equation on the divergence of the prediction and projects the
//! prediction back onto the pressure gradient.
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
use super::boundary_conditions::{bc_cavity, pres_bc_cavity};
use super::diagnostics;
use super::functions::{apply_random_disturbance, divergence, max_abs, norm_l2};
use super::momentum;
use crate::error::{CavityError, Result};
use crate::field::Fields;
use crate::grid::Grid;
use crate::params::{FluidParams, SolverOptions};
use crate::solver::{Poisson, Solve};
use crate::Integrate;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Solve the 2-dimensional lid-driven cavity flow
///
/// # Examples
///
/// ```
/// use cavityflow::grid::Grid;
/// use cavityflow::navier_stokes::Cavity2D;
/// use cavityflow::params::FluidParams;
/// use cavityflow::{integrate, Integrate};
///
/// let grid = Grid::new(5, 5, 1., 1.).unwrap();
/// let params = FluidParams::new(0.01, 1., 1., 0.01, 0.05).unwrap();
/// let mut cavity = Cavity2D::new(grid, params);
/// cavity.callback();
/// let tmax = cavity.params.tmax;
/// integrate(&mut cavity, tmax, None);
/// assert!(cavity.time >= tmax);
/// ```
pub struct Cavity2D {
    /// Grid points and precomputed stencil factors
    pub grid: Grid,
    /// Fluid properties and time domain
    pub params: FluidParams,
    /// Numerical options
    pub options: SolverOptions,
    /// Velocity, pressure and source arrays
    pub fields: Fields,
    /// Pressure solver
    solver: Poisson,
    /// Time
    pub time: f64,
    /// diagnostics like |div|, ...
    pub diagnostics: HashMap<String, Vec<f64>>,
}

impl Cavity2D {
    /// Create a new cavity solver with default numerical options
    pub fn new(grid: Grid, params: FluidParams) -> Self {
        Self::with_options(grid, params, SolverOptions::default())
    }

    /// Create a new cavity solver
    ///
    /// All inputs are validated by their own constructors, the solver
    /// itself starts from a fluid at rest.
    pub fn with_options(grid: Grid, params: FluidParams, options: SolverOptions) -> Self {
        let solver = Poisson::new(&grid, &options);
        let mut fields = Fields::new(&grid);

        // Diagnostics
        let mut diagnostics = HashMap::new();
        diagnostics.insert("time".to_string(), Vec::<f64>::new());
        diagnostics.insert("div".to_string(), Vec::<f64>::new());
        diagnostics.insert("umax".to_string(), Vec::<f64>::new());

        // Boundary conditions
        bc_cavity(&mut fields.u, params.u_top, options.reset_corners);
        pres_bc_cavity(&mut fields.p);

        Self {
            grid,
            params,
            options,
            fields,
            solver,
            time: 0.,
            diagnostics,
        }
    }

    /// Predict the starred velocity without the pressure term
    /// $$
    /// u* = u + dt ( nu lap(u) - u du/dx - v du/dy )
    /// $$
    pub fn predict_velocity(&mut self) {
        momentum::predict(&self.grid, &self.params, &mut self.fields);
    }

    /// Build the source of the pressure equation from the divergence
    /// of the predicted velocity
    /// $$
    /// b = rho div(u*) / dt
    /// $$
    pub fn source_term(&mut self) {
        let Fields {
            u_star, v_star, b, ..
        } = &mut self.fields;
        let rho = self.params.rho;
        let dt = self.params.dt;
        for i in 1..self.grid.nx - 1 {
            for j in 1..self.grid.ny - 1 {
                b[[i, j]] = rho
                    * ((u_star[[i + 1, j]] - u_star[[i - 1, j]]) * 0.5 * self.grid.dxi
                        + (v_star[[i, j + 1]] - v_star[[i, j - 1]]) * 0.5 * self.grid.dyi)
                    / dt;
            }
        }
    }

    /// Relax the pressure Poisson equation
    /// $$
    /// lap(p) = b
    /// $$
    pub fn solve_pres(&mut self) {
        let Fields { p, b, .. } = &mut self.fields;
        self.solver.solve(b, p);
    }

    /// Project the starred velocity onto the pressure gradient
    /// $$
    /// u = u* - dt/rho grad(p)
    /// $$
    #[allow(clippy::similar_names)]
    pub fn correct_velocity(&mut self) {
        let Fields {
            u,
            v,
            u_star,
            v_star,
            p,
            ..
        } = &mut self.fields;
        let dt = self.params.dt;
        let rhoi = 1. / self.params.rho;
        for i in 1..self.grid.nx - 1 {
            for j in 1..self.grid.ny - 1 {
                u[[i, j]] =
                    u_star[[i, j]] - (p[[i + 1, j]] - p[[i - 1, j]]) * 0.5 * self.grid.dxi * dt * rhoi;
                v[[i, j]] =
                    v_star[[i, j]] - (p[[i, j + 1]] - p[[i, j - 1]]) * 0.5 * self.grid.dyi * dt * rhoi;
            }
        }
    }

    /// Divergence du/dx + dv/dy of the current velocity
    pub fn divergence(&self) -> Array2<f64> {
        divergence(&self.grid, &self.fields.u, &self.fields.v)
    }

    /// Return an error once the divergence norm leaves the finite range
    ///
    /// # Errors
    /// `NumericalDivergence` with the current time
    pub fn check_divergence(&self) -> Result<()> {
        let norm = norm_l2(&self.divergence());
        if norm.is_finite() {
            Ok(())
        } else {
            Err(CavityError::NumericalDivergence { time: self.time })
        }
    }

    /// Reynolds number u_top * lx / nu of the lid scale
    pub fn eval_re(&self) -> f64 {
        diagnostics::reynolds(&self.params, &self.grid)
    }

    /// CFL number of the lid velocity
    pub fn eval_cfl(&self) -> f64 {
        diagnostics::cfl(&self.params, &self.grid)
    }

    /// Diffusion number of the explicit step
    pub fn eval_diffusion_number(&self) -> f64 {
        diagnostics::diffusion_number(&self.params, &self.grid)
    }

    /// Pointwise velocity magnitude sqrt(u^2 + v^2)
    pub fn velocity_magnitude(&self) -> Array2<f64> {
        let u = &self.fields.u;
        let v = &self.fields.v;
        (u * u + v * v).mapv(f64::sqrt)
    }

    /// u along the vertical centerline x = lx / 2
    pub fn centerline_u(&self) -> Array1<f64> {
        self.fields.u.row(self.grid.nx / 2).to_owned()
    }

    /// v along the horizontal centerline y = ly / 2
    pub fn centerline_v(&self) -> Array1<f64> {
        self.fields.v.column(self.grid.ny / 2).to_owned()
    }

    /// Initialize the interior velocity with random disturbances
    pub fn random_disturbance(&mut self, amp: f64) {
        apply_random_disturbance(&mut self.fields.u, amp);
        apply_random_disturbance(&mut self.fields.v, amp);
    }

    /// Reset time
    pub fn reset_time(&mut self) {
        self.time = 0.;
    }
}

impl Integrate for Cavity2D {
    /// Update 1 timestep
    fn update(&mut self) {
        // Predict starred velocity
        self.predict_velocity();
        // Divergence of the prediction
        self.source_term();
        // Relax pressure
        self.solve_pres();
        // Projection
        self.correct_velocity();
        // update time
        self.time += self.params.dt;
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn get_dt(&self) -> f64 {
        self.params.dt
    }

    fn callback(&mut self) {
        let div = self.divergence();
        let norm = norm_l2(&div);
        let umax = max_abs(&self.fields.u).max(max_abs(&self.fields.v));
        log::info!(
            "time = {:4.2}      |div| = {:4.2e}     |u|max = {:4.2e}",
            self.time,
            norm,
            umax,
        );

        // diagnostics
        if let Some(d) = self.diagnostics.get_mut("time") {
            d.push(self.time);
        }
        if let Some(d) = self.diagnostics.get_mut("div") {
            d.push(norm);
        }
        if let Some(d) = self.diagnostics.get_mut("umax") {
            d.push(umax);
        }
    }

    fn exit(&mut self) -> bool {
        if !self.options.divergence_check {
            return false;
        }
        // Break if divergence left the finite range
        if let Err(e) = self.check_divergence() {
            log::warn!("{}", e);
            return true;
        }
        false
    }
}
