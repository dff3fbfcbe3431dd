//! Nondimensional numbers of a cavity run
use crate::grid::Grid;
use crate::params::FluidParams;

/// Advective stability bound of the explicit step
pub const CFL_LIMIT: f64 = 1.0;

/// Diffusive stability bound of the explicit step
pub const DIFFUSION_LIMIT: f64 = 0.5;

/// Return Reynolds number
///
/// ```text
/// Re = u_top * lx / nu
/// ```
///
/// An inviscid run reports zero instead of dividing by the vanishing
/// viscosity.
pub fn reynolds(params: &FluidParams, grid: &Grid) -> f64 {
    if params.nu > 0. {
        params.u_top * grid.lx / params.nu
    } else {
        0.
    }
}

/// Return CFL number u_top * dt / dx of the lid velocity
pub fn cfl(params: &FluidParams, grid: &Grid) -> f64 {
    params.u_top * params.dt * grid.dxi
}

/// Return diffusion number 2 * nu * dt / dx^2
pub fn diffusion_number(params: &FluidParams, grid: &Grid) -> f64 {
    2. * params.nu * params.dt * grid.dxi * grid.dxi
}
