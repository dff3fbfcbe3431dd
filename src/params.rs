//! Fluid properties and solver options
use crate::error::{CavityError, Result};

/// Fluid properties and time domain of one run.
///
/// Captured once from validated scalar inputs; the solver never reads
/// configuration from anywhere else.
#[derive(Debug, Clone, Copy)]
pub struct FluidParams {
    /// Kinematic viscosity
    pub nu: f64,
    /// Density
    pub rho: f64,
    /// Lid velocity at the top edge
    pub u_top: f64,
    /// Timestep size
    pub dt: f64,
    /// Simulated time horizon
    pub tmax: f64,
}

impl FluidParams {
    /// Validate and capture the fluid and time-domain scalars.
    ///
    /// The lid velocity is unconstrained. A vanishing viscosity is
    /// accepted and runs the diffusion-free update.
    ///
    /// # Errors
    /// `InvalidParameter` if `nu < 0`, `rho <= 0`, `dt <= 0` or
    /// `tmax < 0`.
    pub fn new(nu: f64, rho: f64, u_top: f64, dt: f64, tmax: f64) -> Result<Self> {
        if !(nu >= 0.) {
            return Err(CavityError::InvalidParameter(format!(
                "viscosity must be non-negative, got nu = {}",
                nu
            )));
        }
        if !(rho > 0.) {
            return Err(CavityError::InvalidParameter(format!(
                "density must be positive, got rho = {}",
                rho
            )));
        }
        if !(dt > 0.) {
            return Err(CavityError::InvalidParameter(format!(
                "timestep must be positive, got dt = {}",
                dt
            )));
        }
        if !(tmax >= 0.) {
            return Err(CavityError::InvalidParameter(format!(
                "time horizon must be non-negative, got tmax = {}",
                tmax
            )));
        }
        Ok(Self {
            nu,
            rho,
            u_top,
            dt,
            tmax,
        })
    }
}

impl Default for FluidParams {
    /// Parameters of the Re = 100 reference run.
    fn default() -> Self {
        Self {
            nu: 0.1,
            rho: 1.15,
            u_top: 5.,
            dt: 1e-3,
            tmax: 5.,
        }
    }
}

/// Numerical options of the pressure iteration and run control.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Jacobi relaxation sweeps per timestep
    pub pressure_sweeps: usize,
    /// Pin the lid corners to the wall value and refresh the pressure
    /// snapshot every sweep
    pub reset_corners: bool,
    /// Stop the run once the divergence norm leaves the finite range
    pub divergence_check: bool,
}

impl SolverOptions {
    /// Validate and capture the solver options.
    ///
    /// # Errors
    /// `InvalidParameter` if `pressure_sweeps` is zero.
    pub fn new(pressure_sweeps: usize, reset_corners: bool, divergence_check: bool) -> Result<Self> {
        if pressure_sweeps == 0 {
            return Err(CavityError::InvalidParameter(
                "pressure sweeps must be >= 1, got 0".to_string(),
            ));
        }
        Ok(Self {
            pressure_sweeps,
            reset_corners,
            divergence_check,
        })
    }
}

impl Default for SolverOptions {
    /// One relaxation sweep per timestep, corner reset on, permissive
    /// divergence handling.
    fn default() -> Self {
        Self {
            pressure_sweeps: 1,
            reset_corners: true,
            divergence_check: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        assert!(FluidParams::new(0.1, 1., 1., 0.01, 1.).is_ok());
        assert!(FluidParams::new(0., 1., 1., 0.01, 0.).is_ok());
        assert!(FluidParams::new(-0.1, 1., 1., 0.01, 1.).is_err());
        assert!(FluidParams::new(0.1, 0., 1., 0.01, 1.).is_err());
        assert!(FluidParams::new(0.1, 1., 1., 0., 1.).is_err());
        assert!(FluidParams::new(0.1, 1., 1., 0.01, -1.).is_err());
        assert!(FluidParams::new(f64::NAN, 1., 1., 0.01, 1.).is_err());
    }

    #[test]
    fn test_default_reference_run() {
        let params = FluidParams::default();
        assert_eq!(params.nu, 0.1);
        assert_eq!(params.rho, 1.15);
        assert_eq!(params.u_top, 5.);
        assert_eq!(params.dt, 1e-3);
        assert_eq!(params.tmax, 5.);
    }

    #[test]
    fn test_default_options() {
        let options = SolverOptions::default();
        assert_eq!(options.pressure_sweeps, 1);
        assert!(options.reset_corners);
        assert!(!options.divergence_check);
    }

    #[test]
    fn test_options_reject_zero_sweeps() {
        assert!(SolverOptions::new(0, true, false).is_err());
        assert!(SolverOptions::new(3, false, true).is_ok());
    }
}
