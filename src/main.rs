//! # Lid-driven cavity flow
//! Run the Re = 100 reference cavity
//!
//! cargo run --release
use cavityflow::grid::Grid;
use cavityflow::navier_stokes::diagnostics::{CFL_LIMIT, DIFFUSION_LIMIT};
use cavityflow::navier_stokes::Cavity2D;
use cavityflow::params::FluidParams;
use cavityflow::{integrate, Integrate};

fn main() -> cavityflow::error::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Parameters
    let (nx, ny) = (81, 81);
    let (lx, ly) = (2., 2.);
    let nu = 0.1;
    let rho = 1.15;
    let u_top = 5.;
    let dt = 1e-3;
    let tmax = 5.;
    let grid = Grid::new(nx, ny, lx, ly)?;
    let params = FluidParams::new(nu, rho, u_top, dt, tmax)?;
    let mut cavity = Cavity2D::new(grid, params);

    // Stability preview
    log::info!(
        "Re = {:4.2}      CFL = {:4.2}     Dn = {:4.2}",
        cavity.eval_re(),
        cavity.eval_cfl(),
        cavity.eval_diffusion_number(),
    );
    if cavity.eval_cfl() > CFL_LIMIT {
        log::warn!("CFL number exceeds {}", CFL_LIMIT);
    }
    if cavity.eval_diffusion_number() > DIFFUSION_LIMIT {
        log::warn!("diffusion number exceeds {}", DIFFUSION_LIMIT);
    }

    // Write first diagnostics
    cavity.callback();
    let elapsed = integrate(&mut cavity, tmax, Some(0.5));
    log::info!("elapsed time: {:?}", elapsed);

    // Centerline profiles
    let centerline = cavity.centerline_u();
    let min = centerline.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = centerline.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    log::info!("centerline u: min = {:4.2e}, max = {:4.2e}", min, max);
    Ok(())
}
