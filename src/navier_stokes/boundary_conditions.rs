//! Collection of boundary conditions
use ndarray::{s, Array2};

/// Set the lid-driven cavity velocity boundary:
///
/// u = `u_top` along the moving lid, u = 0 on the other
/// three walls.
///
/// With `reset_corners` the two lid corners are pinned back
/// to the wall value after the lid row is filled.
pub fn bc_cavity(u: &mut Array2<f64>, u_top: f64, reset_corners: bool) {
    let (nx, ny) = u.dim();
    u.slice_mut(s![.., ny - 1]).fill(u_top);
    if reset_corners {
        u[[0, ny - 1]] = 0.;
        u[[nx - 1, ny - 1]] = 0.;
    }
}

/// Set the lid-driven cavity pressure boundary:
///
/// p = 1 along the lid. The remaining walls carry
/// zero-gradient conditions imposed by the pressure solver.
pub fn pres_bc_cavity(p: &mut Array2<f64>) {
    let ny = p.dim().1;
    p.slice_mut(s![.., ny - 1]).fill(1.);
}
