//! Explicit momentum predictor
//!
//! Advances both velocity components without the pressure term,
//!
//! ```text
//! u* = u + dt * ( nu * laplace(u) - u du/dx - v du/dy )
//! v* = v + dt * ( nu * laplace(v) - u dv/dx - v dv/dy )
//! ```
//!
//! by forward Euler with central differences. The two components only
//! read the current velocities, so they are predicted as one fork-join
//! pair.
use crate::field::Fields;
use crate::grid::Grid;
use crate::params::FluidParams;
use ndarray::Array2;

/// Predict both starred velocities from the current velocities.
///
/// The wall rows of `u_star` and `v_star` are left untouched.
pub fn predict(grid: &Grid, params: &FluidParams, fields: &mut Fields) {
    let Fields {
        u,
        v,
        u_star,
        v_star,
        ..
    } = fields;
    let (u, v) = (&*u, &*v);
    rayon::join(
        || predict_component(grid, params, u, u, v, u_star),
        || predict_component(grid, params, v, u, v, v_star),
    );
}

/// Predict one velocity component on the interior nodes.
///
/// `comp` is the transported component, `u` and `v` carry the
/// convecting velocity.
#[allow(clippy::similar_names)]
pub fn predict_component(
    grid: &Grid,
    params: &FluidParams,
    comp: &Array2<f64>,
    u: &Array2<f64>,
    v: &Array2<f64>,
    out: &mut Array2<f64>,
) {
    let dt = params.dt;
    let nu = params.nu;
    for i in 1..grid.nx - 1 {
        for j in 1..grid.ny - 1 {
            out[[i, j]] = comp[[i, j]]
                + dt * (nu * (comp[[i - 1, j]] - 2. * comp[[i, j]] + comp[[i + 1, j]]) * grid.dxi2
                    + nu * (comp[[i, j - 1]] - 2. * comp[[i, j]] + comp[[i, j + 1]]) * grid.dyi2
                    - 0.5 * u[[i, j]] * (comp[[i + 1, j]] - comp[[i - 1, j]]) * grid.dxi
                    - 0.5 * v[[i, j]] * (comp[[i, j + 1]] - comp[[i, j - 1]]) * grid.dyi);
        }
    }
}
