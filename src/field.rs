//! Flow field arrays of one cavity run
use crate::grid::Grid;
use ndarray::Array2;

/// Velocity, pressure and source arrays on the grid nodes.
///
/// All arrays share the shape `(nx, ny)` with the first axis along *x*.
/// The starred velocities hold the viscous prediction before the
/// pressure projection; `b` holds the divergence source of the pressure
/// equation.
#[derive(Debug, Clone)]
pub struct Fields {
    /// Velocity along x
    pub u: Array2<f64>,
    /// Velocity along y
    pub v: Array2<f64>,
    /// Predicted velocity along x
    pub u_star: Array2<f64>,
    /// Predicted velocity along y
    pub v_star: Array2<f64>,
    /// Pressure
    pub p: Array2<f64>,
    /// Source term of the pressure equation
    pub b: Array2<f64>,
}

impl Fields {
    /// Allocate all arrays filled with zeros.
    ///
    /// The border rows of the starred velocities are never written
    /// after this, which keeps the no-slip walls of the prediction.
    pub fn new(grid: &Grid) -> Self {
        let shape = grid.shape();
        Self {
            u: Array2::zeros(shape),
            v: Array2::zeros(shape),
            u_star: Array2::zeros(shape),
            v_star: Array2::zeros(shape),
            p: Array2::zeros(shape),
            b: Array2::zeros(shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_zero_init() {
        let grid = Grid::new(5, 7, 1., 2.).unwrap();
        let fields = Fields::new(&grid);
        assert_eq!(fields.u.shape(), [5, 7]);
        assert_eq!(fields.v.shape(), [5, 7]);
        assert_eq!(fields.u_star.shape(), [5, 7]);
        assert_eq!(fields.v_star.shape(), [5, 7]);
        assert_eq!(fields.p.shape(), [5, 7]);
        assert_eq!(fields.b.shape(), [5, 7]);
        assert!(fields.u.iter().all(|&x| x == 0.));
        assert!(fields.p.iter().all(|&x| x == 0.));
    }
}
