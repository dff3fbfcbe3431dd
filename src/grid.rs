//! Uniform structured grid of the cavity domain
use crate::error::{CavityError, Result};
use ndarray::Array1;

/// Uniform 2-dimensional grid with precomputed spacing factors.
///
/// Node coordinates run from 0 to `lx` (`ly`) inclusive,
/// `x[i] = i * lx / (nx - 1)`. The squared and inverse spacings are
/// precomputed once since every stencil of the solver needs them.
///
/// # Example
/// ```
/// use cavityflow::grid::Grid;
/// let grid = Grid::new(5, 5, 1., 1.).unwrap();
/// assert_eq!(grid.dx, 0.25);
/// assert_eq!(grid.x[4], 1.);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of nodes in x
    pub nx: usize,
    /// Number of nodes in y
    pub ny: usize,
    /// Domain length in x
    pub lx: f64,
    /// Domain length in y
    pub ly: f64,
    /// Node coordinates in x
    pub x: Array1<f64>,
    /// Node coordinates in y
    pub y: Array1<f64>,
    /// Cell size in x
    pub dx: f64,
    /// Cell size in y
    pub dy: f64,
    /// Cell size squared in x
    pub dx2: f64,
    /// Cell size squared in y
    pub dy2: f64,
    /// Inverse cell size in x
    pub dxi: f64,
    /// Inverse cell size in y
    pub dyi: f64,
    /// Inverse cell size squared in x
    pub dxi2: f64,
    /// Inverse cell size squared in y
    pub dyi2: f64,
    /// Combined poisson factor `1 / (dx^2 + dy^2)`
    pub dxy2i: f64,
}

impl Grid {
    /// Create a grid from node counts and domain extents.
    ///
    /// # Errors
    /// `InvalidParameter` if a node count is below 2 (the cell size
    /// `l / (n - 1)` would be undefined) or an extent is not positive.
    #[allow(clippy::similar_names)]
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64) -> Result<Self> {
        if nx < 2 || ny < 2 {
            return Err(CavityError::InvalidParameter(format!(
                "node counts must be >= 2, got nx = {}, ny = {}",
                nx, ny
            )));
        }
        if !(lx > 0.) || !(ly > 0.) {
            return Err(CavityError::InvalidParameter(format!(
                "domain extents must be positive, got lx = {}, ly = {}",
                lx, ly
            )));
        }
        let x = Array1::from_shape_fn(nx, |i| i as f64 * lx / (nx - 1) as f64);
        let y = Array1::from_shape_fn(ny, |j| j as f64 * ly / (ny - 1) as f64);
        // Cell size
        let dx = x[1] - x[0];
        let dy = y[1] - y[0];
        // Precompute cell size squares and inverses
        let dx2 = dx * dx;
        let dy2 = dy * dy;
        let dxi = 1. / dx;
        let dyi = 1. / dy;
        let dxi2 = dxi * dxi;
        let dyi2 = dyi * dyi;
        let dxy2i = 1. / (dx2 + dy2);
        Ok(Self {
            nx,
            ny,
            lx,
            ly,
            x,
            y,
            dx,
            dy,
            dx2,
            dy2,
            dxi,
            dyi,
            dxi2,
            dyi2,
            dxy2i,
        })
    }

    /// Shape of the field arrays on this grid
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
}
