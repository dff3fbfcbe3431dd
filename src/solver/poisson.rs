//! Jacobi relaxation of the pressure Poisson equation
use super::Solve;
use crate::grid::Grid;
use crate::params::SolverOptions;
use ndarray::Array2;

/// Pointwise Jacobi relaxation of
///
/// ```text
/// d2p/dx2 + d2p/dy2 = b
/// ```
///
/// on the interior nodes, with a zero-gradient copy onto the floor and
/// the side walls after relaxing. The top row is never written, so a
/// Dirichlet lid condition set by the caller survives every sweep.
///
/// Each sweep reads a snapshot of the previous iterate, never the
/// values written earlier in the same sweep.
#[derive(Debug, Clone)]
pub struct Poisson {
    /// Relaxation sweeps per solve
    sweeps: usize,
    /// Re-snapshot the iterate and reapply the wall copies every sweep
    /// instead of once per solve
    refresh_snapshot: bool,
    nx: usize,
    ny: usize,
    dx2: f64,
    dy2: f64,
    dxy2i: f64,
    /// Snapshot of the previous iterate
    pn: Array2<f64>,
}

impl Poisson {
    /// Build the relaxation solver for one grid.
    pub fn new(grid: &Grid, options: &SolverOptions) -> Self {
        Self {
            sweeps: options.pressure_sweeps,
            refresh_snapshot: options.reset_corners,
            nx: grid.nx,
            ny: grid.ny,
            dx2: grid.dx2,
            dy2: grid.dy2,
            dxy2i: grid.dxy2i,
            pn: Array2::zeros(grid.shape()),
        }
    }

    /// One Jacobi sweep over the interior nodes, reading `self.pn`.
    fn sweep(&self, b: &Array2<f64>, p: &mut Array2<f64>) {
        let pn = &self.pn;
        for i in 1..self.nx - 1 {
            for j in 1..self.ny - 1 {
                p[[i, j]] = ((pn[[i + 1, j]] + pn[[i - 1, j]]) * self.dy2
                    + (pn[[i, j + 1]] + pn[[i, j - 1]]) * self.dx2
                    - b[[i, j]] * self.dx2 * self.dy2)
                    * 0.5
                    * self.dxy2i;
            }
        }
    }

    /// Zero-gradient copies, floor first, then the side walls over the
    /// full height. The wall pass also rewrites the floor corners.
    fn impose_neumann(&self, p: &mut Array2<f64>) {
        for i in 0..self.nx {
            p[[i, 0]] = p[[i, 1]];
        }
        for j in 0..self.ny {
            p[[0, j]] = p[[1, j]];
            p[[self.nx - 1, j]] = p[[self.nx - 2, j]];
        }
    }
}

impl Solve for Poisson {
    fn solve(&mut self, input: &Array2<f64>, output: &mut Array2<f64>) {
        if self.refresh_snapshot {
            for _ in 0..self.sweeps {
                self.pn.assign(output);
                self.sweep(input, output);
                self.impose_neumann(output);
            }
        } else {
            self.pn.assign(output);
            for _ in 0..self.sweeps {
                self.sweep(input, output);
            }
            self.impose_neumann(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SolverOptions;
    use ndarray::Array2;

    fn ramp(nx: usize, ny: usize) -> Array2<f64> {
        Array2::from_shape_fn((nx, ny), |(i, j)| (i as f64 + 2. * j as f64) * 0.125)
    }

    #[test]
    fn test_poisson_single_sweep_stencil() {
        // dx = dy = 0.25, so every factor is a power of two and the
        // hand-computed node values are exact.
        let grid = Grid::new(5, 5, 1., 1.).unwrap();
        let options = SolverOptions::default();
        let mut poisson = Poisson::new(&grid, &options);

        let mut p = ramp(5, 5);
        let mut b = Array2::zeros((5, 5));
        b[[2, 2]] = 4.;
        poisson.solve(&b, &mut p);

        // The ramp is discrete harmonic, only the sourced node moves.
        assert_eq!(p[[2, 2]], 0.6875);
        assert_eq!(p[[1, 3]], 0.875);
        for i in 0..5 {
            assert_eq!(p[[i, 0]], p[[i, 1]]);
        }
        for j in 0..5 {
            assert_eq!(p[[0, j]], p[[1, j]]);
            assert_eq!(p[[4, j]], p[[3, j]]);
        }
    }

    #[test]
    fn test_poisson_reads_snapshot_not_updates() {
        let grid = Grid::new(4, 4, 0.75, 0.75).unwrap();
        let options = SolverOptions::default();
        let mut poisson = Poisson::new(&grid, &options);

        // Node (2, 2) is relaxed last. A Gauss-Seidel style update
        // would see its neighbours (1, 2) and (2, 1) already rewritten
        // and land on 0.046875 instead.
        let mut p = Array2::zeros((4, 4));
        p[[1, 2]] = 1.;
        p[[2, 1]] = 0.5;
        let b = Array2::zeros((4, 4));
        poisson.solve(&b, &mut p);
        assert_eq!(p[[2, 2]], 0.375);
    }

    #[test]
    fn test_poisson_snapshot_variants() {
        let grid = Grid::new(5, 5, 1., 1.).unwrap();
        let b = {
            let mut b = Array2::zeros((5, 5));
            b[[2, 2]] = 4.;
            b
        };

        // One sweep per solve, both snapshot policies see the same
        // iterate and must agree bitwise.
        let mut p_refresh = ramp(5, 5);
        let mut p_once = ramp(5, 5);
        Poisson::new(&grid, &SolverOptions::new(1, true, false).unwrap()).solve(&b, &mut p_refresh);
        Poisson::new(&grid, &SolverOptions::new(1, false, false).unwrap()).solve(&b, &mut p_once);
        for (a, c) in p_refresh.iter().zip(p_once.iter()) {
            assert_eq!(a, c);
        }

        // With two sweeps the refreshing solver relaxes on the updated
        // iterate and the results separate.
        let mut p_refresh = ramp(5, 5);
        let mut p_once = ramp(5, 5);
        Poisson::new(&grid, &SolverOptions::new(2, true, false).unwrap()).solve(&b, &mut p_refresh);
        Poisson::new(&grid, &SolverOptions::new(2, false, false).unwrap()).solve(&b, &mut p_once);
        assert!(p_refresh.iter().zip(p_once.iter()).any(|(a, c)| a != c));
    }

    #[test]
    fn test_poisson_keeps_lid_row() {
        let grid = Grid::new(5, 5, 1., 1.).unwrap();
        for options in [
            SolverOptions::new(3, true, false).unwrap(),
            SolverOptions::new(3, false, false).unwrap(),
        ]
        .iter()
        {
            let mut p = ramp(5, 5);
            for i in 0..5 {
                p[[i, 4]] = 1.;
            }
            let b = Array2::zeros((5, 5));
            Poisson::new(&grid, options).solve(&b, &mut p);
            for i in 0..5 {
                assert_eq!(p[[i, 4]], 1.);
            }
        }
    }
}
