//! Some useful post-processing functions
use crate::grid::Grid;
use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

/// Return l2 norm of real array
pub fn norm_l2<A, S>(array: &ArrayBase<S, Ix2>) -> A
where
    A: Float + std::iter::Sum,
    S: Data<Elem = A>,
{
    array.iter().map(|x| x.powi(2)).sum::<A>().sqrt()
}

/// Return largest absolute entry of real array
pub fn max_abs<A, S>(array: &ArrayBase<S, Ix2>) -> A
where
    A: Float,
    S: Data<Elem = A>,
{
    array.iter().fold(A::zero(), |acc, x| acc.max(x.abs()))
}

/// Return divergence du/dx + dv/dy by central differences.
///
/// Only interior nodes are evaluated, the border of the returned
/// array is zero.
pub fn divergence(grid: &Grid, u: &Array2<f64>, v: &Array2<f64>) -> Array2<f64> {
    let mut div = Array2::zeros(grid.shape());
    for i in 1..grid.nx - 1 {
        for j in 1..grid.ny - 1 {
            div[[i, j]] = (u[[i + 1, j]] - u[[i - 1, j]]) * 0.5 * grid.dxi
                + (v[[i, j + 1]] - v[[i, j - 1]]) * 0.5 * grid.dyi;
        }
    }
    div
}

/// Apply random disturbance [-amp, amp] on the interior nodes.
///
/// The walls keep their values. A non-positive amplitude leaves the
/// field untouched, the sampled range must be non-empty.
pub fn apply_random_disturbance(field: &mut Array2<f64>, amp: f64) {
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    if !(amp > 0.) {
        return;
    }
    let (nx, ny) = field.dim();
    let rand: Array2<f64> = Array2::random((nx - 2, ny - 2), Uniform::new(-amp, amp));
    field.slice_mut(s![1..nx - 1, 1..ny - 1]).assign(&rand);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_l2() {
        let mut a = Array2::zeros((2, 2));
        a[[0, 0]] = 3.;
        a[[1, 1]] = -4.;
        assert_eq!(norm_l2(&a), 5.);
    }

    #[test]
    fn test_max_abs() {
        let mut a = Array2::zeros((3, 2));
        a[[0, 1]] = -7.5;
        a[[2, 0]] = 2.;
        assert_eq!(max_abs(&a), 7.5);
        let zero: Array2<f64> = Array2::zeros((3, 2));
        assert_eq!(max_abs(&zero), 0.);
    }

    #[test]
    fn test_divergence_of_linear_field() {
        let grid = Grid::new(5, 5, 1., 1.).unwrap();
        // u = x has du/dx = 1, central differences are exact for it
        let u = Array2::from_shape_fn((5, 5), |(i, _)| grid.x[i]);
        let v = Array2::zeros((5, 5));
        let div = divergence(&grid, &u, &v);
        for i in 1..4 {
            for j in 1..4 {
                assert_eq!(div[[i, j]], 1.);
            }
        }
        assert!(div.slice(s![0, ..]).iter().all(|&x| x == 0.));
        assert!(div.slice(s![.., 0]).iter().all(|&x| x == 0.));
    }

    #[test]
    fn test_random_disturbance_interior_only() {
        let mut field = Array2::zeros((6, 5));
        apply_random_disturbance(&mut field, 0.5);
        assert!(field.slice(s![0, ..]).iter().all(|&x| x == 0.));
        assert!(field.slice(s![5, ..]).iter().all(|&x| x == 0.));
        assert!(field.slice(s![.., 0]).iter().all(|&x| x == 0.));
        assert!(field.slice(s![.., 4]).iter().all(|&x| x == 0.));
        assert!(field.iter().all(|&x| x.abs() < 0.5));
        assert!(field.iter().any(|&x| x != 0.));
    }

    #[test]
    fn test_random_disturbance_zero_amplitude() {
        let mut field = Array2::zeros((6, 5));
        apply_random_disturbance(&mut field, 0.);
        assert!(field.iter().all(|&x| x == 0.));
    }
}
