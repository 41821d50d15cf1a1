/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Not every test file uses every helper.
#![allow(dead_code)]

use fixmat::{Matrix, Vector};
use rand::Rng;

/// Uniform in `[-1, 1)`.
pub fn random_scalar() -> f64 {
    1.0 - 2.0 * rand::thread_rng().gen::<f64>()
}

pub fn random_matrix<const R: usize, const C: usize>() -> Matrix<R, C> {
    Matrix::from_fn(|_, _| random_scalar())
}

pub fn random_int_matrix<const R: usize, const C: usize>() -> Matrix<R, C, i64> {
    let mut rng = rand::thread_rng();
    Matrix::from_fn(|_, _| rng.gen_range(-10, 10))
}

pub fn random_vector<const N: usize>() -> Vector<N> {
    Vector::from_fn(|_| random_scalar())
}

/// A strictly diagonally dominant matrix, which never has a zero pivot
/// under LU without pivoting.
pub fn random_dominant_matrix<const N: usize>() -> Matrix<N, N> {
    let mut m = random_matrix::<N, N>();
    for i in 0..N {
        let off_diagonal: f64 = (0..N).filter(|&j| j != i).map(|j| m[i][j].abs()).sum();
        let sign = if m[i][i] < 0.0 { -1.0 } else { 1.0 };
        m[i][i] = sign * (off_diagonal + 1.0 + m[i][i].abs());
    }
    m
}
