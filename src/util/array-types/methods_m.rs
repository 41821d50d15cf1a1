/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types, compatible with `Vector`.
//!
//! Matrices are stored row-major and are conceptually understood to be
//! containers of rows; `m[r][c]` is the element in row `r` and column `c`.
//! Operations that only make sense for square matrices (trace, identity,
//! LU decomposition) are only defined on `Matrix<N, N, X>`, so misuse is
//! a compile error rather than a runtime one.

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::types::*;
use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices `(row, col)`.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `Matrix::<2, 3>::from_fn`)
#[inline(always)]
pub fn from_fn<const R: usize, const C: usize, X, F>(mut f: F) -> Matrix<R, C, X>
where F: FnMut(usize, usize) -> X,
{ Matrix(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c)))) }

/// Construct a matrix from a 2D array (of rows).
///
/// The signature is such that type inference will work in the
/// forward direction (deciding the output Matrix shape from
/// the input array).
#[inline(always)]
pub fn from_array<const R: usize, const C: usize, X>(rows: [[X; C]; R]) -> Matrix<R, C, X>
{ Matrix(rows) }

/// Construct an identity matrix (using type inference).
#[inline(always)]
pub fn eye<const N: usize, X>() -> Matrix<N, N, X>
where X: Semiring + PrimitiveSemiring,
{ One::one() }

/// Construct a zero matrix (using type inference).
#[inline(always)]
pub fn zero<const R: usize, const C: usize, X>() -> Matrix<R, C, X>
where X: Semiring + PrimitiveSemiring,
{ Zero::zero() }

// General rectangular.
impl<const R: usize, const C: usize, X> Matrix<R, C, X> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;

    /// Construct from an array of rows.
    #[inline(always)]
    pub fn new(rows: [[X; C]; R]) -> Self
    { Matrix(rows) }

    /// Construct the zero matrix.
    ///
    /// This is also available as the free function `mat::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    where X: Semiring + PrimitiveSemiring,
    { Zero::zero() }

    /// Construct a matrix from a function on indices `(row, col)`.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { from_fn(f) }

    /// Map each scalar element of a matrix.
    #[inline(always)]
    pub fn map<B, F>(self, mut f: F) -> Matrix<R, C, B>
    where F: FnMut(X) -> B,
    { Matrix(self.0.map(|row| row.map(&mut f))) }

    /// Matrix transpose.
    ///
    /// `m.transpose()[i][j] == m[j][i]` for all valid `i, j`.
    #[inline]
    pub fn transpose(&self) -> Matrix<C, R, X>
    where X: Copy,
    { from_fn(|r, c| self[c][r]) }

    /// Copy out a single row.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<C, X>
    where X: Copy,
    { Vector(self[r]) }

    /// Copy out a single column.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<R, X>
    where X: Copy,
    { Vector::from_fn(|r| self[r][c]) }

    /// Cast into a plain `[[X; C]; R]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; C]; R]
    { self.0 }

    /// Borrow as a plain `&[[X; C]; R]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[[X; C]; R]
    { &self.0 }

    /// Borrow as a plain `&mut [[X; C]; R]`.
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [[X; C]; R]
    { &mut self.0 }
}

// Square matrices
impl<const N: usize, X> Matrix<N, N, X> {
    /// Construct the identity matrix.
    ///
    /// This is also available as the free function `mat::eye`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn eye() -> Self
    where X: Semiring + PrimitiveSemiring,
    { One::one() }

    /// Sum of the diagonal elements, accumulated in index order.
    #[inline]
    pub fn trace(&self) -> X
    where X: Semiring + PrimitiveSemiring,
    { (0..N).fold(X::zero(), |sum, i| sum + self[i][i]) }

    /// The main diagonal.
    #[inline]
    pub fn diagonal(&self) -> Vector<N, X>
    where X: Copy,
    { Vector::from_fn(|i| self[i][i]) }
}

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

impl<const R: usize, const C: usize, X: Semiring> Zero for Matrix<R, C, X>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Matrix([[X::zero(); C]; R]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.0.iter().all(|row| row.iter().all(|x| x.is_zero())) }
}

impl<const R: usize, const C: usize, X: Semiring> Default for Matrix<R, C, X>
where X: PrimitiveSemiring,
{
    #[inline(always)]
    fn default() -> Self
    { Zero::zero() }
}

impl<const N: usize, X: Semiring> One for Matrix<N, N, X>
where X: PrimitiveSemiring,
{
    #[inline]
    fn one() -> Self
    { from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

    #[inline]
    fn is_one(&self) -> bool {
        self.0.iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, x)| match r == c {
                true => x.is_one(),
                false => x.is_zero(),
            })
        })
    }
}

impl<const R: usize, const C: usize, X> From<[[X; C]; R]> for Matrix<R, C, X> {
    #[inline(always)]
    fn from(rows: [[X; C]; R]) -> Self
    { Matrix(rows) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_eye() {
        assert_eq!(from_array([[0, 0], [0, 0]]), Matrix::<2, 2, i32>::zero());
        assert_eq!(from_array([[1, 0], [0, 1]]), Matrix::<2, 2, i32>::eye());
        assert_eq!(from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), eye::<3, i32>());
        assert_eq!(Matrix::<2, 3, f64>::default(), zero());
        assert!(from_array([[0, 0], [0, 0]]).is_zero());
        assert!(!from_array([[0, 1], [0, 0]]).is_zero());
        assert!(from_array([[1, 0], [0, 1]]).is_one());
        assert!(!from_array([[2, 0], [0, 1]]).is_one());
        assert!(!from_array([[1, -1], [0, 1]]).is_one());
    }

    #[test]
    fn transpose() {
        let m = from_array([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        let t = m.transpose();
        assert_eq!(t, from_array([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(t.transpose(), m);
        assert_eq!(Matrix::<2, 3, i32>::ROWS, 2);
        assert_eq!(Matrix::<2, 3, i32>::COLS, 3);
    }

    #[test]
    fn trace() {
        let a = from_array([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let b = from_array([[9, 0, 0], [0, -2, 0], [1, 1, 1]]);
        assert_eq!(a.trace(), 15);
        assert_eq!((a + b).trace(), a.trace() + b.trace());
        assert_eq!(Matrix::<0, 0, i32>::zero().trace(), 0);
        assert_eq!(a.diagonal(), Vector([1, 5, 9]));
    }

    #[test]
    fn rows_and_cols() {
        let m = from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row(1), Vector([4, 5, 6]));
        assert_eq!(m.col(2), Vector([3, 6]));
        assert_eq!(m.map(|x| x * 10).into_array(), [[10, 20, 30], [40, 50, 60]]);
        assert_eq!(Matrix::<2, 2, usize>::from_fn(|r, c| 2 * r + c).0, [[0, 1], [2, 3]]);
    }

    #[test]
    fn equality_is_exact() {
        let a = from_array([[0.1 + 0.2]]);
        let b = from_array([[0.3]]);
        assert_ne!(a, b);
        assert_eq!(a, a);
    }
}
