/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// A fixed-size vector of scalars with elementwise arithmetic.
///
/// The sizes 2, 3 and 4 have aliases (`V2`, `V3`, `V4`) with named
/// component accessors.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<const N: usize, X = f64>(pub [X; N]);

/// A 2-dimensional vector with components `x, y`.
pub type V2<X = f64> = Vector<2, X>;
/// A 3-dimensional vector with components `x, y, z`.
pub type V3<X = f64> = Vector<3, X>;
/// A 4-dimensional vector with components `x, y, z, w`.
pub type V4<X = f64> = Vector<4, X>;

// ---------------------------------------------------------------------------

/// A dense `R x C` matrix, stored row-major.
///
/// `m[r]` is the `r`th row and `m[r][c]` is a single element.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix<const R: usize, const C: usize, X = f64>(pub [[X; C]; R]);

/// A square `N x N` matrix.
///
/// This is the same type as `Matrix<N, N, X>`; the alias only exists to
/// make signatures that require squareness read better.
pub type SquareMatrix<const N: usize, X = f64> = Matrix<N, N, X>;

// ---------------------------------------------------------------------------

/// A vector of length `N` represented as a `1 x N` matrix.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowVector<const N: usize, X = f64>(pub Matrix<1, N, X>);

/// A vector of length `N` represented as an `N x 1` matrix.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnVector<const N: usize, X = f64>(pub Matrix<N, 1, X>);

// ---------------------------------------------------------------------------
// Vector and Matrix behave generally like their backing array type.

impl<const N: usize, X> Deref for Vector<N, X> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<const N: usize, X> DerefMut for Vector<N, X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<const R: usize, const C: usize, X> Deref for Matrix<R, C, X> {
    type Target = [[X; C]; R];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<const R: usize, const C: usize, X> DerefMut for Matrix<R, C, X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, const N: usize, X> IntoIterator for &'a Vector<N, X> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, const N: usize, X> IntoIterator for &'a mut Vector<N, X> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<const N: usize, X> IntoIterator for Vector<N, X> {
    type Item = X;
    type IntoIter = std::array::IntoIter<X, N>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { IntoIterator::into_iter(self.0) }
}

// Iterating a matrix produces its rows.
impl<'a, const R: usize, const C: usize, X> IntoIterator for &'a Matrix<R, C, X> {
    type Item = &'a [X; C];
    type IntoIter = Iter<'a, [X; C]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, const R: usize, const C: usize, X> IntoIterator for &'a mut Matrix<R, C, X> {
    type Item = &'a mut [X; C];
    type IntoIter = IterMut<'a, [X; C]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

// ---------------------------------------------------------------------------
// Row and column vectors index by element rather than by row.

impl<const N: usize, X> Index<usize> for RowVector<N, X> {
    type Output = X;

    #[inline(always)]
    fn index(&self, index: usize) -> &X
    { &(self.0).0[0][index] }
}

impl<const N: usize, X> IndexMut<usize> for RowVector<N, X> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut X
    { &mut (self.0).0[0][index] }
}

impl<const N: usize, X> Index<usize> for ColumnVector<N, X> {
    type Output = X;

    #[inline(always)]
    fn index(&self, index: usize) -> &X
    { &(self.0).0[index][0] }
}

impl<const N: usize, X> IndexMut<usize> for ColumnVector<N, X> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut X
    { &mut (self.0).0[index][0] }
}

// ---------------------------------------------------------------------------

// forward the debug impl without a surrounding "Vector(...)", for somewhat
// selfish reasons (it makes the debug output valid JSON and Python for
// many types, which makes it easy to paste failing values into a REPL)
impl<const N: usize, X: fmt::Debug> fmt::Debug for Vector<N, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<const R: usize, const C: usize, X: fmt::Debug> fmt::Debug for Matrix<R, C, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<const N: usize, X: fmt::Debug> fmt::Debug for RowVector<N, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<const N: usize, X: fmt::Debug> fmt::Debug for ColumnVector<N, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_indexing_is_row_major() {
        let mut m = Matrix([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m[0], [1, 2, 3]);
        assert_eq!(m[1][2], 6);

        m[1][0] = 40;
        assert_eq!(m.0, [[1, 2, 3], [40, 5, 6]]);
        assert_eq!(m.iter().count(), 2);
        assert_eq!(m.get(2), None);
    }

    #[test]
    #[should_panic]
    fn matrix_row_out_of_range() {
        let m = Matrix([[1, 2], [3, 4]]);
        let past_end = std::hint::black_box(m.len());
        let _ = m[past_end];
    }

    #[test]
    fn row_col_element_indexing() {
        let mut row = RowVector(Matrix([[1, 2, 3]]));
        let mut col = ColumnVector(Matrix([[1], [2], [3]]));
        row[1] = 20;
        col[2] = 30;
        assert_eq!((row.0).0, [[1, 20, 3]]);
        assert_eq!((col.0).0, [[1], [2], [30]]);
    }

    #[test]
    fn debug_is_bare_array() {
        assert_eq!(format!("{:?}", Vector([1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", Matrix([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
    }
}
