/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Row and column vectors, i.e. vectors that *are* matrices.
//!
//! A `RowVector<N>` is a `1 x N` matrix and a `ColumnVector<N>` is an
//! `N x 1` matrix. Unlike `Vector`, they index per element (`v[i]`) while
//! still taking part in matrix products through `as_matrix`.

use crate::traits::{Semiring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveFloat};
use crate::types::*;
use num_traits::Zero;

gen_each!{
    @{RowCol}
    impl_rc_methods!(
        {$Rc:ident}
    ) => {
        impl<const N: usize, X> $Rc<N, X> {
            /// The number of elements.
            pub const LEN: usize = N;

            /// Construct from the elements.
            #[inline(always)]
            pub fn from_array(array: [X; N]) -> Self
            { Vector(array).into() }

            /// Construct from a function on element indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { Vector::<N, X>::from_fn(f).into() }

            /// Get the zero vector.
            #[inline(always)]
            pub fn zero() -> Self
            where X: Semiring + PrimitiveSemiring,
            { $Rc(Zero::zero()) }

            /// Copy the elements into a plain `Vector`.
            #[inline]
            pub fn to_vector(&self) -> Vector<N, X>
            where X: Copy,
            { Vector::from_fn(|i| self[i]) }

            /// Iterate over the elements.
            #[inline]
            pub fn iter(&self) -> impl Iterator<Item=&X> + '_
            { (0..N).map(move |i| &self[i]) }

            /// Inner product, summed from zero in index order.
            #[inline]
            pub fn dot(&self, other: &Self) -> X
            where X: Semiring + PrimitiveSemiring,
            { (0..N).fold(X::zero(), |sum, i| sum + self[i] * other[i]) }

            /// Euclidean (L2) norm.
            #[inline]
            pub fn norm(&self) -> X
            where X: Field + PrimitiveFloat,
            { self.dot(self).sqrt() }

            /// The p-norm `(sum |x_i|^p)^(1/p)`.
            ///
            /// `p == 0` is not meaningful and produces inf or NaN.
            #[inline]
            pub fn p_norm(&self, p: X) -> X
            where X: Field + PrimitiveFloat,
            {
                let sum = (0..N).fold(X::zero(), |sum, i| sum + self[i].abs().powf(p));
                sum.powf(X::one() / p)
            }

            /// The infinity (Chebyshev) norm, `max |x_i|`.
            ///
            /// This is zero for an empty vector. NaN elements are skipped, so the
            /// result is never NaN.
            #[inline]
            pub fn inf_norm(&self) -> X
            where X: Field + PrimitiveFloat,
            { (0..N).fold(X::zero(), |max, i| self[i].abs().max(max)) }

            /// Euclidean distance, `(self - other).norm()`.
            #[inline]
            pub fn distance(&self, other: &Self) -> X
            where X: Field + PrimitiveFloat,
            { (self - other).norm() }

            /// p-norm distance, `(self - other).p_norm(p)`.
            #[inline]
            pub fn p_distance(&self, other: &Self, p: X) -> X
            where X: Field + PrimitiveFloat,
            { (self - other).p_norm(p) }
        }

        impl<const N: usize, X: Semiring> Default for $Rc<N, X>
        where X: PrimitiveSemiring,
        {
            #[inline(always)]
            fn default() -> Self
            { Self::zero() }
        }

        impl<const N: usize, X> From<$Rc<N, X>> for Vector<N, X>
        where X: Copy,
        {
            #[inline(always)]
            fn from(v: $Rc<N, X>) -> Self
            { v.to_vector() }
        }
    }
}

impl<const N: usize, X> RowVector<N, X> {
    /// Borrow the underlying `1 x N` matrix.
    #[inline(always)]
    pub fn as_matrix(&self) -> &Matrix<1, N, X>
    { &self.0 }

    /// Transpose into a column vector.
    #[inline]
    pub fn convert_to_column(&self) -> ColumnVector<N, X>
    where X: Copy,
    { ColumnVector(self.0.transpose()) }

    /// Unwrap the underlying `1 x N` matrix.
    #[inline(always)]
    pub fn into_matrix(self) -> Matrix<1, N, X>
    { self.0 }
}

impl<const N: usize, X> ColumnVector<N, X> {
    /// Borrow the underlying `N x 1` matrix.
    #[inline(always)]
    pub fn as_matrix(&self) -> &Matrix<N, 1, X>
    { &self.0 }

    /// Transpose into a row vector.
    #[inline]
    pub fn convert_to_row_vector(&self) -> RowVector<N, X>
    where X: Copy,
    { RowVector(self.0.transpose()) }

    /// Unwrap the underlying `N x 1` matrix.
    #[inline(always)]
    pub fn into_matrix(self) -> Matrix<N, 1, X>
    { self.0 }
}

impl<const N: usize, X> From<Vector<N, X>> for RowVector<N, X> {
    #[inline(always)]
    fn from(v: Vector<N, X>) -> Self
    { v.to_row() }
}

impl<const N: usize, X> From<Vector<N, X>> for ColumnVector<N, X> {
    #[inline(always)]
    fn from(v: Vector<N, X>) -> Self
    { v.to_column() }
}

impl<const N: usize, X> From<Matrix<1, N, X>> for RowVector<N, X> {
    #[inline(always)]
    fn from(m: Matrix<1, N, X>) -> Self
    { RowVector(m) }
}

impl<const N: usize, X> From<Matrix<N, 1, X>> for ColumnVector<N, X> {
    #[inline(always)]
    fn from(m: Matrix<N, 1, X>) -> Self
    { ColumnVector(m) }
}

// ---------------------------------------------------------------------------
