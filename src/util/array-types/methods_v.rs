/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Methods and free functions on the fixed-size `Vector` type.

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};

use crate::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The length is inferred from how the result is used.
#[inline(always)]
pub fn from_fn<const N: usize, X, F>(f: F) -> Vector<N, X>
where F: FnMut(usize) -> X,
{ Vector(std::array::from_fn(f)) }

/// Get a zero vector (using type inference).
#[inline(always)]
pub fn zero<const N: usize, X>() -> Vector<N, X>
where X: Semiring + PrimitiveSemiring,
{ Zero::zero() }

/// Inner product of vectors.
///
/// This is basically just `Vector::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<const N: usize, X>(a: &Vector<N, X>, b: &Vector<N, X>) -> X
where X: Semiring + PrimitiveSemiring,
{ a.dot(b) }

impl<const N: usize, X> Vector<N, X> {
    /// The number of elements.
    pub const LEN: usize = N;

    /// Wrap an array.
    #[inline(always)]
    pub fn from_array(array: [X; N]) -> Self
    { Vector(array) }

    /// Unwrap into the backing array.
    #[inline(always)]
    pub fn into_array(self) -> [X; N]
    { self.0 }

    /// Get a zero vector.
    ///
    /// This is also available as the free function `vee::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    where X: Semiring + PrimitiveSemiring,
    { Zero::zero() }

    /// Construct a fixed-size vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// Get the inner product of two vectors.
    ///
    /// The sum starts from zero and accumulates in index order.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    where X: Semiring + PrimitiveSemiring,
    { (0..N).fold(X::zero(), |sum, i| sum + self[i] * other[i]) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    where X: Semiring + PrimitiveSemiring,
    { self.dot(self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    where X: Field + PrimitiveFloat,
    { self.sqnorm().sqrt() }

    /// Euclidean distance to another vector.
    #[inline]
    pub fn distance(&self, other: &Self) -> X
    where X: Field + PrimitiveFloat,
    { (self - other).norm() }

    /// Perform elementwise multiplication.
    #[inline(always)]
    pub fn mul_diag(&self, other: &Self) -> Self
    where X: Semiring + PrimitiveSemiring,
    { Self::from_fn(|i| self[i] * other[i]) }

    /// Convert to a vector of a different length.
    ///
    /// The overlapping prefix is copied; any extra trailing elements are zero.
    #[inline]
    pub fn resize<const M: usize>(&self) -> Vector<M, X>
    where X: Semiring + PrimitiveSemiring,
    { Vector::from_fn(|i| if i < N { self[i] } else { X::zero() }) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Vector<N, B>
    where F: FnMut(X) -> B,
    { Vector(self.0.map(f)) }

    /// View as a `1 x N` matrix.
    #[inline(always)]
    pub fn to_row(self) -> RowVector<N, X>
    { RowVector(Matrix([self.0])) }

    /// View as an `N x 1` matrix.
    #[inline(always)]
    pub fn to_column(self) -> ColumnVector<N, X>
    { ColumnVector(Matrix(self.0.map(|x| [x]))) }
}

impl<X: Ring> V3<X>
where X: PrimitiveRing
{
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vector([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

// Named components. These read and write the indexed slots directly,
// so `v.x()` and `v[0]` can never disagree.
macro_rules! impl_named_components {
    ($n:tt => $( $i:tt: $get:ident $get_mut:ident ),+) => {
        impl<X> Vector<$n, X> {
            /// Construct from components.
            #[inline(always)]
            pub fn new($($get: X),+) -> Self
            { Vector([$($get),+]) }

            $(
                #[inline(always)]
                pub fn $get(&self) -> X
                where X: Copy,
                { self.0[$i] }

                #[inline(always)]
                pub fn $get_mut(&mut self) -> &mut X
                { &mut self.0[$i] }
            )+
        }
    };
}

impl_named_components!{2 => 0: x x_mut, 1: y y_mut}
impl_named_components!{3 => 0: x x_mut, 1: y y_mut, 2: z z_mut}
impl_named_components!{4 => 0: x x_mut, 1: y y_mut, 2: z z_mut, 3: w w_mut}

// Narrowing and widening between the named sizes.
gen_each!{
    [{2 3} {2 4} {3 2} {3 4} {4 2} {4 3}]
    impl_resize_from!({$from:tt $to:tt}) => {
        impl<X: Semiring> From<Vector<$from, X>> for Vector<$to, X>
        where X: PrimitiveSemiring,
        {
            #[inline(always)]
            fn from(v: Vector<$from, X>) -> Self
            { v.resize() }
        }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// ---------------------------------------------------------------------------

impl<const N: usize, X: Semiring> Zero for Vector<N, X>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Vector([X::zero(); N]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

impl<const N: usize, X: Semiring> Default for Vector<N, X>
where X: PrimitiveSemiring,
{
    #[inline(always)]
    fn default() -> Self
    { Zero::zero() }
}

impl<const N: usize, X> From<[X; N]> for Vector<N, X> {
    #[inline(always)]
    fn from(array: [X; N]) -> Self
    { Vector(array) }
}

impl<const N: usize, X: Semiring> std::iter::Sum for Vector<N, X>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=Vector<N, X>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

impl<'a, const N: usize, X: Semiring> std::iter::Sum<&'a Vector<N, X>> for Vector<N, X>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=&'a Vector<N, X>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_components_alias_indices() {
        let mut v = V3::new(1.0, 2.0, 3.0);
        *v.x_mut() = 10.0;
        assert_eq!(v[0], 10.0);

        v[2] = 30.0;
        assert_eq!(v.z(), 30.0);

        let mut w = V4::<i32>::default();
        *w.w_mut() += 4;
        assert_eq!(w, Vector([0, 0, 0, 4]));
        assert_eq!(V2::new(5, 6).y(), 6);
    }

    #[test]
    fn assignment_copies_values_only() {
        let a = V2::new(1, 2);
        let mut b = V2::new(7, 8);
        assert_eq!(b.x(), 7);
        b = a;
        *b.x_mut() = 100;
        // the copy does not share storage with its source
        assert_eq!(a.x(), 1);
        assert_eq!(b[0], 100);
        assert_eq!(b.y(), 2);
    }

    #[test]
    fn resize() {
        let v3 = V3::new(1, 2, 3);
        let v2: V2<i32> = v3.into();
        let v4: V4<i32> = v3.into();
        assert_eq!(v2, V2::new(1, 2));
        assert_eq!(v4, V4::new(1, 2, 3, 0));
        assert_eq!(v3.resize::<5>(), Vector([1, 2, 3, 0, 0]));
        assert_eq!(V4::from(V2::new(7, 8)), V4::new(7, 8, 0, 0));
    }

    #[test]
    fn dot_norm_distance() {
        let a = V2::new(3.0, 4.0);
        assert_eq!(a.dot(&a), 25.0);
        assert_eq!(dot(&a, &V2::new(1.0, 0.0)), 3.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.distance(&V2::zero()), 5.0);
        assert_eq!(a.distance(&V2::new(0.0, 1.0)), V2::new(0.0, 1.0).distance(&a));
        assert_eq!(Vector::<0, f64>::zero().norm(), 0.0);
    }

    #[test]
    fn cross() {
        let x = V3::new(1, 0, 0);
        let y = V3::new(0, 1, 0);
        assert_eq!(x.cross(&y), V3::new(0, 0, 1));
        assert_eq!(y.cross(&x), V3::new(0, 0, -1));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(V3::new(1, 2, 3) < V3::new(1, 3, 0));
        assert!(V2::new(2, 0) > V2::new(1, 9));
        assert!(V2::new(1, 1) <= V2::new(1, 1));
    }

    #[test]
    fn iteration_and_sum() {
        let v = Vector([1, 2, 3, 4, 5]);
        assert_eq!(v.iter().rev().cloned().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!((&v).into_iter().sum::<i32>(), 15);
        assert_eq!(v.into_iter().max(), Some(5));

        let total: V2<i32> = vec![V2::new(1, 2), V2::new(3, 4)].into_iter().sum();
        assert_eq!(total, V2::new(4, 6));
    }

    #[test]
    fn row_and_column_views() {
        let v = V3::new(1, 2, 3);
        assert_eq!((v.to_row().0).0, [[1, 2, 3]]);
        assert_eq!((v.to_column().0).0, [[1], [2], [3]]);
    }
}
