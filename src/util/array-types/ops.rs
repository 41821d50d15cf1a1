/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;
use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};

use crate::types::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed operands,
//       rather than e.g. Vector<N, T> and Vector<N, U> where T: Add<U>.
//
//       Having such generic bounds tends to influence the design of the
//       rest of the library towards a design that is impossible to implement.
gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_v_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Semiring> Add<$($ref_b)* Vector<N, X>> for $($ref_a)* Vector<N, X>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<N, X>) -> Self::Output
            { Vector(std::array::from_fn(|k| self[k] + other[k])) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Ring> Sub<$($ref_b)* Vector<N, X>> for $($ref_a)* Vector<N, X>
          where X: PrimitiveRing,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<N, X>) -> Self::Output
            { Vector(std::array::from_fn(|k| self[k] - other[k])) }
        }
    }
}

// -vector
gen_each!{
    @{by_ref}
    impl_v_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const N: usize, X: Ring> Neg for $($ref_a)* Vector<N, X>
          where X: PrimitiveRing,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn neg(self) -> Self::Output
            { Vector(std::array::from_fn(|k| -self[k])) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar * vector
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    @{by_ref}
    impl_scalar_v_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const N: usize> Mul<$($ref_a)* Vector<N, $X>> for $X {
            type Output = Vector<N, $X>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* Vector<N, $X>) -> Self::Output
            { vector * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    @{by_ref}
    impl_v_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // vector * scalar
        impl<$($lt_a)* const N: usize, X: Semiring> Mul<X> for $($ref_a)* Vector<N, X>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Vector(std::array::from_fn(|k| self[k] * scalar)) }
        }

        // vector / scalar
        //
        // Multiplies by the reciprocal, so dividing by zero gives inf/NaN.
        impl<$($lt_a)* const N: usize, X: Field> Div<X> for $($ref_a)* Vector<N, X>
          where X: PrimitiveFloat,
        {
            type Output = Vector<N, X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { self * (X::one() / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_m_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Semiring>
            Add<$($ref_b)* Matrix<R, C, X>> for $($ref_a)* Matrix<R, C, X>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<R, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Ring>
            Sub<$($ref_b)* Matrix<R, C, X>> for $($ref_a)* Matrix<R, C, X>
          where X: PrimitiveRing,
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<R, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| self[r][c] - other[r][c]) }
        }

        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const K: usize, const C: usize, X: Semiring>
            Mul<$($ref_b)* Matrix<K, C, X>> for $($ref_a)* Matrix<R, K, X>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<K, C, X>) -> Self::Output
            { mat_mul::<R, K, C, X>(&self, &other) }
        }
    }
}

// Each element is accumulated from zero in increasing `k`, so that results
// are reproducible down to the last bit.
#[inline]
fn mat_mul<const R: usize, const K: usize, const C: usize, X>(
    a: &Matrix<R, K, X>,
    b: &Matrix<K, C, X>,
) -> Matrix<R, C, X>
where X: Semiring + PrimitiveSemiring,
{
    Matrix::from_fn(|r, c| {
        (0..K).fold(X::zero(), |acc, k| acc + a[r][k] * b[k][c])
    })
}

// -matrix
gen_each!{
    @{by_ref}
    impl_m_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const R: usize, const C: usize, X: Ring> Neg for $($ref_a)* Matrix<R, C, X>
          where X: PrimitiveRing,
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn neg(self) -> Self::Output
            { self * X::from_int(-1) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

// scalar * matrix
gen_each!{
    @{semiring}
    @{by_ref}
    impl_scalar_m_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const R: usize, const C: usize> Mul<$($ref_a)* Matrix<R, C, $X>> for $X {
            type Output = Matrix<R, C, $X>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<R, C, $X>) -> Self::Output
            { matrix * self }
        }
    }
}

// matrix `op` scalar
gen_each!{
    @{by_ref}
    impl_m_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // matrix * scalar
        impl<$($lt_a)* const R: usize, const C: usize, X: Semiring> Mul<X> for $($ref_a)* Matrix<R, C, X>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Matrix::from_fn(|r, c| self[r][c] * scalar) }
        }

        // matrix / scalar
        //
        // Multiplies by the reciprocal, so dividing by zero gives inf/NaN.
        impl<$($lt_a)* const R: usize, const C: usize, X: Field> Div<X> for $($ref_a)* Matrix<R, C, X>
          where X: PrimitiveFloat,
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { self * (X::one() / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// row and column vectors just forward to the matrix they wrap

gen_each!{
    @{RowCol}
    @{by_ref}
    @{by_ref_b}
    impl_rc_add_sub!(
        {$Rc:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Semiring> Add<$($ref_b)* $Rc<N, X>> for $($ref_a)* $Rc<N, X>
          where X: PrimitiveSemiring,
        {
            type Output = $Rc<N, X>;

            #[inline(always)]
            fn add(self, other: $($ref_b)* $Rc<N, X>) -> Self::Output
            { $Rc(&self.0 + &other.0) }
        }

        impl<$($lt_a)* $($lt_b)* const N: usize, X: Ring> Sub<$($ref_b)* $Rc<N, X>> for $($ref_a)* $Rc<N, X>
          where X: PrimitiveRing,
        {
            type Output = $Rc<N, X>;

            #[inline(always)]
            fn sub(self, other: $($ref_b)* $Rc<N, X>) -> Self::Output
            { $Rc(&self.0 - &other.0) }
        }
    }
}

gen_each!{
    @{RowCol}
    @{by_ref}
    impl_rc_scalar_ops!(
        {$Rc:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const N: usize, X: Ring> Neg for $($ref_a)* $Rc<N, X>
          where X: PrimitiveRing,
        {
            type Output = $Rc<N, X>;

            #[inline(always)]
            fn neg(self) -> Self::Output
            { $Rc(-&self.0) }
        }

        impl<$($lt_a)* const N: usize, X: Semiring> Mul<X> for $($ref_a)* $Rc<N, X>
          where X: PrimitiveSemiring,
        {
            type Output = $Rc<N, X>;

            #[inline(always)]
            fn mul(self, scalar: X) -> Self::Output
            { $Rc(&self.0 * scalar) }
        }

        impl<$($lt_a)* const N: usize, X: Field> Div<X> for $($ref_a)* $Rc<N, X>
          where X: PrimitiveFloat,
        {
            type Output = $Rc<N, X>;

            #[inline(always)]
            fn div(self, scalar: X) -> Self::Output
            { $Rc(&self.0 / scalar) }
        }
    }
}

gen_each!{
    @{RowCol}
    @{semiring}
    @{by_ref}
    impl_rc_scalar_left_ops!(
        {$Rc:ident}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const N: usize> Mul<$($ref_a)* $Rc<N, $X>> for $X {
            type Output = $Rc<N, $X>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* $Rc<N, $X>) -> Self::Output
            { vector * self }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)
//
// These only exist where the corresponding binary operator produces a value
// of the same type, so e.g. `matrix *= &square` works but multiplying by a
// matrix that would change the column count does not.

gen_each!{
    [{Vector} {RowVector} {ColumnVector}]
    impl_v_assign_ops!(
        {$Vn:ident}
    ) => {
        // vector += vector;
        impl<const N: usize, X, B> AddAssign<B> for $Vn<N, X> where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // vector -= vector;
        impl<const N: usize, X, B> SubAssign<B> for $Vn<N, X> where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // vector *= scalar;
        impl<const N: usize, X, B> MulAssign<B> for $Vn<N, X> where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        // vector /= scalar;
        impl<const N: usize, X, B> DivAssign<B> for $Vn<N, X> where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    }
}

// matrix += matrix;
impl<const R: usize, const C: usize, X, B> AddAssign<B> for Matrix<R, C, X> where for<'a> &'a Self: Add<B, Output=Self> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<const R: usize, const C: usize, X, B> SubAssign<B> for Matrix<R, C, X> where for<'a> &'a Self: Sub<B, Output=Self> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= square matrix;
impl<const R: usize, const C: usize, X, B> MulAssign<B> for Matrix<R, C, X> where for<'a> &'a Self: Mul<B, Output=Self> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<const R: usize, const C: usize, X, B> DivAssign<B> for Matrix<R, C, X> where for<'a> &'a Self: Div<B, Output=Self> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience,
// so that e.g. `{:.3}` does what you'd expect.
gen_each!{
    [{Display} {LowerExp} {UpperExp}]
    impl_fmt!(
        {$Format:ident}
    ) => {
        /// Renders as `(x0, x1, ...)`.
        impl<const N: usize, X: fmt::$Format> fmt::$Format for Vector<N, X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                write_separated(f, &self.0, |x, f| fmt::$Format::fmt(x, f))?;
                write!(f, ")")
            }
        }

        /// Renders one row per line, with elements separated by `", "`.
        ///
        /// There is no newline after the last row.
        impl<const R: usize, const C: usize, X: fmt::$Format> fmt::$Format for Matrix<R, C, X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (r, row) in self.0.iter().enumerate() {
                    if r > 0 {
                        writeln!(f)?;
                    }
                    write_separated(f, row, |x, f| fmt::$Format::fmt(x, f))?;
                }
                Ok(())
            }
        }

        impl<const N: usize, X: fmt::$Format> fmt::$Format for RowVector<N, X> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::$Format::fmt(&self.0, f) }
        }

        impl<const N: usize, X: fmt::$Format> fmt::$Format for ColumnVector<N, X> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::$Format::fmt(&self.0, f) }
        }
    }
}

fn write_separated<X>(
    f: &mut fmt::Formatter<'_>,
    items: &[X],
    mut write_item: impl FnMut(&X, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_item(x, f)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn mat_mat() {
        let eye2 = mat::from_array([[1, 0], [0, 1i32]]);
        let eye3 = mat::from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1i32]]);

        let a = mat::from_array([
            [1, 2, 3],
            [4, 5, 6],
        ]);

        let b = mat::from_array([
            [1,  1],
            [1, -1],
            [0,  1],
        ]);

        let a_dot_b = mat::from_array([
            [3, 2],
            [9, 5],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, &a * &eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a_dot_b, a * b);
    }

    #[test]
    fn mat_mul_accumulates_from_zero() {
        // -0.0 + -0.0 would stay negative; starting from +0.0 it must not.
        let a = mat::from_array([[-0.0f64, 1.0]]);
        let b = mat::from_array([[1.0], [-0.0]]);
        let c = &a * &b;
        assert_eq!(c[0][0], 0.0);
        assert!(c[0][0].is_sign_positive());
    }

    #[test]
    fn mat_add_sub_neg() {
        let a = mat::from_array([[1, 2], [3, 4]]);
        let b = mat::from_array([[10, 20], [30, 40]]);

        assert_eq!(&a + &b, mat::from_array([[11, 22], [33, 44]]));
        assert_eq!(b - a, mat::from_array([[9, 18], [27, 36]]));
        assert_eq!(-a, mat::from_array([[-1, -2], [-3, -4]]));
        assert_eq!(-&a, a * -1);

        let mut c = a;
        c += &b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn mat_scalar() {
        let a = mat::from_array([[1.0f64, 2.0], [4.0, 8.0]]);
        assert_eq!(&a * 2.0, mat::from_array([[2.0, 4.0], [8.0, 16.0]]));
        assert_eq!(2.0f64 * a, &a * 2.0);
        assert_eq!(a / 4.0, mat::from_array([[0.25, 0.5], [1.0, 2.0]]));

        let mut b = a;
        b *= 4.0;
        b /= 4.0;
        assert_eq!(b, a);
    }

    #[test]
    fn mat_div_by_zero_is_not_an_error() {
        let a = mat::from_array([[1.0f64, -1.0], [0.0, 2.0]]);
        let b = a / 0.0;
        assert_eq!(b[0][0], std::f64::INFINITY);
        assert_eq!(b[0][1], std::f64::NEG_INFINITY);
        assert!(b[1][0].is_nan());
    }

    #[test]
    fn square_mul_assign() {
        let mut a = mat::from_array([[1, 1], [0, 1]]);
        let b = a;
        a *= &b;
        assert_eq!(a, mat::from_array([[1, 2], [0, 1]]));
        a *= b;
        assert_eq!(a, mat::from_array([[1, 3], [0, 1]]));

        // a rectangular matrix can still be multiplied in place by a square one
        let mut r = mat::from_array([[1, 2, 3]]);
        r *= &mat::from_array([[0, 0, 1], [0, 1, 0], [1, 0, 0]]);
        assert_eq!(r, mat::from_array([[3, 2, 1]]));
    }

    #[test]
    fn vec_ops() {
        let a = Vector([1i32, 2, 3]);
        let b = Vector([4, 5, 6]);
        assert_eq!(&a + &b, Vector([5, 7, 9]));
        assert_eq!(b - a, Vector([3, 3, 3]));
        assert_eq!(-a, Vector([-1, -2, -3]));
        assert_eq!(a * 2, Vector([2, 4, 6]));
        assert_eq!(2 * a, Vector([2, 4, 6]));
        assert_eq!(Vector([1.0, 2.0]) / 2.0, Vector([0.5, 1.0]));

        let mut c = a;
        c += b;
        c -= &a;
        c *= 2;
        assert_eq!(c, Vector([8, 10, 12]));
        let mut d = Vector([2.0, 4.0]);
        d /= 2.0;
        assert_eq!(d, Vector([1.0, 2.0]));
    }

    #[test]
    fn row_col_ops() {
        let a = RowVector(mat::from_array([[1.0f64, 2.0]]));
        let b = RowVector(mat::from_array([[3.0, 5.0]]));
        assert_eq!((&a + &b).0, mat::from_array([[4.0, 7.0]]));
        assert_eq!((b - a).0, mat::from_array([[2.0, 3.0]]));
        assert_eq!((-a).0, mat::from_array([[-1.0, -2.0]]));
        assert_eq!((2.0f64 * a).0, mat::from_array([[2.0, 4.0]]));
        assert_eq!((a / 2.0).0, mat::from_array([[0.5, 1.0]]));

        let mut c = ColumnVector(mat::from_array([[1], [2]]));
        c += ColumnVector(mat::from_array([[1], [1]]));
        c *= 3;
        assert_eq!(c.0, mat::from_array([[6], [9]]));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Vector([1, 2, 3])), "(1, 2, 3)");
        assert_eq!(format!("{:.1}", Vector([1.0, 1.0 / 3.0])), "(1.0, 0.3)");
        assert_eq!(format!("{}", Vector::<0, i32>([])), "()");

        let m = mat::from_array([[1, 2], [3, 4]]);
        assert_eq!(format!("{}", m), "1, 2\n3, 4");
        assert_eq!(format!("{:e}", mat::from_array([[1.0, 10.0]])), "1e0, 1e1");

        let col = ColumnVector(mat::from_array([[1], [2]]));
        assert_eq!(format!("{}", col), "1\n2");
        assert!(!format!("{}", mat::from_array([[1], [2], [3]])).ends_with('\n'));
    }
}
