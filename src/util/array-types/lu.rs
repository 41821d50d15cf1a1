/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! LU decomposition of square matrices.
//!
//! The default algorithm is Doolittle's method *without* pivoting, which
//! fails numerically (with inf/NaN) on any matrix that has a zero pivot.
//! `try_lu` runs the same algorithm but stops at the first zero pivot, and
//! `lu_partial_pivot` is an alternate mode that reorders rows.

use crate::traits::Field;
use crate::traits::internal::PrimitiveFloat;
use crate::types::*;

use std::convert::Infallible;

/// Error type for the fallible LU routines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LuError {
    /// Doolittle's method without pivoting hit an exactly zero pivot.
    ///
    /// The matrix is either singular or needs row exchanges.
    #[error("zero pivot in column {column} (matrix is singular or needs pivoting)")]
    ZeroPivot { column: usize },

    /// A linear solve was requested against a singular matrix.
    #[error("matrix is singular (zero pivot in column {column} after pivoting)")]
    Singular { column: usize },
}

impl<const N: usize, X: Field> Matrix<N, N, X>
where X: PrimitiveFloat,
{
    /// Doolittle LU decomposition without pivoting, written into `l` and `u`.
    ///
    /// Afterwards, `l` is unit lower triangular, `u` is upper triangular,
    /// and `l * u` reconstructs `self` (within rounding error).
    ///
    /// Both outputs are overwritten entirely; their previous contents are
    /// irrelevant. No pivoting is performed, so a zero pivot produces
    /// infinities or NaNs in `l` rather than an error. Use `try_lu` if that
    /// needs to be detected.
    pub fn lu_decomposition(&self, l: &mut Self, u: &mut Self) {
        doolittle(self, l, u, |_, _| Ok::<_, Infallible>(()))
            .unwrap_or_else(|never| match never {})
    }

    /// Doolittle LU decomposition without pivoting, returning `(L, U)`.
    ///
    /// This is `lu_decomposition` with freshly allocated outputs.
    pub fn lu(&self) -> (Self, Self) {
        let mut l = Self::zero();
        let mut u = Self::zero();
        self.lu_decomposition(&mut l, &mut u);
        (l, u)
    }

    /// Doolittle LU decomposition that reports zero pivots.
    ///
    /// For matrices with no zero pivot the output is bit-for-bit identical
    /// to `lu()`. A zero in the last diagonal slot of `U` is also reported,
    /// even though the algorithm never divides by it, since it means the
    /// matrix is singular.
    pub fn try_lu(&self) -> Result<(Self, Self), LuError> {
        let mut l = Self::zero();
        let mut u = Self::zero();
        doolittle(self, &mut l, &mut u, |column, pivot| {
            if pivot == X::zero() {
                debug!("LU without pivoting found a zero pivot in column {}", column);
                return Err(LuError::ZeroPivot { column });
            }
            Ok(())
        })?;
        Ok((l, u))
    }

    /// LU decomposition with partial (row) pivoting, `P * A = L * U`.
    ///
    /// At each column the row with the largest magnitude entry on or below
    /// the diagonal is swapped into place. This never fails; singular
    /// matrices simply produce a zero on the diagonal of `U`.
    pub fn lu_partial_pivot(&self) -> PartialPivLu<N, X> {
        let mut a = *self;
        let mut perm: [usize; N] = std::array::from_fn(|i| i);
        let mut swaps = 0;

        for k in 0..N {
            let best = (k..N).fold(k, |best, i| {
                match a[i][k].abs() > a[best][k].abs() {
                    true => i,
                    false => best,
                }
            });
            if best != k {
                trace!("LU pivot: swapping rows {} and {}", k, best);
                a.0.swap(k, best);
                perm.swap(k, best);
                swaps += 1;
            }

            let pivot = a[k][k];
            if pivot == X::zero() {
                // nothing to eliminate; the column is already zero below here
                debug!("LU with pivoting found a singular column {}", k);
                continue;
            }
            for i in k + 1..N {
                let factor = a[i][k] / pivot;
                a[i][k] = factor;
                for j in k + 1..N {
                    a[i][j] = a[i][j] - factor * a[k][j];
                }
            }
        }

        let l = Matrix::from_fn(|r, c| match r.cmp(&c) {
            std::cmp::Ordering::Greater => a[r][c],
            std::cmp::Ordering::Equal => X::one(),
            std::cmp::Ordering::Less => X::zero(),
        });
        let u = Matrix::from_fn(|r, c| if r <= c { a[r][c] } else { X::zero() });
        PartialPivLu { perm, swaps, l, u }
    }

    /// Determinant, computed through `lu_partial_pivot`.
    pub fn det(&self) -> X
    { self.lu_partial_pivot().det() }

    /// Solve `self * x = b` for `x`, using `lu_partial_pivot`.
    pub fn solve(&self, b: &ColumnVector<N, X>) -> Result<ColumnVector<N, X>, LuError>
    { self.lu_partial_pivot().solve(b) }
}

// Doolittle's method, column by column.
//
// `check_pivot` is shown each `U[j][j]` as soon as it is known, before it is
// used as a divisor; an error aborts the decomposition.
//
// Each partial sum starts at zero and accumulates in increasing `k`,
// then is subtracted from `a[i][j]`.
fn doolittle<const N: usize, X, E>(
    a: &Matrix<N, N, X>,
    l: &mut Matrix<N, N, X>,
    u: &mut Matrix<N, N, X>,
    mut check_pivot: impl FnMut(usize, X) -> Result<(), E>,
) -> Result<(), E>
where X: Field + PrimitiveFloat,
{
    *l = Matrix::zero();
    *u = Matrix::zero();
    for i in 0..N {
        l[i][i] = X::one();
    }

    for j in 0..N {
        u[0][j] = a[0][j];
        for i in 1..j + 1 {
            let sum = (0..i).fold(X::zero(), |sum, k| sum + l[i][k] * u[k][j]);
            u[i][j] = a[i][j] - sum;
        }

        check_pivot(j, u[j][j])?;

        for i in j + 1..N {
            let sum = (0..i).fold(X::zero(), |sum, k| sum + l[i][k] * u[k][j]);
            l[i][j] = (a[i][j] - sum) / u[j][j];
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------

/// The result of `Matrix::lu_partial_pivot`.
///
/// Satisfies `P * A = L * U`, where `P` is `permutation_matrix()`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PartialPivLu<const N: usize, X = f64> {
    perm: [usize; N],
    swaps: usize,
    l: Matrix<N, N, X>,
    u: Matrix<N, N, X>,
}

impl<const N: usize, X: Field> PartialPivLu<N, X>
where X: PrimitiveFloat,
{
    /// Unit lower triangular factor.
    pub fn l(&self) -> &Matrix<N, N, X>
    { &self.l }

    /// Upper triangular factor.
    pub fn u(&self) -> &Matrix<N, N, X>
    { &self.u }

    /// Row `i` of `P * A` is row `perm()[i]` of `A`.
    pub fn perm(&self) -> &[usize; N]
    { &self.perm }

    /// Number of row exchanges that were performed.
    pub fn num_swaps(&self) -> usize
    { self.swaps }

    /// Take the factors `(P, L, U)`.
    pub fn into_factors(self) -> (Matrix<N, N, X>, Matrix<N, N, X>, Matrix<N, N, X>)
    { (self.permutation_matrix(), self.l, self.u) }

    /// The permutation `P` as a matrix of zeros and ones.
    pub fn permutation_matrix(&self) -> Matrix<N, N, X> {
        Matrix::from_fn(|r, c| match self.perm[r] == c {
            true => X::one(),
            false => X::zero(),
        })
    }

    /// Determinant of the decomposed matrix.
    pub fn det(&self) -> X {
        let sign = match self.swaps % 2 {
            0 => X::one(),
            _ => -X::one(),
        };
        (0..N).fold(sign, |prod, i| prod * self.u[i][i])
    }

    /// Solve `A * x = b` by forward and back substitution.
    pub fn solve(&self, b: &ColumnVector<N, X>) -> Result<ColumnVector<N, X>, LuError> {
        if let Some(column) = (0..N).find(|&i| self.u[i][i] == X::zero()) {
            return Err(LuError::Singular { column });
        }

        // L * y = P * b
        let mut y = [X::zero(); N];
        for i in 0..N {
            let sum = (0..i).fold(X::zero(), |sum, k| sum + self.l[i][k] * y[k]);
            y[i] = b[self.perm[i]] - sum;
        }

        // U * x = y
        let mut x = [X::zero(); N];
        for i in (0..N).rev() {
            let sum = (i + 1..N).fold(X::zero(), |sum, k| sum + self.u[i][k] * x[k]);
            x[i] = (y[i] - sum) / self.u[i][i];
        }
        Ok(ColumnVector::from_array(x))
    }
}

// ---------------------------------------------------------------------------
