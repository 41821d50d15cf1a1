/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vectors and matrices whose dimensions are part of the type.
//!
//! * `Vector<N>` (with aliases `V2`, `V3`, `V4`) is a plain list of `N` scalars.
//! * `Matrix<R, C>` is an `R x C` grid of scalars stored row-major.
//! * `RowVector<N>` and `ColumnVector<N>` are `1 x N` and `N x 1` matrices
//!   with per-element indexing and norms.
//!
//! Operations that require particular shapes (trace, LU, matrix products
//! with mismatched inner dimensions) are rejected at compile time.

#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;
#[macro_use]
extern crate log;

#[macro_use] mod macros;
mod traits;

pub use self::traits::{Semiring, Ring, Field};

pub use self::types::*;
mod types;

mod ops;
mod methods_rc;

pub use self::lu::{LuError, PartialPivLu};
mod lu;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::dot;
