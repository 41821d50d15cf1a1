/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrices and vectors.
//!
//! The types live in `fixmat-array-types` and are re-exported here.
//! The `fixmat-lu` binary demonstrates LU decomposition on the command line.

pub use fixmat_array_types::*;
