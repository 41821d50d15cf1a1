/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate fixmat_assert_close;

use fixmat::{mat, Matrix, SquareMatrix, ColumnVector, LuError};

mod shared;
use self::shared::*;

fn check_factors<const N: usize>(a: &SquareMatrix<N>, l: &SquareMatrix<N>, u: &SquareMatrix<N>) {
    for i in 0..N {
        assert_eq!(l[i][i], 1.0, "{:?}", l);
        for j in i + 1..N {
            assert_eq!(l[i][j], 0.0, "{:?}", l);
        }
        for j in 0..i {
            assert_eq!(u[i][j], 0.0, "{:?}", u);
        }
    }
    assert_close!(abs=1e-9, (l * u).0, a.0, "{:?}", a);
}

fn check_random_reconstruction<const N: usize>() {
    for _ in 0..200 {
        let a = random_dominant_matrix::<N>();
        let (l, u) = a.lu();
        check_factors(&a, &l, &u);

        // the fallible form agrees bit for bit
        assert_eq!(a.try_lu(), Ok((l, u)));
    }
}

#[test]
fn reconstruction() {
    check_random_reconstruction::<1>();
    check_random_reconstruction::<2>();
    check_random_reconstruction::<3>();
    check_random_reconstruction::<4>();
    check_random_reconstruction::<7>();
}

#[test]
fn worked_example() {
    let a = mat::from_array([[1.0, 2.0], [0.1, 4.0]]);
    let mut l = Matrix::zero();
    let mut u = Matrix::zero();
    a.lu_decomposition(&mut l, &mut u);

    assert_close!(abs=1e-12, l.0, [[1.0, 0.0], [0.1, 1.0]]);
    assert_close!(abs=1e-12, u.0, [[1.0, 2.0], [0.0, 3.8]]);
    check_factors(&a, &l, &u);

    // ...and once more on a product, as the demo binary does
    let c = a * (l * u);
    let (l2, u2) = c.lu();
    check_factors(&c, &l2, &u2);
}

#[test]
fn outputs_are_overwritten() {
    let a = random_dominant_matrix::<3>();
    let mut l = Matrix([[f64::NAN; 3]; 3]);
    let mut u = Matrix([[f64::INFINITY; 3]; 3]);
    a.lu_decomposition(&mut l, &mut u);
    assert_eq!((l, u), a.lu());
}

#[test]
fn zero_pivot() {
    let a = mat::from_array([
        [1.0f64, 1.0, 1.0],
        [1.0, 1.0, 2.0],
        [0.0, 3.0, 1.0],
    ]);
    assert_eq!(a.try_lu(), Err(LuError::ZeroPivot { column: 1 }));

    // the default algorithm just degrades
    let (l, _) = a.lu();
    assert!(l.iter().flatten().any(|x| !x.is_finite()));

    // but pivoting handles it
    let piv = a.lu_partial_pivot();
    let (p, l, u) = piv.into_factors();
    assert_close!(abs=1e-12, (p * a).0, (l * u).0);
}

#[test]
fn partial_pivot_reconstruction() {
    for _ in 0..200 {
        let a = random_matrix::<4, 4>();
        let piv = a.lu_partial_pivot();

        for i in 0..4 {
            for j in i + 1..4 {
                assert_eq!(piv.l()[i][j], 0.0);
            }
            for j in 0..i {
                assert_eq!(piv.u()[i][j], 0.0);
                // multipliers never exceed one in magnitude
                assert!(piv.l()[i][j].abs() <= 1.0);
            }
        }
        let mut sorted = *piv.perm();
        sorted.sort();
        assert_eq!(sorted, [0, 1, 2, 3]);

        let (p, l, u) = piv.into_factors();
        assert_close!(abs=1e-9, (p * a).0, (l * u).0);
    }
}

#[test]
fn det_is_multiplicative() {
    for _ in 0..100 {
        let a = random_matrix::<3, 3>();
        let b = random_matrix::<3, 3>();
        assert_close!(abs=1e-9, (a * b).det(), a.det() * b.det());
    }
    assert_eq!(Matrix::<4, 4>::eye().det(), 1.0);
}

#[test]
fn solve() {
    for _ in 0..100 {
        let a = random_dominant_matrix::<4>();
        let x = ColumnVector::from_array(random_vector::<4>().0);
        let b = ColumnVector::from(&a * x.as_matrix());
        let solved = a.solve(&b).unwrap();
        assert_close!(abs=1e-9, solved.to_vector().0, x.to_vector().0);
    }

    let singular = mat::from_array([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
    let b = ColumnVector::from_array([1.0, 2.0, 3.0]);
    assert!(matches!(singular.solve(&b), Err(LuError::Singular { .. })));
}

#[test]
fn error_messages() {
    let msg = LuError::ZeroPivot { column: 2 }.to_string();
    assert!(msg.contains("column 2"), "{}", msg);
}
