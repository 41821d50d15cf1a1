/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate log;

use fixmat::{Matrix, SquareMatrix};
use fixmat_assert_close::{CheckClose, Tolerances};

pub type FailResult<T> = Result<T, failure::Error>;

/// The worked example: `[[1, 2], [0.1, 4]]`.
const DEFAULT_MATRIX: &str = "1,2;0.1,4";

pub fn main() {
    _main().unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    });
}

struct Options {
    pivot: bool,
    check: bool,
    tol: f64,
}

pub fn _main() -> FailResult<()> {
    env_logger::init();
    let app = {
        clap::App::new("fixmat-lu")
            .about("LU-decomposes a small square matrix and multiplies the factors back together.")
            .args(&[
                clap::Arg::with_name("matrix")
                    .value_name("MATRIX")
                    .default_value(DEFAULT_MATRIX)
                    .help("Matrix rows separated by ';', elements by ','. (2x2, 3x3 or 4x4)"),
                clap::Arg::with_name("pivot")
                    .long("pivot")
                    .help("Use partial pivoting (P * A = L * U) instead of plain Doolittle."),
                clap::Arg::with_name("check")
                    .long("check")
                    .help("Fail unless L * U reconstructs the input to within --tol."),
                clap::Arg::with_name("tol")
                    .long("tol")
                    .takes_value(true)
                    .value_name("TOL")
                    .default_value("1e-9")
                    .help("Absolute and relative tolerance for --check."),
            ])
    };
    let matches = app.get_matches();
    let options = Options {
        pivot: matches.is_present("pivot"),
        check: matches.is_present("check"),
        tol: matches.value_of("tol").unwrap_or("1e-9").parse()?,
    };
    if !(options.tol >= 0.0) {
        failure::bail!("--tol must be non-negative, got {}", options.tol);
    }

    let rows = parse_rows(matches.value_of("matrix").unwrap_or(DEFAULT_MATRIX))?;
    trace!("Parsed a {}x{} matrix", rows.len(), rows.len());
    match rows.len() {
        2 => run::<2>(&rows, &options),
        3 => run::<3>(&rows, &options),
        4 => run::<4>(&rows, &options),
        n => {
            failure::bail!("unsupported matrix size {}x{} (expected 2, 3 or 4)", n, n);
        },
    }
}

/// Parses `"1,2;3,4"` into rows, requiring the result to be square.
fn parse_rows(s: &str) -> FailResult<Vec<Vec<f64>>> {
    let rows = s.split(';')
        .map(|row| {
            row.split(',')
                .map(|x| x.trim().parse::<f64>().map_err(|e| {
                    failure::format_err!("bad matrix element {:?}: {}", x.trim(), e)
                }))
                .collect::<FailResult<Vec<_>>>()
        })
        .collect::<FailResult<Vec<_>>>()?;

    let n = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            failure::bail!("matrix is not square: row {} has {} elements but there are {} rows", i, row.len(), n);
        }
    }
    Ok(rows)
}

fn run<const N: usize>(rows: &[Vec<f64>], options: &Options) -> FailResult<()> {
    let a: SquareMatrix<N> = Matrix::from_fn(|r, c| rows[r][c]);
    let b = decompose_and_show("a", &a, options)?;

    // once more, on a product with the reconstruction
    let c = a * b;
    decompose_and_show("c", &c, options)?;
    Ok(())
}

// Prints the factors and returns `L * U`.
fn decompose_and_show<const N: usize>(
    name: &str,
    a: &SquareMatrix<N>,
    options: &Options,
) -> FailResult<SquareMatrix<N>> {
    let (p, l, u) = match options.pivot {
        true => a.lu_partial_pivot().into_factors(),
        false => {
            let mut l = Matrix::zero();
            let mut u = Matrix::zero();
            a.lu_decomposition(&mut l, &mut u);
            (Matrix::eye(), l, u)
        },
    };
    if !(l.iter().flatten().all(|x| x.is_finite())) {
        warn!("L contains non-finite values; {} needs pivoting (try --pivot)", name);
    }

    let lu = l * u;
    let target = &p * a;

    println!("{}\n{}", name, a);
    if options.pivot {
        println!("p\n{}", p);
    }
    println!("l\n{}", l);
    println!("u\n{}", u);
    println!("l*u\n{}", lu);
    match options.pivot {
        true => println!("p*{} {} l*u", name, if target == lu { "==" } else { "!=" }),
        false => println!("{} {} l*u", name, if target == lu { "==" } else { "!=" }),
    }

    if options.check {
        let tol = Tolerances { abs: options.tol, rel: options.tol };
        lu.0.check_close(&target.0, tol)?;
        info!("{}: L * U reconstructs the input within {}", name, options.tol);
    }
    Ok(lu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_rows(DEFAULT_MATRIX).unwrap(), vec![vec![1.0, 2.0], vec![0.1, 4.0]]);
        assert_eq!(parse_rows(" 1 , 0 ; 0 , 1 ").unwrap(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(parse_rows("1,2;3").is_err());
        assert!(parse_rows("1,x;3,4").is_err());
    }

    #[test]
    fn worked_example_checks() {
        let options = Options { pivot: false, check: true, tol: 1e-9 };
        let rows = parse_rows(DEFAULT_MATRIX).unwrap();
        run::<2>(&rows, &options).unwrap();

        let options = Options { pivot: true, check: true, tol: 1e-9 };
        run::<2>(&rows, &options).unwrap();
    }
}
