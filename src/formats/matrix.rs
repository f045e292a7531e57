// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Plain-text square matrices, one whitespace separated row per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use nalgebra::DMatrix;

use crate::error::PiError;

pub fn read_matrix<R: BufRead>(reader: R) -> Result<DMatrix<f64>, PiError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let n = rows.len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(PiError::GenericError(format!(
            "matrix is not square: row {i} has {} values, expected {n}",
            row.len()
        )));
    }

    Ok(DMatrix::from_row_iterator(n, n, rows.into_iter().flatten()))
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{BufReader, Cursor};

    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn read_with_comments_and_blank_lines() {
        let file = File::open("./src/tests-data/matrix/water.txt").unwrap();
        let matrix = read_matrix(BufReader::new(file)).unwrap();
        assert_eq!(matrix.shape(), (3, 3));
        assert_approx_eq!(matrix[(0, 1)], -2.5);
        assert_approx_eq!(matrix[(2, 0)], -2.5);
        assert_approx_eq!(matrix[(1, 2)], 0.4);
        assert_approx_eq!(matrix[(2, 2)], 0.0);
    }

    #[test]
    fn rows_are_rows() {
        let matrix = read_matrix(Cursor::new("1 2\n3 4\n")).unwrap();
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(1, 0)], 3.0);
    }

    #[test]
    fn empty_input() {
        let matrix = read_matrix(Cursor::new("# nothing here\n")).unwrap();
        assert_eq!(matrix.shape(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "matrix is not square: row 1 has 1 values, expected 2")]
    fn ragged_rows() {
        read_matrix(Cursor::new("1 2\n3\n")).unwrap();
    }

    #[test]
    #[should_panic(expected = "ParseFloatError")]
    fn not_a_number() {
        read_matrix(Cursor::new("1 x\n3 4\n")).unwrap();
    }
}
