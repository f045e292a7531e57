// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Covalent neighbor search over per-atom cutoff radii.

use log::debug;
use nalgebra::Vector3;

use crate::element;
use crate::error::PiError;
use crate::frame::Frame;

/// An ordered pair of neighboring atoms. Both `(i, j)` and `(j, i)` are
/// reported for every bonded pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// Covalent radius of every atom in `frame`, scaled by `mult`.
pub fn natural_cutoffs(frame: &Frame, mult: f64) -> Result<Vec<f64>, PiError> {
    frame
        .atoms()
        .iter()
        .map(|atom| element::covalent_radius(atom.number).map(|r| r * mult))
        .collect()
}

/// All ordered pairs `(i, j)` with `i != j` whose distance is strictly
/// below `cutoffs[i] + cutoffs[j]`, sorted by `i` then `j`.
///
/// Positions are taken as-is: no periodic images are considered.
pub fn neighbor_list(frame: &Frame, cutoffs: &[f64]) -> Result<Vec<Neighbor>, PiError> {
    let natoms = frame.size();
    if cutoffs.len() != natoms {
        return Err(PiError::CutoffsLength {
            got: cutoffs.len(),
            natoms,
        });
    }

    let positions: Vec<Vector3<f64>> = frame
        .atoms()
        .iter()
        .map(|a| Vector3::from(a.position))
        .collect();

    let mut neighbors = Vec::new();
    for (i, pos_i) in positions.iter().enumerate() {
        for (j, pos_j) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let distance = (pos_j - pos_i).norm();
            if distance < cutoffs[i] + cutoffs[j] {
                neighbors.push(Neighbor { i, j, distance });
            }
        }
    }

    debug!("found {} neighbor pairs among {natoms} atoms", neighbors.len());
    Ok(neighbors)
}
