// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::ops::{Index, IndexMut};

use nalgebra::Vector3;

use crate::atom::Atom;
use crate::error::PiError;
use crate::property::Properties;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    pub properties: Properties,
    atoms: Vec<Atom>,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            properties: Properties::new(),
            atoms: Vec::new(),
        }
    }

    /// Build a frame from parallel lists of atomic numbers and positions.
    pub fn from_parts(numbers: &[u8], positions: &[[f64; 3]]) -> Result<Self, PiError> {
        if numbers.len() != positions.len() {
            return Err(PiError::GenericError(format!(
                "got {} atomic numbers but {} positions",
                numbers.len(),
                positions.len()
            )));
        }
        let mut frame = Frame::new();
        for (&number, &position) in numbers.iter().zip(positions) {
            frame.add_atom(Atom::new(number, position));
        }
        Ok(frame)
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom)
    }

    pub fn numbers(&self) -> Vec<u8> {
        self.atoms.iter().map(|a| a.number).collect()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Arithmetic mean of the positions, the origin for an empty frame.
    pub fn centroid(&self) -> [f64; 3] {
        if self.atoms.is_empty() {
            return [0.0; 3];
        }
        let sum = self
            .atoms
            .iter()
            .fold(Vector3::<f64>::zeros(), |acc, a| acc + Vector3::from(a.position));
        let mean: Vector3<f64> = sum / self.atoms.len() as f64;
        mean.into()
    }

    /// Positions translated so that their centroid sits at the origin.
    ///
    /// The frame itself is left untouched.
    pub fn centered_positions(&self) -> Vec<[f64; 3]> {
        let centroid = Vector3::from(self.centroid());
        self.atoms
            .iter()
            .map(|a| {
                let centered: Vector3<f64> = Vector3::from(a.position) - centroid;
                centered.into()
            })
            .collect()
    }

    /// Collect the numeric per-atom property `name`, one value per atom.
    pub fn atom_property(&self, name: &str) -> Result<Vec<f64>, PiError> {
        self.atoms
            .iter()
            .map(|atom| {
                atom.properties
                    .get(name)
                    .and_then(|p| p.as_double())
                    .ok_or_else(|| PiError::MissingProperty(name.to_string()))
            })
            .collect()
    }
}

impl Index<usize> for Frame {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl IndexMut<usize> for Frame {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.atoms[index]
    }
}
