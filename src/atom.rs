// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::element;
use crate::error::PiError;
use crate::property::Properties;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Atom {
    /// Atomic number, 0 for dummy atoms
    pub number: u8,
    pub position: [f64; 3],
    pub properties: Properties,
}

impl Atom {
    pub fn new(number: u8, position: [f64; 3]) -> Self {
        Self {
            number,
            position,
            properties: Properties::new(),
        }
    }

    /// Create an atom from an element symbol (`"C"`) or an atomic number
    /// written as text (`"6"`).
    pub fn from_species(species: &str, position: [f64; 3]) -> Result<Self, PiError> {
        let number = match element::atomic_number(species) {
            Some(number) => number,
            None => species
                .parse::<u8>()
                .map_err(|_| PiError::UnknownElement(species.to_string()))?,
        };
        Ok(Self::new(number, position))
    }

    pub fn symbol(&self) -> Option<&'static str> {
        element::symbol(self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_by_symbol_or_number() {
        let carbon = Atom::from_species("C", [0.0; 3]).unwrap();
        assert_eq!(carbon.number, 6);
        assert_eq!(carbon.symbol(), Some("C"));

        let oxygen = Atom::from_species("8", [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(oxygen.number, 8);
        assert_eq!(oxygen.position, [1.0, 2.0, 3.0]);

        let uranium = Atom::from_species("U", [0.0; 3]).unwrap();
        assert_eq!(uranium.number, 92);
    }

    #[test]
    #[should_panic(expected = "UnknownElement(\"Qq\")")]
    fn unknown_species() {
        Atom::from_species("Qq", [0.0; 3]).unwrap();
    }
}
