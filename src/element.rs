// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Per-element reference data: symbols, covalent radii and Jmol colors.
//!
//! Tables are indexed by atomic number. Index 0 is the dummy element `X`.

use phf::phf_map;

use crate::error::PiError;

/// Element symbol to atomic number.
static ATOMIC_NUMBERS: phf::Map<&'static str, u8> = phf_map! {
    "X" => 0,
    "H" => 1, "He" => 2,
    "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8, "F" => 9, "Ne" => 10,
    "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16, "Cl" => 17, "Ar" => 18,
    "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24, "Mn" => 25,
    "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32,
    "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
    "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40, "Nb" => 41, "Mo" => 42, "Tc" => 43,
    "Ru" => 44, "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48, "In" => 49, "Sn" => 50,
    "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54,
    "Cs" => 55, "Ba" => 56, "La" => 57, "Ce" => 58, "Pr" => 59, "Nd" => 60, "Pm" => 61,
    "Sm" => 62, "Eu" => 63, "Gd" => 64, "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68,
    "Tm" => 69, "Yb" => 70, "Lu" => 71, "Hf" => 72, "Ta" => 73, "W" => 74, "Re" => 75,
    "Os" => 76, "Ir" => 77, "Pt" => 78, "Au" => 79, "Hg" => 80, "Tl" => 81, "Pb" => 82,
    "Bi" => 83, "Po" => 84, "At" => 85, "Rn" => 86,
    "Fr" => 87, "Ra" => 88, "Ac" => 89, "Th" => 90, "Pa" => 91, "U" => 92, "Np" => 93,
    "Pu" => 94, "Am" => 95, "Cm" => 96, "Bk" => 97, "Cf" => 98, "Es" => 99, "Fm" => 100,
    "Md" => 101, "No" => 102, "Lr" => 103, "Rf" => 104, "Db" => 105, "Sg" => 106,
    "Bh" => 107, "Hs" => 108, "Mt" => 109, "Ds" => 110, "Rg" => 111, "Cn" => 112,
    "Nh" => 113, "Fl" => 114, "Mc" => 115, "Lv" => 116, "Ts" => 117, "Og" => 118,
};

/// Number of table entries: the dummy element and Z = 1 to 118.
const NUM_ELEMENTS: usize = 119;

const SYMBOLS: [&str; NUM_ELEMENTS] = [
    "X", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am",
    "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Covalent radii in Angstrom (Cordero et al., Dalton Trans. 2008).
/// Mn, Fe and Co use the low-spin values, C the sp3 value. Elements past Cm
/// have no measured radius and use 0.2, like the dummy element.
const COVALENT_RADII: [f64; NUM_ELEMENTS] = [
    0.20, // X
    0.31, 0.28, // H, He
    1.28, 0.96, 0.84, 0.76, 0.71, 0.66, 0.57, 0.58, // Li - Ne
    1.66, 1.41, 1.21, 1.11, 1.07, 1.05, 1.02, 1.06, // Na - Ar
    2.03, 1.76, 1.70, 1.60, 1.53, 1.39, 1.39, 1.32, 1.26, 1.24, 1.32, 1.22, 1.22, 1.20, 1.19,
    1.20, 1.20, 1.16, // K - Kr
    2.20, 1.95, 1.90, 1.75, 1.64, 1.54, 1.47, 1.46, 1.42, 1.39, 1.45, 1.44, 1.42, 1.39, 1.39,
    1.38, 1.39, 1.40, // Rb - Xe
    2.44, 2.15, 2.07, 2.04, 2.03, 2.01, 1.99, 1.98, 1.98, 1.96, 1.94, 1.92, 1.92, 1.89, 1.90,
    1.87, 1.87, 1.75, 1.70, 1.62, 1.51, 1.44, 1.41, 1.36, 1.36, 1.32, 1.45, 1.46, 1.48, 1.40,
    1.50, 1.50, // Cs - Rn
    2.60, 2.21, 2.15, 2.06, 2.00, 1.96, 1.90, 1.87, 1.80, 1.69, // Fr - Cm
    0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20,
    0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, // Bk - Og
];

/// Standard Jmol CPK colors. Jmol stops at Mt; heavier elements get its
/// unknown-element pink.
const JMOL_COLORS: [&str; NUM_ELEMENTS] = [
    "#ff0000", // X
    "#ffffff", "#d9ffff", // H, He
    "#cc80ff", "#c2ff00", "#ffb5b5", "#909090", "#3050f8", "#ff0d0d", "#90e050", "#b3e3f5",
    "#ab5cf2", "#8aff00", "#bfa6a6", "#f0c8a0", "#ff8000", "#ffff30", "#1ff01f", "#80d1e3",
    "#8f40d4", "#3dff00", "#e6e6e6", "#bfc2c7", "#a6a6ab", "#8a99c7", "#9c7ac7", "#e06633",
    "#f090a0", "#50d050", "#c88033", "#7d80b0", "#c28f8f", "#668f8f", "#bd80e3", "#ffa100",
    "#a62929", "#5cb8d1", // K - Kr
    "#702eb0", "#00ff00", "#94ffff", "#94e0e0", "#73c2c9", "#54b5b5", "#3b9e9e", "#248f8f",
    "#0a7d8c", "#006985", "#c0c0c0", "#ffd98f", "#a67573", "#668080", "#9e63b5", "#d47a00",
    "#940094", "#429eb0", // Rb - Xe
    "#57178f", "#00c900", "#70d4ff", "#ffffc7", "#d9ffc7", "#c7ffc7", "#a3ffc7", "#8fffc7",
    "#61ffc7", "#45ffc7", "#30ffc7", "#1fffc7", "#00ff9c", "#00e675", "#00d452", "#00bf38",
    "#00ab24", "#4dc2ff", "#4da6ff", "#2194d6", "#267dab", "#266696", "#175487", "#d0d0e0",
    "#ffd123", "#b8b8d0", "#a6544d", "#575961", "#9e4fb5", "#ab5c00", "#754f45", "#428296",
    "#420066", "#007d00", "#70abfa", "#00baff", "#00a1ff", "#008fff", "#0080ff", "#006bff",
    "#545cf2", "#785ce3", "#8a4fe3", "#a136d4", "#b31fd4", "#b31fba", "#b30da6", "#bd0d87",
    "#c70066", "#cc0059", "#d1004f", "#d90045", "#e00038", "#e6002e", "#eb0026", // Fr - Mt
    "#ff1493", "#ff1493", "#ff1493", "#ff1493", "#ff1493", "#ff1493", "#ff1493", "#ff1493",
    "#ff1493", // Ds - Og
];

/// Atomic number for an element symbol. Matching is case-sensitive, like
/// the symbols written by most structure files.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    ATOMIC_NUMBERS.get(symbol).copied()
}

pub fn symbol(number: u8) -> Option<&'static str> {
    SYMBOLS.get(usize::from(number)).copied()
}

/// Natural bonding radius of element `number`.
pub fn covalent_radius(number: u8) -> Result<f64, PiError> {
    COVALENT_RADII
        .get(usize::from(number))
        .copied()
        .ok_or_else(|| PiError::UnknownElement(format!("Z = {number}")))
}

pub fn jmol_color(number: u8) -> Result<&'static str, PiError> {
    JMOL_COLORS
        .get(usize::from(number))
        .copied()
        .ok_or_else(|| PiError::UnknownElement(format!("Z = {number}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn symbols_round_trip_through_numbers() {
        for (number, symbol_str) in SYMBOLS.iter().enumerate() {
            assert_eq!(atomic_number(symbol_str), Some(number as u8));
            assert_eq!(symbol(number as u8), Some(*symbol_str));
        }
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number("h"), None);
        assert_eq!(symbol(119), None);
    }

    #[test]
    fn covalent_radii() {
        assert_approx_eq!(covalent_radius(1).unwrap(), 0.31);
        assert_approx_eq!(covalent_radius(6).unwrap(), 0.76);
        assert_approx_eq!(covalent_radius(8).unwrap(), 0.66);
        assert_approx_eq!(covalent_radius(26).unwrap(), 1.32);
        assert_approx_eq!(covalent_radius(86).unwrap(), 1.50);
    }

    #[test]
    fn actinides_and_superheavy_elements() {
        assert_eq!(atomic_number("U"), Some(92));
        assert_eq!(atomic_number("Og"), Some(118));
        assert_eq!(symbol(92), Some("U"));
        assert_approx_eq!(covalent_radius(92).unwrap(), 1.96);
        assert_approx_eq!(covalent_radius(96).unwrap(), 1.69);
        assert_approx_eq!(covalent_radius(118).unwrap(), 0.20);
        assert_eq!(jmol_color(92).unwrap(), "#008fff");
        assert_eq!(jmol_color(109).unwrap(), "#eb0026");
        assert_eq!(jmol_color(118).unwrap(), "#ff1493");
    }

    #[test]
    fn jmol_colors() {
        assert_eq!(jmol_color(1).unwrap(), "#ffffff");
        assert_eq!(jmol_color(6).unwrap(), "#909090");
        assert_eq!(jmol_color(8).unwrap(), "#ff0d0d");
        assert_eq!(jmol_color(79).unwrap(), "#ffd123");
    }

    #[test]
    #[should_panic(expected = "UnknownElement(\"Z = 119\")")]
    fn radius_out_of_table() {
        covalent_radius(119).unwrap();
    }

    #[test]
    #[should_panic(expected = "UnknownElement(\"Z = 200\")")]
    fn color_out_of_table() {
        jmol_color(200).unwrap();
    }
}
