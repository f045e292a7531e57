// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PiError;

/// How covalent bonds are colored when they are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BondColor {
    /// The same CSS color for every bond.
    Fixed(String),
    /// The Jmol color of the atom each half bond starts from.
    Jmol,
}

impl Default for BondColor {
    fn default() -> Self {
        BondColor::Fixed("#000000".to_string())
    }
}

impl From<String> for BondColor {
    fn from(value: String) -> Self {
        if value == "jmol" {
            BondColor::Jmol
        } else {
            BondColor::Fixed(value)
        }
    }
}

impl From<&str> for BondColor {
    fn from(value: &str) -> Self {
        BondColor::from(value.to_string())
    }
}

impl From<BondColor> for String {
    fn from(value: BondColor) -> Self {
        match value {
            BondColor::Fixed(color) => color,
            BondColor::Jmol => "jmol".to_string(),
        }
    }
}

/// Settings for one rendered view.
///
/// Missing fields take their default when deserialized, so a JSON document
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Draw covalent bonds when no interaction field is given
    pub draw_bonds: bool,
    pub bond_color: BondColor,
    /// Multiplier on the covalent radii used as bonding cutoffs
    pub bond_cutoff: f64,
    pub width: u32,
    pub height: u32,
    /// Save the picture under this name instead of showing the viewer
    pub download: Option<String>,

    pub pmin: Option<f64>,
    pub pmax: Option<f64>,
    pub pmap: String,

    pub imin: Option<f64>,
    pub imax: Option<f64>,
    pub imap: String,
    /// Interactions at or below `itol * max|inter|` are not drawn
    pub itol: f64,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            draw_bonds: false,
            bond_color: BondColor::default(),
            bond_cutoff: 1.1,
            width: 200,
            height: 200,
            download: None,
            pmin: None,
            pmax: None,
            pmap: "RdBu_r".to_string(),
            imin: None,
            imax: None,
            imap: "RdBu_r".to_string(),
            itol: 0.2,
        }
    }
}

impl ViewOptions {
    pub fn from_json_str(json: &str) -> Result<Self, PiError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, PiError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_bonds(mut self, bond_color: impl Into<BondColor>) -> Self {
        self.draw_bonds = true;
        self.bond_color = bond_color.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_download(mut self, filename: impl Into<String>) -> Self {
        self.download = Some(filename.into());
        self
    }

    pub fn with_prop_range(mut self, pmin: f64, pmax: f64) -> Self {
        self.pmin = Some(pmin);
        self.pmax = Some(pmax);
        self
    }

    pub fn with_inter_range(mut self, imin: f64, imax: f64) -> Self {
        self.imin = Some(imin);
        self.imax = Some(imax);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let options = ViewOptions::default();
        assert!(!options.draw_bonds);
        assert_eq!(options.bond_color, BondColor::Fixed("#000000".into()));
        assert_eq!(options.bond_cutoff, 1.1);
        assert_eq!((options.width, options.height), (200, 200));
        assert_eq!(options.pmap, "RdBu_r");
        assert_eq!(options.imap, "RdBu_r");
        assert_eq!(options.itol, 0.2);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options =
            ViewOptions::from_json_str(r#"{"draw_bonds": true, "bond_color": "jmol", "width": 400}"#)
                .unwrap();
        assert!(options.draw_bonds);
        assert_eq!(options.bond_color, BondColor::Jmol);
        assert_eq!(options.width, 400);
        assert_eq!(options.height, 200);
        assert_eq!(options.download, None);
    }

    #[test]
    fn bond_color_serializes_as_string() {
        let options = ViewOptions::default().with_bonds("#ff8800");
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r##""bond_color":"#ff8800""##));
        assert_eq!(ViewOptions::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn builder_helpers() {
        let options = ViewOptions::default()
            .with_size(640, 480)
            .with_download("water")
            .with_prop_range(-1.0, 1.0)
            .with_inter_range(0.0, 5.0);
        assert_eq!((options.width, options.height), (640, 480));
        assert_eq!(options.download.as_deref(), Some("water"));
        assert_eq!((options.pmin, options.pmax), (Some(-1.0), Some(1.0)));
        assert_eq!((options.imin, options.imax), (Some(0.0), Some(5.0)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"pmap": "viridis", "itol": 0.5}}"#).unwrap();
        let options = ViewOptions::from_json_file(file.path()).unwrap();
        assert_eq!(options.pmap, "viridis");
        assert_eq!(options.itol, 0.5);
    }

    #[test]
    #[should_panic(expected = "JsonError")]
    fn malformed_json() {
        ViewOptions::from_json_str(r#"{"width": "wide"}"#).unwrap();
    }
}
