// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::io::{BufRead, Seek};
use std::str::SplitWhitespace;

use crate::atom::Atom;
use crate::error::PiError;
use crate::extendedxyzparser::ExtendedXyzParser;
use crate::frame::Frame;
use crate::property::{Property, PropertyKind};

pub struct XYZFormat;

/// Extra per-atom columns, in file order.
type PropertiesList = Vec<(String, PropertyKind)>;

impl XYZFormat {
    fn read_atomic_properties(
        properties: &PropertiesList,
        tokens: &mut SplitWhitespace,
        atom: &mut Atom,
    ) -> Result<(), PiError> {
        for (name, kind) in properties {
            let value = match kind {
                PropertyKind::Vector3D => {
                    let x = tokens.next().ok_or(PiError::MissingToken)?;
                    let y = tokens.next().ok_or(PiError::MissingToken)?;
                    let z = tokens.next().ok_or(PiError::MissingToken)?;
                    format!("{x} {y} {z}")
                }
                _ => tokens.next().ok_or(PiError::MissingToken)?.to_string(),
            };
            let property = Property::parse_value(&value, *kind)?;
            atom.properties.insert(name.clone(), property);
        }
        Ok(())
    }

    fn parse_property_list(line: &str) -> Result<PropertiesList, PiError> {
        const PREFIX: &str = "species:S:1:pos:R:3";

        let rest = line.strip_prefix(PREFIX).ok_or_else(|| {
            PiError::GenericError(
                "Invalid property list format: missing expected prefix".to_string(),
            )
        })?;
        let rest = rest.strip_prefix(':').unwrap_or(rest);
        if rest.is_empty() {
            return Ok(PropertiesList::new());
        }

        let fields: Vec<&str> = rest.split(':').collect();
        if fields.len() % 3 != 0 {
            return Err(PiError::GenericError(
                "Invalid property list format: property definitions must be in groups of 3 (name:type:count)".to_string(),
            ));
        }

        let mut properties = PropertiesList::new();
        for chunk in fields.chunks_exact(3) {
            let name = chunk[0];
            let kind = match chunk[1] {
                "R" | "I" => PropertyKind::Double,
                "S" => PropertyKind::String,
                "L" => PropertyKind::Bool,
                unknown => {
                    return Err(PiError::GenericError(format!(
                        "Unknown property type: {unknown}"
                    )));
                }
            };

            let count = chunk[2].parse::<usize>().map_err(|e| {
                PiError::GenericError(format!("Invalid property count '{}': {e}", chunk[2]))
            })?;

            match (count, kind) {
                (0, _) => {
                    return Err(PiError::GenericError(format!(
                        "Invalid count of 0 for property '{name}'"
                    )));
                }
                (1, kind) => properties.push((name.to_string(), kind)),
                (3, PropertyKind::Double) => {
                    properties.push((name.to_string(), PropertyKind::Vector3D))
                }
                (n, kind) => {
                    for i in 0..n {
                        properties.push((format!("{name}_{i}"), kind));
                    }
                }
            }
        }

        Ok(properties)
    }

    /// Frame-level values go to `frame.properties`; the returned list
    /// describes the extra atom columns.
    fn read_extended_comment_line(line: &str, frame: &mut Frame) -> Result<PropertiesList, PiError> {
        if !(line.contains("Properties=") || line.contains("Lattice=")) {
            return Ok(PropertiesList::new());
        }

        let properties = ExtendedXyzParser::new(line).parse();
        for (k, v) in properties.iter().filter(|(k, _)| k.as_str() != "Properties") {
            frame.properties.insert(k.clone(), Property::guess(v));
        }

        match properties.get("Properties") {
            Some(prop_string) => Self::parse_property_list(prop_string),
            None => Ok(PropertiesList::new()),
        }
    }

    pub fn read_next<R: BufRead>(&self, reader: &mut R) -> Result<Frame, PiError> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let n_atoms = line.trim().parse::<usize>()?;

        line.clear();
        reader.read_line(&mut line)?;
        let mut frame = Frame::new();
        let properties = XYZFormat::read_extended_comment_line(&line, &mut frame)?;

        for step in 0..n_atoms {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(PiError::UnexpectedEof {
                    format: "XYZ".to_string(),
                    step,
                    expected: n_atoms,
                    got: step,
                });
            }
            let mut tokens = line.split_whitespace();

            let species = tokens.next().ok_or(PiError::MissingToken)?;
            let x: f64 = tokens.next().ok_or(PiError::MissingToken)?.parse()?;
            let y: f64 = tokens.next().ok_or(PiError::MissingToken)?.parse()?;
            let z: f64 = tokens.next().ok_or(PiError::MissingToken)?.parse()?;

            let mut atom = Atom::from_species(species, [x, y, z])?;
            XYZFormat::read_atomic_properties(&properties, &mut tokens, &mut atom)?;

            frame.add_atom(atom);
        }

        Ok(frame)
    }

    /// Skip one frame, returning the offset of the next one, or `None` when
    /// there is nothing left but blank lines.
    pub fn forward<R: BufRead + Seek>(&self, reader: &mut R) -> Result<Option<u64>, PiError> {
        let mut line = String::new();

        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 || line.trim().is_empty() {
            return Ok(None);
        }
        let n_atoms: usize = line.trim().parse()?;

        // comment line plus one line per atom
        for i in 0..=n_atoms {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(PiError::UnexpectedEof {
                    format: "XYZ".to_string(),
                    step: i,
                    expected: n_atoms + 1,
                    got: i,
                });
            }
        }
        Ok(Some(reader.stream_position()?))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};
    use std::path::Path;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::trajectory::Trajectory;

    #[test]
    fn plain_xyz() {
        let data = "3\nwater\nO 0.0 0.0 0.1173\nH 0.0 0.7572 -0.4692\nH 0.0 -0.7572 -0.4692\n";
        let mut reader = BufReader::new(Cursor::new(data));
        let frame = XYZFormat.read_next(&mut reader).unwrap();
        assert_eq!(frame.size(), 3);
        assert_eq!(frame.numbers(), vec![8, 1, 1]);
        assert_approx_eq!(frame[1].position[1], 0.7572);
        assert!(frame.properties.is_empty());
    }

    #[test]
    fn numeric_species() {
        let data = "1\n\n6 1.0 2.0 3.0\n";
        let frame = XYZFormat
            .read_next(&mut BufReader::new(Cursor::new(data)))
            .unwrap();
        assert_eq!(frame[0].number, 6);
    }

    #[test]
    fn extended_columns() {
        let path = Path::new("./src/tests-data/xyz/extended.xyz");
        let mut trajectory = Trajectory::open(path).unwrap();
        assert_eq!(trajectory.size, 2);

        let frame = trajectory.read().unwrap().unwrap();
        assert_eq!(frame.size(), 3);
        assert_eq!(frame.properties["energy"].expect_double(), -76.4);
        assert_eq!(frame.properties["name"].expect_string(), "water");
        assert!(frame.properties["converged"].expect_bool());
        assert_eq!(
            frame.properties["Lattice"].expect_matrix3x3(),
            [10.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0]
        );
        assert_eq!(
            frame.atom_property("charge").unwrap(),
            vec![-0.834, 0.417, 0.417]
        );
        assert_eq!(frame[0].properties["forces"].expect_vector3d(), [0.0, 0.0, 0.5]);
        assert_eq!(frame[2].properties["tag"].expect_string(), "h2");
        assert_eq!(frame[1].properties["dipole_0"].expect_double(), 0.1);
        assert_eq!(frame[1].properties["dipole_1"].expect_double(), 0.2);

        let frame = trajectory.read().unwrap().unwrap();
        assert_eq!(frame.size(), 2);
        assert!(frame[0].properties["fixed"].expect_bool());
        assert!(!frame[1].properties["fixed"].expect_bool());
    }

    #[test]
    fn property_list_widths() {
        let list = XYZFormat::parse_property_list("species:S:1:pos:R:3:q:R:1:v:R:3:m:I:2").unwrap();
        assert_eq!(
            list,
            vec![
                ("q".to_string(), PropertyKind::Double),
                ("v".to_string(), PropertyKind::Vector3D),
                ("m_0".to_string(), PropertyKind::Double),
                ("m_1".to_string(), PropertyKind::Double),
            ]
        );
        assert!(XYZFormat::parse_property_list("species:S:1:pos:R:3").unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "Unknown property type: Z")]
    fn unknown_column_type() {
        XYZFormat::parse_property_list("species:S:1:pos:R:3:q:Z:1").unwrap();
    }

    #[test]
    #[should_panic(expected = "Invalid property list format: missing expected prefix")]
    fn missing_prefix() {
        XYZFormat::parse_property_list("pos:R:3:species:S:1").unwrap();
    }

    #[test]
    #[should_panic(expected = "MissingToken")]
    fn missing_column() {
        let data = "1\nProperties=species:S:1:pos:R:3:q:R:1\nH 0 0 0\n";
        XYZFormat
            .read_next(&mut BufReader::new(Cursor::new(data)))
            .unwrap();
    }

    #[test]
    #[should_panic(expected = "UnexpectedEof")]
    fn truncated_frame() {
        let data = "3\ncomment\nH 0 0 0\n";
        XYZFormat
            .read_next(&mut BufReader::new(Cursor::new(data)))
            .unwrap();
    }

    #[test]
    #[should_panic(expected = "UnknownElement(\"Qq\")")]
    fn unknown_species() {
        let data = "1\n\nQq 0 0 0\n";
        XYZFormat
            .read_next(&mut BufReader::new(Cursor::new(data)))
            .unwrap();
    }
}
