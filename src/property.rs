// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use nalgebra::Matrix3;

use crate::error::PiError;

const EPSILON: f64 = 1e-12;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PropertyKind {
    Bool,
    Double,
    String,
    Vector3D,
    Matrix3x3,
    VectorXD,
}

#[derive(Debug, Clone)]
pub enum Property {
    Bool(bool),
    Double(f64),
    String(String),
    Vector3D([f64; 3]),
    Matrix3x3(Matrix3<f64>),
    VectorXD(Vec<f64>),
}

/// Returns `true` if `a` and `b` are both finite and within `epsilon` of each other.
fn almost_eq(a: f64, b: f64, epsilon: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= epsilon
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Property::Bool(a), Property::Bool(b)) => a == b,
            (Property::Double(a), Property::Double(b)) => almost_eq(*a, *b, EPSILON),
            (Property::String(a), Property::String(b)) => a == b,
            (Property::Vector3D(a), Property::Vector3D(b)) => a
                .iter()
                .zip(b.iter())
                .all(|(x, y)| almost_eq(*x, *y, EPSILON)),
            (Property::Matrix3x3(a), Property::Matrix3x3(b)) => a
                .iter()
                .zip(b.iter())
                .all(|(x, y)| almost_eq(*x, *y, EPSILON)),
            (Property::VectorXD(a), Property::VectorXD(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(x, y)| almost_eq(*x, *y, EPSILON))
            }
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Properties(HashMap<String, Property>);

impl Properties {
    pub fn new() -> Self {
        Properties(HashMap::new())
    }
}

impl Deref for Properties {
    type Target = HashMap<String, Property>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Properties {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a Property);
    type IntoIter = <&'a HashMap<String, Property> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Property {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::Bool(_) => PropertyKind::Bool,
            Property::Double(_) => PropertyKind::Double,
            Property::String(_) => PropertyKind::String,
            Property::Vector3D(_) => PropertyKind::Vector3D,
            Property::Matrix3x3(_) => PropertyKind::Matrix3x3,
            Property::VectorXD(_) => PropertyKind::VectorXD,
        }
    }

    /// The value as a number, if it is a `Double`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Property::Double(x) => Some(*x),
            _ => None,
        }
    }

    pub fn expect_bool(&self) -> bool {
        match self {
            Property::Bool(b) => *b,
            other => panic!("expected Bool, found {other:?}"),
        }
    }

    pub fn expect_double(&self) -> f64 {
        self.as_double()
            .unwrap_or_else(|| panic!("expected Double, found {self:?}"))
    }

    pub fn expect_string(&self) -> &str {
        match self {
            Property::String(s) => s,
            other => panic!("expected String, found {other:?}"),
        }
    }

    pub fn expect_vector3d(&self) -> [f64; 3] {
        match self {
            Property::Vector3D(v) => *v,
            other => panic!("expected Vector3D, found {other:?}"),
        }
    }

    /// Entries in column-major order.
    pub fn expect_matrix3x3(&self) -> [f64; 9] {
        match self {
            Property::Matrix3x3(m) => std::array::from_fn(|k| m[k]),
            other => panic!("expected Matrix3x3, found {other:?}"),
        }
    }

    /// Parse `value` as a property of the given `kind`.
    pub fn parse_value(value: &str, kind: PropertyKind) -> Result<Property, PiError> {
        match kind {
            PropertyKind::String => Ok(Property::String(value.to_string())),
            PropertyKind::Bool => match value.to_lowercase().as_str() {
                "t" | "true" => Ok(Property::Bool(true)),
                "f" | "false" => Ok(Property::Bool(false)),
                _ => Err(PiError::GenericError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            PropertyKind::Double => value
                .parse::<f64>()
                .map(Property::Double)
                .map_err(|e| PiError::GenericError(format!("Failed to parse number: {e}"))),
            PropertyKind::Vector3D => {
                let nums = parse_floats(value)?;
                if nums.len() != 3 {
                    return Err(PiError::GenericError(format!(
                        "Vector3D requires exactly 3 components, got {}",
                        nums.len()
                    )));
                }
                Ok(Property::Vector3D([nums[0], nums[1], nums[2]]))
            }
            PropertyKind::Matrix3x3 => {
                let nums = parse_floats(value)?;
                if nums.len() != 9 {
                    return Err(PiError::GenericError(format!(
                        "Matrix3x3 requires exactly 9 components, got {}",
                        nums.len()
                    )));
                }
                Ok(Property::Matrix3x3(Matrix3::from_iterator(nums)))
            }
            PropertyKind::VectorXD => parse_floats(value).map(Property::VectorXD),
        }
    }

    /// Type a frame-level value by its shape: booleans first, then numeric
    /// arrays of 1, 3, 9 or any other width, falling back to a string.
    pub fn guess(value: &str) -> Property {
        let lowercased = value.to_lowercase();
        if ["t", "true", "f", "false"].contains(&lowercased.as_str()) {
            return Property::Bool(lowercased.starts_with('t'));
        }

        let kind = match value.split_whitespace().count() {
            0 => return Property::String(value.to_string()),
            1 => PropertyKind::Double,
            3 => PropertyKind::Vector3D,
            9 => PropertyKind::Matrix3x3,
            _ => PropertyKind::VectorXD,
        };
        Self::parse_value(value, kind).unwrap_or_else(|_| Property::String(value.to_string()))
    }
}

fn parse_floats(value: &str) -> Result<Vec<f64>, PiError> {
    value
        .split_whitespace()
        .map(|part| {
            part.parse::<f64>()
                .map_err(|e| PiError::GenericError(format!("Failed to parse number: {e}")))
        })
        .collect()
}
