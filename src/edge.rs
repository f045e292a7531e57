// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::ops::Index;

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A colored line drawn from atom `data[0]` towards atom `data[1]`.
///
/// Edges are directed: the renderer draws half a bond per entry, so a full
/// bond between two atoms is made of `(i, j)` and `(j, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub data: [usize; 2],
    pub color: String,
}

impl Index<usize> for Edge {
    type Output = usize;

    /// Access one of the two atom indices in the edge.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2`.
    fn index(&self, index: usize) -> &Self::Output {
        if index >= 2 {
            panic!("can not access atom n° {} in edge", index);
        }
        &self.data[index]
    }
}

impl Edge {
    /// Create a new edge from `i` to `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i == j`.
    pub fn new(i: usize, j: usize, color: impl Into<String>) -> Self {
        if i == j {
            panic!("can not have an edge between an atom and itself");
        }
        Edge {
            data: [i, j],
            color: color.into(),
        }
    }
}

/// Serialized as `[i, j, "#rrggbb"]`.
impl Serialize for Edge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.data[0])?;
        tuple.serialize_element(&self.data[1])?;
        tuple.serialize_element(&self.color)?;
        tuple.end()
    }
}
