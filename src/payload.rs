// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! The data handed to the rendering script: atoms, per-atom colors and
//! colored edges, each serialized on its own.

use log::debug;
use nalgebra::DMatrix;
use serde::Serialize;

use crate::color::{ColorMap, Norm, Palette};
use crate::edge::Edge;
use crate::element;
use crate::error::PiError;
use crate::frame::Frame;
use crate::neighbor::{natural_cutoffs, neighbor_list};
use crate::options::{BondColor, ViewOptions};

/// Optional data fields shown on top of the structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields<'a> {
    /// One scalar per atom, shown as the atom color
    pub props: Option<&'a [f64]>,
    /// Pairwise values, shown as colored half bonds
    pub inter: Option<&'a DMatrix<f64>>,
}

impl<'a> Fields<'a> {
    pub fn with_props(mut self, props: &'a [f64]) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_inter(mut self, inter: &'a DMatrix<f64>) -> Self {
        self.inter = Some(inter);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomsPayload {
    pub elems: Vec<u8>,
    pub coord: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPayload {
    pub atoms: AtomsPayload,
    /// Hex color of every atom
    pub props: Option<Vec<String>>,
    pub inter: Option<Vec<Edge>>,
    pub width: u32,
    pub height: u32,
    pub download: Option<String>,
}

impl RenderPayload {
    pub fn build(frame: &Frame, fields: Fields, options: &ViewOptions) -> Result<Self, PiError> {
        let natoms = frame.size();
        let prop_palette = Palette::from_name(&options.pmap)?;
        let inter_palette = Palette::from_name(&options.imap)?;

        let atoms = AtomsPayload {
            elems: frame.numbers(),
            coord: frame.centered_positions(),
        };

        let props = match fields.props {
            Some(values) => Some(color_props(values, natoms, options, prop_palette)?),
            None => None,
        };

        let inter = if let Some(matrix) = fields.inter {
            Some(interaction_edges(matrix, natoms, options, inter_palette)?)
        } else if options.draw_bonds {
            Some(bond_edges(frame, options)?)
        } else {
            None
        };

        debug!(
            "payload for {natoms} atoms, {} colored atoms, {} edges",
            props.as_ref().map_or(0, Vec::len),
            inter.as_ref().map_or(0, Vec::len)
        );

        Ok(RenderPayload {
            atoms,
            props,
            inter,
            width: options.width,
            height: options.height,
            download: options.download.clone(),
        })
    }

    pub fn atoms_json(&self) -> Result<String, PiError> {
        Ok(serde_json::to_string(&self.atoms)?)
    }

    /// A JSON array of colors, or `null`.
    pub fn props_json(&self) -> Result<String, PiError> {
        Ok(serde_json::to_string(&self.props)?)
    }

    /// A JSON array of `[i, j, color]` triples, or `null`.
    pub fn inter_json(&self) -> Result<String, PiError> {
        Ok(serde_json::to_string(&self.inter)?)
    }
}

fn color_props(
    values: &[f64],
    natoms: usize,
    options: &ViewOptions,
    palette: Palette,
) -> Result<Vec<String>, PiError> {
    if values.len() != natoms {
        return Err(PiError::PropsLength {
            got: values.len(),
            natoms,
        });
    }
    let norm = Norm::resolve(options.pmin, options.pmax, values.iter().copied())?;
    let cmap = ColorMap::new(norm, palette);
    Ok(values.iter().map(|&v| cmap.hex(v)).collect())
}

/// Off-diagonal entries whose magnitude is strictly above `itol` times the
/// largest off-diagonal magnitude, in row-major order.
fn interaction_edges(
    matrix: &DMatrix<f64>,
    natoms: usize,
    options: &ViewOptions,
    palette: Palette,
) -> Result<Vec<Edge>, PiError> {
    if matrix.nrows() != natoms || matrix.ncols() != natoms {
        return Err(PiError::InteractionShape {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            natoms,
        });
    }

    let mut inter = matrix.clone();
    inter.fill_diagonal(0.0);

    let norm = Norm::resolve(options.imin, options.imax, inter.iter().copied())?;
    let cmap = ColorMap::new(norm, palette);
    let threshold = options.itol * inter.amax();

    let mut edges = Vec::new();
    for i in 0..natoms {
        for j in 0..natoms {
            let value = inter[(i, j)];
            if i != j && value.abs() > threshold {
                edges.push(Edge::new(i, j, cmap.hex(value)));
            }
        }
    }
    Ok(edges)
}

fn bond_edges(frame: &Frame, options: &ViewOptions) -> Result<Vec<Edge>, PiError> {
    let cutoffs = natural_cutoffs(frame, options.bond_cutoff)?;
    neighbor_list(frame, &cutoffs)?
        .into_iter()
        .map(|pair| -> Result<Edge, PiError> {
            let color = match &options.bond_color {
                BondColor::Fixed(color) => color.clone(),
                BondColor::Jmol => element::jmol_color(frame[pair.i].number)?.to_string(),
            };
            Ok(Edge::new(pair.i, pair.j, color))
        })
        .collect()
}
