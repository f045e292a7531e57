// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PiError {
    #[error("interaction matrix has shape {rows}x{cols}, expected {natoms}x{natoms}")]
    InteractionShape {
        rows: usize,
        cols: usize,
        natoms: usize,
    },
    #[error("got {got} property values for {natoms} atoms")]
    PropsLength { got: usize, natoms: usize },
    #[error("got {got} cutoffs for {natoms} atoms")]
    CutoffsLength { got: usize, natoms: usize },
    #[error("unknown palette: `{0}`")]
    UnknownPalette(String),
    #[error("unknown element: `{0}`")]
    UnknownElement(String),
    #[error("invalid normalization range: vmin = {vmin}, vmax = {vmax}")]
    InvalidRange { vmin: f64, vmax: f64 },
    #[error("could not read rendering script {path:?}: {source}")]
    ScriptNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("missing per-atom property `{0}`")]
    MissingProperty(String),
    #[error("{format} format: not enough lines at step {step} (expected {expected}, got {got})")]
    UnexpectedEof {
        format: String,
        step: usize,
        expected: usize,
        got: usize,
    },
    #[error("Missing token")]
    MissingToken,
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse float: {0}")]
    ParseFloatError(#[from] std::num::ParseFloatError),
    #[error("Failed to parse integer: {0}")]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error("generic error: {0}")]
    GenericError(String),
}
