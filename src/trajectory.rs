// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use crate::error::PiError;
use crate::formats::xyz::XYZFormat;
use crate::frame::Frame;

/// Frames of an XYZ or extended-XYZ file.
///
/// The file is scanned once on open to record where each frame starts.
pub struct Trajectory {
    pub size: usize,

    format: XYZFormat,
    reader: BufReader<File>,
    frame_positions: Vec<u64>,
    next: usize,
}

impl Trajectory {
    pub fn open(path: &Path) -> Result<Self, PiError> {
        let format = XYZFormat;
        let mut reader = BufReader::new(File::open(path)?);
        let frame_positions = Trajectory::scan_all(&mut reader, &format)?;
        let size = frame_positions.len() - 1;
        debug!("found {size} frames in {}", path.display());

        Ok(Trajectory {
            size,
            format,
            reader,
            frame_positions,
            next: 0,
        })
    }

    /// Read the next frame, or `None` once every frame has been read.
    pub fn read(&mut self) -> Result<Option<Frame>, PiError> {
        if self.next >= self.size {
            return Ok(None);
        }
        let frame = self.read_at(self.next)?;
        Ok(Some(frame))
    }

    /// Read frame `index`. Following calls to `read` continue after it.
    pub fn read_at(&mut self, index: usize) -> Result<Frame, PiError> {
        if index >= self.size {
            return Err(PiError::GenericError(format!(
                "frame index {index} is out of bounds for a trajectory with {} frames",
                self.size
            )));
        }
        self.reader
            .seek(SeekFrom::Start(self.frame_positions[index]))?;
        let frame = self.format.read_next(&mut self.reader)?;
        self.next = index + 1;
        Ok(frame)
    }

    fn scan_all(reader: &mut BufReader<File>, format: &XYZFormat) -> Result<Vec<u64>, PiError> {
        let mut frame_positions = vec![0];
        while let Some(pos) = format.forward(reader)? {
            frame_positions.push(pos)
        }
        reader.rewind()?;
        Ok(frame_positions)
    }
}
