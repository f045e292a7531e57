// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Colors, value normalization and named palettes.
//!
//! A [`Palette`] is a gradient through evenly spaced color stops, sampled
//! through a 256-entry lookup table. Appending `_r` to any registered name
//! gives the reversed palette.

use std::fmt;

use log::{debug, warn};
use phf::phf_map;

use crate::error::PiError;

/// Number of entries in the palette lookup table.
const LUT_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn from_rgb(rgb: u32) -> Self {
        let channel = |shift: u32| f64::from((rgb >> shift) & 0xff) / 255.0;
        Color {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Lowercase `#rrggbb`, each channel rounded to the nearest of 256 levels.
    pub fn to_hex(&self) -> String {
        let level = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            level(self.r),
            level(self.g),
            level(self.b)
        )
    }

    fn lerp(&self, other: &Color, t: f64) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

static PALETTES: phf::Map<&'static str, &'static [u32]> = phf_map! {
    "RdBu" => &[
        0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7,
        0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061,
    ],
    "PiYG" => &[
        0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7,
        0xe6f5d0, 0xb8e186, 0x7fbc41, 0x4d9221, 0x276419,
    ],
    "PRGn" => &[
        0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7,
        0xd9f0d3, 0xa6dba0, 0x5aae61, 0x1b7837, 0x00441b,
    ],
    "bwr" => &[0x0000ff, 0xffffff, 0xff0000],
    "seismic" => &[0x00004c, 0x0000ff, 0xffffff, 0xff0000, 0x7f0000],
    "coolwarm" => &[0x3b4cc0, 0x7b9ff9, 0xdddddd, 0xf49a7b, 0xb40426],
    "viridis" => &[
        0x440154, 0x472d7b, 0x3b528b, 0x2c728e, 0x21918c, 0x28ae80,
        0x5ec962, 0xaddc30, 0xfde725,
    ],
    "Greys" => &[
        0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373,
        0x525252, 0x252525, 0x000000,
    ],
    "Reds" => &[
        0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c,
        0xcb181d, 0xa50f15, 0x67000d,
    ],
    "Blues" => &[
        0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6,
        0x2171b5, 0x08519c, 0x08306b,
    ],
};

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    stops: &'static [u32],
    reversed: bool,
}

impl Palette {
    /// Look up a registered palette, optionally suffixed with `_r`.
    pub fn from_name(name: &str) -> Result<Self, PiError> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let stops = PALETTES
            .get(base)
            .copied()
            .ok_or_else(|| PiError::UnknownPalette(name.to_string()))?;
        Ok(Palette {
            name: name.to_string(),
            stops,
            reversed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered base names, without the `_r` variants.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PALETTES.keys().copied()
    }

    /// Color at `x` in `[0, 1]`. Values outside the range take the end
    /// colors; `NaN` is black.
    pub fn sample(&self, x: f64) -> Color {
        if x.is_nan() {
            return Color::BLACK;
        }
        let index = if x < 0.0 {
            0
        } else {
            ((x * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1)
        };
        let mut t = index as f64 / (LUT_SIZE - 1) as f64;
        if self.reversed {
            t = 1.0 - t;
        }

        let segments = self.stops.len() - 1;
        let position = t * segments as f64;
        let lower = (position.floor() as usize).min(segments - 1);
        let from = Color::from_rgb(self.stops[lower]);
        let to = Color::from_rgb(self.stops[lower + 1]);
        from.lerp(&to, position - lower as f64)
    }
}

/// Linear map from `[vmin, vmax]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Norm {
    pub vmin: f64,
    pub vmax: f64,
}

impl Norm {
    pub fn new(vmin: f64, vmax: f64) -> Result<Self, PiError> {
        if !vmin.is_finite() || !vmax.is_finite() || vmin > vmax {
            return Err(PiError::InvalidRange { vmin, vmax });
        }
        Ok(Norm { vmin, vmax })
    }

    /// `[-max|v|, max|v|]` over `values`.
    pub fn symmetric(values: impl IntoIterator<Item = f64>) -> Self {
        let extent = values.into_iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        Norm {
            vmin: -extent,
            vmax: extent,
        }
    }

    /// Explicit bounds when both are given, otherwise the symmetric range of
    /// `values`. A single bound on its own is ignored.
    pub fn resolve(
        vmin: Option<f64>,
        vmax: Option<f64>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, PiError> {
        match (vmin, vmax) {
            (Some(vmin), Some(vmax)) => Norm::new(vmin, vmax),
            (None, None) => Ok(Norm::symmetric(values)),
            (vmin, vmax) => {
                let norm = Norm::symmetric(values);
                debug!(
                    "ignoring lone bound (vmin = {vmin:?}, vmax = {vmax:?}), using [{}, {}]",
                    norm.vmin, norm.vmax
                );
                Ok(norm)
            }
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.vmin == self.vmax
    }

    /// Position of `value` in the range. A zero-width range maps everything
    /// to the midpoint.
    pub fn apply(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        (value - self.vmin) / (self.vmax - self.vmin)
    }
}

/// A normalization range paired with a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    pub norm: Norm,
    pub palette: Palette,
}

impl ColorMap {
    pub fn new(norm: Norm, palette: Palette) -> Self {
        if norm.is_degenerate() {
            warn!(
                "normalization range for palette `{}` has zero width ({}), using its midpoint color",
                palette.name(),
                norm.vmin
            );
        }
        ColorMap { norm, palette }
    }

    pub fn hex(&self, value: f64) -> String {
        self.palette.sample(self.norm.apply(value)).to_hex()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_rgb(0x67001f).to_hex(), "#67001f");
        assert_eq!(Color::from_rgb(0xffffff).to_string(), "#ffffff");
        let over = Color {
            r: 1.5,
            g: -0.2,
            b: 0.5,
        };
        assert_eq!(over.to_hex(), "#ff0080");
    }

    #[test]
    fn palette_end_points() {
        let rdbu = Palette::from_name("RdBu").unwrap();
        assert_eq!(rdbu.sample(0.0).to_hex(), "#67001f");
        assert_eq!(rdbu.sample(1.0).to_hex(), "#053061");

        let rdbu_r = Palette::from_name("RdBu_r").unwrap();
        assert_eq!(rdbu_r.name(), "RdBu_r");
        assert_eq!(rdbu_r.sample(0.0).to_hex(), "#053061");
        assert_eq!(rdbu_r.sample(1.0).to_hex(), "#67001f");
    }

    #[test]
    fn out_of_range_values_clip() {
        let bwr = Palette::from_name("bwr").unwrap();
        assert_eq!(bwr.sample(-3.0), bwr.sample(0.0));
        assert_eq!(bwr.sample(7.0), bwr.sample(1.0));
        assert_eq!(bwr.sample(f64::NAN), Color::BLACK);
    }

    #[test]
    fn reversed_palette_mirrors_lookup_table() {
        let viridis = Palette::from_name("viridis").unwrap();
        let viridis_r = Palette::from_name("viridis_r").unwrap();
        for k in 0..LUT_SIZE {
            let x = (k as f64 + 0.5) / LUT_SIZE as f64;
            let mirrored = (LUT_SIZE - 1 - k) as f64 / LUT_SIZE as f64 + 0.001;
            assert_eq!(viridis.sample(x).to_hex(), viridis_r.sample(mirrored).to_hex());
        }
    }

    #[test]
    fn middle_of_three_stops() {
        let bwr = Palette::from_name("bwr").unwrap();
        // index 128 of 255 is just past the white stop
        let mid = bwr.sample(0.5);
        assert_approx_eq!(mid.r, 1.0);
        assert!(mid.b < 1.0 && mid.b > 0.98);
    }

    #[test]
    fn every_registered_palette_resolves() {
        for name in Palette::names() {
            assert!(Palette::from_name(name).is_ok());
            assert!(Palette::from_name(&format!("{name}_r")).is_ok());
        }
    }

    #[test]
    #[should_panic(expected = "UnknownPalette(\"jet\")")]
    fn unknown_palette() {
        Palette::from_name("jet").unwrap();
    }

    #[test]
    fn symmetric_norm() {
        let norm = Norm::symmetric([0.5, -2.0, 1.0]);
        assert_eq!(norm.vmin, -2.0);
        assert_eq!(norm.vmax, 2.0);
        assert_approx_eq!(norm.apply(-2.0), 0.0);
        assert_approx_eq!(norm.apply(0.0), 0.5);
        assert_approx_eq!(norm.apply(1.0), 0.75);
    }

    #[test]
    fn resolve_needs_both_bounds() {
        let values = [3.0, -1.0];
        let norm = Norm::resolve(Some(0.0), None, values).unwrap();
        assert_eq!(norm, Norm::symmetric(values));
        let norm = Norm::resolve(None, Some(1.0), values).unwrap();
        assert_eq!(norm, Norm::new(-3.0, 3.0).unwrap());
        let norm = Norm::resolve(Some(0.0), Some(10.0), values).unwrap();
        assert_eq!(norm, Norm::new(0.0, 10.0).unwrap());
    }

    #[test]
    #[should_panic(expected = "InvalidRange")]
    fn inverted_range() {
        Norm::new(1.0, -1.0).unwrap();
    }

    #[test]
    fn degenerate_range_uses_midpoint() {
        let norm = Norm::symmetric([0.0, 0.0, 0.0]);
        assert!(norm.is_degenerate());
        assert_eq!(norm.apply(0.0), 0.5);

        let cmap = ColorMap::new(norm, Palette::from_name("RdBu_r").unwrap());
        assert_eq!(cmap.hex(0.0), cmap.palette.sample(0.5).to_hex());
    }

    #[test]
    fn color_map_hex() {
        let cmap = ColorMap::new(
            Norm::new(-2.0, 2.0).unwrap(),
            Palette::from_name("RdBu_r").unwrap(),
        );
        assert_eq!(cmap.hex(2.0), "#67001f");
        assert_eq!(cmap.hex(-2.0), "#053061");
    }
}
