// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of stockton-bsp.
//
// rust-bsp is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// rust-bsp is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with rust-bsp.  If not, see <http://www.gnu.org/licenses/>.

//! Various types used in parsed BSP files.

use std::path::PathBuf;

use thiserror::Error;

use crate::q1::header::{Lump, HEADER_LEN};

/// RGB Colour, each channel normalised to 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// 0, 0, 0
    pub fn black() -> Rgb {
        Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        }
    }

    /// Interpret the given bytes as an RGB colour.
    pub fn from_bytes(bytes: [u8; 3]) -> Rgb {
        Rgb {
            r: f32::from(bytes[0]) / 255.0,
            g: f32::from(bytes[1]) / 255.0,
            b: f32::from(bytes[2]) / 255.0,
        }
    }

    /// Add `amount` to every channel, clamping to 0-1.
    pub fn brighten(self, amount: f32) -> Rgb {
        Rgb {
            r: (self.r + amount).max(0.0).min(1.0),
            g: (self.g + amount).max(0.0).min(1.0),
            b: (self.b + amount).max(0.0).min(1.0),
        }
    }

    /// Convert back to bytes, rounding to the nearest value.
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }

    pub(crate) fn distance_squared(&self, other: &Rgb) -> f32 {
        let (dr, dg, db) = (self.r - other.r, self.g - other.g, self.b - other.b);
        dr * dr + dg * dg + db * db
    }
}

/// An error encountered while parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Header is {len} bytes, needs at least {}", HEADER_LEN)]
    MalformedHeader { len: usize },

    #[error("Lump {lump:?} ({size} bytes at {offset}) lies outside the {file_len} byte file")]
    LumpOutOfBounds {
        lump: Lump,
        offset: u32,
        size: u32,
        file_len: usize,
    },

    #[error("Lump {lump:?} is {size} bytes, not a multiple of its {record_size} byte records")]
    InconsistentLump {
        lump: Lump,
        size: u32,
        record_size: usize,
    },

    #[error("{what} {index} out of range, only {len} available")]
    InvalidReference {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Tried to read {needed} bytes at offset {offset} of a {len} byte buffer")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Pixel data for texture {name:?} is missing or truncated")]
    TextureRead { name: String },

    #[error("Palette is {0} bytes, needs 768")]
    PaletteRead(usize),

    #[error("Couldn't read palette from {path:?}")]
    PaletteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Standard result type.
pub type Result<T> = std::result::Result<T, ParseError>;
