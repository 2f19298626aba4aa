// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
// more details.

// You should have received a copy of the GNU General Public License along
// with this program.  If not, see <http://www.gnu.org/licenses/>.

//! The 256 colour palette that embedded textures index into.

use std::fs;
use std::path::Path;

use log::debug;

use crate::types::{ParseError, Result, Rgb};

/// Number of bytes in a palette file (256 RGB triples).
pub const PALETTE_SIZE: usize = 256 * 3;

/// Palette indices from here up are drawn at full brightness.
pub const FULLBRIGHT_INDEX: u8 = 224;

/// Index used for see-through pixels in `{` textures.
pub const TRANSPARENT_INDEX: u8 = 255;

/// A palette with normalised colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Box<[Rgb]>,
}

impl Palette {
    /// Parse a palette from the contents of a `palette.lmp`.
    /// Anything after the first 768 bytes is ignored.
    pub fn from_bytes(data: &[u8], brightness_adjust: f32) -> Result<Palette> {
        if data.len() < PALETTE_SIZE {
            return Err(ParseError::PaletteRead(data.len()));
        }

        let colors = data[..PALETTE_SIZE]
            .chunks_exact(3)
            .map(|c| {
                let color = Rgb::from_bytes([c[0], c[1], c[2]]);
                if brightness_adjust != 0.0 {
                    color.brighten(brightness_adjust)
                } else {
                    color
                }
            })
            .collect();

        Ok(Palette { colors })
    }

    /// Read a palette from disk.
    pub fn load(path: &Path, brightness_adjust: f32) -> Result<Palette> {
        debug!("Loading palette from {:?}", path);
        let data = fs::read(path).map_err(|source| ParseError::PaletteIo {
            path: path.to_owned(),
            source,
        })?;

        Palette::from_bytes(&data, brightness_adjust)
    }

    pub fn color(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    /// The colour at `index` as RGBA bytes with the given alpha.
    pub fn to_rgba8(&self, index: u8, alpha: u8) -> [u8; 4] {
        let [r, g, b] = self.color(index).to_bytes();
        [r, g, b, alpha]
    }

    /// Find the palette entry closest to `color`. Ties go to the lowest index.
    pub fn nearest_index(&self, color: Rgb) -> u8 {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, candidate) in self.colors.iter().enumerate() {
            let dist = candidate.distance_squared(&color);
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }

        best as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Every entry distinct: (i, 255 - i, i / 2)
    fn gradient() -> Vec<u8> {
        let mut bytes = Vec::with_capacity(PALETTE_SIZE);
        for i in 0..=255u8 {
            bytes.extend_from_slice(&[i, 255 - i, i / 2]);
        }
        bytes
    }

    #[test]
    fn normalises_channels() {
        let palette = Palette::from_bytes(&gradient(), 0.0).unwrap();
        assert_eq!(palette.color(0), Rgb::from_bytes([0, 255, 0]));
        assert_eq!(palette.color(255).r, 1.0);
        assert_eq!(palette.color(255).g, 0.0);
    }

    #[test]
    fn brightness_is_clamped() {
        let palette = Palette::from_bytes(&gradient(), 0.5).unwrap();
        let c = palette.color(255);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.5);

        let palette = Palette::from_bytes(&gradient(), -1.0).unwrap();
        assert_eq!(palette.color(200), Rgb::black());
    }

    #[test]
    fn short_palette_fails() {
        match Palette::from_bytes(&[0; 767], 0.0) {
            Err(ParseError::PaletteRead(767)) => {}
            other => panic!("expected palette error, got {:?}", other),
        }
    }

    #[test]
    fn nearest_index_recovers_every_entry() {
        let palette = Palette::from_bytes(&gradient(), 0.0).unwrap();
        for i in 0..=255u8 {
            assert_eq!(palette.nearest_index(palette.color(i)), i);
        }
    }

    #[test]
    fn rgba_bytes_round_trip() {
        let palette = Palette::from_bytes(&gradient(), 0.0).unwrap();
        assert_eq!(palette.to_rgba8(10, 255), [10, 245, 5, 255]);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&gradient()).unwrap();

        let palette = Palette::load(file.path(), 0.0).unwrap();
        assert_eq!(palette.color(1), Rgb::from_bytes([1, 254, 0]));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.lmp");
        match Palette::load(&path, 0.0) {
            Err(ParseError::PaletteIo { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
