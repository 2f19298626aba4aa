// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of stockton-bsp.
//
// stockton-bsp is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// stockton-bsp is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with stockton-bsp.  If not, see <http://www.gnu.org/licenses/>.

use log::{debug, warn};

use super::Q1BspFile;
use crate::cursor::ByteCursor;
use crate::traits::textures::*;
use crate::types::{ParseError, Result};

const NAME_LEN: usize = 16;

/// Try to parse the given buffer as a mip texture lump.
/// # Format
/// i32 count           Number of textures.
/// i32[count] offsets  Offset of each texture from the start of the lump.
///
/// Each texture is:
/// string[16] name     Texture name, NUL padded (not always terminated).
/// u32 width
/// u32 height
/// u32[4] offsets      Offset of each mip level from the start of this texture.
///
/// A directory entry that can't be read becomes a placeholder, and a texture whose
/// pixels can't be read has none. Neither stops the rest of the lump loading.
pub fn from_data(lump: &[u8], load_pixels: bool) -> Result<Box<[Texture]>> {
    if lump.is_empty() {
        return Ok(Box::new([]));
    }

    let mut dir = ByteCursor::new(lump);
    let count = dir.read_u32()? as usize;

    // Every offset has to be there, so this can't allocate more than the lump holds.
    if count > dir.remaining() / 4 {
        return Err(ParseError::UnexpectedEof {
            offset: dir.position(),
            needed: count.saturating_mul(4),
            len: lump.len(),
        });
    }

    let mut textures = Vec::with_capacity(count);
    for id in 0..count {
        let offset = dir.read_i32()?;

        let texture = if offset < 0 {
            debug!("Texture {} has no directory entry", id);
            Texture::placeholder()
        } else {
            match texture_from_lump(lump, offset as usize, load_pixels) {
                Ok(texture) => texture,
                Err(e) => {
                    warn!("Texture {} has a corrupt directory entry: {}", id, e);
                    Texture::placeholder()
                }
            }
        };

        textures.push(texture);
    }

    Ok(textures.into_boxed_slice())
}

/// Read the texture header at `offset`, and the full size pixels if requested.
fn texture_from_lump(lump: &[u8], offset: usize, load_pixels: bool) -> Result<Texture> {
    let mut cursor = ByteCursor::at(lump, offset)?;

    let name = cursor.read_fixed_str(NAME_LEN)?;
    let width = cursor.read_u32()?;
    let height = cursor.read_u32()?;
    let mut mip_offsets = [0; 4];
    for mip in mip_offsets.iter_mut() {
        *mip = cursor.read_u32()?;
    }

    let flags = TextureFlags::from_name(&name);
    let mut texture = Texture {
        name,
        width,
        height,
        mip_offsets,
        pixels: None,
        flags,
    };

    if load_pixels {
        match read_pixels(lump, offset, &texture) {
            Ok(pixels) => texture.pixels = Some(pixels),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(texture)
}

fn read_pixels(lump: &[u8], offset: usize, texture: &Texture) -> Result<Box<[u8]>> {
    let err = || ParseError::TextureRead {
        name: texture.name.clone(),
    };

    let start = offset
        .checked_add(texture.mip_offsets[0] as usize)
        .ok_or_else(err)?;
    let size = (texture.width as usize)
        .checked_mul(texture.height as usize)
        .ok_or_else(err)?;

    let mut cursor = ByteCursor::at(lump, start).map_err(|_| err())?;
    let pixels = cursor.read_bytes(size).map_err(|_| err())?;

    Ok(pixels.into())
}

impl HasTextures for Q1BspFile {
    type TexturesIter<'a> = std::slice::Iter<'a, Texture>;

    fn textures_iter(&self) -> Self::TexturesIter<'_> {
        self.textures.iter()
    }

    fn get_texture(&self, idx: u32) -> Option<&Texture> {
        self.textures.get(idx as usize)
    }
}
