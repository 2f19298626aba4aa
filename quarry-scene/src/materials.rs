/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */


//! Decoding embedded textures into images.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use log::{debug, warn};
use quarry_levels::palette::{Palette, FULLBRIGHT_INDEX, TRANSPARENT_INDEX};
use quarry_levels::traits::textures::{Texture, TextureFlags};
use quarry_levels::traits::HasTextures;

const OPAQUE: u8 = 255;
const CLEAR: u8 = 0;

/// A texture decoded to true colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub width: u32,
    pub height: u32,

    /// Lower-left origin: row 0 is the bottom row of the texture.
    /// `None` if the file had no pixels for this texture.
    pub image: Option<RgbaImage>,

    /// White where the texture is drawn at full brightness, same orientation as `image`.
    pub emission_mask: Option<RgbaImage>,

    pub is_emissive: bool,
    pub uses_alpha: bool,
}

/// Material indices by texture name.
pub type MaterialIndex = HashMap<String, usize>;

impl Material {
    /// Decode `texture` using `palette`.
    pub fn decode(texture: &Texture, palette: &Palette) -> Material {
        let flags = texture.flags;
        let mut material = Material {
            name: texture.name.clone(),
            width: texture.width,
            height: texture.height,
            image: None,
            emission_mask: None,
            is_emissive: false,
            uses_alpha: false,
        };

        let (width, height) = (texture.width, texture.height);
        let area = width as u64 * height as u64;
        let pixels = match &texture.pixels {
            // Nothing to draw
            Some(_) if area == 0 => return material,
            Some(p) if p.len() as u64 == area => p,
            Some(_) => {
                warn!("Texture {:?} has the wrong number of pixels", texture.name);
                return material;
            }
            None => return material,
        };

        // Liquids and sky are lit anyway, and helper textures are never drawn.
        let masked = !flags.is_emissive() && !flags.contains(TextureFlags::IGNORED);
        let transparent = flags.contains(TextureFlags::TRANSPARENT);

        let mut image = RgbaImage::new(width, height);
        let mut fullbright = Vec::new();

        for (y, row) in pixels.chunks_exact(width as usize).enumerate() {
            // Flip so the last row of data is row 0.
            let out_y = height - 1 - y as u32;
            for (x, &index) in row.iter().enumerate() {
                let mut alpha = OPAQUE;
                if masked {
                    if transparent && index == TRANSPARENT_INDEX {
                        alpha = CLEAR;
                    } else if index >= FULLBRIGHT_INDEX {
                        fullbright.push((x as u32, out_y));
                    }
                }

                image.put_pixel(x as u32, out_y, Rgba(palette.to_rgba8(index, alpha)));
            }
        }

        material.image = Some(image);
        material.uses_alpha = transparent;
        material.is_emissive = flags.is_emissive() || !fullbright.is_empty();

        if !fullbright.is_empty() && fullbright.len() < pixels.len() {
            material.emission_mask = Some(emission_mask(width, height, &fullbright));
        }

        material
    }
}

fn emission_mask(width: u32, height: u32, lit: &[(u32, u32)]) -> RgbaImage {
    let mut mask = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, CLEAR]));
    for &(x, y) in lit {
        mask.put_pixel(x, y, Rgba([255, 255, 255, OPAQUE]));
    }
    mask
}

/// Decode every texture in the file into a material, skipping helper textures if `remove_hidden` is set.
/// Textures sharing a name share the first one's material.
pub fn build_materials<L: HasTextures>(
    file: &L,
    palette: &Palette,
    remove_hidden: bool,
) -> (Vec<Material>, MaterialIndex) {
    let mut materials = Vec::new();
    let mut index = MaterialIndex::new();

    for texture in file.textures_iter() {
        if remove_hidden && texture.flags.contains(TextureFlags::IGNORED) {
            debug!("Not creating material for {:?}", texture.name);
            continue;
        }
        if index.contains_key(&texture.name) {
            continue;
        }

        if texture.pixels.is_none() {
            warn!("Texture {:?} has no pixels", texture.name);
        }

        index.insert(texture.name.clone(), materials.len());
        materials.push(Material::decode(texture, palette));
    }

    (materials, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entry i is (i, i, i), so output bytes equal the palette index.
    fn grey_palette() -> Palette {
        let mut bytes = Vec::with_capacity(768);
        for i in 0..=255u8 {
            bytes.extend_from_slice(&[i, i, i]);
        }
        Palette::from_bytes(&bytes, 0.0).unwrap()
    }

    fn texture(name: &str, width: u32, height: u32, pixels: &[u8]) -> Texture {
        Texture {
            name: name.to_string(),
            width,
            height,
            mip_offsets: [40, 0, 0, 0],
            pixels: Some(pixels.into()),
            flags: TextureFlags::from_name(name),
        }
    }

    #[test]
    fn rows_are_flipped() {
        let mat = Material::decode(&texture("wall", 2, 2, &[1, 2, 3, 4]), &grey_palette());
        let image = mat.image.unwrap();

        assert_eq!(image.get_pixel(0, 0).0, [3, 3, 3, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [4, 4, 4, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [1, 1, 1, 255]);
        assert!(!mat.is_emissive);
        assert!(!mat.uses_alpha);
        assert_eq!(mat.emission_mask, None);
    }

    #[test]
    fn transparent_index_is_clear() {
        let mat = Material::decode(&texture("{grate", 2, 1, &[255, 10]), &grey_palette());
        let image = mat.image.unwrap();

        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(image.get_pixel(1, 0).0[3], 255);
        assert!(mat.uses_alpha);
        // 255 is transparent here, not fullbright
        assert!(!mat.is_emissive);
    }

    #[test]
    fn fullbright_mask() {
        let mat = Material::decode(&texture("light1", 2, 2, &[224, 5, 6, 7]), &grey_palette());
        assert!(mat.is_emissive);

        let mask = mat.emission_mask.unwrap();
        // Top left of the data ends up at the top of the flipped image.
        assert_eq!(mask.get_pixel(0, 1).0, [255, 255, 255, 255]);
        assert_eq!(mask.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(mask.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn no_mask_when_all_fullbright() {
        let mat = Material::decode(&texture("lava_glow", 2, 1, &[240, 250]), &grey_palette());
        assert!(mat.is_emissive);
        assert_eq!(mat.emission_mask, None);
    }

    #[test]
    fn liquid_is_emissive_without_mask() {
        let mat = Material::decode(&texture("*lava1", 2, 1, &[240, 3]), &grey_palette());
        assert!(mat.is_emissive);
        assert_eq!(mat.emission_mask, None);
        assert_eq!(mat.image.unwrap().get_pixel(0, 0).0, [240, 240, 240, 255]);
    }

    #[test]
    fn zero_area_has_no_image() {
        let mat = Material::decode(&texture("empty", 0, 0, &[]), &grey_palette());
        assert_eq!(mat.image, None);
        assert_eq!(mat.emission_mask, None);

        let mat = Material::decode(&texture("thin", 4, 0, &[]), &grey_palette());
        assert_eq!(mat.image, None);
        assert_eq!((mat.width, mat.height), (4, 0));
    }

    #[test]
    fn missing_pixels() {
        let mut tex = texture("broken", 16, 16, &[]);
        tex.pixels = None;
        let mat = Material::decode(&tex, &grey_palette());
        assert_eq!(mat.image, None);
        assert_eq!((mat.width, mat.height), (16, 16));
    }
}
