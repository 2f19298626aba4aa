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


use std::iter::Iterator;

/// Surfaces with these exact texture names are compiler helpers and are never drawn.
pub const IGNORED_TEXTURES: &[&str] = &[
    "clip",
    "trigger",
    "hint",
    "skip",
    "waterskip",
    "lavaskip",
    "slimeskip",
    "hintskip",
];

const TRANSPARENT_PREFIX: &str = "{";
const LIQUID_PREFIX: &str = "*";
const SKY_PREFIX: &str = "sky";

bitflags!(
    /// Special roles a texture can have, derived from its name.
    pub struct TextureFlags: u32 {
        /// `{` textures. Palette index 255 is see-through.
        const TRANSPARENT = 0x1;

        /// `*` textures: water, slime, lava and teleporters.
        const LIQUID = 0x2;

        /// `sky` textures.
        const SKY = 0x4;

        /// Helper surfaces such as `clip` or `trigger`.
        const IGNORED = 0x8;

        /// Drawn unlit.
        const EMISSIVE = Self::LIQUID.bits | Self::SKY.bits;
    }
);

impl TextureFlags {
    pub fn from_name(name: &str) -> TextureFlags {
        let mut flags = TextureFlags::empty();
        if name.starts_with(TRANSPARENT_PREFIX) {
            flags |= TextureFlags::TRANSPARENT;
        }
        if name.starts_with(LIQUID_PREFIX) {
            flags |= TextureFlags::LIQUID;
        }
        if name.starts_with(SKY_PREFIX) {
            flags |= TextureFlags::SKY;
        }
        if IGNORED_TEXTURES.contains(&name) {
            flags |= TextureFlags::IGNORED;
        }

        flags
    }

    /// Emission comes from the whole surface, rather than a mask.
    pub fn is_emissive(self) -> bool {
        self.intersects(TextureFlags::EMISSIVE)
    }
}

/// An embedded mip texture. Only the full size level is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub mip_offsets: [u32; 4],

    /// Palette indices, `width * height` long, first row at the top.
    /// `None` if the file has no pixels for this texture, or they couldn't be read.
    pub pixels: Option<Box<[u8]>>,
    pub flags: TextureFlags,
}

impl Texture {
    /// A texture with no usable data, used in place of a corrupt directory entry so indices stay in order.
    pub fn placeholder() -> Texture {
        Texture {
            name: String::new(),
            width: 0,
            height: 0,
            mip_offsets: [0; 4],
            pixels: None,
            flags: TextureFlags::empty(),
        }
    }
}

pub trait HasTextures {
    type TexturesIter<'a>: Iterator<Item = &'a Texture>
    where
        Self: 'a;

    fn textures_iter(&self) -> Self::TexturesIter<'_>;
    fn get_texture(&self, idx: u32) -> Option<&Texture>;
}

#[test]
fn flags_from_name() {
    assert_eq!(TextureFlags::from_name("{grate"), TextureFlags::TRANSPARENT);
    assert_eq!(TextureFlags::from_name("*water1"), TextureFlags::LIQUID);
    assert_eq!(TextureFlags::from_name("sky4"), TextureFlags::SKY);
    assert_eq!(TextureFlags::from_name("clip"), TextureFlags::IGNORED);
    assert_eq!(TextureFlags::from_name("city4_2"), TextureFlags::empty());
}

#[test]
fn ignored_names_must_match_exactly() {
    assert!(TextureFlags::from_name("hintskip").contains(TextureFlags::IGNORED));
    assert!(!TextureFlags::from_name("clip2").contains(TextureFlags::IGNORED));
    assert!(!TextureFlags::from_name("trigger_").contains(TextureFlags::IGNORED));
}

#[test]
fn emissive_roles() {
    assert!(TextureFlags::from_name("*lava1").is_emissive());
    assert!(TextureFlags::from_name("sky1").is_emissive());
    assert!(!TextureFlags::from_name("{fence").is_emissive());
}
