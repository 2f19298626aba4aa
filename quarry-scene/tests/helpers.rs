// Copyright (C) Oscar Shrimpton 2019

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
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

pub const BSP29: u32 = 29;
pub const BSP2: u32 = 0x3250_5342;

pub struct TextureDef {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,

    /// Replaces the offset of the full size pixels, relative to the texture header.
    pub pixel_offset: Option<u32>,
}

pub struct FaceDef {
    pub first_edge: i32,
    pub num_edges: u32,
    pub texinfo: u32,
}

pub struct TexInfoDef {
    pub s: [f32; 3],
    pub s_offset: f32,
    pub t: [f32; 3],
    pub t_offset: f32,
    pub texture: u32,
}

/// Builds small BSP files in memory.
pub struct BspBuilder {
    pub version: u32,
    pub entities: String,
    pub vertices: Vec<[f32; 3]>,
    pub edges: Vec<[u32; 2]>,
    pub surfedges: Vec<i32>,
    pub texinfo: Vec<TexInfoDef>,
    pub faces: Vec<FaceDef>,
    pub textures: Vec<TextureDef>,

    /// (first face, face count)
    pub models: Vec<(u32, u32)>,
}

impl BspBuilder {
    pub fn new(version: u32) -> BspBuilder {
        BspBuilder {
            version,
            entities: String::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            surfedges: Vec::new(),
            texinfo: Vec::new(),
            faces: Vec::new(),
            textures: Vec::new(),
            models: Vec::new(),
        }
    }

    /// One model holding one triangle, textured with a 2x2 `name` texture mapped along X and Y.
    pub fn triangle(version: u32, name: &str) -> BspBuilder {
        let mut bsp = BspBuilder::new(version);
        bsp.vertices = vec![[0.0, 0.0, 0.0], [64.0, 0.0, 0.0], [0.0, 64.0, 0.0]];
        // Edge 0 is never used by the edge list, as -0 can't be told apart from 0.
        bsp.edges = vec![[0, 0], [0, 1], [1, 2], [2, 0]];
        bsp.surfedges = vec![1, 2, 3];
        bsp.texture(name, 2, 2, vec![1, 2, 3, 4]);
        bsp.texinfo.push(TexInfoDef {
            s: [1.0, 0.0, 0.0],
            s_offset: 0.0,
            t: [0.0, 1.0, 0.0],
            t_offset: 0.0,
            texture: 0,
        });
        bsp.faces.push(FaceDef {
            first_edge: 0,
            num_edges: 3,
            texinfo: 0,
        });
        bsp.models.push((0, 1));
        bsp
    }

    pub fn texture(&mut self, name: &str, width: u32, height: u32, pixels: Vec<u8>) -> u32 {
        self.textures.push(TextureDef {
            name: name.to_string(),
            width,
            height,
            pixels,
            pixel_offset: None,
        });
        self.textures.len() as u32 - 1
    }

    fn extended(&self) -> bool {
        self.version == BSP2
    }

    fn entities_lump(&self) -> Vec<u8> {
        let mut buf = self.entities.as_bytes().to_vec();
        buf.push(0);
        buf
    }

    fn miptex_lump(&self) -> Vec<u8> {
        if self.textures.is_empty() {
            return Vec::new();
        }

        let dir_len = 4 + self.textures.len() * 4;
        let mut body = Vec::new();
        let mut offsets = Vec::new();
        for tex in self.textures.iter() {
            offsets.push((dir_len + body.len()) as i32);

            let mut name = tex.name.as_bytes().to_vec();
            name.resize(16, 0);
            body.extend_from_slice(&name);
            body.extend_from_slice(&tex.width.to_le_bytes());
            body.extend_from_slice(&tex.height.to_le_bytes());
            body.extend_from_slice(&tex.pixel_offset.unwrap_or(40).to_le_bytes());
            body.extend_from_slice(&[0; 12]);
            body.extend_from_slice(&tex.pixels);
        }

        let mut buf = (self.textures.len() as i32).to_le_bytes().to_vec();
        for o in offsets {
            buf.extend_from_slice(&o.to_le_bytes());
        }
        buf.extend_from_slice(&body);
        buf
    }

    fn vertices_lump(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for v in self.vertices.iter() {
            push_vec3(&mut buf, v);
        }
        buf
    }

    fn texinfo_lump(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for info in self.texinfo.iter() {
            push_vec3(&mut buf, &info.s);
            buf.extend_from_slice(&info.s_offset.to_le_bytes());
            push_vec3(&mut buf, &info.t);
            buf.extend_from_slice(&info.t_offset.to_le_bytes());
            buf.extend_from_slice(&info.texture.to_le_bytes());
            buf.extend_from_slice(&0u32.to_le_bytes());
        }
        buf
    }

    fn faces_lump(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for face in self.faces.iter() {
            if self.extended() {
                buf.extend_from_slice(&0u32.to_le_bytes());
                buf.extend_from_slice(&0u32.to_le_bytes());
                buf.extend_from_slice(&face.first_edge.to_le_bytes());
                buf.extend_from_slice(&face.num_edges.to_le_bytes());
                buf.extend_from_slice(&face.texinfo.to_le_bytes());
            } else {
                buf.extend_from_slice(&0u16.to_le_bytes());
                buf.extend_from_slice(&0u16.to_le_bytes());
                buf.extend_from_slice(&face.first_edge.to_le_bytes());
                buf.extend_from_slice(&(face.num_edges as u16).to_le_bytes());
                buf.extend_from_slice(&(face.texinfo as u16).to_le_bytes());
            }
            buf.extend_from_slice(&[0, 0xff, 0xff, 0xff]);
            buf.extend_from_slice(&(-1i32).to_le_bytes());
        }
        buf
    }

    fn edges_lump(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for [a, b] in self.edges.iter() {
            if self.extended() {
                buf.extend_from_slice(&a.to_le_bytes());
                buf.extend_from_slice(&b.to_le_bytes());
            } else {
                buf.extend_from_slice(&(*a as u16).to_le_bytes());
                buf.extend_from_slice(&(*b as u16).to_le_bytes());
            }
        }
        buf
    }

    fn surfedges_lump(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for s in self.surfedges.iter() {
            buf.extend_from_slice(&s.to_le_bytes());
        }
        buf
    }

    fn models_lump(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for (first, count) in self.models.iter() {
            buf.extend_from_slice(&[0; 36]);
            buf.extend_from_slice(&[0; 16]);
            buf.extend_from_slice(&0u32.to_le_bytes());
            buf.extend_from_slice(&first.to_le_bytes());
            buf.extend_from_slice(&count.to_le_bytes());
        }
        buf
    }

    pub fn build(&self) -> Vec<u8> {
        // Directory order. Lumps the importer doesn't read are left empty.
        let lumps = vec![
            self.entities_lump(),
            Vec::new(),
            self.miptex_lump(),
            self.vertices_lump(),
            Vec::new(),
            Vec::new(),
            self.texinfo_lump(),
            self.faces_lump(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            self.edges_lump(),
            self.surfedges_lump(),
            self.models_lump(),
        ];

        let mut header = self.version.to_le_bytes().to_vec();
        let mut body = Vec::new();
        let mut offset = 4 + lumps.len() * 8;
        for lump in lumps.iter() {
            header.extend_from_slice(&(offset as u32).to_le_bytes());
            header.extend_from_slice(&(lump.len() as u32).to_le_bytes());
            body.extend_from_slice(lump);
            offset += lump.len();
        }

        header.extend_from_slice(&body);
        header
    }

    /// Write the file into `dir`, returning its path.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> std::path::PathBuf {
        let path = dir.join(file_name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&self.build()).unwrap();
        path
    }
}

fn push_vec3(buf: &mut Vec<u8>, v: &[f32; 3]) {
    for c in v.iter() {
        buf.extend_from_slice(&c.to_le_bytes());
    }
}

/// Write a palette where entry i is (i, i, i) to `<dir>/palette.lmp`.
pub fn write_grey_palette(dir: &Path) {
    let mut bytes = Vec::with_capacity(768);
    for i in 0..=255u8 {
        bytes.extend_from_slice(&[i, i, i]);
    }
    std::fs::write(dir.join("palette.lmp"), bytes).unwrap();
}
