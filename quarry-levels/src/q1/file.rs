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


//! A complete BSP file

// Trait implementations are stored in their own files.

use log::debug;

use super::header::{Header, Lump};
use super::variant::{FormatVariant, BSP30_VERSION};
use crate::types::Result;

use super::*;
use crate::traits::edges::{Edge, SurfEdge};
use crate::traits::entities::Entity;
use crate::traits::faces::Face;
use crate::traits::models::Model;
use crate::traits::texinfo::TexInfo;
use crate::traits::textures::Texture;
use crate::traits::vertices::Vertex;

/// A parsed Quake 1 BSP file, either BSP29 or BSP2.
#[derive(Debug, Clone)]
pub struct Q1BspFile {
    pub(crate) version: u32,
    pub(crate) variant: FormatVariant,
    pub(crate) entities: Box<[Entity]>,
    pub(crate) vertices: Box<[Vertex]>,
    pub(crate) edges: Box<[Edge]>,
    pub(crate) surfedges: Box<[SurfEdge]>,
    pub(crate) texinfo: Box<[TexInfo]>,
    pub(crate) faces: Box<[Face]>,
    pub(crate) textures: Box<[Texture]>,
    pub(crate) models: Box<[Model]>,
}

impl Q1BspFile {
    /// Parse `data` as a quake 1 bsp file.
    pub fn parse_file(data: &[u8]) -> Result<Q1BspFile> {
        let header = Header::from(data)?;
        let layout = header.variant.layout();
        debug!(
            "BSP version {:#x}, using {:?} records",
            header.version, header.variant
        );

        let entities = entities::from_data(header.get_lump(data, Lump::Entities));

        // Half-Life files keep their textures in external WADs
        let load_pixels = header.version != BSP30_VERSION;
        let textures = textures::from_data(header.get_lump(data, Lump::MipTex), load_pixels)?;

        let vertices = vertices::from_data(header.get_lump(data, Lump::Vertices));
        let edges = edges::edges_from_data(header.get_lump(data, Lump::Edges), layout);
        let surfedges = edges::surfedges_from_data(header.get_lump(data, Lump::EdgeList));
        let texinfo = texinfo::from_data(header.get_lump(data, Lump::TexInfo));
        let faces = faces::from_data(header.get_lump(data, Lump::Faces), layout);
        let models = models::from_data(header.get_lump(data, Lump::Models), faces.len() as u32)?;

        debug!(
            "{} models, {} faces, {} edges, {} vertices, {} textures, {} entities",
            models.len(),
            faces.len(),
            edges.len(),
            vertices.len(),
            textures.len(),
            entities.len()
        );

        Ok(Q1BspFile {
            version: header.version,
            variant: header.variant,
            entities,
            vertices,
            edges,
            surfedges,
            texinfo,
            faces,
            textures,
            models,
        })
    }

    /// The raw version field.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }
}
