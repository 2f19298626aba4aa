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

use super::Q1BspFile;
use crate::helpers::slice_to_vec3;
use crate::traits::vertices::*;

/// The size of one vertex
const VERTEX_SIZE: usize = 4 * 3;

/// Parse a Vertices data from the data in a BSP file.
pub fn from_data(data: &[u8]) -> Box<[Vertex]> {
    data.chunks_exact(VERTEX_SIZE).map(slice_to_vec3).collect()
}

impl HasVertices for Q1BspFile {
    fn vertices_len(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn get_vertex(&self, index: u32) -> Option<&Vertex> {
        self.vertices.get(index as usize)
    }
}
