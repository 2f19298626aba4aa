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

use super::variant::RecordLayout;
use super::Q1BspFile;
use crate::helpers::{slice_to_i32, slice_to_u16, slice_to_u32};
use crate::traits::faces::*;

/// Parse the faces lump. The lump length has already been checked against the layout.
/// Indices into other lumps aren't checked here: a bad face is skipped when building geometry.
pub fn from_data(data: &[u8], layout: &RecordLayout) -> Box<[Face]> {
    data.chunks_exact(layout.faces)
        .map(layout.read_face)
        .collect()
}

/// # Format
/// u16 plane, u16 side, i32 first edge, u16 edge count, u16 texinfo,
/// u8[4] light styles, i32 lightmap offset
pub fn face_from_classic(data: &[u8]) -> Face {
    Face {
        plane_idx: slice_to_u16(&data[0..2]) as u32,
        side: slice_to_u16(&data[2..4]) as u32,
        first_edge: slice_to_i32(&data[4..8]),
        num_edges: slice_to_u16(&data[8..10]) as u32,
        texinfo_idx: slice_to_u16(&data[10..12]) as u32,
        styles: [data[12], data[13], data[14], data[15]],
        lightmap_offset: slice_to_i32(&data[16..20]),
    }
}

/// # Format
/// As `face_from_classic`, but every u16 is a u32.
pub fn face_from_extended(data: &[u8]) -> Face {
    Face {
        plane_idx: slice_to_u32(&data[0..4]),
        side: slice_to_u32(&data[4..8]),
        first_edge: slice_to_i32(&data[8..12]),
        num_edges: slice_to_u32(&data[12..16]),
        texinfo_idx: slice_to_u32(&data[16..20]),
        styles: [data[20], data[21], data[22], data[23]],
        lightmap_offset: slice_to_i32(&data[24..28]),
    }
}

impl HasFaces for Q1BspFile {
    fn faces_len(&self) -> u32 {
        self.faces.len() as u32
    }

    fn get_face(&self, index: u32) -> Option<&Face> {
        self.faces.get(index as usize)
    }
}
