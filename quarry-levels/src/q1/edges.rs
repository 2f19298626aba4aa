use super::variant::RecordLayout;
use super::Q1BspFile;
use crate::helpers::{slice_to_i32, slice_to_u16, slice_to_u32};
use crate::traits::edges::*;

/// Parse the edges lump.
pub fn edges_from_data(data: &[u8], layout: &RecordLayout) -> Box<[Edge]> {
    data.chunks_exact(layout.edges)
        .map(layout.read_edge)
        .collect()
}

/// Parse the edge list, which is a list of signed edge indices.
pub fn surfedges_from_data(data: &[u8]) -> Box<[SurfEdge]> {
    data.chunks_exact(4).map(slice_to_i32).collect()
}

pub fn edge_from_classic(data: &[u8]) -> Edge {
    Edge {
        vertices: [
            slice_to_u16(&data[0..2]) as u32,
            slice_to_u16(&data[2..4]) as u32,
        ],
    }
}

pub fn edge_from_extended(data: &[u8]) -> Edge {
    Edge {
        vertices: [slice_to_u32(&data[0..4]), slice_to_u32(&data[4..8])],
    }
}

impl HasEdges for Q1BspFile {
    fn get_edge(&self, index: u32) -> Option<&Edge> {
        self.edges.get(index as usize)
    }

    fn get_surfedge(&self, index: u32) -> Option<SurfEdge> {
        self.surfedges.get(index as usize).copied()
    }
}
