use super::{HasEdges, HasTexInfo, HasTextures};

/// A face, as stored in the file. Faces are polygons made up of a run of the edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub plane_idx: u32,
    pub side: u32,
    pub first_edge: i32,
    pub num_edges: u32,
    pub texinfo_idx: u32,
    pub styles: [u8; 4],
    pub lightmap_offset: i32,
}

impl Face {
    /// Indices into the edge list making up this face, or `None` if the range is nonsense.
    pub fn surfedges(&self) -> Option<std::ops::Range<u32>> {
        if self.first_edge < 0 {
            return None;
        }
        let start = self.first_edge as u32;
        let end = start.checked_add(self.num_edges)?;

        Some(start..end)
    }
}

pub trait HasFaces: HasEdges + HasTexInfo + HasTextures {
    fn faces_len(&self) -> u32;
    fn get_face(&self, index: u32) -> Option<&Face>;
}
