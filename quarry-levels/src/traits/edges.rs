use super::HasVertices;

/// An edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub vertices: [u32; 2],
}

/// An entry in the edge list. The absolute value indexes the edge table, and a
/// negative value means the edge is walked from its second vertex.
pub type SurfEdge = i32;

pub trait HasEdges: HasVertices {
    fn get_edge(&self, index: u32) -> Option<&Edge>;
    fn get_surfedge(&self, index: u32) -> Option<SurfEdge>;

    /// Get the vertex index that starts the edge at `index` in the edge list,
    /// taking the edge's direction into account.
    fn resolve_surfedge(&self, index: u32) -> Option<u32> {
        let surfedge = self.get_surfedge(index)?;
        let edge = self.get_edge(surfedge.unsigned_abs())?;

        if surfedge < 0 {
            Some(edge.vertices[1])
        } else {
            Some(edge.vertices[0])
        }
    }
}
