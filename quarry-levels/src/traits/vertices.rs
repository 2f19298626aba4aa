use na::Vector3;

/// A vertex position, in map units.
pub type Vertex = Vector3<f32>;

/// The vertex pool shared by every model in a file.
pub trait HasVertices {
    fn vertices_len(&self) -> u32;
    fn get_vertex(&self, index: u32) -> Option<&Vertex>;
}
