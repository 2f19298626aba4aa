use na::{Vector2, Vector3};

/// Describes how a texture is projected onto a face.
#[derive(Debug, Clone, PartialEq)]
pub struct TexInfo {
    pub s: Vector3<f32>,
    pub s_offset: f32,
    pub t: Vector3<f32>,
    pub t_offset: f32,
    pub texture_idx: u32,

    /// Non-zero for animated textures. Not used for geometry.
    pub flags: u32,
}

impl TexInfo {
    /// Project `position` (in unscaled map units) to a texture co-ordinate.
    /// V is negated, as images are stored with a lower-left origin.
    /// Zero sizes are treated as 1.
    pub fn project(&self, position: &Vector3<f32>, width: u32, height: u32) -> Vector2<f32> {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;

        Vector2::new(
            (position.dot(&self.s) + self.s_offset) / width,
            -(position.dot(&self.t) + self.t_offset) / height,
        )
    }
}

pub trait HasTexInfo {
    fn get_texinfo(&self, index: u32) -> Option<&TexInfo>;
}
