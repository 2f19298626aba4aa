use na::Vector3;
use std::ops::Range;

use super::HasFaces;

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub mins: Vector3<f32>,
    pub maxs: Vector3<f32>,
    pub origin: Vector3<f32>,
    pub head_nodes: [i32; 4],
    pub visleafs: u32,
    pub faces_idx: Range<u32>,
}

pub trait HasModels: HasFaces {
    type ModelsIter<'a>: Iterator<Item = &'a Model>
    where
        Self: 'a;

    fn models_iter(&self) -> Self::ModelsIter<'_>;
    fn models_len(&self) -> u32;
    fn get_model(&self, index: u32) -> Option<&Model>;
}
