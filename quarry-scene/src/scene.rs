//! The result of an import.

use std::time::Duration;

use quarry_levels::q1::FormatVariant;

use crate::entities::{Camera, Light, SceneEntity};
use crate::geometry::{Mesh, ModelReport};
use crate::materials::Material;

/// A fully imported level. Nothing in here refers back to the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The file name up to its first `.`
    pub map_name: String,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
    pub lights: Vec<Light>,
    pub cameras: Vec<Camera>,
    pub objects: Vec<SceneEntity>,

    /// Index into `cameras`.
    pub active_camera: Option<usize>,
    pub report: ImportReport,
}

impl Scene {
    pub fn active_camera(&self) -> Option<&Camera> {
        self.active_camera.and_then(|i| self.cameras.get(i))
    }

    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name == name)
    }
}

/// Time spent in each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timings {
    pub read: Duration,
    pub parse: Duration,
    pub materials: Duration,
    pub geometry: Duration,
    pub entities: Duration,
    pub total: Duration,
}

/// Problems that were worked around, and how long things took.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub version: u32,
    pub variant: FormatVariant,

    /// One per model considered, including discarded ones.
    pub models: Vec<ModelReport>,
    pub textures: usize,
    pub textures_without_pixels: usize,

    /// Entities with a classname and origin.
    pub entities_read: usize,

    /// Entities not wanted by the options.
    pub entities_skipped: usize,
    pub timings: Timings,
}

impl ImportReport {
    pub fn discarded_models(&self) -> usize {
        self.models.iter().filter(|m| m.discarded).count()
    }

    pub fn failed_faces(&self) -> u32 {
        self.models.iter().map(ModelReport::failed).sum()
    }
}
