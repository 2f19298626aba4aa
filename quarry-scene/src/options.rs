//! Import settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};

const DEFAULT_SCALE: f32 = 0.05;
const DEFAULT_RESOURCE_DIR: &str = "resources";
const PALETTE_FILE: &str = "palette.lmp";

/// What to import, and how.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(public)]
#[serde(default)]
pub struct ImportOptions {
    /// Multiplier applied to every position. Must be in (0, 1].
    #[builder(default = "DEFAULT_SCALE")]
    pub scale: f32,

    /// Decode the embedded textures and assign them to polygons.
    #[builder(default = "false")]
    pub create_materials: bool,

    /// Skip faces using compiler helper textures such as `clip` and `trigger`.
    #[builder(default = "true")]
    pub remove_hidden: bool,

    /// Added to every palette channel. Must be in [-1, 1].
    #[builder(default = "0.0")]
    pub brightness_adjust: f32,

    /// Only import model 0, the static level geometry.
    #[builder(default = "false")]
    pub worldspawn_only: bool,

    #[builder(default = "false")]
    pub create_lights: bool,

    #[builder(default = "false")]
    pub create_cameras: bool,

    /// Import monsters, items and weapons as placed objects.
    #[builder(default = "false")]
    pub create_entities: bool,

    /// Import every entity that isn't a light or camera as a placed object.
    #[builder(default = "false")]
    pub all_entities: bool,

    /// Directory holding `palette.lmp`.
    #[builder(setter(into), default = "PathBuf::from(DEFAULT_RESOURCE_DIR)")]
    pub resource_dir: PathBuf,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            scale: DEFAULT_SCALE,
            create_materials: false,
            remove_hidden: true,
            brightness_adjust: 0.0,
            worldspawn_only: false,
            create_lights: false,
            create_cameras: false,
            create_entities: false,
            all_entities: false,
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
        }
    }
}

impl ImportOptions {
    /// Check every value is in its allowed range.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(ImportError::InvalidOptions {
                name: "scale",
                reason: format!("{} is outside (0, 1]", self.scale),
            });
        }

        if !(-1.0..=1.0).contains(&self.brightness_adjust) {
            return Err(ImportError::InvalidOptions {
                name: "brightness_adjust",
                reason: format!("{} is outside [-1, 1]", self.brightness_adjust),
            });
        }

        Ok(())
    }

    pub fn palette_path(&self) -> PathBuf {
        self.resource_dir.join(PALETTE_FILE)
    }

    /// Whether any kind of entity is wanted, and so whether the entity lump needs reading.
    pub fn wants_entities(&self) -> bool {
        self.create_lights || self.create_cameras || self.create_entities || self.all_entities
    }
}
