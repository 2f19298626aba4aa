//! Turning entity records into lights, cameras and placed objects.

use log::debug;
use quarry_levels::traits::entities::Entity;

use crate::options::ImportOptions;
use crate::Vector3;

const LIGHT_PREFIX: &str = "light";
const CAMERA_CLASSES: &[&str] = &["info_intermission", "info_player_start"];
const PLAYER_START: &str = "info_player_start";
const OBJECT_PREFIXES: &[&str] = &["monster_", "item_", "weapon_"];

const DEFAULT_LIGHT: f32 = 200.0;
const CAMERA_FOV: f32 = std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position of the object
    pub position: Vector3,

    /// Rotation of the object (XYZ euler angles in radians)
    pub rotation: Vector3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub classname: String,
    pub transform: Transform,
    pub intensity: f32,
    pub entity: Entity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub classname: String,
    pub transform: Transform,

    /// FOV (radians)
    pub fov: f32,
    pub entity: Entity,
}

/// Any other entity, placed as an empty object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntity {
    pub classname: String,
    pub transform: Transform,
    pub entity: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Light,
    Camera,
    Object,
}

/// Decide what an entity becomes, if anything.
/// Lights are never imported as objects, even when every entity is wanted.
pub fn classify(classname: &str, options: &ImportOptions) -> Option<EntityKind> {
    if classname.starts_with(LIGHT_PREFIX) {
        if options.create_lights {
            Some(EntityKind::Light)
        } else {
            None
        }
    } else if options.create_cameras && CAMERA_CLASSES.contains(&classname) {
        Some(EntityKind::Camera)
    } else if options.all_entities
        || (options.create_entities && OBJECT_PREFIXES.iter().any(|p| classname.starts_with(p)))
    {
        Some(EntityKind::Object)
    } else {
        None
    }
}

/// Everything placed from the entity lump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacedEntities {
    pub lights: Vec<Light>,
    pub cameras: Vec<Camera>,
    pub objects: Vec<SceneEntity>,

    /// The first player start camera.
    pub active_camera: Option<usize>,

    /// Entities that weren't wanted.
    pub skipped: usize,
}

pub fn place_entities<'a, I>(entities: I, options: &ImportOptions) -> PlacedEntities
where
    I: Iterator<Item = &'a Entity>,
{
    let mut placed = PlacedEntities::default();

    for entity in entities {
        let classname = match entity.classname() {
            Some(c) => c,
            None => continue,
        };

        let position = parse_vec3(entity, "origin") * options.scale;
        let angle = parse_float(entity, "angle", 0.0);

        match classify(classname, options) {
            Some(EntityKind::Light) => placed.lights.push(Light {
                classname: classname.to_string(),
                transform: Transform {
                    position,
                    rotation: Vector3::new(0.0, 0.0, angle.to_radians()),
                },
                intensity: parse_float(entity, "light", DEFAULT_LIGHT),
                entity: entity.clone(),
            }),
            Some(EntityKind::Camera) => {
                if classname == PLAYER_START && placed.active_camera.is_none() {
                    placed.active_camera = Some(placed.cameras.len());
                }

                placed.cameras.push(Camera {
                    classname: classname.to_string(),
                    transform: Transform {
                        position,
                        rotation: camera_rotation(entity, angle),
                    },
                    fov: CAMERA_FOV,
                    entity: entity.clone(),
                });
            }
            Some(EntityKind::Object) => placed.objects.push(SceneEntity {
                classname: classname.to_string(),
                transform: Transform {
                    position,
                    rotation: Vector3::new(0.0, 0.0, angle.to_radians()),
                },
                entity: entity.clone(),
            }),
            None => placed.skipped += 1,
        }
    }

    debug!(
        "Placed {} lights, {} cameras and {} objects, skipped {}",
        placed.lights.len(),
        placed.cameras.len(),
        placed.objects.len(),
        placed.skipped
    );

    placed
}

/// Cameras look down Y, so a level camera is tipped up by 90 degrees.
/// `mangle` is pitch, yaw and roll.
fn camera_rotation(entity: &Entity, angle: f32) -> Vector3 {
    if entity.contains_key("mangle") {
        let mangle = parse_vec3(entity, "mangle");
        Vector3::new(
            (90.0 - mangle.x).to_radians(),
            mangle.z.to_radians(),
            (mangle.y - 90.0).to_radians(),
        )
    } else {
        Vector3::new(90f32.to_radians(), 0.0, (angle - 90.0).to_radians())
    }
}

fn parse_float(entity: &Entity, key: &str, default: f32) -> f32 {
    entity
        .get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Three space separated numbers, or zero if the value is anything else.
fn parse_vec3(entity: &Entity, key: &str) -> Vector3 {
    let value = match entity.get(key) {
        Some(v) => v,
        None => return Vector3::zeros(),
    };

    let parts = match value
        .split_whitespace()
        .map(str::parse::<f32>)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(parts) => parts,
        Err(_) => return Vector3::zeros(),
    };

    match parts.as_slice() {
        [x, y, z] => Vector3::new(*x, *y, *z),
        _ => Vector3::zeros(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(pairs: &[(&str, &str)]) -> Entity {
        let mut ent = Entity::new();
        for (k, v) in pairs {
            ent.insert(k.to_string(), v.to_string());
        }
        ent
    }

    fn options(f: impl FnOnce(&mut ImportOptions)) -> ImportOptions {
        let mut options = ImportOptions::default();
        f(&mut options);
        options
    }

    fn close(a: Vector3, b: Vector3) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn lights_are_never_objects() {
        let all = options(|o| o.all_entities = true);
        assert_eq!(classify("light_flame_large_yellow", &all), None);

        let lights = options(|o| o.create_lights = true);
        assert_eq!(classify("light", &lights), Some(EntityKind::Light));
    }

    #[test]
    fn cameras_fall_back_to_objects() {
        let all = options(|o| o.all_entities = true);
        assert_eq!(classify("info_player_start", &all), Some(EntityKind::Object));

        let cams = options(|o| {
            o.all_entities = true;
            o.create_cameras = true;
        });
        assert_eq!(classify("info_player_start", &cams), Some(EntityKind::Camera));
        assert_eq!(classify("info_intermission", &cams), Some(EntityKind::Camera));
    }

    #[test]
    fn object_prefixes() {
        let ents = options(|o| o.create_entities = true);
        assert_eq!(classify("monster_ogre", &ents), Some(EntityKind::Object));
        assert_eq!(classify("item_health", &ents), Some(EntityKind::Object));
        assert_eq!(classify("weapon_nailgun", &ents), Some(EntityKind::Object));
        assert_eq!(classify("func_door", &ents), None);
    }

    #[test]
    fn light_placement() {
        let ents = [entity(&[
            ("classname", "light"),
            ("origin", "100 -20 40"),
            ("angle", "90"),
        ])];
        let placed = place_entities(ents.iter(), &options(|o| o.create_lights = true));

        let light = &placed.lights[0];
        assert!(close(light.transform.position, Vector3::new(5.0, -1.0, 2.0)));
        assert!(close(
            light.transform.rotation,
            Vector3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2)
        ));
        assert_eq!(light.intensity, 200.0);
    }

    #[test]
    fn camera_mangle() {
        let ents = [entity(&[
            ("classname", "info_intermission"),
            ("origin", "0 0 0"),
            ("mangle", "30 180 10"),
        ])];
        let placed = place_entities(ents.iter(), &options(|o| o.create_cameras = true));

        let rot = placed.cameras[0].transform.rotation;
        assert!(close(
            rot,
            Vector3::new(60f32.to_radians(), 10f32.to_radians(), 90f32.to_radians())
        ));
        assert_eq!(placed.active_camera, None);
    }

    #[test]
    fn first_player_start_is_active() {
        let ents = [
            entity(&[("classname", "info_intermission"), ("origin", "0 0 0")]),
            entity(&[
                ("classname", "info_player_start"),
                ("origin", "0 0 24"),
                ("angle", "180"),
            ]),
            entity(&[("classname", "info_player_start"), ("origin", "64 0 24")]),
        ];
        let placed = place_entities(ents.iter(), &options(|o| o.create_cameras = true));

        assert_eq!(placed.cameras.len(), 3);
        assert_eq!(placed.active_camera, Some(1));
        assert!(close(
            placed.cameras[1].transform.rotation,
            Vector3::new(90f32.to_radians(), 0.0, 90f32.to_radians())
        ));
        assert_eq!(placed.cameras[1].fov, std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn malformed_origin_is_zero() {
        let ents = [
            entity(&[("classname", "monster_army"), ("origin", "1 2")]),
            entity(&[("classname", "monster_dog"), ("origin", "a b c")]),
        ];
        let placed = place_entities(ents.iter(), &options(|o| o.create_entities = true));

        assert_eq!(placed.objects.len(), 2);
        for obj in placed.objects.iter() {
            assert_eq!(obj.transform.position, Vector3::zeros());
        }
    }
}
