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


//! Running the whole import.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use quarry_levels::palette::Palette;
use quarry_levels::q1::Q1BspFile;
use quarry_levels::traits::{HasEntities, HasTextures};

use crate::entities::{place_entities, PlacedEntities};
use crate::error::{ImportError, Result};
use crate::geometry::build_meshes;
use crate::materials::build_materials;
use crate::options::ImportOptions;
use crate::scene::{ImportReport, Scene, Timings};

/// Import the BSP file at `path`.
pub fn import_bsp(path: &Path, options: &ImportOptions) -> Result<Scene> {
    options.validate()?;
    let start = Instant::now();

    // The file is closed again before any decoding happens.
    let data = fs::read(path).map_err(|source| ImportError::Io {
        path: path.to_owned(),
        source,
    })?;
    let read = start.elapsed();
    debug!("Read {} bytes from {:?} in {:?}", data.len(), path, read);

    let mut scene = import_data(&data, &map_name(path), options)?;
    scene.report.timings.read = read;
    scene.report.timings.total = start.elapsed();

    info!(
        "Imported {:?} in {:?}: {} meshes, {} materials, {} lights, {} cameras, {} objects",
        path,
        scene.report.timings.total,
        scene.meshes.len(),
        scene.materials.len(),
        scene.lights.len(),
        scene.cameras.len(),
        scene.objects.len()
    );

    Ok(scene)
}

/// Import a BSP file that's already in memory.
pub fn import_bytes(data: &[u8], map_name: &str, options: &ImportOptions) -> Result<Scene> {
    options.validate()?;
    import_data(data, map_name, options)
}

/// Everything after reading the file. `options` must already be valid.
fn import_data(data: &[u8], map_name: &str, options: &ImportOptions) -> Result<Scene> {
    let start = Instant::now();
    let mut timings = Timings::default();

    let file = Q1BspFile::parse_file(data)?;
    timings.parse = start.elapsed();

    let stage = Instant::now();
    let (materials, material_index) = if options.create_materials {
        let palette = Palette::load(&options.palette_path(), options.brightness_adjust)?;
        let (materials, index) = build_materials(&file, &palette, options.remove_hidden);
        (materials, Some(index))
    } else {
        (Vec::new(), None)
    };
    timings.materials = stage.elapsed();

    let stage = Instant::now();
    let (meshes, model_reports) = build_meshes(&file, options, material_index.as_ref());
    timings.geometry = stage.elapsed();

    let stage = Instant::now();
    let entities_read = file.entities_iter().count();
    let placed = if options.wants_entities() {
        place_entities(file.entities_iter(), options)
    } else {
        PlacedEntities::default()
    };
    timings.entities = stage.elapsed();
    timings.total = start.elapsed();

    debug!(
        "Parse {:?}, materials {:?}, geometry {:?}, entities {:?}",
        timings.parse, timings.materials, timings.geometry, timings.entities
    );

    let textures = file.textures_iter().count();
    let textures_without_pixels = file.textures_iter().filter(|t| t.pixels.is_none()).count();

    Ok(Scene {
        map_name: map_name.to_string(),
        meshes,
        materials,
        lights: placed.lights,
        cameras: placed.cameras,
        objects: placed.objects,
        active_camera: placed.active_camera,
        report: ImportReport {
            version: file.version(),
            variant: file.variant(),
            models: model_reports,
            textures,
            textures_without_pixels,
            entities_read,
            entities_skipped: placed.skipped,
            timings,
        },
    })
}

/// `e1m1.bsp` -> `e1m1`
fn map_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .and_then(|n| n.split('.').next().map(str::to_string))
        .unwrap_or_default()
}
