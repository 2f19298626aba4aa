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


//! Rebuilding polygon meshes from the face and edge tables.

use std::collections::HashSet;

use log::{debug, warn};
use quarry_levels::traits::faces::Face;
use quarry_levels::traits::models::Model;
use quarry_levels::traits::texinfo::TexInfo;
use quarry_levels::traits::textures::{Texture, TextureFlags};
use quarry_levels::traits::HasModels;
use thiserror::Error;

use crate::materials::MaterialIndex;
use crate::options::ImportOptions;
use crate::{Vector2, Vector3};

/// A polygon in a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Indices into the mesh's positions, in winding order.
    pub vertices: Vec<u32>,

    /// One per vertex.
    pub uvs: Vec<Vector2>,

    /// Index into the mesh's material table.
    pub material: Option<usize>,
}

/// The geometry of one model.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub model_idx: u32,

    /// Scaled positions. Only vertices used by a polygon are kept, in their original order.
    pub positions: Vec<Vector3>,
    pub polygons: Vec<Polygon>,

    /// Indices into the scene's materials, in order of first use.
    pub materials: Vec<usize>,
}

/// Why a face couldn't become a polygon.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceError {
    #[error("Face has fewer than 3 vertices")]
    Degenerate,

    #[error("Face uses the same vertex twice")]
    RepeatedVertex,

    #[error("Face has the same vertices as an earlier one")]
    Duplicate,

    #[error("Face refers to data that doesn't exist")]
    Malformed,
}

/// What happened to each face of a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReport {
    pub model_idx: u32,
    pub faces: u32,
    pub built: u32,

    /// Skipped because of their texture.
    pub hidden: u32,
    pub degenerate: u32,
    pub repeated_vertex: u32,
    pub duplicate: u32,
    pub malformed: u32,

    pub vertices_kept: u32,

    /// The model had no polygons, so no mesh was made.
    pub discarded: bool,
}

impl ModelReport {
    fn count(&mut self, err: FaceError) {
        match err {
            FaceError::Degenerate => self.degenerate += 1,
            FaceError::RepeatedVertex => self.repeated_vertex += 1,
            FaceError::Duplicate => self.duplicate += 1,
            FaceError::Malformed => self.malformed += 1,
        }
    }

    /// Faces that weren't hidden but still couldn't be built.
    pub fn failed(&self) -> u32 {
        self.degenerate + self.repeated_vertex + self.duplicate + self.malformed
    }
}

/// Build a mesh for every model, or just model 0 if `worldspawn_only` is set.
/// Models with no usable faces are reported but produce no mesh.
pub fn build_meshes<L: HasModels>(
    file: &L,
    options: &ImportOptions,
    materials: Option<&MaterialIndex>,
) -> (Vec<Mesh>, Vec<ModelReport>) {
    let mut meshes = Vec::new();
    let mut reports = Vec::new();

    let limit = if options.worldspawn_only { 1 } else { usize::MAX };
    for (idx, model) in file.models_iter().enumerate().take(limit) {
        let (mesh, report) = build_mesh(file, idx as u32, model, options, materials);
        if let Some(mesh) = mesh {
            meshes.push(mesh);
        }
        reports.push(report);
    }

    (meshes, reports)
}

/// Build the mesh for a single model.
pub fn build_mesh<L: HasModels>(
    file: &L,
    model_idx: u32,
    model: &Model,
    options: &ImportOptions,
    materials: Option<&MaterialIndex>,
) -> (Option<Mesh>, ModelReport) {
    let mut report = ModelReport {
        model_idx,
        faces: model.faces_idx.end.saturating_sub(model.faces_idx.start),
        ..ModelReport::default()
    };

    let mut used = vec![false; file.vertices_len() as usize];
    let mut seen = HashSet::new();
    let mut polygons = Vec::new();
    let mut mesh_materials: Vec<usize> = Vec::new();

    for face_idx in model.faces_idx.clone() {
        let (face, texinfo, texture) = match face_parts(file, face_idx) {
            Ok(parts) => parts,
            Err(e) => {
                debug!("Model {} face {}: {}", model_idx, face_idx, e);
                report.count(e);
                continue;
            }
        };

        if options.remove_hidden && texture.flags.contains(TextureFlags::IGNORED) {
            report.hidden += 1;
            continue;
        }

        let vertices = match face_loop(file, face, &mut seen) {
            Ok(v) => v,
            Err(e) => {
                debug!("Model {} face {}: {}", model_idx, face_idx, e);
                report.count(e);
                continue;
            }
        };

        let mut uvs = Vec::with_capacity(vertices.len());
        for &v in vertices.iter() {
            // Checked by face_loop
            if let Some(position) = file.get_vertex(v) {
                uvs.push(texinfo.project(position, texture.width, texture.height));
            }
            used[v as usize] = true;
        }

        let material = materials
            .and_then(|index| index.get(&texture.name))
            .map(|&scene_idx| {
                match mesh_materials.iter().position(|&m| m == scene_idx) {
                    Some(local) => local,
                    None => {
                        mesh_materials.push(scene_idx);
                        mesh_materials.len() - 1
                    }
                }
            });

        polygons.push(Polygon {
            vertices,
            uvs,
            material,
        });
        report.built += 1;
    }

    if report.malformed > 0 {
        warn!(
            "Model {} has {} malformed faces",
            model_idx, report.malformed
        );
    }

    if polygons.is_empty() {
        debug!("Model {} has no polygons, discarding", model_idx);
        report.discarded = true;
        return (None, report);
    }

    // Keep used vertices in order, and point the polygons at their new positions.
    let mut remap = vec![0; used.len()];
    let mut positions = Vec::new();
    for (old, _) in used.iter().enumerate().filter(|(_, u)| **u) {
        remap[old] = positions.len() as u32;
        if let Some(position) = file.get_vertex(old as u32) {
            positions.push(position * options.scale);
        }
    }

    for polygon in polygons.iter_mut() {
        for v in polygon.vertices.iter_mut() {
            *v = remap[*v as usize];
        }
    }

    report.vertices_kept = positions.len() as u32;
    debug!(
        "Model {}: {} polygons, {} vertices, {} hidden, {} failed",
        model_idx,
        report.built,
        report.vertices_kept,
        report.hidden,
        report.failed()
    );

    (
        Some(Mesh {
            name: format!("bsp_model_{}", model_idx),
            model_idx,
            positions,
            polygons,
            materials: mesh_materials,
        }),
        report,
    )
}

/// Look up a face along with the texture info and texture it uses.
fn face_parts<L: HasModels>(
    file: &L,
    face_idx: u32,
) -> Result<(&Face, &TexInfo, &Texture), FaceError> {
    let face = file.get_face(face_idx).ok_or(FaceError::Malformed)?;
    let texinfo = file
        .get_texinfo(face.texinfo_idx)
        .ok_or(FaceError::Malformed)?;
    let texture = file
        .get_texture(texinfo.texture_idx)
        .ok_or(FaceError::Malformed)?;

    Ok((face, texinfo, texture))
}

/// Walk the face's edges to get its vertex loop, reversed from file order.
/// The loop's vertex set is added to `seen`; a set that's already there is a duplicate.
fn face_loop<L: HasModels>(
    file: &L,
    face: &Face,
    seen: &mut HashSet<Vec<u32>>,
) -> Result<Vec<u32>, FaceError> {
    let range = face.surfedges().ok_or(FaceError::Malformed)?;
    // The whole range has to be in the edge list before its length can size anything
    if !range.is_empty() && file.get_surfedge(range.end - 1).is_none() {
        return Err(FaceError::Malformed);
    }

    let mut vertices = Vec::with_capacity(range.len());
    for i in range {
        let v = file.resolve_surfedge(i).ok_or(FaceError::Malformed)?;
        if v >= file.vertices_len() || file.get_vertex(v).is_none() {
            return Err(FaceError::Malformed);
        }
        vertices.push(v);
    }
    vertices.reverse();

    if vertices.len() < 3 {
        return Err(FaceError::Degenerate);
    }

    let mut set = vertices.clone();
    set.sort_unstable();
    set.dedup();
    if set.len() != vertices.len() {
        return Err(FaceError::RepeatedVertex);
    }

    if !seen.insert(set) {
        return Err(FaceError::Duplicate);
    }

    Ok(vertices)
}
