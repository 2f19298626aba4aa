// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of stockton-bsp.
//
// stockton-bsp is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// stockton-bsp is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with stockton-bsp.  If not, see <http://www.gnu.org/licenses/>.

use super::Q1BspFile;
use crate::helpers::{slice_to_i32, slice_to_u32, slice_to_vec3};
use crate::traits::models::*;
use crate::types::{ParseError, Result};

const MODEL_SIZE: usize = (4 * 3 * 3) + (4 * 4) + 4 + 4 + 4;

/// Parse the models lump. Every model's faces must exist.
/// # Format
/// vec3 mins, vec3 maxs, vec3 origin, i32[4] head nodes,
/// u32 visleafs, u32 first face, u32 face count
pub fn from_data(data: &[u8], n_faces: u32) -> Result<Box<[Model]>> {
    let n_models = data.len() / MODEL_SIZE;

    let mut models = Vec::with_capacity(n_models);
    for n in 0..n_models {
        let raw = &data[n * MODEL_SIZE..(n + 1) * MODEL_SIZE];

        let mut head_nodes = [0; 4];
        for (i, node) in head_nodes.iter_mut().enumerate() {
            *node = slice_to_i32(&raw[36 + i * 4..40 + i * 4]);
        }

        let faces_idx = {
            let start = slice_to_u32(&raw[56..60]);
            let n = slice_to_u32(&raw[60..64]);

            let end = start as u64 + n as u64;
            if end > n_faces as u64 {
                return Err(ParseError::InvalidReference {
                    what: "model face",
                    index: end as usize - 1,
                    len: n_faces as usize,
                });
            }

            start..start + n
        };

        models.push(Model {
            mins: slice_to_vec3(&raw[0..12]),
            maxs: slice_to_vec3(&raw[12..24]),
            origin: slice_to_vec3(&raw[24..36]),
            head_nodes,
            visleafs: slice_to_u32(&raw[52..56]),
            faces_idx,
        })
    }

    Ok(models.into_boxed_slice())
}

impl HasModels for Q1BspFile {
    type ModelsIter<'a> = std::slice::Iter<'a, Model>;

    fn models_iter(&self) -> Self::ModelsIter<'_> {
        self.models.iter()
    }

    fn models_len(&self) -> u32 {
        self.models.len() as u32
    }

    fn get_model(&self, index: u32) -> Option<&Model> {
        self.models.get(index as usize)
    }
}
