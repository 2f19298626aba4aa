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


//! Builds host-agnostic scene data from Quake BSP files.
//!
//! Parsing is done by `quarry-levels`; this crate reconstructs polygon meshes,
//! decodes embedded textures into images and classifies entities into lights,
//! cameras and placed objects.

#[macro_use]
extern crate derive_builder;
extern crate nalgebra as na;

pub mod entities;
pub mod error;
pub mod geometry;
pub mod import;
pub mod materials;
pub mod options;
pub mod scene;

pub use error::{full_error_display, ImportError, Result};
pub use import::{import_bsp, import_bytes};
pub use options::{ImportOptions, ImportOptionsBuilder};
pub use scene::{ImportReport, Scene, Timings};

/// Alias for convenience
pub type Vector2 = na::base::Vector2<f32>;
/// Alias for convenience
pub type Vector3 = na::base::Vector3<f32>;
