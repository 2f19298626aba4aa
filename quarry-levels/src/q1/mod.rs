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


//! Parsing data from Quake 1 style BSP files (BSP29 and BSP2)

mod edges;
mod entities;
mod faces;
pub mod file;
pub mod header;
mod models;
mod texinfo;
mod textures;
mod vertices;
pub mod variant;

pub use self::file::Q1BspFile;
pub use self::variant::FormatVariant;
