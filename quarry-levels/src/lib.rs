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

//! Parses Quake BSP files into tables that can be turned into renderable geometry.

#[macro_use]
extern crate bitflags;
extern crate nalgebra as na;

pub mod cursor;
pub mod helpers;
pub mod palette;
pub mod q1;
pub mod traits;
pub mod types;

pub mod prelude {
    pub use crate::palette::Palette;
    pub use crate::q1::{FormatVariant, Q1BspFile};
    pub use crate::traits::*;
    pub use crate::types::{ParseError, Result};
}
