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


use log::debug;

use super::Q1BspFile;
use crate::traits::entities::*;

const QUOTE: char = '"';
const START_BRACKET: &str = "{";
const END_BRACKET: &str = "}";

/// Code page 437, bytes 0x80 to 0xFF. The low half is ASCII.
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Decode the entity lump as code page 437 text, up to the first NUL.
/// Every byte value maps to a character, so this can't fail.
pub fn decode(data: &[u8]) -> String {
    data.iter()
        .take_while(|b| **b != 0)
        .map(|&b| {
            if b < 0x80 {
                b as char
            } else {
                CP437_HIGH[(b - 0x80) as usize]
            }
        })
        .collect()
}

/// Parse the given data as an Entities lump.
/// Only entities with both a `classname` and an `origin` are kept.
pub fn from_data(data: &[u8]) -> Box<[Entity]> {
    let text = decode(data);

    let mut entities = Vec::new();
    let mut lines = text.lines();
    let mut dropped = 0;

    while let Some(line) = lines.next() {
        if !line.starts_with(START_BRACKET) {
            continue;
        }

        let mut entity = Entity::new();
        for line in lines.by_ref() {
            if line.starts_with(END_BRACKET) {
                break;
            }

            if let Some((key, value)) = parse_pair(line) {
                entity.insert(key.to_owned(), value.to_owned());
            }
        }

        if entity.contains_key("classname") && entity.contains_key("origin") {
            entities.push(entity);
        } else {
            dropped += 1;
        }
    }

    debug!(
        "Parsed {} entities, dropped {} without a classname or origin",
        entities.len(),
        dropped
    );

    entities.into_boxed_slice()
}

/// Split `"key" "value"` into its parts. Anything that isn't exactly two quoted pieces is ignored.
fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let mut pieces = line.split(QUOTE).filter(|s| !s.is_empty() && *s != " ");
    let key = pieces.next()?;
    let value = pieces.next()?;
    if pieces.next().is_some() {
        return None;
    }

    Some((key, value))
}

impl HasEntities for Q1BspFile {
    type EntitiesIter<'a> = std::slice::Iter<'a, Entity>;

    fn entities_iter(&self) -> Self::EntitiesIter<'_> {
        self.entities.iter()
    }
}
