use crate::helpers::slice_to_u32;
use crate::types::{ParseError, Result};

use super::variant::FormatVariant;

/// Number of lumps in the directory.
pub const LUMP_COUNT: usize = 15;

/// Version field followed by 15 offset/size pairs, all u32.
pub const HEADER_LEN: usize = 4 + (LUMP_COUNT * 4 * 2);

/// The lumps in a Quake BSP, in directory order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lump {
    Entities,
    Planes,
    MipTex,
    Vertices,
    Visibility,
    Nodes,
    TexInfo,
    Faces,
    Lightmaps,
    ClipNodes,
    Leaves,
    FaceList,
    Edges,
    EdgeList,
    Models,
}

impl Lump {
    pub const ALL: [Lump; LUMP_COUNT] = [
        Lump::Entities,
        Lump::Planes,
        Lump::MipTex,
        Lump::Vertices,
        Lump::Visibility,
        Lump::Nodes,
        Lump::TexInfo,
        Lump::Faces,
        Lump::Lightmaps,
        Lump::ClipNodes,
        Lump::Leaves,
        Lump::FaceList,
        Lump::Edges,
        Lump::EdgeList,
        Lump::Models,
    ];

    /// Position of this lump in the directory.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A directory entry, pointing to a lump in the file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Offset from beginning of file to start of lump
    pub offset: u32,

    /// Length of lump in bytes
    pub length: u32,
}

/// The header found at the start of a (Q1) bsp file
#[derive(Clone, Copy, Debug)]
pub struct Header {
    pub version: u32,
    pub variant: FormatVariant,
    pub dir_entries: [DirEntry; LUMP_COUNT],
}

impl Header {
    /// Deserialise from buffer, checking every lump is inside the buffer and holds whole records.
    /// # Format
    /// int version                 29 for Quake, 30 for Half-Life, "BSP2" for extended limits.
    /// direntry[15] direntries     Lump directory, fifteen entries.
    pub fn from(v: &[u8]) -> Result<Header> {
        if v.len() < HEADER_LEN {
            return Err(ParseError::MalformedHeader { len: v.len() });
        }

        let version = slice_to_u32(&v[0..4]);
        let variant = FormatVariant::from_version(version);
        let layout = variant.layout();

        let mut dir_entries = [DirEntry {
            offset: 0,
            length: 0,
        }; LUMP_COUNT];

        for (n, lump) in Lump::ALL.iter().enumerate() {
            let base = &v[4 + (n * 8)..4 + (n * 8) + 8];
            let entry = DirEntry {
                offset: slice_to_u32(&base[0..4]),
                length: slice_to_u32(&base[4..8]),
            };

            // Empty lumps are allowed to point anywhere
            let end = entry.offset as u64 + entry.length as u64;
            if entry.length > 0 && end > v.len() as u64 {
                return Err(ParseError::LumpOutOfBounds {
                    lump: *lump,
                    offset: entry.offset,
                    size: entry.length,
                    file_len: v.len(),
                });
            }

            let record_size = layout.record_size(*lump);
            if entry.length as usize % record_size != 0 {
                return Err(ParseError::InconsistentLump {
                    lump: *lump,
                    size: entry.length,
                    record_size,
                });
            }

            dir_entries[n] = entry;
        }

        Ok(Header {
            version,
            variant,
            dir_entries,
        })
    }

    pub fn entry(&self, lump: Lump) -> DirEntry {
        self.dir_entries[lump.index()]
    }

    /// Get the given lump from the buffer, with offset & length based on this directory.
    /// # Panics
    /// If `buf` isn't the buffer this header was parsed from.
    pub fn get_lump<'l>(&self, buf: &'l [u8], lump: Lump) -> &'l [u8] {
        let entry = self.entry(lump);
        if entry.length == 0 {
            return &[];
        }

        &buf[entry.offset as usize..entry.offset as usize + entry.length as usize]
    }

    /// Number of records in the given lump.
    pub fn count(&self, lump: Lump) -> usize {
        self.entry(lump).length as usize / self.variant.layout().record_size(lump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(version: u32, entries: &[(u32, u32); LUMP_COUNT]) -> Vec<u8> {
        let mut buf = version.to_le_bytes().to_vec();
        for (offset, length) in entries.iter() {
            buf.extend_from_slice(&offset.to_le_bytes());
            buf.extend_from_slice(&length.to_le_bytes());
        }
        buf
    }

    #[test]
    fn too_short() {
        match Header::from(&[0; HEADER_LEN - 1]) {
            Err(ParseError::MalformedHeader { len }) => assert_eq!(len, HEADER_LEN - 1),
            other => panic!("expected malformed header, got {:?}", other),
        }
    }

    #[test]
    fn empty_lumps() {
        let header = Header::from(&header_bytes(29, &[(0, 0); LUMP_COUNT])).unwrap();
        assert_eq!(header.version, 29);
        assert_eq!(header.variant, FormatVariant::Classic);
        for lump in Lump::ALL.iter() {
            assert_eq!(header.count(*lump), 0);
        }
    }

    #[test]
    fn counts_records() {
        let mut entries = [(0, 0); LUMP_COUNT];
        entries[Lump::Vertices.index()] = (HEADER_LEN as u32, 36);
        let mut buf = header_bytes(29, &entries);
        buf.resize(HEADER_LEN + 36, 0);

        let header = Header::from(&buf).unwrap();
        assert_eq!(header.count(Lump::Vertices), 3);
        assert_eq!(header.get_lump(&buf, Lump::Vertices).len(), 36);
    }

    #[test]
    fn every_lump_checks_record_size() {
        for lump in Lump::ALL.iter() {
            for variant in [FormatVariant::Classic, FormatVariant::Extended].iter() {
                let record_size = variant.layout().record_size(*lump);
                if record_size == 1 {
                    continue;
                }

                let version = match variant {
                    FormatVariant::Classic => 29,
                    FormatVariant::Extended => super::super::variant::BSP2_VERSION,
                };
                let mut entries = [(0, 0); LUMP_COUNT];
                entries[lump.index()] = (HEADER_LEN as u32, record_size as u32 + 1);
                let mut buf = header_bytes(version, &entries);
                buf.resize(HEADER_LEN + record_size + 1, 0);

                match Header::from(&buf) {
                    Err(ParseError::InconsistentLump {
                        lump: l,
                        size,
                        record_size: r,
                    }) => {
                        assert_eq!(l, *lump);
                        assert_eq!(size as usize, record_size + 1);
                        assert_eq!(r, record_size);
                    }
                    other => panic!("{:?} {:?}: expected inconsistent lump, got {:?}", variant, lump, other),
                }
            }
        }
    }

    #[test]
    fn lump_past_end() {
        let mut entries = [(0, 0); LUMP_COUNT];
        entries[Lump::Entities.index()] = (HEADER_LEN as u32, 10);
        let buf = header_bytes(29, &entries);

        match Header::from(&buf) {
            Err(ParseError::LumpOutOfBounds { lump, .. }) => assert_eq!(lump, Lump::Entities),
            other => panic!("expected out of bounds, got {:?}", other),
        }
    }
}
