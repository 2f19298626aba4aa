//! The two record layouts a Quake BSP can use. The layout is picked once, when
//! the header is read, and everything after that goes through its table.

use super::header::Lump;
use super::{edges, faces};
use crate::traits::edges::Edge;
use crate::traits::faces::Face;

/// `"BSP2"` read as a little-endian u32.
pub const BSP2_VERSION: u32 = 0x3250_5342;

/// Half-Life maps. Their textures are stored without pixels in the BSP itself.
pub const BSP30_VERSION: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatVariant {
    /// BSP29 and anything unrecognised. 16 bit face and edge indices.
    Classic,

    /// BSP2. 32 bit face and edge indices.
    Extended,
}

impl FormatVariant {
    /// Unknown versions are decoded as `Classic` rather than rejected.
    pub fn from_version(version: u32) -> FormatVariant {
        if version == BSP2_VERSION {
            FormatVariant::Extended
        } else {
            FormatVariant::Classic
        }
    }

    pub fn layout(self) -> &'static RecordLayout {
        match self {
            FormatVariant::Classic => &CLASSIC,
            FormatVariant::Extended => &EXTENDED,
        }
    }
}

/// Record sizes and decoders for the lumps whose shape depends on the variant.
pub struct RecordLayout {
    pub nodes: usize,
    pub faces: usize,
    pub clip_nodes: usize,
    pub leaves: usize,
    pub face_list: usize,
    pub edges: usize,

    /// Decode one record of `faces` bytes.
    pub read_face: fn(&[u8]) -> Face,

    /// Decode one record of `edges` bytes.
    pub read_edge: fn(&[u8]) -> Edge,
}

impl RecordLayout {
    /// Size of one record in the given lump. Lumps of text or raw bytes have a size of 1.
    pub fn record_size(&self, lump: Lump) -> usize {
        match lump {
            Lump::Entities | Lump::MipTex | Lump::Visibility | Lump::Lightmaps => 1,
            Lump::Planes => (4 * 3) + 4 + 4,
            Lump::Vertices => 4 * 3,
            Lump::TexInfo => (4 * 8) + 4 + 4,
            Lump::EdgeList => 4,
            Lump::Models => (4 * 3 * 3) + (4 * 4) + 4 + 4 + 4,
            Lump::Nodes => self.nodes,
            Lump::Faces => self.faces,
            Lump::ClipNodes => self.clip_nodes,
            Lump::Leaves => self.leaves,
            Lump::FaceList => self.face_list,
            Lump::Edges => self.edges,
        }
    }
}

static CLASSIC: RecordLayout = RecordLayout {
    nodes: 4 + (2 * 2) + (2 * 3 * 2) + 2 + 2,
    faces: 2 + 2 + 4 + 2 + 2 + 4 + 4,
    clip_nodes: 4 + (2 * 2),
    leaves: 4 + 4 + (2 * 3 * 2) + 2 + 2 + 4,
    face_list: 2,
    edges: 2 * 2,
    read_face: faces::face_from_classic,
    read_edge: edges::edge_from_classic,
};

static EXTENDED: RecordLayout = RecordLayout {
    nodes: 4 + (4 * 2) + (4 * 3 * 2) + 4 + 4,
    faces: 4 + 4 + 4 + 4 + 4 + 4 + 4,
    clip_nodes: 4 + (4 * 2),
    leaves: 4 + 4 + (4 * 3 * 2) + 4 + 4 + 4,
    face_list: 4,
    edges: 4 * 2,
    read_face: faces::face_from_extended,
    read_edge: edges::edge_from_extended,
};

#[test]
fn only_bsp2_is_extended() {
    assert_eq!(FormatVariant::from_version(BSP2_VERSION), FormatVariant::Extended);
    assert_eq!(FormatVariant::from_version(844_124_994), FormatVariant::Extended);

    for version in [0, 29, 30, 31, 0x4253_5032, u32::MAX].iter() {
        assert_eq!(FormatVariant::from_version(*version), FormatVariant::Classic);
    }
}

#[test]
fn record_sizes() {
    let classic = FormatVariant::Classic.layout();
    let extended = FormatVariant::Extended.layout();

    assert_eq!(classic.record_size(Lump::Faces), 20);
    assert_eq!(extended.record_size(Lump::Faces), 28);
    assert_eq!(classic.record_size(Lump::Edges), 4);
    assert_eq!(extended.record_size(Lump::Edges), 8);
    assert_eq!(classic.record_size(Lump::Nodes), 24);
    assert_eq!(extended.record_size(Lump::Nodes), 44);
    assert_eq!(classic.record_size(Lump::Leaves), 28);
    assert_eq!(extended.record_size(Lump::Leaves), 44);
    assert_eq!(classic.record_size(Lump::Models), 64);
    assert_eq!(classic.record_size(Lump::TexInfo), 40);
}
