use super::Q1BspFile;
use crate::helpers::{slice_to_f32, slice_to_u32, slice_to_vec3};
use crate::traits::texinfo::*;

const TEXINFO_SIZE: usize = (4 * 8) + 4 + 4;

/// Parse the texinfo lump.
/// # Format
/// vec3 s, float s offset, vec3 t, float t offset, u32 miptex index, u32 flags
pub fn from_data(data: &[u8]) -> Box<[TexInfo]> {
    data.chunks_exact(TEXINFO_SIZE)
        .map(|raw| TexInfo {
            s: slice_to_vec3(&raw[0..12]),
            s_offset: slice_to_f32(&raw[12..16]),
            t: slice_to_vec3(&raw[16..28]),
            t_offset: slice_to_f32(&raw[28..32]),
            texture_idx: slice_to_u32(&raw[32..36]),
            flags: slice_to_u32(&raw[36..40]),
        })
        .collect()
}

impl HasTexInfo for Q1BspFile {
    fn get_texinfo(&self, index: u32) -> Option<&TexInfo> {
        self.texinfo.get(index as usize)
    }
}

#[test]
fn texinfo_single() {
    let mut buf = Vec::new();
    for f in &[1.0f32, 0.0, 0.0, 8.0, 0.0, -1.0, 0.0, -16.0] {
        buf.extend_from_slice(&f.to_le_bytes());
    }
    buf.extend_from_slice(&5u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    let infos = from_data(&buf);
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].s, na::Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(infos[0].s_offset, 8.0);
    assert_eq!(infos[0].t, na::Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(infos[0].t_offset, -16.0);
    assert_eq!(infos[0].texture_idx, 5);
}
