//! Helper functions for parsing

use na::Vector3;
use std::convert::TryInto;

/// Turn a slice into a le i32, the int datatype in a bsp file.
/// # Panics
/// If slice is not 4 bytes long
pub fn slice_to_i32(slice: &[u8]) -> i32 {
    i32::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le u32, used for counts and BSP2 indices.
/// # Panics
/// If slice is not 4 bytes long.
pub fn slice_to_u32(slice: &[u8]) -> u32 {
    u32::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le u16, used for indices in BSP29 files.
/// # Panics
/// If slice is not 2 bytes long.
pub fn slice_to_u16(slice: &[u8]) -> u16 {
    u16::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le f32, the float datatype in a bsp file.
/// # Panics
/// If slice is not 4 bytes long
pub fn slice_to_f32(slice: &[u8]) -> f32 {
    f32::from_bits(u32::from_le_bytes(slice.try_into().unwrap()))
}

/// Turn a slice of floats into a 3D vector
/// # Panics
/// If slice isn't 12 bytes long.
pub fn slice_to_vec3(slice: &[u8]) -> Vector3<f32> {
    Vector3::new(
        slice_to_f32(&slice[0..4]),
        slice_to_f32(&slice[4..8]),
        slice_to_f32(&slice[8..12]),
    )
}

/// Take bytes up to the first NUL. Names in BSP files are padded with NULs,
/// but some compilers fill the whole field and leave it unterminated.
pub fn trim_nul(slice: &[u8]) -> &[u8] {
    match slice.iter().position(|b| *b == 0) {
        Some(end) => &slice[..end],
        None => slice,
    }
}

#[test]
fn trim_nul_padded() {
    assert_eq!(trim_nul(b"clip\0\0\0\0"), b"clip");
}

#[test]
fn trim_nul_unterminated() {
    assert_eq!(trim_nul(b"abcdefghijklmnop"), b"abcdefghijklmnop");
}

#[test]
fn vec3_from_le_floats() {
    let mut buf = Vec::new();
    for f in &[1.0f32, -2.5, 64.0] {
        buf.extend_from_slice(&f.to_le_bytes());
    }
    assert_eq!(slice_to_vec3(&buf), Vector3::new(1.0, -2.5, 64.0));
}
