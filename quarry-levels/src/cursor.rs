//! A bounds-checked reader for the parts of a file that are addressed by offsets
//! stored in the file itself, where lengths can't be validated up front.

use na::Vector3;

use crate::helpers::*;
use crate::types::{ParseError, Result};

/// Reads little-endian primitives from a byte buffer, either sequentially or after seeking.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { data, pos: 0 }
    }

    /// Create a cursor positioned at `offset` into `data`.
    pub fn at(data: &'a [u8], offset: usize) -> Result<ByteCursor<'a>> {
        let mut cursor = ByteCursor::new(data);
        cursor.seek(offset)?;
        Ok(cursor)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Move to an absolute offset. Seeking to exactly the end is allowed.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(ParseError::UnexpectedEof {
                offset,
                needed: 0,
                len: self.data.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or(ParseError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                len: self.data.len(),
            })?;

        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(slice_to_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(slice_to_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(slice_to_i32(self.read_bytes(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(slice_to_f32(self.read_bytes(4)?))
    }

    pub fn read_vec3(&mut self) -> Result<Vector3<f32>> {
        Ok(slice_to_vec3(self.read_bytes(12)?))
    }

    /// Read a fixed-length, NUL padded ASCII field. The field doesn't need to contain a NUL.
    pub fn read_fixed_str(&mut self, len: usize) -> Result<String> {
        let raw = self.read_bytes(len)?;
        Ok(String::from_utf8_lossy(trim_nul(raw)).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_reads() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&7u32.to_le_bytes());
        buf.extend_from_slice(&(-3i32).to_le_bytes());
        buf.extend_from_slice(&0.5f32.to_le_bytes());
        buf.extend_from_slice(&513u16.to_le_bytes());

        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_u32().unwrap(), 7);
        assert_eq!(cursor.read_i32().unwrap(), -3);
        assert_eq!(cursor.read_f32().unwrap(), 0.5);
        assert_eq!(cursor.read_u16().unwrap(), 513);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn read_past_end_fails() {
        let buf = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&buf);
        match cursor.read_u32() {
            Err(ParseError::UnexpectedEof { offset, needed, len }) => {
                assert_eq!((offset, needed, len), (0, 4, 3));
            }
            other => panic!("expected eof, got {:?}", other),
        }
        // A failed read doesn't move the cursor.
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn seek_out_of_range_fails() {
        let buf = [0u8; 4];
        assert!(ByteCursor::at(&buf, 4).is_ok());
        assert!(ByteCursor::at(&buf, 5).is_err());
    }

    #[test]
    fn fixed_str_unterminated() {
        let mut buf = b"sixteen_chars_xx".to_vec();
        buf.push(b'!');
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_fixed_str(16).unwrap(), "sixteen_chars_xx");
        assert_eq!(cursor.read_u8().unwrap(), b'!');
    }

    #[test]
    fn fixed_str_padded() {
        let buf = b"sky1\0\0\0\0\0\0\0\0\0\0\0\0";
        let mut cursor = ByteCursor::new(buf);
        assert_eq!(cursor.read_fixed_str(16).unwrap(), "sky1");
    }
}
