/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The 14 byte file header and bounds checked field access
//!
//! Layout of the file header, all fields little endian
//!
//! | Field        | Offset | Width |
//! |--------------|--------|-------|
//! | signature    | 0      | 2     |
//! | file size    | 2      | 4     |
//! | reserved 1   | 6      | 2     |
//! | reserved 2   | 8      | 2     |
//! | data offset  | 10     | 4     |
use zune_core::bytestream::{ZCursor, ZReader};

use crate::errors::BmpInspectErrors;

/// Size of the file header preceding the DIB header
pub(crate) const FILE_HEADER_SIZE: usize = 14;

const SIGNATURE_OFFSET: usize = 0;
const FILE_SIZE_OFFSET: usize = 2;
const RESERVED1_OFFSET: usize = 6;
const RESERVED2_OFFSET: usize = 8;
const DATA_OFFSET_OFFSET: usize = 10;

/// Reads fixed width little endian integers at absolute offsets.
///
/// Each read checks that `offset..offset+width` lies inside the buffer
/// before touching the stream.
pub(crate) struct FieldReader<'a> {
    stream: ZReader<ZCursor<&'a [u8]>>,
    len:    usize
}

impl<'a> FieldReader<'a> {
    pub fn new(data: &'a [u8]) -> FieldReader<'a> {
        FieldReader {
            stream: ZReader::new(ZCursor::new(data)),
            len:    data.len()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether `width` bytes can be read at `offset`
    #[inline]
    pub fn fits(&self, offset: usize, width: usize) -> bool {
        offset
            .checked_add(width)
            .map_or(false, |end| end <= self.len)
    }

    fn ensure(&self, offset: usize, width: usize) -> Result<(), BmpInspectErrors> {
        if !self.fits(offset, width) {
            return Err(BmpInspectErrors::BufferTooSmall(
                offset.saturating_add(width),
                self.len
            ));
        }
        Ok(())
    }

    pub fn u16_at(&mut self, offset: usize) -> Result<u16, BmpInspectErrors> {
        self.ensure(offset, 2)?;
        self.stream.set_position(offset)?;
        Ok(self.stream.get_u16_le_err()?)
    }

    pub fn u32_at(&mut self, offset: usize) -> Result<u32, BmpInspectErrors> {
        self.ensure(offset, 4)?;
        self.stream.set_position(offset)?;
        Ok(self.stream.get_u32_le_err()?)
    }
}

/// The file header found at the start of BMP files.
///
/// Values are stored as read, the signature is not yet matched
/// against known tags.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RawFileHeader {
    /// The two signature bytes read as a little endian integer
    pub signature:     u16,
    /// Total file size declared by the file
    pub declared_size: u32,
    pub reserved1:     u16,
    pub reserved2:     u16,
    /// Offset to the pixel array
    pub data_offset:   u32
}

impl RawFileHeader {
    /// Read the file header from the start of `data`
    ///
    /// # Returns
    /// - The header
    /// - Err(BufferTooSmall) if `data` is shorter than 14 bytes
    pub fn read(data: &[u8]) -> Result<RawFileHeader, BmpInspectErrors> {
        let mut reader = FieldReader::new(data);
        RawFileHeader::read_from(&mut reader)
    }

    pub(crate) fn read_from(reader: &mut FieldReader) -> Result<RawFileHeader, BmpInspectErrors> {
        if reader.len() < FILE_HEADER_SIZE {
            return Err(BmpInspectErrors::BufferTooSmall(
                FILE_HEADER_SIZE,
                reader.len()
            ));
        }

        Ok(RawFileHeader {
            signature:     reader.u16_at(SIGNATURE_OFFSET)?,
            declared_size: reader.u32_at(FILE_SIZE_OFFSET)?,
            reserved1:     reader.u16_at(RESERVED1_OFFSET)?,
            reserved2:     reader.u16_at(RESERVED2_OFFSET)?,
            data_offset:   reader.u32_at(DATA_OFFSET_OFFSET)?
        })
    }

    /// Read only the declared file size, skipping the rest of the header.
    ///
    /// Fails under the same condition as [`RawFileHeader::read`]
    pub fn read_declared_size(data: &[u8]) -> Result<u32, BmpInspectErrors> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(BmpInspectErrors::BufferTooSmall(
                FILE_HEADER_SIZE,
                data.len()
            ));
        }
        FieldReader::new(data).u32_at(FILE_SIZE_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_all_fields() {
        let data = [
            b'B', b'M', 0x46, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x36, 0x00, 0x00, 0x00
        ];
        let header = RawFileHeader::read(&data).unwrap();

        assert_eq!(header.signature, 0x4D42);
        assert_eq!(header.declared_size, 0x46);
        assert_eq!(header.reserved1, 0x0201);
        assert_eq!(header.reserved2, 0x0403);
        assert_eq!(header.data_offset, 0x36);
    }

    #[test]
    fn short_buffers_fail() {
        for len in 0..FILE_HEADER_SIZE {
            let data = [0_u8; FILE_HEADER_SIZE];
            assert!(matches!(
                RawFileHeader::read(&data[..len]),
                Err(BmpInspectErrors::BufferTooSmall(14, found)) if found == len
            ));
            assert!(RawFileHeader::read_declared_size(&data[..len]).is_err());
        }
    }

    #[test]
    fn field_reads_are_bounds_checked() {
        let data = [0xFF_u8; 6];
        let mut reader = FieldReader::new(&data);

        assert_eq!(reader.u32_at(2).unwrap(), u32::MAX);
        assert!(reader.u32_at(3).is_err());
        assert!(reader.u16_at(5).is_err());
        assert!(reader.u16_at(usize::MAX).is_err());
        assert!(!reader.fits(usize::MAX, 2));
    }
}
