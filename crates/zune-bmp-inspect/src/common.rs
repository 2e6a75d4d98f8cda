/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// File type signatures of the BMP family
///
/// * BM: Windows 3.1 or later
/// * BA: OS/2 bitmap array
/// * CI: OS/2 color icon
/// * CP: OS/2 color pointer
/// * IC: OS/2 icon
/// * PT: OS/2 pointer
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BmpSignature {
    BM,
    BA,
    CI,
    CP,
    IC,
    PT
}

impl BmpSignature {
    /// All known signatures, in the order they are matched
    pub const ALL: [BmpSignature; 6] = [
        BmpSignature::BM,
        BmpSignature::BA,
        BmpSignature::CI,
        BmpSignature::CP,
        BmpSignature::IC,
        BmpSignature::PT
    ];

    /// The two ASCII bytes of the signature, in reading order
    pub const fn tag(self) -> [u8; 2] {
        match self {
            BmpSignature::BM => *b"BM",
            BmpSignature::BA => *b"BA",
            BmpSignature::CI => *b"CI",
            BmpSignature::CP => *b"CP",
            BmpSignature::IC => *b"IC",
            BmpSignature::PT => *b"PT"
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BmpSignature::BM => "BM",
            BmpSignature::BA => "BA",
            BmpSignature::CI => "CI",
            BmpSignature::CP => "CP",
            BmpSignature::IC => "IC",
            BmpSignature::PT => "PT"
        }
    }

    /// Value of the signature field when the tag is stored little endian,
    /// e.g `0x4D42` for `BM`
    pub const fn le_value(self) -> u16 {
        u16::from_le_bytes(self.tag())
    }

    /// Value of the signature field when the tag is stored big endian,
    /// e.g `0x424D` for `BM`
    pub const fn be_value(self) -> u16 {
        u16::from_be_bytes(self.tag())
    }

    /// Match a signature field (read little endian) against the
    /// little endian representation of all known tags
    pub fn from_le_value(value: u16) -> Option<BmpSignature> {
        BmpSignature::ALL
            .into_iter()
            .find(|sig| sig.le_value() == value)
    }

    /// Match a signature field (read little endian) against the
    /// big endian representation of all known tags
    pub fn from_be_value(value: u16) -> Option<BmpSignature> {
        BmpSignature::ALL
            .into_iter()
            .find(|sig| sig.be_value() == value)
    }
}

/// Byte order the file signature was found in
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
    /// No known signature was found
    #[default]
    Unknown
}

impl ByteOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
            ByteOrder::Unknown => "unknown"
        }
    }
}

/// DIB header revisions, identified by the size
/// stored in their first four bytes
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DibHeaderVariant {
    /// Windows 2.x / OS/2 1.x header, 12 bytes
    Core,
    /// OS/2 2.x header, 64 bytes
    Os2V2,
    /// Windows 3.x header, 40 bytes
    Info,
    /// 108 bytes, adds color masks and color space
    V4,
    /// 124 bytes, adds ICC profile data
    V5
}

impl DibHeaderVariant {
    pub fn from_size(size: u32) -> Option<DibHeaderVariant> {
        match size {
            12 => Some(DibHeaderVariant::Core),
            64 => Some(DibHeaderVariant::Os2V2),
            40 => Some(DibHeaderVariant::Info),
            108 => Some(DibHeaderVariant::V4),
            124 => Some(DibHeaderVariant::V5),
            _ => None
        }
    }

    /// Size of the header in bytes
    pub const fn size(self) -> u32 {
        match self {
            DibHeaderVariant::Core => 12,
            DibHeaderVariant::Os2V2 => 64,
            DibHeaderVariant::Info => 40,
            DibHeaderVariant::V4 => 108,
            DibHeaderVariant::V5 => 124
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            // BITMAPCOREHEADER and OS21XBITMAPHEADER share the same layout
            DibHeaderVariant::Core => "BITMAPCOREHEADER",
            DibHeaderVariant::Os2V2 => "OS22XBITMAPHEADER64",
            DibHeaderVariant::Info => "BITMAPINFOHEADER",
            DibHeaderVariant::V4 => "BITMAPV4HEADER",
            DibHeaderVariant::V5 => "BITMAPV5HEADER"
        }
    }

    /// Name and size, e.g `BITMAPINFOHEADER 40 bytes`
    pub const fn description(self) -> &'static str {
        match self {
            DibHeaderVariant::Core => "BITMAPCOREHEADER 12 bytes",
            DibHeaderVariant::Os2V2 => "OS22XBITMAPHEADER64 64 bytes",
            DibHeaderVariant::Info => "BITMAPINFOHEADER 40 bytes",
            DibHeaderVariant::V4 => "BITMAPV4HEADER 108 bytes",
            DibHeaderVariant::V5 => "BITMAPV5HEADER 124 bytes"
        }
    }

    /// Offset from the start of the buffer of the
    /// two byte bits per pixel field
    pub const fn bits_per_pixel_offset(self) -> usize {
        match self {
            DibHeaderVariant::Core | DibHeaderVariant::Os2V2 => 24,
            // V4 and V5 append fields after the 40 byte layout,
            // the depth field stays where it was
            DibHeaderVariant::Info | DibHeaderVariant::V4 | DibHeaderVariant::V5 => 28
        }
    }
}
