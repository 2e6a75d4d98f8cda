/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// A BMP file may start with a 14 byte file header whose first two bytes are
// one of six tags (BM, BA, CI, CP, IC, PT). Some writers stored that tag
// byte swapped, so we try the little endian representation first and the
// big endian one second.
//
// After the file header comes the DIB header whose first four bytes are its
// own size, the size is what tells the revisions apart
//
// - 12  BITMAPCOREHEADER (same layout as OS21XBITMAPHEADER)
// - 64  OS22XBITMAPHEADER64
// - 40  BITMAPINFOHEADER
// - 108 BITMAPV4HEADER
// - 124 BITMAPV5HEADER
//
// Clipboard bitmaps and in-memory fragments have no file header, the buffer
// starts with the DIB header. When no tag matches we read the size at
// offset 0 instead of 14.
//
// The bits per pixel field is read at absolute offset 24 for the 12/64 byte
// headers and 28 for the 40/108/124 byte ones, regardless of which path
// found the header.

use log::trace;

use crate::common::{BmpSignature, ByteOrder, DibHeaderVariant};
use crate::errors::BmpInspectErrors;
use crate::header::{FieldReader, RawFileHeader, FILE_HEADER_SIZE};
use crate::options::InspectOptions;

/// Value of [`InspectionReport::bits_per_pixel`] when it couldn't be determined
pub const UNKNOWN_BITS_PER_PIXEL: i16 = -1;

/// Offset of the DIB header size when the buffer has no file header
const HEADERLESS_DIB_OFFSET: usize = 0;

/// Structural information about a BMP buffer
///
/// Unknown or inconsistent values are reported here, they are
/// not errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InspectionReport {
    /// The recognized file signature, if any
    pub signature:          Option<BmpSignature>,
    /// Byte order the signature was found in
    pub byte_order:         ByteOrder,
    /// The DIB header revision, `None` if the header size is not known
    pub dib_variant:        Option<DibHeaderVariant>,
    /// Whether the buffer starts with a recognized file header
    pub has_file_header:    bool,
    /// Bits per pixel, or [`UNKNOWN_BITS_PER_PIXEL`]
    pub bits_per_pixel:     i16,
    /// True if the declared size is non-zero and equals the buffer length
    pub size_is_consistent: bool,
    /// File size as declared in the file header
    pub declared_size:      i32,
    /// Length of the inspected buffer, saturating at `i32::MAX`
    pub actual_size:        i32,
    /// Offset to the pixel array, as declared in the file header
    pub data_offset:        u32
}

impl InspectionReport {
    /// The two character signature, e.g `"BM"`
    pub fn signature_tag(&self) -> Option<&'static str> {
        self.signature.map(BmpSignature::as_str)
    }

    /// DIB header name and size, e.g `"BITMAPINFOHEADER 40 bytes"`
    pub fn dib_description(&self) -> Option<&'static str> {
        self.dib_variant.map(DibHeaderVariant::description)
    }

    /// Whether declared and actual sizes disagree, the same answer
    /// [`check_size_only`] gives for the buffer
    pub const fn sizes_differ(&self) -> bool {
        !self.size_is_consistent
    }
}

/// A BMP inspector
///
/// Holds a reference to the buffer for the duration of the
/// inspection, the buffer is never modified.
///
/// ```
/// use zune_bmp_inspect::BmpInspector;
///
/// fn main() -> Result<(), zune_bmp_inspect::BmpInspectErrors> {
///     let bytes = [b'B', b'M', 14, 0, 0, 0, 0, 0, 0, 0, 14, 0, 0, 0];
///     let inspector = BmpInspector::new(&bytes);
///
///     let report = inspector.inspect()?;
///     assert_eq!(report.signature_tag(), Some("BM"));
///     assert!(!inspector.check_size_only()?);
///     Ok(())
/// }
/// ```
pub struct BmpInspector<'a> {
    data:    &'a [u8],
    options: InspectOptions
}

impl<'a> BmpInspector<'a> {
    /// Create a new inspector over `data` with default options
    pub fn new(data: &'a [u8]) -> BmpInspector<'a> {
        BmpInspector::new_with_options(data, InspectOptions::default())
    }

    /// Create a new inspector with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer to inspect
    /// * `options`: Inspection options
    pub fn new_with_options(data: &'a [u8], options: InspectOptions) -> BmpInspector<'a> {
        BmpInspector { data, options }
    }

    /// Inspect the buffer headers
    ///
    /// # Returns
    /// - Ok(report): All information that could be gathered
    /// - Err(BufferTooSmall): The buffer is shorter than the 14 byte file header
    pub fn inspect(&self) -> Result<InspectionReport, BmpInspectErrors> {
        let mut reader = FieldReader::new(self.data);
        let header = RawFileHeader::read_from(&mut reader)?;

        let (byte_order, signature) = classify_signature(header.signature);
        let has_file_header = signature.is_some();

        trace!("Signature: {:#06X} ({:?})", header.signature, signature);
        trace!("Byte order: {}", byte_order.as_str());

        let dib_variant = if has_file_header || self.options.get_headerless_fallback() {
            detect_dib_header(&mut reader, has_file_header)
        } else {
            None
        };
        let bits_per_pixel = read_bits_per_pixel(&mut reader, dib_variant);

        trace!("DIB header: {:?}", dib_variant);
        trace!("Bits per pixel: {}", bits_per_pixel);

        let size_is_consistent = is_size_consistent(header.declared_size, self.data.len());

        trace!(
            "Declared size: {}, actual size: {}",
            header.declared_size,
            self.data.len()
        );

        Ok(InspectionReport {
            signature,
            byte_order,
            dib_variant,
            has_file_header,
            bits_per_pixel,
            size_is_consistent,
            declared_size: header.declared_size as i32,
            actual_size: actual_size(self.data.len()),
            data_offset: header.data_offset
        })
    }

    /// Check whether declared and actual size differ without
    /// looking at anything but the size field
    ///
    /// A declared size of zero always differs.
    ///
    /// # Returns
    /// - Ok(true): sizes differ or the declared size is zero
    /// - Ok(false): sizes match
    /// - Err(BufferTooSmall): The buffer is shorter than the 14 byte file header
    pub fn check_size_only(&self) -> Result<bool, BmpInspectErrors> {
        let declared = RawFileHeader::read_declared_size(self.data)?;
        Ok(!is_size_consistent(declared, self.data.len()))
    }
}

/// Inspect a buffer with default options
///
/// See [`BmpInspector::inspect`]
pub fn inspect_bmp(data: &[u8]) -> Result<InspectionReport, BmpInspectErrors> {
    BmpInspector::new(data).inspect()
}

/// Inspect a buffer with the given options
///
/// See [`BmpInspector::inspect`]
pub fn inspect_bmp_with_options(
    data: &[u8], options: InspectOptions
) -> Result<InspectionReport, BmpInspectErrors> {
    BmpInspector::new_with_options(data, options).inspect()
}

/// Returns true if the declared size is zero or differs from the buffer length
///
/// See [`BmpInspector::check_size_only`]
pub fn check_size_only(data: &[u8]) -> Result<bool, BmpInspectErrors> {
    BmpInspector::new(data).check_size_only()
}

/// Match the signature field against known tags, little endian first
fn classify_signature(value: u16) -> (ByteOrder, Option<BmpSignature>) {
    if let Some(signature) = BmpSignature::from_le_value(value) {
        return (ByteOrder::LittleEndian, Some(signature));
    }
    if let Some(signature) = BmpSignature::from_be_value(value) {
        return (ByteOrder::BigEndian, Some(signature));
    }
    (ByteOrder::Unknown, None)
}

fn detect_dib_header(reader: &mut FieldReader, has_file_header: bool) -> Option<DibHeaderVariant> {
    let offset = if has_file_header {
        FILE_HEADER_SIZE
    } else {
        HEADERLESS_DIB_OFFSET
    };
    if !reader.fits(offset, 4) {
        trace!("No room for a DIB header size at offset {}", offset);
        return None;
    }
    let size = reader.u32_at(offset).ok()?;

    trace!("DIB header size: {}", size);

    DibHeaderVariant::from_size(size)
}

fn read_bits_per_pixel(reader: &mut FieldReader, variant: Option<DibHeaderVariant>) -> i16 {
    let Some(variant) = variant else {
        return UNKNOWN_BITS_PER_PIXEL;
    };
    let offset = variant.bits_per_pixel_offset();

    if !reader.fits(offset, 2) {
        trace!("Truncated {}, no bits per pixel field", variant.name());
        return UNKNOWN_BITS_PER_PIXEL;
    }
    reader
        .u16_at(offset)
        .map_or(UNKNOWN_BITS_PER_PIXEL, |depth| depth as i16)
}

fn is_size_consistent(declared: u32, actual: usize) -> bool {
    declared != 0 && usize::try_from(declared).map_or(false, |declared| declared == actual)
}

fn actual_size(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
