/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A BMP header inspector
//!
//! This crate looks at the headers of BMP and OS/2 bitmap files and reports
//! what they claim to be, without decoding any pixels.
//!
//! Given untrusted bytes it determines
//! - The two letter file type signature (`BM`, `BA`, `CI`, `CP`, `IC`, `PT`)
//!   and the byte order it was written in
//! - Which DIB header revision follows the file header
//! - The bits per pixel field of that DIB header
//! - Whether the size declared in the file header matches the buffer length
//!
//! Buffers without a file header (e.g. clipboard bitmaps) are read as if they
//! start directly with a DIB header.
//!
//! # Features
//! - `no_std` capable, no allocations
//! - `std`: implements `std::error::Error` for the error type. Enabled by default
//! - `serde`: serialization of [`InspectionReport`]
//!
//! # Example
//! ```
//! use zune_bmp_inspect::{inspect_bmp, ByteOrder};
//!
//! let mut bytes = [0_u8; 30];
//! bytes[0..2].copy_from_slice(b"BM");
//! bytes[2..6].copy_from_slice(&30_u32.to_le_bytes());
//! bytes[14..18].copy_from_slice(&12_u32.to_le_bytes());
//! bytes[24..26].copy_from_slice(&24_u16.to_le_bytes());
//!
//! let report = inspect_bmp(&bytes).unwrap();
//!
//! assert_eq!(report.byte_order, ByteOrder::LittleEndian);
//! assert_eq!(report.bits_per_pixel, 24);
//! assert!(report.size_is_consistent);
//! ```
//!
//! # Security
//!
//! Every field is bounds checked before it is read, a buffer too short for
//! the fourteen byte file header is rejected with
//! [`BmpInspectErrors::BufferTooSmall`].

#![cfg_attr(not(feature = "std"), no_std)]

pub use crate::common::{BmpSignature, ByteOrder, DibHeaderVariant};
pub use crate::errors::BmpInspectErrors;
pub use crate::header::RawFileHeader;
pub use crate::inspector::{
    check_size_only, inspect_bmp, inspect_bmp_with_options, BmpInspector, InspectionReport,
    UNKNOWN_BITS_PER_PIXEL
};
pub use crate::options::InspectOptions;

mod common;
mod errors;
mod header;
mod inspector;
mod options;
mod serde;
