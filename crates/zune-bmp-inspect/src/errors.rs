/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;

/// Errors that can occur during inspection
///
/// Unknown signatures, unknown DIB headers and size mismatches
/// are not errors, they are reported in [`InspectionReport`](crate::InspectionReport)
#[non_exhaustive]
pub enum BmpInspectErrors {
    /// The buffer is too small to hold a field,
    /// expected at least a size but got another size
    BufferTooSmall(usize, usize),
    IoErrors(ZByteIoError)
}

impl Debug for BmpInspectErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected at least {} bytes but found {}",
                    expected, found
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpInspectErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpInspectErrors {}

impl From<ZByteIoError> for BmpInspectErrors {
    fn from(value: ZByteIoError) -> Self {
        BmpInspectErrors::IoErrors(value)
    }
}
