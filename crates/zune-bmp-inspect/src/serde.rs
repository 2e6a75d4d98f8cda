/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::common::{BmpSignature, ByteOrder, DibHeaderVariant};
use crate::inspector::InspectionReport;

impl Serialize for BmpSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for ByteOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for DibHeaderVariant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.description())
    }
}

impl Serialize for InspectionReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("InspectionReport", 8)?;

        state.serialize_field("signatureTag", &self.signature)?;
        state.serialize_field("byteOrder", &self.byte_order)?;
        state.serialize_field("dibVariant", &self.dib_variant)?;
        state.serialize_field("hasRecognizedFileHeader", &self.has_file_header)?;
        state.serialize_field("bitsPerPixel", &self.bits_per_pixel)?;
        state.serialize_field("sizeIsConsistent", &self.size_is_consistent)?;
        state.serialize_field("declaredSizeBytes", &self.declared_size)?;
        state.serialize_field("actualSizeBytes", &self.actual_size)?;

        state.end()
    }
}
