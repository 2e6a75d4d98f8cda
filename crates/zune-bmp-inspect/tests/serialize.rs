/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde_json::json;
use zune_bmp_inspect::inspect_bmp;

#[test]
fn serialized_report_shape() {
    let mut data = vec![0_u8; 54];
    data[0..2].copy_from_slice(b"BM");
    data[2..6].copy_from_slice(&54_u32.to_le_bytes());
    data[14..18].copy_from_slice(&40_u32.to_le_bytes());
    data[28..30].copy_from_slice(&24_u16.to_le_bytes());

    let report = inspect_bmp(&data).unwrap();
    let value = serde_json::to_value(report).unwrap();

    assert_eq!(
        value,
        json!({
            "signatureTag": "BM",
            "byteOrder": "little-endian",
            "dibVariant": "BITMAPINFOHEADER 40 bytes",
            "hasRecognizedFileHeader": true,
            "bitsPerPixel": 24,
            "sizeIsConsistent": true,
            "declaredSizeBytes": 54,
            "actualSizeBytes": 54
        })
    );
}

#[test]
fn unknown_fields_serialize_as_null() {
    let report = inspect_bmp(&[0_u8; 14]).unwrap();
    let value = serde_json::to_value(report).unwrap();

    assert_eq!(value["signatureTag"], serde_json::Value::Null);
    assert_eq!(value["dibVariant"], serde_json::Value::Null);
    assert_eq!(value["byteOrder"], "unknown");
    assert_eq!(value["bitsPerPixel"], -1);
}
