/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Create an in-memory 24 bit BMP of `width` x `height` pixels
/// with a BITMAPINFOHEADER and zeroed pixels
pub fn sample_bmp(width: u32, height: u32) -> Vec<u8> {
    // rows are padded to four bytes
    let stride = (width * 3).next_multiple_of(4);
    let data_offset = 14 + 40;
    let file_size = data_offset + stride * height;

    let mut data = vec![0_u8; file_size as usize];

    data[0..2].copy_from_slice(b"BM");
    data[2..6].copy_from_slice(&file_size.to_le_bytes());
    data[10..14].copy_from_slice(&data_offset.to_le_bytes());
    data[14..18].copy_from_slice(&40_u32.to_le_bytes());
    data[18..22].copy_from_slice(&width.to_le_bytes());
    data[22..26].copy_from_slice(&height.to_le_bytes());
    // planes
    data[26..28].copy_from_slice(&1_u16.to_le_bytes());
    data[28..30].copy_from_slice(&24_u16.to_le_bytes());

    data
}

#[cfg(test)]
mod tests {
    use zune_bmp_inspect::inspect_bmp;

    use super::sample_bmp;

    #[test]
    fn sample_is_consistent() {
        let data = sample_bmp(3, 2);
        let report = inspect_bmp(&data).unwrap();

        assert_eq!(data.len(), 54 + 12 * 2);
        assert!(report.size_is_consistent);
        assert_eq!(report.bits_per_pixel, 24);
    }
}
