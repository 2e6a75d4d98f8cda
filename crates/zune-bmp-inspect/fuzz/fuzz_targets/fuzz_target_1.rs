/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let full = zune_bmp_inspect::inspect_bmp(data);
    let fast = zune_bmp_inspect::check_size_only(data);

    match (full, fast) {
        (Ok(report), Ok(differs)) => assert_eq!(report.sizes_differ(), differs),
        (Err(_), Err(_)) => {}
        _ => panic!("entry points disagree on buffer length")
    }
});
