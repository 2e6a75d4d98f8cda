/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Inspector options

/// Options respected by the inspector
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InspectOptions {
    headerless_fallback: bool
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            headerless_fallback: true
        }
    }
}

impl InspectOptions {
    /// Create options where only buffers with a recognized
    /// file header get their DIB header inspected
    pub fn new_strict() -> InspectOptions {
        InspectOptions::default().set_headerless_fallback(false)
    }

    /// Return true if buffers without a known signature are
    /// read as starting directly with a DIB header
    pub const fn get_headerless_fallback(&self) -> bool {
        self.headerless_fallback
    }

    /// Whether buffers without a known signature should be treated
    /// as a bare DIB header (as found in clipboard bitmaps and
    /// in-memory fragments)
    ///
    /// When disabled such buffers report no DIB variant and
    /// an undetermined bits per pixel.
    ///
    /// # Arguments
    ///
    /// * `yes`: Whether to enable the fallback, default is `true`
    ///
    /// returns: InspectOptions
    pub fn set_headerless_fallback(mut self, yes: bool) -> Self {
        self.headerless_fallback = yes;
        self
    }
}
