// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width text fields.
//!
//! Names are the only variable content squeezed into fixed-width fields.
//! Writing must either fail or produce exactly `width` bytes that read back
//! to the same text, and reading arbitrary bytes must never panic.

#![no_main]

use cennznut::binary::{read_fixed_text, write_fixed_text, NAME_WIDTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Property 1: reading arbitrary field contents never panics
    if let Ok(text) = read_fixed_text(data, 0, NAME_WIDTH) {
        // A field that reads cleanly is in canonical form
        let mut buf = Vec::new();
        write_fixed_text(&text, NAME_WIDTH, &mut buf).expect("read text always fits");
        assert_eq!(&buf[..], &data[..NAME_WIDTH]);
    }

    // Property 2: write then read is the identity for anything writable
    if let Ok(text) = std::str::from_utf8(data) {
        let mut buf = Vec::new();
        if write_fixed_text(text, NAME_WIDTH, &mut buf).is_ok() {
            assert_eq!(buf.len(), NAME_WIDTH);
            assert_eq!(
                read_fixed_text(&buf, 0, NAME_WIDTH).expect("written field reads back"),
                text
            );
        }
    }
});
