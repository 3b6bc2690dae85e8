// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Certificate decoding under adversarial input.
//!
//! Certificates arrive from whoever holds them. The worst a crafted buffer
//! may do is produce an error: counts that promise more entries than exist,
//! reserved header bits, names with bytes after their padding. None of it
//! should crash.

#![no_main]

use cennznut::decode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Property 1: decode never panics
    let Ok(cennznut) = decode(data) else {
        return;
    };

    // Property 2: anything accepted re-encodes to the exact same bytes,
    // otherwise signatures over the original bytes would not survive
    let reencoded = cennznut
        .encode()
        .expect("a decoded certificate always encodes");
    assert_eq!(reencoded, data, "re-encoding changed the bytes");
    assert_eq!(cennznut.encoded_len(), data.len());

    // Property 3: every decoded entry is found by exact lookup
    for module in cennznut.modules() {
        for method in &module.methods {
            assert!(cennznut.verify_method(&module.name, &method.name, None));
        }
    }
    for contract in cennznut.contracts() {
        assert!(cennznut.verify_contract(&contract.address, None));
    }
});
