// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured certificate construction.
//!
//! Raw bytes rarely get past the version and count checks, so this target
//! builds certificates from arbitrary typed parts instead. Whatever
//! construction accepts must encode (if it has modules) and decode back to
//! an equal certificate.

#![no_main]

use arbitrary::Arbitrary;
use cennznut::{Cennznut, CodecError, ContractPermission, EntryKind, Method, Module};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzMethod {
    name: String,
    cooldown: Option<u32>,
    constraints: Option<Vec<u8>>,
}

#[derive(Debug, Arbitrary)]
struct FuzzModule {
    name: String,
    cooldown: Option<u32>,
    methods: Vec<FuzzMethod>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    modules: Vec<FuzzModule>,
    contracts: Vec<([u8; 32], Option<u32>)>,
}

fuzz_target!(|input: FuzzInput| {
    let modules = input
        .modules
        .into_iter()
        .map(|m| Module {
            name: m.name,
            block_cooldown: m.cooldown,
            methods: m
                .methods
                .into_iter()
                .map(|f| Method {
                    name: f.name,
                    block_cooldown: f.cooldown,
                    constraints: f.constraints,
                })
                .collect(),
        })
        .collect();
    let contracts = input
        .contracts
        .into_iter()
        .map(|(address, block_cooldown)| ContractPermission {
            address,
            block_cooldown,
        })
        .collect();

    let Ok(cennznut) = Cennznut::new(modules, contracts) else {
        return;
    };

    match cennznut.encode() {
        Ok(bytes) => {
            let decoded = Cennznut::decode(&bytes).expect("an encoded certificate decodes");
            assert_eq!(decoded, cennznut);
        }
        Err(err) => {
            // Construction accepts everything except an empty module list.
            assert!(cennznut.modules().is_empty());
            assert_eq!(
                err,
                CodecError::EmptyCollection {
                    kind: EntryKind::Module
                }
            );
        }
    }
});
