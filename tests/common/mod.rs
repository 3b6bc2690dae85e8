//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cennznut::binary::NAME_WIDTH;
use cennznut::{Cennznut, ContractAddress, ContractPermission, Method, Module};

// ============================================================================
// WIRE FIXTURES
// ============================================================================

/// Module "module_test" with cooldown 86400 and one method "method_test",
/// no contracts.
pub const MODULE_COOLDOWN: [u8; 74] = [
    0, 0, 0, 1, 109, 111, 100, 117, 108, 101, 95, 116, 101, 115, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 128, 81, 1, 0, 0, 109, 101, 116, 104, 111, 100, 95, 116, 101,
    115, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Contract address used by the construction fixture.
pub const CHECK_ADDRESS: ContractAddress = [
    27, 137, 65, 29, 182, 25, 157, 61, 226, 13, 230, 14, 111, 6, 25, 186, 227, 117, 177, 244, 172,
    147, 40, 119, 209, 78, 13, 109, 236, 119, 205, 202,
];

pub const CHECK_COOLDOWN: u32 = 270_549_120;

// ============================================================================
// BUILDERS
// ============================================================================

/// A zero-padded name field.
pub fn name_field(name: &str) -> Vec<u8> {
    let mut field = name.as_bytes().to_vec();
    field.resize(NAME_WIDTH, 0);
    field
}

/// Two modules and one contract, assembled directly rather than decoded.
pub fn check_cennznut() -> Cennznut {
    Cennznut::builder()
        .module(
            Module::new("test_module_check1")
                .block_cooldown(CHECK_COOLDOWN)
                .method(Method::new("test_method_check1").block_cooldown(CHECK_COOLDOWN))
                .method(Method::new("test_method_check2").block_cooldown(270_545_024)),
        )
        .module(
            Module::new("test_module_check2")
                .method(Method::new("test_method_check21").block_cooldown(CHECK_COOLDOWN)),
        )
        .contract(ContractPermission::new(&CHECK_ADDRESS).block_cooldown(CHECK_COOLDOWN))
        .build()
        .expect("fixture certificate is valid")
}

/// Hand-assemble a certificate's bytes from already-encoded parts.
pub fn certificate_bytes(modules: &[Vec<u8>], contracts: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = vec![0, 0, (modules.len() - 1) as u8];
    for module in modules {
        bytes.extend_from_slice(module);
    }
    bytes.push(contracts.len() as u8);
    for contract in contracts {
        bytes.extend_from_slice(contract);
    }
    bytes
}

/// Bytes of a module without cooldown holding plain methods.
pub fn module_bytes(name: &str, methods: &[&str]) -> Vec<u8> {
    let mut bytes = vec![((methods.len() - 1) as u8) << 1];
    bytes.extend(name_field(name));
    for method in methods {
        bytes.push(0);
        bytes.extend(name_field(method));
    }
    bytes
}
