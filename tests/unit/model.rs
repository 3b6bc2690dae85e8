//! Tests for certificate construction and lookups.

use crate::common::{check_cennznut, CHECK_ADDRESS, CHECK_COOLDOWN};
use cennznut::binary::MAX_METHODS;
use cennznut::{Cennznut, CodecError, ContractPermission, EntryKind, Method, Module};

#[test]
fn test_direct_construction_lookups() {
    let cennznut = check_cennznut();

    let module = cennznut.get_module("test_module_check1").unwrap();
    assert_eq!(module.name, "test_module_check1");
    assert_eq!(module.cooldown_blocks(), CHECK_COOLDOWN);
    assert_eq!(module.methods.len(), 2);
    let method = module.get_method("test_method_check2").unwrap();
    assert_eq!(method.cooldown_blocks(), 270_545_024);

    let contract = cennznut.get_contract(&CHECK_ADDRESS).unwrap();
    assert_eq!(contract.cooldown_blocks(), CHECK_COOLDOWN);
    assert!(cennznut.verify_contract(&CHECK_ADDRESS, None));
}

#[test]
fn test_unknown_contract_is_not_an_error() {
    let cennznut = check_cennznut();
    let mut other = CHECK_ADDRESS;
    other[31] ^= 1;
    assert!(cennznut.get_contract(&other).is_none());
    assert!(!cennznut.verify_contract(&other, None));
}

#[test]
fn test_empty_name_lookups() {
    let cennznut = check_cennznut();
    assert!(cennznut.get_module("").is_none());
    assert!(!cennznut.verify_method("", "", None));
}

#[test]
fn test_zero_address_without_wildcard_entry() {
    let cennznut = check_cennznut();
    assert!(!cennznut.verify_contract(&[0u8; 32], None));
    assert!(cennznut.validate_contract(&[0u8; 32]).is_err());
}

#[test]
fn test_missing_cooldown_reads_as_zero() {
    let cennznut = check_cennznut();
    let module = cennznut.get_module("test_module_check2").unwrap();
    assert_eq!(module.block_cooldown, None);
    assert_eq!(module.cooldown_blocks(), 0);
}

#[test]
fn test_method_limit() {
    let methods: Vec<Method> = (0..=MAX_METHODS)
        .map(|i| Method::new(&format!("m{}", i)))
        .collect();
    let module = Module::new("big").methods(methods);
    assert_eq!(
        Cennznut::new(vec![module], vec![]),
        Err(CodecError::TooManyEntries {
            kind: EntryKind::Method,
            count: MAX_METHODS + 1,
            max: MAX_METHODS,
        })
    );
}

#[test]
fn test_contract_limit() {
    let contracts: Vec<ContractPermission> = (0..=255u8)
        .map(|i| ContractPermission::new(&[i; 32]))
        .collect();
    assert!(matches!(
        Cennznut::new(vec![], contracts),
        Err(CodecError::TooManyEntries {
            kind: EntryKind::Contract,
            count: 256,
            max: 255,
        })
    ));
}

#[test]
fn test_empty_names_are_ordinary_keys() {
    let cennznut = Cennznut::builder()
        .module(Module::new("").block_cooldown(7).method(Method::new("")))
        .module(Module::new("named").method(Method::new("call")))
        .contract(ContractPermission::new(&[0u8; 32]))
        .build()
        .unwrap();

    let bytes = cennznut.encode().unwrap();
    // An empty name is a field of padding only.
    assert!(bytes[4..36].iter().all(|&b| b == 0));

    let decoded = Cennznut::decode(&bytes).unwrap();
    assert_eq!(decoded, cennznut);
    assert_eq!(decoded.get_module("").unwrap().cooldown_blocks(), 7);
    assert!(decoded.get_module("").unwrap().get_method("").is_some());
    assert!(decoded.verify_method("", "", None));
    assert!(!decoded.verify_method("", "call", None));
    assert!(decoded.get_contract(&[0u8; 32]).is_some());
    assert!(decoded.verify_contract(&[0u8; 32], None));
}
