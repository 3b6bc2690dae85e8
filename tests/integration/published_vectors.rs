//! Published wire vectors.
//!
//! Literal bytes from the reference test suite. Every test checks both
//! directions: the built certificate encodes to the bytes, and the bytes
//! decode to the built certificate.

use cennznut::{decode, Cennznut, ContractPermission, Method, Module};

/// Version, then one module "call" holding one method "contract".
const CALL_CONTRACT_MODULE: [u8; 69] = [
    0, 0, 0, 0, 99, 97, 108, 108, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 99, 111, 110, 116, 114, 97, 99, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Two modules with cooldowns, two methods each, no contracts.
const TWO_MODULES_TWO_METHODS: [u8; 226] = [
    0, 0, 1, 3, 109, 111, 100, 117, 108, 101, 95, 116, 101, 115, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 128, 81, 1, 0, 1, 109, 101, 116, 104, 111, 100, 95, 116, 101,
    115, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 123, 0, 0, 0, 1, 109,
    101, 116, 104, 111, 100, 95, 116, 101, 115, 116, 50, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 65, 1, 0, 0, 3, 109, 111, 100, 117, 108, 101, 95, 116, 101, 115, 116, 50, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 217, 0, 0, 1, 109, 101, 116, 104,
    111, 100, 95, 116, 101, 115, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    123, 0, 0, 0, 1, 109, 101, 116, 104, 111, 100, 95, 116, 101, 115, 116, 50, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 65, 1, 0, 0, 0,
];

/// One method with header `0x02` and a 41-byte constraints payload behind
/// length byte 40, no contracts.
const METHOD_WITH_CONSTRAINTS: [u8; 112] = [
    0, 0, 0, 0, 109, 111, 100, 117, 108, 101, 95, 116, 101, 115, 116, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 109, 101, 116, 104, 111, 100, 95, 116, 101, 115, 116, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 40, 0, 192, 128, 16, 246, 0, 0, 0, 0,
    0, 0, 0, 128, 16, 178, 128, 0, 0, 0, 0, 0, 0, 0, 224, 116, 101, 115, 116, 105, 110, 103, 5, 0,
    0, 1, 0, 5, 0, 1, 1, 1, 0,
];

fn call_contract_module() -> Module {
    Module::new("call").method(Method::new("contract"))
}

fn assert_both_ways(cennznut: &Cennznut, bytes: &[u8]) {
    assert_eq!(cennznut.encode().unwrap(), bytes);
    assert_eq!(&decode(bytes).unwrap(), cennznut);
    assert_eq!(cennznut.encoded_len(), bytes.len());
}

#[test]
fn test_two_modules_two_methods() {
    let methods = vec![
        Method::new("method_test").block_cooldown(123),
        Method::new("method_test2").block_cooldown(321),
    ];
    let cennznut = Cennznut::builder()
        .module(
            Module::new("module_test")
                .block_cooldown(86_400)
                .methods(methods.clone()),
        )
        .module(
            Module::new("module_test2")
                .block_cooldown(55_555)
                .methods(methods),
        )
        .build()
        .unwrap();

    // module count stored as 2 - 1, header (2 - 1) << 1 | cooldown
    assert_eq!(TWO_MODULES_TWO_METHODS[2], 1);
    assert_eq!(TWO_MODULES_TWO_METHODS[3], 3);
    // 321 on the second method, 55555 on the second module
    assert_eq!(&TWO_MODULES_TWO_METHODS[110..114], &[65, 1, 0, 0]);
    assert_eq!(TWO_MODULES_TWO_METHODS[114], 3);
    assert_eq!(&TWO_MODULES_TWO_METHODS[147..151], &[3, 217, 0, 0]);
    assert_both_ways(&cennznut, &TWO_MODULES_TWO_METHODS);
}

#[test]
fn test_one_contract() {
    let cennznut = Cennznut::builder()
        .module(call_contract_module())
        .contract(ContractPermission::new(&[0x5a; 32]))
        .build()
        .unwrap();

    let bytes = [
        CALL_CONTRACT_MODULE.to_vec(),
        vec![0x01, 0x00],
        vec![0x5a; 32],
    ]
    .concat();
    assert_both_ways(&cennznut, &bytes);
}

#[test]
fn test_two_contracts() {
    let cooled = [0x8b; 32];
    let cennznut = Cennznut::builder()
        .module(call_contract_module())
        .contract(ContractPermission::new(&[0x4a; 32]))
        .contract(ContractPermission::new(&cooled).block_cooldown(0xaa55_33cc))
        .build()
        .unwrap();

    // direct count, then a plain contract and one with a cooldown
    let bytes = [
        CALL_CONTRACT_MODULE.to_vec(),
        vec![0x02],
        vec![0x00],
        vec![0x4a; 32],
        vec![0x01],
        vec![0x8b; 32],
        vec![0xcc, 0x33, 0x55, 0xaa],
    ]
    .concat();
    assert_both_ways(&cennznut, &bytes);
}

#[test]
fn test_method_with_constraints() {
    let constraints = METHOD_WITH_CONSTRAINTS[70..111].to_vec();
    let method = Method::new("method_test").constraints(constraints);
    let cennznut = Cennznut::builder()
        .module(Module::new("module_test").method(method))
        .build()
        .unwrap();

    assert_eq!(METHOD_WITH_CONSTRAINTS[69], 40);
    assert_both_ways(&cennznut, &METHOD_WITH_CONSTRAINTS);

    let decoded = decode(&METHOD_WITH_CONSTRAINTS).unwrap();
    let method = decoded
        .get_module("module_test")
        .and_then(|m| m.get_method("method_test"))
        .unwrap();
    assert_eq!(method.constraints.as_ref().map(Vec::len), Some(41));
}
