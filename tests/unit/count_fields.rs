//! Tests for count framing (count-1 vs direct counts).

use cennznut::binary::{
    CountBias, CONSTRAINTS_LEN, CONTRACT_COUNT, MAX_CONSTRAINTS_LEN, MAX_CONTRACTS, MAX_METHODS,
    MAX_MODULES, METHOD_COUNT, MODULE_COUNT,
};
use cennznut::{CodecError, EntryKind};

#[test]
fn test_limits() {
    assert_eq!(MAX_MODULES, 256);
    assert_eq!(MAX_METHODS, 128);
    assert_eq!(MAX_CONTRACTS, 255);
    assert_eq!(MAX_CONSTRAINTS_LEN, 256);
}

#[test]
fn test_biased_count_stores_len_minus_one() {
    assert_eq!(MODULE_COUNT.bias, CountBias::Biased);
    assert_eq!(MODULE_COUNT.pack(1).unwrap(), 0);
    assert_eq!(MODULE_COUNT.pack(256).unwrap(), 255);
    assert_eq!(MODULE_COUNT.unpack(0), 1);
    assert_eq!(MODULE_COUNT.unpack(255), 256);
}

#[test]
fn test_direct_count_stores_len() {
    assert_eq!(CONTRACT_COUNT.bias, CountBias::Direct);
    assert_eq!(CONTRACT_COUNT.pack(0).unwrap(), 0);
    assert_eq!(CONTRACT_COUNT.pack(255).unwrap(), 255);
    assert_eq!(CONTRACT_COUNT.unpack(7), 7);
}

#[test]
fn test_biased_count_rejects_empty() {
    assert_eq!(
        METHOD_COUNT.pack(0),
        Err(CodecError::EmptyCollection {
            kind: EntryKind::Method
        })
    );
    assert_eq!(
        CONSTRAINTS_LEN.check(0),
        Err(CodecError::EmptyCollection {
            kind: EntryKind::Constraints
        })
    );
}

#[test]
fn test_count_overflow() {
    assert_eq!(
        METHOD_COUNT.pack(129),
        Err(CodecError::TooManyEntries {
            kind: EntryKind::Method,
            count: 129,
            max: 128,
        })
    );
    assert!(CONTRACT_COUNT.check(256).is_err());
    assert!(MODULE_COUNT.check(257).is_err());
}

#[test]
fn test_method_count_ignores_bits_above_field() {
    // Seven bits wide: the top bit of a shifted header never leaks in.
    assert_eq!(METHOD_COUNT.unpack(0x7f), 128);
    assert_eq!(METHOD_COUNT.unpack(0xff), 128);
}

#[test]
fn test_pack_unpack_agree_across_range() {
    for field in [MODULE_COUNT, METHOD_COUNT, CONTRACT_COUNT, CONSTRAINTS_LEN] {
        for len in field.min_entries()..=field.max_entries() {
            let raw = field.pack(len).unwrap();
            assert_eq!(field.unpack(raw), len, "{:?} len {}", field.kind, len);
        }
    }
}
