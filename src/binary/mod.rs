// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary certificate format.
//!
//! A certificate is one self-contained byte string: a version tag, the
//! module collection and the contract collection, nothing else. There is no
//! outer length prefix and no checksum (authenticity is the job of the
//! signature layer that wraps these bytes). Because certificates are signed
//! and exchanged as opaque bytes, the codec guarantees a byte-exact round
//! trip: `encode(decode(b)) == b` for every buffer `decode` accepts.
//!
//! # Layering
//!
//! ```text
//! mod.rs         decode / encode, version + trailing-byte checks
//!   entries.rs   module, method and contract layouts
//!   collection.rs  count-framed keyed collections
//!   field.rs     fixed-width integers, padded text, byte arrays
//!   layout.rs    widths, header bits, count fields
//! ```
//!
//! Decoding is all-or-nothing and never panics on untrusted input; every
//! failure is a [`CodecError`].

pub mod collection;
pub mod entries;
pub mod field;
pub mod layout;

pub use collection::{decode_entries, encode_entries, ensure_unique_keys};
pub use entries::{
    decode_contract, decode_method, decode_module, encode_contract, encode_method, encode_module,
};
pub use field::{
    check_fixed_text, read_fixed_bytes, read_fixed_text, read_uint, write_fixed_text, write_uint,
    FieldReader, PADDING,
};
pub use layout::{
    CountBias, CountField, EntryFlags, ADDRESS_WIDTH, CONSTRAINTS_LEN, CONTRACT_COUNT,
    COOLDOWN_WIDTH, MAX_CONSTRAINTS_LEN, MAX_CONTRACTS, MAX_METHODS, MAX_MODULES, METHOD_COUNT,
    MODULE_COUNT, NAME_WIDTH, VERSION, VERSION_WIDTH,
};

use tracing::debug;

use crate::error::CodecError;
use crate::types::{AddressKey, Cennznut, ContractPermission, Module};
use entries::{contract_len, module_len};
use layout::{MIN_CONTRACT_LEN, MIN_MODULE_LEN};

/// Decode a certificate from `bytes`, which must contain exactly one.
pub fn decode(bytes: &[u8]) -> Result<Cennznut, CodecError> {
    let mut reader = FieldReader::new(bytes);
    match decode_certificate(&mut reader) {
        Ok(cennznut) => {
            debug!(
                len = bytes.len(),
                modules = cennznut.modules().len(),
                contracts = cennznut.contracts().len(),
                "decoded certificate"
            );
            Ok(cennznut)
        }
        Err(error) => {
            debug!(
                len = bytes.len(),
                offset = reader.position(),
                %error,
                "rejected certificate"
            );
            Err(error)
        }
    }
}

/// Reads one certificate, leaving `reader` at the field that failed on error.
fn decode_certificate(reader: &mut FieldReader<'_>) -> Result<Cennznut, CodecError> {
    let version = reader.u16("version")?;
    if version != VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: version,
            expected: VERSION,
        });
    }

    let module_count = MODULE_COUNT.unpack(reader.u8("module count")?);
    let modules = decode_entries(
        reader,
        MODULE_COUNT,
        module_count,
        MIN_MODULE_LEN,
        decode_module,
        |m: &Module| m.name.clone(),
    )?;

    let contract_count = CONTRACT_COUNT.unpack(reader.u8("contract count")?);
    let contracts = decode_entries(
        reader,
        CONTRACT_COUNT,
        contract_count,
        MIN_CONTRACT_LEN,
        decode_contract,
        |c: &ContractPermission| AddressKey(c.address),
    )?;

    reader.finish()?;
    Ok(Cennznut::from_decoded(version, modules, contracts))
}

/// Encode a certificate.
///
/// Fails with `EmptyCollection` for a certificate without modules (the module
/// count is stored as count-1). Every other constraint was already enforced
/// when the certificate was built.
pub fn encode(cennznut: &Cennznut) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(encoded_len(cennznut));

    write_uint(u64::from(cennznut.version()), VERSION_WIDTH, &mut buf)?;
    buf.push(MODULE_COUNT.pack(cennznut.modules().len())?);
    encode_entries(cennznut.modules(), MODULE_COUNT, &mut buf, encode_module)?;
    buf.push(CONTRACT_COUNT.pack(cennznut.contracts().len())?);
    encode_entries(
        cennznut.contracts(),
        CONTRACT_COUNT,
        &mut buf,
        encode_contract,
    )?;

    debug!(
        len = buf.len(),
        modules = cennznut.modules().len(),
        contracts = cennznut.contracts().len(),
        "encoded certificate"
    );
    Ok(buf)
}

/// Exact size `encode` produces for this certificate.
pub fn encoded_len(cennznut: &Cennznut) -> usize {
    let modules: usize = cennznut.modules().iter().map(module_len).sum();
    let contracts: usize = cennznut.contracts().iter().map(contract_len).sum();
    VERSION_WIDTH + 1 + modules + 1 + contracts
}

impl Cennznut {
    /// Decode a certificate; see [`decode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        decode(bytes)
    }

    /// Encode this certificate; see [`encode`].
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        encode(self)
    }

    /// Exact size of the encoding; see [`encoded_len`].
    pub fn encoded_len(&self) -> usize {
        encoded_len(self)
    }
}
