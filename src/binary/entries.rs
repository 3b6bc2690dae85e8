// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry codecs for modules, methods and contracts.
//!
//! Each entry starts with a header byte, then its fixed-width key (name or
//! address), then an optional cooldown. Modules carry their method count in
//! the header and are followed by their methods; methods may carry a
//! constraints payload. See [`super::layout`] for the exact bit assignments.

use super::collection::{decode_entries, encode_entries};
use super::field::{write_fixed_text, write_uint, FieldReader};
use super::layout::{
    EntryFlags, ADDRESS_WIDTH, CONSTRAINTS_LEN, COOLDOWN_WIDTH, HEADER_WIDTH, METHOD_COUNT,
    MIN_METHOD_LEN, NAME_WIDTH,
};
use crate::error::CodecError;
use crate::types::{ContractPermission, Method, Module};

fn write_cooldown(cooldown: Option<u32>, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    if let Some(cooldown) = cooldown {
        write_uint(u64::from(cooldown), COOLDOWN_WIDTH, buf)?;
    }
    Ok(())
}

fn read_cooldown(
    reader: &mut FieldReader<'_>,
    flags: EntryFlags,
    field: &'static str,
) -> Result<Option<u32>, CodecError> {
    if flags.has_cooldown() {
        Ok(Some(reader.u32(field)?))
    } else {
        Ok(None)
    }
}

fn cooldown_len(cooldown: Option<u32>) -> usize {
    cooldown.map_or(0, |_| COOLDOWN_WIDTH)
}

// ============================================================================
// METHOD
// ============================================================================

pub fn encode_method(method: &Method, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let flags = EntryFlags::new()
        .with_cooldown(method.block_cooldown.is_some())
        .with_constraints(method.constraints.is_some());
    buf.push(flags.byte());
    write_fixed_text(&method.name, NAME_WIDTH, buf).map_err(|e| e.in_field("method name"))?;
    write_cooldown(method.block_cooldown, buf)?;

    if let Some(constraints) = &method.constraints {
        buf.push(CONSTRAINTS_LEN.pack(constraints.len())?);
        buf.extend_from_slice(constraints);
    }
    Ok(())
}

pub fn decode_method(reader: &mut FieldReader<'_>) -> Result<Method, CodecError> {
    let flags = EntryFlags::from_byte(reader.u8("method header")?)
        .check_reserved(EntryFlags::METHOD_MASK, "method header")?;
    let name = reader.text("method name", NAME_WIDTH)?;
    let block_cooldown = read_cooldown(reader, flags, "method cooldown")?;

    let constraints = if flags.has_constraints() {
        let len = CONSTRAINTS_LEN.unpack(reader.u8("constraints length")?);
        Some(reader.bytes("constraints", len)?)
    } else {
        None
    };

    Ok(Method {
        name,
        block_cooldown,
        constraints,
    })
}

pub fn method_len(method: &Method) -> usize {
    let constraints = method
        .constraints
        .as_ref()
        .map_or(0, |c| HEADER_WIDTH + c.len());
    HEADER_WIDTH + NAME_WIDTH + cooldown_len(method.block_cooldown) + constraints
}

// ============================================================================
// MODULE
// ============================================================================

pub fn encode_module(module: &Module, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let method_count = METHOD_COUNT.pack(module.methods.len())?;
    let flags = EntryFlags::new().with_cooldown(module.block_cooldown.is_some());
    buf.push((method_count << EntryFlags::METHOD_COUNT_SHIFT) | flags.byte());
    write_fixed_text(&module.name, NAME_WIDTH, buf).map_err(|e| e.in_field("module name"))?;
    write_cooldown(module.block_cooldown, buf)?;
    encode_entries(&module.methods, METHOD_COUNT, buf, encode_method)
}

pub fn decode_module(reader: &mut FieldReader<'_>) -> Result<Module, CodecError> {
    let header = reader.u8("module header")?;
    let flags = EntryFlags::from_byte(header & EntryFlags::HAS_COOLDOWN);
    let method_count = METHOD_COUNT.unpack(header >> EntryFlags::METHOD_COUNT_SHIFT);
    let name = reader.text("module name", NAME_WIDTH)?;
    let block_cooldown = read_cooldown(reader, flags, "module cooldown")?;
    let methods = decode_entries(
        reader,
        METHOD_COUNT,
        method_count,
        MIN_METHOD_LEN,
        decode_method,
        |m: &Method| m.name.clone(),
    )?;

    Ok(Module {
        name,
        block_cooldown,
        methods,
    })
}

pub fn module_len(module: &Module) -> usize {
    HEADER_WIDTH
        + NAME_WIDTH
        + cooldown_len(module.block_cooldown)
        + module.methods.iter().map(method_len).sum::<usize>()
}

// ============================================================================
// CONTRACT
// ============================================================================

pub fn encode_contract(contract: &ContractPermission, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let flags = EntryFlags::new().with_cooldown(contract.block_cooldown.is_some());
    buf.push(flags.byte());
    buf.extend_from_slice(&contract.address);
    write_cooldown(contract.block_cooldown, buf)
}

pub fn decode_contract(reader: &mut FieldReader<'_>) -> Result<ContractPermission, CodecError> {
    let flags = EntryFlags::from_byte(reader.u8("contract header")?)
        .check_reserved(EntryFlags::CONTRACT_MASK, "contract header")?;
    let address = reader.array::<ADDRESS_WIDTH>("contract address")?;
    let block_cooldown = read_cooldown(reader, flags, "contract cooldown")?;
    Ok(ContractPermission {
        address,
        block_cooldown,
    })
}

pub fn contract_len(contract: &ContractPermission) -> usize {
    HEADER_WIDTH + ADDRESS_WIDTH + cooldown_len(contract.block_cooldown)
}
