// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyed collections: a count field followed by back-to-back entries.
//!
//! The collection codec knows nothing about modules or contracts. The entry
//! codecs hand it a closure that reads or writes one entry, plus a key
//! extractor, and get back an ordered, key-unique `Vec`. Where the count is
//! stored (its own byte, or packed into a header) is the caller's business;
//! the [`CountField`] decides what the raw value means.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use super::field::FieldReader;
use super::layout::CountField;
use crate::error::{CodecError, EntryKind};

/// Fail with `DuplicateKey` on the first key seen twice, keeping wire order.
pub fn ensure_unique_keys<'a, T, K, F>(
    entries: &'a [T],
    count: CountField,
    key_of: F,
) -> Result<(), CodecError>
where
    K: Eq + Hash + Display,
    F: Fn(&'a T) -> K,
{
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        let key = key_of(entry);
        if seen.contains(&key) {
            return Err(CodecError::DuplicateKey {
                kind: count.kind,
                key: key.to_string(),
            });
        }
        seen.insert(key);
    }
    Ok(())
}

/// Decode `len` entries with `decode_entry`, rejecting duplicate keys.
///
/// `min_entry_len` is the smallest encoding one entry can have. The input is
/// checked against `len * min_entry_len` before anything is allocated, so a
/// count promising more entries than the buffer could hold fails fast with
/// `TruncatedInput`.
pub fn decode_entries<'a, T, K, D, F>(
    reader: &mut FieldReader<'a>,
    count: CountField,
    len: usize,
    min_entry_len: usize,
    mut decode_entry: D,
    key_of: F,
) -> Result<Vec<T>, CodecError>
where
    K: Eq + Hash + Display,
    D: FnMut(&mut FieldReader<'a>) -> Result<T, CodecError>,
    F: Fn(&T) -> K,
{
    count.check(len)?;
    reader.ensure_remaining(entries_label(count), len.saturating_mul(min_entry_len))?;

    let mut entries = Vec::with_capacity(len);
    let mut seen = HashSet::with_capacity(len);
    for _ in 0..len {
        let entry = decode_entry(reader)?;
        let key = key_of(&entry);
        if seen.contains(&key) {
            return Err(CodecError::DuplicateKey {
                kind: count.kind,
                key: key.to_string(),
            });
        }
        seen.insert(key);
        entries.push(entry);
    }
    Ok(entries)
}

/// Encode every entry in order with `encode_entry`.
///
/// The count itself is written by the caller, which may pack it into a header
/// byte; this only checks the collection fits the field.
pub fn encode_entries<T, E>(
    entries: &[T],
    count: CountField,
    buf: &mut Vec<u8>,
    mut encode_entry: E,
) -> Result<(), CodecError>
where
    E: FnMut(&T, &mut Vec<u8>) -> Result<(), CodecError>,
{
    count.check(entries.len())?;
    for entry in entries {
        encode_entry(entry, buf)?;
    }
    Ok(())
}

fn entries_label(count: CountField) -> &'static str {
    match count.kind {
        EntryKind::Module => "module entries",
        EntryKind::Method => "method entries",
        EntryKind::Contract => "contract entries",
        EntryKind::Constraints => "constraints payload",
    }
}
