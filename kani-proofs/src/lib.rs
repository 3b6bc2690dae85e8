// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the cennznut field primitives.
//!
//! This standalone crate extracts the count framing and fixed-width text
//! routines and proves them correct with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Count bias**: unpack(pack(n)) == n over the whole legal range, and
//!    every raw byte unpacks into that range
//! 2. **No panics**: text field reads never panic on any input
//! 3. **Text roundtrip**: read(write(t)) == t, output is exactly the width

/// Width of the name fields.
pub const NAME_WIDTH: usize = 32;

pub const PADDING: u8 = 0x00;

// ============================================================================
// COUNT FIELDS (mirrors src/binary/layout.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBias {
    Biased,
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountField {
    pub bits: u32,
    pub bias: CountBias,
}

impl CountField {
    pub const fn raw_max(&self) -> usize {
        (1usize << self.bits) - 1
    }

    pub const fn min_entries(&self) -> usize {
        match self.bias {
            CountBias::Biased => 1,
            CountBias::Direct => 0,
        }
    }

    pub const fn max_entries(&self) -> usize {
        match self.bias {
            CountBias::Biased => self.raw_max() + 1,
            CountBias::Direct => self.raw_max(),
        }
    }

    /// `None` if `len` cannot be framed.
    pub fn pack(&self, len: usize) -> Option<u8> {
        if len < self.min_entries() || len > self.max_entries() {
            return None;
        }
        Some(match self.bias {
            CountBias::Biased => (len - 1) as u8,
            CountBias::Direct => len as u8,
        })
    }

    pub fn unpack(&self, raw: u8) -> usize {
        let raw = usize::from(raw) & self.raw_max();
        match self.bias {
            CountBias::Biased => raw + 1,
            CountBias::Direct => raw,
        }
    }
}

pub const MODULE_COUNT: CountField = CountField {
    bits: 8,
    bias: CountBias::Biased,
};

pub const METHOD_COUNT: CountField = CountField {
    bits: 7,
    bias: CountBias::Biased,
};

pub const CONTRACT_COUNT: CountField = CountField {
    bits: 8,
    bias: CountBias::Direct,
};

// ============================================================================
// FIXED TEXT (mirrors src/binary/field.rs, bytes instead of str)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TextError {
    Truncated,
    TooLong,
    EmbeddedPadding,
    DataAfterPadding,
}

pub fn write_fixed_text(text: &[u8], width: usize, buf: &mut Vec<u8>) -> Result<(), TextError> {
    if text.len() > width {
        return Err(TextError::TooLong);
    }
    if text.contains(&PADDING) {
        return Err(TextError::EmbeddedPadding);
    }
    buf.extend_from_slice(text);
    buf.resize(buf.len() + (width - text.len()), PADDING);
    Ok(())
}

/// Returns the text bytes before the first padding byte.
pub fn read_fixed_text(buf: &[u8], width: usize) -> Result<&[u8], TextError> {
    let bytes = buf.get(..width).ok_or(TextError::Truncated)?;
    let end = bytes.iter().position(|&b| b == PADDING).unwrap_or(width);
    if bytes[end..].iter().any(|&b| b != PADDING) {
        return Err(TextError::DataAfterPadding);
    }
    Ok(&bytes[..end])
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Every legal length survives pack/unpack, for all three count fields.
    #[kani::proof]
    fn verify_count_roundtrip() {
        let len: usize = kani::any_where(|&n| n <= 256);
        for field in [MODULE_COUNT, METHOD_COUNT, CONTRACT_COUNT] {
            match field.pack(len) {
                Some(raw) => kani::assert(field.unpack(raw) == len, "pack/unpack must agree"),
                None => kani::assert(
                    len < field.min_entries() || len > field.max_entries(),
                    "only out-of-range lengths may be refused",
                ),
            }
        }
    }

    /// Any raw byte announces a length inside the field's range.
    #[kani::proof]
    fn verify_unpack_in_range() {
        let raw: u8 = kani::any();
        for field in [MODULE_COUNT, METHOD_COUNT, CONTRACT_COUNT] {
            let len = field.unpack(raw);
            kani::assert(len >= field.min_entries(), "unpacked below minimum");
            kani::assert(len <= field.max_entries(), "unpacked above maximum");
        }
    }

    /// Biased fields can never announce an empty collection.
    #[kani::proof]
    fn verify_biased_never_empty() {
        let raw: u8 = kani::any();
        kani::assert(MODULE_COUNT.unpack(raw) >= 1, "module count must be >= 1");
        kani::assert(METHOD_COUNT.unpack(raw) >= 1, "method count must be >= 1");
    }

    /// Reading a text field never panics for any buffer.
    #[kani::proof]
    #[kani::unwind(34)]
    fn verify_read_text_no_panic() {
        let len: usize = kani::any_where(|&n| n <= NAME_WIDTH + 1);
        let mut bytes = [0u8; NAME_WIDTH + 1];
        for i in 0..len {
            bytes[i] = kani::any();
        }
        if let Ok(text) = read_fixed_text(&bytes[..len], NAME_WIDTH) {
            kani::assert(text.len() <= NAME_WIDTH, "text cannot exceed the width");
            kani::assert(!text.contains(&PADDING), "text never contains padding");
        }
    }

    /// write then read gives back the text, in exactly `width` bytes.
    #[kani::proof]
    #[kani::unwind(34)]
    fn verify_text_roundtrip() {
        let len: usize = kani::any_where(|&n| n <= NAME_WIDTH);
        let mut text = [0u8; NAME_WIDTH];
        for i in 0..len {
            text[i] = kani::any_where(|&b: &u8| b != PADDING);
        }
        let text = &text[..len];

        let mut buf = Vec::new();
        kani::assert(
            write_fixed_text(text, NAME_WIDTH, &mut buf).is_ok(),
            "text within width must be writable",
        );
        kani::assert(buf.len() == NAME_WIDTH, "output is exactly the width");

        let read = read_fixed_text(&buf, NAME_WIDTH);
        kani::assert(read == Ok(text), "roundtrip must preserve text");
    }
}
