// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire layout constants for version 0 certificates.
//!
//! Every width, mask and count framing used by the codec lives here, so the
//! read path and the write path cannot drift apart. There is no outer length
//! prefix: the total size falls out of the fixed widths, the header flags and
//! the decoded counts.
//!
//! ```text
//! Certificate  version u16 | module_count u8 (n-1) | modules | contract_count u8 (n) | contracts
//! Module       header u8 (bit0 cooldown, bits1..7 methods-1) | name [32] | cooldown u32? | methods
//! Method       header u8 (bit0 cooldown, bit1 constraints)   | name [32] | cooldown u32? | len u8 (n-1) + payload?
//! Contract     header u8 (bit0 cooldown)                     | address [32] | cooldown u32?
//! ```

use crate::error::{CodecError, EntryKind};

// ============================================================================
// CONSTANTS
// ============================================================================

/// The only certificate version this crate reads and writes.
pub const VERSION: u16 = 0;

/// Width of the leading version tag.
pub const VERSION_WIDTH: usize = 2;

/// Width of module and method name fields (UTF-8, NUL padded).
pub const NAME_WIDTH: usize = 32;

/// Width of a contract address.
pub const ADDRESS_WIDTH: usize = 32;

/// Width of every block cooldown field.
pub const COOLDOWN_WIDTH: usize = 4;

/// Width of a per-entry header byte.
pub const HEADER_WIDTH: usize = 1;

/// Smallest possible encoded method: header + name.
pub const MIN_METHOD_LEN: usize = HEADER_WIDTH + NAME_WIDTH;

/// Smallest possible encoded module: header + name + one minimal method.
pub const MIN_MODULE_LEN: usize = HEADER_WIDTH + NAME_WIDTH + MIN_METHOD_LEN;

/// Smallest possible encoded contract: header + address.
pub const MIN_CONTRACT_LEN: usize = HEADER_WIDTH + ADDRESS_WIDTH;

// ============================================================================
// HEADER FLAGS
// ============================================================================

/// Per-entry header byte.
///
/// Bit 0 marks a cooldown for every entry kind. Methods use bit 1 for a
/// constraints payload; modules use bits 1..7 for their method count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFlags(pub(crate) u8);

impl EntryFlags {
    pub const HAS_COOLDOWN: u8 = 0b0000_0001;
    pub const HAS_CONSTRAINTS: u8 = 0b0000_0010;

    /// Bits a method header may carry.
    pub const METHOD_MASK: u8 = Self::HAS_COOLDOWN | Self::HAS_CONSTRAINTS;
    /// Bits a contract header may carry.
    pub const CONTRACT_MASK: u8 = Self::HAS_COOLDOWN;

    /// Shift of the method count inside a module header.
    pub const METHOD_COUNT_SHIFT: u32 = 1;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub fn byte(self) -> u8 {
        self.0
    }

    pub fn with_cooldown(mut self, present: bool) -> Self {
        if present {
            self.0 |= Self::HAS_COOLDOWN;
        }
        self
    }

    pub fn with_constraints(mut self, present: bool) -> Self {
        if present {
            self.0 |= Self::HAS_CONSTRAINTS;
        }
        self
    }

    pub fn has_cooldown(self) -> bool {
        self.0 & Self::HAS_COOLDOWN != 0
    }

    pub fn has_constraints(self) -> bool {
        self.0 & Self::HAS_CONSTRAINTS != 0
    }

    /// Reject any bit outside `allowed`.
    ///
    /// Reserved bits would be dropped on re-encode, so they must never be
    /// accepted.
    pub fn check_reserved(self, allowed: u8, field: &'static str) -> Result<Self, CodecError> {
        if self.0 & !allowed != 0 {
            return Err(CodecError::MalformedField {
                field,
                reason: "reserved header bits set",
            });
        }
        Ok(self)
    }
}

// ============================================================================
// COUNT FIELDS
// ============================================================================

/// How a count field maps onto the number of entries it frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBias {
    /// Stores `len - 1`; the collection can never be empty.
    Biased,
    /// Stores `len` as is.
    Direct,
}

/// A count field framing one kind of collection.
///
/// This is the single place the count-minus-one convention is applied, so
/// the "at least one entry" rule is enforced the same way for modules,
/// methods and constraint payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountField {
    pub kind: EntryKind,
    /// Number of bits the count occupies.
    pub bits: u32,
    pub bias: CountBias,
}

impl CountField {
    /// Largest raw value the field can hold.
    pub const fn raw_max(&self) -> usize {
        (1usize << self.bits) - 1
    }

    /// Largest collection the field can frame.
    pub const fn max_entries(&self) -> usize {
        match self.bias {
            CountBias::Biased => self.raw_max() + 1,
            CountBias::Direct => self.raw_max(),
        }
    }

    /// Smallest collection the field can frame.
    pub const fn min_entries(&self) -> usize {
        match self.bias {
            CountBias::Biased => 1,
            CountBias::Direct => 0,
        }
    }

    /// Check `len` fits this field without producing the raw value.
    pub fn check(&self, len: usize) -> Result<(), CodecError> {
        if len < self.min_entries() {
            return Err(CodecError::EmptyCollection { kind: self.kind });
        }
        if len > self.max_entries() {
            return Err(CodecError::TooManyEntries {
                kind: self.kind,
                count: len,
                max: self.max_entries(),
            });
        }
        Ok(())
    }

    /// Raw (unshifted) value to store for a collection of `len` entries.
    pub fn pack(&self, len: usize) -> Result<u8, CodecError> {
        self.check(len)?;
        let raw = match self.bias {
            CountBias::Biased => len - 1,
            CountBias::Direct => len,
        };
        Ok(raw as u8)
    }

    /// Number of entries a raw value announces.
    ///
    /// Bits above the field width are ignored; callers mask headers first.
    pub fn unpack(&self, raw: u8) -> usize {
        let raw = usize::from(raw) & self.raw_max();
        match self.bias {
            CountBias::Biased => raw + 1,
            CountBias::Direct => raw,
        }
    }
}

/// Certificate-level module count: one byte, count-1.
pub const MODULE_COUNT: CountField = CountField {
    kind: EntryKind::Module,
    bits: 8,
    bias: CountBias::Biased,
};

/// Method count packed in bits 1..7 of a module header, count-1.
pub const METHOD_COUNT: CountField = CountField {
    kind: EntryKind::Method,
    bits: 7,
    bias: CountBias::Biased,
};

/// Certificate-level contract count: one byte, direct.
pub const CONTRACT_COUNT: CountField = CountField {
    kind: EntryKind::Contract,
    bits: 8,
    bias: CountBias::Direct,
};

/// Constraints payload length: one byte, length-1.
pub const CONSTRAINTS_LEN: CountField = CountField {
    kind: EntryKind::Constraints,
    bits: 8,
    bias: CountBias::Biased,
};

/// Maximum number of modules in one certificate.
pub const MAX_MODULES: usize = MODULE_COUNT.max_entries();

/// Maximum number of methods in one module.
pub const MAX_METHODS: usize = METHOD_COUNT.max_entries();

/// Maximum number of contracts in one certificate.
pub const MAX_CONTRACTS: usize = CONTRACT_COUNT.max_entries();

/// Maximum constraints payload length in bytes.
pub const MAX_CONSTRAINTS_LEN: usize = CONSTRAINTS_LEN.max_entries();
