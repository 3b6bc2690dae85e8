// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the certificate codec and the permission validator.
//!
//! Decoding is all-or-nothing: the first problem found aborts the decode and
//! is reported as a [`CodecError`]. Nothing is truncated or coerced to make
//! bad input fit. Lookups never fail; only the wildcard-aware `validate_*`
//! calls report a [`ValidationErr`].

use std::fmt;

/// Which keyed collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Module,
    Method,
    Contract,
    /// The constraints payload of a method (framed like a collection of bytes).
    Constraints,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Module => "module",
            EntryKind::Method => "method",
            EntryKind::Contract => "contract",
            EntryKind::Constraints => "constraints",
        };
        f.write_str(label)
    }
}

/// Structural failure while decoding, encoding or assembling a certificate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The buffer ends before a field or a promised collection does.
    #[error(
        "truncated input: {field} needs {needed} bytes at offset {offset}, {available} available"
    )]
    TruncatedInput {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// A field holds bytes that cannot be interpreted.
    #[error("malformed {field}: {reason}")]
    MalformedField {
        field: &'static str,
        reason: &'static str,
    },
    /// Two entries of one collection share a key.
    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: EntryKind, key: String },
    /// Leading version tag is not one this crate understands.
    #[error("unsupported version {found}, expected {expected}")]
    UnsupportedVersion { found: u16, expected: u16 },
    /// Bytes remain after a structurally complete certificate.
    #[error("{count} trailing bytes after certificate")]
    TrailingBytes { count: usize },
    /// A value is wider than its fixed field.
    #[error("{field} is {len} bytes, field width is {width}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        width: usize,
    },
    /// A collection that must hold at least one entry is empty.
    #[error("{kind} collection must not be empty")]
    EmptyCollection { kind: EntryKind },
    /// A collection holds more entries than its count field can express.
    #[error("{count} {kind} entries exceed the limit of {max}")]
    TooManyEntries {
        kind: EntryKind,
        count: usize,
        max: usize,
    },
}

impl CodecError {
    /// Relabel a field-level error with the name of the field being read.
    ///
    /// The primitive readers only know they read "fixed text" or "uint"; the
    /// entry codecs know it was a module name.
    pub(crate) fn in_field(self, label: &'static str) -> Self {
        match self {
            CodecError::TruncatedInput {
                offset,
                needed,
                available,
                ..
            } => CodecError::TruncatedInput {
                field: label,
                offset,
                needed,
                available,
            },
            CodecError::MalformedField { reason, .. } => CodecError::MalformedField {
                field: label,
                reason,
            },
            CodecError::FieldTooLong { len, width, .. } => CodecError::FieldTooLong {
                field: label,
                len,
                width,
            },
            other => other,
        }
    }
}

/// The permission domain a validation failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Module,
    Method,
    Contract,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Module => write!(f, "module"),
            Domain::Method => write!(f, "method"),
            Domain::Contract => write!(f, "contract"),
        }
    }
}

/// Reason a wildcard-aware permission check refused a call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErr {
    #[error("CENNZnut does not grant permission for {0}")]
    NoPermission(Domain),
}
