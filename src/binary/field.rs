// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width field primitives: integers, padded text and raw byte arrays.
//!
//! Every field in the format has a width known before reading it, so there
//! are no varints and no length prefixes at this level. Integers are
//! little-endian, least-significant byte first, on both paths. Text fields are
//! UTF-8 followed by NUL padding up to the field width; the logical value is
//! everything before the first NUL and nothing but NULs may follow it.
//!
//! All reads are bounds-checked against the buffer and fail with
//! `TruncatedInput` instead of panicking.

use crate::error::CodecError;

/// Byte used to pad text fields.
pub const PADDING: u8 = 0x00;

/// Widest integer field a `u64` can hold.
pub const MAX_UINT_WIDTH: usize = 8;

// ============================================================================
// BOUNDS
// ============================================================================

/// Borrow `width` bytes at `offset`, or report how short the buffer is.
fn slice_at<'a>(
    buf: &'a [u8],
    offset: usize,
    width: usize,
    field: &'static str,
) -> Result<&'a [u8], CodecError> {
    let end = offset
        .checked_add(width)
        .ok_or(CodecError::MalformedField {
            field,
            reason: "offset overflows",
        })?;
    buf.get(offset..end).ok_or(CodecError::TruncatedInput {
        field,
        offset,
        needed: width,
        available: buf.len().saturating_sub(offset),
    })
}

// ============================================================================
// INTEGERS
// ============================================================================

/// Read a little-endian unsigned integer of `width` bytes.
pub fn read_uint(buf: &[u8], offset: usize, width: usize) -> Result<u64, CodecError> {
    if width == 0 || width > MAX_UINT_WIDTH {
        return Err(CodecError::MalformedField {
            field: "uint",
            reason: "unsupported integer width",
        });
    }
    let bytes = slice_at(buf, offset, width, "uint")?;
    let mut le = [0u8; MAX_UINT_WIDTH];
    le[..width].copy_from_slice(bytes);
    Ok(u64::from_le_bytes(le))
}

/// Append `value` as a little-endian unsigned integer of `width` bytes.
pub fn write_uint(value: u64, width: usize, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    if width == 0 || width > MAX_UINT_WIDTH {
        return Err(CodecError::MalformedField {
            field: "uint",
            reason: "unsupported integer width",
        });
    }
    if width < MAX_UINT_WIDTH && value >> (width * 8) != 0 {
        return Err(CodecError::MalformedField {
            field: "uint",
            reason: "value does not fit the field width",
        });
    }
    buf.extend_from_slice(&value.to_le_bytes()[..width]);
    Ok(())
}

// ============================================================================
// FIXED TEXT
// ============================================================================

/// Read a NUL-padded UTF-8 text field of `width` bytes.
///
/// Returns the bytes before the first padding byte. A non-padding byte after
/// the first padding byte means the name had an embedded NUL, which cannot
/// round-trip, so it is rejected.
pub fn read_fixed_text(buf: &[u8], offset: usize, width: usize) -> Result<String, CodecError> {
    let bytes = slice_at(buf, offset, width, "fixed text")?;
    let end = bytes.iter().position(|&b| b == PADDING).unwrap_or(width);
    if bytes[end..].iter().any(|&b| b != PADDING) {
        return Err(CodecError::MalformedField {
            field: "fixed text",
            reason: "non-zero byte after padding",
        });
    }
    let text = std::str::from_utf8(&bytes[..end]).map_err(|_| CodecError::MalformedField {
        field: "fixed text",
        reason: "not valid UTF-8",
    })?;
    Ok(text.to_string())
}

/// Check `text` can be stored in a `width`-byte text field.
pub fn check_fixed_text(text: &str, width: usize) -> Result<(), CodecError> {
    if text.len() > width {
        return Err(CodecError::FieldTooLong {
            field: "fixed text",
            len: text.len(),
            width,
        });
    }
    if text.as_bytes().contains(&PADDING) {
        return Err(CodecError::MalformedField {
            field: "fixed text",
            reason: "embedded padding byte",
        });
    }
    Ok(())
}

/// Append `text` padded with NULs to exactly `width` bytes.
///
/// A text of exactly `width` bytes is written without any padding.
pub fn write_fixed_text(text: &str, width: usize, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    check_fixed_text(text, width)?;
    buf.extend_from_slice(text.as_bytes());
    buf.resize(buf.len() + (width - text.len()), PADDING);
    Ok(())
}

// ============================================================================
// FIXED BYTES
// ============================================================================

/// Borrow a raw fixed-size byte array of `width` bytes.
pub fn read_fixed_bytes(buf: &[u8], offset: usize, width: usize) -> Result<&[u8], CodecError> {
    slice_at(buf, offset, width, "fixed bytes")
}

// ============================================================================
// CURSOR
// ============================================================================

/// Sequential reader over a certificate buffer.
///
/// Wraps the offset-based primitives so the entry codecs can read fields in
/// wire order without tracking offsets by hand. Every method names the field
/// it reads, and that name ends up in the error.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Fail with `TruncatedInput` unless at least `needed` bytes remain.
    pub fn ensure_remaining(&self, field: &'static str, needed: usize) -> Result<(), CodecError> {
        if needed > self.remaining() {
            return Err(CodecError::TruncatedInput {
                field,
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn u8(&mut self, field: &'static str) -> Result<u8, CodecError> {
        let value = read_uint(self.buf, self.pos, 1).map_err(|e| e.in_field(field))?;
        self.pos += 1;
        Ok(value as u8)
    }

    pub fn u16(&mut self, field: &'static str) -> Result<u16, CodecError> {
        let value = read_uint(self.buf, self.pos, 2).map_err(|e| e.in_field(field))?;
        self.pos += 2;
        Ok(value as u16)
    }

    pub fn u32(&mut self, field: &'static str) -> Result<u32, CodecError> {
        let value = read_uint(self.buf, self.pos, 4).map_err(|e| e.in_field(field))?;
        self.pos += 4;
        Ok(value as u32)
    }

    pub fn text(&mut self, field: &'static str, width: usize) -> Result<String, CodecError> {
        let text = read_fixed_text(self.buf, self.pos, width).map_err(|e| e.in_field(field))?;
        self.pos += width;
        Ok(text)
    }

    pub fn array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], CodecError> {
        let bytes = read_fixed_bytes(self.buf, self.pos, N).map_err(|e| e.in_field(field))?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos += N;
        Ok(out)
    }

    pub fn bytes(&mut self, field: &'static str, len: usize) -> Result<Vec<u8>, CodecError> {
        let bytes = read_fixed_bytes(self.buf, self.pos, len).map_err(|e| e.in_field(field))?;
        self.pos += len;
        Ok(bytes.to_vec())
    }

    /// Succeed only if the whole buffer was consumed.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(CodecError::TrailingBytes { count }),
        }
    }
}
