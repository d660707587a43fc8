//! Variable-length integer encoding for snapshot fields.
//!
//! Seven bits per byte, least significant group first, with the high bit set
//! on every byte except the last (the LEB128 layout used by protocol
//! buffers). Decoding errors are reported as corrupt input, since varints are
//! only ever read from persisted models.

use std::io::{self, Read, Write};

use byteorder::ReadBytesExt;

use crate::error::{FalcataError, Result};

/// Longest encoding of a u64.
pub const MAX_VARINT_LEN: usize = 10;

/// Encode a u64 value using variable-length encoding.
pub fn encode_u64(value: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(MAX_VARINT_LEN);
    let mut val = value;

    loop {
        let mut byte = (val & 0x7F) as u8;
        val >>= 7;

        if val != 0 {
            byte |= 0x80; // Set continuation bit
        }

        bytes.push(byte);

        if val == 0 {
            break;
        }
    }

    bytes
}

/// Decode a u64 value, returning it with the number of bytes consumed.
pub fn decode_u64(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut decoder = Decoder::default();
    for (index, &byte) in bytes.iter().enumerate() {
        if let Some(value) = decoder.push(byte)? {
            return Ok((value, index + 1));
        }
    }

    Err(FalcataError::corrupt("incomplete varint"))
}

/// Write a variable-length encoded u64, returning the number of bytes written.
pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> Result<usize> {
    let bytes = encode_u64(value);
    writer.write_all(&bytes)?;
    Ok(bytes.len())
}

/// Read a variable-length encoded u64. Running out of input is corruption.
pub fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    let mut decoder = Decoder::default();
    loop {
        let byte = reader.read_u8().map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => FalcataError::corrupt("incomplete varint"),
            _ => FalcataError::Io(e),
        })?;
        if let Some(value) = decoder.push(byte)? {
            return Ok(value);
        }
    }
}

#[derive(Default)]
struct Decoder {
    value: u64,
    shift: u32,
}

impl Decoder {
    fn push(&mut self, byte: u8) -> Result<Option<u64>> {
        let bits = (byte & 0x7F) as u64;
        // The tenth byte may only carry the single remaining bit.
        if self.shift >= 64 || (self.shift == 63 && bits > 1) {
            return Err(FalcataError::corrupt("varint overflow"));
        }

        self.value |= bits << self.shift;

        if (byte & 0x80) == 0 {
            return Ok(Some(self.value));
        }

        self.shift += 7;
        Ok(None)
    }
}
