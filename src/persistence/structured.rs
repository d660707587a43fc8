//! Checksummed binary field I/O.
//!
//! [`StructWriter`] and [`StructReader`] wrap a plain writer or reader and
//! fold every byte that passes through them into a running CRC32. The writer
//! appends that checksum when finished; the reader compares it against the
//! trailing value. Every decoding failure, including running out of input, is
//! reported as a corrupt model.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use crc32fast::Hasher;

use crate::error::{FalcataError, Result};
use crate::util::varint::{MAX_VARINT_LEN, decode_u64, encode_u64};

/// A structured writer for binary data.
pub struct StructWriter<W: Write> {
    writer: W,
    hasher: Hasher,
    position: u64,
}

impl<W: Write> StructWriter<W> {
    /// Create a new structured writer.
    pub fn new(writer: W) -> Self {
        StructWriter {
            writer,
            hasher: Hasher::new(),
            position: 0,
        }
    }

    /// Write a u16 value (little-endian).
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.writer.write_u16::<LittleEndian>(value)?;
        self.update_checksum(&value.to_le_bytes());
        Ok(())
    }

    /// Write a variable-length integer.
    pub fn write_varint(&mut self, value: u64) -> Result<()> {
        let encoded = encode_u64(value);
        self.write_raw(&encoded)
    }

    /// Write a string with length prefix.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        self.write_varint(bytes.len() as u64)?;
        self.write_raw(bytes)
    }

    /// Write raw bytes without length prefix.
    pub fn write_raw(&mut self, value: &[u8]) -> Result<()> {
        self.writer.write_all(value)?;
        self.update_checksum(value);
        Ok(())
    }

    /// Bytes written so far, excluding the checksum.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Checksum of everything written so far.
    pub fn checksum(&self) -> u32 {
        self.hasher.clone().finalize()
    }

    fn update_checksum(&mut self, data: &[u8]) {
        self.hasher.update(data);
        self.position += data.len() as u64;
    }

    /// Append the checksum, flush, and hand back the inner writer.
    pub fn finish(mut self) -> Result<W> {
        let checksum = self.checksum();
        self.writer.write_u32::<LittleEndian>(checksum)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// A structured reader for binary data.
pub struct StructReader<R: Read> {
    reader: R,
    hasher: Hasher,
    position: u64,
}

impl<R: Read> StructReader<R> {
    /// Create a new structured reader.
    pub fn new(reader: R) -> Self {
        StructReader {
            reader,
            hasher: Hasher::new(),
            position: 0,
        }
    }

    /// Read a u16 value (little-endian).
    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self.reader.read_u16::<LittleEndian>().map_err(truncated)?;
        self.update_checksum(&value.to_le_bytes());
        Ok(value)
    }

    /// Read a variable-length integer.
    pub fn read_varint(&mut self) -> Result<u64> {
        let mut bytes = Vec::with_capacity(MAX_VARINT_LEN);
        loop {
            let byte = self.reader.read_u8().map_err(truncated)?;
            bytes.push(byte);
            if byte & 0x80 == 0 || bytes.len() > MAX_VARINT_LEN {
                break;
            }
        }

        let (value, _) = decode_u64(&bytes)?;
        self.update_checksum(&bytes);
        Ok(value)
    }

    /// Read a string with length prefix.
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_varint()?;
        let bytes = self.read_raw(length)?;
        String::from_utf8(bytes).map_err(|e| FalcataError::corrupt(format!("invalid UTF-8: {e}")))
    }

    /// Read exactly `length` raw bytes.
    ///
    /// The buffer grows with the data actually read, so a bogus length can
    /// not force a huge allocation up front.
    pub fn read_raw(&mut self, length: u64) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        (&mut self.reader).take(length).read_to_end(&mut bytes)?;
        if (bytes.len() as u64) < length {
            return Err(FalcataError::corrupt("unexpected end of data"));
        }
        self.update_checksum(&bytes);
        Ok(bytes)
    }

    /// Bytes read so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    fn update_checksum(&mut self, data: &[u8]) {
        self.hasher.update(data);
        self.position += data.len() as u64;
    }

    /// Read the trailing checksum, compare it with the data read so far and
    /// require that nothing follows it.
    pub fn verify_checksum(mut self) -> Result<()> {
        let computed = self.hasher.clone().finalize();
        let stored = self.reader.read_u32::<LittleEndian>().map_err(truncated)?;
        if stored != computed {
            return Err(FalcataError::corrupt(format!(
                "checksum mismatch: stored {stored:#010x}, computed {computed:#010x}"
            )));
        }

        let mut trailing = [0u8; 1];
        if self.reader.read(&mut trailing)? != 0 {
            return Err(FalcataError::corrupt("trailing data after checksum"));
        }
        Ok(())
    }
}

fn truncated(error: io::Error) -> FalcataError {
    match error.kind() {
        io::ErrorKind::UnexpectedEof => FalcataError::corrupt("unexpected end of data"),
        _ => FalcataError::Io(error),
    }
}
