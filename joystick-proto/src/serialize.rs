//! JSON line serialization for sample records.
//!
//! This module provides the [`Serialize`] trait for writing a
//! [`SampleRecord`] in the node's wire format.
//!
//! # Wire Format
//!
//! ```text
//! {"S1":<0|1>,"H1":<int>,"V1":<int>,"S2":<0|1>,"H2":<int>,"V2":<int>}\r\n
//! ```
//!
//! Compact JSON: quoted keys, plain integer values, no whitespace.
//!
//! # Example
//!
//! ```
//! use joystick_proto::{SampleRecord, Serialize};
//!
//! let record = SampleRecord::centered();
//! let mut buf = [0u8; 96];
//! let len = record.serialize(&mut buf).unwrap();
//!
//! assert_eq!(&buf[..len], br#"{"S1":0,"H1":0,"V1":0,"S2":0,"H2":0,"V2":0}"#);
//! ```

use crate::fmt::{write_i32, MAX_I32_LEN};
use crate::types::SampleRecord;

/// Line terminator appended after every record and diagnostic line.
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Maximum size of a serialized record, without the line terminator.
///
/// Breakdown: {(1) + 6*key `"XX":`(30) + 2*switch(2) + 4*i32(44) + 5*comma(5) + }(1) = 83
pub const MAX_RECORD_SIZE: usize = 83;

/// Maximum size of a serialized record including the line terminator.
pub const MAX_LINE_SIZE: usize = MAX_RECORD_SIZE + LINE_ENDING.len();

/// Error type for serialization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializeError {
    /// The output buffer is too small to hold the serialized record.
    BufferTooSmall,
    /// A write operation failed (for I/O adapters).
    WriteError,
}

impl core::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::WriteError => write!(f, "write error"),
        }
    }
}

/// Cursor over the output buffer.
struct SerializeBuf<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SerializeBuf<'a> {
    #[inline]
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn write(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    fn write_slice(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    #[inline]
    fn write_i32(&mut self, value: i32) {
        let mut tmp = [0u8; MAX_I32_LEN];
        let len = write_i32(&mut tmp, value);
        self.write_slice(&tmp[..len]);
    }

    #[inline]
    fn finish(self) -> usize {
        self.pos
    }
}

/// Extension trait for serializing records.
///
/// # Example
///
/// ```
/// use joystick_proto::{SampleRecord, Serialize, MAX_LINE_SIZE};
///
/// let mut buf = [0u8; MAX_LINE_SIZE];
/// let len = SampleRecord::centered().serialize_line(&mut buf).unwrap();
/// assert!(buf[..len].ends_with(b"}\r\n"));
/// ```
pub trait Serialize {
    /// Serialize the JSON object to the provided buffer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is not large enough.
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError>;

    /// Serialize the JSON object followed by [`LINE_ENDING`].
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is not large enough.
    fn serialize_line(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        if buf.len() < MAX_LINE_SIZE {
            return Err(SerializeError::BufferTooSmall);
        }
        let len = self.serialize(buf)?;
        buf[len..len + LINE_ENDING.len()].copy_from_slice(LINE_ENDING);
        Ok(len + LINE_ENDING.len())
    }

    /// Serialize to a `heapless::Vec`, without the line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `N` is not large enough.
    #[cfg(feature = "heapless")]
    fn serialize_to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        let mut vec = heapless::Vec::new();
        // Resize to full capacity to allow serialize() to write
        vec.resize(N, 0)
            .map_err(|_| SerializeError::BufferTooSmall)?;
        let len = self.serialize(&mut vec)?;
        vec.truncate(len);
        Ok(vec)
    }

    /// Serialize to a `core::fmt::Write` implementation, without the line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::WriteError`] if the write fails.
    fn serialize_fmt<W: core::fmt::Write>(&self, writer: &mut W) -> Result<(), SerializeError>;

    /// Serialize a full line to an `embedded_io::Write` implementation.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::WriteError`] if the write fails.
    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError>;
}

impl Serialize for SampleRecord {
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        if buf.len() < MAX_RECORD_SIZE {
            return Err(SerializeError::BufferTooSmall);
        }

        let mut sb = SerializeBuf::new(buf);

        sb.write(b'{');
        for (i, (key, value)) in self.fields().into_iter().enumerate() {
            if i > 0 {
                sb.write(b',');
            }
            sb.write(b'"');
            sb.write_slice(key.as_str().as_bytes());
            sb.write_slice(b"\":");
            sb.write_i32(value);
        }
        sb.write(b'}');

        Ok(sb.finish())
    }

    fn serialize_fmt<W: core::fmt::Write>(&self, writer: &mut W) -> Result<(), SerializeError> {
        let mut buf = [0u8; MAX_RECORD_SIZE];
        let len = self.serialize(&mut buf)?;

        let s = core::str::from_utf8(&buf[..len]).map_err(|_| SerializeError::WriteError)?;
        writer.write_str(s).map_err(|_| SerializeError::WriteError)
    }

    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError> {
        let mut buf = [0u8; MAX_LINE_SIZE];
        let len = self.serialize_line(&mut buf)?;
        writer
            .write_all(&buf[..len])
            .map_err(|_| SerializeError::WriteError)
    }
}
