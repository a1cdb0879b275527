/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Record encoder for Fedwire output.
//!
//! Builds tag records into a reusable [`BytesMut`] buffer. Text sub-fields
//! are space-padded right in fixed mode and `*`-delimited in variable mode;
//! numeric sub-fields are zero-padded left to their full width in both
//! modes, so padding stays canonical regardless of mode.

use crate::cursor::{DELIMITER, Format};
use bytes::{BufMut, BytesMut};
use ironwire_core::tag::Tag;

/// Fedwire record encoder.
///
/// One encoder serializes a whole file: call [`begin`](Self::begin) per
/// group, append its sub-fields, then [`end`](Self::end) to terminate the
/// record.
#[derive(Debug)]
pub struct RecordEncoder {
    /// Output buffer.
    buf: BytesMut,
    /// Encoding mode for text sub-fields.
    format: Format,
}

impl RecordEncoder {
    /// Creates a new encoder for the given mode.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self::with_capacity(format, 512)
    }

    /// Creates a new encoder with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(format: Format, capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            format,
        }
    }

    /// Returns the encoding mode.
    #[inline]
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Starts a record by writing its tag.
    #[inline]
    pub fn begin(&mut self, tag: Tag) {
        self.buf.put_slice(tag.as_str().as_bytes());
    }

    /// Appends a text sub-field of the given width.
    ///
    /// The value is truncated at `width` characters; structural validation
    /// rejects over-long values before encoding is reached.
    pub fn text(&mut self, value: &str, width: usize) {
        let truncated = match value.char_indices().nth(width) {
            Some((pos, _)) => &value[..pos],
            None => value,
        };
        self.buf.put_slice(truncated.as_bytes());

        match self.format {
            Format::Fixed => {
                for _ in truncated.chars().count()..width {
                    self.buf.put_u8(b' ');
                }
            }
            Format::Variable => self.buf.put_u8(DELIMITER),
        }
    }

    /// Appends a zero-padded numeric sub-field of the given width.
    pub fn numeric(&mut self, value: u64, width: usize) {
        let mut digits = itoa::Buffer::new();
        let formatted = digits.format(value);
        for _ in formatted.len()..width {
            self.buf.put_u8(b'0');
        }
        self.buf.put_slice(formatted.as_bytes());
        if self.format == Format::Variable {
            self.buf.put_u8(DELIMITER);
        }
    }

    /// Appends a free-form tail sub-field: written as-is with no padding in
    /// fixed mode, delimited in variable mode.
    pub fn remainder(&mut self, value: &str) {
        self.buf.put_slice(value.as_bytes());
        if self.format == Format::Variable {
            self.buf.put_u8(DELIMITER);
        }
    }

    /// Terminates the current record.
    #[inline]
    pub fn end(&mut self) {
        self.buf.put_u8(b'\n');
    }

    /// Returns the encoded bytes so far.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the encoder and returns the buffer.
    #[must_use]
    pub fn into_bytes(self) -> BytesMut {
        self.buf
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the encoder for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
