/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Record-level reader for Fedwire input streams.
//!
//! A Fedwire file is a sequence of newline-delimited records, each beginning
//! with a brace-delimited four-digit tag. [`RecordReader`] walks the input
//! and yields one [`RawRecord`] per line, leaving tag catalogue lookup and
//! sub-field decoding to the caller.

use ironwire_core::error::DecodeError;
use ironwire_core::tag::TAG_LEN;
use memchr::memchr;

/// One raw record: the brace-delimited tag string, the payload after it,
/// and the one-based line number it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// The tag exactly as it appears on the wire, e.g. `{1500}`.
    pub tag: &'a str,
    /// The record content after the tag.
    pub payload: &'a str,
    /// One-based line number within the input.
    pub line: usize,
}

/// Splits an input buffer into tag records.
///
/// CRLF line endings are tolerated on read; blank lines are skipped. The
/// reader holds no state beyond its cursor and performs no allocation.
#[derive(Debug)]
pub struct RecordReader<'a> {
    /// Input buffer.
    input: &'a [u8],
    /// Current position in the buffer.
    offset: usize,
    /// Line number of the next record.
    line: usize,
}

impl<'a> RecordReader<'a> {
    /// Creates a new reader over the given input buffer.
    #[inline]
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 0,
        }
    }

    /// Returns the next record, or `None` when the input is exhausted.
    ///
    /// # Errors
    /// Returns `DecodeError` if a record is not valid UTF-8 or does not
    /// begin with a well-formed tag.
    pub fn next_record(&mut self) -> Option<Result<RawRecord<'a>, DecodeError>> {
        loop {
            if self.offset >= self.input.len() {
                return None;
            }

            let remaining = &self.input[self.offset..];
            let (raw_line, consumed) = match memchr(b'\n', remaining) {
                Some(pos) => (&remaining[..pos], pos + 1),
                None => (remaining, remaining.len()),
            };
            self.offset += consumed;
            self.line += 1;

            let raw_line = match raw_line {
                [head @ .., b'\r'] => head,
                other => other,
            };
            if raw_line.is_empty() {
                continue;
            }

            let text = match std::str::from_utf8(raw_line) {
                Ok(text) => text,
                Err(e) => return Some(Err(DecodeError::from(e))),
            };

            return Some(self.split_tag(text));
        }
    }

    /// Returns true if the reader produced no records because the input
    /// held nothing but blank lines (or nothing at all).
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Splits a non-empty line into tag and payload.
    fn split_tag(&self, text: &'a str) -> Result<RawRecord<'a>, DecodeError> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() >= TAG_LEN
            && bytes[0] == b'{'
            && bytes[TAG_LEN - 1] == b'}'
            && bytes[1..TAG_LEN - 1].iter().all(u8::is_ascii_digit);

        if !well_formed {
            return Err(DecodeError::InvalidTag {
                line: self.line,
                snippet: text.chars().take(12).collect(),
            });
        }

        Ok(RawRecord {
            tag: &text[..TAG_LEN],
            payload: &text[TAG_LEN..],
            line: self.line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_records_in_order() {
        let input = b"{1500}30        T \n{2000}000001234567\n";
        let mut reader = RecordReader::new(input);

        let first = reader.next_record().unwrap().unwrap();
        assert_eq!(first.tag, "{1500}");
        assert_eq!(first.payload, "30        T ");
        assert_eq!(first.line, 1);

        let second = reader.next_record().unwrap().unwrap();
        assert_eq!(second.tag, "{2000}");
        assert_eq!(second.payload, "000001234567");
        assert_eq!(second.line, 2);

        assert!(reader.next_record().is_none());
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let input = b"{1510}1000\r\n\r\n{2000}000000000100";
        let mut reader = RecordReader::new(input);

        assert_eq!(reader.next_record().unwrap().unwrap().tag, "{1510}");
        let rec = reader.next_record().unwrap().unwrap();
        assert_eq!(rec.tag, "{2000}");
        assert_eq!(rec.line, 3);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = RecordReader::new(b"");
        assert!(reader.next_record().is_none());
    }

    #[test]
    fn test_malformed_tag() {
        let mut reader = RecordReader::new(b"1500 no braces\n");
        let err = reader.next_record().unwrap().unwrap_err();
        assert!(matches!(err, DecodeError::InvalidTag { line: 1, .. }));
    }

    #[test]
    fn test_short_line_is_malformed() {
        let mut reader = RecordReader::new(b"{15\n");
        assert!(matches!(
            reader.next_record().unwrap().unwrap_err(),
            DecodeError::InvalidTag { .. }
        ));
    }

    #[test]
    fn test_non_digit_tag_is_malformed() {
        let mut reader = RecordReader::new(b"{15AB}payload\n");
        assert!(matches!(
            reader.next_record().unwrap().unwrap_err(),
            DecodeError::InvalidTag { .. }
        ));
    }
}
