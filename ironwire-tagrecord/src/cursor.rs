/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Sub-field cursor over one record payload.
//!
//! A field group reads its sub-fields in declaration order through a
//! [`Cursor`], which hides the difference between the two encoding modes:
//! fixed-width mode slices declared column ranges, variable-width mode walks
//! `*`-delimited tokens. The cursor enforces the structural rules of each
//! mode: short or over-long fixed records, missing terminators, and
//! sub-field count mismatches.

use ironwire_core::error::DecodeError;
use ironwire_core::tag::Tag;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Sub-field delimiter and end-of-group marker in variable-width mode.
pub const DELIMITER: u8 = b'*';

/// Record encoding mode, chosen per file at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Format {
    /// Every sub-field occupies its declared column range.
    #[default]
    Fixed,
    /// Text sub-fields are `*`-delimited; the final delimiter terminates
    /// the group.
    Variable,
}

/// Reads sub-fields from a single record payload.
#[derive(Debug)]
pub struct Cursor<'a> {
    /// The owning tag, for error reporting.
    tag: Tag,
    /// Encoding mode.
    format: Format,
    /// The record payload after the tag.
    payload: &'a str,
    /// Byte position, fixed mode.
    pos: usize,
    /// Delimited tokens, variable mode.
    parts: SmallVec<[&'a str; 8]>,
    /// Next token index, variable mode.
    idx: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over a record payload.
    ///
    /// # Errors
    /// In variable mode, returns `DecodeError::MissingTerminator` if the
    /// payload does not end with the delimiter.
    pub fn new(tag: Tag, payload: &'a str, format: Format) -> Result<Self, DecodeError> {
        let parts = match format {
            Format::Fixed => SmallVec::new(),
            Format::Variable => {
                let Some(body) = payload.strip_suffix(DELIMITER as char) else {
                    return Err(DecodeError::MissingTerminator { tag });
                };
                body.split(DELIMITER as char).collect()
            }
        };

        Ok(Self {
            tag,
            format,
            payload,
            pos: 0,
            parts,
            idx: 0,
        })
    }

    /// Reads a text sub-field of the given maximum width.
    ///
    /// Fixed mode consumes exactly `width` characters and strips the
    /// right-padding; variable mode consumes the next token.
    ///
    /// # Errors
    /// Returns `DecodeError` on a short record, an over-long token, or an
    /// exhausted token list.
    pub fn text(&mut self, property: &'static str, width: usize) -> Result<String, DecodeError> {
        let raw = self.take(property, width)?;
        Ok(match self.format {
            Format::Fixed => raw.trim_end_matches(' ').to_string(),
            Format::Variable => raw.to_string(),
        })
    }

    /// Reads a zero-padded numeric sub-field of the given width.
    ///
    /// # Errors
    /// Returns `DecodeError::NotNumeric` if the value holds anything but
    /// ASCII digits.
    pub fn numeric(&mut self, property: &'static str, width: usize) -> Result<u64, DecodeError> {
        let raw = self.take(property, width)?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::NotNumeric {
                tag: self.tag,
                property,
                value: raw.to_string(),
            });
        }
        raw.parse().map_err(|_| DecodeError::NotNumeric {
            tag: self.tag,
            property,
            value: raw.to_string(),
        })
    }

    /// Reads a free-form tail sub-field: the rest of the payload in fixed
    /// mode, the next token in variable mode. No padding is stripped.
    ///
    /// # Errors
    /// Returns `DecodeError::SubFieldTooLong` if the value exceeds `max`.
    pub fn remainder(&mut self, property: &'static str, max: usize) -> Result<String, DecodeError> {
        match self.format {
            Format::Fixed => {
                let rest = &self.payload[self.pos..];
                if rest.len() > max {
                    return Err(DecodeError::SubFieldTooLong {
                        tag: self.tag,
                        property,
                        length: rest.len(),
                        max,
                    });
                }
                self.pos = self.payload.len();
                Ok(rest.to_string())
            }
            Format::Variable => {
                let token = self.take(property, max)?;
                Ok(token.to_string())
            }
        }
    }

    /// Checks that the record has been fully consumed.
    ///
    /// # Errors
    /// Returns `DecodeError::TrailingContent` (fixed) or
    /// `DecodeError::SubFieldCount` (variable) otherwise.
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.format {
            Format::Fixed => {
                if self.pos < self.payload.len() {
                    return Err(DecodeError::TrailingContent {
                        tag: self.tag,
                        remaining: self.payload.len() - self.pos,
                    });
                }
            }
            Format::Variable => {
                if self.idx < self.parts.len() {
                    return Err(DecodeError::SubFieldCount {
                        tag: self.tag,
                        expected: self.idx,
                        found: self.parts.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Takes the next raw sub-field slice.
    fn take(&mut self, property: &'static str, width: usize) -> Result<&'a str, DecodeError> {
        match self.format {
            Format::Fixed => {
                let end = self.pos + width;
                let slice = self
                    .payload
                    .get(self.pos..end)
                    .ok_or(DecodeError::ShortRecord {
                        tag: self.tag,
                        property,
                        width: end.saturating_sub(self.payload.len()),
                    })?;
                self.pos = end;
                Ok(slice)
            }
            Format::Variable => {
                let token = *self
                    .parts
                    .get(self.idx)
                    .ok_or(DecodeError::SubFieldCount {
                        tag: self.tag,
                        expected: self.idx + 1,
                        found: self.parts.len(),
                    })?;
                if token.len() > width {
                    return Err(DecodeError::SubFieldTooLong {
                        tag: self.tag,
                        property,
                        length: token.len(),
                        max: width,
                    });
                }
                self.idx += 1;
                Ok(token)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_text_strips_padding() {
        let mut cur = Cursor::new(Tag::SenderReference, "LOAN 001        ", Format::Fixed).unwrap();
        assert_eq!(cur.text("sender reference", 16).unwrap(), "LOAN 001");
        cur.finish().unwrap();
    }

    #[test]
    fn test_fixed_short_record() {
        let mut cur = Cursor::new(Tag::Amount, "0001234", Format::Fixed).unwrap();
        let err = cur.numeric("amount", 12).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ShortRecord {
                tag: Tag::Amount,
                property: "amount",
                width: 5,
            }
        );
    }

    #[test]
    fn test_fixed_trailing_content() {
        let mut cur = Cursor::new(Tag::Amount, "000001234567XX", Format::Fixed).unwrap();
        cur.numeric("amount", 12).unwrap();
        assert_eq!(
            cur.finish().unwrap_err(),
            DecodeError::TrailingContent {
                tag: Tag::Amount,
                remaining: 2,
            }
        );
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        let mut cur = Cursor::new(Tag::Amount, "0000012345A7", Format::Fixed).unwrap();
        assert!(matches!(
            cur.numeric("amount", 12).unwrap_err(),
            DecodeError::NotNumeric { .. }
        ));
    }

    #[test]
    fn test_variable_tokens() {
        let mut cur = Cursor::new(Tag::TypeSubType, "10*00*", Format::Variable).unwrap();
        assert_eq!(cur.text("type code", 2).unwrap(), "10");
        assert_eq!(cur.text("sub-type code", 2).unwrap(), "00");
        cur.finish().unwrap();
    }

    #[test]
    fn test_variable_missing_terminator() {
        let err = Cursor::new(Tag::TypeSubType, "10*00", Format::Variable).unwrap_err();
        assert_eq!(err, DecodeError::MissingTerminator { tag: Tag::TypeSubType });
    }

    #[test]
    fn test_variable_count_mismatch() {
        let mut cur = Cursor::new(Tag::TypeSubType, "10*", Format::Variable).unwrap();
        cur.text("type code", 2).unwrap();
        assert!(matches!(
            cur.text("sub-type code", 2).unwrap_err(),
            DecodeError::SubFieldCount { .. }
        ));
    }

    #[test]
    fn test_variable_extra_tokens() {
        let mut cur = Cursor::new(Tag::TypeSubType, "10*00*99*", Format::Variable).unwrap();
        cur.text("type code", 2).unwrap();
        cur.text("sub-type code", 2).unwrap();
        assert!(matches!(
            cur.finish().unwrap_err(),
            DecodeError::SubFieldCount { .. }
        ));
    }

    #[test]
    fn test_variable_over_long_token() {
        let mut cur = Cursor::new(Tag::TypeSubType, "1000*", Format::Variable).unwrap();
        assert!(matches!(
            cur.text("type code", 2).unwrap_err(),
            DecodeError::SubFieldTooLong { .. }
        ));
    }

    #[test]
    fn test_remainder_takes_tail() {
        let mut cur = Cursor::new(Tag::UnstructuredAddenda, "0009ABCD EFGH", Format::Fixed).unwrap();
        assert_eq!(cur.numeric("addenda length", 4).unwrap(), 9);
        assert_eq!(cur.remainder("addenda", 8994).unwrap(), "ABCD EFGH");
        cur.finish().unwrap();
    }

    #[test]
    fn test_variable_empty_token_is_empty_string() {
        let mut cur = Cursor::new(Tag::SenderReference, "*", Format::Variable).unwrap();
        assert_eq!(cur.text("sender reference", 16).unwrap(), "");
        cur.finish().unwrap();
    }
}
