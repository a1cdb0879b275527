/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Addenda and service groups: `{7620}` and `{9000}`.

use crate::common::{LINE_WIDTH, check_text};
use crate::group::FieldGroup;
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// Width of the addenda length counter.
pub const ADDENDA_LENGTH_WIDTH: usize = 4;
/// Maximum addenda payload.
pub const ADDENDA_MAX: usize = 8994;
/// Number of free-text lines in a service message.
pub const SERVICE_MESSAGE_LINES: usize = 12;

/// Unstructured Addenda `{7620}`: a self-counted free-text payload for
/// the addenda-bearing local instruments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnstructuredAddenda {
    /// Declared length of the addenda payload.
    pub addenda_length: u64,
    /// The addenda payload.
    pub addenda: String,
}

impl UnstructuredAddenda {
    /// Creates an addenda group with the length derived from the payload.
    #[must_use]
    pub fn new(addenda: impl Into<String>) -> Self {
        let addenda = addenda.into();
        Self {
            addenda_length: addenda.len() as u64,
            addenda,
        }
    }
}

impl FieldGroup for UnstructuredAddenda {
    const TAG: Tag = Tag::UnstructuredAddenda;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            addenda_length: cur.numeric("addenda length", ADDENDA_LENGTH_WIDTH)?,
            addenda: cur.remainder("addenda", ADDENDA_MAX)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.numeric(self.addenda_length, ADDENDA_LENGTH_WIDTH);
        enc.remainder(&self.addenda);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if self.addenda.len() > ADDENDA_MAX {
            return Err(FieldError::TooLong {
                tag: Self::TAG,
                property: "addenda",
                length: self.addenda.len(),
                max: ADDENDA_MAX,
            });
        }
        if self.addenda_length != self.addenda.len() as u64 {
            return Err(FieldError::InvalidNumeric {
                tag: Self::TAG,
                property: "addenda length",
                value: self.addenda_length.to_string(),
            });
        }
        check_text(Self::TAG, "addenda", &self.addenda, ADDENDA_MAX)
    }
}

/// Service Message `{9000}`: twelve free-text lines, legal only under the
/// `SVC` business function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMessage {
    /// The message lines, always twelve.
    pub lines: Vec<String>,
}

impl ServiceMessage {
    /// Creates a service message, padding or truncating to twelve lines.
    #[must_use]
    pub fn new(mut lines: Vec<String>) -> Self {
        lines.resize(SERVICE_MESSAGE_LINES, String::new());
        Self { lines }
    }
}

impl Default for ServiceMessage {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FieldGroup for ServiceMessage {
    const TAG: Tag = Tag::ServiceMessage;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let mut lines = Vec::with_capacity(SERVICE_MESSAGE_LINES);
        for _ in 0..SERVICE_MESSAGE_LINES {
            lines.push(cur.text("line", LINE_WIDTH)?);
        }
        cur.finish()?;
        Ok(Self { lines })
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        for i in 0..SERVICE_MESSAGE_LINES {
            enc.text(self.lines.get(i).map_or("", String::as_str), LINE_WIDTH);
        }
    }

    fn validate(&self) -> Result<(), FieldError> {
        for line in &self.lines {
            check_text(Self::TAG, "line", line, LINE_WIDTH)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwire_tagrecord::Format;

    fn round_trip<G: FieldGroup + PartialEq + std::fmt::Debug>(group: &G, format: Format) {
        let mut enc = RecordEncoder::new(format);
        group.encode(&mut enc);
        let raw = String::from_utf8(enc.into_bytes().to_vec()).unwrap();
        let cur = Cursor::new(G::TAG, &raw, format).unwrap();
        assert_eq!(&G::decode(cur).unwrap(), group, "round trip in {format:?} mode");
    }

    #[test]
    fn test_addenda_round_trip() {
        let group = UnstructuredAddenda::new("ISA~00~ REMIT DATA 778");
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();
    }

    #[test]
    fn test_addenda_length_mismatch() {
        let group = UnstructuredAddenda {
            addenda_length: 5,
            addenda: "ABC".to_string(),
        };
        assert!(matches!(
            group.validate().unwrap_err(),
            FieldError::InvalidNumeric { property: "addenda length", .. }
        ));
    }

    #[test]
    fn test_service_message_always_twelve_lines() {
        let group = ServiceMessage::new(vec![
            "REFER TO IMAD 20260315MMQF".to_string(),
            "CONTACT FUNDS DESK".to_string(),
        ]);
        assert_eq!(group.lines.len(), SERVICE_MESSAGE_LINES);
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();
    }
}
