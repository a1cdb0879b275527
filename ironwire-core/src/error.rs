/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Error types for the IronWire Fedwire engine.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all IronWire operations:
//! - [`DecodeError`]: stream and record structure failures
//! - [`EncodeError`]: serialization failures
//! - [`FieldError`]: per-sub-field structural failures
//! - [`PresenceError`]: conditional-presence rule failures
//!
//! All errors carry enough identity (tag, sub-field property, offending
//! value, line number) for the caller to render a precise message. The core
//! never logs or swallows an error.

use crate::tag::Tag;
use thiserror::Error;

/// Result type alias using [`WireError`] as the error type.
pub type Result<T> = std::result::Result<T, WireError>;

/// Top-level error type for all IronWire operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// Error during message decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error during message encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Structural sub-field validation error.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Conditional-presence validation error.
    #[error("presence error: {0}")]
    Presence(#[from] PresenceError),

    /// I/O error from the underlying stream or sink.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while decoding a Fedwire byte stream into records
/// and field groups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input stream contained no records at all.
    #[error("no data: input stream is empty")]
    NoData,

    /// A record did not start with a well-formed brace-delimited tag.
    #[error("line {line}: malformed tag in record '{snippet}'")]
    InvalidTag {
        /// One-based line number of the record.
        line: usize,
        /// The leading bytes of the offending record.
        snippet: String,
    },

    /// A record carried a tag number IronWire does not know.
    #[error("line {line}: unknown tag {tag}")]
    UnknownTag {
        /// One-based line number of the record.
        line: usize,
        /// The brace-delimited tag string.
        tag: String,
    },

    /// A single-valued tag appeared twice in one message.
    #[error("line {line}: duplicate tag {tag}")]
    DuplicateTag {
        /// One-based line number of the second occurrence.
        line: usize,
        /// The repeated tag.
        tag: Tag,
    },

    /// A fixed-width record is shorter than the group's declared width.
    #[error("{tag}: record too short, sub-field '{property}' needs {width} more characters")]
    ShortRecord {
        /// The owning tag.
        tag: Tag,
        /// The sub-field being read when input ran out.
        property: &'static str,
        /// Characters missing.
        width: usize,
    },

    /// A fixed-width record is longer than the group's declared width.
    #[error("{tag}: {remaining} unexpected trailing characters")]
    TrailingContent {
        /// The owning tag.
        tag: Tag,
        /// Number of unconsumed characters.
        remaining: usize,
    },

    /// A variable-width record did not carry the expected number of
    /// delimited sub-fields.
    #[error("{tag}: expected {expected} delimited sub-fields, found {found}")]
    SubFieldCount {
        /// The owning tag.
        tag: Tag,
        /// Sub-fields the group defines.
        expected: usize,
        /// Sub-fields present in the record.
        found: usize,
    },

    /// A variable-width record was not terminated by the end-of-group marker.
    #[error("{tag}: variable-width record missing terminal delimiter")]
    MissingTerminator {
        /// The owning tag.
        tag: Tag,
    },

    /// A delimited sub-field exceeds its maximum width.
    #[error("{tag}: sub-field '{property}' is {length} characters, maximum {max}")]
    SubFieldTooLong {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// Actual length.
        length: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A numeric sub-field contained non-digit characters.
    #[error("{tag}: sub-field '{property}' is not numeric: '{value}'")]
    NotNumeric {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// The offending value.
        value: String,
    },

    /// Invalid UTF-8 in the input stream.
    #[error("invalid utf-8 in input: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A record's payload failed to decode.
    #[error("line {line}: {source}")]
    Record {
        /// One-based line number of the record.
        line: usize,
        /// The underlying decode failure.
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attaches the record's line number to a payload decode failure.
    ///
    /// Errors that already name a line pass through unchanged.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            err @ (Self::InvalidTag { .. }
            | Self::UnknownTag { .. }
            | Self::DuplicateTag { .. }
            | Self::Record { .. }) => err,
            err => Self::Record {
                line,
                source: Box::new(err),
            },
        }
    }
}

/// Errors that occur during Fedwire message encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A group mandatory for the message's classifiers is absent.
    #[error("missing mandatory field group {tag}")]
    MissingMandatoryGroup {
        /// The absent tag.
        tag: Tag,
    },

    /// A group the rule table forbids for the message's classifiers is
    /// present.
    #[error("field group {tag} not permitted for this message")]
    ForbiddenGroup {
        /// The offending tag.
        tag: Tag,
    },

    /// The message carries no classifier groups, so no canonical order
    /// can be established.
    #[error("message has no business function code, cannot serialize")]
    MissingClassifier,
}

/// Structural sub-field validation errors.
///
/// Reported with the owning tag, the sub-field property name, and the
/// offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A sub-field value exceeds its maximum length.
    #[error("{tag}: '{property}' is {length} characters, maximum {max}")]
    TooLong {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// Actual length.
        length: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A required sub-field within a present group is empty.
    #[error("{tag}: '{property}' is required")]
    MissingSubField {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
    },

    /// A sub-field contains characters outside the Fedwire character set.
    #[error("{tag}: '{property}' contains invalid characters: '{value}'")]
    InvalidCharset {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// The offending value.
        value: String,
    },

    /// An enumerated sub-field holds a value outside its code table.
    #[error("{tag}: '{property}' has unknown code '{value}'")]
    InvalidCode {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// The offending code.
        value: String,
    },

    /// A date sub-field is not a valid calendar date in its format.
    #[error("{tag}: '{property}' is not a valid date: '{value}'")]
    InvalidDate {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// The offending value.
        value: String,
    },

    /// A numeric sub-field fails its format check.
    #[error("{tag}: '{property}' has invalid numeric format: '{value}'")]
    InvalidNumeric {
        /// The owning tag.
        tag: Tag,
        /// The sub-field name.
        property: &'static str,
        /// The offending value.
        value: String,
    },

    /// An amount does not fit the digit width of its field.
    #[error("{tag}: amount {value} does not fit the field width")]
    AmountTooLarge {
        /// The owning tag.
        tag: Tag,
        /// The offending amount in cents.
        value: u64,
    },
}

/// Conditional-presence validation errors.
///
/// Reported with the classifier values that selected the violated rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresenceError {
    /// A group required for the active classifier combination is absent.
    #[error("required field group missing: {tag} (business function code {business_function_code})")]
    RequiredGroupMissing {
        /// The absent tag.
        tag: Tag,
        /// The business function code that requires it.
        business_function_code: String,
    },

    /// A group forbidden for the active classifier combination is present.
    #[error(
        "forbidden field group present: {tag} (business function code \
         {business_function_code}, local instrument {local_instrument})"
    )]
    ForbiddenGroupPresent {
        /// The illegal tag.
        tag: Tag,
        /// The business function code in effect.
        business_function_code: String,
        /// The local instrument code in effect, or `"none"`.
        local_instrument: String,
    },

    /// The type/sub-type combination conflicts with the business function
    /// code.
    #[error(
        "sub-type code {sub_type_code} is inconsistent with business function \
         code {business_function_code}"
    )]
    InconsistentSubType {
        /// The sub-type code in effect.
        sub_type_code: String,
        /// The business function code in effect.
        business_function_code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::ShortRecord {
            tag: Tag::Amount,
            property: "amount",
            width: 5,
        };
        assert_eq!(
            err.to_string(),
            "{2000}: record too short, sub-field 'amount' needs 5 more characters"
        );
    }

    #[test]
    fn test_at_line_wraps_payload_errors_once() {
        let wrapped = DecodeError::ShortRecord {
            tag: Tag::Amount,
            property: "amount",
            width: 5,
        }
        .at_line(3);
        assert_eq!(wrapped.to_string(), "line 3: {2000}: record too short, sub-field 'amount' needs 5 more characters");

        let already_located = DecodeError::DuplicateTag {
            line: 7,
            tag: Tag::Amount,
        };
        assert_eq!(already_located.clone().at_line(9), already_located);
    }

    #[test]
    fn test_wire_error_from_decode() {
        let err: WireError = DecodeError::NoData.into();
        assert!(matches!(err, WireError::Decode(DecodeError::NoData)));
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::InvalidCode {
            tag: Tag::BusinessFunctionCode,
            property: "business function code",
            value: "XXX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "{3600}: 'business function code' has unknown code 'XXX'"
        );
    }

    #[test]
    fn test_presence_error_display() {
        let err = PresenceError::RequiredGroupMissing {
            tag: Tag::Beneficiary,
            business_function_code: "CTR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required field group missing: {4200} (business function code CTR)"
        );
    }
}
