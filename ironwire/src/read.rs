/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Reading Fedwire byte streams into [`File`]s.

use crate::file::File;
use ironwire_core::error::{DecodeError, Result};
use ironwire_core::options::ValidationOptions;
use ironwire_core::tag::Tag;
use ironwire_fields::FedwireMessage;
use ironwire_tagrecord::{Cursor, Format, RecordReader};
use tracing::{debug, trace};

/// Options for [`read_with_opts`]: the wire mode and the validation
/// relaxations to thread into the returned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// The wire mode the input is encoded in.
    pub format: Format,
    /// Relaxations honored during reading and by a later `validate()`.
    pub validation: ValidationOptions,
}

/// Reads a Fedwire file in the given wire mode with strict options.
///
/// The mode is a property of the producing channel and is never sniffed
/// from the input.
///
/// # Errors
///
/// Returns a [`DecodeError`] for an empty stream, a malformed or unknown
/// tag, a duplicated tag, or a record that does not match its group layout.
pub fn read(input: &[u8], format: Format) -> Result<File> {
    read_with_opts(
        input,
        ReadOptions {
            format,
            ..ReadOptions::default()
        },
    )
}

/// Reads a Fedwire file, honoring the relaxations in `opts`.
///
/// With `allow_unknown_tags` set, records carrying a tag outside the
/// catalogue are skipped instead of failing the read. The validation
/// options are stored on the returned [`File`] so an immediately following
/// `validate()` applies the same relaxations.
///
/// # Errors
///
/// See [`read`].
pub fn read_with_opts(input: &[u8], opts: ReadOptions) -> Result<File> {
    debug!(bytes = input.len(), format = ?opts.format, "reading fedwire input");

    let mut reader = RecordReader::new(input);
    let mut message = FedwireMessage::new();
    let mut records = 0usize;

    while let Some(record) = reader.next_record() {
        let record = record?;
        trace!(line = record.line, tag = record.tag, "record");

        let Ok(tag) = record.tag.parse::<Tag>() else {
            if opts.validation.allow_unknown_tags {
                trace!(line = record.line, tag = record.tag, "skipping unknown tag");
                continue;
            }
            return Err(DecodeError::UnknownTag {
                line: record.line,
                tag: record.tag.to_string(),
            }
            .into());
        };

        let cursor =
            Cursor::new(tag, record.payload, opts.format).map_err(|e| e.at_line(record.line))?;
        message
            .decode_into(tag, cursor, record.line)
            .map_err(|e| e.at_line(record.line))?;
        records += 1;
    }

    if records == 0 {
        return Err(DecodeError::NoData.into());
    }

    debug!(records, "read complete");
    Ok(File::new()
        .with_format(opts.format)
        .with_options(opts.validation)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write;
    use ironwire_core::codes;
    use ironwire_core::error::WireError;
    use ironwire_fields::{
        Amount, Beneficiary, BusinessFunctionCode, InputMessageAccountabilityData, Personal,
        ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderSupplied, TypeSubType,
    };

    fn ctr_file(format: Format) -> File {
        let mut msg = FedwireMessage::new();
        msg.sender_supplied = Some(SenderSupplied::default());
        msg.type_sub_type = Some(TypeSubType::new(
            codes::TypeCode::FundsTransfer,
            codes::SubTypeCode::BasicFundsTransfer,
        ));
        msg.input_message_accountability_data = Some(InputMessageAccountabilityData::new(
            "20260315", "MMQFMPQF", "000001",
        ));
        msg.amount = Some(Amount::new(1_234_567));
        msg.sender_depository_institution =
            Some(SenderDepositoryInstitution::new("121000248", "WELLS FARGO"));
        msg.receiver_depository_institution =
            Some(ReceiverDepositoryInstitution::new("021000021", "CHASE NYC"));
        msg.business_function_code = Some(BusinessFunctionCode::new(
            codes::BusinessFunctionCode::CustomerTransfer,
        ));
        msg.beneficiary = Some(Beneficiary::new(Personal::new(
            codes::IdentificationCode::DemandDepositAccount,
            "101100045",
            "JANE SMITH",
        )));
        File::new().with_format(format).with_message(msg)
    }

    fn wire_bytes(format: Format) -> Vec<u8> {
        let file = ctr_file(format);
        let mut out = Vec::new();
        write(&mut out, &file).unwrap();
        out
    }

    #[test]
    fn test_round_trip_fixed() {
        let bytes = wire_bytes(Format::Fixed);
        let file = read(&bytes, Format::Fixed).unwrap();
        assert_eq!(file.fed_wire_message, ctr_file(Format::Fixed).fed_wire_message);
        file.validate().unwrap();
    }

    #[test]
    fn test_round_trip_variable() {
        let bytes = wire_bytes(Format::Variable);
        let file = read(&bytes, Format::Variable).unwrap();
        assert_eq!(
            file.fed_wire_message,
            ctr_file(Format::Variable).fed_wire_message
        );
        file.validate().unwrap();
    }

    #[test]
    fn test_empty_stream_is_no_data() {
        assert!(matches!(
            read(b"", Format::Fixed).unwrap_err(),
            WireError::Decode(DecodeError::NoData)
        ));
        assert!(matches!(
            read(b"\n\n", Format::Fixed).unwrap_err(),
            WireError::Decode(DecodeError::NoData)
        ));
    }

    #[test]
    fn test_unknown_tag_strict_and_relaxed() {
        let mut bytes = wire_bytes(Format::Variable);
        bytes.extend_from_slice(b"{8200}FUTURE USE*\n");

        let err = read(&bytes, Format::Variable).unwrap_err();
        assert!(matches!(
            err,
            WireError::Decode(DecodeError::UnknownTag { ref tag, .. }) if tag == "{8200}"
        ));

        let opts = ReadOptions {
            format: Format::Variable,
            validation: ValidationOptions::new().with_allow_unknown_tags(true),
        };
        let file = read_with_opts(&bytes, opts).unwrap();
        file.validate().unwrap();
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut bytes = wire_bytes(Format::Variable);
        bytes.extend_from_slice(b"{2000}000000000001*\n");

        assert!(matches!(
            read(&bytes, Format::Variable).unwrap_err(),
            WireError::Decode(DecodeError::DuplicateTag { tag: Tag::Amount, .. })
        ));
    }

    #[test]
    fn test_crlf_tolerated() {
        let bytes = wire_bytes(Format::Variable);
        let crlf: Vec<u8> = String::from_utf8(bytes)
            .unwrap()
            .replace('\n', "\r\n")
            .into_bytes();
        let file = read(&crlf, Format::Variable).unwrap();
        file.validate().unwrap();
    }

    #[test]
    fn test_codec_error_reports_line() {
        let bytes = b"{1500}30        T \n{2000}000001234567XX\n";
        let err = read(bytes, Format::Fixed).unwrap_err();
        let WireError::Decode(DecodeError::Record { line, source }) = err else {
            panic!("expected a line-wrapped decode error, got {err:?}");
        };
        assert_eq!(line, 2);
        assert!(matches!(
            *source,
            DecodeError::TrailingContent { tag: Tag::Amount, remaining: 2 }
        ));
    }

    #[test]
    fn test_malformed_tag_reports_line() {
        let err = read(b"1500}30*\n", Format::Variable).unwrap_err();
        assert!(matches!(
            err,
            WireError::Decode(DecodeError::InvalidTag { line: 1, .. })
        ));
    }
}
