/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Writing [`File`]s back to the wire.

use crate::file::File;
use ironwire_core::error::{EncodeError, Result};
use ironwire_core::tag::Tag;
use ironwire_rules::{BASELINE_REQUIRED, rule_set};
use ironwire_tagrecord::RecordEncoder;
use std::io;
use tracing::debug;

/// Serializes `file` to `sink` in the file's wire mode.
///
/// Records are emitted in canonical order: the mandatory core first, then
/// the remaining present groups by ascending tag. The output is buffered in
/// full and flushed before returning, so a failed write never leaves a
/// partial record behind.
///
/// # Errors
///
/// Refuses to emit a corrupt file: a structurally invalid group fails with
/// its [`FieldError`](ironwire_core::error::FieldError), a message without
/// a business function code with [`EncodeError::MissingClassifier`], a
/// missing mandatory group (per the rule table, after the file's options)
/// with [`EncodeError::MissingMandatoryGroup`], and a group the rule table
/// does not permit with [`EncodeError::ForbiddenGroup`]. Sink errors
/// propagate.
pub fn write<W: io::Write>(sink: &mut W, file: &File) -> Result<()> {
    let message = &file.fed_wire_message;
    message.validate_groups()?;

    let Some(business_function_code) = message.business_function() else {
        return Err(EncodeError::MissingClassifier.into());
    };
    let rules = rule_set(
        business_function_code,
        message.sub_type_code(),
        message.local_instrument_code(),
    );
    for &tag in rules.required_tags() {
        if message.is_present(tag) {
            continue;
        }
        if tag == Tag::InputMessageAccountabilityData && file.options().skip_mandatory_imad {
            continue;
        }
        if tag == Tag::SenderSupplied && file.options().allow_missing_sender_supplied {
            continue;
        }
        return Err(EncodeError::MissingMandatoryGroup { tag }.into());
    }
    for tag in message.present_tags() {
        if !rules.is_permitted(tag) {
            return Err(EncodeError::ForbiddenGroup { tag }.into());
        }
    }

    let mandatory = BASELINE_REQUIRED.iter().copied();
    let optional = message
        .present_tags()
        .filter(|tag| !BASELINE_REQUIRED.contains(tag));
    let mut encoder = RecordEncoder::with_capacity(file.format(), 1024);
    for tag in mandatory.chain(optional) {
        if !message.is_present(tag) {
            continue;
        }
        encoder.begin(tag);
        message.encode_tag(tag, &mut encoder);
        encoder.end();
    }

    debug!(bytes = encoder.len(), format = ?file.format(), "writing fedwire output");
    sink.write_all(encoder.as_bytes())?;
    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwire_core::codes;
    use ironwire_core::error::WireError;
    use ironwire_core::options::ValidationOptions;
    use ironwire_core::error::FieldError;
    use ironwire_fields::{
        Amount, Beneficiary, BusinessFunctionCode, FedwireMessage,
        InputMessageAccountabilityData, InstructedAmount, Personal,
        ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderReference,
        SenderSupplied, ServiceMessage, TypeSubType,
    };
    use ironwire_tagrecord::Format;

    fn ctr_message() -> FedwireMessage {
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
        msg
    }

    #[test]
    fn test_canonical_order_and_amount_padding() {
        let file = File::new().with_message(ctr_message());
        let mut out = Vec::new();
        write(&mut out, &file).unwrap();

        let text = String::from_utf8(out).unwrap();
        let tags: Vec<&str> = text.lines().map(|l| &l[..6]).collect();
        assert_eq!(
            tags,
            vec!["{1500}", "{1510}", "{1520}", "{2000}", "{3100}", "{3400}", "{3600}", "{4200}"]
        );
        assert!(text.contains("{2000}000001234567\n"));
    }

    #[test]
    fn test_optional_groups_follow_mandatory_core() {
        let mut msg = ctr_message();
        msg.sender_reference = Some(SenderReference::new("INVOICE 778"));
        let file = File::new().with_message(msg);
        let mut out = Vec::new();
        write(&mut out, &file).unwrap();

        let text = String::from_utf8(out).unwrap();
        let tags: Vec<&str> = text.lines().map(|l| &l[..6]).collect();
        assert_eq!(
            tags,
            vec![
                "{1500}", "{1510}", "{1520}", "{2000}", "{3100}", "{3400}", "{3600}", "{3320}",
                "{4200}",
            ]
        );
    }

    #[test]
    fn test_variable_records_end_with_delimiter() {
        let file = File::new()
            .with_format(Format::Variable)
            .with_message(ctr_message());
        let mut out = Vec::new();
        write(&mut out, &file).unwrap();

        for line in String::from_utf8(out).unwrap().lines() {
            assert!(line.ends_with('*'), "record not terminated: {line}");
        }
    }

    #[test]
    fn test_refuses_missing_mandatory_group() {
        let mut msg = ctr_message();
        msg.beneficiary = None;
        let file = File::new().with_message(msg);
        let err = write(&mut Vec::new(), &file).unwrap_err();
        assert!(matches!(
            err,
            WireError::Encode(EncodeError::MissingMandatoryGroup {
                tag: Tag::Beneficiary,
            })
        ));
    }

    #[test]
    fn test_refuses_forbidden_group() {
        let mut msg = ctr_message();
        msg.service_message = Some(ServiceMessage::new(vec!["AS OF REQUEST".to_string()]));
        let file = File::new().with_message(msg);
        assert!(matches!(
            write(&mut Vec::new(), &file).unwrap_err(),
            WireError::Encode(EncodeError::ForbiddenGroup {
                tag: Tag::ServiceMessage,
            })
        ));
    }

    #[test]
    fn test_refuses_over_width_instructed_amount() {
        let mut msg = ctr_message();
        msg.instructed_amount = Some(InstructedAmount::new("EUR", 1_000_000_000_000_000));
        let file = File::new().with_message(msg);
        assert!(matches!(
            write(&mut Vec::new(), &file).unwrap_err(),
            WireError::Field(FieldError::AmountTooLarge {
                tag: Tag::InstructedAmount,
                value: 1_000_000_000_000_000,
            })
        ));
    }

    #[test]
    fn test_refuses_missing_classifier() {
        let mut msg = ctr_message();
        msg.business_function_code = None;
        let file = File::new().with_message(msg);
        assert!(matches!(
            write(&mut Vec::new(), &file).unwrap_err(),
            WireError::Encode(EncodeError::MissingClassifier)
        ));
    }

    #[test]
    fn test_options_relax_writer_guard() {
        let mut msg = ctr_message();
        msg.input_message_accountability_data = None;
        let file = File::new()
            .with_options(ValidationOptions::new().with_skip_mandatory_imad(true))
            .with_message(msg);
        write(&mut Vec::new(), &file).unwrap();
    }
}
