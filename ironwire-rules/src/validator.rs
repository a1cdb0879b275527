/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The two-layer message validator.
//!
//! Layer one checks every present group structurally. Layer two checks
//! conditional presence against the rule table: the classifier combination
//! must be internally consistent, every required group must be present,
//! and every present group must be permitted. Validation is fail-fast and
//! read-only.

use crate::table::rule_set;
use ironwire_core::codes::{BusinessFunctionCode, SubTypeCode};
use ironwire_core::error::{PresenceError, WireError};
use ironwire_core::options::ValidationOptions;
use ironwire_core::tag::Tag;
use ironwire_fields::FedwireMessage;

/// Validates `msg` against the structural and conditional-presence rules.
///
/// # Arguments
///
/// * `msg` - The message to validate; never mutated.
/// * `opts` - Relaxation toggles for the conditionally-relaxable rules.
///
/// # Errors
///
/// Returns the first blocking [`WireError`]: a `Field` error from the
/// structural layer, or a `Presence` error from the rule table.
pub fn validate(msg: &FedwireMessage, opts: &ValidationOptions) -> Result<(), WireError> {
    msg.validate_groups()?;

    let Some(business_function_code) = msg.business_function() else {
        return Err(PresenceError::RequiredGroupMissing {
            tag: Tag::BusinessFunctionCode,
            business_function_code: "none".to_string(),
        }
        .into());
    };

    let sub_type_code = msg.sub_type_code();
    if let Some(sub_type) = sub_type_code
        && *sub_type == SubTypeCode::SsiServiceMessage
        && *business_function_code != BusinessFunctionCode::ServiceMessage
    {
        return Err(PresenceError::InconsistentSubType {
            sub_type_code: sub_type.as_str().to_string(),
            business_function_code: business_function_code.as_str().to_string(),
        }
        .into());
    }

    let local_instrument = msg.local_instrument_code();
    let rules = rule_set(business_function_code, sub_type_code, local_instrument);

    for &tag in rules.required_tags() {
        if msg.is_present(tag) {
            continue;
        }
        if tag == Tag::InputMessageAccountabilityData && opts.skip_mandatory_imad {
            continue;
        }
        if tag == Tag::SenderSupplied && opts.allow_missing_sender_supplied {
            continue;
        }
        return Err(PresenceError::RequiredGroupMissing {
            tag,
            business_function_code: business_function_code.as_str().to_string(),
        }
        .into());
    }

    for tag in msg.present_tags() {
        if !rules.is_permitted(tag) {
            return Err(PresenceError::ForbiddenGroupPresent {
                tag,
                business_function_code: business_function_code.as_str().to_string(),
                local_instrument: local_instrument
                    .map_or_else(|| "none".to_string(), |code| code.as_str().to_string()),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwire_core::codes;
    use ironwire_fields::{
        Amount, Beneficiary, BusinessFunctionCode as BfcGroup, FiInfo, FiReceiverFi,
        InputMessageAccountabilityData, LocalInstrument, OrderingCustomer, Originator, Personal,
        ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderSupplied, ServiceMessage,
        SwiftFields, TypeSubType,
    };

    fn base_message(code: codes::BusinessFunctionCode) -> FedwireMessage {
        let mut msg = FedwireMessage::new();
        msg.sender_supplied = Some(SenderSupplied::default());
        msg.type_sub_type = Some(TypeSubType::new(
            codes::TypeCode::FundsTransfer,
            codes::SubTypeCode::BasicFundsTransfer,
        ));
        msg.input_message_accountability_data = Some(InputMessageAccountabilityData::new(
            "20260315", "MMQFMPQF", "000001",
        ));
        msg.amount = Some(Amount::new(2_500_00));
        msg.sender_depository_institution =
            Some(SenderDepositoryInstitution::new("121000248", "WELLS FARGO"));
        msg.receiver_depository_institution =
            Some(ReceiverDepositoryInstitution::new("021000021", "CHASE NYC"));
        msg.business_function_code = Some(BfcGroup::new(code));
        msg
    }

    fn beneficiary() -> Beneficiary {
        Beneficiary::new(Personal::new(
            codes::IdentificationCode::DemandDepositAccount,
            "101100045",
            "JANE SMITH",
        ))
    }

    #[test]
    fn test_valid_ctr_passes() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        msg.beneficiary = Some(beneficiary());
        validate(&msg, &ValidationOptions::default()).unwrap();
    }

    #[test]
    fn test_ctr_missing_beneficiary() {
        let msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        let err = validate(&msg, &ValidationOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WireError::Presence(PresenceError::RequiredGroupMissing {
                tag: Tag::Beneficiary,
                ..
            })
        ));
    }

    #[test]
    fn test_cover_group_without_covs_is_forbidden() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransferPlus);
        msg.beneficiary = Some(beneficiary());
        msg.originator = Some(Originator::new(Personal::new(
            codes::IdentificationCode::DemandDepositAccount,
            "99123",
            "ACME CORP",
        )));
        msg.ordering_customer = Some(OrderingCustomer::new(SwiftFields {
            swift_field_tag: "50K".to_string(),
            line_one: "ACME GMBH".to_string(),
            ..SwiftFields::default()
        }));

        let err = validate(&msg, &ValidationOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WireError::Presence(PresenceError::ForbiddenGroupPresent {
                tag: Tag::OrderingCustomer,
                ..
            })
        ));

        msg.local_instrument = Some(LocalInstrument::new(
            codes::LocalInstrumentCode::SequenceBCoverPayment,
        ));
        validate(&msg, &ValidationOptions::default()).unwrap();
    }

    #[test]
    fn test_missing_imad_relaxable() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        msg.beneficiary = Some(beneficiary());
        msg.input_message_accountability_data = None;

        assert!(validate(&msg, &ValidationOptions::default()).is_err());
        validate(
            &msg,
            &ValidationOptions::new().with_skip_mandatory_imad(true),
        )
        .unwrap();
    }

    #[test]
    fn test_sub_type_90_needs_svc() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        msg.beneficiary = Some(beneficiary());
        msg.type_sub_type = Some(TypeSubType::new(
            codes::TypeCode::FundsTransfer,
            codes::SubTypeCode::SsiServiceMessage,
        ));
        let err = validate(&msg, &ValidationOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WireError::Presence(PresenceError::InconsistentSubType { .. })
        ));
    }

    #[test]
    fn test_svc_without_amount_passes() {
        let mut msg = base_message(codes::BusinessFunctionCode::ServiceMessage);
        msg.type_sub_type = Some(TypeSubType::new(
            codes::TypeCode::FundsTransfer,
            codes::SubTypeCode::SsiServiceMessage,
        ));
        msg.amount = None;
        msg.service_message = Some(ServiceMessage::new(vec!["REFER TO DESK".to_string()]));
        validate(&msg, &ValidationOptions::default()).unwrap();
    }

    #[test]
    fn test_service_message_forbidden_outside_svc() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        msg.beneficiary = Some(beneficiary());
        msg.service_message = Some(ServiceMessage::default());
        let err = validate(&msg, &ValidationOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WireError::Presence(PresenceError::ForbiddenGroupPresent {
                tag: Tag::ServiceMessage,
                ..
            })
        ));
    }

    #[test]
    fn test_structural_failure_reported_first() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        msg.beneficiary = Some(beneficiary());
        msg.sender_depository_institution =
            Some(SenderDepositoryInstitution::new("BAD", "WELLS FARGO"));
        let err = validate(&msg, &ValidationOptions::default()).unwrap_err();
        assert!(matches!(err, WireError::Field(_)));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut msg = base_message(codes::BusinessFunctionCode::CustomerTransfer);
        msg.beneficiary = Some(beneficiary());
        msg.fi_receiver_fi = Some(FiReceiverFi::new(FiInfo {
            line_one: "HOLD FOR PICKUP".to_string(),
            ..FiInfo::default()
        }));
        let before = msg.clone();
        validate(&msg, &ValidationOptions::default()).unwrap();
        validate(&msg, &ValidationOptions::default()).unwrap();
        assert_eq!(msg, before);
    }
}
