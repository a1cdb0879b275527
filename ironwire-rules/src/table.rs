/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The conditional-presence rule table.
//!
//! [`rule_set`] composes a [`RuleSet`] for one classifier combination:
//! the baseline mandatory core, the business-function-specific required
//! and permitted groups, and the refinements driven by the sub-type and
//! local instrument codes.

use ironwire_core::codes::{BusinessFunctionCode, LocalInstrumentCode, SubTypeCode};
use ironwire_core::tag::Tag;

/// The mandatory core: required for every message regardless of
/// classifiers (subject to `ValidationOptions` relaxations, and to the
/// amount exemption for service traffic).
pub const BASELINE_REQUIRED: &[Tag] = &[
    Tag::SenderSupplied,
    Tag::TypeSubType,
    Tag::InputMessageAccountabilityData,
    Tag::Amount,
    Tag::SenderDepositoryInstitution,
    Tag::ReceiverDepositoryInstitution,
    Tag::BusinessFunctionCode,
];

/// FI-to-FI information groups legal for every transfer of funds.
const FI_INFO_TAGS: &[Tag] = &[
    Tag::FiReceiverFi,
    Tag::FiIntermediaryFi,
    Tag::FiIntermediaryFiAdvice,
    Tag::FiBeneficiaryFi,
    Tag::FiBeneficiaryFiAdvice,
    Tag::FiBeneficiary,
    Tag::FiBeneficiaryAdvice,
    Tag::FiAdditionalFiToFi,
];

/// Customer party groups shared by the customer transfer shapes.
const CUSTOMER_PARTY_TAGS: &[Tag] = &[
    Tag::IntermediaryFi,
    Tag::BeneficiaryFi,
    Tag::Beneficiary,
    Tag::BeneficiaryReference,
    Tag::Originator,
    Tag::OriginatorFi,
    Tag::InstructingFi,
    Tag::OriginatorToBeneficiary,
];

/// Institution relay groups legal for bank-to-bank traffic.
const BANK_PARTY_TAGS: &[Tag] = &[
    Tag::IntermediaryFi,
    Tag::BeneficiaryFi,
    Tag::Beneficiary,
    Tag::BeneficiaryReference,
    Tag::Originator,
    Tag::OriginatorFi,
    Tag::InstructingFi,
];

/// The sequence B cover-payment groups, `COVS` only.
const COVER_TAGS: &[Tag] = &[
    Tag::CurrencyInstructedAmount,
    Tag::OrderingCustomer,
    Tag::OrderingInstitution,
    Tag::IntermediaryInstitution,
    Tag::InstitutionAccount,
    Tag::BeneficiaryCustomer,
    Tag::Remittance,
    Tag::SenderToReceiver,
];

/// The required and permitted tag sets for one classifier combination.
///
/// `permitted` is a superset of `required`; a present group outside
/// `permitted` is a forbidden-group violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    required: Vec<Tag>,
    permitted: Vec<Tag>,
}

impl RuleSet {
    /// The tags this combination requires, in canonical order.
    #[must_use]
    pub fn required_tags(&self) -> &[Tag] {
        &self.required
    }

    /// Returns true if `tag` must be present.
    #[must_use]
    pub fn is_required(&self, tag: Tag) -> bool {
        self.required.contains(&tag)
    }

    /// Returns true if `tag` may be present.
    #[must_use]
    pub fn is_permitted(&self, tag: Tag) -> bool {
        self.permitted.contains(&tag)
    }

    fn require(&mut self, tag: Tag) {
        if !self.required.contains(&tag) {
            self.required.push(tag);
        }
        self.permit(tag);
    }

    fn permit(&mut self, tag: Tag) {
        if !self.permitted.contains(&tag) {
            self.permitted.push(tag);
        }
    }

    fn permit_all(&mut self, tags: &[Tag]) {
        for &tag in tags {
            self.permit(tag);
        }
    }

    fn drop_required(&mut self, tag: Tag) {
        self.required.retain(|&t| t != tag);
    }
}

/// Builds the rule set for a classifier combination.
///
/// The baseline core is always permitted. An unknown business function
/// code yields the baseline alone; the structural layer rejects the code
/// itself before the presence layer reports its consequences.
#[must_use]
pub fn rule_set(
    business_function_code: &BusinessFunctionCode,
    sub_type_code: Option<&SubTypeCode>,
    local_instrument: Option<&LocalInstrumentCode>,
) -> RuleSet {
    let mut rules = RuleSet {
        required: BASELINE_REQUIRED.to_vec(),
        permitted: BASELINE_REQUIRED.to_vec(),
    };
    rules.permit(Tag::SenderReference);

    match business_function_code {
        BusinessFunctionCode::CustomerTransfer => {
            rules.require(Tag::Beneficiary);
            rules.permit_all(CUSTOMER_PARTY_TAGS);
            rules.permit_all(FI_INFO_TAGS);
            rules.permit(Tag::PaymentNotification);
            rules.permit(Tag::Charges);
            rules.permit(Tag::InstructedAmount);
            rules.permit(Tag::ExchangeRate);
            rules.permit(Tag::FiPaymentMethodToBeneficiary);
        }
        BusinessFunctionCode::CustomerTransferPlus => {
            rules.require(Tag::Beneficiary);
            rules.require(Tag::Originator);
            rules.permit_all(CUSTOMER_PARTY_TAGS);
            rules.permit_all(FI_INFO_TAGS);
            rules.permit(Tag::PaymentNotification);
            rules.permit(Tag::Charges);
            rules.permit(Tag::InstructedAmount);
            rules.permit(Tag::ExchangeRate);
            rules.permit(Tag::FiPaymentMethodToBeneficiary);
            rules.permit(Tag::LocalInstrument);
            rules.permit(Tag::OriginatorOptionF);
            if let Some(instrument) = local_instrument {
                if *instrument == LocalInstrumentCode::SequenceBCoverPayment {
                    rules.permit_all(COVER_TAGS);
                }
                if instrument.uses_unstructured_addenda() {
                    rules.permit(Tag::UnstructuredAddenda);
                }
            }
        }
        BusinessFunctionCode::BankTransfer
        | BusinessFunctionCode::CheckSameDaySettlement
        | BusinessFunctionCode::DepositSendersAccount
        | BusinessFunctionCode::FedFundsReturned
        | BusinessFunctionCode::FedFundsSold => {
            rules.permit_all(BANK_PARTY_TAGS);
            rules.permit_all(FI_INFO_TAGS);
        }
        BusinessFunctionCode::BankDrawdownRequest => {
            rules.require(Tag::Beneficiary);
            rules.require(Tag::AccountDebitedDrawdown);
            rules.permit(Tag::AccountCreditedDrawdown);
            rules.permit_all(CUSTOMER_PARTY_TAGS);
            rules.permit_all(FI_INFO_TAGS);
            rules.permit(Tag::FiDrawdownDebitAccountAdvice);
        }
        BusinessFunctionCode::CustomerCorporateDrawdownRequest => {
            rules.require(Tag::Beneficiary);
            rules.require(Tag::AccountCreditedDrawdown);
            rules.permit(Tag::AccountDebitedDrawdown);
            rules.permit_all(CUSTOMER_PARTY_TAGS);
            rules.permit_all(FI_INFO_TAGS);
            rules.permit(Tag::FiDrawdownDebitAccountAdvice);
        }
        BusinessFunctionCode::DrawdownPayment => {
            rules.require(Tag::Beneficiary);
            rules.permit(Tag::AccountDebitedDrawdown);
            rules.permit(Tag::AccountCreditedDrawdown);
            rules.permit_all(CUSTOMER_PARTY_TAGS);
            rules.permit_all(FI_INFO_TAGS);
            rules.permit(Tag::FiDrawdownDebitAccountAdvice);
        }
        BusinessFunctionCode::ServiceMessage => {
            rules.require(Tag::ServiceMessage);
            rules.permit(Tag::PreviousMessageIdentifier);
            rules.drop_required(Tag::Amount);
        }
        BusinessFunctionCode::Unknown(_) => {}
    }

    if let Some(sub_type) = sub_type_code {
        if sub_type.references_previous_message() {
            rules.require(Tag::PreviousMessageIdentifier);
        }
        if *sub_type == SubTypeCode::SsiServiceMessage {
            rules.drop_required(Tag::Amount);
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctr_requires_beneficiary() {
        let rules = rule_set(&BusinessFunctionCode::CustomerTransfer, None, None);
        assert!(rules.is_required(Tag::Beneficiary));
        assert!(rules.is_required(Tag::Amount));
        assert!(!rules.is_permitted(Tag::LocalInstrument));
        assert!(!rules.is_permitted(Tag::ServiceMessage));
        assert!(!rules.is_permitted(Tag::OrderingCustomer));
    }

    #[test]
    fn test_cover_tags_need_covs() {
        let plain = rule_set(&BusinessFunctionCode::CustomerTransferPlus, None, None);
        assert!(!plain.is_permitted(Tag::OrderingCustomer));

        let covs = rule_set(
            &BusinessFunctionCode::CustomerTransferPlus,
            None,
            Some(&LocalInstrumentCode::SequenceBCoverPayment),
        );
        for &tag in COVER_TAGS {
            assert!(covs.is_permitted(tag), "{tag} should be permitted under COVS");
        }
        assert!(!covs.is_permitted(Tag::UnstructuredAddenda));
    }

    #[test]
    fn test_addenda_instruments_permit_addenda() {
        let rules = rule_set(
            &BusinessFunctionCode::CustomerTransferPlus,
            None,
            Some(&LocalInstrumentCode::AnsiX12),
        );
        assert!(rules.is_permitted(Tag::UnstructuredAddenda));
        assert!(!rules.is_permitted(Tag::OrderingCustomer));
    }

    #[test]
    fn test_bank_to_bank_forbids_charges() {
        let rules = rule_set(&BusinessFunctionCode::BankTransfer, None, None);
        assert!(!rules.is_permitted(Tag::Charges));
        assert!(!rules.is_permitted(Tag::InstructedAmount));
        assert!(!rules.is_permitted(Tag::PaymentNotification));
        assert!(rules.is_permitted(Tag::BeneficiaryFi));
    }

    #[test]
    fn test_service_message_drops_amount() {
        let rules = rule_set(&BusinessFunctionCode::ServiceMessage, None, None);
        assert!(rules.is_required(Tag::ServiceMessage));
        assert!(!rules.is_required(Tag::Amount));
        assert!(rules.is_permitted(Tag::Amount));
    }

    #[test]
    fn test_reversal_requires_previous_message() {
        let rules = rule_set(
            &BusinessFunctionCode::BankTransfer,
            Some(&SubTypeCode::Reversal),
            None,
        );
        assert!(rules.is_required(Tag::PreviousMessageIdentifier));

        let basic = rule_set(
            &BusinessFunctionCode::BankTransfer,
            Some(&SubTypeCode::BasicFundsTransfer),
            None,
        );
        assert!(!basic.is_required(Tag::PreviousMessageIdentifier));
    }

    #[test]
    fn test_drawdown_required_accounts() {
        let drb = rule_set(&BusinessFunctionCode::BankDrawdownRequest, None, None);
        assert!(drb.is_required(Tag::AccountDebitedDrawdown));
        assert!(drb.is_permitted(Tag::AccountCreditedDrawdown));

        let drc = rule_set(
            &BusinessFunctionCode::CustomerCorporateDrawdownRequest,
            None,
            None,
        );
        assert!(drc.is_required(Tag::AccountCreditedDrawdown));
        assert!(drc.is_permitted(Tag::FiDrawdownDebitAccountAdvice));
    }
}
