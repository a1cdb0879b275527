/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The [`FedwireMessage`] aggregate: one optional slot per tag group.

use crate::cover::{
    BeneficiaryCustomer, CurrencyInstructedAmount, InstitutionAccount, IntermediaryInstitution,
    OrderingCustomer, OrderingInstitution, Remittance, SenderToReceiver,
};
use crate::fi_info::{
    FiAdditionalFiToFi, FiBeneficiary, FiBeneficiaryAdvice, FiBeneficiaryFi,
    FiBeneficiaryFiAdvice, FiDrawdownDebitAccountAdvice, FiIntermediaryFi, FiIntermediaryFiAdvice,
    FiPaymentMethodToBeneficiary, FiReceiverFi,
};
use crate::group::FieldGroup;
use crate::mandatory::{
    Amount, BusinessFunctionCode, InputMessageAccountabilityData, ReceiverDepositoryInstitution,
    SenderDepositoryInstitution, SenderSupplied, TypeSubType,
};
use crate::parties::{
    AccountCreditedDrawdown, AccountDebitedDrawdown, Beneficiary, BeneficiaryFi,
    BeneficiaryReference, InstructingFi, IntermediaryFi, Originator, OriginatorFi,
    OriginatorOptionF, OriginatorToBeneficiary,
};
use crate::service::{ServiceMessage, UnstructuredAddenda};
use crate::transaction::{
    Charges, ExchangeRate, InstructedAmount, LocalInstrument, PaymentNotification,
    PreviousMessageIdentifier, SenderReference,
};
use ironwire_core::codes;
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

macro_rules! fedwire_message {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty => $tag:ident ),+ $(,)?) => {
        /// A single Fedwire funds-transfer message: one optional slot per
        /// tag group, in canonical tag order.
        ///
        /// The slots are plain public fields; the reader fills them via
        /// [`FedwireMessage::decode_into`] and the writer drains them via
        /// [`FedwireMessage::encode_tag`] in [`Tag::ALL`] order.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct FedwireMessage {
            $(
                $(#[$meta])*
                #[serde(skip_serializing_if = "Option::is_none", default)]
                pub $field: Option<$ty>,
            )+
        }

        impl FedwireMessage {
            /// Returns true if the group for `tag` is populated.
            #[must_use]
            pub fn is_present(&self, tag: Tag) -> bool {
                match tag {
                    $(Tag::$tag => self.$field.is_some(),)+
                }
            }

            /// Iterates the populated tags in canonical (ascending) order.
            pub fn present_tags(&self) -> impl Iterator<Item = Tag> + '_ {
                Tag::ALL.iter().copied().filter(move |tag| self.is_present(*tag))
            }

            /// Decodes a record into the slot for `tag`.
            ///
            /// # Errors
            ///
            /// Returns [`DecodeError::DuplicateTag`] if the slot is already
            /// populated, or the codec's error for a malformed payload.
            pub fn decode_into(
                &mut self,
                tag: Tag,
                cur: Cursor<'_>,
                line: usize,
            ) -> Result<(), DecodeError> {
                match tag {
                    $(Tag::$tag => {
                        if self.$field.is_some() {
                            return Err(DecodeError::DuplicateTag { line, tag });
                        }
                        self.$field = Some(<$ty>::decode(cur)?);
                    })+
                }
                Ok(())
            }

            /// Encodes the group for `tag` into `enc`, if populated.
            ///
            /// The caller frames the record with `begin`/`end`.
            pub fn encode_tag(&self, tag: Tag, enc: &mut RecordEncoder) {
                match tag {
                    $(Tag::$tag => {
                        if let Some(group) = &self.$field {
                            group.encode(enc);
                        }
                    })+
                }
            }

            /// Runs the structural `validate` of every populated group.
            ///
            /// # Errors
            ///
            /// Returns the first [`FieldError`] encountered, in canonical
            /// tag order.
            pub fn validate_groups(&self) -> Result<(), FieldError> {
                $(
                    if let Some(group) = &self.$field {
                        group.validate()?;
                    }
                )+
                Ok(())
            }
        }
    };
}

fedwire_message!(
    /// `{1500}` Sender Supplied Information.
    sender_supplied: SenderSupplied => SenderSupplied,
    /// `{1510}` Type/SubType.
    type_sub_type: TypeSubType => TypeSubType,
    /// `{1520}` Input Message Accountability Data.
    input_message_accountability_data: InputMessageAccountabilityData => InputMessageAccountabilityData,
    /// `{2000}` Amount.
    amount: Amount => Amount,
    /// `{3100}` Sender Depository Institution.
    sender_depository_institution: SenderDepositoryInstitution => SenderDepositoryInstitution,
    /// `{3320}` Sender Reference.
    sender_reference: SenderReference => SenderReference,
    /// `{3400}` Receiver Depository Institution.
    receiver_depository_institution: ReceiverDepositoryInstitution => ReceiverDepositoryInstitution,
    /// `{3500}` Previous Message Identifier.
    previous_message_identifier: PreviousMessageIdentifier => PreviousMessageIdentifier,
    /// `{3600}` Business Function Code.
    business_function_code: BusinessFunctionCode => BusinessFunctionCode,
    /// `{3610}` Local Instrument.
    local_instrument: LocalInstrument => LocalInstrument,
    /// `{3620}` Payment Notification.
    payment_notification: PaymentNotification => PaymentNotification,
    /// `{3700}` Charges.
    charges: Charges => Charges,
    /// `{3710}` Instructed Amount.
    instructed_amount: InstructedAmount => InstructedAmount,
    /// `{3720}` Exchange Rate.
    exchange_rate: ExchangeRate => ExchangeRate,
    /// `{4000}` Intermediary FI.
    intermediary_fi: IntermediaryFi => IntermediaryFi,
    /// `{4100}` Beneficiary FI.
    beneficiary_fi: BeneficiaryFi => BeneficiaryFi,
    /// `{4200}` Beneficiary.
    beneficiary: Beneficiary => Beneficiary,
    /// `{4320}` Beneficiary Reference.
    beneficiary_reference: BeneficiaryReference => BeneficiaryReference,
    /// `{4400}` Account Debited in Drawdown.
    account_debited_drawdown: AccountDebitedDrawdown => AccountDebitedDrawdown,
    /// `{5000}` Originator.
    originator: Originator => Originator,
    /// `{5010}` Originator Option F.
    originator_option_f: OriginatorOptionF => OriginatorOptionF,
    /// `{5100}` Originator FI.
    originator_fi: OriginatorFi => OriginatorFi,
    /// `{5200}` Instructing FI.
    instructing_fi: InstructingFi => InstructingFi,
    /// `{5400}` Account Credited in Drawdown.
    account_credited_drawdown: AccountCreditedDrawdown => AccountCreditedDrawdown,
    /// `{5500}` Originator to Beneficiary Information.
    originator_to_beneficiary: OriginatorToBeneficiary => OriginatorToBeneficiary,
    /// `{6100}` FI Receiver FI Information.
    fi_receiver_fi: FiReceiverFi => FiReceiverFi,
    /// `{6110}` FI Drawdown Debit Account Advice.
    fi_drawdown_debit_account_advice: FiDrawdownDebitAccountAdvice => FiDrawdownDebitAccountAdvice,
    /// `{6200}` FI Intermediary FI Information.
    fi_intermediary_fi: FiIntermediaryFi => FiIntermediaryFi,
    /// `{6210}` FI Intermediary FI Advice.
    fi_intermediary_fi_advice: FiIntermediaryFiAdvice => FiIntermediaryFiAdvice,
    /// `{6300}` FI Beneficiary FI Information.
    fi_beneficiary_fi: FiBeneficiaryFi => FiBeneficiaryFi,
    /// `{6310}` FI Beneficiary FI Advice.
    fi_beneficiary_fi_advice: FiBeneficiaryFiAdvice => FiBeneficiaryFiAdvice,
    /// `{6400}` FI Beneficiary Information.
    fi_beneficiary: FiBeneficiary => FiBeneficiary,
    /// `{6410}` FI Beneficiary Advice.
    fi_beneficiary_advice: FiBeneficiaryAdvice => FiBeneficiaryAdvice,
    /// `{6420}` FI Payment Method to Beneficiary.
    fi_payment_method_to_beneficiary: FiPaymentMethodToBeneficiary => FiPaymentMethodToBeneficiary,
    /// `{6500}` FI Additional FI-to-FI Information.
    fi_additional_fi_to_fi: FiAdditionalFiToFi => FiAdditionalFiToFi,
    /// `{7033}` Currency Instructed Amount.
    currency_instructed_amount: CurrencyInstructedAmount => CurrencyInstructedAmount,
    /// `{7050}` Ordering Customer.
    ordering_customer: OrderingCustomer => OrderingCustomer,
    /// `{7052}` Ordering Institution.
    ordering_institution: OrderingInstitution => OrderingInstitution,
    /// `{7056}` Intermediary Institution.
    intermediary_institution: IntermediaryInstitution => IntermediaryInstitution,
    /// `{7057}` Institution Account.
    institution_account: InstitutionAccount => InstitutionAccount,
    /// `{7059}` Beneficiary Customer.
    beneficiary_customer: BeneficiaryCustomer => BeneficiaryCustomer,
    /// `{7063}` Remittance Information.
    remittance: Remittance => Remittance,
    /// `{7072}` Sender to Receiver Information.
    sender_to_receiver: SenderToReceiver => SenderToReceiver,
    /// `{7620}` Unstructured Addenda.
    unstructured_addenda: UnstructuredAddenda => UnstructuredAddenda,
    /// `{9000}` Service Message.
    service_message: ServiceMessage => ServiceMessage,
);

impl FedwireMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{1510}` type code, when present.
    #[must_use]
    pub fn type_code(&self) -> Option<&codes::TypeCode> {
        self.type_sub_type.as_ref().map(|g| &g.type_code)
    }

    /// The `{1510}` sub-type code, when present.
    #[must_use]
    pub fn sub_type_code(&self) -> Option<&codes::SubTypeCode> {
        self.type_sub_type.as_ref().map(|g| &g.sub_type_code)
    }

    /// The `{3600}` business function code, when present.
    #[must_use]
    pub fn business_function(&self) -> Option<&codes::BusinessFunctionCode> {
        self.business_function_code
            .as_ref()
            .map(|g| &g.business_function_code)
    }

    /// The `{3610}` local instrument code, when present.
    #[must_use]
    pub fn local_instrument_code(&self) -> Option<&codes::LocalInstrumentCode> {
        self.local_instrument.as_ref().map(|g| &g.local_instrument_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwire_tagrecord::Format;

    fn minimal_ctr() -> FedwireMessage {
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
        msg
    }

    #[test]
    fn test_present_tags_canonical_order() {
        let msg = minimal_ctr();
        let tags: Vec<Tag> = msg.present_tags().collect();
        assert_eq!(
            tags,
            vec![
                Tag::SenderSupplied,
                Tag::TypeSubType,
                Tag::InputMessageAccountabilityData,
                Tag::Amount,
                Tag::SenderDepositoryInstitution,
                Tag::ReceiverDepositoryInstitution,
                Tag::BusinessFunctionCode,
            ]
        );
    }

    #[test]
    fn test_decode_into_rejects_duplicate() {
        let mut msg = FedwireMessage::new();
        let cur = Cursor::new(Tag::Amount, "000001234567", Format::Fixed).unwrap();
        msg.decode_into(Tag::Amount, cur, 4).unwrap();

        let cur = Cursor::new(Tag::Amount, "000001234567", Format::Fixed).unwrap();
        assert_eq!(
            msg.decode_into(Tag::Amount, cur, 9).unwrap_err(),
            DecodeError::DuplicateTag {
                line: 9,
                tag: Tag::Amount,
            }
        );
    }

    #[test]
    fn test_validate_groups_reports_first_failure() {
        let mut msg = minimal_ctr();
        msg.sender_depository_institution =
            Some(SenderDepositoryInstitution::new("12100", "WELLS FARGO"));
        assert!(matches!(
            msg.validate_groups().unwrap_err(),
            FieldError::InvalidNumeric { .. }
        ));
    }

    #[test]
    fn test_classifier_accessors() {
        let msg = minimal_ctr();
        assert_eq!(msg.type_code(), Some(&codes::TypeCode::FundsTransfer));
        assert_eq!(
            msg.business_function(),
            Some(&codes::BusinessFunctionCode::CustomerTransfer)
        );
        assert_eq!(msg.local_instrument_code(), None);
    }

    #[test]
    fn test_json_omits_absent_groups() {
        let msg = minimal_ctr();
        let json = serde_json::to_value(&msg).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("senderSupplied"));
        assert!(obj.contains_key("businessFunctionCode"));
        assert!(!obj.contains_key("beneficiary"));
        assert!(!obj.contains_key("serviceMessage"));
    }
}
