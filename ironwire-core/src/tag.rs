/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Fedwire tag catalogue.
//!
//! Every field group in a Fedwire message is introduced by a brace-delimited
//! four-digit tag such as `{1500}`. [`Tag`] enumerates the groups IronWire
//! understands; [`Tag::ALL`] lists them in canonical serialization order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of an encoded tag, including braces.
pub const TAG_LEN: usize = 6;

/// Fedwire field-group tag.
///
/// Variants are declared in ascending tag order, which is also the canonical
/// order in which a writer emits records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Sender Supplied Information `{1500}`.
    SenderSupplied,
    /// Type/SubType `{1510}`.
    TypeSubType,
    /// Input Message Accountability Data `{1520}`.
    InputMessageAccountabilityData,
    /// Amount `{2000}`.
    Amount,
    /// Sender Depository Institution `{3100}`.
    SenderDepositoryInstitution,
    /// Sender Reference `{3320}`.
    SenderReference,
    /// Receiver Depository Institution `{3400}`.
    ReceiverDepositoryInstitution,
    /// Previous Message Identifier `{3500}`.
    PreviousMessageIdentifier,
    /// Business Function Code `{3600}`.
    BusinessFunctionCode,
    /// Local Instrument `{3610}`.
    LocalInstrument,
    /// Payment Notification `{3620}`.
    PaymentNotification,
    /// Charges `{3700}`.
    Charges,
    /// Instructed Amount `{3710}`.
    InstructedAmount,
    /// Exchange Rate `{3720}`.
    ExchangeRate,
    /// Intermediary Financial Institution `{4000}`.
    IntermediaryFi,
    /// Beneficiary Financial Institution `{4100}`.
    BeneficiaryFi,
    /// Beneficiary `{4200}`.
    Beneficiary,
    /// Beneficiary Reference `{4320}`.
    BeneficiaryReference,
    /// Account Debited in Drawdown `{4400}`.
    AccountDebitedDrawdown,
    /// Originator `{5000}`.
    Originator,
    /// Originator Option F `{5010}`.
    OriginatorOptionF,
    /// Originator Financial Institution `{5100}`.
    OriginatorFi,
    /// Instructing Financial Institution `{5200}`.
    InstructingFi,
    /// Account Credited in Drawdown `{5400}`.
    AccountCreditedDrawdown,
    /// Originator to Beneficiary Information `{5500}`.
    OriginatorToBeneficiary,
    /// FI to FI - Receiver FI Information `{6100}`.
    FiReceiverFi,
    /// FI to FI - Drawdown Debit Account Advice `{6110}`.
    FiDrawdownDebitAccountAdvice,
    /// FI to FI - Intermediary FI Information `{6200}`.
    FiIntermediaryFi,
    /// FI to FI - Intermediary FI Advice `{6210}`.
    FiIntermediaryFiAdvice,
    /// FI to FI - Beneficiary FI Information `{6300}`.
    FiBeneficiaryFi,
    /// FI to FI - Beneficiary FI Advice `{6310}`.
    FiBeneficiaryFiAdvice,
    /// FI to FI - Beneficiary Information `{6400}`.
    FiBeneficiary,
    /// FI to FI - Beneficiary Advice `{6410}`.
    FiBeneficiaryAdvice,
    /// FI to FI - Payment Method to Beneficiary `{6420}`.
    FiPaymentMethodToBeneficiary,
    /// FI to FI - Additional FI to FI Information `{6500}`.
    FiAdditionalFiToFi,
    /// Cover Payment - Currency Instructed Amount `{7033}`.
    CurrencyInstructedAmount,
    /// Cover Payment - Ordering Customer `{7050}`.
    OrderingCustomer,
    /// Cover Payment - Ordering Institution `{7052}`.
    OrderingInstitution,
    /// Cover Payment - Intermediary Institution `{7056}`.
    IntermediaryInstitution,
    /// Cover Payment - Institution Account `{7057}`.
    InstitutionAccount,
    /// Cover Payment - Beneficiary Customer `{7059}`.
    BeneficiaryCustomer,
    /// Cover Payment - Remittance `{7063}`.
    Remittance,
    /// Cover Payment - Sender to Receiver `{7072}`.
    SenderToReceiver,
    /// Unstructured Addenda `{7620}`.
    UnstructuredAddenda,
    /// Service Message `{9000}`.
    ServiceMessage,
}

impl Tag {
    /// All tags in canonical serialization order (ascending tag number).
    pub const ALL: &'static [Tag] = &[
        Self::SenderSupplied,
        Self::TypeSubType,
        Self::InputMessageAccountabilityData,
        Self::Amount,
        Self::SenderDepositoryInstitution,
        Self::SenderReference,
        Self::ReceiverDepositoryInstitution,
        Self::PreviousMessageIdentifier,
        Self::BusinessFunctionCode,
        Self::LocalInstrument,
        Self::PaymentNotification,
        Self::Charges,
        Self::InstructedAmount,
        Self::ExchangeRate,
        Self::IntermediaryFi,
        Self::BeneficiaryFi,
        Self::Beneficiary,
        Self::BeneficiaryReference,
        Self::AccountDebitedDrawdown,
        Self::Originator,
        Self::OriginatorOptionF,
        Self::OriginatorFi,
        Self::InstructingFi,
        Self::AccountCreditedDrawdown,
        Self::OriginatorToBeneficiary,
        Self::FiReceiverFi,
        Self::FiDrawdownDebitAccountAdvice,
        Self::FiIntermediaryFi,
        Self::FiIntermediaryFiAdvice,
        Self::FiBeneficiaryFi,
        Self::FiBeneficiaryFiAdvice,
        Self::FiBeneficiary,
        Self::FiBeneficiaryAdvice,
        Self::FiPaymentMethodToBeneficiary,
        Self::FiAdditionalFiToFi,
        Self::CurrencyInstructedAmount,
        Self::OrderingCustomer,
        Self::OrderingInstitution,
        Self::IntermediaryInstitution,
        Self::InstitutionAccount,
        Self::BeneficiaryCustomer,
        Self::Remittance,
        Self::SenderToReceiver,
        Self::UnstructuredAddenda,
        Self::ServiceMessage,
    ];

    /// Returns the brace-delimited wire representation of this tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SenderSupplied => "{1500}",
            Self::TypeSubType => "{1510}",
            Self::InputMessageAccountabilityData => "{1520}",
            Self::Amount => "{2000}",
            Self::SenderDepositoryInstitution => "{3100}",
            Self::SenderReference => "{3320}",
            Self::ReceiverDepositoryInstitution => "{3400}",
            Self::PreviousMessageIdentifier => "{3500}",
            Self::BusinessFunctionCode => "{3600}",
            Self::LocalInstrument => "{3610}",
            Self::PaymentNotification => "{3620}",
            Self::Charges => "{3700}",
            Self::InstructedAmount => "{3710}",
            Self::ExchangeRate => "{3720}",
            Self::IntermediaryFi => "{4000}",
            Self::BeneficiaryFi => "{4100}",
            Self::Beneficiary => "{4200}",
            Self::BeneficiaryReference => "{4320}",
            Self::AccountDebitedDrawdown => "{4400}",
            Self::Originator => "{5000}",
            Self::OriginatorOptionF => "{5010}",
            Self::OriginatorFi => "{5100}",
            Self::InstructingFi => "{5200}",
            Self::AccountCreditedDrawdown => "{5400}",
            Self::OriginatorToBeneficiary => "{5500}",
            Self::FiReceiverFi => "{6100}",
            Self::FiDrawdownDebitAccountAdvice => "{6110}",
            Self::FiIntermediaryFi => "{6200}",
            Self::FiIntermediaryFiAdvice => "{6210}",
            Self::FiBeneficiaryFi => "{6300}",
            Self::FiBeneficiaryFiAdvice => "{6310}",
            Self::FiBeneficiary => "{6400}",
            Self::FiBeneficiaryAdvice => "{6410}",
            Self::FiPaymentMethodToBeneficiary => "{6420}",
            Self::FiAdditionalFiToFi => "{6500}",
            Self::CurrencyInstructedAmount => "{7033}",
            Self::OrderingCustomer => "{7050}",
            Self::OrderingInstitution => "{7052}",
            Self::IntermediaryInstitution => "{7056}",
            Self::InstitutionAccount => "{7057}",
            Self::BeneficiaryCustomer => "{7059}",
            Self::Remittance => "{7063}",
            Self::SenderToReceiver => "{7072}",
            Self::UnstructuredAddenda => "{7620}",
            Self::ServiceMessage => "{9000}",
        }
    }

    /// Returns true if this tag belongs to the cover-payment SWIFT relay set.
    #[must_use]
    pub const fn is_cover_payment(&self) -> bool {
        matches!(
            self,
            Self::CurrencyInstructedAmount
                | Self::OrderingCustomer
                | Self::OrderingInstitution
                | Self::IntermediaryInstitution
                | Self::InstitutionAccount
                | Self::BeneficiaryCustomer
                | Self::Remittance
                | Self::SenderToReceiver
        )
    }
}

impl FromStr for Tag {
    type Err = ();

    /// Parses a brace-delimited tag such as `{1500}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), *tag);
        }
    }

    #[test]
    fn test_tag_as_str() {
        assert_eq!(Tag::SenderSupplied.as_str(), "{1500}");
        assert_eq!(Tag::Amount.as_str(), "{2000}");
        assert_eq!(Tag::ServiceMessage.as_str(), "{9000}");
    }

    #[test]
    fn test_unknown_tag() {
        assert!("{9999}".parse::<Tag>().is_err());
        assert!("1500".parse::<Tag>().is_err());
    }

    #[test]
    fn test_canonical_order_is_ascending() {
        for pair in Tag::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} not before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_cover_payment_set() {
        assert!(Tag::OrderingCustomer.is_cover_payment());
        assert!(Tag::SenderToReceiver.is_cover_payment());
        assert!(!Tag::Beneficiary.is_cover_payment());
    }

    #[test]
    fn test_tag_len() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().len(), TAG_LEN);
        }
    }
}
