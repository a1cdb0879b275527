/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Fedwire enumerated code tables.
//!
//! Each code type follows the same pattern: an exhaustive variant list plus a
//! lenient `Unknown(String)` catch-all. Parsing is infallible so the decoder
//! never rejects a record over a code value; the validator rejects `Unknown`
//! variants with the raw value preserved for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! impl_code_strings {
    ($name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl $name {
            /// Returns the wire representation of this code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Returns true if this is a code from the published table.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $($code => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

/// Type code: the first half of the `{1510}` classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    /// Funds transfer (10): between DI accounts at the Fed.
    FundsTransfer,
    /// Foreign transfer (15).
    ForeignTransfer,
    /// Settlement transfer (16).
    SettlementTransfer,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(TypeCode {
    FundsTransfer => "10",
    ForeignTransfer => "15",
    SettlementTransfer => "16",
});

/// Sub-type code: the second half of the `{1510}` classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubTypeCode {
    /// Basic funds transfer (00).
    BasicFundsTransfer,
    /// Request for reversal of a current-day transfer (01).
    RequestReversal,
    /// Reversal of a current-day transfer (02).
    Reversal,
    /// Request for reversal of a prior-day transfer (07).
    RequestReversalPriorDay,
    /// Reversal of a prior-day transfer (08).
    ReversalPriorDay,
    /// Request for credit / drawdown (31).
    RequestCredit,
    /// Funds returned in response to a drawdown request (32).
    FundsReturned,
    /// Refusal to honor a request for credit (33).
    RefusalRequestCredit,
    /// SSI service message (90).
    SsiServiceMessage,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(SubTypeCode {
    BasicFundsTransfer => "00",
    RequestReversal => "01",
    Reversal => "02",
    RequestReversalPriorDay => "07",
    ReversalPriorDay => "08",
    RequestCredit => "31",
    FundsReturned => "32",
    RefusalRequestCredit => "33",
    SsiServiceMessage => "90",
});

impl SubTypeCode {
    /// Returns true if this sub-type refers back to an earlier wire and
    /// therefore requires a Previous Message Identifier.
    #[must_use]
    pub const fn references_previous_message(&self) -> bool {
        matches!(
            self,
            Self::RequestReversal
                | Self::Reversal
                | Self::RequestReversalPriorDay
                | Self::ReversalPriorDay
                | Self::FundsReturned
                | Self::RefusalRequestCredit
        )
    }
}

/// Business function code: the `{3600}` classifier selecting which field
/// groups are legal and mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessFunctionCode {
    /// Bank transfer, bank to bank (BTR).
    BankTransfer,
    /// Check same-day settlement (CKS).
    CheckSameDaySettlement,
    /// Customer transfer plus (CTP).
    CustomerTransferPlus,
    /// Customer transfer (CTR).
    CustomerTransfer,
    /// Deposit to sender's account (DEP).
    DepositSendersAccount,
    /// Bank drawdown request (DRB).
    BankDrawdownRequest,
    /// Customer or corporate drawdown request (DRC).
    CustomerCorporateDrawdownRequest,
    /// Drawdown payment (DRW).
    DrawdownPayment,
    /// Fed funds returned (FFR).
    FedFundsReturned,
    /// Fed funds sold (FFS).
    FedFundsSold,
    /// Service message (SVC).
    ServiceMessage,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(BusinessFunctionCode {
    BankTransfer => "BTR",
    CheckSameDaySettlement => "CKS",
    CustomerTransferPlus => "CTP",
    CustomerTransfer => "CTR",
    DepositSendersAccount => "DEP",
    BankDrawdownRequest => "DRB",
    CustomerCorporateDrawdownRequest => "DRC",
    DrawdownPayment => "DRW",
    FedFundsReturned => "FFR",
    FedFundsSold => "FFS",
    ServiceMessage => "SVC",
});

impl BusinessFunctionCode {
    /// Returns true for the bank-to-bank settlement codes that forbid
    /// customer party detail.
    #[must_use]
    pub const fn is_bank_to_bank(&self) -> bool {
        matches!(
            self,
            Self::BankTransfer
                | Self::CheckSameDaySettlement
                | Self::DepositSendersAccount
                | Self::FedFundsReturned
                | Self::FedFundsSold
        )
    }
}

/// Local instrument code: the `{3610}` refinement, legal only under
/// customer transfer plus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalInstrumentCode {
    /// ANSI X12 addenda (ANSI).
    AnsiX12,
    /// Sequence B cover payment, structured (COVS).
    SequenceBCoverPayment,
    /// General XML addenda (GXML).
    GeneralXml,
    /// ISO 20022 XML addenda (IXML).
    Iso20022Xml,
    /// Narrative text addenda (NARR).
    NarrativeText,
    /// Proprietary local instrument (PROP).
    Proprietary,
    /// Structured remittance (RMTS).
    StructuredRemittance,
    /// Related remittance (RRMT).
    RelatedRemittance,
    /// STP 820 addenda (S820).
    Stp820,
    /// SWIFT MT addenda (SWIF).
    SwiftMt,
    /// UN/EDIFACT addenda (UEDI).
    UnEdifact,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(LocalInstrumentCode {
    AnsiX12 => "ANSI",
    SequenceBCoverPayment => "COVS",
    GeneralXml => "GXML",
    Iso20022Xml => "IXML",
    NarrativeText => "NARR",
    Proprietary => "PROP",
    StructuredRemittance => "RMTS",
    RelatedRemittance => "RRMT",
    Stp820 => "S820",
    SwiftMt => "SWIF",
    UnEdifact => "UEDI",
});

impl LocalInstrumentCode {
    /// Returns true if this instrument carries its addenda in the
    /// Unstructured Addenda group `{7620}`.
    #[must_use]
    pub const fn uses_unstructured_addenda(&self) -> bool {
        matches!(
            self,
            Self::AnsiX12
                | Self::GeneralXml
                | Self::Iso20022Xml
                | Self::NarrativeText
                | Self::StructuredRemittance
                | Self::Stp820
                | Self::UnEdifact
        )
    }
}

/// Identification code for party and financial-institution groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentificationCode {
    /// SWIFT Bank Identifier Code (B).
    SwiftBic,
    /// CHIPS participant number (C).
    ChipsParticipant,
    /// Demand deposit account number (D).
    DemandDepositAccount,
    /// Fed routing number (F).
    FedRoutingNumber,
    /// SWIFT BIC with CHIPS UID (T).
    SwiftBicChips,
    /// CHIPS identifier (U).
    ChipsIdentifier,
    /// Passport number (1).
    PassportNumber,
    /// Tax identification number (2).
    TaxIdentificationNumber,
    /// Driver's license number (3).
    DriversLicenseNumber,
    /// Alien registration number (4).
    AlienRegistrationNumber,
    /// Corporate identification (5).
    CorporateIdentification,
    /// Other identification (9).
    OtherIdentification,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(IdentificationCode {
    SwiftBic => "B",
    ChipsParticipant => "C",
    DemandDepositAccount => "D",
    FedRoutingNumber => "F",
    SwiftBicChips => "T",
    ChipsIdentifier => "U",
    PassportNumber => "1",
    TaxIdentificationNumber => "2",
    DriversLicenseNumber => "3",
    AlienRegistrationNumber => "4",
    CorporateIdentification => "5",
    OtherIdentification => "9",
});

impl IdentificationCode {
    /// Returns true if this code is legal for financial-institution groups.
    #[must_use]
    pub const fn is_financial_institution(&self) -> bool {
        matches!(
            self,
            Self::SwiftBic
                | Self::ChipsParticipant
                | Self::DemandDepositAccount
                | Self::FedRoutingNumber
                | Self::SwiftBicChips
                | Self::ChipsIdentifier
        )
    }

    /// Returns true if this code is legal for personal party groups.
    #[must_use]
    pub const fn is_party(&self) -> bool {
        matches!(
            self,
            Self::SwiftBic
                | Self::ChipsParticipant
                | Self::DemandDepositAccount
                | Self::PassportNumber
                | Self::TaxIdentificationNumber
                | Self::DriversLicenseNumber
                | Self::AlienRegistrationNumber
                | Self::CorporateIdentification
                | Self::OtherIdentification
        )
    }
}

/// Advice code for FI-to-FI advice groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdviceCode {
    /// Advice by letter (LTR).
    Letter,
    /// Advice by phone (PHN).
    Phone,
    /// Advice by telex (TLX).
    Telex,
    /// Advice by wire (WRE).
    Wire,
    /// Hold advice (HLD).
    Hold,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(AdviceCode {
    Letter => "LTR",
    Phone => "PHN",
    Telex => "TLX",
    Wire => "WRE",
    Hold => "HLD",
});

/// Charge details code for the `{3700}` Charges group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeDetails {
    /// Charges borne by the beneficiary (B).
    Beneficiary,
    /// Charges shared (S).
    Shared,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(ChargeDetails {
    Beneficiary => "B",
    Shared => "S",
});

/// Test/production code in Sender Supplied Information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TestProductionCode {
    /// Test wire (T).
    #[default]
    Test,
    /// Production wire (P).
    Production,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(TestProductionCode {
    Test => "T",
    Production => "P",
});

/// Message duplication code in Sender Supplied Information.
///
/// Encoded as a single space for an original message, `P` for a resend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MessageDuplicationCode {
    /// Original message (space).
    #[default]
    Original,
    /// Resend of a possible duplicate (P).
    Resend,
    /// Unrecognized code, preserved for diagnostics.
    Unknown(String),
}

impl_code_strings!(MessageDuplicationCode {
    Original => "",
    Resend => "P",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_function_code_round_trip() {
        for code in ["BTR", "CKS", "CTP", "CTR", "DEP", "DRB", "DRC", "DRW", "FFR", "FFS", "SVC"] {
            let parsed: BusinessFunctionCode = code.parse().unwrap();
            assert!(parsed.is_known());
            assert_eq!(parsed.as_str(), code);
        }
    }

    #[test]
    fn test_unknown_code_preserved() {
        let parsed: BusinessFunctionCode = "ZZZ".parse().unwrap();
        assert!(!parsed.is_known());
        assert_eq!(parsed.as_str(), "ZZZ");
    }

    #[test]
    fn test_sub_type_reversal_set() {
        let reversal: SubTypeCode = "02".parse().unwrap();
        assert!(reversal.references_previous_message());
        let basic: SubTypeCode = "00".parse().unwrap();
        assert!(!basic.references_previous_message());
    }

    #[test]
    fn test_local_instrument_addenda_set() {
        assert!(LocalInstrumentCode::AnsiX12.uses_unstructured_addenda());
        assert!(!LocalInstrumentCode::SequenceBCoverPayment.uses_unstructured_addenda());
        assert!(!LocalInstrumentCode::Proprietary.uses_unstructured_addenda());
    }

    #[test]
    fn test_identification_code_contexts() {
        assert!(IdentificationCode::FedRoutingNumber.is_financial_institution());
        assert!(!IdentificationCode::PassportNumber.is_financial_institution());
        assert!(IdentificationCode::PassportNumber.is_party());
        assert!(!IdentificationCode::FedRoutingNumber.is_party());
    }

    #[test]
    fn test_message_duplication_code() {
        let original: MessageDuplicationCode = "".parse().unwrap();
        assert_eq!(original, MessageDuplicationCode::Original);
        let resend: MessageDuplicationCode = "P".parse().unwrap();
        assert_eq!(resend, MessageDuplicationCode::Resend);
    }

    #[test]
    fn test_bank_to_bank_set() {
        assert!(BusinessFunctionCode::BankTransfer.is_bank_to_bank());
        assert!(BusinessFunctionCode::FedFundsSold.is_bank_to_bank());
        assert!(!BusinessFunctionCode::CustomerTransfer.is_bank_to_bank());
    }
}
