/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Party groups: beneficiary and originator blocks, the institution relay
//! chain, drawdown accounts, and originator-to-beneficiary text.

use crate::common::{
    Address, FinancialInstitution, IDENTIFIER_WIDTH, LINE_WIDTH, Personal, check_required,
    check_text,
};
use crate::group::FieldGroup;
use ironwire_core::codes::IdentificationCode;
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// Width of a beneficiary reference.
pub const BENEFICIARY_REFERENCE_WIDTH: usize = 16;

macro_rules! personal_group {
    ($(#[$meta:meta])* $name:ident, $tag:expr, $field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The party block.
            pub $field: Personal,
        }

        impl $name {
            /// Wraps a party block in this group.
            #[must_use]
            pub fn new($field: Personal) -> Self {
                Self { $field }
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    $field: Personal::decode(&mut cur)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                self.$field.encode(enc);
            }

            fn validate(&self) -> Result<(), FieldError> {
                self.$field.validate(Self::TAG)
            }
        }
    };
}

macro_rules! institution_group {
    ($(#[$meta:meta])* $name:ident, $tag:expr, $field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The institution block.
            pub $field: FinancialInstitution,
        }

        impl $name {
            /// Wraps an institution block in this group.
            #[must_use]
            pub fn new($field: FinancialInstitution) -> Self {
                Self { $field }
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    $field: FinancialInstitution::decode(&mut cur)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                self.$field.encode(enc);
            }

            fn validate(&self) -> Result<(), FieldError> {
                self.$field.validate(Self::TAG)
            }
        }
    };
}

personal_group!(
    /// Beneficiary `{4200}`: the party being paid.
    Beneficiary,
    Tag::Beneficiary,
    personal
);

personal_group!(
    /// Originator `{5000}`: the party on whose behalf the wire is sent.
    Originator,
    Tag::Originator,
    personal
);

institution_group!(
    /// Intermediary FI `{4000}`.
    IntermediaryFi,
    Tag::IntermediaryFi,
    financial_institution
);

institution_group!(
    /// Beneficiary FI `{4100}`: the institution holding the beneficiary's
    /// account when it is not the receiver itself.
    BeneficiaryFi,
    Tag::BeneficiaryFi,
    financial_institution
);

institution_group!(
    /// Originator FI `{5100}`.
    OriginatorFi,
    Tag::OriginatorFi,
    financial_institution
);

institution_group!(
    /// Instructing FI `{5200}`.
    InstructingFi,
    Tag::InstructingFi,
    financial_institution
);

/// Beneficiary Reference `{4320}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryReference {
    /// Reference meaningful to the beneficiary.
    pub beneficiary_reference: String,
}

impl BeneficiaryReference {
    /// Creates a beneficiary reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            beneficiary_reference: reference.into(),
        }
    }
}

impl FieldGroup for BeneficiaryReference {
    const TAG: Tag = Tag::BeneficiaryReference;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            beneficiary_reference: cur.text("beneficiary reference", BENEFICIARY_REFERENCE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.beneficiary_reference, BENEFICIARY_REFERENCE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_text(
            Self::TAG,
            "beneficiary reference",
            &self.beneficiary_reference,
            BENEFICIARY_REFERENCE_WIDTH,
        )
    }
}

macro_rules! drawdown_account_group {
    ($(#[$meta:meta])* $name:ident, $tag:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Always the demand deposit account code `D`.
            pub identification_code: IdentificationCode,
            /// The account number.
            pub identifier: String,
            /// Account holder name.
            pub name: String,
            /// Account holder address.
            pub address: Address,
        }

        impl $name {
            /// Creates a drawdown account block for an account number and name.
            #[must_use]
            pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
                Self {
                    identification_code: IdentificationCode::DemandDepositAccount,
                    identifier: identifier.into(),
                    name: name.into(),
                    address: Address::default(),
                }
            }

            /// Sets the address lines.
            #[must_use]
            pub fn with_address(mut self, address: Address) -> Self {
                self.address = address;
                self
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    identification_code: cur.text("identification code", 1)?.parse().unwrap(),
                    identifier: cur.text("identifier", IDENTIFIER_WIDTH)?,
                    name: cur.text("name", LINE_WIDTH)?,
                    address: Address::decode(&mut cur)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                enc.text(self.identification_code.as_str(), 1);
                enc.text(&self.identifier, IDENTIFIER_WIDTH);
                enc.text(&self.name, LINE_WIDTH);
                self.address.encode(enc);
            }

            fn validate(&self) -> Result<(), FieldError> {
                if self.identification_code != IdentificationCode::DemandDepositAccount {
                    return Err(FieldError::InvalidCode {
                        tag: Self::TAG,
                        property: "identification code",
                        value: self.identification_code.as_str().to_string(),
                    });
                }
                check_required(Self::TAG, "identifier", &self.identifier)?;
                check_text(Self::TAG, "identifier", &self.identifier, IDENTIFIER_WIDTH)?;
                check_required(Self::TAG, "name", &self.name)?;
                check_text(Self::TAG, "name", &self.name, LINE_WIDTH)?;
                self.address.validate(Self::TAG)
            }
        }
    };
}

drawdown_account_group!(
    /// Account Debited in Drawdown `{4400}`.
    AccountDebitedDrawdown,
    Tag::AccountDebitedDrawdown
);

drawdown_account_group!(
    /// Account Credited in Drawdown `{5400}`.
    AccountCreditedDrawdown,
    Tag::AccountCreditedDrawdown
);

/// Originator Option F `{5010}`: the structured-identity alternative to
/// the `{5000}` originator block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OriginatorOptionF {
    /// Party identifier, account or scheme-qualified.
    pub party_identifier: String,
    /// Identity line one.
    pub line_one: String,
    /// Identity line two.
    pub line_two: String,
    /// Identity line three.
    pub line_three: String,
}

impl OriginatorOptionF {
    /// Creates an option F block for a party identifier.
    #[must_use]
    pub fn new(party_identifier: impl Into<String>) -> Self {
        Self {
            party_identifier: party_identifier.into(),
            line_one: String::new(),
            line_two: String::new(),
            line_three: String::new(),
        }
    }
}

impl FieldGroup for OriginatorOptionF {
    const TAG: Tag = Tag::OriginatorOptionF;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            party_identifier: cur.text("party identifier", LINE_WIDTH)?,
            line_one: cur.text("line one", LINE_WIDTH)?,
            line_two: cur.text("line two", LINE_WIDTH)?,
            line_three: cur.text("line three", LINE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.party_identifier, LINE_WIDTH);
        enc.text(&self.line_one, LINE_WIDTH);
        enc.text(&self.line_two, LINE_WIDTH);
        enc.text(&self.line_three, LINE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_required(Self::TAG, "party identifier", &self.party_identifier)?;
        check_text(Self::TAG, "party identifier", &self.party_identifier, LINE_WIDTH)?;
        check_text(Self::TAG, "line one", &self.line_one, LINE_WIDTH)?;
        check_text(Self::TAG, "line two", &self.line_two, LINE_WIDTH)?;
        check_text(Self::TAG, "line three", &self.line_three, LINE_WIDTH)
    }
}

/// Originator to Beneficiary Information `{5500}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OriginatorToBeneficiary {
    /// Line one.
    pub line_one: String,
    /// Line two.
    pub line_two: String,
    /// Line three.
    pub line_three: String,
    /// Line four.
    pub line_four: String,
}

impl FieldGroup for OriginatorToBeneficiary {
    const TAG: Tag = Tag::OriginatorToBeneficiary;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            line_one: cur.text("line one", LINE_WIDTH)?,
            line_two: cur.text("line two", LINE_WIDTH)?,
            line_three: cur.text("line three", LINE_WIDTH)?,
            line_four: cur.text("line four", LINE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.line_one, LINE_WIDTH);
        enc.text(&self.line_two, LINE_WIDTH);
        enc.text(&self.line_three, LINE_WIDTH);
        enc.text(&self.line_four, LINE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_text(Self::TAG, "line one", &self.line_one, LINE_WIDTH)?;
        check_text(Self::TAG, "line two", &self.line_two, LINE_WIDTH)?;
        check_text(Self::TAG, "line three", &self.line_three, LINE_WIDTH)?;
        check_text(Self::TAG, "line four", &self.line_four, LINE_WIDTH)
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
    fn test_beneficiary_round_trip() {
        let group = Beneficiary::new(
            Personal::new(
                IdentificationCode::DemandDepositAccount,
                "101100045",
                "JANE SMITH",
            )
            .with_address(Address {
                line_one: "256 OAK LANE".to_string(),
                line_two: "ANYTOWN PA 19104".to_string(),
                line_three: String::new(),
            }),
        );
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();
    }

    #[test]
    fn test_beneficiary_fi_rejects_party_code() {
        let group = BeneficiaryFi::new(FinancialInstitution::new(
            IdentificationCode::PassportNumber,
            "X99",
            "BANK OF EXAMPLE",
        ));
        assert!(matches!(
            group.validate().unwrap_err(),
            FieldError::InvalidCode { .. }
        ));
    }

    #[test]
    fn test_beneficiary_reference_round_trip() {
        let group = BeneficiaryReference::new("PO 4455-A");
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();
    }

    #[test]
    fn test_drawdown_account_code_pinned_to_d() {
        let group = AccountDebitedDrawdown::new("73927492", "TREASURY OPS");
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();

        let bad = AccountDebitedDrawdown {
            identification_code: IdentificationCode::SwiftBic,
            ..group
        };
        assert!(matches!(
            bad.validate().unwrap_err(),
            FieldError::InvalidCode { .. }
        ));
    }

    #[test]
    fn test_originator_option_f_requires_identifier() {
        assert!(matches!(
            OriginatorOptionF::default().validate().unwrap_err(),
            FieldError::MissingSubField { .. }
        ));
        let group = OriginatorOptionF::new("TXID/123456789");
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();
    }

    #[test]
    fn test_originator_to_beneficiary_round_trip() {
        let group = OriginatorToBeneficiary {
            line_one: "INVOICE 778 SETTLEMENT".to_string(),
            line_two: "NET 30".to_string(),
            ..OriginatorToBeneficiary::default()
        };
        round_trip(&group, Format::Fixed);
        round_trip(&group, Format::Variable);
        group.validate().unwrap();
    }
}
