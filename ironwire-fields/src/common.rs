/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Shared sub-structures reused across field groups.
//!
//! Several Fedwire tag groups share one wire shape: party blocks
//! ([`Personal`]), financial-institution blocks ([`FinancialInstitution`]),
//! cover-payment SWIFT relay blocks ([`SwiftFields`]), advice blocks
//! ([`Advice`]), and free-text FI-to-FI blocks ([`FiInfo`]). The concrete
//! groups wrap these and delegate their codec.

use ironwire_core::codes::{AdviceCode, IdentificationCode};
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_core::types::is_wire_text;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// Width of a standard name or address line.
pub const LINE_WIDTH: usize = 35;

/// Width of a party or institution identifier.
pub const IDENTIFIER_WIDTH: usize = 34;

/// Checks length and character set of a text sub-field.
pub(crate) fn check_text(
    tag: Tag,
    property: &'static str,
    value: &str,
    max: usize,
) -> Result<(), FieldError> {
    if value.len() > max {
        return Err(FieldError::TooLong {
            tag,
            property,
            length: value.len(),
            max,
        });
    }
    if !is_wire_text(value) {
        return Err(FieldError::InvalidCharset {
            tag,
            property,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Checks that a required sub-field within a present group is non-empty.
pub(crate) fn check_required(
    tag: Tag,
    property: &'static str,
    value: &str,
) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::MissingSubField { tag, property });
    }
    Ok(())
}

/// Three 35-character address lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address line one.
    pub line_one: String,
    /// Address line two.
    pub line_two: String,
    /// Address line three.
    pub line_three: String,
}

impl Address {
    pub(crate) fn decode(cur: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            line_one: cur.text("address line one", LINE_WIDTH)?,
            line_two: cur.text("address line two", LINE_WIDTH)?,
            line_three: cur.text("address line three", LINE_WIDTH)?,
        })
    }

    pub(crate) fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.line_one, LINE_WIDTH);
        enc.text(&self.line_two, LINE_WIDTH);
        enc.text(&self.line_three, LINE_WIDTH);
    }

    pub(crate) fn validate(&self, tag: Tag) -> Result<(), FieldError> {
        check_text(tag, "address line one", &self.line_one, LINE_WIDTH)?;
        check_text(tag, "address line two", &self.line_two, LINE_WIDTH)?;
        check_text(tag, "address line three", &self.line_three, LINE_WIDTH)?;
        Ok(())
    }
}

macro_rules! party_shape {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// How the identifier should be interpreted; absent when no
            /// identifier is given.
            #[serde(skip_serializing_if = "Option::is_none", default)]
            pub identification_code: Option<IdentificationCode>,
            /// The identifier selected by the identification code.
            pub identifier: String,
            /// Name.
            pub name: String,
            /// Address lines.
            pub address: Address,
        }

        impl $name {
            /// Creates a block with an identification code and identifier.
            #[must_use]
            pub fn new(
                identification_code: IdentificationCode,
                identifier: impl Into<String>,
                name: impl Into<String>,
            ) -> Self {
                Self {
                    identification_code: Some(identification_code),
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

            pub(crate) fn decode(cur: &mut Cursor<'_>) -> Result<Self, DecodeError> {
                let raw_code = cur.text("identification code", 1)?;
                let identification_code = if raw_code.is_empty() {
                    None
                } else {
                    Some(raw_code.parse().unwrap())
                };
                Ok(Self {
                    identification_code,
                    identifier: cur.text("identifier", IDENTIFIER_WIDTH)?,
                    name: cur.text("name", LINE_WIDTH)?,
                    address: Address::decode(cur)?,
                })
            }

            pub(crate) fn encode(&self, enc: &mut RecordEncoder) {
                let code = self
                    .identification_code
                    .as_ref()
                    .map_or("", |c| c.as_str());
                enc.text(code, 1);
                enc.text(&self.identifier, IDENTIFIER_WIDTH);
                enc.text(&self.name, LINE_WIDTH);
                self.address.encode(enc);
            }

            pub(crate) fn validate_shape(&self, tag: Tag) -> Result<(), FieldError> {
                if let Some(code) = &self.identification_code {
                    check_required(tag, "identifier", &self.identifier)?;
                    if !code.is_known() {
                        return Err(FieldError::InvalidCode {
                            tag,
                            property: "identification code",
                            value: code.as_str().to_string(),
                        });
                    }
                }
                check_text(tag, "identifier", &self.identifier, IDENTIFIER_WIDTH)?;
                check_required(tag, "name", &self.name)?;
                check_text(tag, "name", &self.name, LINE_WIDTH)?;
                self.address.validate(tag)
            }
        }
    };
}

party_shape!(
    /// A personal party block: identification, name, and address.
    ///
    /// Used by Beneficiary and Originator. Identification codes from the
    /// party subset of the table are legal here.
    Personal
);

party_shape!(
    /// A financial-institution block: identification, name, and address.
    ///
    /// Used by the institution relay chain (intermediary, beneficiary FI,
    /// originator FI, instructing FI). Identification codes from the FI
    /// subset of the table are legal here.
    FinancialInstitution
);

impl Personal {
    /// Validates the block against the party identification-code subset.
    pub(crate) fn validate(&self, tag: Tag) -> Result<(), FieldError> {
        self.validate_shape(tag)?;
        if let Some(code) = &self.identification_code
            && !code.is_party()
        {
            return Err(FieldError::InvalidCode {
                tag,
                property: "identification code",
                value: code.as_str().to_string(),
            });
        }
        Ok(())
    }
}

impl FinancialInstitution {
    /// Validates the block against the FI identification-code subset.
    pub(crate) fn validate(&self, tag: Tag) -> Result<(), FieldError> {
        self.validate_shape(tag)?;
        if let Some(code) = &self.identification_code
            && !code.is_financial_institution()
        {
            return Err(FieldError::InvalidCode {
                tag,
                property: "identification code",
                value: code.as_str().to_string(),
            });
        }
        Ok(())
    }
}

/// Width of the SWIFT field tag sub-field.
pub const SWIFT_FIELD_TAG_WIDTH: usize = 5;

/// A cover-payment SWIFT relay block: a SWIFT field tag and five lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SwiftFields {
    /// The SWIFT field tag being relayed (e.g. `50K`).
    pub swift_field_tag: String,
    /// Line one.
    pub line_one: String,
    /// Line two.
    pub line_two: String,
    /// Line three.
    pub line_three: String,
    /// Line four.
    pub line_four: String,
    /// Line five.
    pub line_five: String,
}

impl SwiftFields {
    pub(crate) fn decode(cur: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            swift_field_tag: cur.text("swift field tag", SWIFT_FIELD_TAG_WIDTH)?,
            line_one: cur.text("line one", LINE_WIDTH)?,
            line_two: cur.text("line two", LINE_WIDTH)?,
            line_three: cur.text("line three", LINE_WIDTH)?,
            line_four: cur.text("line four", LINE_WIDTH)?,
            line_five: cur.text("line five", LINE_WIDTH)?,
        })
    }

    pub(crate) fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.swift_field_tag, SWIFT_FIELD_TAG_WIDTH);
        enc.text(&self.line_one, LINE_WIDTH);
        enc.text(&self.line_two, LINE_WIDTH);
        enc.text(&self.line_three, LINE_WIDTH);
        enc.text(&self.line_four, LINE_WIDTH);
        enc.text(&self.line_five, LINE_WIDTH);
    }

    pub(crate) fn validate(&self, tag: Tag) -> Result<(), FieldError> {
        check_text(tag, "swift field tag", &self.swift_field_tag, SWIFT_FIELD_TAG_WIDTH)?;
        check_text(tag, "line one", &self.line_one, LINE_WIDTH)?;
        check_text(tag, "line two", &self.line_two, LINE_WIDTH)?;
        check_text(tag, "line three", &self.line_three, LINE_WIDTH)?;
        check_text(tag, "line four", &self.line_four, LINE_WIDTH)?;
        check_text(tag, "line five", &self.line_five, LINE_WIDTH)?;
        Ok(())
    }
}

/// Width of an advice code.
pub const ADVICE_CODE_WIDTH: usize = 3;
/// Width of the first advice information line.
pub const ADVICE_LINE_ONE_WIDTH: usize = 26;
/// Width of advice information lines two through six.
pub const ADVICE_LINE_WIDTH: usize = 33;

/// An advice block: delivery method plus six information lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    /// How the advice is delivered.
    pub advice_code: AdviceCode,
    /// Line one (26 characters).
    pub line_one: String,
    /// Line two.
    pub line_two: String,
    /// Line three.
    pub line_three: String,
    /// Line four.
    pub line_four: String,
    /// Line five.
    pub line_five: String,
    /// Line six.
    pub line_six: String,
}

impl Advice {
    /// Creates an advice block with the given delivery method.
    #[must_use]
    pub fn new(advice_code: AdviceCode) -> Self {
        Self {
            advice_code,
            line_one: String::new(),
            line_two: String::new(),
            line_three: String::new(),
            line_four: String::new(),
            line_five: String::new(),
            line_six: String::new(),
        }
    }

    pub(crate) fn decode(cur: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            advice_code: cur
                .text("advice code", ADVICE_CODE_WIDTH)?
                .parse()
                .unwrap(),
            line_one: cur.text("line one", ADVICE_LINE_ONE_WIDTH)?,
            line_two: cur.text("line two", ADVICE_LINE_WIDTH)?,
            line_three: cur.text("line three", ADVICE_LINE_WIDTH)?,
            line_four: cur.text("line four", ADVICE_LINE_WIDTH)?,
            line_five: cur.text("line five", ADVICE_LINE_WIDTH)?,
            line_six: cur.text("line six", ADVICE_LINE_WIDTH)?,
        })
    }

    pub(crate) fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(self.advice_code.as_str(), ADVICE_CODE_WIDTH);
        enc.text(&self.line_one, ADVICE_LINE_ONE_WIDTH);
        enc.text(&self.line_two, ADVICE_LINE_WIDTH);
        enc.text(&self.line_three, ADVICE_LINE_WIDTH);
        enc.text(&self.line_four, ADVICE_LINE_WIDTH);
        enc.text(&self.line_five, ADVICE_LINE_WIDTH);
        enc.text(&self.line_six, ADVICE_LINE_WIDTH);
    }

    pub(crate) fn validate(&self, tag: Tag) -> Result<(), FieldError> {
        if !self.advice_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag,
                property: "advice code",
                value: self.advice_code.as_str().to_string(),
            });
        }
        check_text(tag, "line one", &self.line_one, ADVICE_LINE_ONE_WIDTH)?;
        check_text(tag, "line two", &self.line_two, ADVICE_LINE_WIDTH)?;
        check_text(tag, "line three", &self.line_three, ADVICE_LINE_WIDTH)?;
        check_text(tag, "line four", &self.line_four, ADVICE_LINE_WIDTH)?;
        check_text(tag, "line five", &self.line_five, ADVICE_LINE_WIDTH)?;
        check_text(tag, "line six", &self.line_six, ADVICE_LINE_WIDTH)?;
        Ok(())
    }
}

impl Default for Advice {
    fn default() -> Self {
        Self::new(AdviceCode::Wire)
    }
}

/// Width of the first FI-to-FI information line.
pub const FI_INFO_LINE_ONE_WIDTH: usize = 30;
/// Width of FI-to-FI information lines two through six.
pub const FI_INFO_LINE_WIDTH: usize = 33;

/// A free-text FI-to-FI information block: six lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FiInfo {
    /// Line one (30 characters).
    pub line_one: String,
    /// Line two.
    pub line_two: String,
    /// Line three.
    pub line_three: String,
    /// Line four.
    pub line_four: String,
    /// Line five.
    pub line_five: String,
    /// Line six.
    pub line_six: String,
}

impl FiInfo {
    pub(crate) fn decode(cur: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            line_one: cur.text("line one", FI_INFO_LINE_ONE_WIDTH)?,
            line_two: cur.text("line two", FI_INFO_LINE_WIDTH)?,
            line_three: cur.text("line three", FI_INFO_LINE_WIDTH)?,
            line_four: cur.text("line four", FI_INFO_LINE_WIDTH)?,
            line_five: cur.text("line five", FI_INFO_LINE_WIDTH)?,
            line_six: cur.text("line six", FI_INFO_LINE_WIDTH)?,
        })
    }

    pub(crate) fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.line_one, FI_INFO_LINE_ONE_WIDTH);
        enc.text(&self.line_two, FI_INFO_LINE_WIDTH);
        enc.text(&self.line_three, FI_INFO_LINE_WIDTH);
        enc.text(&self.line_four, FI_INFO_LINE_WIDTH);
        enc.text(&self.line_five, FI_INFO_LINE_WIDTH);
        enc.text(&self.line_six, FI_INFO_LINE_WIDTH);
    }

    pub(crate) fn validate(&self, tag: Tag) -> Result<(), FieldError> {
        check_text(tag, "line one", &self.line_one, FI_INFO_LINE_ONE_WIDTH)?;
        check_text(tag, "line two", &self.line_two, FI_INFO_LINE_WIDTH)?;
        check_text(tag, "line three", &self.line_three, FI_INFO_LINE_WIDTH)?;
        check_text(tag, "line four", &self.line_four, FI_INFO_LINE_WIDTH)?;
        check_text(tag, "line five", &self.line_five, FI_INFO_LINE_WIDTH)?;
        check_text(tag, "line six", &self.line_six, FI_INFO_LINE_WIDTH)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwire_tagrecord::Format;

    #[test]
    fn test_personal_round_trip_fixed() {
        let party = Personal::new(IdentificationCode::DemandDepositAccount, "101100045", "JANE SMITH")
            .with_address(Address {
                line_one: "256 OAK LANE".to_string(),
                line_two: "ANYTOWN PA 19104".to_string(),
                line_three: String::new(),
            });

        let mut enc = RecordEncoder::new(Format::Fixed);
        party.encode(&mut enc);
        let raw = String::from_utf8(enc.into_bytes().to_vec()).unwrap();

        let mut cur = Cursor::new(Tag::Beneficiary, &raw, Format::Fixed).unwrap();
        let decoded = Personal::decode(&mut cur).unwrap();
        cur.finish().unwrap();
        assert_eq!(decoded, party);
    }

    #[test]
    fn test_personal_missing_name() {
        let party = Personal {
            identification_code: Some(IdentificationCode::DemandDepositAccount),
            identifier: "101100045".to_string(),
            name: String::new(),
            address: Address::default(),
        };
        assert_eq!(
            party.validate(Tag::Beneficiary).unwrap_err(),
            FieldError::MissingSubField {
                tag: Tag::Beneficiary,
                property: "name",
            }
        );
    }

    #[test]
    fn test_personal_rejects_fi_code() {
        let party = Personal::new(IdentificationCode::FedRoutingNumber, "021000021", "JANE SMITH");
        assert!(matches!(
            party.validate(Tag::Beneficiary).unwrap_err(),
            FieldError::InvalidCode { .. }
        ));
    }

    #[test]
    fn test_financial_institution_rejects_party_code() {
        let fi = FinancialInstitution::new(
            IdentificationCode::PassportNumber,
            "X123456",
            "BANK OF EXAMPLE",
        );
        assert!(matches!(
            fi.validate(Tag::BeneficiaryFi).unwrap_err(),
            FieldError::InvalidCode { .. }
        ));
    }

    #[test]
    fn test_swift_fields_round_trip_variable() {
        let block = SwiftFields {
            swift_field_tag: "50K".to_string(),
            line_one: "ACME GMBH".to_string(),
            line_two: "POSTFACH 100".to_string(),
            ..SwiftFields::default()
        };

        let mut enc = RecordEncoder::new(Format::Variable);
        block.encode(&mut enc);
        let raw = String::from_utf8(enc.into_bytes().to_vec()).unwrap();

        let mut cur = Cursor::new(Tag::OrderingCustomer, &raw, Format::Variable).unwrap();
        let decoded = SwiftFields::decode(&mut cur).unwrap();
        cur.finish().unwrap();
        assert_eq!(decoded, block);
    }

    #[test]
    fn test_advice_unknown_code() {
        let mut advice = Advice::new(AdviceCode::Letter);
        advice.advice_code = "XXX".parse().unwrap();
        assert!(matches!(
            advice.validate(Tag::FiBeneficiaryAdvice).unwrap_err(),
            FieldError::InvalidCode { .. }
        ));
    }

    #[test]
    fn test_check_text_charset() {
        assert!(check_text(Tag::Beneficiary, "name", "A*B", LINE_WIDTH).is_err());
        assert!(check_text(Tag::Beneficiary, "name", "ACME CORP", LINE_WIDTH).is_ok());
    }
}
