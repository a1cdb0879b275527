/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The mandatory core groups of every Fedwire message: sender-supplied
//! information, type/sub-type, IMAD, amount, the two depository
//! institutions, and the business function code.

use crate::common::{check_required, check_text};
use crate::group::FieldGroup;
use ironwire_core::codes;
use ironwire_core::codes::{MessageDuplicationCode, TestProductionCode};
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_core::types::{self, AMOUNT_WIDTH, is_ccyymmdd, is_numeric};
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// The Fedwire format version IronWire implements.
pub const FORMAT_VERSION: &str = "30";

/// Sender Supplied Information `{1500}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderSupplied {
    /// Format version, always `30`.
    pub format_version: String,
    /// Free-form correlation value echoed back to the sender.
    pub user_request_correlation: String,
    /// Test or production wire.
    pub test_production_code: TestProductionCode,
    /// Original message or possible resend.
    pub message_duplication_code: MessageDuplicationCode,
}

impl Default for SenderSupplied {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            user_request_correlation: String::new(),
            test_production_code: TestProductionCode::default(),
            message_duplication_code: MessageDuplicationCode::default(),
        }
    }
}

impl FieldGroup for SenderSupplied {
    const TAG: Tag = Tag::SenderSupplied;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            format_version: cur.text("format version", 2)?,
            user_request_correlation: cur.text("user request correlation", 8)?,
            test_production_code: cur.text("test production code", 1)?.parse().unwrap(),
            message_duplication_code: cur.text("message duplication code", 1)?.parse().unwrap(),
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.format_version, 2);
        enc.text(&self.user_request_correlation, 8);
        enc.text(self.test_production_code.as_str(), 1);
        enc.text(self.message_duplication_code.as_str(), 1);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if self.format_version != FORMAT_VERSION {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "format version",
                value: self.format_version.clone(),
            });
        }
        check_text(Self::TAG, "user request correlation", &self.user_request_correlation, 8)?;
        if !self.test_production_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "test production code",
                value: self.test_production_code.as_str().to_string(),
            });
        }
        if !self.message_duplication_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "message duplication code",
                value: self.message_duplication_code.as_str().to_string(),
            });
        }
        Ok(())
    }
}

/// Type/SubType `{1510}`: the first classifier pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSubType {
    /// Transfer type.
    pub type_code: codes::TypeCode,
    /// Transfer sub-type.
    pub sub_type_code: codes::SubTypeCode,
}

impl TypeSubType {
    /// Creates a type/sub-type pair.
    #[must_use]
    pub const fn new(type_code: codes::TypeCode, sub_type_code: codes::SubTypeCode) -> Self {
        Self {
            type_code,
            sub_type_code,
        }
    }
}

impl FieldGroup for TypeSubType {
    const TAG: Tag = Tag::TypeSubType;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            type_code: cur.text("type code", 2)?.parse().unwrap(),
            sub_type_code: cur.text("sub-type code", 2)?.parse().unwrap(),
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(self.type_code.as_str(), 2);
        enc.text(self.sub_type_code.as_str(), 2);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !self.type_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "type code",
                value: self.type_code.as_str().to_string(),
            });
        }
        if !self.sub_type_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "sub-type code",
                value: self.sub_type_code.as_str().to_string(),
            });
        }
        Ok(())
    }
}

/// Input Message Accountability Data `{1520}`: the wire's unique identity,
/// assigned by the sending bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputMessageAccountabilityData {
    /// Funds-transfer cycle date, `CCYYMMDD`.
    pub input_cycle_date: String,
    /// Sending bank's source identifier.
    pub input_source: String,
    /// Six-digit sequence number within the cycle.
    pub input_sequence_number: String,
}

impl InputMessageAccountabilityData {
    /// Creates an IMAD from its three parts.
    #[must_use]
    pub fn new(
        input_cycle_date: impl Into<String>,
        input_source: impl Into<String>,
        input_sequence_number: impl Into<String>,
    ) -> Self {
        Self {
            input_cycle_date: input_cycle_date.into(),
            input_source: input_source.into(),
            input_sequence_number: input_sequence_number.into(),
        }
    }
}

impl FieldGroup for InputMessageAccountabilityData {
    const TAG: Tag = Tag::InputMessageAccountabilityData;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            input_cycle_date: cur.text("input cycle date", 8)?,
            input_source: cur.text("input source", 8)?,
            input_sequence_number: cur.text("input sequence number", 6)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.input_cycle_date, 8);
        enc.text(&self.input_source, 8);
        enc.text(&self.input_sequence_number, 6);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !is_ccyymmdd(&self.input_cycle_date) {
            return Err(FieldError::InvalidDate {
                tag: Self::TAG,
                property: "input cycle date",
                value: self.input_cycle_date.clone(),
            });
        }
        check_required(Self::TAG, "input source", &self.input_source)?;
        check_text(Self::TAG, "input source", &self.input_source, 8)?;
        if self.input_sequence_number.len() != 6 || !is_numeric(&self.input_sequence_number) {
            return Err(FieldError::InvalidNumeric {
                tag: Self::TAG,
                property: "input sequence number",
                value: self.input_sequence_number.clone(),
            });
        }
        Ok(())
    }
}

/// Amount `{2000}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// The wire amount in cents.
    pub amount: types::Amount,
}

impl Amount {
    /// Creates an amount group from cents.
    #[must_use]
    pub const fn new(cents: u64) -> Self {
        Self {
            amount: types::Amount::new(cents),
        }
    }
}

impl FieldGroup for Amount {
    const TAG: Tag = Tag::Amount;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            amount: types::Amount::new(cur.numeric("amount", AMOUNT_WIDTH)?),
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.numeric(self.amount.cents(), AMOUNT_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !self.amount.fits_wire_width() {
            return Err(FieldError::AmountTooLarge {
                tag: Self::TAG,
                value: self.amount.cents(),
            });
        }
        Ok(())
    }
}

/// Width of an ABA routing number.
pub const ABA_WIDTH: usize = 9;
/// Width of a depository institution short name.
pub const SHORT_NAME_WIDTH: usize = 18;

macro_rules! depository_institution {
    ($(#[$meta:meta])* $name:ident, $tag:expr, $aba_field:ident, $name_field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Nine-digit ABA routing number.
            pub $aba_field: String,
            /// Institution short name.
            pub $name_field: String,
        }

        impl $name {
            /// Creates the group from routing number and short name.
            #[must_use]
            pub fn new(aba: impl Into<String>, short_name: impl Into<String>) -> Self {
                Self {
                    $aba_field: aba.into(),
                    $name_field: short_name.into(),
                }
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    $aba_field: cur.text("aba number", ABA_WIDTH)?,
                    $name_field: cur.text("short name", SHORT_NAME_WIDTH)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                enc.text(&self.$aba_field, ABA_WIDTH);
                enc.text(&self.$name_field, SHORT_NAME_WIDTH);
            }

            fn validate(&self) -> Result<(), FieldError> {
                if self.$aba_field.len() != ABA_WIDTH || !is_numeric(&self.$aba_field) {
                    return Err(FieldError::InvalidNumeric {
                        tag: Self::TAG,
                        property: "aba number",
                        value: self.$aba_field.clone(),
                    });
                }
                check_required(Self::TAG, "short name", &self.$name_field)?;
                check_text(Self::TAG, "short name", &self.$name_field, SHORT_NAME_WIDTH)
            }
        }
    };
}

depository_institution!(
    /// Sender Depository Institution `{3100}`.
    SenderDepositoryInstitution,
    Tag::SenderDepositoryInstitution,
    sender_aba_number,
    sender_short_name
);

depository_institution!(
    /// Receiver Depository Institution `{3400}`.
    ReceiverDepositoryInstitution,
    Tag::ReceiverDepositoryInstitution,
    receiver_aba_number,
    receiver_short_name
);

/// Business Function Code `{3600}`: the classifier selecting the rule set
/// for the rest of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFunctionCode {
    /// The business function.
    pub business_function_code: codes::BusinessFunctionCode,
    /// Optional transaction type refinement.
    pub transaction_type_code: String,
}

impl BusinessFunctionCode {
    /// Creates the group for a business function with no transaction type.
    #[must_use]
    pub const fn new(business_function_code: codes::BusinessFunctionCode) -> Self {
        Self {
            business_function_code,
            transaction_type_code: String::new(),
        }
    }

    /// Sets the transaction type code.
    #[must_use]
    pub fn with_transaction_type_code(mut self, code: impl Into<String>) -> Self {
        self.transaction_type_code = code.into();
        self
    }
}

impl FieldGroup for BusinessFunctionCode {
    const TAG: Tag = Tag::BusinessFunctionCode;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            business_function_code: cur.text("business function code", 3)?.parse().unwrap(),
            transaction_type_code: cur.text("transaction type code", 3)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(self.business_function_code.as_str(), 3);
        enc.text(&self.transaction_type_code, 3);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !self.business_function_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "business function code",
                value: self.business_function_code.as_str().to_string(),
            });
        }
        check_text(Self::TAG, "transaction type code", &self.transaction_type_code, 3)
    }
}
