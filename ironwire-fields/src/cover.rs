/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Cover-payment groups, tags `{7033}` through `{7072}`.
//!
//! These carry sequence B of a SWIFT cover payment and are legal only under
//! customer transfer plus with the `COVS` local instrument.

use crate::common::SwiftFields;
use crate::group::FieldGroup;
use crate::transaction::{CURRENCY_CODE_WIDTH, INSTRUCTED_AMOUNT_MAX};
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// Width of the `{7033}` instructed amount.
pub const CURRENCY_INSTRUCTED_AMOUNT_WIDTH: usize = 15;

/// Currency Instructed Amount `{7033}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInstructedAmount {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount in the currency's minor unit.
    pub amount: u64,
}

impl CurrencyInstructedAmount {
    /// Creates a currency instructed amount.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, amount: u64) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount,
        }
    }
}

impl FieldGroup for CurrencyInstructedAmount {
    const TAG: Tag = Tag::CurrencyInstructedAmount;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            currency_code: cur.text("currency code", CURRENCY_CODE_WIDTH)?,
            amount: cur.numeric("amount", CURRENCY_INSTRUCTED_AMOUNT_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.currency_code, CURRENCY_CODE_WIDTH);
        enc.numeric(self.amount, CURRENCY_INSTRUCTED_AMOUNT_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if self.currency_code.len() != CURRENCY_CODE_WIDTH
            || !self.currency_code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "currency code",
                value: self.currency_code.clone(),
            });
        }
        if self.amount > INSTRUCTED_AMOUNT_MAX {
            return Err(FieldError::AmountTooLarge {
                tag: Self::TAG,
                value: self.amount,
            });
        }
        Ok(())
    }
}

macro_rules! swift_relay_group {
    ($(#[$meta:meta])* $name:ident, $tag:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The relayed SWIFT block.
            pub swift_fields: SwiftFields,
        }

        impl $name {
            /// Wraps a SWIFT block in this group.
            #[must_use]
            pub fn new(swift_fields: SwiftFields) -> Self {
                Self { swift_fields }
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    swift_fields: SwiftFields::decode(&mut cur)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                self.swift_fields.encode(enc);
            }

            fn validate(&self) -> Result<(), FieldError> {
                self.swift_fields.validate(Self::TAG)
            }
        }
    };
}

swift_relay_group!(
    /// Ordering Customer `{7050}`.
    OrderingCustomer,
    Tag::OrderingCustomer
);

swift_relay_group!(
    /// Ordering Institution `{7052}`.
    OrderingInstitution,
    Tag::OrderingInstitution
);

swift_relay_group!(
    /// Intermediary Institution `{7056}`.
    IntermediaryInstitution,
    Tag::IntermediaryInstitution
);

swift_relay_group!(
    /// Institution Account `{7057}`.
    InstitutionAccount,
    Tag::InstitutionAccount
);

swift_relay_group!(
    /// Beneficiary Customer `{7059}`.
    BeneficiaryCustomer,
    Tag::BeneficiaryCustomer
);

swift_relay_group!(
    /// Remittance Information `{7063}`.
    Remittance,
    Tag::Remittance
);

swift_relay_group!(
    /// Sender to Receiver Information `{7072}`.
    SenderToReceiver,
    Tag::SenderToReceiver
);
