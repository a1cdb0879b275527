/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! FI-to-FI information and advice groups, tags `{6100}` through `{6500}`.

use crate::common::{Advice, FiInfo, check_required, check_text};
use crate::group::FieldGroup;
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// Width of the `{6420}` payment method code.
pub const PAYMENT_METHOD_WIDTH: usize = 5;
/// Width of the `{6420}` additional information sub-field.
pub const PAYMENT_METHOD_INFO_WIDTH: usize = 30;

/// The only payment method Fedwire defines for `{6420}`.
pub const PAYMENT_METHOD_CHECK: &str = "CHECK";

macro_rules! fi_info_group {
    ($(#[$meta:meta])* $name:ident, $tag:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The free-text information block.
            pub fi_info: FiInfo,
        }

        impl $name {
            /// Wraps an information block in this group.
            #[must_use]
            pub fn new(fi_info: FiInfo) -> Self {
                Self { fi_info }
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    fi_info: FiInfo::decode(&mut cur)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                self.fi_info.encode(enc);
            }

            fn validate(&self) -> Result<(), FieldError> {
                self.fi_info.validate(Self::TAG)
            }
        }
    };
}

macro_rules! advice_group {
    ($(#[$meta:meta])* $name:ident, $tag:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The advice block.
            pub advice: Advice,
        }

        impl $name {
            /// Wraps an advice block in this group.
            #[must_use]
            pub fn new(advice: Advice) -> Self {
                Self { advice }
            }
        }

        impl FieldGroup for $name {
            const TAG: Tag = $tag;

            fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
                let group = Self {
                    advice: Advice::decode(&mut cur)?,
                };
                cur.finish()?;
                Ok(group)
            }

            fn encode(&self, enc: &mut RecordEncoder) {
                self.advice.encode(enc);
            }

            fn validate(&self) -> Result<(), FieldError> {
                self.advice.validate(Self::TAG)
            }
        }
    };
}

fi_info_group!(
    /// FI Receiver FI Information `{6100}`.
    FiReceiverFi,
    Tag::FiReceiverFi
);

fi_info_group!(
    /// FI Intermediary FI Information `{6200}`.
    FiIntermediaryFi,
    Tag::FiIntermediaryFi
);

fi_info_group!(
    /// FI Beneficiary FI Information `{6300}`.
    FiBeneficiaryFi,
    Tag::FiBeneficiaryFi
);

fi_info_group!(
    /// FI Beneficiary Information `{6400}`.
    FiBeneficiary,
    Tag::FiBeneficiary
);

fi_info_group!(
    /// FI Additional FI-to-FI Information `{6500}`.
    FiAdditionalFiToFi,
    Tag::FiAdditionalFiToFi
);

advice_group!(
    /// FI Drawdown Debit Account Advice `{6110}`.
    FiDrawdownDebitAccountAdvice,
    Tag::FiDrawdownDebitAccountAdvice
);

advice_group!(
    /// FI Intermediary FI Advice `{6210}`.
    FiIntermediaryFiAdvice,
    Tag::FiIntermediaryFiAdvice
);

advice_group!(
    /// FI Beneficiary FI Advice `{6310}`.
    FiBeneficiaryFiAdvice,
    Tag::FiBeneficiaryFiAdvice
);

advice_group!(
    /// FI Beneficiary Advice `{6410}`.
    FiBeneficiaryAdvice,
    Tag::FiBeneficiaryAdvice
);

/// FI Payment Method to Beneficiary `{6420}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiPaymentMethodToBeneficiary {
    /// Payment method, always `CHECK`.
    pub payment_method: String,
    /// Additional delivery information.
    pub additional_information: String,
}

impl FiPaymentMethodToBeneficiary {
    /// Creates a check payment method group.
    #[must_use]
    pub fn new(additional_information: impl Into<String>) -> Self {
        Self {
            payment_method: PAYMENT_METHOD_CHECK.to_string(),
            additional_information: additional_information.into(),
        }
    }
}

impl Default for FiPaymentMethodToBeneficiary {
    fn default() -> Self {
        Self::new("")
    }
}

impl FieldGroup for FiPaymentMethodToBeneficiary {
    const TAG: Tag = Tag::FiPaymentMethodToBeneficiary;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            payment_method: cur.text("payment method", PAYMENT_METHOD_WIDTH)?,
            additional_information: cur.text("additional information", PAYMENT_METHOD_INFO_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.payment_method, PAYMENT_METHOD_WIDTH);
        enc.text(&self.additional_information, PAYMENT_METHOD_INFO_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_required(Self::TAG, "payment method", &self.payment_method)?;
        if self.payment_method != PAYMENT_METHOD_CHECK {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "payment method",
                value: self.payment_method.clone(),
            });
        }
        check_text(
            Self::TAG,
            "additional information",
            &self.additional_information,
            PAYMENT_METHOD_INFO_WIDTH,
        )
    }
}
