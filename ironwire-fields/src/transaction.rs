/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Transaction-level optional groups: references, local instrument,
//! payment notification, charges, instructed amount and exchange rate.

use crate::common::{LINE_WIDTH, check_required, check_text};
use crate::group::FieldGroup;
use ironwire_core::codes::{ChargeDetails, LocalInstrumentCode};
use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_core::types::is_exchange_rate;
use ironwire_tagrecord::{Cursor, RecordEncoder};
use serde::{Deserialize, Serialize};

/// Width of a sender reference.
pub const SENDER_REFERENCE_WIDTH: usize = 16;
/// Width of a previous message identifier.
pub const PREVIOUS_MESSAGE_IDENTIFIER_WIDTH: usize = 22;
/// Width of the local instrument code.
pub const LOCAL_INSTRUMENT_CODE_WIDTH: usize = 4;
/// Width of each senders' charges entry.
pub const SENDERS_CHARGES_WIDTH: usize = 15;
/// Width of a currency code.
pub const CURRENCY_CODE_WIDTH: usize = 3;
/// Width of an instructed amount.
pub const INSTRUCTED_AMOUNT_WIDTH: usize = 15;
/// Largest amount representable in a fifteen-digit amount field.
pub const INSTRUCTED_AMOUNT_MAX: u64 = 999_999_999_999_999;
/// Width of an exchange rate.
pub const EXCHANGE_RATE_WIDTH: usize = 12;

/// Sender Reference `{3320}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SenderReference {
    /// Reference the sender attaches for its own reconciliation.
    pub sender_reference: String,
}

impl SenderReference {
    /// Creates a sender reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            sender_reference: reference.into(),
        }
    }
}

impl FieldGroup for SenderReference {
    const TAG: Tag = Tag::SenderReference;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            sender_reference: cur.text("sender reference", SENDER_REFERENCE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.sender_reference, SENDER_REFERENCE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_text(
            Self::TAG,
            "sender reference",
            &self.sender_reference,
            SENDER_REFERENCE_WIDTH,
        )
    }
}

/// Previous Message Identifier `{3500}`: the IMAD of the message a
/// reversal or service request refers back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreviousMessageIdentifier {
    /// Identifier of the referenced message.
    pub previous_message_identifier: String,
}

impl PreviousMessageIdentifier {
    /// Creates a previous message identifier.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            previous_message_identifier: identifier.into(),
        }
    }
}

impl FieldGroup for PreviousMessageIdentifier {
    const TAG: Tag = Tag::PreviousMessageIdentifier;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            previous_message_identifier: cur.text(
                "previous message identifier",
                PREVIOUS_MESSAGE_IDENTIFIER_WIDTH,
            )?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(
            &self.previous_message_identifier,
            PREVIOUS_MESSAGE_IDENTIFIER_WIDTH,
        );
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_required(
            Self::TAG,
            "previous message identifier",
            &self.previous_message_identifier,
        )?;
        check_text(
            Self::TAG,
            "previous message identifier",
            &self.previous_message_identifier,
            PREVIOUS_MESSAGE_IDENTIFIER_WIDTH,
        )
    }
}

/// Local Instrument `{3610}`: refines `CTP` messages with the payment
/// scheme in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalInstrument {
    /// The local instrument code.
    pub local_instrument_code: LocalInstrumentCode,
    /// Scheme-defined proprietary value, only with the `PROP` code.
    pub proprietary_code: String,
}

impl LocalInstrument {
    /// Creates a local instrument group.
    #[must_use]
    pub const fn new(code: LocalInstrumentCode) -> Self {
        Self {
            local_instrument_code: code,
            proprietary_code: String::new(),
        }
    }

    /// Sets the proprietary code carried with `PROP`.
    #[must_use]
    pub fn with_proprietary_code(mut self, code: impl Into<String>) -> Self {
        self.proprietary_code = code.into();
        self
    }
}

impl FieldGroup for LocalInstrument {
    const TAG: Tag = Tag::LocalInstrument;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            local_instrument_code: cur
                .text("local instrument code", LOCAL_INSTRUMENT_CODE_WIDTH)?
                .parse()
                .unwrap(),
            proprietary_code: cur.text("proprietary code", LINE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(self.local_instrument_code.as_str(), LOCAL_INSTRUMENT_CODE_WIDTH);
        enc.text(&self.proprietary_code, LINE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !self.local_instrument_code.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "local instrument code",
                value: self.local_instrument_code.as_str().to_string(),
            });
        }
        match self.local_instrument_code {
            LocalInstrumentCode::Proprietary => {
                check_required(Self::TAG, "proprietary code", &self.proprietary_code)?;
            }
            _ if !self.proprietary_code.is_empty() => {
                return Err(FieldError::InvalidCode {
                    tag: Self::TAG,
                    property: "proprietary code",
                    value: self.proprietary_code.clone(),
                });
            }
            _ => {}
        }
        check_text(Self::TAG, "proprietary code", &self.proprietary_code, LINE_WIDTH)
    }
}

/// Payment Notification `{3620}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    /// Notification indicator, `0` through `6`.
    pub payment_notification_indicator: String,
    /// Contact phone number.
    pub contact_phone_number: String,
    /// Contact mobile number.
    pub contact_mobile_number: String,
    /// Contact electronic address.
    pub contact_electronic_address: String,
    /// Contact name.
    pub contact_name: String,
    /// Additional contact information.
    pub contact_other: String,
}

impl FieldGroup for PaymentNotification {
    const TAG: Tag = Tag::PaymentNotification;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            payment_notification_indicator: cur.text("payment notification indicator", 1)?,
            contact_phone_number: cur.text("contact phone number", LINE_WIDTH)?,
            contact_mobile_number: cur.text("contact mobile number", LINE_WIDTH)?,
            contact_electronic_address: cur.text("contact electronic address", LINE_WIDTH)?,
            contact_name: cur.text("contact name", LINE_WIDTH)?,
            contact_other: cur.text("contact other", LINE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.payment_notification_indicator, 1);
        enc.text(&self.contact_phone_number, LINE_WIDTH);
        enc.text(&self.contact_mobile_number, LINE_WIDTH);
        enc.text(&self.contact_electronic_address, LINE_WIDTH);
        enc.text(&self.contact_name, LINE_WIDTH);
        enc.text(&self.contact_other, LINE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !matches!(self.payment_notification_indicator.as_str(), "0" | "1" | "2" | "3" | "4" | "5" | "6")
        {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "payment notification indicator",
                value: self.payment_notification_indicator.clone(),
            });
        }
        check_text(Self::TAG, "contact phone number", &self.contact_phone_number, LINE_WIDTH)?;
        check_text(Self::TAG, "contact mobile number", &self.contact_mobile_number, LINE_WIDTH)?;
        check_text(
            Self::TAG,
            "contact electronic address",
            &self.contact_electronic_address,
            LINE_WIDTH,
        )?;
        check_text(Self::TAG, "contact name", &self.contact_name, LINE_WIDTH)?;
        check_text(Self::TAG, "contact other", &self.contact_other, LINE_WIDTH)
    }
}

/// Charges `{3700}`: who bears the transfer charges and up to four
/// deducted amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charges {
    /// Beneficiary- or sender-borne.
    pub charge_details: ChargeDetails,
    /// First deducted charge.
    pub senders_charges_one: String,
    /// Second deducted charge.
    pub senders_charges_two: String,
    /// Third deducted charge.
    pub senders_charges_three: String,
    /// Fourth deducted charge.
    pub senders_charges_four: String,
}

impl Charges {
    /// Creates a charges group with no deducted amounts.
    #[must_use]
    pub const fn new(charge_details: ChargeDetails) -> Self {
        Self {
            charge_details,
            senders_charges_one: String::new(),
            senders_charges_two: String::new(),
            senders_charges_three: String::new(),
            senders_charges_four: String::new(),
        }
    }
}

impl FieldGroup for Charges {
    const TAG: Tag = Tag::Charges;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            charge_details: cur.text("charge details", 1)?.parse().unwrap(),
            senders_charges_one: cur.text("senders charges one", SENDERS_CHARGES_WIDTH)?,
            senders_charges_two: cur.text("senders charges two", SENDERS_CHARGES_WIDTH)?,
            senders_charges_three: cur.text("senders charges three", SENDERS_CHARGES_WIDTH)?,
            senders_charges_four: cur.text("senders charges four", SENDERS_CHARGES_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(self.charge_details.as_str(), 1);
        enc.text(&self.senders_charges_one, SENDERS_CHARGES_WIDTH);
        enc.text(&self.senders_charges_two, SENDERS_CHARGES_WIDTH);
        enc.text(&self.senders_charges_three, SENDERS_CHARGES_WIDTH);
        enc.text(&self.senders_charges_four, SENDERS_CHARGES_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        if !self.charge_details.is_known() {
            return Err(FieldError::InvalidCode {
                tag: Self::TAG,
                property: "charge details",
                value: self.charge_details.as_str().to_string(),
            });
        }
        check_text(Self::TAG, "senders charges one", &self.senders_charges_one, SENDERS_CHARGES_WIDTH)?;
        check_text(Self::TAG, "senders charges two", &self.senders_charges_two, SENDERS_CHARGES_WIDTH)?;
        check_text(
            Self::TAG,
            "senders charges three",
            &self.senders_charges_three,
            SENDERS_CHARGES_WIDTH,
        )?;
        check_text(Self::TAG, "senders charges four", &self.senders_charges_four, SENDERS_CHARGES_WIDTH)
    }
}

fn check_currency(tag: Tag, value: &str) -> Result<(), FieldError> {
    if value.len() != CURRENCY_CODE_WIDTH || !value.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(FieldError::InvalidCode {
            tag,
            property: "currency code",
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Instructed Amount `{3710}`: the amount in the original currency of
/// instruction, before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstructedAmount {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount in the instructed currency's minor unit.
    pub amount: u64,
}

impl InstructedAmount {
    /// Creates an instructed amount.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, amount: u64) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount,
        }
    }
}

impl FieldGroup for InstructedAmount {
    const TAG: Tag = Tag::InstructedAmount;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            currency_code: cur.text("currency code", CURRENCY_CODE_WIDTH)?,
            amount: cur.numeric("amount", INSTRUCTED_AMOUNT_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.currency_code, CURRENCY_CODE_WIDTH);
        enc.numeric(self.amount, INSTRUCTED_AMOUNT_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_currency(Self::TAG, &self.currency_code)?;
        if self.amount > INSTRUCTED_AMOUNT_MAX {
            return Err(FieldError::AmountTooLarge {
                tag: Self::TAG,
                value: self.amount,
            });
        }
        Ok(())
    }
}

/// Exchange Rate `{3720}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Rate applied between instructed and settled currencies.
    pub exchange_rate: String,
}

impl ExchangeRate {
    /// Creates an exchange rate group.
    #[must_use]
    pub fn new(rate: impl Into<String>) -> Self {
        Self {
            exchange_rate: rate.into(),
        }
    }
}

impl FieldGroup for ExchangeRate {
    const TAG: Tag = Tag::ExchangeRate;

    fn decode(mut cur: Cursor<'_>) -> Result<Self, DecodeError> {
        let group = Self {
            exchange_rate: cur.text("exchange rate", EXCHANGE_RATE_WIDTH)?,
        };
        cur.finish()?;
        Ok(group)
    }

    fn encode(&self, enc: &mut RecordEncoder) {
        enc.text(&self.exchange_rate, EXCHANGE_RATE_WIDTH);
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_text(Self::TAG, "exchange rate", &self.exchange_rate, EXCHANGE_RATE_WIDTH)?;
        if !is_exchange_rate(&self.exchange_rate) {
            return Err(FieldError::InvalidNumeric {
                tag: Self::TAG,
                property: "exchange rate",
                value: self.exchange_rate.clone(),
            });
        }
        Ok(())
    }
}
