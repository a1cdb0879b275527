/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Scalar types and character-set checks for Fedwire field values.
//!
//! This module provides:
//! - [`Amount`]: a wire amount in cents, serialized as a zero-padded digit
//!   string of up to twelve digits
//! - Date-format checks for `CCYYMMDD` and `MMDD` sub-fields
//! - The Fedwire character-set predicate used by structural validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the `{2000}` amount sub-field.
pub const AMOUNT_WIDTH: usize = 12;

/// Largest amount expressible in twelve digits (cents).
pub const MAX_AMOUNT: u64 = 999_999_999_999;

/// A Fedwire amount in cents.
///
/// Amounts travel on the wire as zero-padded digit strings with no decimal
/// point or separators; `$12,345.67` is `000001234567`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Creates a new amount from cents.
    #[inline]
    #[must_use]
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[inline]
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns true if the amount fits in the twelve-digit wire field.
    #[inline]
    #[must_use]
    pub const fn fits_wire_width(self) -> bool {
        self.0 <= MAX_AMOUNT
    }
}

impl From<u64> for Amount {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.0, width = AMOUNT_WIDTH)
    }
}

/// Returns true if `s` is a valid `CCYYMMDD` calendar date.
#[must_use]
pub fn is_ccyymmdd(s: &str) -> bool {
    s.len() == 8 && NaiveDate::parse_from_str(s, "%Y%m%d").is_ok()
}

/// Returns true if `s` is a valid `MMDD` partial date.
///
/// Checked against a leap year so `0229` is accepted.
#[must_use]
pub fn is_mmdd(s: &str) -> bool {
    s.len() == 4 && NaiveDate::parse_from_str(&format!("2024{s}"), "%Y%m%d").is_ok()
}

/// Returns true if every character of `s` belongs to the Fedwire character
/// set: printable ASCII excluding the sub-field delimiter `*` and the tag
/// braces `{` `}`.
#[must_use]
pub fn is_wire_text(s: &str) -> bool {
    s.bytes()
        .all(|b| (0x20..=0x7e).contains(&b) && b != b'*' && b != b'{' && b != b'}')
}

/// Returns true if `s` is non-empty and entirely ASCII digits.
#[must_use]
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is a well-formed exchange rate: digits with at most
/// one decimal point and at least one digit.
#[must_use]
pub fn is_exchange_rate(s: &str) -> bool {
    let mut digits = 0usize;
    let mut points = 0usize;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
