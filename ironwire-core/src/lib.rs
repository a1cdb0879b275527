/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # IronWire Core
//!
//! Core types, tag catalogue, and error definitions for the IronWire Fedwire
//! funds-transfer engine.
//!
//! This crate provides the fundamental building blocks used across all
//! IronWire crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Tag catalogue**: [`Tag`], one variant per Fedwire field group
//! - **Code tables**: Classifier and enumerated code types with lenient parsing
//! - **Scalar types**: [`Amount`], date-format and character-set checks
//! - **Options**: [`ValidationOptions`] skip toggles for relaxable rules
//!
//! ## Lenient Decode, Strict Validate
//!
//! Enumerated code types parse infallibly: an unrecognized value is preserved
//! as an `Unknown(raw)` variant so the reader never loses data. The validator
//! is the strict layer that rejects unknown codes.

pub mod codes;
pub mod error;
pub mod options;
pub mod tag;
pub mod types;

pub use codes::{
    AdviceCode, BusinessFunctionCode, ChargeDetails, IdentificationCode, LocalInstrumentCode,
    MessageDuplicationCode, SubTypeCode, TestProductionCode, TypeCode,
};
pub use error::{DecodeError, EncodeError, FieldError, PresenceError, Result, WireError};
pub use options::ValidationOptions;
pub use tag::Tag;
pub use types::Amount;
