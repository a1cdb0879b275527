/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # IronWire
//!
//! A reader, writer and validator for Fedwire funds-transfer messages.
//!
//! **IronWire** decodes the Fedwire tag-record wire format into a typed
//! [`FedwireMessage`], validates it structurally and against the
//! conditional-presence rules keyed on its classifier fields, and encodes
//! it back byte-identically:
//! - **Two wire modes**: fixed-column and `*`-delimited variable-width
//!   records, chosen per file via [`Format`]
//! - **Lenient decode, strict validate**: unknown enumerated codes survive
//!   decoding and are rejected by validation with the raw value preserved
//! - **Round-trip law**: decode then encode reproduces the input in either
//!   mode for every legal message
//!
//! ## Example
//!
//! ```
//! use ironwire::{File, Format, codes, read};
//! use ironwire::fields::{
//!     Amount, Beneficiary, BusinessFunctionCode, FedwireMessage,
//!     InputMessageAccountabilityData, Personal, ReceiverDepositoryInstitution,
//!     SenderDepositoryInstitution, SenderSupplied, TypeSubType,
//! };
//!
//! let mut msg = FedwireMessage::new();
//! msg.sender_supplied = Some(SenderSupplied::default());
//! msg.type_sub_type = Some(TypeSubType::new(
//!     codes::TypeCode::FundsTransfer,
//!     codes::SubTypeCode::BasicFundsTransfer,
//! ));
//! msg.input_message_accountability_data =
//!     Some(InputMessageAccountabilityData::new("20260315", "MMQFMPQF", "000001"));
//! msg.amount = Some(Amount::new(1_234_567));
//! msg.sender_depository_institution =
//!     Some(SenderDepositoryInstitution::new("121000248", "WELLS FARGO"));
//! msg.receiver_depository_institution =
//!     Some(ReceiverDepositoryInstitution::new("021000021", "CHASE NYC"));
//! msg.business_function_code = Some(BusinessFunctionCode::new(
//!     codes::BusinessFunctionCode::CustomerTransfer,
//! ));
//! msg.beneficiary = Some(Beneficiary::new(Personal::new(
//!     codes::IdentificationCode::DemandDepositAccount,
//!     "101100045",
//!     "JANE SMITH",
//! )));
//!
//! let mut file = File::new().with_format(Format::Variable);
//! file.add_fedwire_message(msg);
//! file.create()?;
//!
//! let mut out = Vec::new();
//! ironwire::write(&mut out, &file)?;
//!
//! let back = read(&out, Format::Variable)?;
//! assert_eq!(back.fed_wire_message, file.fed_wire_message);
//! # Ok::<(), ironwire::WireError>(())
//! ```

pub mod file;
pub mod read;
pub mod write;

pub use file::File;
pub use read::{ReadOptions, read, read_with_opts};
pub use write::write;

pub use ironwire_core::codes;
pub use ironwire_core::error::{
    DecodeError, EncodeError, FieldError, PresenceError, Result, WireError,
};
pub use ironwire_core::options::ValidationOptions;
pub use ironwire_core::tag::Tag;
pub use ironwire_core::types::Amount;
pub use ironwire_fields as fields;
pub use ironwire_fields::FedwireMessage;
pub use ironwire_rules::{normalize, rule_set, validate};
pub use ironwire_tagrecord::Format;

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
