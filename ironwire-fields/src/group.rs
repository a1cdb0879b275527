/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The codec seam every field group implements.

use ironwire_core::error::{DecodeError, FieldError};
use ironwire_core::tag::Tag;
use ironwire_tagrecord::{Cursor, RecordEncoder};

/// Codec contract for one Fedwire field group.
///
/// `decode` consumes a sub-field cursor over the record payload (fixed or
/// variable mode, the cursor hides which) and must fully consume it;
/// `encode` appends the group's sub-fields to an open record. For any
/// legally constructed group `g` and either mode,
/// `decode(encode(g)) == g`.
///
/// Decoding is structurally strict but semantically lenient: layout
/// violations fail here, while unknown enumerated codes are preserved and
/// rejected later by [`validate`](Self::validate).
pub trait FieldGroup: Sized {
    /// The tag identifying this group on the wire.
    const TAG: Tag;

    /// Decodes the group from a record payload cursor.
    ///
    /// # Errors
    /// Returns `DecodeError` if the record does not match the group's
    /// layout in the cursor's mode.
    fn decode(cur: Cursor<'_>) -> Result<Self, DecodeError>;

    /// Appends the group's sub-fields to an open record.
    fn encode(&self, enc: &mut RecordEncoder);

    /// Structural validation: lengths, character set, numeric and date
    /// formats, code-table membership.
    ///
    /// # Errors
    /// Returns the first failing [`FieldError`].
    fn validate(&self) -> Result<(), FieldError>;
}
