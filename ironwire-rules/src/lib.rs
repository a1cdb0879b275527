/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # IronWire Rules
//!
//! Conditional-presence validation for Fedwire messages.
//!
//! A Fedwire message's legal shape depends on its classifier fields: the
//! business function code in `{3600}`, refined by the sub-type in `{1510}`
//! and the local instrument in `{3610}`. This crate provides:
//! - [`RuleSet`] / [`rule_set`]: the data-driven table mapping a classifier
//!   combination to its required and permitted tag sets
//! - [`validate`]: the two-layer validator (structural, then presence)
//! - [`normalize`]: pre-write defaulting of derivable sub-fields
//!
//! Validation never mutates; running it twice over the same message yields
//! the same result.

pub mod normalize;
pub mod table;
pub mod validator;

pub use normalize::normalize;
pub use table::{BASELINE_REQUIRED, RuleSet, rule_set};
pub use validator::validate;
