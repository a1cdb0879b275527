/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # IronWire Tag Record
//!
//! Low-level record framing for the Fedwire wire format.
//!
//! This crate provides:
//! - [`RecordReader`]: splits an input stream into `(line, tag, payload)`
//!   records
//! - [`Cursor`]: reads sub-fields from one record payload in fixed-width or
//!   variable-width mode
//! - [`RecordEncoder`]: builds records with the padding rules of each mode
//!
//! The encoding mode ([`Format`]) is an explicit construction choice, not
//! sniffed from the data: a fixed-width record is pure column layout, a
//! variable-width record delimits every sub-field with `*` and is terminated
//! by the final delimiter.

pub mod cursor;
pub mod encoder;
pub mod reader;

pub use cursor::{Cursor, DELIMITER, Format};
pub use encoder::RecordEncoder;
pub use reader::{RawRecord, RecordReader};
