/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! The [`File`] container: one identified Fedwire message plus the wire
//! mode and validation options that travel with it.

use chrono::Utc;
use ironwire_core::error::Result;
use ironwire_core::options::ValidationOptions;
use ironwire_fields::FedwireMessage;
use ironwire_rules::{normalize, validate};
use ironwire_tagrecord::Format;
use serde::{Deserialize, Serialize};

/// A Fedwire file: an opaque identifier and exactly one message.
///
/// The wire mode and validation options are carried alongside so that a
/// file read with relaxations validates and re-serializes consistently;
/// neither is part of the interchange representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Caller-assigned identifier; generated by [`File::create`] when empty.
    pub id: String,
    /// The message.
    pub fed_wire_message: FedwireMessage,
    #[serde(skip)]
    format: Format,
    #[serde(skip)]
    options: ValidationOptions,
}

impl File {
    /// Creates an empty file in fixed-width mode with strict options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wire mode.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Sets the validation options.
    #[must_use]
    pub const fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// The wire mode this file serializes in.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The validation options this file validates under.
    #[must_use]
    pub const fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Sets the file's message.
    #[must_use]
    pub fn with_message(mut self, message: FedwireMessage) -> Self {
        self.fed_wire_message = message;
        self
    }

    /// Replaces the file's message.
    pub fn add_fedwire_message(&mut self, message: FedwireMessage) {
        self.fed_wire_message = message;
    }

    /// Normalizes the message, assigns an identifier if none is set, and
    /// validates.
    ///
    /// # Errors
    ///
    /// Returns the first blocking validation error.
    pub fn create(&mut self) -> Result<()> {
        if self.id.is_empty() {
            self.id = Utc::now().format("%Y%m%d%H%M%S%6f").to_string();
        }
        normalize(&mut self.fed_wire_message);
        self.validate()
    }

    /// Validates the message under the stored options. Never mutates.
    ///
    /// # Errors
    ///
    /// Returns the first blocking validation error.
    pub fn validate(&self) -> Result<()> {
        validate(&self.fed_wire_message, &self.options)
    }
}
