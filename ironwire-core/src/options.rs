/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Validation options.
//!
//! A small set of named toggles that relax specific conditionally-relaxable
//! rules without altering parsing. The default is fully strict; each toggle
//! names the one rule it disables.

use serde::{Deserialize, Serialize};

/// Relaxation toggles for reading and validating Fedwire messages.
///
/// Threaded through `read_with_opts` and stored on the file so that a
/// validation run immediately after reading honors the same relaxations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationOptions {
    /// Tolerate a message missing the otherwise-mandatory Input Message
    /// Accountability Data group `{1520}`.
    pub skip_mandatory_imad: bool,

    /// Tolerate a message missing the Sender Supplied Information group
    /// `{1500}`.
    pub allow_missing_sender_supplied: bool,

    /// Skip records whose tag is not in the catalogue instead of failing
    /// the read.
    pub allow_unknown_tags: bool,
}

impl ValidationOptions {
    /// Creates fully strict options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skip_mandatory_imad: false,
            allow_missing_sender_supplied: false,
            allow_unknown_tags: false,
        }
    }

    /// Relaxes the mandatory-IMAD rule.
    #[must_use]
    pub const fn with_skip_mandatory_imad(mut self, skip: bool) -> Self {
        self.skip_mandatory_imad = skip;
        self
    }

    /// Relaxes the mandatory Sender Supplied Information rule.
    #[must_use]
    pub const fn with_allow_missing_sender_supplied(mut self, allow: bool) -> Self {
        self.allow_missing_sender_supplied = allow;
        self
    }

    /// Skips unknown tags during reading.
    #[must_use]
    pub const fn with_allow_unknown_tags(mut self, allow: bool) -> Self {
        self.allow_unknown_tags = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let opts = ValidationOptions::default();
        assert!(!opts.skip_mandatory_imad);
        assert!(!opts.allow_missing_sender_supplied);
        assert!(!opts.allow_unknown_tags);
    }

    #[test]
    fn test_builder_toggles() {
        let opts = ValidationOptions::new()
            .with_skip_mandatory_imad(true)
            .with_allow_unknown_tags(true);
        assert!(opts.skip_mandatory_imad);
        assert!(opts.allow_unknown_tags);
        assert!(!opts.allow_missing_sender_supplied);
    }
}
