/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Pre-write normalization.
//!
//! Fills in sub-fields that are derivable or carry a fixed default, so a
//! programmatically built message does not fail validation over values the
//! sender never chooses: the Sender Supplied defaults, the addenda length
//! counter, and currency code case.

use ironwire_fields::{FedwireMessage, SenderSupplied, mandatory::FORMAT_VERSION};

/// Normalizes `msg` in place.
///
/// Never removes or invalidates data; a message that validated before
/// normalization still validates after it.
pub fn normalize(msg: &mut FedwireMessage) {
    match &mut msg.sender_supplied {
        None => msg.sender_supplied = Some(SenderSupplied::default()),
        Some(sender_supplied) => {
            if sender_supplied.format_version.is_empty() {
                sender_supplied.format_version = FORMAT_VERSION.to_string();
            }
        }
    }

    if let Some(addenda) = &mut msg.unstructured_addenda {
        addenda.addenda_length = addenda.addenda.len() as u64;
    }

    if let Some(instructed) = &mut msg.instructed_amount {
        instructed.currency_code.make_ascii_uppercase();
    }
    if let Some(cover) = &mut msg.currency_instructed_amount {
        cover.currency_code.make_ascii_uppercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwire_fields::{InstructedAmount, UnstructuredAddenda};

    #[test]
    fn test_fills_sender_supplied() {
        let mut msg = FedwireMessage::new();
        normalize(&mut msg);
        assert_eq!(
            msg.sender_supplied.unwrap().format_version,
            FORMAT_VERSION
        );
    }

    #[test]
    fn test_derives_addenda_length() {
        let mut msg = FedwireMessage::new();
        msg.unstructured_addenda = Some(UnstructuredAddenda {
            addenda_length: 0,
            addenda: "REMIT 778".to_string(),
        });
        normalize(&mut msg);
        assert_eq!(msg.unstructured_addenda.unwrap().addenda_length, 9);
    }

    #[test]
    fn test_uppercases_currency() {
        let mut msg = FedwireMessage::new();
        msg.instructed_amount = Some(InstructedAmount::new("eur", 100));
        normalize(&mut msg);
        assert_eq!(msg.instructed_amount.unwrap().currency_code, "EUR");
    }
}
