/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # IronWire Fields
//!
//! Field-group codecs and the Fedwire message aggregate.
//!
//! Every Fedwire tag group has one codec type here implementing
//! [`FieldGroup`]: it knows its tag, its fixed column layout, its
//! variable-width layout, and its structural validation rules. Groups that
//! share a wire shape (parties, financial institutions, SWIFT relay lines,
//! advice blocks) delegate to the shared sub-structures in [`common`].
//!
//! [`FedwireMessage`] is the in-memory aggregate: one optional slot per tag
//! group, with absent meaning "not transmitted".

pub mod common;
pub mod cover;
pub mod fi_info;
pub mod group;
pub mod mandatory;
pub mod message;
pub mod parties;
pub mod service;
pub mod transaction;

pub use common::{Address, Advice, FiInfo, FinancialInstitution, Personal, SwiftFields};
pub use cover::{
    BeneficiaryCustomer, CurrencyInstructedAmount, InstitutionAccount, IntermediaryInstitution,
    OrderingCustomer, OrderingInstitution, Remittance, SenderToReceiver,
};
pub use fi_info::{
    FiAdditionalFiToFi, FiBeneficiary, FiBeneficiaryAdvice, FiBeneficiaryFi,
    FiBeneficiaryFiAdvice, FiDrawdownDebitAccountAdvice, FiIntermediaryFi, FiIntermediaryFiAdvice,
    FiPaymentMethodToBeneficiary, FiReceiverFi,
};
pub use group::FieldGroup;
pub use mandatory::{
    Amount, BusinessFunctionCode, InputMessageAccountabilityData, ReceiverDepositoryInstitution,
    SenderDepositoryInstitution, SenderSupplied, TypeSubType,
};
pub use message::FedwireMessage;
pub use parties::{
    AccountCreditedDrawdown, AccountDebitedDrawdown, Beneficiary, BeneficiaryFi,
    BeneficiaryReference, InstructingFi, IntermediaryFi, Originator, OriginatorFi,
    OriginatorOptionF, OriginatorToBeneficiary,
};
pub use service::{ServiceMessage, UnstructuredAddenda};
pub use transaction::{
    Charges, ExchangeRate, InstructedAmount, LocalInstrument, PaymentNotification,
    PreviousMessageIdentifier, SenderReference,
};
