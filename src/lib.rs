//! Data contract between a cryptocurrency ATM server and its extensions.
//!
//! The server hands extension code a [`TransactionRecord`] snapshot per
//! transaction. Extensions read it through total accessors; the only
//! mutation the contract allows is replacing the customer-facing error
//! message. Construction stays on the server side, behind
//! [`record::TransactionRecordBuilder`].

pub mod error;
pub mod questionnaire;
pub mod record;
pub mod transaction_type;

pub use error::ContractError;
pub use questionnaire::QuestionnaireResult;
pub use record::{TransactionRecord, TransactionRecordBuilder};
pub use transaction_type::TransactionType;
