use thiserror::Error;

/// Errors raised at the boundary of the extension contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A record carried a transaction type code outside the published set.
    /// Newer servers may emit codes this crate does not know yet, so
    /// consumers should treat this as a forward-compatibility case rather
    /// than corrupt data.
    #[error("unknown transaction type code: {0}")]
    UnknownTransactionType(i32),
}
