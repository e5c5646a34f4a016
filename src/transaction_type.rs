//! Transaction type codes shared between the server and extensions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Kind of transaction performed at a terminal.
///
/// The integer codes are part of the wire contract and are fixed; they must
/// never be renumbered. Comparisons in code should always be on the variant,
/// not on the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TransactionType {
    BuyCrypto,
    SellCrypto,
    WithdrawCash,
    Cashback,
    OrderCrypto,
    DepositCash,
}

impl TransactionType {
    /// Wire code of this transaction type.
    pub fn code(self) -> i32 {
        match self {
            TransactionType::BuyCrypto => 0,
            TransactionType::SellCrypto => 1,
            TransactionType::WithdrawCash => 2,
            TransactionType::Cashback => 3,
            TransactionType::OrderCrypto => 4,
            TransactionType::DepositCash => 5,
        }
    }

    /// Resolves a wire code back to a transaction type.
    pub fn from_code(code: i32) -> Result<Self, ContractError> {
        match code {
            0 => Ok(TransactionType::BuyCrypto),
            1 => Ok(TransactionType::SellCrypto),
            2 => Ok(TransactionType::WithdrawCash),
            3 => Ok(TransactionType::Cashback),
            4 => Ok(TransactionType::OrderCrypto),
            5 => Ok(TransactionType::DepositCash),
            other => Err(ContractError::UnknownTransactionType(other)),
        }
    }
}

impl TryFrom<i32> for TransactionType {
    type Error = ContractError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        TransactionType::from_code(code)
    }
}

impl From<TransactionType> for i32 {
    fn from(kind: TransactionType) -> i32 {
        kind.code()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::BuyCrypto => "buy_crypto",
            TransactionType::SellCrypto => "sell_crypto",
            TransactionType::WithdrawCash => "withdraw_cash",
            TransactionType::Cashback => "cashback",
            TransactionType::OrderCrypto => "order_crypto",
            TransactionType::DepositCash => "deposit_cash",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TransactionType; 6] = [
        TransactionType::BuyCrypto,
        TransactionType::SellCrypto,
        TransactionType::WithdrawCash,
        TransactionType::Cashback,
        TransactionType::OrderCrypto,
        TransactionType::DepositCash,
    ];

    #[test]
    fn codes_are_fixed() {
        assert_eq!(TransactionType::BuyCrypto.code(), 0);
        assert_eq!(TransactionType::SellCrypto.code(), 1);
        assert_eq!(TransactionType::WithdrawCash.code(), 2);
        assert_eq!(TransactionType::Cashback.code(), 3);
        assert_eq!(TransactionType::OrderCrypto.code(), 4);
        assert_eq!(TransactionType::DepositCash.code(), 5);
    }

    #[test]
    fn every_code_round_trips() {
        for kind in ALL {
            assert_eq!(TransactionType::from_code(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            TransactionType::from_code(6),
            Err(ContractError::UnknownTransactionType(6))
        );
        assert_eq!(
            TransactionType::from_code(-1),
            Err(ContractError::UnknownTransactionType(-1))
        );
    }

    #[test]
    fn serializes_as_integer_code() {
        let encoded = serde_json::to_string(&TransactionType::WithdrawCash).unwrap();
        assert_eq!(encoded, "2");

        let decoded: TransactionType = serde_json::from_str("5").unwrap();
        assert_eq!(decoded, TransactionType::DepositCash);
    }

    #[test]
    fn deserializing_unknown_code_fails() {
        let result = serde_json::from_str::<TransactionType>("9");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown transaction type code: 9"));
    }
}
