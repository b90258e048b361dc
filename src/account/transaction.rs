//! Represents transactions
use super::{history::HistoryEntry, BankAccount};
use crate::errors::AccountErr;
use rust_decimal::Decimal;
use std::fmt;

/// Kind of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// increase balance
    Deposit,
    /// decrease balance
    Withdrawal,
}

impl TransactionKind {
    /// canonical name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }

    /// case insensitive compare against [`TransactionKind::name`]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Request to move money on an account.
///
/// Amount is not validated here, the account rejects zero and negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    #[allow(missing_docs)]
    Deposit(Decimal),
    #[allow(missing_docs)]
    Withdrawal(Decimal),
}

impl Transaction {
    /// Create request of `kind` for `amount`
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        match kind {
            TransactionKind::Deposit => Transaction::Deposit(amount),
            TransactionKind::Withdrawal => Transaction::Withdrawal(amount),
        }
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// requested amount
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Apply transaction to `account` and on success record it in account history.
    ///
    /// On error neither balance nor history is changed.
    pub fn register(self, account: &mut BankAccount) -> Result<&HistoryEntry, AccountErr> {
        let amount = match self {
            Transaction::Deposit(amount) => account.deposit(amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(amount)?,
        };
        Ok(account.history_mut().append(self.kind(), amount))
    }
}
