//! Account traits and structs
use crate::AGENCY;
use rust_decimal::Decimal;

pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod history;
pub(crate) mod transaction;

pub use bank_account::{AccountKind, BankAccount, WithdrawalLimits};
pub use history::{History, HistoryEntry};
pub use transaction::{Transaction, TransactionKind};

/// Represent basic account information and balance
pub trait Account {
    /// identifier of account
    fn number(&self) -> &str;
    /// tax id of account holder
    fn owner(&self) -> &str;
    /// amount of money available for withdraw
    fn balance(&self) -> Decimal;
    /// committed transactions
    fn history(&self) -> &History;

    /// agency of account
    fn agency(&self) -> &str {
        AGENCY
    }

    /// total amount of money ever deposited, `None` on overflow
    fn total_deposited(&self) -> Option<Decimal> {
        self.history().total_of(TransactionKind::Deposit)
    }

    /// total amount of money ever withdrawn, `None` on overflow
    fn total_withdrawn(&self) -> Option<Decimal> {
        self.history().total_of(TransactionKind::Withdrawal)
    }
}
