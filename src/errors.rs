//! Possible errors

use crate::{amount::NonPositiveAmountErr, AccountNumber, TaxId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("insufficient funds for this operation")]
    InsufficientFunds,
    #[error("balance would exceed the maximal representable amount")]
    Overflow,
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("invalid value: {0}")]
    InvalidAmount(#[from] NonPositiveAmountErr),
    #[error(transparent)]
    Balance(#[from] BalanceErr),
    #[error("withdrawal amount above the limit of {limit}")]
    WithdrawalLimitExceeded { limit: Decimal },
    #[error("number of withdrawals exceeded the limit of {limit}")]
    WithdrawalCountExceeded { limit: usize },
}

/// Errors returned by the bank registry
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankErr {
    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),
    #[error("customer with tax id {0} not found")]
    CustomerNotFound(TaxId),
    #[error("customer with tax id {0} already exists")]
    CustomerAlreadyExists(TaxId),
    #[error("account {0} already exists")]
    AccountAlreadyExists(AccountNumber),
    #[error(transparent)]
    Account(#[from] AccountErr),
}

impl AccountErr {
    /// true when the account was asked to move more money than it holds
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountErr::Balance(BalanceErr::InsufficientFunds))
    }
}
