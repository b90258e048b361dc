use super::{balance::Balance, history::History, transaction::*, Account};
use crate::{amount::Amount, errors::AccountErr, AccountNumber, TaxId, AGENCY};
use rust_decimal::Decimal;
use std::fmt;

/// Per account withdrawal restrictions of a checking account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalLimits {
    /// maximal amount of a single withdrawal
    pub amount: Decimal,
    /// maximal number of withdrawals over whole account history
    pub count: usize,
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            amount: Decimal::new(800, 0),
            count: 3,
        }
    }
}

/// Closed set of account variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// no restriction beyond available balance
    Basic,
    /// withdrawals restricted by [`WithdrawalLimits`]
    Checking(WithdrawalLimits),
}

/// Account balance and transactions history
#[derive(Debug, Clone)]
pub struct BankAccount {
    number: AccountNumber,
    owner: TaxId,
    balance: Balance,
    history: History,
    kind: AccountKind,
}

impl BankAccount {
    /// Create empty account without withdrawal limits
    pub fn new_basic(number: impl Into<AccountNumber>, owner: impl Into<TaxId>) -> Self {
        Self {
            number: number.into(),
            owner: owner.into(),
            balance: Default::default(),
            history: Default::default(),
            kind: AccountKind::Basic,
        }
    }

    /// Create empty checking account with default [`WithdrawalLimits`]
    pub fn new_checking(number: impl Into<AccountNumber>, owner: impl Into<TaxId>) -> Self {
        Self::new_basic(number, owner).with_limits(WithdrawalLimits::default())
    }

    /// Turn account into checking account with given `limits`
    pub fn with_limits(mut self, limits: WithdrawalLimits) -> Self {
        self.kind = AccountKind::Checking(limits);
        self
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// try to increase balance, returns validated amount
    pub fn deposit(&mut self, amount: Decimal) -> Result<Amount, AccountErr> {
        let amount = Amount::try_from(amount)?;
        self.balance.try_deposit(&amount)?;
        Ok(amount)
    }

    /// try to decrease balance, returns validated amount
    ///
    /// Checking accounts first verify the amount cap and then number of withdrawals
    /// recorded in the whole history.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Amount, AccountErr> {
        if let AccountKind::Checking(limits) = self.kind {
            let withdrawal_count = self.history.count_of(TransactionKind::Withdrawal);

            if amount > limits.amount {
                return Err(AccountErr::WithdrawalLimitExceeded {
                    limit: limits.amount,
                });
            }
            if withdrawal_count >= limits.count {
                return Err(AccountErr::WithdrawalCountExceeded {
                    limit: limits.count,
                });
            }
        }

        let amount = Amount::try_from(amount)?;
        self.balance.try_withdraw(&amount)?;
        Ok(amount)
    }

    /// Apply `transaction` and record it in history when it succeeded
    pub fn apply_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<&super::HistoryEntry, AccountErr> {
        transaction.register(self)
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

impl Account for BankAccount {
    fn number(&self) -> &str {
        &self.number
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> Decimal {
        self.balance.available()
    }

    fn history(&self) -> &History {
        &self.history
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agency:\t{}", AGENCY)?;
        write!(f, "Account:\t{}", self.number)
    }
}
