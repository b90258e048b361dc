//! Customers and accounts they own
use crate::{
    account::{Account, BankAccount, HistoryEntry, Transaction},
    errors::BankErr,
    TaxId,
};
use chrono::NaiveDate;

/// Individual customer owning zero or more accounts
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    tax_id: TaxId,
    address: String,
    birth_date: Option<NaiveDate>,
    accounts: Vec<BankAccount>,
}

impl Customer {
    /// Create customer without accounts
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<TaxId>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            address: address.into(),
            birth_date: None,
            accounts: Vec::new(),
        }
    }

    #[allow(missing_docs)]
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    #[allow(missing_docs)]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[allow(missing_docs)]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Accounts in order of opening
    pub fn accounts(&self) -> &[BankAccount] {
        &self.accounts
    }

    /// Append `account` to owned accounts. Uniqueness of numbers is checked by [`crate::bank::Bank`]
    pub fn add_account(&mut self, account: BankAccount) {
        self.accounts.push(account);
    }

    #[allow(missing_docs)]
    pub fn account(&self, number: &str) -> Option<&BankAccount> {
        self.accounts.iter().find(|acc| acc.number() == number)
    }

    #[allow(missing_docs)]
    pub fn account_mut(&mut self, number: &str) -> Option<&mut BankAccount> {
        self.accounts.iter_mut().find(|acc| acc.number() == number)
    }

    /// Register `transaction` on owned account `number`
    pub fn perform_transaction(
        &mut self,
        number: &str,
        transaction: Transaction,
    ) -> Result<&HistoryEntry, BankErr> {
        let account = self
            .account_mut(number)
            .ok_or_else(|| BankErr::AccountNotFound(number.to_owned()))?;
        Ok(transaction.register(account)?)
    }
}
