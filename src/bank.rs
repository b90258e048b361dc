//! Registry of customers and their accounts
use crate::{
    account::{Account, BankAccount, HistoryEntry, Transaction},
    customer::Customer,
    errors::BankErr,
    AccountNumber, TaxId,
};
use rust_decimal::Decimal;
use std::collections::{btree_map::Entry, BTreeMap};

/// Whole in-memory state of the bank
#[derive(Debug, Clone, Default)]
pub struct Bank {
    customers: BTreeMap<TaxId, Customer>,
    // account number -> tax id of the owner
    accounts: BTreeMap<AccountNumber, TaxId>,
}

impl Bank {
    /// Create bank without customers
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `customer` to registry. Tax id has to be unique.
    pub fn register_customer(&mut self, customer: Customer) -> Result<&Customer, BankErr> {
        match self.customers.entry(customer.tax_id().to_owned()) {
            Entry::Occupied(occupied) => {
                Err(BankErr::CustomerAlreadyExists(occupied.key().clone()))
            }
            Entry::Vacant(vacant) => Ok(vacant.insert(customer)),
        }
    }

    #[allow(missing_docs)]
    pub fn customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.get(tax_id)
    }

    /// Customers ordered by tax id
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    /// Open checking account with default limits for customer `tax_id`.
    ///
    /// When `number` is `None` it is generated from last 4 characters of tax id followed by
    /// sequence number of the account in the bank.
    pub fn open_checking_account(
        &mut self,
        tax_id: &str,
        number: Option<AccountNumber>,
    ) -> Result<&BankAccount, BankErr> {
        let number = match number {
            Some(number) => number,
            None => generate_account_number(tax_id, self.accounts.len() + 1),
        };
        self.open_account(tax_id, BankAccount::new_checking(number, tax_id))
    }

    /// Link `account` with customer `tax_id`. Account number has to be unique.
    pub fn open_account(
        &mut self,
        tax_id: &str,
        account: BankAccount,
    ) -> Result<&BankAccount, BankErr> {
        let customer = self
            .customers
            .get_mut(tax_id)
            .ok_or_else(|| BankErr::CustomerNotFound(tax_id.to_owned()))?;

        let number = account.number().to_owned();
        match self.accounts.entry(number.clone()) {
            Entry::Occupied(_) => return Err(BankErr::AccountAlreadyExists(number)),
            Entry::Vacant(vacant) => {
                vacant.insert(tax_id.to_owned());
            }
        }

        customer.add_account(account);
        customer
            .account(&number)
            .ok_or(BankErr::AccountNotFound(number))
    }

    #[allow(missing_docs)]
    pub fn account(&self, number: &str) -> Result<&BankAccount, BankErr> {
        self.accounts
            .get(number)
            .and_then(|tax_id| self.customers.get(tax_id))
            .and_then(|customer| customer.account(number))
            .ok_or_else(|| BankErr::AccountNotFound(number.to_owned()))
    }

    /// All accounts ordered by number
    pub fn accounts(&self) -> impl Iterator<Item = &BankAccount> + '_ {
        self.accounts.iter().filter_map(|(number, tax_id)| {
            self.customers
                .get(tax_id)
                .and_then(|customer| customer.account(number))
        })
    }

    #[allow(missing_docs)]
    pub fn deposit(&mut self, number: &str, amount: Decimal) -> Result<&HistoryEntry, BankErr> {
        self.perform_transaction(number, Transaction::Deposit(amount))
    }

    #[allow(missing_docs)]
    pub fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<&HistoryEntry, BankErr> {
        self.perform_transaction(number, Transaction::Withdrawal(amount))
    }

    /// Register `transaction` on account `number` through its owner
    pub fn perform_transaction(
        &mut self,
        number: &str,
        transaction: Transaction,
    ) -> Result<&HistoryEntry, BankErr> {
        let customer = self
            .accounts
            .get(number)
            .and_then(|tax_id| self.customers.get_mut(tax_id))
            .ok_or_else(|| BankErr::AccountNotFound(number.to_owned()))?;
        customer.perform_transaction(number, transaction)
    }
}

fn generate_account_number(tax_id: &str, sequence: usize) -> AccountNumber {
    let chars = tax_id.chars().count();
    let suffix: String = tax_id.chars().skip(chars.saturating_sub(4)).collect();
    format!("{suffix}{sequence}")
}
