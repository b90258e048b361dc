use crate::{amount::Amount, errors::BalanceErr};
use rust_decimal::Decimal;

/// Represents current account balance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    pub fn try_deposit(&mut self, amount: &Amount) -> Result<(), BalanceErr> {
        self.available = self
            .available
            .checked_add(**amount)
            .ok_or(BalanceErr::Overflow)?;
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: &Amount) -> Result<(), BalanceErr> {
        if self.available < **amount {
            return Err(BalanceErr::InsufficientFunds);
        }

        self.available -= **amount;
        debug_assert!(self.available >= Decimal::ZERO);
        Ok(())
    }

    pub fn available(&self) -> Decimal {
        self.available
    }
}
