use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::dto::{Operation, OperationType};
use crate::stores::AccountRegistry;
use crate::Error;

/// Replays operations against an [`AccountRegistry`].
#[derive(Default)]
pub struct Engine {
    registry: AccountRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            registry: AccountRegistry::new(),
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Applies one operation. Rejections are logged and returned; the registry is left untouched.
    pub fn process_operation(&mut self, operation: Operation) -> Result<(), Error> {
        let result = self.apply(&operation);
        if let Err(err) = &result {
            warn!(holder = %operation.holder, ?err, "operation rejected");
        }
        result
    }

    fn apply(&mut self, operation: &Operation) -> Result<(), Error> {
        match operation.op_type {
            OperationType::Open => {
                self.process_open(&operation.holder);
                Ok(())
            }
            OperationType::Deposit => {
                let amount = operation.amount.ok_or(Error::MissingAmount)?;
                self.process_deposit(&operation.holder, amount)
            }
            OperationType::Withdrawal => {
                let amount = operation.amount.ok_or(Error::MissingAmount)?;
                self.process_withdrawal(&operation.holder, amount)
            }
        }
    }

    fn process_open(&mut self, holder: &str) {
        if self.registry.find_account(holder).is_some() {
            debug!(holder, "replacing existing account");
        }
        self.registry.create_account(holder);
    }

    fn process_deposit(&mut self, holder: &str, amount: Decimal) -> Result<(), Error> {
        let account = self
            .registry
            .find_account_mut(holder)
            .ok_or(Error::AccountNotFound)?;
        // Decimal arithmetic panics on overflow
        if account.balance().checked_add(amount).is_none() {
            return Err(Error::BalanceOverflow);
        }
        account.deposit(amount);
        debug!(holder, %amount, balance = %account.balance(), "deposit applied");
        Ok(())
    }

    fn process_withdrawal(&mut self, holder: &str, amount: Decimal) -> Result<(), Error> {
        let account = self
            .registry
            .find_account_mut(holder)
            .ok_or(Error::AccountNotFound)?;
        if account.balance().checked_sub(amount).is_none() {
            return Err(Error::BalanceOverflow);
        }
        if !account.withdraw(amount) {
            return Err(Error::InsufficientFunds);
        }
        debug!(holder, %amount, balance = %account.balance(), "withdrawal applied");
        Ok(())
    }
}
