use rust_decimal::Decimal;

#[derive(Debug)]
pub struct Account {
    holder_name: String,
    balance: Decimal,
}

impl Account {
    /// Opens an account with a zero balance. Any name is accepted, including an empty one.
    pub fn new(holder_name: impl Into<String>) -> Self {
        Self {
            holder_name: holder_name.into(),
            balance: Decimal::ZERO,
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance as given. Zero and negative amounts are applied too.
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Subtracts `amount` if it does not exceed the balance.
    /// Returns `false` and leaves the balance untouched otherwise.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}
