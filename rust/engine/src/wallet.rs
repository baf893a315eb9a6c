use serde::{Deserialize, Serialize};

use crate::Chips;

/// Result of [`Wallet::debit`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DebitOutcome {
    /// The amount was subtracted and chips remain.
    Debited,
    /// The debit would have left nothing: the balance is now 0 and the wallet is empty.
    Depleted,
}

impl DebitOutcome {
    pub fn is_success(self) -> bool {
        self == DebitOutcome::Debited
    }
}

/// A player's chip balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    balance: Chips,
    empty: bool,
}

impl Wallet {
    pub fn new(balance: Chips) -> Self {
        Self {
            balance,
            empty: balance == 0,
        }
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn credit(&mut self, amount: Chips) {
        self.balance = self.balance.saturating_add(amount);
        if self.balance > 0 {
            self.empty = false;
        }
    }

    /// Subtracts `amount` only if chips would remain afterwards. Otherwise the balance is
    /// clamped to 0 and the wallet is marked empty, including when `amount` equals the balance.
    pub fn debit(&mut self, amount: Chips) -> DebitOutcome {
        if self.balance > amount {
            self.balance -= amount;
            return DebitOutcome::Debited;
        }
        self.balance = 0;
        self.empty = true;
        DebitOutcome::Depleted
    }
}
