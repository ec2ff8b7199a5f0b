use rust_decimal::Decimal;
use thiserror::Error;

use crate::ident::{ACCOUNT_NUMBER_LEN, CARD_NUMBER_LEN, IdentifierSource};
use crate::ledger::{EntryKind, Ledger, Transaction};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },
    #[error("Credit limit exceeded: available {available}, requested {requested}")]
    CreditLimitExceeded {
        available: Decimal,
        requested: Decimal,
    },
}

/// Variant-specific account state. Debit accounts spend settled funds only;
/// credit accounts may additionally draw up to `credit_limit` into `debt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    Debit,
    Credit {
        credit_limit: Decimal,
        debt: Decimal,
    },
}

/// What a successful withdrawal did to the account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Withdrawal {
    pub amount: Decimal,
    pub from_balance: Decimal,
    pub drawn_on_credit: Decimal,
    pub balance_after: Decimal,
}

/// How a successful deposit was split between debt repayment and balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit {
    pub amount: Decimal,
    pub repaid_debt: Decimal,
    pub credited: Decimal,
    pub balance_after: Decimal,
}

/// A single bank account together with its transaction log. Operations take
/// `&mut self`, so a balance/debt update and its ledger append are always one
/// exclusive unit.
#[derive(Debug)]
pub struct Account {
    owner: String,
    account_number: String,
    card_number: String,
    balance: Decimal,
    kind: AccountKind,
    ledger: Ledger,
}

impl Account {
    pub fn debit(owner: impl Into<String>, ids: &mut dyn IdentifierSource) -> Self {
        Self::open(owner.into(), AccountKind::Debit, ids)
    }

    pub fn credit(
        owner: impl Into<String>,
        credit_limit: Decimal,
        ids: &mut dyn IdentifierSource,
    ) -> Self {
        Self::open(
            owner.into(),
            AccountKind::Credit {
                credit_limit,
                debt: Decimal::ZERO,
            },
            ids,
        )
    }

    fn open(owner: String, kind: AccountKind, ids: &mut dyn IdentifierSource) -> Self {
        Self {
            owner,
            account_number: ids.digit_string(ACCOUNT_NUMBER_LEN),
            card_number: ids.digit_string(CARD_NUMBER_LEN),
            balance: Decimal::ZERO,
            kind,
            ledger: Ledger::default(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn debt(&self) -> Decimal {
        match self.kind {
            AccountKind::Debit => Decimal::ZERO,
            AccountKind::Credit { debt, .. } => debt,
        }
    }

    pub fn credit_limit(&self) -> Decimal {
        match self.kind {
            AccountKind::Debit => Decimal::ZERO,
            AccountKind::Credit { credit_limit, .. } => credit_limit,
        }
    }

    /// Spending power: the settled balance, plus whatever is left on the
    /// credit line for credit accounts.
    pub fn available(&self) -> Decimal {
        match self.kind {
            AccountKind::Debit => self.balance,
            AccountKind::Credit { credit_limit, debt } => self.balance + credit_limit - debt,
        }
    }

    /// Withdraw `amount`, depleting the balance before any debt is incurred.
    /// Records exactly one ledger entry for the full amount. A rejected
    /// withdrawal changes nothing.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Withdrawal, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::NonPositiveAmount);
        }
        let available = self.available();
        if amount > available {
            return Err(match self.kind {
                AccountKind::Debit => AccountError::InsufficientFunds {
                    available,
                    requested: amount,
                },
                AccountKind::Credit { .. } => AccountError::CreditLimitExceeded {
                    available,
                    requested: amount,
                },
            });
        }

        let from_balance = amount.min(self.balance);
        let shortfall = amount - from_balance;
        self.balance -= from_balance;
        if shortfall > Decimal::ZERO {
            // only reachable for credit accounts: debit available == balance
            if let AccountKind::Credit { debt, .. } = &mut self.kind {
                *debt += shortfall;
            }
        }
        self.ledger.record(EntryKind::Withdraw, amount, self.balance);

        Ok(Withdrawal {
            amount,
            from_balance,
            drawn_on_credit: shortfall,
            balance_after: self.balance,
        })
    }

    /// Deposit `amount`. On credit accounts outstanding debt is repaid first;
    /// only the remainder reaches the balance. Each non-zero sub-amount gets
    /// its own ledger entry, the debt repayment one first.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Deposit, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::NonPositiveAmount);
        }

        let mut remaining = amount;
        let mut repaid = Decimal::ZERO;
        if let AccountKind::Credit { debt, .. } = &mut self.kind {
            if *debt > Decimal::ZERO {
                repaid = remaining.min(*debt);
                *debt -= repaid;
                remaining -= repaid;
            }
        }

        if repaid > Decimal::ZERO {
            // repayment leaves the balance untouched
            self.ledger.record(EntryKind::Deposit, repaid, self.balance);
        }
        if remaining > Decimal::ZERO {
            self.balance += remaining;
            self.ledger.record(EntryKind::Deposit, remaining, self.balance);
        }

        Ok(Deposit {
            amount,
            repaid_debt: repaid,
            credited: remaining,
            balance_after: self.balance,
        })
    }

    /// Snapshot of the transaction log, oldest entry first.
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.ledger.snapshot()
    }
}
