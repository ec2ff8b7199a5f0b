use std::io::{Read, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountError};
use crate::ident::RandomDigits;
use csv_parser::{CsvScriptParser, OpKind, ScriptRow};
use csv_printer::{HistoryRow, print_history};

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("No account is open for `{0}`")]
    UnknownAccount(String),
    #[error("An account is already open for `{0}`")]
    DuplicateAccount(String),
    #[error("Amount is required for {0:?}")]
    MissingAmount(OpKind),
    #[error("Credit limit must not be negative")]
    NegativeCreditLimit,
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Runs an operation script against an in-memory set of accounts and prints
/// every account's transaction history to `output`. Rejected rows go through
/// `error_printer` and never abort the run.
pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ScriptError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvScriptParser::new(self.input);
        let mut ids = RandomDigits;
        // accounts kept in open order, so histories print deterministically
        let mut accounts: Vec<Account> = Vec::new();

        for (line, row) in parser {
            if let Err(err) = apply_row(&mut accounts, &mut ids, row) {
                (self.error_printer)(line, err);
            }
        }

        print_history(
            self.output,
            accounts.iter().flat_map(|acc| {
                acc.transaction_history().into_iter().map(move |tx| HistoryRow {
                    account: acc.owner().to_string(),
                    timestamp: tx.timestamp,
                    kind: tx.kind,
                    amount: tx.amount,
                    balance: tx.balance_after,
                })
            }),
        )
    }
}

fn apply_row(
    accounts: &mut Vec<Account>,
    ids: &mut RandomDigits,
    row: ScriptRow,
) -> Result<(), ScriptError> {
    match row.op {
        OpKind::OpenDebit => {
            ensure_new(accounts, &row.account)?;
            let acc = Account::debit(row.account, ids);
            tracing::info!(
                "Opened debit account {} for {}",
                acc.account_number(),
                acc.owner()
            );
            accounts.push(acc);
        }
        OpKind::OpenCredit => {
            ensure_new(accounts, &row.account)?;
            let limit = row.amount.ok_or(ScriptError::MissingAmount(row.op))?;
            if limit < Decimal::ZERO {
                return Err(ScriptError::NegativeCreditLimit);
            }
            let acc = Account::credit(row.account, limit, ids);
            tracing::info!(
                "Opened credit account {} for {} with limit {limit}",
                acc.account_number(),
                acc.owner()
            );
            accounts.push(acc);
        }
        OpKind::Deposit => {
            let amount = row.amount.ok_or(ScriptError::MissingAmount(row.op))?;
            let acc = find_account(accounts, &row.account)?;
            let receipt = acc.deposit(amount)?;
            tracing::info!(
                "Deposited {} to account {}: {} repaid debt, balance {}",
                receipt.amount,
                acc.account_number(),
                receipt.repaid_debt,
                receipt.balance_after
            );
        }
        OpKind::Withdraw => {
            let amount = row.amount.ok_or(ScriptError::MissingAmount(row.op))?;
            let acc = find_account(accounts, &row.account)?;
            let receipt = acc.withdraw(amount)?;
            tracing::info!(
                "Withdrew {} from account {}: {} drawn on credit, balance {}",
                receipt.amount,
                acc.account_number(),
                receipt.drawn_on_credit,
                receipt.balance_after
            );
        }
    }
    Ok(())
}

fn ensure_new(accounts: &[Account], owner: &str) -> Result<(), ScriptError> {
    if accounts.iter().any(|acc| acc.owner() == owner) {
        return Err(ScriptError::DuplicateAccount(owner.to_string()));
    }
    Ok(())
}

fn find_account<'a>(
    accounts: &'a mut [Account],
    owner: &str,
) -> Result<&'a mut Account, ScriptError> {
    accounts
        .iter_mut()
        .find(|acc| acc.owner() == owner)
        .ok_or_else(|| ScriptError::UnknownAccount(owner.to_string()))
}
