use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OpKind {
    OpenDebit,
    OpenCredit,
    Deposit,
    Withdraw,
}

/// One script row. `amount` is the credit limit for `open-credit`, the
/// operation amount for `deposit`/`withdraw`, and unused for `open-debit`.
#[derive(Debug, Deserialize)]
pub struct ScriptRow {
    pub op: OpKind,
    pub account: String,
    pub amount: Option<Decimal>,
}

/// Parses an operation script in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvScriptParser<R> {
    iter: DeserializeRecordsIntoIter<R, ScriptRow>,
}

impl<R> CsvScriptParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvScriptParser<R>
where
    R: Read,
{
    type Item = (u64, ScriptRow);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
