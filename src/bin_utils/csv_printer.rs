use std::io::Write;

use chrono::{DateTime, Utc};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::EntryKind;

/// One printed ledger entry, tagged with the account it belongs to.
#[derive(Debug, Serialize)]
pub struct HistoryRow {
    pub account: String,
    pub timestamp: DateTime<Utc>,
    pub kind: EntryKind,
    pub amount: Decimal,
    pub balance: Decimal,
}

pub fn print_history<W>(
    output: &mut W,
    rows: impl Iterator<Item = HistoryRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
