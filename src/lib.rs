/// All logic related to account balance and debt management.
/// Operations validate against current state and hand back a receipt
/// describing what happened; displaying anything is the caller's job.
pub mod account;

/// Append-only per-account transaction log, plus the record types it stores.
pub mod ledger;

/// Opaque account/card number generation behind a pluggable source, so that
/// tests can inject deterministic identifiers.
pub mod ident;

/// Glue for driving accounts from an operation script. This could be its own
/// crate, but the integration tests want to exercise it end to end, so it
/// lives here.
pub mod bin_utils;
