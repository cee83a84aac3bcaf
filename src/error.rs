//! Reasons the engine rejects a replayed operation.
//!
//! These are business outcomes, not technical failures: a rejected operation
//! is skipped and the replay carries on. I/O and CSV errors travel separately
//! as boxed errors out of the runners.

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    AccountNotFound,
    BalanceOverflow,
    InsufficientFunds,
    MissingAmount,
}
