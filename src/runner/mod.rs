//! The runner sets up a file stream for reading operations from CSV,
//! replays them through the engine, and writes final balances to a writer.
//!
//! Both a synchronous and an asynchronous runner are provided.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;
