mod csv_utils;
mod dto;
mod engine;
mod error;
mod runner;
mod stores;

pub use dto::{BalanceRow, Operation, OperationType};
pub use engine::Engine;
pub use error::Error;
pub use runner::{run, run_async};
pub use stores::{Account, AccountRegistry};
