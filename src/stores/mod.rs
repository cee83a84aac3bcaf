//! In-memory account storage:
//! - A single holder's balance ([`Account`])
//! - The holder name directory ([`AccountRegistry`])
//!
//! Everything here is synchronous and unsynchronised; callers that share a
//! registry across threads must guard it themselves.

mod accounts;
mod registry;

pub use accounts::Account;
pub use registry::AccountRegistry;
