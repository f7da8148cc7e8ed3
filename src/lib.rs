//! In-memory retail banking ledger: clients, checking accounts and the
//! deposit/withdrawal rules guarding their balances and transaction history.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod bank;
pub mod client;
pub mod console;
pub mod errors;
pub mod transaction;

/// Account identifier. Assigned sequentially by [`bank::Bank`], starting at 1.
pub type AccountNumber = u32;

/// Branch code shared by every account issued by this system.
pub const BRANCH_CODE: &str = "0001";
