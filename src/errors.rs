//! Possible errors

use thiserror::Error;

/// Reasons an account rejects a deposit or withdrawal.
///
/// Every variant is a final, recoverable answer to one request; a rejected
/// operation leaves the account untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// Amount is negative, or above the checking-account withdrawal ceiling.
    #[error("invalid amount")]
    InvalidAmount,
    /// Withdrawal amount is above the current balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The checking-account withdrawal count already reached its cap.
    #[error("maximum number of withdrawals exceeded")]
    WithdrawalLimitExceeded,
}

/// Group all errors returned by [`crate::bank::Bank`] operations.
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("client not found")]
    ClientNotFound,
    #[error("tax id already registered")]
    DuplicateClient,
    #[error("account not found")]
    AccountNotFound,
    #[error("client has no accounts")]
    NoAccounts,
    /// The account itself refused the operation.
    #[error(transparent)]
    Rejected(#[from] TransactionError),
}
