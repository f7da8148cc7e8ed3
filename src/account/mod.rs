//! Account traits and structs
use crate::amount::Amount;
use crate::client::TaxId;
use crate::errors::TransactionError;
use crate::{AccountNumber, BRANCH_CODE};

pub(crate) mod base;
pub(crate) mod checking;
pub(crate) mod history;

pub use base::Account;
pub use checking::{CheckingAccount, WITHDRAWAL_CAP};
pub use history::{HistoryEntry, TransactionHistory};

/// Balance-holding account that a [`crate::transaction::Transaction`] can be
/// applied to.
///
/// Implementations decide the acceptance rules for each operation; callers
/// only see the structured outcome. On rejection the balance, the withdrawal
/// count and the history are left exactly as they were.
pub trait BankAccount {
    /// Process-unique account number.
    fn number(&self) -> AccountNumber;
    /// Tax id of the owning client. Set once at creation.
    fn owner(&self) -> &TaxId;
    /// Current balance.
    fn balance(&self) -> Amount;
    /// Recorded transaction log, oldest entry first.
    fn history(&self) -> &TransactionHistory;
    /// Mutable access to the log, used by an accepted transaction to record
    /// itself.
    fn history_mut(&mut self) -> &mut TransactionHistory;

    /// Try to decrease the balance by `amount`.
    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError>;
    /// Try to increase the balance by `amount`.
    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError>;

    /// Code of the issuing branch.
    fn branch(&self) -> &'static str {
        BRANCH_CODE
    }
}
