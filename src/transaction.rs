//! Deposit and withdrawal operations over an account.

use std::fmt;

use serde::Serialize;

use crate::account::BankAccount;
use crate::amount::Amount;
use crate::errors::TransactionError;

/// Tag identifying the kind of a transaction, used by history entries.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A single operation carrying an amount. Transient: constructed, applied to
/// one account and then discarded (rejected) or turned into a history entry
/// (accepted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Increase the balance by the carried amount.
    Deposit(Amount),
    /// Decrease the balance by the carried amount.
    Withdrawal(Amount),
}

impl Transaction {
    /// Amount the transaction carries.
    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Kind tag for this transaction.
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Apply the transaction to `account` and, only when accepted, record it
    /// in the account's history. A rejected transaction writes nothing.
    pub fn register(&self, account: &mut dyn BankAccount) -> Result<(), TransactionError> {
        match self {
            Transaction::Deposit(amount) => account.deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(*amount)?,
        }

        account.history_mut().record(self.kind(), self.amount());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::account::{Account, CheckingAccount};
    use crate::client::TaxId;

    #[test]
    fn accepted_transaction_is_recorded() {
        let mut a = Account::new(1, TaxId::new("1"));
        Transaction::Deposit(Amount::new(100, 0))
            .register(&mut a)
            .unwrap();
        Transaction::Withdrawal(Amount::new(40, 0))
            .register(&mut a)
            .unwrap();

        assert_eq!(a.balance(), Amount::new(60, 0));
        assert_eq!(a.history().len(), 2);
        assert_eq!(a.history().entries()[0].kind(), TransactionKind::Deposit);
        assert_eq!(a.history().entries()[1].kind(), TransactionKind::Withdrawal);
        assert_eq!(a.history().entries()[1].amount(), Amount::new(40, 0));
    }

    #[test]
    fn rejected_transaction_leaves_no_entry() {
        let mut a = Account::new(1, TaxId::new("1"));
        let err = Transaction::Withdrawal(Amount::new(10, 0))
            .register(&mut a)
            .unwrap_err();

        assert_eq!(err, TransactionError::InsufficientFunds);
        assert!(a.history().is_empty());
        assert_eq!(a.balance(), Amount::ZERO);
    }

    #[test]
    fn history_length_tracks_accepted_operations_only() {
        let mut a = CheckingAccount::new(1, TaxId::new("1"));
        let ops = [
            Transaction::Deposit(Amount::new(1_000, 0)),
            Transaction::Withdrawal(Amount::new(1_500, 0)), // insufficient funds
            Transaction::Withdrawal(Amount::new(500, 0)),
            Transaction::Deposit(Amount::new(-5, 0)), // invalid amount
            Transaction::Withdrawal(Amount::new(600, 0)), // above ceiling
        ];

        let accepted = ops.iter().filter(|t| t.register(&mut a).is_ok()).count();
        assert_eq!(accepted, 2);
        assert_eq!(a.history().len(), accepted);
    }
}
