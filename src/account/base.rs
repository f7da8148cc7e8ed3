use super::history::TransactionHistory;
use super::BankAccount;
use crate::amount::Amount;
use crate::client::TaxId;
use crate::errors::TransactionError;
use crate::AccountNumber;

/// Plain account: non-negative balance, no ceiling and no withdrawal cap.
///
/// The withdrawal checks run funds-first: a request above the balance reports
/// [`TransactionError::InsufficientFunds`] before the amount itself is
/// validated. [`super::CheckingAccount`] layers its own guards on top.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    owner: TaxId,
    balance: Amount,
    history: TransactionHistory,
}

impl Account {
    /// Create an empty account owned by `owner`.
    pub fn new(number: AccountNumber, owner: TaxId) -> Self {
        Self {
            number,
            owner,
            balance: Amount::ZERO,
            history: TransactionHistory::default(),
        }
    }
}

impl BankAccount for Account {
    fn number(&self) -> AccountNumber {
        self.number
    }

    fn owner(&self) -> &TaxId {
        &self.owner
    }

    fn balance(&self) -> Amount {
        self.balance
    }

    fn history(&self) -> &TransactionHistory {
        &self.history
    }

    fn history_mut(&mut self) -> &mut TransactionHistory {
        &mut self.history
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds);
        }
        if amount.is_negative() {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance -= amount;
        Ok(())
    }

    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount.is_negative() {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance += amount;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn account() -> Account {
        Account::new(1, TaxId::new("11122233344"))
    }

    #[test]
    fn deposit_increases_balance() {
        let mut a = account();
        a.deposit(Amount::new(100, 0)).unwrap();
        a.deposit(Amount::new(505, 1)).unwrap();
        assert_eq!(a.balance(), Amount::new(1505, 1));
    }

    #[test]
    fn negative_deposit_is_rejected_and_balance_unchanged() {
        let mut a = account();
        let err = a.deposit(Amount::new(-5, 0)).unwrap_err();
        assert_eq!(err, TransactionError::InvalidAmount);
        assert_eq!(a.balance(), Amount::ZERO);
    }

    #[test]
    fn zero_deposit_is_accepted() {
        let mut a = account();
        a.deposit(Amount::ZERO).unwrap();
        assert_eq!(a.balance(), Amount::ZERO);
    }

    #[test]
    fn withdraw_above_balance_is_rejected() {
        let mut a = account();
        a.deposit(Amount::new(50, 0)).unwrap();
        let err = a.withdraw(Amount::new(100, 0)).unwrap_err();
        assert_eq!(err, TransactionError::InsufficientFunds);
        assert_eq!(a.balance(), Amount::new(50, 0));
    }

    #[test]
    fn withdraw_exact_balance_is_accepted() {
        let mut a = account();
        a.deposit(Amount::new(50, 0)).unwrap();
        a.withdraw(Amount::new(50, 0)).unwrap();
        assert_eq!(a.balance(), Amount::ZERO);
    }

    // A negative amount is never above a non-negative balance, so the funds
    // check passes it through and the amount check reports it.
    #[test]
    fn negative_withdraw_reports_invalid_amount() {
        let mut a = account();
        let err = a.withdraw(Amount::new(-5, 0)).unwrap_err();
        assert_eq!(err, TransactionError::InvalidAmount);
        assert_eq!(a.balance(), Amount::ZERO);
    }

    #[test]
    fn accessors() {
        let a = account();
        assert_eq!(a.number(), 1);
        assert_eq!(a.owner(), &TaxId::new("11122233344"));
        assert_eq!(a.branch(), crate::BRANCH_CODE);
        assert!(a.history().entries().is_empty());
    }
}
