use super::base::Account;
use super::history::TransactionHistory;
use super::BankAccount;
use crate::amount::Amount;
use crate::client::TaxId;
use crate::errors::TransactionError;
use crate::AccountNumber;

/// Number of withdrawals a checking account accepts over its lifetime.
pub const WITHDRAWAL_CAP: u32 = 3;

/// Checking account: a plain [`Account`] plus a per-operation withdrawal
/// ceiling and a lifetime cap on the number of withdrawals.
///
/// Withdrawal guards run in a fixed order: cap reached, then insufficient
/// funds, then invalid amount (negative or above the ceiling). The cap check
/// wins even when the amount itself would be invalid.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    base: Account,
    ceiling: Amount,
    max_withdrawals: u32,
    withdrawals: u32,
}

impl CheckingAccount {
    /// Create an empty checking account with the default ceiling of 500.
    pub fn new(number: AccountNumber, owner: TaxId) -> Self {
        Self::with_limits(number, owner, Amount::new(500, 0), WITHDRAWAL_CAP)
    }

    /// Create an empty checking account with an explicit ceiling.
    ///
    /// The `max_withdrawals` argument is accepted but ignored: the cap is
    /// always [`WITHDRAWAL_CAP`]. Callers relying on a different cap would
    /// silently get 3, so the quirk is spelled out here instead of honoring
    /// the argument.
    pub fn with_limits(
        number: AccountNumber,
        owner: TaxId,
        ceiling: Amount,
        _max_withdrawals: u32,
    ) -> Self {
        Self {
            base: Account::new(number, owner),
            ceiling,
            max_withdrawals: WITHDRAWAL_CAP,
            withdrawals: 0,
        }
    }

    /// Maximum amount accepted for a single withdrawal.
    pub fn ceiling(&self) -> Amount {
        self.ceiling
    }

    /// Withdrawals accepted so far. Monotonic, never reset.
    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }
}

impl BankAccount for CheckingAccount {
    fn number(&self) -> AccountNumber {
        self.base.number()
    }

    fn owner(&self) -> &TaxId {
        self.base.owner()
    }

    fn balance(&self) -> Amount {
        self.base.balance()
    }

    fn history(&self) -> &TransactionHistory {
        self.base.history()
    }

    fn history_mut(&mut self) -> &mut TransactionHistory {
        self.base.history_mut()
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if self.withdrawals >= self.max_withdrawals {
            return Err(TransactionError::WithdrawalLimitExceeded);
        }
        if amount > self.base.balance() {
            return Err(TransactionError::InsufficientFunds);
        }
        if amount.is_negative() || amount > self.ceiling {
            return Err(TransactionError::InvalidAmount);
        }

        // the guards above subsume the base checks, so this cannot fail
        self.base.withdraw(amount)?;
        self.withdrawals += 1;
        Ok(())
    }

    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.base.deposit(amount)
    }
}
