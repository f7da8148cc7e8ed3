//! Clients and their identity data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::BankAccount;
use crate::errors::TransactionError;
use crate::transaction::Transaction;
use crate::AccountNumber;

/// Tax identifier of a person. Unique identity key, immutable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxId(String);

impl TaxId {
    /// Wrap a raw tax id.
    pub fn new(raw: impl Into<String>) -> Self {
        TaxId(raw.into())
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity attributes of a human account holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    tax_id: TaxId,
    name: String,
    birth_date: String,
}

impl Person {
    /// Create a person from its identity attributes.
    pub fn new(tax_id: TaxId, name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            tax_id,
            name: name.into(),
            birth_date: birth_date.into(),
        }
    }

    /// Identity key.
    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Birth date as supplied at registration.
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }
}

/// A person holding accounts; the entry point for performing a transaction.
#[derive(Debug, Clone)]
pub struct Client {
    person: Person,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    /// Create a client with an empty account list.
    pub fn new(person: Person, address: impl Into<String>) -> Self {
        Self {
            person,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// Identity attributes.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Free-text address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Numbers of the accounts opened for this client, in opening order.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Append an account number to the client's list. No validation beyond
    /// what the caller guarantees.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Run `transaction` against `account`, pure delegation.
    ///
    /// Deliberately permissive: the account is not checked against this
    /// client's own list, so any account handle the caller resolves can be
    /// operated.
    pub fn execute(
        &self,
        account: &mut dyn BankAccount,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        transaction.register(account)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::account::Account;
    use crate::amount::Amount;

    fn client(tax_id: &str) -> Client {
        Client::new(
            Person::new(TaxId::new(tax_id), "Ana Souza", "01-02-1990"),
            "Main St 1",
        )
    }

    #[test]
    fn execute_delegates_to_the_transaction() {
        let c = client("111");
        let mut a = Account::new(1, TaxId::new("111"));

        c.execute(&mut a, &Transaction::Deposit(Amount::new(10, 0)))
            .unwrap();
        assert_eq!(a.balance(), Amount::new(10, 0));
        assert_eq!(a.history().len(), 1);
    }

    // Ownership is not checked: any client can operate any account handle it
    // is handed.
    #[test]
    fn execute_accepts_accounts_of_other_clients() {
        let c = client("111");
        let mut foreign = Account::new(7, TaxId::new("999"));

        c.execute(&mut foreign, &Transaction::Deposit(Amount::new(10, 0)))
            .unwrap();
        assert_eq!(foreign.balance(), Amount::new(10, 0));
    }

    #[test]
    fn add_account_keeps_opening_order() {
        let mut c = client("111");
        c.add_account(3);
        c.add_account(1);
        assert_eq!(c.accounts(), &[3, 1]);
    }
}
