//! Client and account registries, replacing the ambient mutable lists of the
//! reproduced system with an explicit context object.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::account::CheckingAccount;
use crate::client::{Client, Person, TaxId};
use crate::errors::BankError;
use crate::transaction::Transaction;
use crate::AccountNumber;

/// In-memory registry of clients and checking accounts.
///
/// Created at process start, discarded at exit; nothing is persisted. All
/// operations are synchronous and atomic from the caller's perspective.
#[derive(Debug)]
pub struct Bank {
    clients: BTreeMap<TaxId, Client>,
    accounts: BTreeMap<AccountNumber, CheckingAccount>,
    next_number: AccountNumber,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            clients: BTreeMap::new(),
            accounts: BTreeMap::new(),
            next_number: 1,
        }
    }

    /// Register a new client.
    pub fn register_client(
        &mut self,
        person: Person,
        address: impl Into<String>,
    ) -> Result<(), BankError> {
        let tax_id = person.tax_id().clone();
        if self.clients.contains_key(&tax_id) {
            return Err(BankError::DuplicateClient);
        }

        info!(client = %tax_id, "client registered");
        self.clients.insert(tax_id, Client::new(person, address));
        Ok(())
    }

    /// Open a checking account with default limits for an existing client and
    /// return its number.
    pub fn open_account(&mut self, tax_id: &TaxId) -> Result<AccountNumber, BankError> {
        let client = self
            .clients
            .get_mut(tax_id)
            .ok_or(BankError::ClientNotFound)?;

        let number = self.next_number;
        self.next_number += 1;

        client.add_account(number);
        self.accounts
            .insert(number, CheckingAccount::new(number, tax_id.clone()));

        info!(client = %tax_id, account = number, "checking account opened");
        Ok(number)
    }

    /// Run `transaction` against an account on behalf of a client.
    ///
    /// The client is resolved first, then the account; the call is then
    /// delegated through [`Client::execute`].
    pub fn execute(
        &mut self,
        tax_id: &TaxId,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), BankError> {
        let client = self.clients.get(tax_id).ok_or(BankError::ClientNotFound)?;
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound)?;

        match client.execute(account, transaction) {
            Ok(()) => {
                info!(
                    account = number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    "transaction accepted"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    account = number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    %err,
                    "transaction rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Look up an account to render its statement.
    pub fn statement(&self, number: AccountNumber) -> Result<&CheckingAccount, BankError> {
        debug!(account = number, "statement requested");
        self.accounts.get(&number).ok_or(BankError::AccountNotFound)
    }

    /// Look up a client by tax id.
    pub fn client(&self, tax_id: &TaxId) -> Option<&Client> {
        debug!(client = %tax_id, "client lookup");
        self.clients.get(tax_id)
    }

    /// Numbers of the accounts owned by a client, in opening order. Fails
    /// when the client is unknown or holds no account yet.
    pub fn client_accounts(&self, tax_id: &TaxId) -> Result<&[AccountNumber], BankError> {
        debug!(client = %tax_id, "account list requested");
        let client = self.clients.get(tax_id).ok_or(BankError::ClientNotFound)?;
        if client.accounts().is_empty() {
            return Err(BankError::NoAccounts);
        }
        Ok(client.accounts())
    }

    /// All registered accounts, ordered by number.
    pub fn accounts(&self) -> impl Iterator<Item = &CheckingAccount> {
        self.accounts.values()
    }
}
