//! Account registry.

use std::collections::{HashMap, HashSet};

use lading_shared::types::AccountId;

use super::types::Account;

/// In-memory chart of accounts.
///
/// Pure lookup table: accounts are immutable once registered, so there is no
/// mutation API and an account's type can never change under existing
/// journal lines.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    /// Accounts sorted by code.
    accounts: Vec<Account>,
    /// Index from account id into `accounts`.
    index: HashMap<AccountId, usize>,
}

impl AccountRegistry {
    /// Builds a registry from a chart of accounts.
    ///
    /// Accounts are ordered by code for report iteration.
    #[must_use]
    pub fn new(mut accounts: Vec<Account>) -> Self {
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        let index = accounts
            .iter()
            .enumerate()
            .map(|(i, account)| (account.id, i))
            .collect();
        Self { accounts, index }
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.index.get(&id).map(|&i| &self.accounts[i])
    }

    /// Returns true if the id is registered.
    #[must_use]
    pub fn contains(&self, id: AccountId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates accounts in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Returns the set of registered account ids.
    #[must_use]
    pub fn known_ids(&self) -> HashSet<AccountId> {
        self.index.keys().copied().collect()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::types::AccountType;

    fn make_account(code: &str, account_type: AccountType) -> Account {
        Account {
            id: AccountId::new(),
            code: code.to_string(),
            name: format!("Account {code}"),
            account_type,
        }
    }

    #[test]
    fn test_iteration_is_code_ordered() {
        let registry = AccountRegistry::new(vec![
            make_account("4100", AccountType::Revenue),
            make_account("1100", AccountType::Asset),
            make_account("2100", AccountType::Liability),
        ]);

        let codes: Vec<&str> = registry.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["1100", "2100", "4100"]);
    }

    #[test]
    fn test_get_by_id() {
        let account = make_account("1100", AccountType::Asset);
        let id = account.id;
        let registry = AccountRegistry::new(vec![account]);

        assert_eq!(registry.get(id).unwrap().code, "1100");
        assert!(registry.get(AccountId::new()).is_none());
    }

    #[test]
    fn test_known_ids() {
        let a = make_account("1100", AccountType::Asset);
        let b = make_account("2100", AccountType::Liability);
        let (id_a, id_b) = (a.id, b.id);
        let registry = AccountRegistry::new(vec![a, b]);

        let ids = registry.known_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&id_a) && ids.contains(&id_b));
    }

    #[test]
    fn test_empty_registry() {
        let registry = AccountRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.known_ids().is_empty());
    }
}
