use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fintrack_domain::{FinanceState, RecurringExpense, Transaction, UserSettings};
use serde::{de::DeserializeOwned, Serialize};

use crate::CoreError;

pub const TRANSACTIONS_KEY: &str = "finance_tracker_transactions";
pub const RECURRING_EXPENSES_KEY: &str = "finance_tracker_recurring_expenses";
pub const USER_SETTINGS_KEY: &str = "finance_tracker_user_settings";

/// String key-value persistence keyed by logical record names.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Process-local store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}

fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, CoreError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), CoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub fn load_transactions(store: &dyn KeyValueStore) -> Result<Vec<Transaction>, CoreError> {
    Ok(read_json(store, TRANSACTIONS_KEY)?.unwrap_or_default())
}

pub fn load_recurring_expenses(
    store: &dyn KeyValueStore,
) -> Result<Vec<RecurringExpense>, CoreError> {
    Ok(read_json(store, RECURRING_EXPENSES_KEY)?.unwrap_or_default())
}

pub fn load_settings(store: &dyn KeyValueStore) -> Result<UserSettings, CoreError> {
    Ok(read_json(store, USER_SETTINGS_KEY)?.unwrap_or_default())
}

/// Reads all three keys; absent keys yield empty lists and default settings.
pub fn load_state(store: &dyn KeyValueStore) -> Result<FinanceState, CoreError> {
    let state = FinanceState::new(
        load_transactions(store)?,
        load_recurring_expenses(store)?,
        load_settings(store)?,
    );
    tracing::debug!(
        transactions = state.transactions.len(),
        recurring = state.recurring_expenses.len(),
        "loaded finance state"
    );
    Ok(state)
}

pub fn save_transactions(
    store: &dyn KeyValueStore,
    transactions: &[Transaction],
) -> Result<(), CoreError> {
    write_json(store, TRANSACTIONS_KEY, transactions)
}

pub fn save_recurring_expenses(
    store: &dyn KeyValueStore,
    expenses: &[RecurringExpense],
) -> Result<(), CoreError> {
    write_json(store, RECURRING_EXPENSES_KEY, expenses)
}

pub fn save_settings(store: &dyn KeyValueStore, settings: &UserSettings) -> Result<(), CoreError> {
    write_json(store, USER_SETTINGS_KEY, settings)
}

pub fn save_state(store: &dyn KeyValueStore, state: &FinanceState) -> Result<(), CoreError> {
    save_transactions(store, &state.transactions)?;
    save_recurring_expenses(store, &state.recurring_expenses)?;
    save_settings(store, &state.settings)
}
