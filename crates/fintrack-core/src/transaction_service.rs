//! Business logic helpers for managing transactions.

use fintrack_domain::{Displayable, FinanceState, NewTransaction, Transaction};

use crate::ids::IdGenerator;
use crate::time::Clock;
use crate::validation::validate_new_transaction;
use crate::CoreError;

/// Provides validated add/remove helpers for transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates `input`, stamps it with a fresh id and the current time, and appends it.
    pub fn add(
        state: &mut FinanceState,
        input: NewTransaction,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> Result<Transaction, CoreError> {
        if let Err(err) = validate_new_transaction(&input) {
            tracing::warn!(error = %err, "rejected transaction");
            return Err(err);
        }
        let transaction = Transaction::from_new(ids.next_id(), clock.now(), input);
        tracing::info!(record = %transaction.display_label(), "transaction added");
        state.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(state: &mut FinanceState, id: &str) -> Result<Transaction, CoreError> {
        let removed = state.remove_transaction(id).ok_or_else(|| {
            tracing::warn!(id, "transaction not found");
            CoreError::TransactionNotFound(id.to_string())
        })?;
        tracing::info!(id, "transaction removed");
        Ok(removed)
    }

    pub fn list(state: &FinanceState) -> Vec<&Transaction> {
        state.transactions.iter().collect()
    }
}
