//! Business logic helpers for recurring expenses.

use fintrack_domain::{Displayable, FinanceState, NewRecurringExpense, RecurringExpense};

use crate::ids::IdGenerator;
use crate::validation::{validate_new_recurring, validate_recurring};
use crate::CoreError;

pub struct RecurringService;

impl RecurringService {
    pub fn add(
        state: &mut FinanceState,
        input: NewRecurringExpense,
        ids: &dyn IdGenerator,
    ) -> Result<RecurringExpense, CoreError> {
        if let Err(err) = validate_new_recurring(&input) {
            tracing::warn!(error = %err, "rejected recurring expense");
            return Err(err);
        }
        let expense = RecurringExpense::from_new(ids.next_id(), input);
        tracing::info!(
            id = %expense.id,
            record = %expense.display_label(),
            "recurring expense added"
        );
        state.recurring_expenses.push(expense.clone());
        Ok(expense)
    }

    /// Replaces the stored record that shares `expense.id`.
    pub fn update(state: &mut FinanceState, expense: RecurringExpense) -> Result<(), CoreError> {
        validate_recurring(&expense)?;
        let slot = state
            .recurring_expense_mut(&expense.id)
            .ok_or_else(|| not_found(&expense.id))?;
        tracing::info!(id = %expense.id, "recurring expense updated");
        *slot = expense;
        Ok(())
    }

    pub fn remove(state: &mut FinanceState, id: &str) -> Result<RecurringExpense, CoreError> {
        let removed = state
            .remove_recurring_expense(id)
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "recurring expense removed");
        Ok(removed)
    }

    /// Flips `is_active` and returns the new value.
    pub fn toggle(state: &mut FinanceState, id: &str) -> Result<bool, CoreError> {
        let expense = state.recurring_expense_mut(id).ok_or_else(|| not_found(id))?;
        let active = expense.toggle();
        tracing::info!(id, active, "recurring expense toggled");
        Ok(active)
    }

    pub fn list(state: &FinanceState) -> Vec<&RecurringExpense> {
        state.recurring_expenses.iter().collect()
    }
}

fn not_found(id: &str) -> CoreError {
    tracing::warn!(id, "recurring expense not found");
    CoreError::RecurringExpenseNotFound(id.to_string())
}
