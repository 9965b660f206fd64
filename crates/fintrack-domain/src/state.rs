//! Explicit in-memory context handed to services and calculations.

use crate::common::position_by_id;
use crate::recurring::RecurringExpense;
use crate::settings::UserSettings;
use crate::transaction::Transaction;

/// Snapshot of everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceState {
    pub transactions: Vec<Transaction>,
    pub recurring_expenses: Vec<RecurringExpense>,
    pub settings: UserSettings,
}

impl FinanceState {
    pub fn new(
        transactions: Vec<Transaction>,
        recurring_expenses: Vec<RecurringExpense>,
        settings: UserSettings,
    ) -> Self {
        Self {
            transactions,
            recurring_expenses,
            settings,
        }
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: &str) -> Option<Transaction> {
        position_by_id(&self.transactions, id).map(|idx| self.transactions.remove(idx))
    }

    pub fn recurring_expense(&self, id: &str) -> Option<&RecurringExpense> {
        self.recurring_expenses.iter().find(|exp| exp.id == id)
    }

    pub fn recurring_expense_mut(&mut self, id: &str) -> Option<&mut RecurringExpense> {
        self.recurring_expenses.iter_mut().find(|exp| exp.id == id)
    }

    pub fn remove_recurring_expense(&mut self, id: &str) -> Option<RecurringExpense> {
        position_by_id(&self.recurring_expenses, id).map(|idx| self.recurring_expenses.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurring::{Frequency, NewRecurringExpense};

    #[test]
    fn removes_recurring_expense_by_id() {
        let mut state = FinanceState::default();
        state.recurring_expenses.push(RecurringExpense::from_new(
            "a",
            NewRecurringExpense::new("Rent", 900.0, "Housing", Frequency::Monthly),
        ));
        state.recurring_expenses.push(RecurringExpense::from_new(
            "b",
            NewRecurringExpense::new("Lunch", 12.0, "Food", Frequency::Weekdays).inactive(),
        ));

        let removed = state.remove_recurring_expense("a").unwrap();
        assert_eq!(removed.title, "Rent");
        assert!(state.recurring_expense("a").is_none());
        assert!(state.remove_recurring_expense("missing").is_none());
    }
}
