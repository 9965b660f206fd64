//! Input checks applied before a record reaches the state.

use fintrack_domain::{NewRecurringExpense, NewTransaction, RecurringExpense};

use crate::CoreError;

pub fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(format!(
            "amount must be a positive number, got {amount}"
        )));
    }
    Ok(())
}

pub fn validate_budget(budget: f64) -> Result<(), CoreError> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(CoreError::Validation(format!(
            "monthly budget must be zero or positive, got {budget}"
        )));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_new_transaction(input: &NewTransaction) -> Result<(), CoreError> {
    validate_amount(input.amount)
}

pub fn validate_new_recurring(input: &NewRecurringExpense) -> Result<(), CoreError> {
    require_text("title", &input.title)?;
    require_text("category", &input.category)?;
    validate_amount(input.amount)
}

pub fn validate_recurring(expense: &RecurringExpense) -> Result<(), CoreError> {
    require_text("id", &expense.id)?;
    require_text("title", &expense.title)?;
    require_text("category", &expense.category)?;
    validate_amount(expense.amount)
}
