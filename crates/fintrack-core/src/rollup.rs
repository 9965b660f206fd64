//! Budget usage combining actual spend with projected recurring cost.

use std::fmt;

use chrono::NaiveDate;
use fintrack_domain::{sum_amounts, RecurringExpense, Transaction};
use serde::Serialize;

use crate::projection::project_monthly_cost;

/// Remaining budget below this fraction of the budget is reported as running low.
pub const LOW_BUDGET_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    NotSet,
    Exceeded,
    RunningLow,
    OnTrack,
}

impl BudgetStatus {
    pub fn message(&self) -> &'static str {
        match self {
            BudgetStatus::NotSet => "Please set your monthly budget in settings",
            BudgetStatus::Exceeded => "You have exceeded your budget",
            BudgetStatus::RunningLow => "Your budget is running low",
            BudgetStatus::OnTrack => "Your budget is on track",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRollup {
    pub monthly_budget: f64,
    pub total_spent: f64,
    pub total_recurring: f64,
    /// Not clamped; negative once the budget is exceeded.
    pub remaining: f64,
    pub spent_percentage: u32,
    /// Capped so that spent + recurring never passes 100.
    pub recurring_percentage: u32,
    pub status: BudgetStatus,
}

impl BudgetRollup {
    pub fn total_percentage(&self) -> u32 {
        self.spent_percentage + self.recurring_percentage
    }
}

/// Sum of every expense transaction, regardless of date.
pub fn total_spent(transactions: &[Transaction]) -> f64 {
    sum_amounts(transactions.iter().filter(|txn| txn.is_expense()))
}

pub fn classify(monthly_budget: f64, remaining: f64) -> BudgetStatus {
    if monthly_budget.is_nan() || monthly_budget <= 0.0 {
        BudgetStatus::NotSet
    } else if remaining < 0.0 {
        BudgetStatus::Exceeded
    } else if remaining < monthly_budget * LOW_BUDGET_RATIO {
        BudgetStatus::RunningLow
    } else {
        BudgetStatus::OnTrack
    }
}

fn percentage_of(value: f64, budget: f64, cap: u32) -> u32 {
    if budget.is_nan() || budget <= 0.0 {
        return 0;
    }
    let pct = (value / budget * 100.0).round();
    if pct.is_nan() {
        return 0;
    }
    pct.clamp(0.0, f64::from(cap)) as u32
}

pub fn rollup(
    monthly_budget: f64,
    transactions: &[Transaction],
    recurring_expenses: &[RecurringExpense],
    reference: NaiveDate,
) -> BudgetRollup {
    let total_spent = total_spent(transactions);
    let total_recurring = project_monthly_cost(recurring_expenses, reference);
    let remaining = monthly_budget - total_spent - total_recurring;
    let spent_percentage = percentage_of(total_spent, monthly_budget, 100);
    let recurring_percentage =
        percentage_of(total_recurring, monthly_budget, 100 - spent_percentage);
    let status = classify(monthly_budget, remaining);

    tracing::debug!(
        monthly_budget,
        total_spent,
        total_recurring,
        remaining,
        ?status,
        "computed budget rollup"
    );

    BudgetRollup {
        monthly_budget,
        total_spent,
        total_recurring,
        remaining,
        spent_percentage,
        recurring_percentage,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fintrack_domain::{Frequency, NewRecurringExpense, NewTransaction};

    fn expense(amount: f64) -> Transaction {
        let date = Utc.with_ymd_and_hms(2025, 1, 3, 8, 0, 0).unwrap();
        Transaction::from_new(format!("t{amount}"), date, NewTransaction::expense(amount))
    }

    fn monthly(amount: f64) -> RecurringExpense {
        RecurringExpense::from_new(
            "r",
            NewRecurringExpense::new("Rent", amount, "Housing", Frequency::Monthly),
        )
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn zero_budget_is_not_set() {
        let result = rollup(0.0, &[expense(10.0)], &[monthly(5.0)], reference());
        assert_eq!(result.status, BudgetStatus::NotSet);
        assert_eq!(result.spent_percentage, 0);
        assert_eq!(result.recurring_percentage, 0);
        assert_eq!(result.remaining, -15.0);
        assert_eq!(
            result.status.message(),
            "Please set your monthly budget in settings"
        );
    }

    #[test]
    fn on_track_with_headroom() {
        let result = rollup(1000.0, &[expense(200.0)], &[monthly(300.0)], reference());
        assert_eq!(result.remaining, 500.0);
        assert_eq!(result.spent_percentage, 20);
        assert_eq!(result.recurring_percentage, 30);
        assert_eq!(result.total_percentage(), 50);
        assert_eq!(result.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn running_low_below_ten_percent() {
        let result = rollup(1000.0, &[expense(650.0)], &[monthly(260.0)], reference());
        assert_eq!(result.remaining, 90.0);
        assert_eq!(result.status, BudgetStatus::RunningLow);
        assert_eq!(classify(1000.0, 100.0), BudgetStatus::OnTrack);
    }

    #[test]
    fn exceeded_caps_combined_percentage() {
        let result = rollup(500.0, &[expense(400.0)], &[monthly(300.0)], reference());
        assert_eq!(result.remaining, -200.0);
        assert_eq!(result.status, BudgetStatus::Exceeded);
        assert_eq!(result.spent_percentage, 80);
        assert_eq!(result.recurring_percentage, 20);
        assert_eq!(result.total_percentage(), 100);

        let over = rollup(100.0, &[expense(250.0)], &[monthly(10.0)], reference());
        assert_eq!(over.spent_percentage, 100);
        assert_eq!(over.recurring_percentage, 0);
    }

    #[test]
    fn spending_ignores_income_and_dates() {
        let income = Transaction::from_new(
            "i",
            Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap(),
            NewTransaction::income(5000.0),
        );
        let old = Transaction::from_new(
            "o",
            Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap(),
            NewTransaction::expense(75.0),
        );
        assert_eq!(total_spent(&[income, old, expense(25.0)]), 100.0);
    }

    #[test]
    fn remaining_is_exact_difference() {
        let budget = 1234.56;
        let spent = [expense(12.34), expense(0.66)];
        let recurring = [monthly(99.99)];
        let result = rollup(budget, &spent, &recurring, reference());
        assert_eq!(
            result.remaining,
            budget - result.total_spent - result.total_recurring
        );
    }
}
