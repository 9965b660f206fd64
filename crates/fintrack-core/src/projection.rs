//! Converts recurring expenses into an equivalent cost for one calendar month.

use chrono::NaiveDate;
use fintrack_domain::{Frequency, RecurringExpense};
use serde::Serialize;

use crate::calendar::MonthCalendar;

/// Contribution of a single expense to the month described by `calendar`.
///
/// Inactive expenses contribute nothing. `start_date` is not consulted.
pub fn monthly_cost(expense: &RecurringExpense, calendar: &MonthCalendar) -> f64 {
    if !expense.is_active {
        return 0.0;
    }
    expense.amount * f64::from(calendar.occurrences(&expense.frequency))
}

/// Projected cost of every active expense for the month containing `reference`.
pub fn project_monthly_cost(expenses: &[RecurringExpense], reference: NaiveDate) -> f64 {
    let calendar = MonthCalendar::for_date(reference);
    let total = expenses
        .iter()
        .map(|expense| monthly_cost(expense, &calendar))
        .sum();
    tracing::debug!(
        expenses = expenses.len(),
        %reference,
        total,
        "projected recurring cost"
    );
    total
}

/// Raw per-occurrence amounts of active expenses, bucketed by recognised frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrequencyTotals {
    pub monthly: f64,
    pub biweekly: f64,
    pub weekly: f64,
    pub weekdays: f64,
    pub daily: f64,
}

impl FrequencyTotals {
    pub fn get(&self, frequency: &Frequency) -> Option<f64> {
        match frequency {
            Frequency::Monthly => Some(self.monthly),
            Frequency::Biweekly => Some(self.biweekly),
            Frequency::Weekly => Some(self.weekly),
            Frequency::Weekdays => Some(self.weekdays),
            Frequency::Daily => Some(self.daily),
            Frequency::Unknown(_) => None,
        }
    }

    /// Buckets with a positive total, in display order.
    pub fn entries(&self) -> Vec<(Frequency, f64)> {
        Frequency::known()
            .into_iter()
            .filter_map(|freq| {
                let amount = self.get(&freq)?;
                (amount > 0.0).then_some((freq, amount))
            })
            .collect()
    }

    pub fn has_any(&self) -> bool {
        !self.entries().is_empty()
    }

    fn slot_mut(&mut self, frequency: &Frequency) -> Option<&mut f64> {
        match frequency {
            Frequency::Monthly => Some(&mut self.monthly),
            Frequency::Biweekly => Some(&mut self.biweekly),
            Frequency::Weekly => Some(&mut self.weekly),
            Frequency::Weekdays => Some(&mut self.weekdays),
            Frequency::Daily => Some(&mut self.daily),
            Frequency::Unknown(_) => None,
        }
    }
}

pub fn frequency_totals(expenses: &[RecurringExpense]) -> FrequencyTotals {
    let mut totals = FrequencyTotals::default();
    for expense in expenses.iter().filter(|exp| exp.is_active) {
        if let Some(slot) = totals.slot_mut(&expense.frequency) {
            *slot += expense.amount;
        }
    }
    totals
}
