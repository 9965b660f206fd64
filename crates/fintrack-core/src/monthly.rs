use chrono::{Datelike, FixedOffset, NaiveDate};
use fintrack_domain::{Transaction, TransactionType};
use serde::Serialize;

/// Income and expense sums for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Sums the transactions whose wall-clock date at `offset` falls in the year and month of
/// `reference`.
pub fn monthly_totals(
    transactions: &[Transaction],
    reference: NaiveDate,
    offset: FixedOffset,
) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for txn in transactions {
        let date = txn.date.with_timezone(&offset).date_naive();
        if date.year() != reference.year() || date.month() != reference.month() {
            continue;
        }
        match txn.kind {
            TransactionType::Income => totals.income += txn.amount,
            TransactionType::Expense => totals.expenses += txn.amount,
        }
    }
    totals.net = totals.income - totals.expenses;
    totals
}
