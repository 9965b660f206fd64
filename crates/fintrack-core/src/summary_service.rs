use chrono::{FixedOffset, NaiveDate};
use fintrack_domain::FinanceState;
use serde::Serialize;

use crate::breakdown::{breakdown_with_label, CategoryBreakdown};
use crate::monthly::{monthly_totals, MonthlyTotals};
use crate::projection::{frequency_totals, FrequencyTotals};
use crate::rollup::{rollup, BudgetRollup};

/// Everything the dashboard shows for one reference month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub reference: NaiveDate,
    pub rollup: BudgetRollup,
    pub categories: CategoryBreakdown,
    pub monthly: MonthlyTotals,
    pub frequencies: FrequencyTotals,
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(
        state: &FinanceState,
        reference: NaiveDate,
        offset: FixedOffset,
        uncategorized_label: &str,
    ) -> DashboardSummary {
        DashboardSummary {
            reference,
            rollup: rollup(
                state.settings.monthly_budget,
                &state.transactions,
                &state.recurring_expenses,
                reference,
            ),
            categories: breakdown_with_label(&state.transactions, uncategorized_label),
            monthly: monthly_totals(&state.transactions, reference, offset),
            frequencies: frequency_totals(&state.recurring_expenses),
        }
    }
}
