//! Per-category totals of expense transactions.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use fintrack_domain::Transaction;
use serde::Serialize;

pub const DEFAULT_UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Label to group a record under: the stored category verbatim, or `fallback` when missing or
/// blank.
pub fn category_label<'a>(category: Option<&'a str>, fallback: &'a str) -> &'a str {
    category
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(fallback)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    totals: BTreeMap<String, f64>,
    total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

impl CategoryBreakdown {
    pub fn totals(&self) -> &BTreeMap<String, f64> {
        &self.totals
    }

    /// Sum of every group.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.totals.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Share of the total held by `category`, in percent. Zero when nothing was spent.
    pub fn percentage(&self, category: &str) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }
        self.get(category).unwrap_or(0.0) / self.total * 100.0
    }

    /// Rows ordered by descending amount, ties broken by label.
    pub fn shares(&self) -> Vec<CategoryShare> {
        let mut rows: Vec<CategoryShare> = self
            .totals
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.clone(),
                amount: *amount,
                percentage: self.percentage(category),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        rows
    }

    pub fn into_parts(self) -> (BTreeMap<String, f64>, f64) {
        (self.totals, self.total)
    }
}

pub fn breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    breakdown_with_label(transactions, DEFAULT_UNCATEGORIZED_LABEL)
}

/// Groups expense transactions by category; income is ignored.
pub fn breakdown_with_label(transactions: &[Transaction], fallback: &str) -> CategoryBreakdown {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let label = category_label(txn.category.as_deref(), fallback);
        *totals.entry(label.to_string()).or_insert(0.0) += txn.amount;
    }
    let total = totals.values().sum();
    CategoryBreakdown { totals, total }
}
