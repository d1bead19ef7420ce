use serde::Serialize;

use crate::ledger::{Category, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub total: f64,
    pub transaction_count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// `YYYY-MM`, sortable.
    pub month: String,
    /// Display form such as `Sep 2024`.
    pub label: String,
    pub total: f64,
    pub transaction_count: usize,
    pub by_category: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransactionsData {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdownData {
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBreakdownData {
    pub months: Vec<MonthlySummary>,
}
