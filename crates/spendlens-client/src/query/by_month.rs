use std::collections::BTreeMap;

use crate::contracts::types::{MonthlyBreakdownData, MonthlySummary};
use crate::ledger::Transaction;
use crate::ledger::date::{month_key, month_label};
use crate::query::by_category::summarize_categories;

pub fn aggregate_by_month(transactions: &[Transaction]) -> MonthlyBreakdownData {
    let mut by_month: BTreeMap<String, Vec<&Transaction>> = BTreeMap::new();
    for transaction in transactions {
        by_month
            .entry(month_key(&transaction.date))
            .or_default()
            .push(transaction);
    }

    let months = by_month
        .into_iter()
        .rev()
        .map(|(month, members)| summarize_month(month, &members))
        .collect::<Vec<MonthlySummary>>();

    MonthlyBreakdownData { months }
}

fn summarize_month(month: String, members: &[&Transaction]) -> MonthlySummary {
    let label = month_label(&month).unwrap_or_else(|| month.clone());
    let total = members.iter().map(|transaction| transaction.amount).sum::<f64>();

    MonthlySummary {
        label,
        total,
        transaction_count: members.len(),
        by_category: summarize_categories(members.iter().copied()),
        month,
    }
}
