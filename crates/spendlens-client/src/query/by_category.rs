use std::collections::HashMap;

use crate::contracts::types::{CategoryBreakdownData, CategorySummary};
use crate::ledger::{Category, Transaction};
use crate::query::share_of;

#[derive(Debug, Clone, Copy)]
struct Bucket {
    category: Category,
    total: f64,
    count: usize,
}

pub fn aggregate_by_category(transactions: &[Transaction]) -> CategoryBreakdownData {
    CategoryBreakdownData {
        categories: summarize_categories(transactions),
    }
}

/// Groups by category in first-seen order, then sorts by total descending.
/// The sort is stable, so equal totals keep that first-seen order. A zero
/// grand total yields no rows.
pub fn summarize_categories<'a, I>(transactions: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index_by_category: HashMap<Category, usize> = HashMap::new();

    for transaction in transactions {
        let slot = *index_by_category
            .entry(transaction.category)
            .or_insert_with(|| {
                buckets.push(Bucket {
                    category: transaction.category,
                    total: 0.0,
                    count: 0,
                });
                buckets.len() - 1
            });
        let bucket = &mut buckets[slot];
        bucket.total += transaction.amount;
        bucket.count += 1;
    }

    let grand_total = buckets.iter().map(|bucket| bucket.total).sum::<f64>();
    if grand_total == 0.0 {
        return Vec::new();
    }

    let mut rows = buckets
        .into_iter()
        .map(|bucket| CategorySummary {
            category: bucket.category,
            total: bucket.total,
            transaction_count: bucket.count,
            percentage: share_of(bucket.total, grand_total),
        })
        .collect::<Vec<CategorySummary>>();

    rows.sort_by(|left, right| right.total.total_cmp(&left.total));
    rows
}
