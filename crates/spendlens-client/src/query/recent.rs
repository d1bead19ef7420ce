use crate::contracts::types::RecentTransactionsData;
use crate::ledger::Transaction;

/// Newest `n` transactions. Sorts a copy, so `transactions` keeps its order;
/// equal dates keep their source order.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> RecentTransactionsData {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|left, right| right.date.cmp(&left.date));
    sorted.truncate(n);

    RecentTransactionsData {
        transactions: sorted,
    }
}
