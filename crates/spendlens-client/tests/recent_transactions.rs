mod support;

use serde_json::Value;
use support::fixtures::{busy_rows, reference_rows, respond_with_rows};

fn ids(body: &Value) -> Vec<String> {
    body["transactions"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| row["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn returns_requested_count_newest_first() {
    let (status, body) = respond_with_rows(&reference_rows(), Some("getRecentTransactions"), Some("2"));
    assert_eq!(status, 200);
    assert_eq!(ids(&body), vec!["t003", "t002"]);
    assert_eq!(body["transactions"][0]["date"], "2024-10-01T00:00:00.000Z");
    assert_eq!(body["transactions"][0]["merchant"], "Test3");
    assert_eq!(body["transactions"][0]["category"], "Food");
    assert_eq!(body["transactions"][0]["amount"], 30.0);
}

#[test]
fn every_valid_n_returns_a_sorted_subset() {
    let rows = busy_rows();
    let all_ids = rows
        .iter()
        .filter_map(|row| row["id"].as_str().map(str::to_string))
        .collect::<Vec<String>>();

    for n in 1..=rows.len() {
        let n_text = n.to_string();
        let (status, body) =
            respond_with_rows(&rows, Some("getRecentTransactions"), Some(n_text.as_str()));
        assert_eq!(status, 200);

        let returned = body["transactions"].as_array().cloned().unwrap_or_default();
        assert_eq!(returned.len(), n);

        let dates = returned
            .iter()
            .filter_map(|row| row["date"].as_str().map(str::to_string))
            .collect::<Vec<String>>();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(ids(&body).iter().all(|id| all_ids.contains(id)));
    }
}

#[test]
fn n_beyond_dataset_returns_everything() {
    let rows = busy_rows();
    let (status, body) = respond_with_rows(&rows, Some("getRecentTransactions"), Some("1000"));
    assert_eq!(status, 200);
    assert_eq!(ids(&body).len(), rows.len());
    assert_eq!(ids(&body).first().map(String::as_str), Some("b14"));
}

#[test]
fn n_past_signed_range_returns_everything() {
    let rows = busy_rows();
    let (status, body) = respond_with_rows(
        &rows,
        Some("getRecentTransactions"),
        Some("99999999999999999999"),
    );
    assert_eq!(status, 200);
    assert_eq!(ids(&body).len(), rows.len());
}

#[test]
fn same_day_rows_keep_file_order() {
    let (status, body) = respond_with_rows(&busy_rows(), Some("getRecentTransactions"), Some("3"));
    assert_eq!(status, 200);
    assert_eq!(ids(&body), vec!["b14", "b15", "b13"]);
}

#[test]
fn offset_timestamps_are_reported_in_utc() {
    let (status, body) = respond_with_rows(&busy_rows(), Some("getRecentTransactions"), Some("15"));
    assert_eq!(status, 200);

    let converted = body["transactions"]
        .as_array()
        .and_then(|rows| rows.iter().find(|row| row["id"] == "b09"))
        .cloned()
        .unwrap_or(Value::Null);
    assert_eq!(converted["date"], "2024-08-31T23:15:00.000Z");
}

#[test]
fn missing_n_reports_business_rule() {
    let (status, body) = respond_with_rows(&reference_rows(), Some("getRecentTransactions"), None);
    assert_eq!(status, 400);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.contains("missing n parameter"))
    );
}

#[test]
fn empty_dataset_returns_no_transactions() {
    let (status, body) = respond_with_rows(&[], Some("getRecentTransactions"), Some("5"));
    assert_eq!(status, 200);
    assert!(ids(&body).is_empty());
}
