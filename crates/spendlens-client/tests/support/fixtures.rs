use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use spendlens_client::{RawQueryParams, TransactionQueryService};
use tempfile::{Builder, TempDir};

pub fn transaction(id: &str, date: &str, amount: f64, category: &str, merchant: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "amount": amount,
        "category": category,
        "merchant": merchant,
    })
}

pub fn reference_rows() -> Vec<Value> {
    vec![
        transaction("t001", "2024-09-01", 10.0, "Food", "Test"),
        transaction("t002", "2024-09-02", 20.0, "Transport", "Test2"),
        transaction("t003", "2024-10-01", 30.0, "Food", "Test3"),
    ]
}

/// Four months of mixed spending with repeated dates and every category.
pub fn busy_rows() -> Vec<Value> {
    vec![
        transaction("b01", "2024-07-03", 1450.0, "Housing", "Landlord"),
        transaction("b02", "2024-07-03", 12.49, "Food", "Bakery"),
        transaction("b03", "2024-07-19", 15.99, "Subscriptions", "Streamer"),
        transaction("b04", "2024-08-01", 1450.0, "Housing", "Landlord"),
        transaction("b05", "2024-08-09", 64.2, "Transport", "Fuel Stop"),
        transaction("b06", "2024-08-09", 88.0, "Health", "Pharmacy"),
        transaction("b07", "2024-08-22", 41.75, "Entertainment", "Cinema"),
        transaction("b08", "2024-08-31T23:30:00Z", 7.25, "Food", "Cafe"),
        transaction("b09", "2024-09-01T01:15:00+02:00", 19.0, "Food", "Cafe"),
        transaction("b10", "2024-09-14", 3.5, "Transport", "Metro"),
        transaction("b11", "2024-09-14", 3.5, "Transport", "Metro"),
        transaction("b12", "2024-09-28", 15.99, "Subscriptions", "Streamer"),
        transaction("b13", "2024-10-02", 210.0, "Health", "Dentist"),
        transaction("b14", "2024-10-05", 33.33, "Food", "Grocer"),
        transaction("b15", "2024-10-05", 66.67, "Entertainment", "Concert Hall"),
    ]
}

pub fn temp_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir()
}

pub fn write_wrapped_fixture(dir: &Path, rows: &[Value]) -> std::io::Result<PathBuf> {
    write_fixture(dir, "transactions.json", &json!({ "transactions": rows }))
}

pub fn write_fixture(dir: &Path, name: &str, document: &Value) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(document).map_err(std::io::Error::other)?;
    fs::write(&path, body)?;
    Ok(path)
}

pub fn write_raw_fixture(dir: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

/// Runs one request against a freshly written data file.
pub fn respond_with_rows(rows: &[Value], action: Option<&str>, n: Option<&str>) -> (u16, Value) {
    let dir = temp_dir("spendlens-query");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let fixture = write_wrapped_fixture(dir.path(), rows);
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let service = TransactionQueryService::from_json_file(path);
            let response = service.respond(&RawQueryParams::new(action, n));
            return (response.status, response.body);
        }
    }
    (0, Value::Null)
}

pub fn amount_sum(rows: &[Value]) -> f64 {
    rows.iter()
        .filter_map(|row| row["amount"].as_f64())
        .sum::<f64>()
}
