use std::io;

use serde_json::Value;

use super::format::{self, Column};

pub fn render_recent(data: &Value) -> io::Result<String> {
    let rows = data
        .get("transactions")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("recent transactions output requires transactions"))?;

    if rows.is_empty() {
        return Ok("No transactions found in the data file.".to_string());
    }

    let columns = [
        Column::left("Date"),
        Column::left("Merchant"),
        Column::left("Category"),
        Column::right("Amount"),
        Column::left("Id"),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                date_only(text_field(row, "date")),
                text_field(row, "merchant").to_string(),
                text_field(row, "category").to_string(),
                format::format_amount(number_field(row, "amount")),
                text_field(row, "id").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![
        format!("Most recent {} transaction(s):", rows.len()),
        String::new(),
    ];
    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

pub fn render_categories(data: &Value) -> io::Result<String> {
    let rows = data
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("category output requires categories"))?;

    if rows.is_empty() {
        return Ok("No spending to break down by category.".to_string());
    }

    let grand_total = rows.iter().map(|row| number_field(row, "total")).sum::<f64>();
    let mut lines = vec!["Spending by category:".to_string(), String::new()];
    lines.extend(category_table(rows));
    lines.push(String::new());
    lines.extend(format::key_value_rows(
        &[("Total:", format::format_amount(grand_total))],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_months(data: &Value) -> io::Result<String> {
    let months = data
        .get("months")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("monthly output requires months"))?;

    if months.is_empty() {
        return Ok("No spending to break down by month.".to_string());
    }

    let mut lines = vec!["Spending by month:".to_string()];
    for month in months {
        lines.push(String::new());
        lines.push(format!(
            "{} ({})",
            text_field(month, "label"),
            text_field(month, "month")
        ));
        lines.extend(format::key_value_rows(
            &[
                ("Total:", format::format_amount(number_field(month, "total"))),
                (
                    "Transactions:",
                    month
                        .get("transactionCount")
                        .and_then(Value::as_u64)
                        .unwrap_or(0)
                        .to_string(),
                ),
            ],
            2,
        ));

        let by_category = month
            .get("byCategory")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if !by_category.is_empty() {
            lines.push(String::new());
            lines.extend(category_table(&by_category));
        }
    }

    Ok(lines.join("\n"))
}

fn category_table(rows: &[Value]) -> Vec<String> {
    let columns = [
        Column::left("Category"),
        Column::right("Total"),
        Column::right("Count"),
        Column::right("Share"),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text_field(row, "category").to_string(),
                format::format_amount(number_field(row, "total")),
                row.get("transactionCount")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
                format::format_percentage(number_field(row, "percentage")),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &table_rows)
}

fn text_field<'a>(row: &'a Value, key: &str) -> &'a str {
    row.get(key).and_then(Value::as_str).unwrap_or("unknown")
}

fn number_field(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn date_only(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or(timestamp).to_string()
}
