use serde_json::Value;
use spendlens_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let headline = if error.is_internal() {
        "The report could not be produced."
    } else {
        "The query was rejected."
    };

    let mut lines = vec![
        headline.to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    let issues = error
        .data
        .as_ref()
        .and_then(|data| data.get("errors"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    for issue in issues {
        let field = issue.get("field").and_then(Value::as_str).unwrap_or("?");
        let message = issue.get("message").and_then(Value::as_str).unwrap_or("");
        lines.push(format!("    - {field}: {message}"));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
