mod error_text;
mod format;
mod json;
mod mode;
mod report_text;

use std::io;

use spendlens_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

use crate::stdout_io::write_stdout_line;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.action.as_str() {
        "getRecentTransactions" => report_text::render_recent(&success.data),
        "aggregateByCategory" => report_text::render_categories(&success.data),
        "aggregateByMonth" => report_text::render_months(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output action `{}`",
            success.action
        ))),
    }
}
