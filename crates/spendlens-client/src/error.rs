use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::query::params::ParamIssue;

pub(crate) const INVALID_PARAMETERS_MESSAGE: &str = "Invalid parameters";
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

const BAD_REQUEST: u16 = 400;
const INTERNAL_SERVER_ERROR: u16 = 500;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_parameters(issues: &[ParamIssue]) -> Self {
        Self::new(
            "invalid_parameters",
            INVALID_PARAMETERS_MESSAGE,
            vec![
                "Set `action` to getRecentTransactions, aggregateByCategory, or aggregateByMonth."
                    .to_string(),
                "When given, `n` must be a positive whole number.".to_string(),
            ],
        )
        .with_data(json!({ "errors": issues }))
    }

    pub fn missing_n_parameter() -> Self {
        Self::new(
            "missing_parameter",
            "getRecentTransactions requires n: missing n parameter",
            vec!["Retry with `n` set to the number of transactions to return.".to_string()],
        )
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new(
            "invalid_argument",
            message,
            vec!["Run `spendlens --help` for usage.".to_string()],
        )
    }

    pub fn data_load_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "data_load_failed",
            &format!("Could not load transactions from `{location}`: {detail}"),
            vec![format!(
                "Check that `{location}` exists and is readable, or set `SPENDLENS_DATA`."
            )],
        )
    }

    pub fn data_malformed(detail: &str) -> Self {
        Self::new(
            "data_malformed",
            &format!("Stored transaction data is malformed: {detail}"),
            vec!["Fix the listed record in the data file and retry.".to_string()],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_")
            || matches!(self.code.as_str(), "data_load_failed" | "data_malformed")
    }

    pub fn status_code(&self) -> u16 {
        if self.is_internal() {
            INTERNAL_SERVER_ERROR
        } else {
            BAD_REQUEST
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ClientError;
    use crate::query::params::ParamIssue;

    #[test]
    fn parameter_errors_are_client_class() {
        let error = ClientError::invalid_parameters(&[ParamIssue::new("action", "unknown")]);
        assert!(!error.is_internal());
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.message, "Invalid parameters");
        assert!(error.data.is_some());

        let missing = ClientError::missing_n_parameter();
        assert_eq!(missing.status_code(), 400);
        assert!(missing.message.contains("missing n parameter"));
    }

    #[test]
    fn data_errors_are_internal_class() {
        let load = ClientError::data_load_failed(Path::new("/tmp/none.json"), "not found");
        assert!(load.is_internal());
        assert_eq!(load.status_code(), 500);

        let malformed = ClientError::data_malformed("record 3: unknown category `Pets`");
        assert_eq!(malformed.status_code(), 500);

        let serialization = ClientError::internal_serialization("boom");
        assert_eq!(serialization.status_code(), 500);
    }
}
