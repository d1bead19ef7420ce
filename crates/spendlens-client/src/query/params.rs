use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

/// Query parameters exactly as received; nothing has been checked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQueryParams {
    pub action: Option<String>,
    pub n: Option<String>,
}

impl RawQueryParams {
    pub fn new(action: Option<&str>, n: Option<&str>) -> Self {
        Self {
            action: action.map(str::to_string),
            n: n.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RecentTransactions,
    AggregateByCategory,
    AggregateByMonth,
}

impl Action {
    pub const ALL: [Action; 3] = [
        Self::RecentTransactions,
        Self::AggregateByCategory,
        Self::AggregateByMonth,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecentTransactions => "getRecentTransactions",
            Self::AggregateByCategory => "aggregateByCategory",
            Self::AggregateByMonth => "aggregateByMonth",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == value)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedParams {
    pub action: Action,
    pub n: Option<usize>,
}

impl ValidatedParams {
    /// `n` is optional structurally but required by `getRecentTransactions`.
    pub fn require_n(&self) -> ClientResult<usize> {
        self.n.ok_or_else(ClientError::missing_n_parameter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamIssue {
    pub field: String,
    pub message: String,
}

impl ParamIssue {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ParamIssue>,
}

impl From<ValidationError> for ClientError {
    fn from(error: ValidationError) -> Self {
        ClientError::invalid_parameters(&error.issues)
    }
}

pub fn validate(raw: &RawQueryParams) -> Result<ValidatedParams, ValidationError> {
    let mut issues = Vec::new();

    let action = match raw.action.as_deref() {
        Some(value) => {
            let parsed = Action::from_param(value);
            if parsed.is_none() {
                issues.push(ParamIssue::new(
                    "action",
                    &format!(
                        "`{value}` is not one of getRecentTransactions, aggregateByCategory, aggregateByMonth"
                    ),
                ));
            }
            parsed
        }
        None => {
            issues.push(ParamIssue::new("action", "action is required"));
            None
        }
    };

    let n = match raw.n.as_deref() {
        Some(value) => match parse_positive_count(value) {
            Ok(count) => Some(count),
            Err(message) => {
                issues.push(ParamIssue::new("n", message));
                None
            }
        },
        None => None,
    };

    match action {
        Some(action) if issues.is_empty() => Ok(ValidatedParams { action, n }),
        _ => Err(ValidationError { issues }),
    }
}

fn parse_positive_count(value: &str) -> Result<usize, &'static str> {
    let parsed = match value.parse::<i64>() {
        Ok(parsed) => parsed,
        // Beyond any dataset size, so it saturates.
        Err(error) if *error.kind() == IntErrorKind::PosOverflow => return Ok(usize::MAX),
        Err(error) if *error.kind() == IntErrorKind::NegOverflow => {
            return Err("n must be greater than zero");
        }
        Err(_) => return Err("n must be a base-10 integer"),
    };
    if parsed <= 0 {
        return Err("n must be greater than zero");
    }
    Ok(usize::try_from(parsed).unwrap_or(usize::MAX))
}
