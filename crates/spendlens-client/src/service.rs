use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error};

use crate::ClientResult;
use crate::contracts::envelope::{ApiResponse, SuccessEnvelope, api_failure, api_success, success};
use crate::ledger::source::{JsonFileSource, TransactionSource};
use crate::ledger::transaction::{Transaction, convert_all};
use crate::query::by_category::aggregate_by_category;
use crate::query::by_month::aggregate_by_month;
use crate::query::params::{Action, RawQueryParams, validate};
use crate::query::recent::recent_transactions;

/// Request boundary for the three read queries. Holds no state besides the
/// source handle; every call reloads the dataset.
#[derive(Clone)]
pub struct TransactionQueryService {
    source: Arc<dyn TransactionSource>,
}

impl TransactionQueryService {
    pub fn new<S>(source: S) -> Self
    where
        S: TransactionSource + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_json_file(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileSource::new(path))
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    pub fn execute(&self, raw: &RawQueryParams) -> ClientResult<SuccessEnvelope> {
        let params = validate(raw).inspect_err(|rejected| {
            debug!(issues = rejected.issues.len(), "rejected query parameters");
        })?;
        debug!(action = %params.action, n = ?params.n, "dispatching query");

        match params.action {
            Action::RecentTransactions => {
                let n = params.require_n()?;
                let transactions = self.load()?;
                success(
                    params.action.as_str(),
                    recent_transactions(&transactions, n),
                )
            }
            Action::AggregateByCategory => {
                let transactions = self.load()?;
                success(params.action.as_str(), aggregate_by_category(&transactions))
            }
            Action::AggregateByMonth => {
                let transactions = self.load()?;
                success(params.action.as_str(), aggregate_by_month(&transactions))
            }
        }
    }

    /// Same as [`execute`](Self::execute), rendered as status + body. Internal
    /// causes are logged here and never reach the body.
    pub fn respond(&self, raw: &RawQueryParams) -> ApiResponse {
        match self.execute(raw) {
            Ok(envelope) => api_success(envelope),
            Err(failure) => {
                if failure.is_internal() {
                    error!(
                        code = %failure.code,
                        source = %self.source.describe(),
                        "query failed: {}",
                        failure.message
                    );
                }
                api_failure(&failure)
            }
        }
    }

    fn load(&self) -> ClientResult<Vec<Transaction>> {
        let raw = self.source.load()?;
        debug!(records = raw.len(), source = %self.source.describe(), "loaded transactions");
        convert_all(raw)
    }
}
