use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::ledger::transaction::RawTransaction;
use crate::{ClientError, ClientResult};

/// Supplies the raw transaction records for one request.
pub trait TransactionSource: Send + Sync {
    fn describe(&self) -> String;

    fn load(&self) -> ClientResult<Vec<RawTransaction>>;
}

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> ClientResult<Vec<RawTransaction>> {
        let body = fs::read_to_string(&self.path)
            .map_err(|error| ClientError::data_load_failed(&self.path, &error.to_string()))?;
        parse_document(&body).map_err(|detail| ClientError::data_load_failed(&self.path, &detail))
    }
}

/// Records held in memory, mostly for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawTransaction>,
}

impl StaticSource {
    pub fn new(records: Vec<RawTransaction>) -> Self {
        Self { records }
    }
}

impl TransactionSource for StaticSource {
    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }

    fn load(&self) -> ClientResult<Vec<RawTransaction>> {
        Ok(self.records.clone())
    }
}

/// Accepts either `{"transactions": [...]}` or a bare top-level array.
pub(crate) fn parse_document(body: &str) -> Result<Vec<RawTransaction>, String> {
    let parsed =
        serde_json::from_str::<Value>(body).map_err(|error| format!("invalid JSON: {error}"))?;

    let records = match parsed {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut object) => match object.remove("transactions") {
            Some(inner @ Value::Array(_)) => inner,
            Some(_) => return Err("`transactions` must be an array".to_string()),
            None => return Err("document has no `transactions` array".to_string()),
        },
        _ => return Err("document must be an object or an array".to_string()),
    };

    serde_json::from_value::<Vec<RawTransaction>>(records)
        .map_err(|error| format!("invalid transaction record: {error}"))
}
