use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::ledger::category::Category;
use crate::ledger::date::{format_timestamp, parse_transaction_timestamp};
use crate::{ClientError, ClientResult};

/// A record as handed over by a [`TransactionSource`](crate::ledger::source::TransactionSource),
/// before the date and category have been checked.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawTransaction {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub merchant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub category: Category,
    pub merchant: String,
}

impl Transaction {
    pub fn from_raw(raw: RawTransaction, position: usize) -> ClientResult<Self> {
        let Some(date) = parse_transaction_timestamp(&raw.date) else {
            return Err(ClientError::data_malformed(&format!(
                "record {position} (`{}`) has unparseable date `{}`",
                raw.id, raw.date
            )));
        };

        if !raw.amount.is_finite() {
            return Err(ClientError::data_malformed(&format!(
                "record {position} (`{}`) has a non-finite amount",
                raw.id
            )));
        }

        let category = raw.category.parse::<Category>().map_err(|error| {
            ClientError::data_malformed(&format!("record {position} (`{}`): {error}", raw.id))
        })?;

        Ok(Self {
            id: raw.id,
            date,
            amount: raw.amount,
            category,
            merchant: raw.merchant,
        })
    }
}

/// Converts a whole batch; the first bad record fails the batch.
pub fn convert_all(raw: Vec<RawTransaction>) -> ClientResult<Vec<Transaction>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| Transaction::from_raw(record, index + 1))
        .collect()
}

fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(value))
}
