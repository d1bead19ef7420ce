pub mod config;
pub mod contracts;
pub mod error;
pub mod ledger;
pub mod query;
pub mod service;

pub use contracts::envelope::{ApiResponse, FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use query::params::RawQueryParams;
pub use service::TransactionQueryService;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
