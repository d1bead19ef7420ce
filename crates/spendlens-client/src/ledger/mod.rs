pub mod category;
pub mod date;
pub mod source;
pub mod transaction;

pub use category::Category;
pub use source::{JsonFileSource, StaticSource, TransactionSource};
pub use transaction::{RawTransaction, Transaction};
