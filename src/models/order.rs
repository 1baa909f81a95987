use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One synthetic order row.
///
/// Field names double as the CSV header: `identifier,amount,timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub identifier: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
}

impl OrderRecord {
    pub fn new(identifier: impl Into<String>, amount: Decimal, timestamp: NaiveDateTime) -> Self {
        Self {
            identifier: identifier.into(),
            amount,
            timestamp,
        }
    }
}
