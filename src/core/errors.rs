use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Identifier pool is empty")]
    EmptyPool,
    #[error("Invalid date '{input}', expected YYYY-MM-DD: {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },
    #[error("Invalid order count: {0}")]
    InvalidCount(i64),
    #[error("Invalid Beta shape parameters: a={a}, b={b}")]
    InvalidShape { a: f64, b: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
