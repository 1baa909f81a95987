pub mod order;
pub mod pool;

pub use order::OrderRecord;
pub use pool::IdentifierPool;
