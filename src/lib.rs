pub mod cli;
pub mod core;
pub mod export;
pub mod models;
pub mod utils;


pub use crate::core::errors::{GenerationError, Result};
pub use crate::core::generator::{create_fake_orders, DateRange, OrderCount, OrderGenerator};
pub use crate::core::selector::WeightedSelector;
pub use models::{IdentifierPool, OrderRecord};
