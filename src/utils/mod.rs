pub mod random;

pub use random::{random_amount, random_timestamp, AMOUNT_SCALE};
