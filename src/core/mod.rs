pub mod errors;
pub mod generator;
pub mod selector;
