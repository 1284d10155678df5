pub mod cost;
pub mod energy;
pub mod error;
pub mod monthly;
pub mod query;
