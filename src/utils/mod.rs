pub mod counters;
pub mod errors;
