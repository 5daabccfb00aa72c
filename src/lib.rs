pub mod fib;
pub mod utils;

pub use fib::{fib, fib2, init_fib};
