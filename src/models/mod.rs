pub mod macros;
pub mod month;

pub use month::*;

#[cfg(test)]
#[path = "month_tests.rs"]
mod month_tests;
