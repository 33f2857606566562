pub mod checks;
pub mod cli;
pub mod dispatch;
pub mod duplicate;
pub mod error;
pub mod output;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod spell;

pub use error::{Result, SweepError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_FILE_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
