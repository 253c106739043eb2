pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod output;

pub use analyzer::{AnalysisResult, CheckDescriptor, LogAnalyzer, Status};
pub use dispatcher::{ConcurrencyLimit, Dispatcher};
pub use error::{LogCheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
