mod analyze_output;
mod runner;

pub use runner::run_analyze;

// Re-export internal items for tests
#[cfg(test)]
pub(crate) use analyze_output::{format_check_log, sort_results};
#[cfg(test)]
pub(crate) use runner::run_analyze_with_context;
