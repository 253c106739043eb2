pub mod analyze;
pub mod context;

pub use analyze::run_analyze;
