//! Command implementations

pub mod preprocess;
mod progress;
pub mod query;
pub mod solve;

pub use preprocess::{PreprocessConfig, PreprocessReport, run_preprocess};
pub use query::{QueryConfig, QueryResult, run_query};
pub use solve::{SolveConfig, SolveReport, run_solve};
