//! Terminal output and solution files

pub mod display;
pub mod formatters;

pub use display::{print_preprocess_report, print_query_result, print_solve_report};
pub use formatters::{save_solutions, write_solutions};
