//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckConfig, CheckResult, check_word};
pub use simple::{run_simple, run_simple_with};
pub use solutions::{SolutionsResult, find_solutions};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
