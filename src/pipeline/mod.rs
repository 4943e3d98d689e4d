//! Pipeline orchestration for compliance scoring.
//!
//! This module provides the shared load → evaluate → report plumbing used by
//! the CLI command handlers.

mod load;
mod output;
mod report_stage;

pub use load::{DocumentFormat, load_document, parse_document_str};
pub use output::{OutputTarget, should_use_color, write_output};
pub use report_stage::{evaluate_file, output_reports};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every document was scored and met `--min-score` (if given)
    pub const SUCCESS: i32 = 0;
    /// At least one document scored below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
