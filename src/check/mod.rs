//! Correlation of linter errors with changed lines.
//!
//! Only errors that fall inside a changed interval of their file survive.
//! Errors on files that are not in the diff never survive, whatever their
//! line. Survivors from all linters accumulate into one [`CheckOutcome`];
//! the run is clean iff that list is empty.

mod engine;
mod outcome;


// Re-export public API
pub use engine::{LinterCheck, affected_errors};
pub use outcome::CheckOutcome;
