//! Run orchestration.
//!
//! [`Bootstrapper`] moves a run from dependency evaluation through
//! planning, confirmation and installation to the delegate hand-off.
//! [`report`] holds everything printed along the way.

pub mod report;
pub mod session;

pub use report::show_error;
pub use session::{Bootstrapper, RunOutcome};
