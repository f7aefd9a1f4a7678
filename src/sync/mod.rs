//! Polling cache core: record cache, selection tracking and the poll
//! scheduler.
//!
//! One `RecordCache` + `PollScheduler` pair per remote collection; the
//! console wires two of them (inquiries, scan results).

pub mod cache;
pub mod scheduler;
pub mod selection;

pub use cache::{MutationOutcome, RecordCache};
pub use scheduler::PollScheduler;
pub use selection::SelectionTracker;
