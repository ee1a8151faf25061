//! Scheduler layer for the watcher
//!
//! This layer drives the poll-diff-notify cycle: fetching the latest
//! statuses, validating the response shape, and sending a notification
//! when the status of the most recent submission changes.

pub mod poller;
pub mod validate;

pub use poller::StatusPoller;
