//! Core domain types
//!
//! The fundamental entities of the watcher: the submission record returned
//! by the review API and the closed set of review statuses.

pub mod homework;
