//! Homewatch Core
//!
//! Core types for the homework status watcher.
//!
//! This crate contains:
//! - Domain types: submission records and review statuses with their verdicts
//! - DTOs: wire structures for the messaging bot API

pub mod domain;
pub mod dto;
