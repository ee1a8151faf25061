//! Wire DTOs
//!
//! Request and response structures for the external bot-messaging API.

pub mod telegram;
