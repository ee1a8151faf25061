//! Service layer
//!
//! The seams between the poll loop and the outside world. Both external
//! collaborators are trait-based so the poller can be exercised against
//! in-memory fakes.

mod review;
mod telegram;

// Re-export traits
pub use review::StatusSource;
pub use telegram::Messenger;

// Re-export implementations
pub use review::ReviewApiSource;
pub use telegram::TelegramMessenger;
