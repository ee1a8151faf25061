//! Status source service
//!
//! Wraps the review API client behind the trait the poller consumes.

use async_trait::async_trait;
use serde_json::Value;

use homewatch_client::{ReviewClient, Result};

/// Source of raw review-status responses
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches statuses updated since `from_date` (unix seconds)
    ///
    /// Returns the raw JSON body; shape validation happens downstream.
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// `StatusSource` backed by the real review API
pub struct ReviewApiSource {
    client: ReviewClient,
}

impl ReviewApiSource {
    /// Creates a source over an already-configured client
    pub fn new(client: ReviewClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusSource for ReviewApiSource {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.client.homework_statuses(from_date).await
    }
}
