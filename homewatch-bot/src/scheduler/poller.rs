//! Status poller
//!
//! Drives the poll-diff-notify cycle forever. The poller owns the only two
//! pieces of cross-cycle state: the status seen on the previous cycle and
//! the fixed query-window start. Every failure below startup is contained
//! within its cycle; nothing here terminates the process.

use std::sync::Arc;

use serde_json::Value;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::scheduler::validate;
use crate::service::{Messenger, StatusSource};
use homewatch_core::domain::homework::{ReviewStatus, StatusError};

/// Poller that watches the most recent submission for status changes
pub struct StatusPoller {
    config: Config,
    source: Arc<dyn StatusSource>,
    messenger: Arc<dyn Messenger>,
    /// Status of the most recently seen submission, `None` until first seen
    last_status: Option<String>,
    /// Lower bound of the query window, fixed at process start
    from_date: i64,
}

impl StatusPoller {
    /// Creates a new poller; the query window opens at the current time
    pub fn new(config: Config, source: Arc<dyn StatusSource>, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            config,
            source,
            messenger,
            last_status: None,
            from_date: chrono::Utc::now().timestamp(),
        }
    }

    /// Starts the polling loop; runs until the task is cancelled
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            debug!("Polling for homework status updates");
            self.poll_once().await;
        }
    }

    /// Performs a single poll cycle
    async fn poll_once(&mut self) {
        let Some(response) = self.fetch().await else {
            return;
        };

        let homeworks = validate::extract_homeworks(&response);
        info!(count = homeworks.len(), "fetched homework list: {:?}", homeworks);

        let Some(latest) = homeworks.first() else {
            debug!("no homework records in the query window");
            return;
        };

        if latest.status == self.last_status {
            debug!("homework review status unchanged");
            return;
        }

        if latest.homework_name.is_none() {
            warn!("homework record has no name field");
        }

        let verdict = match latest.verdict() {
            Ok(verdict) => verdict,
            Err(StatusError::Unrecognized(code)) => {
                error!(
                    homework = latest.display_name(),
                    code, "unrecognized review status, sending fallback verdict"
                );
                ReviewStatus::FALLBACK_VERDICT
            }
            Err(StatusError::MissingStatus) => {
                error!(
                    homework = latest.display_name(),
                    "homework record has no status field, skipping notification"
                );
                return;
            }
        };

        self.last_status = latest.status.clone();
        if self.messenger.send(verdict).await {
            info!(
                homework = latest.display_name(),
                status = ?self.last_status,
                "sent status change notification"
            );
        }
    }

    /// Fetches one response, classifying failures per the error taxonomy
    ///
    /// 404 means the endpoint itself is gone: notify. Transport and parse
    /// failures are program faults: notify best-effort. Any other HTTP error
    /// is logged only. All of them end the cycle without a result.
    async fn fetch(&self) -> Option<Value> {
        match self.source.fetch(self.from_date).await {
            Ok(response) => Some(response),
            Err(e) if e.is_not_found() => {
                let message = format!(
                    "Program failure: endpoint {} is unavailable. API response code: 404",
                    self.config.endpoint
                );
                error!("{}", message);
                if self.messenger.send(&message).await {
                    info!("sent endpoint unavailability notification");
                }
                None
            }
            Err(e) if e.is_program_fault() => {
                let message = format!("Program failure: {}", e);
                error!("{}", message);
                self.messenger.send(&message).await;
                None
            }
            Err(e) => {
                error!("request to the review endpoint failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;
    use async_trait::async_trait;
    use homewatch_client::ClientError;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    struct FakeSource {
        responses: Mutex<VecDeque<homewatch_client::Result<Value>>>,
    }

    impl FakeSource {
        fn new(responses: Vec<homewatch_client::Result<Value>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl StatusSource for FakeSource {
        async fn fetch(&self, _from_date: i64) -> homewatch_client::Result<Value> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(json!({"homeworks": []})))
        }
    }

    #[derive(Default)]
    struct FakeMessenger {
        sent: Mutex<Vec<String>>,
    }

    impl FakeMessenger {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Messenger for FakeMessenger {
        async fn send(&self, text: &str) -> bool {
            self.sent.lock().unwrap().push(text.to_string());
            true
        }
    }

    fn test_config() -> Config {
        Config {
            practicum_token: "pract".to_string(),
            telegram_token: "tele".to_string(),
            chat_id: "42".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
        }
    }

    fn poller(
        responses: Vec<homewatch_client::Result<Value>>,
    ) -> (StatusPoller, Arc<FakeMessenger>) {
        let messenger = Arc::new(FakeMessenger::default());
        let poller = StatusPoller::new(
            test_config(),
            FakeSource::new(responses),
            messenger.clone(),
        );
        (poller, messenger)
    }

    fn reviewing_body() -> Value {
        json!({"homeworks": [{"homework_name": "hw1", "status": "reviewing"}]})
    }

    #[tokio::test]
    async fn test_first_status_sends_one_notification() {
        let (mut poller, messenger) = poller(vec![Ok(reviewing_body())]);

        poller.poll_once().await;

        assert_eq!(poller.last_status.as_deref(), Some("reviewing"));
        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], ReviewStatus::Reviewing.verdict());
    }

    #[tokio::test]
    async fn test_unchanged_status_sends_nothing_more() {
        let (mut poller, messenger) = poller(vec![Ok(reviewing_body()), Ok(reviewing_body())]);

        poller.poll_once().await;
        poller.poll_once().await;

        assert_eq!(messenger.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_transition_sends_exactly_one_more() {
        let approved = json!({"homeworks": [{"homework_name": "hw1", "status": "approved"}]});
        let (mut poller, messenger) = poller(vec![Ok(reviewing_body()), Ok(approved)]);

        poller.poll_once().await;
        poller.poll_once().await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1], ReviewStatus::Approved.verdict());
        assert_eq!(poller.last_status.as_deref(), Some("approved"));
    }

    #[tokio::test]
    async fn test_endpoint_unavailable_notifies_and_keeps_state() {
        let (mut poller, messenger) =
            poller(vec![Err(ClientError::api_error(404, "not found"))]);

        poller.poll_once().await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("unavailable"));
        assert!(sent[0].contains("404"));
        assert_eq!(poller.last_status, None);
    }

    #[tokio::test]
    async fn test_other_http_error_is_silent() {
        let (mut poller, messenger) =
            poller(vec![Err(ClientError::api_error(500, "boom"))]);

        poller.poll_once().await;

        assert!(messenger.sent().is_empty());
        assert_eq!(poller.last_status, None);
    }

    #[tokio::test]
    async fn test_program_fault_notifies() {
        let (mut poller, messenger) =
            poller(vec![Err(ClientError::Parse("bad json".to_string()))]);

        poller.poll_once().await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("Program failure"));
    }

    #[tokio::test]
    async fn test_malformed_body_sends_nothing() {
        let (mut poller, messenger) = poller(vec![Ok(json!(["not", "an", "object"]))]);

        poller.poll_once().await;

        assert!(messenger.sent().is_empty());
        assert_eq!(poller.last_status, None);
    }

    #[tokio::test]
    async fn test_missing_homeworks_field_sends_nothing() {
        let (mut poller, messenger) = poller(vec![Ok(json!({"current_date": 1660000000}))]);

        poller.poll_once().await;

        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_status_sends_fallback_verdict() {
        let body = json!({"homeworks": [{"homework_name": "hw1", "status": "archived"}]});
        let (mut poller, messenger) = poller(vec![Ok(body)]);

        poller.poll_once().await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], ReviewStatus::FALLBACK_VERDICT);
        assert_eq!(poller.last_status.as_deref(), Some("archived"));
    }

    #[tokio::test]
    async fn test_run_can_be_stopped_between_cycles() {
        let (mut poller, messenger) = poller(vec![Ok(reviewing_body())]);

        // First interval tick fires immediately; the long poll interval then
        // parks the loop, so cancellation lands between cycles.
        let result = time::timeout(Duration::from_millis(100), poller.run()).await;

        assert!(result.is_err());
        assert_eq!(poller.last_status.as_deref(), Some("reviewing"));
        assert_eq!(messenger.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_status_skips_and_keeps_state() {
        let body = json!({"homeworks": [{"homework_name": "hw1"}]});
        let (mut poller, messenger) = poller(vec![Ok(reviewing_body()), Ok(body)]);

        poller.poll_once().await;
        poller.poll_once().await;

        assert_eq!(messenger.sent().len(), 1);
        assert_eq!(poller.last_status.as_deref(), Some("reviewing"));
    }
}
