//! Response shape validation
//!
//! The review API is expected to return an object with a `homeworks` array.
//! Violations are logged and degrade to "no records": the loop treats an
//! empty list as "nothing to report", never as a fatal condition.

use serde_json::Value;
use tracing::{error, warn};

use homewatch_core::domain::homework::HomeworkRecord;

/// Extracts the homework list from a raw API response
///
/// Returns every record that could be read; an empty vec for any structural
/// violation. Never panics, never errors.
pub fn extract_homeworks(response: &Value) -> Vec<HomeworkRecord> {
    let Some(object) = response.as_object() else {
        error!("API response is not an object");
        return Vec::new();
    };

    let Some(homeworks) = object.get("homeworks") else {
        if object.is_empty() {
            error!("API response object is empty");
        } else {
            error!("API response has no homeworks field");
        }
        return Vec::new();
    };

    let Some(entries) = homeworks.as_array() else {
        error!("homeworks field is not an array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping unreadable homework entry: {}", e);
                None
            }
        })
        .collect()
}
