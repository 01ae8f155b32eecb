//! Default parameters applied to new search jobs.

use serde::{Deserialize, Serialize};

/// Defaults for search-job creation.
///
/// Every field is optional; unset fields leave the parameter to the caller
/// or the server. Field names match the REST parameter names so a defaults
/// file reads like a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobDefaults {
    /// Earliest time for searches (e.g., "-24h").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_time: Option<String>,
    /// Latest time for searches (e.g., "now").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
    /// Seconds of inactivity before the server cancels the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_cancel: Option<u32>,
    /// Seconds the server keeps the job after it stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_buckets: Option<u32>,
    /// App namespace to restrict searches to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl JobDefaults {
    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: JobDefaults) -> JobDefaults {
        JobDefaults {
            earliest_time: self.earliest_time.or(fallback.earliest_time),
            latest_time: self.latest_time.or(fallback.latest_time),
            max_count: self.max_count.or(fallback.max_count),
            auto_cancel: self.auto_cancel.or(fallback.auto_cancel),
            timeout: self.timeout.or(fallback.timeout),
            status_buckets: self.status_buckets.or(fallback.status_buckets),
            namespace: self.namespace.or(fallback.namespace),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &JobDefaults::default()
    }
}
