//! Environment variable names read by the defaults loader.

/// Earliest time for new search jobs (e.g. `-24h`).
pub const ENV_EARLIEST_TIME: &str = "SPLUNK_EARLIEST_TIME";

/// Latest time for new search jobs (e.g. `now`).
pub const ENV_LATEST_TIME: &str = "SPLUNK_LATEST_TIME";

/// Maximum events per status bucket (`max_count`).
pub const ENV_MAX_COUNT: &str = "SPLUNK_MAX_COUNT";

/// Seconds of inactivity before a job is cancelled (`auto_cancel`).
pub const ENV_AUTO_CANCEL: &str = "SPLUNK_AUTO_CANCEL";

/// Seconds to keep a job after it stops (`timeout`).
pub const ENV_JOB_TIMEOUT: &str = "SPLUNK_JOB_TIMEOUT";

/// Maximum number of status buckets (`status_buckets`).
pub const ENV_STATUS_BUCKETS: &str = "SPLUNK_STATUS_BUCKETS";

/// Application namespace searches are restricted to (`namespace`).
pub const ENV_APP: &str = "SPLUNK_APP";

/// Path to a JSON defaults file.
pub const ENV_DEFAULTS_PATH: &str = "SPLUNK_DEFAULTS_PATH";

/// Set to `true` or `1` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
