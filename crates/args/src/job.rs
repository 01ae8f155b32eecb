//! Arguments for creating a search job (`POST search/jobs`).
//!
//! # What this module handles:
//! - Typed setters for every documented job-creation parameter
//! - Applying configured [`JobDefaults`] underneath caller values
//!
//! # What this module does NOT handle:
//! - Submitting the job or polling its status
//! - Validating time strings or numeric ranges (the server does)

use splunk_config::JobDefaults;
use tracing::debug;

use crate::container::Args;
use crate::keys::ParamKey;
use crate::modes::{ExecutionMode, SearchMode};
use crate::value::ArgValue;

/// Builder for search job creation parameters.
///
/// # Example
///
/// ```
/// use splunk_args::{ArgValue, ExecutionMode, JobArgs, ParamKey};
///
/// let args = JobArgs::new()
///     .search("search index=main | head 10")
///     .exec_mode(ExecutionMode::Blocking)
///     .earliest_time("-24h")
///     .auto_cancel(30);
///
/// assert_eq!(args.get(ParamKey::ExecMode), Some(&ArgValue::from("blocking")));
/// assert_eq!(args.get(ParamKey::AutoCancel), Some(&ArgValue::Int(30)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobArgs {
    args: Args,
}

impl JobArgs {
    /// Create an empty set of job arguments.
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: ParamKey, value: impl Into<ArgValue>) -> Self {
        self.args.put(key, value);
        self
    }

    /// Set the search query to run.
    pub fn search(self, query: impl Into<String>) -> Self {
        self.set(ParamKey::Search, ArgValue::Text(query.into()))
    }

    /// Seconds of inactivity after which to cancel the job. 0 means never.
    pub fn auto_cancel(self, seconds: u32) -> Self {
        self.set(ParamKey::AutoCancel, seconds)
    }

    /// Number of events to process after which to finalize. 0 means no limit.
    pub fn auto_finalize_event_count(self, events: u32) -> Self {
        self.set(ParamKey::AutoFinalizeEventCount, events)
    }

    /// Seconds of inactivity after which to pause the job. 0 means never.
    pub fn auto_pause(self, seconds: u32) -> Self {
        self.set(ParamKey::AutoPause, seconds)
    }

    /// Earliest time of the search window.
    ///
    /// A UTC time (with fractional seconds), a relative time specifier
    /// (`-24h`), or a string in `time_format`.
    pub fn earliest_time(self, time: impl Into<String>) -> Self {
        self.set(ParamKey::EarliestTime, ArgValue::Text(time.into()))
    }

    /// Whether to enable lookups. Lookups can slow searches significantly.
    pub fn enable_lookups(self, enable: bool) -> Self {
        self.set(ParamKey::EnableLookups, enable)
    }

    pub fn exec_mode(self, mode: ExecutionMode) -> Self {
        self.set(ParamKey::ExecMode, mode)
    }

    /// Whether this search causes bundle synchronization with all peers.
    pub fn force_bundle_replication(self, force: bool) -> Self {
        self.set(ParamKey::ForceBundleReplication, force)
    }

    /// Search ID (SID). The server generates one when unset.
    pub fn id(self, sid: impl Into<String>) -> Self {
        self.set(ParamKey::Id, ArgValue::Text(sid.into()))
    }

    /// Latest time of the search window. Same formats as [`Self::earliest_time`].
    pub fn latest_time(self, time: impl Into<String>) -> Self {
        self.set(ParamKey::LatestTime, ArgValue::Text(time.into()))
    }

    /// Number of events accessible in any status bucket.
    ///
    /// In transforming mode this is also the maximum number of results to
    /// store: `offset + count <= max_count` in every results call.
    pub fn max_count(self, count: u32) -> Self {
        self.set(ParamKey::MaxCount, count)
    }

    /// Seconds to run before finalizing. 0 means never finalize.
    pub fn max_time(self, seconds: u32) -> Self {
        self.set(ParamKey::MaxTime, seconds)
    }

    /// Application namespace to restrict the search to.
    pub fn namespace(self, app: impl Into<String>) -> Self {
        self.set(ParamKey::Namespace, ArgValue::Text(app.into()))
    }

    /// Absolute time used as "now" by relative time specifiers in the search.
    pub fn now(self, time: impl Into<String>) -> Self {
        self.set(ParamKey::Now, ArgValue::Text(time.into()))
    }

    /// Seconds between reduce phases on accumulated map values.
    pub fn reduce_frequency(self, seconds: u32) -> Self {
        self.set(ParamKey::ReduceFrequency, seconds)
    }

    /// Whether to reload macro definitions from macros.conf.
    pub fn reload_macros(self, reload: bool) -> Self {
        self.set(ParamKey::ReloadMacros, reload)
    }

    /// Servers (possibly wildcarded) to pull raw events from. Also applies
    /// to subsearches.
    pub fn remote_server_list<I, S>(self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set(ParamKey::RemoteServerList, ArgValue::joined(servers))
    }

    /// Fields that the events and summary endpoints include even when the
    /// search does not reference them.
    pub fn required_field_list<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set(ParamKey::RequiredFieldList, ArgValue::joined(fields))
    }

    /// Real-time only: whether the indexer blocks when this search's queue is full.
    pub fn realtime_blocking(self, blocking: bool) -> Self {
        self.set(ParamKey::RealtimeBlocking, blocking)
    }

    /// Real-time only: whether the indexer pre-filters events.
    pub fn realtime_index_filter(self, filter: bool) -> Self {
        self.set(ParamKey::RealtimeIndexFilter, filter)
    }

    /// Real-time only: maximum seconds to block when `rt_blocking` is set.
    /// 0 means no limit.
    pub fn realtime_max_block_seconds(self, seconds: u32) -> Self {
        self.set(ParamKey::RealtimeMaxBlockSeconds, seconds)
    }

    /// Real-time only: queue size, in events, the indexer uses for this search.
    pub fn realtime_queue_size(self, events: u32) -> Self {
        self.set(ParamKey::RealtimeQueueSize, events)
    }

    /// Register a search state listener.
    ///
    /// Format: `search_state;results_condition;http_method;uri;`, for example
    /// `onResults;true;POST;/servicesNS/admin/search/saved/search/foobar/notify;`.
    pub fn search_listener(self, listener: impl Into<String>) -> Self {
        self.set(ParamKey::SearchListener, ArgValue::Text(listener.into()))
    }

    pub fn search_mode(self, mode: SearchMode) -> Self {
        self.set(ParamKey::SearchMode, mode)
    }

    /// Whether to run the search in a separate process. Searches against
    /// indexes must.
    pub fn spawn_process(self, spawn: bool) -> Self {
        self.set(ParamKey::SpawnProcess, spawn)
    }

    /// Maximum number of status buckets. 0 disables timeline information.
    pub fn status_buckets(self, buckets: u32) -> Self {
        self.set(ParamKey::StatusBuckets, buckets)
    }

    /// Whether to wait for bundle replication to complete.
    pub fn sync_bundle_replication(self, sync: bool) -> Self {
        self.set(ParamKey::SyncBundleReplication, sync)
    }

    /// Format for parsing time strings in `earliest_time`/`latest_time`.
    /// The server default is ISO-8601.
    pub fn time_format(self, format: impl Into<String>) -> Self {
        self.set(ParamKey::TimeFormat, ArgValue::Text(format.into()))
    }

    /// Seconds to keep the job after processing stops.
    pub fn timeout(self, seconds: u32) -> Self {
        self.set(ParamKey::Timeout, seconds)
    }

    /// Apply configured defaults to every parameter not already set.
    pub fn with_defaults(mut self, defaults: &JobDefaults) -> Self {
        let layer: [(ParamKey, Option<ArgValue>); 7] = [
            (
                ParamKey::EarliestTime,
                defaults.earliest_time.as_ref().map(ArgValue::from),
            ),
            (
                ParamKey::LatestTime,
                defaults.latest_time.as_ref().map(ArgValue::from),
            ),
            (ParamKey::MaxCount, defaults.max_count.map(ArgValue::from)),
            (ParamKey::AutoCancel, defaults.auto_cancel.map(ArgValue::from)),
            (ParamKey::Timeout, defaults.timeout.map(ArgValue::from)),
            (
                ParamKey::StatusBuckets,
                defaults.status_buckets.map(ArgValue::from),
            ),
            (
                ParamKey::Namespace,
                defaults.namespace.as_ref().map(ArgValue::from),
            ),
        ];

        for (key, value) in layer {
            let Some(value) = value else { continue };
            if !self.args.contains_key(key) {
                debug!(key = %key, "Applying job default");
                self.args.put(key, value);
            }
        }
        self
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&ArgValue> {
        self.args.get(key)
    }

    pub fn as_args(&self) -> &Args {
        &self.args
    }

    pub fn into_args(self) -> Args {
        debug!(
            keys = ?self.args.keys().collect::<Vec<_>>(),
            "Built search job arguments"
        );
        self.args
    }
}

impl AsRef<Args> for JobArgs {
    fn as_ref(&self) -> &Args {
        &self.args
    }
}

impl From<JobArgs> for Args {
    fn from(job: JobArgs) -> Self {
        job.into_args()
    }
}
