//! REST parameter-name table.
//!
//! Every builder in this crate writes through [`ParamKey`], so each wire
//! spelling is declared exactly once. Names follow the Splunk REST API
//! reference verbatim; compatibility depends on the exact spelling.

use std::str::FromStr;

use crate::error::ArgsError;

wire_table! {
    /// Parameter names accepted by the endpoints this crate builds for.
    pub enum ParamKey {
        // search/jobs (create)
        AutoCancel => "auto_cancel",
        AutoFinalizeEventCount => "auto_finalize_ec",
        AutoPause => "auto_pause",
        EarliestTime => "earliest_time",
        EnableLookups => "enable_lookups",
        ExecMode => "exec_mode",
        ForceBundleReplication => "force_bundle_replication",
        Id => "id",
        LatestTime => "latest_time",
        MaxCount => "max_count",
        MaxTime => "max_time",
        Namespace => "namespace",
        Now => "now",
        ReduceFrequency => "reduce_freq",
        ReloadMacros => "reload_macros",
        RemoteServerList => "remote_server_list",
        RequiredFieldList => "rf",
        RealtimeBlocking => "rt_blocking",
        RealtimeIndexFilter => "rt_indexfilter",
        RealtimeMaxBlockSeconds => "rt_maxblocksecs",
        RealtimeQueueSize => "rt_queue_size",
        Search => "search",
        SearchListener => "search_listener",
        SearchMode => "search_mode",
        SpawnProcess => "spawn_process",
        StatusBuckets => "status_buckets",
        SyncBundleReplication => "sync_bundle_replication",
        TimeFormat => "time_format",
        Timeout => "timeout",

        // search/jobs/{sid}/summary
        FieldList => "f",
        Histogram => "histogram",
        MinFrequency => "min_freq",
        OutputTimeFormat => "output_time_format",
        TopCount => "top_count",

        // authentication/users (create)
        Name => "name",
        Password => "password",
        Roles => "roles",
        RealName => "realname",
        Email => "email",
        DefaultApp => "defaultApp",
    }
}

impl FromStr for ParamKey {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ArgsError::UnknownParamKey(s.to_string()))
    }
}

impl From<ParamKey> for String {
    fn from(key: ParamKey) -> Self {
        key.as_str().to_string()
    }
}
