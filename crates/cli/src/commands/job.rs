//! Job command implementation.
//!
//! Responsibilities:
//! - Map command-line options onto [`JobArgs`] setters.
//! - Apply configured job defaults to options the caller left unset.
//!
//! Does NOT handle:
//! - Loading the defaults (see `dispatch`).
//! - Validating time modifiers or numeric ranges (the server does).
//!
//! Invariants:
//! - Explicit options always win over configured defaults.
//! - Enumerated options are parsed exactly; `BLOCKING` is rejected.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use splunk_args::{Args, ExecutionMode, JobArgs, JobDefaults, SearchMode};
use tracing::info;

#[derive(Debug, ClapArgs)]
pub struct JobOptions {
    /// The search query (e.g., 'search index=main | head 10')
    pub query: String,

    /// Execution mode (normal, blocking, oneshot)
    #[arg(long)]
    pub exec_mode: Option<String>,

    /// Search mode (normal, realtime)
    #[arg(long)]
    pub search_mode: Option<String>,

    /// Earliest time for the search (e.g., '-24h', 'rt-5m')
    #[arg(short, long, allow_hyphen_values = true)]
    pub earliest: Option<String>,

    /// Latest time for the search (e.g., 'now', 'rt')
    #[arg(short, long, allow_hyphen_values = true)]
    pub latest: Option<String>,

    /// Seconds of inactivity before the job is cancelled (0 = never)
    #[arg(long)]
    pub auto_cancel: Option<u32>,

    /// Maximum number of results per status bucket
    #[arg(long)]
    pub max_count: Option<u32>,

    /// Seconds to keep the job after it was last accessed
    #[arg(long)]
    pub timeout: Option<u32>,

    /// Number of status buckets to generate
    #[arg(long)]
    pub status_buckets: Option<u32>,

    /// Field the search must extract (repeatable)
    #[arg(long = "rf", value_name = "FIELD")]
    pub required_fields: Vec<String>,

    /// Search peer to run on (repeatable, wildcards allowed)
    #[arg(long = "remote-server", value_name = "SERVER")]
    pub remote_servers: Vec<String>,

    /// Search ID to assign to the job
    #[arg(long)]
    pub id: Option<String>,

    /// App namespace to run the search in
    #[arg(long)]
    pub namespace: Option<String>,

    /// Ignore configured job defaults
    #[arg(long)]
    pub no_defaults: bool,
}

/// Build the job-creation arguments for `opts`.
pub fn run(opts: JobOptions, defaults: Option<&JobDefaults>) -> Result<Args> {
    info!("Staging search job arguments");

    let mut job = JobArgs::new().search(opts.query);

    if let Some(mode) = opts.exec_mode.as_deref() {
        let mode: ExecutionMode = mode.parse().context("Invalid --exec-mode")?;
        job = job.exec_mode(mode);
    }
    if let Some(mode) = opts.search_mode.as_deref() {
        let mode: SearchMode = mode.parse().context("Invalid --search-mode")?;
        job = job.search_mode(mode);
    }
    if let Some(earliest) = opts.earliest {
        job = job.earliest_time(earliest);
    }
    if let Some(latest) = opts.latest {
        job = job.latest_time(latest);
    }
    if let Some(seconds) = opts.auto_cancel {
        job = job.auto_cancel(seconds);
    }
    if let Some(count) = opts.max_count {
        job = job.max_count(count);
    }
    if let Some(seconds) = opts.timeout {
        job = job.timeout(seconds);
    }
    if let Some(buckets) = opts.status_buckets {
        job = job.status_buckets(buckets);
    }
    if !opts.required_fields.is_empty() {
        job = job.required_field_list(&opts.required_fields);
    }
    if !opts.remote_servers.is_empty() {
        job = job.remote_server_list(&opts.remote_servers);
    }
    if let Some(sid) = opts.id {
        job = job.id(sid);
    }
    if let Some(app) = opts.namespace {
        job = job.namespace(app);
    }

    if let Some(defaults) = defaults {
        job = job.with_defaults(defaults);
    }

    Ok(job.into_args())
}
