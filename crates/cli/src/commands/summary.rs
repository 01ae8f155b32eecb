//! Summary command implementation.

use anyhow::Result;
use clap::Args as ClapArgs;
use splunk_args::{Args, JobSummaryArgs};
use tracing::info;

#[derive(Debug, ClapArgs)]
pub struct SummaryOptions {
    /// Earliest time of the summarized window
    #[arg(short, long, allow_hyphen_values = true)]
    pub earliest: Option<String>,

    /// Latest time of the summarized window
    #[arg(short, long, allow_hyphen_values = true)]
    pub latest: Option<String>,

    /// Field to summarize (repeatable)
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Include histogram data
    #[arg(long)]
    pub histogram: bool,

    /// Minimum fraction of events a field must appear in (0 to 1)
    #[arg(long)]
    pub min_freq: Option<f64>,

    /// Number of top values to return per field
    #[arg(long)]
    pub top_count: Option<u32>,

    /// Filter applied to the events before summarizing
    #[arg(long)]
    pub search: Option<String>,
}

/// Build the job-summary arguments for `opts`.
pub fn run(opts: SummaryOptions) -> Result<Args> {
    info!("Staging job summary arguments");

    let mut summary = JobSummaryArgs::new();
    if let Some(earliest) = opts.earliest {
        summary = summary.earliest_time(earliest);
    }
    if let Some(latest) = opts.latest {
        summary = summary.latest_time(latest);
    }
    if !opts.fields.is_empty() {
        summary = summary.field_list(&opts.fields);
    }
    if opts.histogram {
        summary = summary.histogram(true);
    }
    // Out-of-range fractions are passed through; the server rejects them.
    if let Some(fraction) = opts.min_freq {
        summary = summary.min_frequency(fraction);
    }
    if let Some(count) = opts.top_count {
        summary = summary.top_count(count);
    }
    if let Some(filter) = opts.search {
        summary = summary.search(filter);
    }

    Ok(summary.into_args())
}
