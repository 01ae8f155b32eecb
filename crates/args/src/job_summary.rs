//! Arguments for a job's field summary (`GET search/jobs/{sid}/summary`).

use crate::container::Args;
use crate::keys::ParamKey;
use crate::value::ArgValue;

/// Builder for job summary parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobSummaryArgs {
    args: Args,
}

impl JobSummaryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: ParamKey, value: impl Into<ArgValue>) -> Self {
        self.args.put(key, value);
        self
    }

    /// Earliest time of the summarized window.
    pub fn earliest_time(self, time: impl Into<String>) -> Self {
        self.set(ParamKey::EarliestTime, ArgValue::Text(time.into()))
    }

    /// Fields to return for the event set.
    pub fn field_list<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set(ParamKey::FieldList, ArgValue::joined(fields))
    }

    /// Whether to add histogram data to the summary.
    pub fn histogram(self, histogram: bool) -> Self {
        self.set(ParamKey::Histogram, histogram)
    }

    /// Latest time of the summarized window.
    pub fn latest_time(self, time: impl Into<String>) -> Self {
        self.set(ParamKey::LatestTime, ArgValue::Text(time.into()))
    }

    /// Fraction of results (0 to 1) a key must occur in to be displayed.
    /// Not range-checked locally.
    pub fn min_frequency(self, fraction: f64) -> Self {
        self.set(ParamKey::MinFrequency, fraction)
    }

    /// UTC time format for output. Defaults to `time_format` on the server.
    pub fn output_time_format(self, format: impl Into<String>) -> Self {
        self.set(ParamKey::OutputTimeFormat, ArgValue::Text(format.into()))
    }

    /// Substring that every returned event must contain in a value or tag.
    pub fn search(self, filter: impl Into<String>) -> Self {
        self.set(ParamKey::Search, ArgValue::Text(filter.into()))
    }

    /// Format for parsing `earliest_time`/`latest_time`.
    /// The server default is `%m/%d/%Y:%H:%M:%S`.
    pub fn time_format(self, format: impl Into<String>) -> Self {
        self.set(ParamKey::TimeFormat, ArgValue::Text(format.into()))
    }

    /// How many of the most frequent items to return per key.
    pub fn top_count(self, count: u32) -> Self {
        self.set(ParamKey::TopCount, count)
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&ArgValue> {
        self.args.get(key)
    }

    pub fn as_args(&self) -> &Args {
        &self.args
    }

    pub fn into_args(self) -> Args {
        self.args
    }
}

impl AsRef<Args> for JobSummaryArgs {
    fn as_ref(&self) -> &Args {
        &self.args
    }
}

impl From<JobSummaryArgs> for Args {
    fn from(summary: JobSummaryArgs) -> Self {
        summary.args
    }
}
