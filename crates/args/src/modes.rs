//! Enumerated parameter values for search jobs.
//!
//! Each constant renders to exactly one REST API string. Translation from
//! symbol to string is total; parsing a string back is exact-match only.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArgsError;

wire_table! {
    /// How the job-creation endpoint runs a search (`exec_mode`).
    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "lowercase")]
    pub enum ExecutionMode {
        /// Runs the search asynchronously and returns a job immediately.
        #[default]
        Normal => "normal",
        /// Runs the search synchronously; the job is returned once it is done.
        Blocking => "blocking",
        /// Runs a blocking search and returns its results instead of a job.
        Oneshot => "oneshot",
    }
}

wire_table! {
    /// Which data a search job reads (`search_mode`).
    ///
    /// A real-time search can also be requested with `earliest_time` and
    /// `latest_time` values that start with `rt`, regardless of this mode.
    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "lowercase")]
    pub enum SearchMode {
        /// Searches historical data.
        #[default]
        Normal => "normal",
        /// Searches live data as it arrives.
        Realtime => "realtime",
    }
}

impl FromStr for ExecutionMode {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ArgsError::UnknownWireValue {
            kind: "execution mode",
            value: s.to_string(),
            expected: Self::expected(),
        })
    }
}

impl FromStr for SearchMode {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ArgsError::UnknownWireValue {
            kind: "search mode",
            value: s.to_string(),
            expected: Self::expected(),
        })
    }
}
