//! Business records, their filters and their summary statistics.

pub mod employee;
pub mod equipment;
pub mod error;
pub mod expense;
pub mod filter;
pub mod money;
pub mod payroll;
pub mod seed;
pub mod stats;
pub mod task;

use serde::Deserialize;

pub use error::{FilterError, RecordError};
pub use filter::{apply, RecordFilter, Selector};
pub use stats::{StatCard, Summarize};

/// A seed record that can be looked up and exported.
pub trait Record {
    /// Singular noun used in messages ("expense", "task").
    const KIND: &'static str;

    fn record_id(&self) -> String;

    /// Header row for CSV export.
    fn csv_header() -> &'static [&'static str];

    /// One CSV row, aligned with `csv_header`.
    fn csv_row(&self) -> Vec<String>;
}

/// Find a record by id. String ids compare case-insensitively.
pub fn find_by_id<'a, R: Record>(records: &'a [R], id: &str) -> Result<(usize, &'a R), RecordError> {
    let wanted = id.trim();
    records
        .iter()
        .enumerate()
        .find(|(_, record)| record.record_id().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| RecordError::NotFound {
            kind: R::KIND,
            id: wanted.to_string(),
        })
}

/// Which record set a page's header statistics are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatsScope {
    /// Statistics follow the active filters.
    #[default]
    Filtered,
    /// Statistics always cover the full seed.
    All,
}

impl StatsScope {
    pub fn title(&self) -> &'static str {
        match self {
            StatsScope::Filtered => "filtered",
            StatsScope::All => "all",
        }
    }

    /// Pick the record set to summarize.
    pub fn select<'a, R>(&self, all: &'a [R], visible: Vec<&'a R>) -> Vec<&'a R> {
        match self {
            StatsScope::Filtered => visible,
            StatsScope::All => all.iter().collect(),
        }
    }
}
