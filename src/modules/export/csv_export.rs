//! CSV Export

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::Record;

/// Write records to a CSV file, header first
pub fn write_records<R: Record>(path: &Path, records: &[&R]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    wtr.write_record(R::csv_header())?;
    for record in records {
        wtr.write_record(record.csv_row())?;
    }

    wtr.flush()?;
    Ok(())
}
