//! CSV dump of measurement records.

use crate::domain::benchmark::MeasurementRecord;
use crate::domain::error::TickbenchError;
use std::io::Write;

pub fn write_records<W: Write>(writer: W, records: &[MeasurementRecord]) -> Result<(), TickbenchError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record).map_err(|e| TickbenchError::Report {
            reason: format!("failed to serialize record: {}", e),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
