//! Report generation port trait.

use crate::domain::benchmark::MeasurementRecord;
use crate::domain::error::TickbenchError;
use std::path::Path;

/// Port for writing benchmark reports.
pub trait ReportPort {
    fn write(
        &self,
        records: &[MeasurementRecord],
        window_size: usize,
        output_dir: &Path,
    ) -> Result<(), TickbenchError>;
}
