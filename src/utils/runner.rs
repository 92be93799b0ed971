//! Benchmark data records and CSV export.

use crate::metrics::MetricsRecorder;

/// One instrumented scan invocation, ready for tabular export.
///
/// The recorder renders its own row; this record adds the harness context
/// (which algorithm, which variant, which input) around it.
pub struct RawScanRecord {
    pub algorithm: &'static str,
    pub variant: &'static str,
    pub distribution: &'static str,
    /// 1-based run index within the batch.
    pub run: usize,
    pub input_size: usize,
    pub metrics: MetricsRecorder,
}

/// Export scan records to a CSV file.
pub fn export_csv(path: &str, records: &[RawScanRecord]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(
        file,
        "Algorithm,Variant,Distribution,Run,{}",
        MetricsRecorder::CSV_HEADER
    )?;

    for record in records {
        writeln!(
            file,
            "{},{},{},{},{}",
            record.algorithm,
            record.variant,
            record.distribution,
            record.run,
            record.metrics.csv_row(record.input_size)
        )?;
    }

    Ok(())
}
