//! Markdown complexity report with SVG charts.
//!
//! Writes four files into the output directory:
//! - `report.md`: metrics, scaling comparison and complexity notes
//! - `runtime.svg`, `memory.svg`: line charts referenced by the report
//! - `results.csv`: the raw measurement records

pub mod chart_svg;
pub mod tables;

use crate::adapters::records_csv;
use crate::domain::analysis::compare_by_size;
use crate::domain::benchmark::{MeasurementRecord, BYTES_PER_MEGABYTE};
use crate::domain::error::TickbenchError;
use crate::ports::report_port::ReportPort;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

pub const REPORT_FILE: &str = "report.md";
pub const RUNTIME_CHART_FILE: &str = "runtime.svg";
pub const MEMORY_CHART_FILE: &str = "memory.svg";
pub const RESULTS_FILE: &str = "results.csv";

/// Windowed strategy budget at the largest input size.
pub const RUNTIME_REQUIREMENT_SECONDS: f64 = 1.0;
pub const MEMORY_REQUIREMENT_MB: f64 = 100.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownReportAdapter;

impl ReportPort for MarkdownReportAdapter {
    fn write(
        &self,
        records: &[MeasurementRecord],
        window_size: usize,
        output_dir: &Path,
    ) -> Result<(), TickbenchError> {
        fs::create_dir_all(output_dir).map_err(|e| TickbenchError::Report {
            reason: format!("failed to create {}: {}", output_dir.display(), e),
        })?;

        let write_file = |name: &str, content: &str| {
            let path = output_dir.join(name);
            fs::write(&path, content).map_err(|e| TickbenchError::Report {
                reason: format!("failed to write {}: {}", path.display(), e),
            })
        };

        write_file(RUNTIME_CHART_FILE, &chart_svg::runtime_chart(records, window_size))?;
        write_file(MEMORY_CHART_FILE, &chart_svg::memory_chart(records, window_size))?;
        write_file(REPORT_FILE, &render(records, window_size))?;

        let results_path = output_dir.join(RESULTS_FILE);
        let file = File::create(&results_path)?;
        records_csv::write_records(BufWriter::new(file), records)?;

        info!(dir = %output_dir.display(), "report written");
        Ok(())
    }
}

/// Full Markdown report body.
pub fn render(records: &[MeasurementRecord], window_size: usize) -> String {
    let mut output = String::new();
    output.push_str(&render_header(window_size));
    output.push_str(&tables::render_metrics_table(records));
    output.push_str(&tables::render_scaling_table(records));
    output.push_str(&render_summary(records));
    output.push_str(&render_charts());
    output.push_str(&render_complexity_annotations(window_size));
    output
}

fn render_header(window_size: usize) -> String {
    format!("# Complexity Analysis Report\n\n**Window Size:** {}\n\n", window_size)
}

/// Findings across all sizes: average speedup, naive memory growth, the
/// memory ratio at the largest size, and the windowed budget check.
pub fn render_summary(records: &[MeasurementRecord]) -> String {
    let comparisons = compare_by_size(records);
    let mut output = String::from("## Summary\n\n");
    let Some(largest) = comparisons.iter().max_by_key(|c| c.ticks) else {
        output.push_str("_Both strategies are needed for a summary._\n\n");
        return output;
    };

    let speedups: Vec<f64> = comparisons
        .iter()
        .map(|c| c.speedup)
        .filter(|s| *s > 0.0)
        .collect();
    let average_speedup = if speedups.is_empty() {
        0.0
    } else {
        speedups.iter().sum::<f64>() / speedups.len() as f64
    };

    let mb = |bytes: usize| bytes as f64 / BYTES_PER_MEGABYTE;
    let naive_growth: Vec<String> = comparisons
        .iter()
        .map(|c| {
            format!(
                "{} at {} ticks",
                tables::format_memory(mb(c.naive_memory_bytes)),
                tables::format_count(c.ticks)
            )
        })
        .collect();
    let windowed_constant = comparisons
        .iter()
        .all(|c| c.windowed_memory_bytes == largest.windowed_memory_bytes);

    output.push_str("### Runtime\n\n");
    output.push_str(&format!(
        "- Average speedup of windowed over naive: **{:.2}x** across {} input sizes.\n\n",
        average_speedup,
        comparisons.len()
    ));

    output.push_str("### Memory\n\n");
    output.push_str(&format!(
        "- Naive memory grows with input: {}.\n",
        naive_growth.join(", ")
    ));
    if windowed_constant {
        output.push_str(&format!(
            "- Windowed memory is constant at {} for every input size.\n",
            tables::format_memory(mb(largest.windowed_memory_bytes))
        ));
    } else {
        output.push_str("- Windowed memory varies across input sizes.\n");
    }
    let ratio = if largest.memory_ratio > 0.0 {
        format!("**{:.0}x** less", largest.memory_ratio)
    } else {
        "n/a".to_string()
    };
    output.push_str(&format!(
        "- At {} ticks, windowed uses {} memory than naive.\n\n",
        tables::format_count(largest.ticks),
        ratio
    ));

    let runtime = largest.windowed_runtime_seconds;
    let memory = mb(largest.windowed_memory_bytes);
    output.push_str("### Requirements\n\n");
    output.push_str(&format!(
        "- Runtime under {:.0} s for {} ticks: {} (actual {:.4} s).\n",
        RUNTIME_REQUIREMENT_SECONDS,
        tables::format_count(largest.ticks),
        met(runtime < RUNTIME_REQUIREMENT_SECONDS),
        runtime
    ));
    output.push_str(&format!(
        "- Memory under {:.0} MB for {} ticks: {} (actual {}).\n",
        MEMORY_REQUIREMENT_MB,
        tables::format_count(largest.ticks),
        met(memory < MEMORY_REQUIREMENT_MB),
        tables::format_memory(memory)
    ));
    output.push_str("- Signals: both strategies sum windows in exact fixed-point units and emit identical signals.\n\n");
    output
}

fn met(passed: bool) -> &'static str {
    if passed { "met" } else { "**not met**" }
}

fn render_charts() -> String {
    format!(
        "## Charts\n\n![Runtime vs input size]({})\n\n![Memory vs input size]({})\n\n",
        RUNTIME_CHART_FILE, MEMORY_CHART_FILE
    )
}

fn render_complexity_annotations(window_size: usize) -> String {
    let k = window_size;
    [
        "## Complexity Annotations".to_string(),
        String::new(),
        "### naive".to_string(),
        String::new(),
        format!("- **Time per tick:** O(k), k = {}: the last k prices are copied out of the history and summed.", k),
        "- **Time for n ticks:** O(n * k).".to_string(),
        "- **Space:** O(n). Every observed price is retained; memory grows linearly with input size.".to_string(),
        String::new(),
        "### windowed".to_string(),
        String::new(),
        "- **Time per tick:** O(1): one subtraction on eviction, one ring-buffer write, one addition, one multiply-and-compare against the sum.".to_string(),
        "- **Time for n ticks:** O(n).".to_string(),
        format!("- **Space:** O(k), k = {}. A preallocated ring buffer of k prices plus a running sum; memory is independent of input size.", k),
        String::new(),
        "### Memory accounting".to_string(),
        String::new(),
        "Memory is the byte count of each strategy instance's own retained state after replay (struct size plus stored prices), not a sample of process memory.".to_string(),
        String::new(),
    ]
    .join("\n")
}
