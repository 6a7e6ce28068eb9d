//! Table formatting for reports.
//!
//! Provides:
//! - Markdown metrics table (one row per measurement record)
//! - Markdown scaling table (naive vs windowed per input size)
//! - Plain-text console summary

use crate::domain::analysis::{compare_by_size, SizeComparison};
use crate::domain::benchmark::{MeasurementRecord, BYTES_PER_MEGABYTE};

/// Memory in KB when below 0.01 MB, otherwise MB.
pub fn format_memory(megabytes: f64) -> String {
    if megabytes < 0.01 {
        format!("{:.2} KB", megabytes * 1024.0)
    } else {
        format!("{:.2} MB", megabytes)
    }
}

/// Integer with thousands separators: 100000 -> "100,000".
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_ratio(value: f64) -> String {
    if value > 0.0 {
        format!("{:.1}x", value)
    } else {
        "n/a".to_string()
    }
}

pub fn render_metrics_table(records: &[MeasurementRecord]) -> String {
    let mut output = String::from("## Runtime and Memory Metrics\n\n");
    if records.is_empty() {
        output.push_str("_No measurements recorded._\n\n");
        return output;
    }

    output.push_str("| Strategy | Ticks | Runtime (s) | Memory |\n");
    output.push_str("|:---------|------:|------------:|-------:|\n");
    for r in records {
        output.push_str(&format!(
            "| {} | {} | {:.4} | {} |\n",
            r.strategy,
            format_count(r.ticks),
            r.runtime_seconds,
            format_memory(r.memory_megabytes)
        ));
    }
    output.push('\n');
    output
}

pub fn render_scaling_table(records: &[MeasurementRecord]) -> String {
    let comparisons = compare_by_size(records);
    let mut output = String::from("## Scaling Comparison\n\n");
    if comparisons.is_empty() {
        output.push_str("_Both strategies are needed for a comparison._\n\n");
        return output;
    }

    output.push_str("| Ticks | Naive (s) | Windowed (s) | Speedup | Naive Memory | Windowed Memory | Memory Ratio |\n");
    output.push_str("|------:|----------:|-------------:|--------:|-------------:|----------------:|-------------:|\n");
    for c in &comparisons {
        output.push_str(&render_scaling_row(c));
    }
    output.push('\n');
    output
}

fn render_scaling_row(c: &SizeComparison) -> String {
    format!(
        "| {} | {:.4} | {:.4} | {} | {} | {} | {} |\n",
        format_count(c.ticks),
        c.naive_runtime_seconds,
        c.windowed_runtime_seconds,
        format_ratio(c.speedup),
        format_memory(c.naive_memory_bytes as f64 / BYTES_PER_MEGABYTE),
        format_memory(c.windowed_memory_bytes as f64 / BYTES_PER_MEGABYTE),
        format_ratio(c.memory_ratio),
    )
}

pub fn render_console_summary(records: &[MeasurementRecord]) -> String {
    let mut output = format!(
        "{:<10} {:>10} {:>14} {:>12}\n",
        "Strategy", "Ticks", "Runtime (s)", "Memory (MB)"
    );
    output.push_str(&"-".repeat(49));
    output.push('\n');
    for r in records {
        output.push_str(&format!(
            "{:<10} {:>10} {:>14.4} {:>12.4}\n",
            r.strategy.as_str(),
            format_count(r.ticks),
            r.runtime_seconds,
            r.memory_megabytes
        ));
    }

    let comparisons = compare_by_size(records);
    if !comparisons.is_empty() {
        output.push('\n');
        for c in &comparisons {
            output.push_str(&format!(
                "{} ticks: windowed is {} faster, uses {} less memory\n",
                format_count(c.ticks),
                format_ratio(c.speedup),
                format_ratio(c.memory_ratio)
            ));
        }
    }
    output
}
