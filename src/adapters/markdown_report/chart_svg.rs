//! SVG line charts of benchmark measurements.
//!
//! One polyline per strategy kind, x = tick count, y = the chosen metric.
//! Both axes are linear and scaled to the data range.

use crate::domain::benchmark::MeasurementRecord;
use crate::domain::strategy::StrategyKind;
use std::fmt::Write;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const PADDING: f64 = 56.0;

pub fn runtime_chart(records: &[MeasurementRecord], window_size: usize) -> String {
    render_chart(
        records,
        &format!("Runtime vs Input Size (Window Size: {})", window_size),
        "Runtime (seconds)",
        |r| r.runtime_seconds,
    )
}

pub fn memory_chart(records: &[MeasurementRecord], window_size: usize) -> String {
    render_chart(
        records,
        &format!("Memory Usage vs Input Size (Window Size: {})", window_size),
        "Memory (MB)",
        |r| r.memory_megabytes,
    )
}

fn series_color(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::Naive => "#d62728",
        StrategyKind::Windowed => "#1f77b4",
    }
}

fn render_chart(
    records: &[MeasurementRecord],
    title: &str,
    y_label: &str,
    metric: impl Fn(&MeasurementRecord) -> f64,
) -> String {
    if records.is_empty() {
        return String::new();
    }

    let min_x = records.iter().map(|r| r.ticks as f64).fold(f64::INFINITY, f64::min);
    let max_x = records.iter().map(|r| r.ticks as f64).fold(f64::NEG_INFINITY, f64::max);
    let max_y = records.iter().map(&metric).fold(0.0, f64::max);

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;

    let x_range = max_x - min_x;
    let scale_x = if x_range > 0.0 { plot_width / x_range } else { 0.0 };
    let scale_y = if max_y > 0.0 { plot_height / max_y } else { 0.0 };

    let to_x = |ticks: usize| {
        if x_range > 0.0 {
            PADDING + (ticks as f64 - min_x) * scale_x
        } else {
            PADDING + plot_width / 2.0
        }
    };
    let to_y = |value: f64| HEIGHT - PADDING - value * scale_y;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
        w = WIDTH,
        h = HEIGHT
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="24" text-anchor="middle" font-size="15" font-family="sans-serif">{}</text>"#,
        WIDTH / 2.0,
        title
    );

    // Axes
    let _ = writeln!(
        svg,
        r#"<line x1="{p:.1}" y1="{top:.1}" x2="{p:.1}" y2="{bottom:.1}" stroke="black"/>"#,
        p = PADDING,
        top = PADDING,
        bottom = HEIGHT - PADDING
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{p:.1}" y1="{bottom:.1}" x2="{right:.1}" y2="{bottom:.1}" stroke="black"/>"#,
        p = PADDING,
        bottom = HEIGHT - PADDING,
        right = WIDTH - PADDING
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" font-family="sans-serif">Input Size (ticks)</text>"#,
        WIDTH / 2.0,
        HEIGHT - 16.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="16" y="{:.1}" text-anchor="middle" font-size="12" font-family="sans-serif" transform="rotate(-90 16 {:.1})">{}</text>"#,
        HEIGHT / 2.0,
        HEIGHT / 2.0,
        y_label
    );

    let mut legend_y = PADDING;
    for kind in StrategyKind::ALL {
        let mut series: Vec<&MeasurementRecord> =
            records.iter().filter(|r| r.strategy == kind).collect();
        if series.is_empty() {
            continue;
        }
        series.sort_by_key(|r| r.ticks);

        let points: Vec<String> = series
            .iter()
            .map(|r| format!("{:.1},{:.1}", to_x(r.ticks), to_y(metric(*r))))
            .collect();
        let color = series_color(kind);

        let _ = writeln!(
            svg,
            r#"<polyline class="{}" fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
            kind,
            color,
            points.join(" ")
        );
        for r in &series {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
                to_x(r.ticks),
                to_y(metric(*r)),
                color
            );
        }
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12" font-family="sans-serif" fill="{}">{}</text>"#,
            WIDTH - PADDING - 80.0,
            legend_y,
            color,
            kind
        );
        legend_y += 16.0;
    }

    svg.push_str("</svg>\n");
    svg
}
