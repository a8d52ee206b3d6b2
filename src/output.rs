//! Report rendering.
//!
//! Supports a plain two-section text listing and pretty-printed JSON.

use anyhow::Result;
use std::fmt::Write;

use crate::analyzers::types::RouteReport;

/// Renders the carrier minima and the mean/median difference as two labelled
/// sections separated by a blank line.
pub fn render_text(report: &RouteReport) -> String {
    let origin = &report.route.origin;
    let destination = &report.route.destination;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Minimum flight time between {origin} and {destination} for each carrier (in minutes):"
    );
    if report.min_duration_by_carrier.is_empty() {
        let _ = writeln!(out, "(no flights)");
    }
    for (carrier, minutes) in &report.min_duration_by_carrier {
        let _ = writeln!(out, "{carrier}: {minutes}");
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Difference between the mean and median price for flights between {origin} and {destination}:"
    );
    let _ = writeln!(out, "{}", report.mean_median_diff);

    out
}

/// Renders the whole report as pretty-printed JSON.
pub fn render_json(report: &RouteReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
