//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use fanout_orchestration::interfaces::BatchResponse;

/// Format a result value for display, truncating very long decimals.
#[must_use]
pub fn format_value(value: &str, verbose: bool) -> String {
    if !verbose && value.len() > 60 {
        format!(
            "{}...{} ({} digits)",
            &value[..20],
            &value[value.len() - 20..],
            value.len()
        )
    } else {
        value.to_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Ratio of a baseline duration to a faster one, e.g. `"3.10x"`.
#[must_use]
pub fn format_speedup(baseline: Duration, other: Duration) -> String {
    if other.is_zero() {
        return "-".to_string();
    }
    format!("{:.2}x", baseline.as_secs_f64() / other.as_secs_f64())
}

/// Write a response body as pretty JSON to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &str, response: &BatchResponse) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, response)?;
    writeln!(file)?;
    Ok(())
}
