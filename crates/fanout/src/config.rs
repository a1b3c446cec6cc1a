//! Application configuration from CLI flags and environment.

use std::num::ParseIntError;

use clap::Parser;

use fanout_core::constants::{DEFAULT_HOST, DEFAULT_PORT};

/// Batch factorial, Fibonacci and primality, run sequentially or fanned out.
///
/// Without `--op` it serves the HTTP API. With `--op` it runs one batch and
/// prints the report.
#[derive(Parser, Debug)]
#[command(name = "fanout", version, about)]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "FANOUT_HOST")]
    pub host: String,

    /// Port for the HTTP server.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "FANOUT_PORT")]
    pub port: u16,

    /// Run one operation instead of serving (e.g. concurrent_fib, or "all").
    #[arg(long)]
    pub op: Option<String>,

    /// Batch for --op, comma or space separated (e.g. "5,0,-2").
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub numbers: String,

    /// Run the op's kernel with both strategies and cross-check the results.
    #[arg(long)]
    pub compare: bool,

    /// Show the order in which tasks completed.
    #[arg(short, long)]
    pub details: bool,

    /// Verbose output (full-length results, debug logs).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only print the results array).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the JSON report to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Log filter directive (RUST_LOG takes precedence).
    #[arg(long, env = "FANOUT_LOG")]
    pub log: Option<String>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the `--numbers` list into a batch.
    pub fn batch(&self) -> Result<Vec<i64>, ParseIntError> {
        parse_numbers(&self.numbers)
    }

    /// Default log directive when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_directive(&self) -> String {
        if let Some(directive) = &self.log {
            return directive.clone();
        }
        match (self.verbose, self.op.is_some()) {
            (true, _) => "debug".to_string(),
            (false, true) => "warn".to_string(),
            (false, false) => "info".to_string(),
        }
    }
}

/// Parse a list like `"5, 0 -2"` into integers.
fn parse_numbers(s: &str) -> Result<Vec<i64>, ParseIntError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numbers_formats() {
        assert_eq!(parse_numbers("5,0,-2"), Ok(vec![5, 0, -2]));
        assert_eq!(parse_numbers(" 10 12 , 17 "), Ok(vec![10, 12, 17]));
        assert_eq!(parse_numbers(""), Ok(vec![]));
    }

    #[test]
    fn parse_numbers_rejects_garbage() {
        assert!(parse_numbers("1,two,3").is_err());
        assert!(parse_numbers("1.5").is_err());
    }

    #[test]
    fn config_defaults() {
        let config = AppConfig::try_parse_from(["fanout"]).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.op.is_none());
        assert_eq!(config.log_directive(), "info");
    }

    #[test]
    fn config_cli_run() {
        let config =
            AppConfig::try_parse_from(["fanout", "--op", "linear_fib", "-n", "-2,5"]).unwrap();
        assert_eq!(config.op.as_deref(), Some("linear_fib"));
        assert_eq!(config.batch(), Ok(vec![-2, 5]));
        assert_eq!(config.log_directive(), "warn");
    }

    #[test]
    fn config_log_override() {
        let config = AppConfig::try_parse_from(["fanout", "-v", "--log", "fanout_core=trace"])
            .unwrap();
        assert_eq!(config.log_directive(), "fanout_core=trace");
    }
}
