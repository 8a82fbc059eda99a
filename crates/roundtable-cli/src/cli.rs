//! CLI argument definitions.

use clap::Parser;

/// Roundtable — multi-persona PRD debate service.
#[derive(Debug, Parser)]
#[command(name = "roundtable", version, about)]
pub struct Cli {
    /// Host to bind the API server to.
    #[arg(long, default_value = "127.0.0.1", env = "ROUNDTABLE_HOST")]
    pub host: String,

    /// Port to bind the API server to.
    #[arg(long, default_value_t = 8788, env = "ROUNDTABLE_PORT")]
    pub port: u16,

    /// Oracle model identifier.
    #[arg(long, default_value = "gemini-2.0-flash", env = "GEMINI_MODEL")]
    pub model: String,

    /// Per-call oracle timeout in seconds.
    #[arg(long, default_value_t = 60, env = "ROUNDTABLE_ORACLE_TIMEOUT_SECS")]
    pub oracle_timeout_secs: u64,

    /// Minimum delay between debate turns in milliseconds.
    #[arg(long, default_value_t = 2500, env = "ROUNDTABLE_TURN_DELAY_MS")]
    pub turn_delay_ms: u64,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["roundtable"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8788);
        assert_eq!(cli.model, "gemini-2.0-flash");
        assert_eq!(cli.oracle_timeout_secs, 60);
        assert_eq!(cli.turn_delay_ms, 2500);
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::parse_from(["roundtable", "--port", "9000", "--log-level", "debug"]);
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.log_level, "debug");
    }
}
