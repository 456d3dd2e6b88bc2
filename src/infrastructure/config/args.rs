//! Console host command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Console host arguments.
#[derive(Debug, Parser)]
#[command(
    name = "simplecdn",
    version,
    about = "Tencent Cloud CDN cache management plugin for chat bots",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Command line to dispatch, e.g. `cdn https://example.com/a.jpg --preheat`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_command_keeps_flags() {
        let args = CliArgs::parse_from([
            "simplecdn",
            "cdn",
            "https://example.com/a.jpg",
            "--preheat",
        ]);

        assert_eq!(
            args.command,
            ["cdn", "https://example.com/a.jpg", "--preheat"]
        );
    }

    #[test]
    fn test_own_options_parse_before_command() {
        let args = CliArgs::parse_from([
            "simplecdn",
            "--log-level",
            "debug",
            "cdn",
            "example.com/x",
        ]);

        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.command, ["cdn", "example.com/x"]);
    }
}
