use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "edgecast")]
#[command(about = "Prints where rays from a source point through touch points leave the screen")]
pub struct Args {
    /// TOML file with `source`, `touches` and `bounds`. Built-in samples are used if absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Also print a line for touches without an intercept.
    #[arg(long)]
    pub show_missing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["edgecast"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.show_missing);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Warn);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "edgecast",
            "--config",
            "touches.toml",
            "--log-level",
            "trace",
            "--show-missing",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("touches.toml")));
        assert!(args.show_missing);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Trace);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Args::try_parse_from(["edgecast", "--log-level", "loud"]).is_err());
    }
}
