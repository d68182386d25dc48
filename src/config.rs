//! Run parameters and their command-line overrides.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_WORKERS: u32 = 4;
pub const DEFAULT_INCREMENTS: u32 = 5;
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(700);

/// Parameters of one run: how many workers, how many increments each
/// performs, and how long one unit of simulated work takes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub workers: u32,
    pub increments: u32,
    pub work_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            workers: DEFAULT_WORKERS,
            increments: DEFAULT_INCREMENTS,
            work_delay: DEFAULT_WORK_DELAY,
        }
    }
}

/// Rejected command line.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {name}: expected a whole number")]
    NotANumber { name: &'static str, value: String },
    #[error("{name} must be at least 1")]
    Zero { name: &'static str },
    #[error("unexpected extra argument `{0}`")]
    ExtraArgument(String),
}

impl RunConfig {
    /// Parses positional overrides: `[workers] [increments] [delay_ms]`.
    /// Positions not given keep their defaults.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter();

        if let Some(raw) = args.next() {
            config.workers = parse_field("workers", &raw)?;
            if config.workers == 0 {
                return Err(ConfigError::Zero { name: "workers" });
            }
        }
        if let Some(raw) = args.next() {
            config.increments = parse_field("increments", &raw)?;
        }
        if let Some(raw) = args.next() {
            let millis: u64 = parse_field("delay_ms", &raw)?.into();
            config.work_delay = Duration::from_millis(millis);
        }
        if let Some(extra) = args.next() {
            return Err(ConfigError::ExtraArgument(extra));
        }

        Ok(config)
    }
}

fn parse_field(name: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_yields_defaults() {
        let config = RunConfig::from_args(args(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.workers, 4);
        assert_eq!(config.increments, 5);
        assert_eq!(config.work_delay, Duration::from_millis(700));
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config = RunConfig::from_args(args(&["8"])).unwrap();
        assert_eq!(config.workers, 8);
        assert_eq!(config.increments, DEFAULT_INCREMENTS);
        assert_eq!(config.work_delay, DEFAULT_WORK_DELAY);
    }

    #[test]
    fn full_override() {
        let config = RunConfig::from_args(args(&["2", "3", "10"])).unwrap();
        assert_eq!(
            config,
            RunConfig {
                workers: 2,
                increments: 3,
                work_delay: Duration::from_millis(10),
            }
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = RunConfig::from_args(args(&["four"])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                name: "workers",
                value: "four".to_string(),
            }
        );
        assert!(RunConfig::from_args(args(&["4", "-5"])).is_err());
    }

    #[test]
    fn rejects_zero_workers() {
        let err = RunConfig::from_args(args(&["0"])).unwrap_err();
        assert_eq!(err, ConfigError::Zero { name: "workers" });
    }

    #[test]
    fn rejects_extra_arguments() {
        let err = RunConfig::from_args(args(&["4", "5", "700", "9"])).unwrap_err();
        assert_eq!(err, ConfigError::ExtraArgument("9".to_string()));
    }

    #[test]
    fn zero_increments_and_zero_delay_are_valid() {
        let config = RunConfig::from_args(args(&["1", "0", "0"])).unwrap();
        assert_eq!(config.increments, 0);
        assert_eq!(config.work_delay, Duration::ZERO);
    }
}
