//! Logging setup.
//!
//! Two outputs:
//! - stderr, human-readable, quiet by default (warnings and errors)
//! - a JSONL file, written through a non-blocking appender, at the level
//!   chosen by `RUST_LOG`, `-q`/`-v`, or the configured `log_level`
//!
//! The file lives at `READSCORE_LOG_PATH` when set. Otherwise it is
//! `readscore.jsonl` inside `READSCORE_LOG_DIR`, the configured `log_dir`,
//! or `<platform data dir>/logs`, first match wins. If the directory cannot
//! be created, file logging is skipped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "READSCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "READSCORE_LOG_DIR";
const LOG_FILE_NAME: &str = "readscore.jsonl";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for `readscore.jsonl`.
    pub log_dir: Option<PathBuf>,
    /// Stderr verbosity.
    pub stderr_level: LevelFilter,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_dir: None,
            stderr_level: LevelFilter::WARN,
        }
    }
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `config_log_dir` and then the
    /// platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                readscore_core::config::user_data_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self {
            log_path,
            log_dir,
            stderr_level: LevelFilter::WARN,
        }
    }

    /// Adjust stderr verbosity for `-q` and `-v`.
    #[must_use]
    pub const fn with_cli_verbosity(mut self, quiet: bool, verbose: u8) -> Self {
        self.stderr_level = stderr_level(quiet, verbose);
        self
    }

    /// Split the target log file into directory and file name.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

const fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the global filter.
///
/// Precedence: `RUST_LOG` > `--quiet` > `-v`/`-vv` > configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Keeps the non-blocking file writer alive; drop it last to flush.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.stderr_level);

    let (file_layer, file_guard) = match config.log_file() {
        Some((dir, name)) if std::fs::create_dir_all(&dir).is_ok() => {
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_level_follows_flags() {
        assert_eq!(stderr_level(true, 2), LevelFilter::ERROR);
        assert_eq!(stderr_level(false, 0), LevelFilter::WARN);
        assert_eq!(stderr_level(false, 1), LevelFilter::DEBUG);
        assert_eq!(stderr_level(false, 3), LevelFilter::TRACE);
    }

    #[test]
    fn explicit_log_path_splits() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/readscore/run.jsonl")),
            log_dir: Some(PathBuf::from("/ignored")),
            stderr_level: LevelFilter::WARN,
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/readscore"));
        assert_eq!(name, "run.jsonl");
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            ..ObservabilityConfig::default()
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("."), "run.jsonl".to_string()))
        );
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_dir: Some(PathBuf::from("/tmp/readscore-logs")),
            ..ObservabilityConfig::default()
        };
        assert_eq!(
            config.log_file(),
            Some((
                PathBuf::from("/tmp/readscore-logs"),
                LOG_FILE_NAME.to_string()
            ))
        );
    }

    #[test]
    fn no_destination_means_no_file() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }
}
