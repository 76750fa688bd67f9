//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr so stdout stays clean for rewritten
//! text. An optional JSONL file layer is enabled by `HUMANIZER_LOG_PATH`
//! (exact file), `HUMANIZER_LOG_DIR` or the config `log_dir` (daily files).

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "HUMANIZER_LOG_PATH";
const LOG_DIR_ENV: &str = "HUMANIZER_LOG_DIR";
const LOG_FILE_NAME: &str = "humanizer.jsonl";

/// Where (if anywhere) to write JSONL logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    log_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path.filter(|p| !p.as_os_str().is_empty()),
            log_dir: env_dir.filter(|p| !p.as_os_str().is_empty()).or(config_dir),
        }
    }

    fn appender(&self) -> anyhow::Result<Option<RollingFileAppender>> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            create_dir(dir)?;
            return Ok(Some(RollingFileAppender::new(Rotation::NEVER, dir, file)));
        }
        if let Some(ref dir) = self.log_dir {
            create_dir(dir)?;
            return Ok(Some(RollingFileAppender::new(
                Rotation::DAILY,
                dir,
                LOG_FILE_NAME,
            )));
        }
        Ok(None)
    }
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

/// Keeps the background log writer alive until dropped.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Default filter directive when `RUST_LOG` is unset.
fn default_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter: `RUST_LOG` > `-q`/`-v` > config `log_level`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_directive(quiet, verbose, config_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.appender()? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_beats_verbose_and_config() {
        assert_eq!(default_directive(true, 2, "debug"), "error");
        assert_eq!(default_directive(false, 0, "warn"), "warn");
        assert_eq!(default_directive(false, 1, "warn"), "debug");
        assert_eq!(default_directive(false, 3, "warn"), "trace");
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env-logs")),
            Some(PathBuf::from("/tmp/config-logs")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/env-logs")));

        let config =
            ObservabilityConfig::resolve(None, Some(PathBuf::new()), Some(PathBuf::from("/x")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/x")));
    }

    #[test]
    fn no_file_logging_by_default() {
        let config = ObservabilityConfig::resolve(None, None, None);
        assert!(config.appender().unwrap().is_none());
    }

    #[test]
    fn explicit_path_creates_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("run.jsonl");
        let config = ObservabilityConfig::resolve(Some(path), None, None);
        assert!(config.appender().unwrap().is_some());
        assert!(tmp.path().join("nested").is_dir());
    }
}
