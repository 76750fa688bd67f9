//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config in the platform config directory
//! 3. Project config found by walking up from the current directory
//! 4. Files passed explicitly (`--config`)
//! 5. `HUMANIZER_*` environment variables
//!
//! # Supported formats
//!
//! TOML (`.toml`), YAML (`.yaml`, `.yml`) and JSON (`.json`).
//!
//! # Project config names (lowest precedence first)
//! - `.humanize.<ext>`, `humanize.<ext>`
//! - `.humanizer.<ext>`, `humanizer.<ext>`
//!
//! All matches in the closest directory that has any are merged.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use humanizer_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let probabilities = config.humanizer_config().unwrap();
//! ```

use std::sync::LazyLock;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::humanizer::{HumanizeOptions, HumanizerConfig};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// The configuration for humanizer.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No log file is written when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Chance that a sentence is converted to the passive voice.
    pub passive_probability: Option<f64>,
    /// Chance that an eligible word is replaced with a synonym.
    pub synonym_probability: Option<f64>,
    /// Chance that a sentence gains an academic transition.
    pub transition_probability: Option<f64>,
    /// Enable passive conversion by default.
    pub use_passive: bool,
    /// Enable synonym substitution by default.
    pub use_synonyms: bool,
    /// Fixed random seed for reproducible output.
    pub seed: Option<u64>,
    /// Maximum input size in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Rewrite probabilities, starting from [`HumanizerConfig::recommended`]
    /// and overriding whatever is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProbability`] for a value outside `[0, 1]`.
    pub fn humanizer_config(&self) -> ConfigResult<HumanizerConfig> {
        let base = HumanizerConfig::recommended();
        HumanizerConfig::new(
            self.passive_probability
                .unwrap_or(base.passive_probability()),
            self.synonym_probability
                .unwrap_or(base.synonym_replacement_probability()),
            self.transition_probability
                .unwrap_or(base.transition_insertion_probability()),
        )
    }

    /// Stages enabled by default.
    pub const fn humanize_options(&self) -> HumanizeOptions {
        HumanizeOptions::new(self.use_passive, self.use_synonyms)
    }

    /// Effective input limit, `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were merged, lowest precedence first.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report them without searching again.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User config from the platform config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project config files from the closest directory that had any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files passed explicitly, in the order given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Every merged file, lowest precedence first.
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }

    /// The file whose values win, if any file was merged.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files().last()
    }
}

/// Extensions tried for every config file name, in merge order.
const EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Directory name under the platform config directory.
const APP_NAME: &str = "humanizer";

/// Project config stems, lowest precedence first.
const APP_NAMES: &[&str] = &["humanize", "humanizer"];

const ENV_PREFIX: &str = "HUMANIZER_";

/// `.humanize.toml` … `humanizer.json`, lowest precedence first.
static PROJECT_FILE_NAMES: LazyLock<Vec<String>> = LazyLock::new(|| {
    APP_NAMES
        .iter()
        .flat_map(|name| [format!(".{name}"), (*name).to_string()])
        .flat_map(|stem| EXTENSIONS.iter().map(move |ext| format!("{stem}.{ext}")))
        .collect()
});

/// File format, picked from the extension. Unknown extensions read as TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Utf8Path) -> Self {
        match path.extension() {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    fn merge(self, figment: Figment, path: &Utf8Path) -> Figment {
        match self {
            Self::Toml => figment.merge(Toml::file_exact(path)),
            Self::Yaml => figment.merge(Yaml::file_exact(path)),
            Self::Json => figment.merge(Json::file_exact(path)),
        }
    }
}

/// Builder that discovers and merges configuration sources.
#[derive(Debug)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project config starting at `path` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop walking up at the first ancestor containing `marker`.
    ///
    /// The starting directory itself never stops the search.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Walk up to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` after every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Discover and merge every source, then apply `HUMANIZER_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a file cannot be parsed or a
    /// value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        let figment = sources
            .files()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, path| FileFormat::of(path).merge(figment, path),
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            log_level = config.log_level.as_str(),
            files = sources.files().count(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    fn discover(self) -> ConfigSources {
        let user_file = if self.include_user_config {
            find_user_config()
        } else {
            None
        };
        let project_files = self
            .project_search_root
            .as_deref()
            .map(|root| self.find_project_configs(root))
            .unwrap_or_default();
        ConfigSources {
            user_file,
            project_files,
            explicit_files: self.explicit_files,
        }
    }

    /// Config files in the closest directory at or above `start` that has any.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found: Vec<Utf8PathBuf> = PROJECT_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .filter(|path| path.is_file())
                .collect();
            if !found.is_empty() {
                return found;
            }
            let at_boundary = self
                .boundary_marker
                .as_ref()
                .is_some_and(|marker| dir.join(marker).exists());
            if at_boundary && dir != start {
                break;
            }
        }
        Vec::new()
    }
}

/// `config.<ext>` in the platform config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let dir = Utf8Path::from_path(dirs.config_dir())?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}
