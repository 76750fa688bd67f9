//! Info command implementation

use clap::Args;
use humanizer_core::config::{Config, ConfigSources, DEFAULT_MAX_INPUT_BYTES};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    passive_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    synonym_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transition_probability: Option<f64>,
    use_passive: bool,
    use_synonyms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ConfigInfo {
    /// Effective values; probabilities are resolved against the defaults.
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let (probabilities, error) = match config.humanizer_config() {
            Ok(p) => (Some(p), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            passive_probability: probabilities.map(|p| p.passive_probability()),
            synonym_probability: probabilities.map(|p| p.synonym_replacement_probability()),
            transition_probability: probabilities.map(|p| p.transition_insertion_probability()),
            use_passive: config.use_passive,
            use_synonyms: config.use_synonyms,
            seed: config.seed,
            max_input_bytes: config.input_limit(),
            error,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let info = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match info.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), info.log_level);
    if let Some(ref dir) = info.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match info.max_input_bytes {
        Some(bytes) if bytes == DEFAULT_MAX_INPUT_BYTES => {
            println!("{}: {} (default)", "Input limit".dimmed(), bytes);
        }
        Some(bytes) => println!("{}: {}", "Input limit".dimmed(), bytes),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Rewriting".bold().underline());
    if let Some(ref err) = info.error {
        println!("{}: {}", "Error".red(), err);
    }
    print_probability("Passive probability", info.passive_probability);
    print_probability("Synonym probability", info.synonym_probability);
    print_probability("Transition probability", info.transition_probability);
    println!("{}: {}", "Passive by default".dimmed(), info.use_passive);
    println!("{}: {}", "Synonyms by default".dimmed(), info.use_synonyms);
    match info.seed {
        Some(seed) => println!("{}: {}", "Seed".dimmed(), seed),
        None => println!("{}: {}", "Seed".dimmed(), "(random)".dimmed()),
    }

    Ok(())
}

fn print_probability(label: &str, value: Option<f64>) {
    match value {
        Some(v) => println!("{}: {:.2}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(invalid)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn config_info_resolves_recommended_probabilities() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.passive_probability, Some(0.35));
        assert_eq!(info.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
        assert!(info.error.is_none());
    }

    #[test]
    fn config_info_reports_invalid_probability() {
        let config = Config {
            passive_probability: Some(3.0),
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.passive_probability.is_none());
        assert!(info.error.unwrap().contains("passive_probability"));
    }
}
