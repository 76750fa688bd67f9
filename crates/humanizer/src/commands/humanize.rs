//! Humanize command: rewrite text into a more formal register.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use humanizer_core::config::Config;
use humanizer_core::text::split_paragraphs;
use humanizer_core::{HumanizeOptions, HumanizeReport, Tagger, TextHumanizer};

use super::{read_input, write_output};

/// Arguments for the `humanize` subcommand.
#[derive(Args, Debug, Default)]
pub struct HumanizeArgs {
    /// File to rewrite (`-` or omitted reads standard input).
    pub file: Option<Utf8PathBuf>,

    /// Convert some clauses to the passive voice.
    #[arg(long)]
    pub passive: bool,

    /// Replace some content words with synonyms.
    #[arg(long)]
    pub synonyms: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance that a sentence is converted to the passive voice (0-1).
    #[arg(long, value_name = "P")]
    pub passive_probability: Option<f64>,

    /// Chance that an eligible word is replaced with a synonym (0-1).
    #[arg(long, value_name = "P")]
    pub synonym_probability: Option<f64>,

    /// Chance that a sentence gains an academic transition (0-1).
    #[arg(long, value_name = "P")]
    pub transition_probability: Option<f64>,

    /// Rewrite each blank-line separated paragraph on its own.
    #[arg(long)]
    pub keep_paragraphs: bool,

    /// Write the rewritten text to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

impl HumanizeArgs {
    /// Config with this command's flags layered on top.
    fn apply_to(&self, config: &Config) -> Config {
        Config {
            passive_probability: self.passive_probability.or(config.passive_probability),
            synonym_probability: self.synonym_probability.or(config.synonym_probability),
            transition_probability: self
                .transition_probability
                .or(config.transition_probability),
            use_passive: self.passive || config.use_passive,
            use_synonyms: self.synonyms || config.use_synonyms,
            seed: self.seed.or(config.seed),
            ..config.clone()
        }
    }
}

/// Rewrite a file or standard input.
#[instrument(name = "cmd_humanize", skip_all, fields(file = ?args.file))]
pub fn cmd_humanize(
    args: HumanizeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let effective = args.apply_to(config);
    let probabilities = effective
        .humanizer_config()
        .context("invalid rewrite probability")?;
    let options = effective.humanize_options();
    debug!(
        ?options,
        seed = ?effective.seed,
        keep_paragraphs = args.keep_paragraphs,
        "executing humanize command"
    );

    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let humanizer = TextHumanizer::new(probabilities);

    let output = match effective.seed {
        Some(seed) => rewrite(
            &humanizer,
            &content,
            options,
            args.keep_paragraphs,
            &mut ChaCha8Rng::seed_from_u64(seed),
        ),
        None => rewrite(
            &humanizer,
            &content,
            options,
            args.keep_paragraphs,
            &mut rand::thread_rng(),
        ),
    };

    if global_json {
        let report =
            HumanizeReport::new(humanizer.tagger(), &content, output, options, effective.seed)
                .context("failed to count words and sentences")?;
        if let Some(ref path) = args.output {
            write_output(Some(path), &report.text)?;
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        write_output(args.output.as_deref(), &output)?;
        if let Some(ref path) = args.output {
            eprintln!("{} {path}", "Wrote".green());
        }
    }

    Ok(())
}

fn rewrite<T: Tagger, R: Rng + ?Sized>(
    humanizer: &TextHumanizer<T>,
    text: &str,
    options: HumanizeOptions,
    keep_paragraphs: bool,
    rng: &mut R,
) -> String {
    if !keep_paragraphs {
        return humanizer.humanize_with_rng(text, options, rng);
    }
    split_paragraphs(text)
        .iter()
        .map(|paragraph| humanizer.humanize_with_rng(paragraph, options, rng))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanizer_core::HumanizerConfig;

    fn quiet_humanizer() -> TextHumanizer {
        TextHumanizer::new(HumanizerConfig::new(0.0, 0.0, 0.0).unwrap())
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            synonym_probability: Some(0.1),
            seed: Some(1),
            ..Config::default()
        };
        let args = HumanizeArgs {
            passive: true,
            seed: Some(9),
            transition_probability: Some(0.0),
            ..HumanizeArgs::default()
        };
        let effective = args.apply_to(&config);
        assert!(effective.use_passive);
        assert!(!effective.use_synonyms);
        assert_eq!(effective.seed, Some(9));
        assert_eq!(effective.synonym_probability, Some(0.1));
        assert_eq!(effective.transition_probability, Some(0.0));
    }

    #[test]
    fn keep_paragraphs_preserves_blank_lines() {
        let text = "It's late.\n\nWe can't stop.";
        let out = rewrite(
            &quiet_humanizer(),
            text,
            HumanizeOptions::default(),
            true,
            &mut ChaCha8Rng::seed_from_u64(1),
        );
        assert_eq!(out, "It is late.\n\nWe cannot stop.");
    }

    #[test]
    fn without_keep_paragraphs_sentences_are_joined() {
        let text = "It's late.\n\nWe can't stop.";
        let out = rewrite(
            &quiet_humanizer(),
            text,
            HumanizeOptions::default(),
            false,
            &mut ChaCha8Rng::seed_from_u64(1),
        );
        assert_eq!(out, "It is late. We cannot stop.");
    }
}
