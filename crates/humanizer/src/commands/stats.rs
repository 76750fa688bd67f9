//! Stats command: word and sentence counts.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use humanizer_core::RuleTagger;
use humanizer_core::stats::text_stats;

use super::read_input;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// File to count (`-` or omitted reads standard input).
    pub file: Option<Utf8PathBuf>,
}

/// Print word and sentence counts.
#[instrument(name = "cmd_stats", skip_all, fields(file = ?args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let stats = text_stats(&RuleTagger::new(), &content).context("failed to segment input")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}: {}", "Words".dimmed(), stats.words);
        println!("{}: {}", "Sentences".dimmed(), stats.sentences);
    }
    Ok(())
}
