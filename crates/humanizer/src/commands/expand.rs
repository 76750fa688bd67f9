//! Expand command: contraction expansion only.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use humanizer_core::humanizer::expand_contractions;

use super::{read_input, write_output};

/// Arguments for the `expand` subcommand.
#[derive(Args, Debug, Default)]
pub struct ExpandArgs {
    /// File to expand (`-` or omitted reads standard input).
    pub file: Option<Utf8PathBuf>,

    /// Write the expanded text to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct ExpandReport {
    text: String,
    changed: bool,
}

/// Expand every contraction, leaving layout untouched.
#[instrument(name = "cmd_expand", skip_all, fields(file = ?args.file))]
pub fn cmd_expand(
    args: ExpandArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let text = expand_contractions(&content);
    let changed = text != content;
    debug!(changed, "expanded contractions");

    if global_json {
        if let Some(ref path) = args.output {
            write_output(Some(path), &text)?;
        }
        let report = ExpandReport { text, changed };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        write_output(args.output.as_deref(), text.trim_end_matches('\n'))?;
    }
    Ok(())
}
