//! Word and sentence counts for input and output text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{HumanizeError, HumanizeResult};
use crate::humanizer::HumanizeOptions;
use crate::tagger::Tagger;
use crate::text;

/// Word and sentence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Whitespace-separated tokens.
    pub words: usize,
    /// Sentences found by the segmenter.
    pub sentences: usize,
}

/// Count words and sentences using `tagger` for segmentation.
///
/// # Errors
///
/// Returns [`HumanizeError::DependencyUnavailable`] if the tagger is not
/// loaded.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn text_stats<T: Tagger + ?Sized>(tagger: &T, text: &str) -> HumanizeResult<TextStats> {
    let sentences = tagger
        .segment_sentences(text)
        .map_err(HumanizeError::from_segmentation)?
        .len();
    Ok(TextStats {
        words: text::count_words(text),
        sentences,
    })
}

/// Outcome of one humanization run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HumanizeReport {
    /// Rewritten text.
    pub text: String,
    /// Stages that were enabled.
    pub options: HumanizeOptions,
    /// Seed used, when the run was reproducible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Counts for the input.
    pub input: TextStats,
    /// Counts for the output.
    pub output: TextStats,
}

impl HumanizeReport {
    /// Assemble a report, counting both texts with `tagger`.
    ///
    /// # Errors
    ///
    /// Returns [`HumanizeError::DependencyUnavailable`] if the tagger is not
    /// loaded.
    pub fn new<T: Tagger + ?Sized>(
        tagger: &T,
        input: &str,
        output: String,
        options: HumanizeOptions,
        seed: Option<u64>,
    ) -> HumanizeResult<Self> {
        Ok(Self {
            input: text_stats(tagger, input)?,
            output: text_stats(tagger, &output)?,
            text: output,
            options,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{RuleTagger, UnavailableTagger};

    #[test]
    fn counts_words_and_sentences() {
        let stats = text_stats(&RuleTagger::new(), "It works. It really works!").unwrap();
        assert_eq!(stats, TextStats { words: 5, sentences: 2 });
    }

    #[test]
    fn empty_text_has_no_counts() {
        assert_eq!(
            text_stats(&RuleTagger::new(), "  \n").unwrap(),
            TextStats::default()
        );
    }

    #[test]
    fn unavailable_tagger_errors() {
        assert!(matches!(
            text_stats(&UnavailableTagger, "Hello."),
            Err(HumanizeError::DependencyUnavailable)
        ));
    }

    #[test]
    fn report_serializes_counts() {
        let report = HumanizeReport::new(
            &RuleTagger::new(),
            "It's fine.",
            "It is fine.".to_string(),
            HumanizeOptions::default(),
            Some(7),
        )
        .unwrap();
        assert_eq!(report.input.words, 2);
        assert_eq!(report.output.words, 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["text"], "It is fine.");
        assert_eq!(json["seed"], 7);
        assert_eq!(json["output"]["sentences"], 1);
        assert_eq!(json["options"]["use_passive"], false);
    }
}
