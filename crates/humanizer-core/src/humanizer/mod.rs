//! The humanization pipeline.
//!
//! Input is segmented into sentences by the configured [`Tagger`]. Each
//! sentence then passes through four stages in a fixed order:
//!
//! 1. contraction expansion (always)
//! 2. academic transition insertion (with `transition_insertion_probability`)
//! 3. active-to-passive conversion (opt-in, with `passive_probability`)
//! 4. synonym substitution (opt-in, per word with
//!    `synonym_replacement_probability`)
//!
//! Rewritten sentences are joined with a single space. The pipeline never
//! fails outward: a missing tagger or empty segmentation returns the input
//! unchanged, and a stage that fails on one sentence is skipped for that
//! sentence only.
//!
//! # Example
//!
//! ```
//! use humanizer_core::humanizer::{HumanizeOptions, HumanizerConfig, TextHumanizer};
//!
//! let config = HumanizerConfig::new(0.35, 0.4, 0.0).unwrap();
//! let humanizer = TextHumanizer::new(config);
//! let out = humanizer.humanize_seeded(
//!     "I've been thinking about how AI will change our work. It's gonna be a big shift.",
//!     HumanizeOptions::default(),
//!     42,
//! );
//! assert_eq!(
//!     out,
//!     "I have been thinking about how AI will change our work. It is going to be a big shift."
//! );
//! ```

pub(crate) mod casing;
pub mod contractions;
pub mod passive;
pub mod synonyms;
pub mod transitions;

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

pub use contractions::expand_contractions;
pub use passive::convert_to_passive;
pub use synonyms::replace_with_synonyms;
pub use transitions::add_academic_transition;

use crate::error::{
    ConfigError, ConfigResult, HumanizeError, HumanizeResult, TaggerError, TaggerResult,
};
use crate::tagger::{RuleTagger, Tagger};

/// Default chance that a sentence is converted to the passive voice.
pub const DEFAULT_PASSIVE_PROBABILITY: f64 = 0.2;
/// Default chance that an eligible word is replaced with a synonym.
pub const DEFAULT_SYNONYM_PROBABILITY: f64 = 0.3;
/// Default chance that a sentence gains an academic transition.
pub const DEFAULT_TRANSITION_PROBABILITY: f64 = 0.3;

/// A rewrite stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Contraction expansion.
    Contractions,
    /// Academic transition insertion.
    Transition,
    /// Active-to-passive conversion.
    Passive,
    /// Synonym substitution.
    Synonyms,
}

impl Stage {
    /// Stage name as used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contractions => "contractions",
            Self::Transition => "transition",
            Self::Passive => "passive",
            Self::Synonyms => "synonyms",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite probabilities, each within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct HumanizerConfig {
    passive_probability: f64,
    synonym_replacement_probability: f64,
    transition_insertion_probability: f64,
}

impl Default for HumanizerConfig {
    fn default() -> Self {
        Self {
            passive_probability: DEFAULT_PASSIVE_PROBABILITY,
            synonym_replacement_probability: DEFAULT_SYNONYM_PROBABILITY,
            transition_insertion_probability: DEFAULT_TRANSITION_PROBABILITY,
        }
    }
}

impl HumanizerConfig {
    /// Build a config, rejecting probabilities outside `[0, 1]` (or NaN).
    pub fn new(
        passive_probability: f64,
        synonym_replacement_probability: f64,
        transition_insertion_probability: f64,
    ) -> ConfigResult<Self> {
        Ok(Self {
            passive_probability: check_probability("passive_probability", passive_probability)?,
            synonym_replacement_probability: check_probability(
                "synonym_probability",
                synonym_replacement_probability,
            )?,
            transition_insertion_probability: check_probability(
                "transition_probability",
                transition_insertion_probability,
            )?,
        })
    }

    /// The values a typical caller picks: 0.35 passive, 0.4 synonyms,
    /// 0.45 transitions.
    pub const fn recommended() -> Self {
        Self {
            passive_probability: 0.35,
            synonym_replacement_probability: 0.4,
            transition_insertion_probability: 0.45,
        }
    }

    /// Chance that a sentence is converted to the passive voice.
    pub const fn passive_probability(&self) -> f64 {
        self.passive_probability
    }

    /// Chance that an eligible word is replaced with a synonym.
    pub const fn synonym_replacement_probability(&self) -> f64 {
        self.synonym_replacement_probability
    }

    /// Chance that a sentence gains an academic transition.
    pub const fn transition_insertion_probability(&self) -> f64 {
        self.transition_insertion_probability
    }
}

fn check_probability(name: &'static str, value: f64) -> ConfigResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

/// Opt-in stages for one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HumanizeOptions {
    /// Attempt active-to-passive conversion.
    #[serde(default)]
    pub use_passive: bool,
    /// Attempt synonym substitution.
    #[serde(default)]
    pub use_synonyms: bool,
}

impl HumanizeOptions {
    /// Options with the given stages enabled.
    pub const fn new(use_passive: bool, use_synonyms: bool) -> Self {
        Self {
            use_passive,
            use_synonyms,
        }
    }

    /// Every optional stage enabled.
    pub const fn all() -> Self {
        Self::new(true, true)
    }
}

/// Rewrites informal text into a more formal register.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct TextHumanizer<T = RuleTagger> {
    config: HumanizerConfig,
    tagger: T,
}

impl TextHumanizer<RuleTagger> {
    /// Create a humanizer backed by the built-in [`RuleTagger`].
    pub const fn new(config: HumanizerConfig) -> Self {
        Self::with_tagger(config, RuleTagger::new())
    }
}

impl<T: Tagger> TextHumanizer<T> {
    /// Create a humanizer backed by a caller-supplied tagger.
    pub const fn with_tagger(config: HumanizerConfig, tagger: T) -> Self {
        Self { config, tagger }
    }

    /// The active probabilities.
    pub const fn config(&self) -> &HumanizerConfig {
        &self.config
    }

    /// The injected tagger.
    pub const fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Humanize `text` using the thread-local random source.
    pub fn humanize(&self, text: &str, options: HumanizeOptions) -> String {
        self.humanize_with_rng(text, options, &mut rand::thread_rng())
    }

    /// Humanize `text` deterministically from `seed`.
    pub fn humanize_seeded(&self, text: &str, options: HumanizeOptions, seed: u64) -> String {
        self.humanize_with_rng(text, options, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Humanize `text`, returning it unchanged if the pipeline cannot run.
    pub fn humanize_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        options: HumanizeOptions,
        rng: &mut R,
    ) -> String {
        match self.try_humanize(text, options, rng) {
            Ok(out) => out,
            Err(err @ HumanizeError::SegmentationEmpty) => {
                debug!(error = %err, "returning input unchanged");
                text.to_string()
            }
            Err(err @ HumanizeError::DependencyUnavailable) => {
                error!(error = %err, "returning input unchanged");
                text.to_string()
            }
            Err(err) => {
                warn!(error = %err, "returning input unchanged");
                text.to_string()
            }
        }
    }

    /// Humanize `text`, reporting why the pipeline could not run.
    ///
    /// # Errors
    ///
    /// Returns [`HumanizeError::DependencyUnavailable`] when the tagger is not
    /// loaded (including when it disappears mid-run) and
    /// [`HumanizeError::SegmentationEmpty`] when no sentences are found.
    /// Failures inside a single stage are logged and skipped, never returned.
    #[tracing::instrument(
        skip_all,
        fields(
            text_len = text.len(),
            use_passive = options.use_passive,
            use_synonyms = options.use_synonyms
        )
    )]
    pub fn try_humanize<R: Rng + ?Sized>(
        &self,
        text: &str,
        options: HumanizeOptions,
        rng: &mut R,
    ) -> HumanizeResult<String> {
        if !self.tagger.is_available() {
            return Err(HumanizeError::DependencyUnavailable);
        }
        let sentences = self
            .tagger
            .segment_sentences(text)
            .map_err(HumanizeError::from_segmentation)?;
        if sentences.is_empty() {
            return Err(HumanizeError::SegmentationEmpty);
        }
        debug!(sentences = sentences.len(), "segmented input");

        let mut rewritten = Vec::with_capacity(sentences.len());
        for (index, sentence) in sentences.iter().enumerate() {
            rewritten.push(self.rewrite_sentence(index, sentence, options, rng)?);
        }
        Ok(rewritten.join(" "))
    }

    fn rewrite_sentence<R: Rng + ?Sized>(
        &self,
        index: usize,
        sentence: &str,
        options: HumanizeOptions,
        rng: &mut R,
    ) -> HumanizeResult<String> {
        let mut current = expand_contractions(sentence);

        if rng.gen_bool(self.config.transition_insertion_probability) {
            current = add_academic_transition(&current, rng);
        }

        if options.use_passive && rng.gen_bool(self.config.passive_probability) {
            let converted = convert_to_passive(&self.tagger, &current);
            current = recover(Stage::Passive, index, converted, current)?;
        }

        if options.use_synonyms {
            let replaced = replace_with_synonyms(
                &self.tagger,
                &current,
                self.config.synonym_replacement_probability,
                rng,
            );
            current = recover(Stage::Synonyms, index, replaced, current)?;
        }

        Ok(current)
    }
}

/// Keep the stage output, or fall back to its input when the stage failed.
fn recover(
    stage: Stage,
    sentence: usize,
    result: TaggerResult<String>,
    fallback: String,
) -> HumanizeResult<String> {
    match result {
        Ok(out) => Ok(out),
        Err(TaggerError::Unavailable) => Err(HumanizeError::DependencyUnavailable),
        Err(source) => {
            let err = HumanizeError::Stage { stage, source };
            warn!(sentence, error = %err, "stage skipped");
            Ok(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionaries::synonyms::synonyms_for;
    use crate::dictionaries::transitions::ACADEMIC_TRANSITIONS;
    use crate::tagger::{Clause, TaggedToken, UnavailableTagger};

    const SAMPLE: &str =
        "I've been thinking about how AI will change our work. It's gonna be a big shift.";

    fn only(passive: f64, synonyms: f64, transitions: f64) -> HumanizerConfig {
        HumanizerConfig::new(passive, synonyms, transitions).unwrap()
    }

    /// Delegates to the rule tagger but fails token tagging for sentences
    /// containing `trigger`.
    struct Flaky {
        trigger: &'static str,
        error: TaggerError,
    }

    impl Tagger for Flaky {
        fn segment_sentences(&self, text: &str) -> TaggerResult<Vec<String>> {
            RuleTagger.segment_sentences(text)
        }

        fn tag_tokens(&self, sentence: &str) -> TaggerResult<Vec<TaggedToken>> {
            if sentence.contains(self.trigger) {
                Err(self.error.clone())
            } else {
                RuleTagger.tag_tokens(sentence)
            }
        }

        fn extract_clauses(&self, sentence: &str) -> TaggerResult<Vec<Clause>> {
            RuleTagger.extract_clauses(sentence)
        }

        fn to_participle(&self, verb: &str) -> TaggerResult<Option<String>> {
            RuleTagger.to_participle(verb)
        }
    }

    struct Silent;

    impl Tagger for Silent {
        fn segment_sentences(&self, _text: &str) -> TaggerResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn tag_tokens(&self, _sentence: &str) -> TaggerResult<Vec<TaggedToken>> {
            Ok(Vec::new())
        }

        fn extract_clauses(&self, _sentence: &str) -> TaggerResult<Vec<Clause>> {
            Ok(Vec::new())
        }

        fn to_participle(&self, _verb: &str) -> TaggerResult<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn default_and_recommended_configs() {
        let config = HumanizerConfig::default();
        assert_eq!(config.passive_probability(), 0.2);
        assert_eq!(config.synonym_replacement_probability(), 0.3);
        assert_eq!(config.transition_insertion_probability(), 0.3);

        let rec = HumanizerConfig::recommended();
        assert_eq!(rec.passive_probability(), 0.35);
        assert_eq!(rec.synonym_replacement_probability(), 0.4);
        assert_eq!(rec.transition_insertion_probability(), 0.45);
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        assert!(matches!(
            HumanizerConfig::new(1.5, 0.3, 0.3),
            Err(ConfigError::InvalidProbability {
                name: "passive_probability",
                ..
            })
        ));
        assert!(HumanizerConfig::new(0.2, -0.1, 0.3).is_err());
        assert!(HumanizerConfig::new(0.2, 0.3, f64::NAN).is_err());
        assert!(HumanizerConfig::new(0.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn expands_contractions_without_other_stages() {
        let humanizer = TextHumanizer::new(only(0.35, 0.4, 0.0));
        assert_eq!(
            humanizer.humanize(SAMPLE, HumanizeOptions::default()),
            "I have been thinking about how AI will change our work. It is going to be a big shift."
        );
    }

    #[test]
    fn zero_probabilities_only_expand() {
        let humanizer = TextHumanizer::new(only(0.0, 0.0, 0.0));
        let out = humanizer.humanize_seeded(SAMPLE, HumanizeOptions::all(), 3);
        assert_eq!(
            out,
            "I have been thinking about how AI will change our work. It is going to be a big shift."
        );
    }

    #[test]
    fn every_sentence_gets_a_transition_at_full_probability() {
        let humanizer = TextHumanizer::new(only(0.0, 0.0, 1.0));
        let out = humanizer.humanize_seeded(
            "The data agree. The model fits.",
            HumanizeOptions::default(),
            9,
        );
        let sentences = RuleTagger.segment_sentences(&out).unwrap();
        assert_eq!(sentences.len(), 2);
        for sentence in sentences {
            assert!(
                ACADEMIC_TRANSITIONS.iter().any(|t| sentence.starts_with(t)),
                "{sentence}"
            );
        }
    }

    #[test]
    fn existing_transition_is_never_doubled() {
        let humanizer = TextHumanizer::new(only(0.0, 0.0, 1.0));
        let sentence = "Moreover, this works.";
        for seed in 0..20 {
            let once = humanizer.humanize_seeded(sentence, HumanizeOptions::default(), seed);
            assert_eq!(once, sentence);
            let twice = humanizer.humanize_seeded(&once, HumanizeOptions::default(), seed);
            assert_eq!(twice, sentence);
        }
    }

    #[test]
    fn passive_at_full_probability() {
        let humanizer = TextHumanizer::new(only(1.0, 0.0, 0.0));
        assert_eq!(
            humanizer.humanize("The team wrote the report.", HumanizeOptions::new(true, false)),
            "The report is written by the team."
        );
        assert_eq!(
            humanizer.humanize("The team wrote the report.", HumanizeOptions::default()),
            "The team wrote the report."
        );
    }

    #[test]
    fn synonyms_at_full_probability() {
        let humanizer = TextHumanizer::new(only(0.0, 1.0, 0.0));
        let out = humanizer.humanize("This is a good idea.", HumanizeOptions::new(false, true));
        assert!(!out.contains("good"), "{out}");
        assert!(
            synonyms_for("good")
                .unwrap()
                .iter()
                .any(|s| out.contains(s))
        );
    }

    #[test]
    fn same_seed_same_output() {
        let humanizer = TextHumanizer::new(HumanizerConfig::recommended());
        let text = "The team wrote the report. This is a good idea. It's gonna work.";
        let a = humanizer.humanize_seeded(text, HumanizeOptions::all(), 1234);
        let b = humanizer.humanize_seeded(text, HumanizeOptions::all(), 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn unavailable_tagger_is_identity() {
        let humanizer =
            TextHumanizer::with_tagger(HumanizerConfig::recommended(), UnavailableTagger);
        assert_eq!(humanizer.humanize(SAMPLE, HumanizeOptions::all()), SAMPLE);
        assert!(matches!(
            humanizer.try_humanize(SAMPLE, HumanizeOptions::all(), &mut rand::thread_rng()),
            Err(HumanizeError::DependencyUnavailable)
        ));
    }

    #[test]
    fn empty_segmentation_returns_input() {
        let humanizer = TextHumanizer::with_tagger(HumanizerConfig::default(), Silent);
        assert_eq!(humanizer.humanize("anything", HumanizeOptions::all()), "anything");
        assert!(matches!(
            humanizer.try_humanize("anything", HumanizeOptions::all(), &mut rand::thread_rng()),
            Err(HumanizeError::SegmentationEmpty)
        ));

        let humanizer = TextHumanizer::new(HumanizerConfig::default());
        assert_eq!(humanizer.humanize("", HumanizeOptions::all()), "");
    }

    #[test]
    fn failing_stage_skips_only_that_sentence() {
        let tagger = Flaky {
            trigger: "boom",
            error: TaggerError::Failed("tokenizer crashed".to_string()),
        };
        let humanizer = TextHumanizer::with_tagger(only(0.0, 1.0, 0.0), tagger);
        let out = humanizer.humanize_seeded(
            "This is a good idea. The boom wasn't loud. That is a good plan.",
            HumanizeOptions::new(false, true),
            5,
        );
        assert!(out.contains("The boom was not loud."), "{out}");
        assert!(!out.contains("good"), "{out}");
    }

    #[test]
    fn tagger_lost_mid_run_returns_whole_input() {
        let tagger = Flaky {
            trigger: "boom",
            error: TaggerError::Unavailable,
        };
        let humanizer = TextHumanizer::with_tagger(only(0.0, 1.0, 0.0), tagger);
        let text = "This is a good idea. The boom wasn't loud.";
        assert_eq!(
            humanizer.humanize_seeded(text, HumanizeOptions::new(false, true), 5),
            text
        );
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Passive.to_string(), "passive");
        assert_eq!(Stage::Synonyms.as_str(), "synonyms");
    }
}
