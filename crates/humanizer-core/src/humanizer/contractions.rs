//! Contraction expansion.
//!
//! Two passes over precompiled patterns. The first expands whole-word
//! contractions (`can't`, `gonna`), the second expands productive suffixes
//! attached to any other word (`needn't`, `it'll`, `John's`). Alternations are
//! ordered longest key first so a longer contraction always wins over a key it
//! contains.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::casing::match_case;
use crate::dictionaries::contractions::{CONTRACTIONS, expansion_for, is_suffix_key};

static INDEX: LazyLock<ContractionIndex> = LazyLock::new(ContractionIndex::build);

/// Precompiled contraction patterns.
#[derive(Debug)]
pub struct ContractionIndex {
    word_keys: Vec<&'static str>,
    suffix_keys: Vec<&'static str>,
    word_pattern: Regex,
    suffix_pattern: Regex,
}

impl ContractionIndex {
    /// The shared index, compiled on first use.
    pub fn global() -> &'static Self {
        &INDEX
    }

    fn build() -> Self {
        let (mut word_keys, mut suffix_keys): (Vec<&'static str>, Vec<&'static str>) =
            CONTRACTIONS.keys().copied().partition(|key| !is_suffix_key(key));
        sort_longest_first(&mut word_keys);
        sort_longest_first(&mut suffix_keys);

        let word_pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(&word_keys)))
            .expect("valid regex");
        let suffix_pattern =
            Regex::new(&format!(r"(?i)\b(\w+?)({})\b", alternation(&suffix_keys)))
                .expect("valid regex");

        Self {
            word_keys,
            suffix_keys,
            word_pattern,
            suffix_pattern,
        }
    }

    /// Whole-word keys in match priority order.
    pub fn word_keys(&self) -> &[&'static str] {
        &self.word_keys
    }

    /// Suffix keys in match priority order.
    pub fn suffix_keys(&self) -> &[&'static str] {
        &self.suffix_keys
    }

    /// Expand every contraction in `text`.
    pub fn expand(&self, text: &str) -> String {
        let words_done = self.word_pattern.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            expansion_for(matched).map_or_else(
                || matched.to_string(),
                |expansion| match_case(matched, expansion),
            )
        });

        self.suffix_pattern
            .replace_all(&words_done, |caps: &Captures<'_>| {
                let whole = &caps[0];
                let stem = &caps[1];
                let suffix = &caps[2];
                if whole.len() <= suffix.len() {
                    return whole.to_string();
                }
                expansion_for(suffix)
                    .map_or_else(|| whole.to_string(), |expansion| format!("{stem}{expansion}"))
            })
            .into_owned()
    }
}

/// Expand contractions in `text`, preserving a leading capital.
///
/// ```
/// use humanizer_core::humanizer::expand_contractions;
///
/// assert_eq!(expand_contractions("Don't panic."), "Do not panic.");
/// assert_eq!(expand_contractions("It'll rain."), "It will rain.");
/// ```
pub fn expand_contractions(text: &str) -> String {
    ContractionIndex::global().expand(text)
}

fn sort_longest_first(keys: &mut [&'static str]) {
    keys.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
}

fn alternation(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| regex::escape(key).replace('\'', "['\u{2019}]"))
        .collect::<Vec<_>>()
        .join("|")
}
