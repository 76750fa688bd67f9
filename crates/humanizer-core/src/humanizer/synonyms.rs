//! Synonym substitution for content words.

use std::collections::HashMap;
use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use tracing::{debug, trace};

use super::casing::match_case;
use crate::dictionaries::synonyms::SYNONYM_TABLE;
use crate::error::TaggerResult;
use crate::tagger::Tagger;

/// Words shorter than this are never replaced.
pub const MIN_WORD_LEN: usize = 4;

static INDEX: LazyLock<SynonymIndex> = LazyLock::new(SynonymIndex::build);

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

#[derive(Debug)]
struct SynonymEntry {
    pattern: Regex,
    candidates: &'static [&'static str],
}

/// Headwords with their precompiled whole-word patterns.
#[derive(Debug)]
pub struct SynonymIndex {
    entries: HashMap<&'static str, SynonymEntry>,
}

impl SynonymIndex {
    /// The shared index, compiled on first use.
    pub fn global() -> &'static Self {
        &INDEX
    }

    fn build() -> Self {
        let entries = SYNONYM_TABLE
            .iter()
            .map(|&(word, candidates)| {
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
                    .expect("valid regex");
                (
                    word,
                    SynonymEntry {
                        pattern,
                        candidates,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no headwords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` (lowercase) is a headword.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

/// Replace eligible content words of `sentence` with random synonyms.
///
/// Each noun, verb or adjective of at least [`MIN_WORD_LEN`] word characters
/// is replaced with probability `probability` when it is a headword. Only the
/// first whole-word occurrence in the running result is rewritten, keeping a
/// leading capital.
pub fn replace_with_synonyms<T, R>(
    tagger: &T,
    sentence: &str,
    probability: f64,
    rng: &mut R,
) -> TaggerResult<String>
where
    T: Tagger + ?Sized,
    R: Rng + ?Sized,
{
    let tokens = tagger.tag_tokens(sentence)?;
    let index = SynonymIndex::global();
    let mut result = sentence.to_string();

    for token in tokens.iter().filter(|t| t.pos.is_content_word()) {
        let word = token.text.to_lowercase();
        if word.chars().count() < MIN_WORD_LEN
            || NON_WORD.is_match(&word)
            || !rng.gen_bool(probability)
        {
            continue;
        }
        let Some(entry) = index.entries.get(word.as_str()) else {
            continue;
        };
        let Some(synonym) = entry.candidates.choose(rng) else {
            continue;
        };
        match replace_first(&entry.pattern, &result, synonym) {
            Some(updated) => {
                trace!(%word, synonym, "replaced word");
                result = updated;
            }
            None => debug!(%word, "word no longer present"),
        }
    }

    Ok(result)
}

fn replace_first(pattern: &Regex, text: &str, synonym: &str) -> Option<String> {
    let found = pattern.find(text)?;
    let mut out = String::with_capacity(text.len() + synonym.len());
    out.push_str(&text[..found.start()]);
    out.push_str(&match_case(found.as_str(), synonym));
    out.push_str(&text[found.end()..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::dictionaries::synonyms::synonyms_for;
    use crate::tagger::RuleTagger;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    #[test]
    fn index_covers_every_headword() {
        let index = SynonymIndex::global();
        assert_eq!(index.len(), SYNONYM_TABLE.len());
        assert!(index.contains("important"));
        assert!(!index.is_empty());
    }

    #[test]
    fn replaces_eligible_words_at_full_probability() {
        let out = replace_with_synonyms(&RuleTagger::new(), "This is a good idea.", 1.0, &mut rng())
            .unwrap();
        assert!(!out.contains("good"), "{out}");
        assert!(!out.contains("idea"), "{out}");
        assert!(
            synonyms_for("good")
                .unwrap()
                .iter()
                .any(|s| out.contains(s))
        );
        assert!(out.starts_with("This is a "));
    }

    #[test]
    fn zero_probability_is_identity() {
        let sentence = "This is a good idea.";
        assert_eq!(
            replace_with_synonyms(&RuleTagger::new(), sentence, 0.0, &mut rng()).unwrap(),
            sentence
        );
    }

    #[test]
    fn short_words_are_skipped() {
        let out = replace_with_synonyms(
            &RuleTagger::new(),
            "The big problem remains.",
            1.0,
            &mut rng(),
        )
        .unwrap();
        assert!(out.contains("big"));
        assert!(!out.contains("problem"));
    }

    #[test]
    fn leading_capital_is_kept() {
        let out =
            replace_with_synonyms(&RuleTagger::new(), "Important work.", 1.0, &mut rng()).unwrap();
        assert!(out.chars().next().is_some_and(char::is_uppercase), "{out}");
        assert!(!out.to_lowercase().starts_with("important"));
    }

    #[test]
    fn replace_first_only_touches_first_occurrence() {
        let pattern = Regex::new(r"(?i)\bgood\b").unwrap();
        assert_eq!(
            replace_first(&pattern, "Good and good.", "fine").unwrap(),
            "Fine and good."
        );
        assert!(replace_first(&pattern, "goodness", "fine").is_none());
    }
}
