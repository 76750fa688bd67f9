//! Natural-language tagging seam.
//!
//! The humanizer never parses language itself. It asks a [`Tagger`] for
//! sentence segmentation, part-of-speech tags, subject/verb/object clauses and
//! verb participles. [`RuleTagger`] is the built-in lexicon-and-heuristics
//! implementation; [`UnavailableTagger`] stands in for a tagger that failed to
//! load, turning the humanizer into an identity function.
//!
//! # Example
//!
//! ```
//! use humanizer_core::tagger::{RuleTagger, Tagger};
//!
//! let tagger = RuleTagger::new();
//! let sentences = tagger.segment_sentences("It works. It really works.").unwrap();
//! assert_eq!(sentences.len(), 2);
//! ```

pub mod rules;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use rules::RuleTagger;

use crate::error::{TaggerError, TaggerResult};

/// Coarse part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PartOfSpeech {
    /// Common noun.
    Noun,
    /// Capitalized noun in non-initial position.
    ProperNoun,
    /// Personal, reflexive or indefinite pronoun.
    Pronoun,
    /// Lexical verb.
    Verb,
    /// Auxiliary or modal verb.
    Auxiliary,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Article, demonstrative, possessive or quantifier.
    Determiner,
    /// Preposition or particle.
    Preposition,
    /// Conjunction, relative or interrogative word.
    Conjunction,
    /// Numeral.
    Number,
    /// Punctuation mark.
    Punctuation,
}

impl PartOfSpeech {
    /// Common or proper noun.
    pub const fn is_noun(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }

    /// Lexical or auxiliary verb.
    pub const fn is_verb(self) -> bool {
        matches!(self, Self::Verb | Self::Auxiliary)
    }

    /// Candidate for synonym substitution: nouns, adjectives and verbs,
    /// never pronouns.
    pub const fn is_content_word(self) -> bool {
        self.is_noun() || self.is_verb() || matches!(self, Self::Adjective)
    }
}

/// A token with its part of speech and byte span in the tagged text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaggedToken {
    /// Surface text.
    pub text: String,
    /// Assigned part of speech.
    pub pos: PartOfSpeech,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// A clause with its subject/verb/object heuristic parts.
///
/// The parts are verbatim substrings of the sentence the clause came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Clause {
    /// The clause text.
    pub text: String,
    /// Noun phrase immediately before the verb phrase.
    pub subject: Option<String>,
    /// The verb phrase.
    pub verb: Option<String>,
    /// Noun phrase immediately after the verb phrase.
    pub object: Option<String>,
}

impl Clause {
    /// Subject, verb and object, if all three were found.
    pub fn triple(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.subject.as_deref()?,
            self.verb.as_deref()?,
            self.object.as_deref()?,
        ))
    }
}

/// Natural-language analysis consumed by the humanizer.
pub trait Tagger {
    /// Whether the tagger is loaded and usable.
    fn is_available(&self) -> bool {
        true
    }

    /// Split a block of text into ordered sentences.
    fn segment_sentences(&self, text: &str) -> TaggerResult<Vec<String>>;

    /// Tag every token of a sentence.
    fn tag_tokens(&self, sentence: &str) -> TaggerResult<Vec<TaggedToken>>;

    /// Extract clauses with subject/verb/object parts.
    fn extract_clauses(&self, sentence: &str) -> TaggerResult<Vec<Clause>>;

    /// Convert a verb phrase to its past participle, or `None` if it has none.
    fn to_participle(&self, verb: &str) -> TaggerResult<Option<String>>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn segment_sentences(&self, text: &str) -> TaggerResult<Vec<String>> {
        (**self).segment_sentences(text)
    }

    fn tag_tokens(&self, sentence: &str) -> TaggerResult<Vec<TaggedToken>> {
        (**self).tag_tokens(sentence)
    }

    fn extract_clauses(&self, sentence: &str) -> TaggerResult<Vec<Clause>> {
        (**self).extract_clauses(sentence)
    }

    fn to_participle(&self, verb: &str) -> TaggerResult<Option<String>> {
        (**self).to_participle(verb)
    }
}

/// A tagger that never loaded. Every call reports [`TaggerError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTagger;

impl Tagger for UnavailableTagger {
    fn is_available(&self) -> bool {
        false
    }

    fn segment_sentences(&self, _text: &str) -> TaggerResult<Vec<String>> {
        Err(TaggerError::Unavailable)
    }

    fn tag_tokens(&self, _sentence: &str) -> TaggerResult<Vec<TaggedToken>> {
        Err(TaggerError::Unavailable)
    }

    fn extract_clauses(&self, _sentence: &str) -> TaggerResult<Vec<Clause>> {
        Err(TaggerError::Unavailable)
    }

    fn to_participle(&self, _verb: &str) -> TaggerResult<Option<String>> {
        Err(TaggerError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_words_exclude_pronouns() {
        assert!(PartOfSpeech::Noun.is_content_word());
        assert!(PartOfSpeech::ProperNoun.is_content_word());
        assert!(PartOfSpeech::Verb.is_content_word());
        assert!(PartOfSpeech::Auxiliary.is_content_word());
        assert!(PartOfSpeech::Adjective.is_content_word());
        assert!(!PartOfSpeech::Pronoun.is_content_word());
        assert!(!PartOfSpeech::Determiner.is_content_word());
    }

    #[test]
    fn clause_triple_requires_all_parts() {
        let mut clause = Clause {
            text: "The team wrote the report".to_string(),
            subject: Some("The team".to_string()),
            verb: Some("wrote".to_string()),
            object: None,
        };
        assert!(clause.triple().is_none());
        clause.object = Some("the report".to_string());
        assert_eq!(clause.triple(), Some(("The team", "wrote", "the report")));
    }

    #[test]
    fn unavailable_tagger_reports_unavailable() {
        let tagger = UnavailableTagger;
        assert!(!tagger.is_available());
        assert!(matches!(
            tagger.segment_sentences("Hello."),
            Err(TaggerError::Unavailable)
        ));
        assert!(matches!(
            tagger.to_participle("write"),
            Err(TaggerError::Unavailable)
        ));
    }
}
