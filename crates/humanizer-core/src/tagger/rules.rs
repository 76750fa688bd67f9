//! Lexicon-driven tagger.
//!
//! Tags tokens from closed-class word lists, the irregular verb table and a
//! handful of suffix heuristics, then resolves noun/verb ambiguity from the
//! neighbouring tags. Clauses are the token runs between punctuation and
//! conjunctions; within a clause the subject is the noun phrase directly
//! before the first verb phrase and the object the noun phrase directly
//! after it.

use std::sync::LazyLock;

use regex::Regex;

use super::{Clause, PartOfSpeech, TaggedToken, Tagger};
use crate::dictionaries::irregular_verbs::{
    irregular_base, irregular_participle, is_adjective_exception, is_linking_verb,
};
use crate::dictionaries::lexicon::{
    ADJECTIVES, ADVERBS, AUXILIARIES, CONJUNCTIONS, DETERMINERS, NOUN_VERBS, NOUNS, PREPOSITIONS,
    PRONOUNS, REGULAR_VERBS,
};
use crate::error::TaggerResult;
use crate::humanizer::casing::is_acronym;
use crate::text;

/// Words (with internal apostrophes or hyphens) or single punctuation marks.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\u{2019}\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]")
        .expect("valid regex")
});

/// Words that negate a verb phrase.
const NEGATIONS: &[&str] = &["not", "never", "cannot"];

/// Tag assigned from the word alone, before context is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexical {
    Tag(PartOfSpeech),
    NounOrVerb,
    AdjectiveOrVerb,
}

/// Built-in tagger backed by the bundled dictionaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a rule tagger.
    pub const fn new() -> Self {
        Self
    }
}

impl Tagger for RuleTagger {
    fn segment_sentences(&self, text: &str) -> TaggerResult<Vec<String>> {
        Ok(text::split_sentences(text))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(sentence_len = sentence.len()))]
    fn tag_tokens(&self, sentence: &str) -> TaggerResult<Vec<TaggedToken>> {
        let spans: Vec<(usize, usize)> = TOKEN_PATTERN
            .find_iter(sentence)
            .map(|m| (m.start(), m.end()))
            .collect();
        let words: Vec<&str> = spans.iter().map(|&(s, e)| &sentence[s..e]).collect();
        let lexical: Vec<Lexical> = words.iter().map(|w| classify(w)).collect();
        let tags = resolve(&words, &lexical);

        Ok(spans
            .into_iter()
            .zip(words)
            .zip(tags)
            .map(|(((start, end), word), pos)| TaggedToken {
                text: word.to_string(),
                pos,
                start,
                end,
            })
            .collect())
    }

    fn extract_clauses(&self, sentence: &str) -> TaggerResult<Vec<Clause>> {
        let tokens = self.tag_tokens(sentence)?;
        Ok(split_clauses(&tokens)
            .into_iter()
            .map(|group| build_clause(sentence, group))
            .collect())
    }

    fn to_participle(&self, verb: &str) -> TaggerResult<Option<String>> {
        let words: Vec<String> = verb.split_whitespace().map(str::to_lowercase).collect();
        let Some(main) = words.last() else {
            return Ok(None);
        };
        let negated = words.iter().any(|w| {
            NEGATIONS.contains(&w.as_str()) || w.ends_with("n't") || w.ends_with("n\u{2019}t")
        });
        if negated || !main.chars().all(char::is_alphabetic) {
            return Ok(None);
        }
        Ok(participle(main))
    }
}

/// Assign a tag from the word alone.
fn classify(word: &str) -> Lexical {
    let lower = word.to_lowercase();
    let w = lower.as_str();

    if !w.chars().any(char::is_alphanumeric) {
        return Lexical::Tag(PartOfSpeech::Punctuation);
    }
    if w.chars().next().is_some_and(|c| c.is_numeric()) {
        return Lexical::Tag(PartOfSpeech::Number);
    }

    let closed = [
        (&*PRONOUNS, PartOfSpeech::Pronoun),
        (&*DETERMINERS, PartOfSpeech::Determiner),
        (&*AUXILIARIES, PartOfSpeech::Auxiliary),
        (&*CONJUNCTIONS, PartOfSpeech::Conjunction),
        (&*PREPOSITIONS, PartOfSpeech::Preposition),
        (&*ADVERBS, PartOfSpeech::Adverb),
    ];
    if let Some((_, pos)) = closed.iter().find(|(set, _)| set.contains(w)) {
        return Lexical::Tag(*pos);
    }

    if NOUN_VERBS.contains(w) {
        return Lexical::NounOrVerb;
    }
    if NOUNS.contains(w) {
        return Lexical::Tag(PartOfSpeech::Noun);
    }
    if ADJECTIVES.contains(w) {
        return Lexical::Tag(PartOfSpeech::Adjective);
    }
    if is_adjective_exception(w) {
        return Lexical::AdjectiveOrVerb;
    }
    if is_known_verb(w) {
        return Lexical::Tag(PartOfSpeech::Verb);
    }

    let len = w.chars().count();
    if len > 4 && w.ends_with("ly") {
        return Lexical::Tag(PartOfSpeech::Adverb);
    }
    if len >= 5 && (w.ends_with("ed") || w.ends_with("ing")) {
        return Lexical::Tag(PartOfSpeech::Verb);
    }
    Lexical::Tag(PartOfSpeech::Noun)
}

/// Resolve ambiguous words from their neighbours and mark proper nouns.
fn resolve(words: &[&str], lexical: &[Lexical]) -> Vec<PartOfSpeech> {
    let first_word = lexical
        .iter()
        .position(|l| *l != Lexical::Tag(PartOfSpeech::Punctuation));
    let mut tags: Vec<PartOfSpeech> = Vec::with_capacity(words.len());

    for (i, (&word, &lex)) in words.iter().zip(lexical).enumerate() {
        // Previous tag, looking through adverbs ("will soon change").
        let prev = tags
            .iter()
            .rev()
            .find(|p| **p != PartOfSpeech::Adverb)
            .copied();
        let prev_word = i.checked_sub(1).map(|j| words[j].to_lowercase());
        let next = lexical.get(i + 1).copied();

        let mut pos = match lex {
            Lexical::Tag(PartOfSpeech::Pronoun) if word.eq_ignore_ascii_case("her") => {
                if matches!(
                    next,
                    Some(
                        Lexical::NounOrVerb
                            | Lexical::AdjectiveOrVerb
                            | Lexical::Tag(PartOfSpeech::Noun | PartOfSpeech::Adjective)
                    )
                ) {
                    PartOfSpeech::Determiner
                } else {
                    PartOfSpeech::Pronoun
                }
            }
            Lexical::Tag(pos) => pos,
            Lexical::NounOrVerb => {
                if prev_word.as_deref() == Some("to") {
                    PartOfSpeech::Verb
                } else {
                    match prev {
                        None | Some(PartOfSpeech::Punctuation | PartOfSpeech::Conjunction) => {
                            if matches!(
                                next,
                                Some(Lexical::Tag(
                                    PartOfSpeech::Determiner | PartOfSpeech::Pronoun
                                ))
                            ) {
                                PartOfSpeech::Verb
                            } else {
                                PartOfSpeech::Noun
                            }
                        }
                        Some(
                            PartOfSpeech::Pronoun
                            | PartOfSpeech::Noun
                            | PartOfSpeech::ProperNoun
                            | PartOfSpeech::Auxiliary,
                        ) => PartOfSpeech::Verb,
                        Some(_) => PartOfSpeech::Noun,
                    }
                }
            }
            Lexical::AdjectiveOrVerb => match prev {
                Some(PartOfSpeech::Pronoun | PartOfSpeech::Noun | PartOfSpeech::ProperNoun) => {
                    PartOfSpeech::Verb
                }
                Some(PartOfSpeech::Auxiliary)
                    if matches!(prev_word.as_deref(), Some("have" | "has" | "had")) =>
                {
                    PartOfSpeech::Verb
                }
                _ => PartOfSpeech::Adjective,
            },
        };

        if pos == PartOfSpeech::Noun
            && is_capitalized(word)
            && (Some(i) != first_word || is_acronym(word))
        {
            pos = PartOfSpeech::ProperNoun;
        }
        tags.push(pos);
    }

    tags
}

/// Split tagged tokens into clauses at punctuation and conjunctions.
fn split_clauses(tokens: &[TaggedToken]) -> Vec<&[TaggedToken]> {
    tokens
        .split(|t| matches!(t.pos, PartOfSpeech::Punctuation | PartOfSpeech::Conjunction))
        .filter(|group| !group.is_empty())
        .collect()
}

/// Locate subject, verb phrase and object inside one clause.
fn build_clause(sentence: &str, tokens: &[TaggedToken]) -> Clause {
    let span = |from: usize, to: usize| sentence[tokens[from].start..tokens[to].end].to_string();
    let mut clause = Clause {
        text: span(0, tokens.len() - 1),
        ..Clause::default()
    };

    let Some(verb_start) = tokens.iter().position(|t| t.pos.is_verb()) else {
        return clause;
    };
    let mut verb_end = verb_start;
    for (k, token) in tokens.iter().enumerate().skip(verb_start + 1) {
        match token.pos {
            PartOfSpeech::Verb | PartOfSpeech::Auxiliary => verb_end = k,
            PartOfSpeech::Adverb => {}
            _ => break,
        }
    }
    clause.verb = Some(span(verb_start, verb_end));

    if let Some(head) = verb_start.checked_sub(1) {
        let head_pos = tokens[head].pos;
        if head_pos == PartOfSpeech::Pronoun {
            clause.subject = Some(span(head, head));
        } else if head_pos.is_noun() || head_pos == PartOfSpeech::Number {
            let mut start = head;
            while start > 0 && is_noun_phrase_part(tokens[start - 1].pos) {
                start -= 1;
            }
            clause.subject = Some(span(start, head));
        }
    }

    let main = &tokens[verb_end];
    if main.pos == PartOfSpeech::Auxiliary || is_linking_verb(&main.text) {
        return clause;
    }
    let object_start = verb_end + 1;
    let mut cursor = object_start;
    let mut saw_noun = false;
    while let Some(token) = tokens.get(cursor) {
        if token.pos.is_noun() {
            saw_noun = true;
        } else if saw_noun || !matches!(
            token.pos,
            PartOfSpeech::Determiner | PartOfSpeech::Adjective | PartOfSpeech::Number
        ) {
            break;
        }
        cursor += 1;
    }
    if saw_noun {
        clause.object = Some(span(object_start, cursor - 1));
    }

    clause
}

const fn is_noun_phrase_part(pos: PartOfSpeech) -> bool {
    matches!(
        pos,
        PartOfSpeech::Noun
            | PartOfSpeech::ProperNoun
            | PartOfSpeech::Adjective
            | PartOfSpeech::Determiner
            | PartOfSpeech::Number
    )
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Whether a lowercase word is a form of a known verb.
fn is_known_verb(word: &str) -> bool {
    let known = |base: &str| REGULAR_VERBS.contains(base) || irregular_participle(base).is_some();
    known(word) || irregular_base(word).is_some() || base_candidates(word).iter().any(|b| known(b))
}

/// Possible base forms of a regularly inflected word.
fn base_candidates(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(stem) = word.strip_suffix("ies") {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        out.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ied") {
        out.push(format!("{stem}y"));
    }
    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            out.push(stem.to_string());
            out.push(format!("{stem}e"));
            if let Some(single) = undouble(stem) {
                out.push(single.to_string());
            }
        }
    }
    out.retain(|b| !b.is_empty());
    out
}

/// Drop a doubled final consonant (`"stopp"` → `"stop"`).
fn undouble(stem: &str) -> Option<&str> {
    let mut rev = stem.chars().rev();
    let (last, before) = (rev.next()?, rev.next()?);
    (last == before && !is_vowel(last)).then(|| &stem[..stem.len() - last.len_utf8()])
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Past participle of a single lowercase verb form.
fn participle(word: &str) -> Option<String> {
    match word {
        "am" | "is" | "are" | "was" | "were" | "being" => return Some("been".to_string()),
        "has" | "having" => return Some("had".to_string()),
        "does" | "doing" => return Some("done".to_string()),
        w if AUXILIARIES.contains(w) && irregular_participle(w).is_none() => return None,
        _ => {}
    }
    if let Some(p) = irregular_participle(word) {
        return Some(p.to_string());
    }
    if let Some(base) = irregular_base(word) {
        return irregular_participle(base).map(str::to_string);
    }
    if let Some(base) = base_candidates(word)
        .into_iter()
        .find(|b| irregular_participle(b).is_some())
    {
        return irregular_participle(&base).map(str::to_string);
    }

    if word.ends_with("ed") {
        return Some(word.to_string());
    }
    if let Some(stem) = word.strip_suffix("ing").filter(|s| s.chars().count() >= 2) {
        return Some(if stem.ends_with('e') {
            format!("{stem}d")
        } else {
            regular_participle_no_doubling(stem)
        });
    }
    Some(regular_participle(&third_person_base(word)))
}

/// Base form of a third-person singular verb (`"watches"` → `"watch"`).
fn third_person_base(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es")
        && ["ss", "sh", "ch", "x", "z", "o"].iter().any(|s| stem.ends_with(*s))
    {
        return stem.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.ends_with('s') && !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Regular past participle of a base form.
fn regular_participle(base: &str) -> String {
    if base.ends_with('e') {
        return format!("{base}d");
    }
    let chars: Vec<char> = base.chars().collect();
    let syllables = chars
        .iter()
        .zip(std::iter::once(&' ').chain(chars.iter()))
        .filter(|(c, prev)| is_vowel(**c) && !is_vowel(**prev))
        .count();
    if let [.., a, b, c] = chars.as_slice()
        && syllables == 1
        && !is_vowel(*a)
        && is_vowel(*b)
        && !is_vowel(*c)
        && !matches!(*c, 'w' | 'x' | 'y')
    {
        return format!("{base}{c}ed");
    }
    regular_participle_no_doubling(base)
}

fn regular_participle_no_doubling(stem: &str) -> String {
    let mut rev = stem.chars().rev();
    if let (Some('y'), Some(before)) = (rev.next(), rev.next())
        && !is_vowel(before)
    {
        return format!("{}ied", &stem[..stem.len() - 1]);
    }
    format!("{stem}ed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(sentence: &str) -> Vec<(String, PartOfSpeech)> {
        RuleTagger::new()
            .tag_tokens(sentence)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    fn pos_of(sentence: &str, word: &str) -> PartOfSpeech {
        tags(sentence)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, p)| p)
            .unwrap_or_else(|| panic!("{word} not found in {sentence}"))
    }

    #[test]
    fn tokens_carry_byte_spans() {
        let sentence = "The team wrote it.";
        let tokens = RuleTagger::new().tag_tokens(sentence).unwrap();
        assert_eq!(tokens.len(), 5);
        for token in &tokens {
            assert_eq!(&sentence[token.start..token.end], token.text);
        }
        assert_eq!(tokens[4].pos, PartOfSpeech::Punctuation);
    }

    #[test]
    fn tags_closed_classes() {
        let sentence = "She will write the report with care.";
        assert_eq!(pos_of(sentence, "She"), PartOfSpeech::Pronoun);
        assert_eq!(pos_of(sentence, "will"), PartOfSpeech::Auxiliary);
        assert_eq!(pos_of(sentence, "write"), PartOfSpeech::Verb);
        assert_eq!(pos_of(sentence, "the"), PartOfSpeech::Determiner);
        assert_eq!(pos_of(sentence, "with"), PartOfSpeech::Preposition);
        assert_eq!(pos_of(sentence, "care"), PartOfSpeech::Noun);
    }

    #[test]
    fn resolves_noun_verb_ambiguity_from_context() {
        assert_eq!(pos_of("They work every day.", "work"), PartOfSpeech::Verb);
        assert_eq!(pos_of("Our work is done.", "work"), PartOfSpeech::Noun);
        assert_eq!(pos_of("We need to change it.", "change"), PartOfSpeech::Verb);
        assert_eq!(pos_of("A big change is coming.", "change"), PartOfSpeech::Noun);
    }

    #[test]
    fn her_before_noun_is_a_determiner() {
        assert_eq!(pos_of("I read her report.", "her"), PartOfSpeech::Determiner);
        assert_eq!(pos_of("I thanked her.", "her"), PartOfSpeech::Pronoun);
    }

    #[test]
    fn capitalized_words_after_the_first_are_proper_nouns() {
        assert_eq!(pos_of("We met Alice today.", "Alice"), PartOfSpeech::ProperNoun);
        assert_eq!(pos_of("AI will change work.", "AI"), PartOfSpeech::ProperNoun);
        assert_eq!(pos_of("Data matter.", "Data"), PartOfSpeech::Noun);
    }

    #[test]
    fn suffix_heuristics() {
        assert_eq!(pos_of("They quickly left.", "quickly"), PartOfSpeech::Adverb);
        assert_eq!(pos_of("They flurbled loudly.", "flurbled"), PartOfSpeech::Verb);
        assert_eq!(pos_of("The family left.", "family"), PartOfSpeech::Noun);
    }

    #[test]
    fn extracts_subject_verb_object() {
        let clauses = RuleTagger::new()
            .extract_clauses("The research team wrote the final report.")
            .unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(
            clauses[0].triple(),
            Some(("The research team", "wrote", "the final report"))
        );
    }

    #[test]
    fn clauses_split_at_conjunctions_and_commas() {
        let clauses = RuleTagger::new()
            .extract_clauses("I have been thinking about how AI will change our work.")
            .unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].subject.as_deref(), Some("I"));
        assert_eq!(clauses[0].verb.as_deref(), Some("have been thinking"));
        assert!(clauses[0].object.is_none());
        assert_eq!(clauses[1].triple(), Some(("AI", "will change", "our work")));
    }

    #[test]
    fn linking_verbs_take_no_object() {
        let clauses = RuleTagger::new()
            .extract_clauses("The plan seems a good idea.")
            .unwrap();
        assert!(clauses[0].object.is_none());
    }

    #[test]
    fn clause_without_verb_has_no_parts() {
        let clauses = RuleTagger::new().extract_clauses("What a day!").unwrap();
        assert!(clauses.iter().all(|c| c.verb.is_none()));
    }

    #[test]
    fn participles() {
        let tagger = RuleTagger::new();
        let cases = [
            ("wrote", "written"),
            ("write", "written"),
            ("writes", "written"),
            ("will change", "changed"),
            ("changes", "changed"),
            ("changing", "changed"),
            ("stop", "stopped"),
            ("stopping", "stopped"),
            ("studies", "studied"),
            ("studying", "studied"),
            ("hoping", "hoped"),
            ("watches", "watched"),
            ("visit", "visited"),
            ("played", "played"),
            ("is", "been"),
        ];
        for (verb, expected) in cases {
            assert_eq!(
                tagger.to_participle(verb).unwrap().as_deref(),
                Some(expected),
                "participle of {verb}"
            );
        }
    }

    #[test]
    fn negated_and_modal_phrases_have_no_participle() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.to_participle("did not write").unwrap(), None);
        assert_eq!(tagger.to_participle("never saw").unwrap(), None);
        assert_eq!(tagger.to_participle("will").unwrap(), None);
        assert_eq!(tagger.to_participle("").unwrap(), None);
    }

    #[test]
    fn segments_with_sentence_splitter() {
        let sentences = RuleTagger::new()
            .segment_sentences("Dr. Smith arrived. He sat down.")
            .unwrap();
        assert_eq!(sentences, vec!["Dr. Smith arrived.", "He sat down."]);
    }
}
