//! Sentence, word and paragraph splitting.
//!
//! [`split_sentences`] backs the built-in tagger's segmentation. It scans for
//! runs of terminal punctuation (`.`, `!`, `?`) and decides at each run whether
//! a sentence ends there. Closing quotes and brackets right after the run stay
//! with the sentence they close.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// A single capital letter or dotted initials without the final period
/// (`J`, `U.S`, `e.g`).
static INITIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{Lu}|(?:[A-Za-z]\.)+[A-Za-z])$").expect("valid regex")
});

/// One or more blank lines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n\s*").expect("valid regex"));

/// Split text into trimmed sentences.
///
/// A run of terminators ends a sentence when it is followed by the end of the
/// text, or by whitespace and then something other than a lowercase letter.
/// A period after a known abbreviation or an initial never ends one, and
/// neither does a period glued to the next character (`3.14`, `example.com`).
/// Every non-whitespace character of the input lands in exactly one sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((at, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }
        let mut end = at + ch.len_utf8();
        while let Some(&(next_at, next)) = chars.peek() {
            if !is_terminator(next) && !is_closer(next) {
                break;
            }
            end = next_at + next.len_utf8();
            chars.next();
        }
        if ends_sentence(text, at, end) {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into trimmed paragraphs separated by one or more blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// Decide whether the terminator run `text[run_start..run_end]` closes a sentence.
fn ends_sentence(text: &str, run_start: usize, run_end: usize) -> bool {
    let rest = &text[run_end..];
    let Some(next) = rest.chars().next() else {
        return true;
    };
    if !next.is_whitespace() {
        return false;
    }
    let Some(following) = rest.trim_start().chars().next() else {
        return true;
    };
    if following.is_lowercase() {
        return false;
    }
    !(text[run_start..].starts_with('.') && ends_with_abbreviation(&text[..run_start]))
}

/// Whether the last word of `before` is an abbreviation or an initial.
fn ends_with_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    !word.is_empty() && (is_abbreviation(word) || INITIALS.is_match(word))
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}
