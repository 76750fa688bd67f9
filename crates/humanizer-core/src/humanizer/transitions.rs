//! Academic transition insertion.

use rand::Rng;
use rand::seq::SliceRandom;

use super::casing::{is_acronym, lowercase_first};
use crate::dictionaries::transitions::{ACADEMIC_TRANSITIONS, starts_with_transition};

/// Prefix `sentence` with a randomly chosen academic transition.
///
/// A sentence that already opens with a transition is returned unchanged. The
/// original first letter is lowered unless the first word is `I` or an
/// acronym.
pub fn add_academic_transition<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    if sentence.trim().is_empty() || starts_with_transition(sentence) {
        return sentence.to_string();
    }
    let Some(transition) = ACADEMIC_TRANSITIONS.choose(rng) else {
        return sentence.to_string();
    };
    let body = sentence.trim_start();
    format!("{transition} {}", demote_first_word(body))
}

fn demote_first_word(sentence: &str) -> String {
    let first_word = sentence
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches(|c: char| !c.is_alphanumeric());
    if first_word == "I" || is_acronym(first_word) {
        sentence.to_string()
    } else {
        lowercase_first(sentence)
    }
}
