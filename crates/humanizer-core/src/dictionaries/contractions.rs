//! Contraction dictionary.
//!
//! Maps lowercase contraction surface forms to their expansions. Two kinds of
//! entries live here:
//!
//! - **Whole-word** contractions (`"can't"` → `"cannot"`), matched as a
//!   complete word.
//! - **Bound suffixes** (`"'re"` → `" are"`, `"n't"` → `" not"`), matched as a
//!   trailing morpheme on any word stem. Their expansions carry the leading
//!   space that separates them from the stem.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Bound suffix contractions and their expansions.
pub const SUFFIX_CONTRACTIONS: &[(&str, &str)] = &[
    ("n't", " not"),
    ("'re", " are"),
    ("'s", " is"),
    ("'ll", " will"),
    ("'ve", " have"),
    ("'d", " would"),
    ("'m", " am"),
];

/// Whole-word contractions and their expansions.
pub const WORD_CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("i'd", "I would"),
    ("i'll", "I will"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("isn't", "is not"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("mightn't", "might not"),
    ("mustn't", "must not"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("shouldn't", "should not"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("where's", "where is"),
    ("who'd", "who would"),
    ("who'll", "who will"),
    ("who're", "who are"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
    ("y'all", "you all"),
    // Informal contractions without an apostrophe
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("wanna", "want to"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    ("lemme", "let me"),
    ("gimme", "give me"),
];

/// Every contraction, keyed by lowercase surface form.
pub static CONTRACTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    WORD_CONTRACTIONS
        .iter()
        .chain(SUFFIX_CONTRACTIONS.iter())
        .copied()
        .collect()
});

/// Whether a contraction key is a bound suffix rather than a whole word.
pub fn is_suffix_key(key: &str) -> bool {
    key.starts_with('\'') || key == "n't"
}

/// Look up the expansion for a contraction, ignoring case and apostrophe style.
pub fn expansion_for(surface: &str) -> Option<&'static str> {
    let key = surface.to_lowercase().replace('\u{2019}', "'");
    CONTRACTIONS.get(key.as_str()).copied()
}
