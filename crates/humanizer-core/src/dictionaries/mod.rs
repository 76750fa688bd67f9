//! Word lists and tables.
//!
//! Curated data behind the built-in tagger and the rewrite stages:
//! abbreviations for sentence splitting, contractions, irregular verb forms,
//! closed-class lexicons, synonyms and academic transitions.

pub mod abbreviations;
pub mod contractions;
pub mod irregular_verbs;
pub mod lexicon;
pub mod synonyms;
pub mod transitions;
