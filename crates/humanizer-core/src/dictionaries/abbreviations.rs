//! Abbreviations whose trailing period does not end a sentence.
//!
//! Entries are stored lowercase, without the final period. Short forms that
//! double as everyday words ("in", "no", "sat", "miss") are left out so a
//! sentence ending in one of them still splits.

use std::collections::HashSet;
use std::sync::LazyLock;

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "hon", "esq", "capt", "col",
    "gen", "lt", "maj", "sgt", "adm", "sen", "rep", "gov", "pres",
];

const DEGREES: &[&str] = &[
    "b.a", "b.s", "b.sc", "m.a", "m.s", "m.sc", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m",
    "ed.d", "psy.d", "phd", "msc", "bsc",
];

/// Citation and cross-reference shorthand common in academic prose.
const SCHOLARLY: &[&str] = &[
    "al", "e.g", "i.e", "etc", "cf", "viz", "ibid", "id", "cit", "n.b",
    "vs", "approx", "ca", "vol", "vols", "pp", "ch", "chap", "sect", "fig", "figs", "eq",
    "eqs", "eds", "trans", "repr", "suppl", "ser", "dept", "univ", "assoc", "inst",
];

const CALENDAR: &[&str] = &[
    "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "thu", "thur", "thurs",
];

const PLACES_AND_ORGS: &[&str] = &[
    "st", "ave", "blvd", "rd", "apt", "bldg", "u.s", "u.k", "u.s.a", "e.u", "n.y", "inc",
    "corp", "ltd", "llc", "co", "bros", "intl",
];

const UNITS: &[&str] = &[
    "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "sq", "mph", "kph",
    "rpm",
];

/// Every known abbreviation.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [TITLES, DEGREES, SCHOLARLY, CALENDAR, PLACES_AND_ORGS, UNITS]
        .into_iter()
        .flatten()
        .copied()
        .collect()
});

/// Whether `word` (any case, with or without periods at either end) is a
/// known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(word.to_lowercase().trim_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_and_citations() {
        for word in ["Dr", "dr.", "Prof", "al", "e.g.", "i.e", "Fig", "pp", "vol"] {
            assert!(is_abbreviation(word), "{word} should be an abbreviation");
        }
    }

    #[test]
    fn ordinary_words_are_not_abbreviations() {
        for word in ["hello", "report", "in", "no", "sat", "sun", "miss", "max"] {
            assert!(!is_abbreviation(word), "{word} should end a sentence");
        }
    }

    #[test]
    fn entries_are_lowercase_without_final_period() {
        for entry in ABBREVIATIONS.iter() {
            assert_eq!(*entry, entry.to_lowercase());
            assert!(!entry.ends_with('.'), "{entry}");
        }
    }
}
