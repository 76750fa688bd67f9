//! Academic transition phrases prepended to sentences.

/// Connective phrases, each already capitalized and ending in a comma.
pub const ACADEMIC_TRANSITIONS: &[&str] = &[
    "Moreover,",
    "Additionally,",
    "Furthermore,",
    "Hence,",
    "Therefore,",
    "Consequently,",
    "Nonetheless,",
    "Nevertheless,",
    "In light of this,",
    "Given these points,",
    "Subsequently,",
    "In this regard,",
    "To this end,",
    "In this context,",
    "Correspondingly,",
    "Similarly,",
    "Equally important,",
];

/// Whether a sentence already opens with one of the academic transitions.
pub fn starts_with_transition(sentence: &str) -> bool {
    let lower = sentence.trim_start().to_lowercase();
    ACADEMIC_TRANSITIONS
        .iter()
        .any(|t| lower.starts_with(&t.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_leading_transition_case_insensitively() {
        assert!(starts_with_transition("Moreover, the data agree."));
        assert!(starts_with_transition("moreover, the data agree."));
        assert!(starts_with_transition("IN THIS REGARD, nothing changed."));
    }

    #[test]
    fn ignores_transition_elsewhere() {
        assert!(!starts_with_transition("The data, moreover, agree."));
        assert!(!starts_with_transition("Moreover the comma is missing."));
    }

    #[test]
    fn phrases_are_capitalized_with_comma() {
        for phrase in ACADEMIC_TRANSITIONS {
            assert!(phrase.ends_with(','));
            assert!(phrase.chars().next().is_some_and(char::is_uppercase));
        }
    }
}
