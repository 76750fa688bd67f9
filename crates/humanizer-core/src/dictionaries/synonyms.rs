//! Academic synonym dictionary.
//!
//! Lowercase headwords (nouns, adjectives, verbs) mapped to ordered lists of
//! more formal alternatives.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Headwords and their candidate replacements, grouped by part of speech.
pub const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    // Nouns
    ("thing", &["element", "component", "entity", "factor", "aspect"]),
    ("idea", &["concept", "notion", "perspective", "theory", "framework"]),
    ("problem", &["issue", "challenge", "dilemma", "obstacle", "impediment"]),
    ("result", &["outcome", "consequence", "implication", "finding", "determination"]),
    ("part", &["component", "constituent", "segment", "element", "portion"]),
    ("way", &["methodology", "approach", "strategy", "mechanism", "procedure"]),
    ("person", &["individual", "subject", "participant", "respondent", "entity"]),
    ("time", &["duration", "period", "interval", "timeframe", "chronology"]),
    ("end", &["conclusion", "termination", "cessation", "culmination", "finalization"]),
    ("place", &["location", "site", "venue", "position", "locale"]),
    // Adjectives
    ("good", &["favorable", "beneficial", "advantageous", "superior", "exemplary"]),
    ("bad", &["adverse", "unfavorable", "detrimental", "suboptimal", "deficient"]),
    ("big", &["substantial", "considerable", "significant", "extensive", "pronounced"]),
    ("small", &["minimal", "limited", "restricted", "constrained", "negligible"]),
    ("important", &["significant", "crucial", "essential", "fundamental", "pivotal"]),
    ("hard", &["challenging", "demanding", "arduous", "strenuous", "rigorous"]),
    ("easy", &["straightforward", "uncomplicated", "manageable", "accessible", "undemanding"]),
    ("high", &["elevated", "substantial", "considerable", "significant", "pronounced"]),
    ("low", &["minimal", "limited", "restricted", "constrained", "negligible"]),
    ("new", &["novel", "innovative", "recent", "contemporary", "emergent"]),
    ("old", &["traditional", "established", "conventional", "preceding", "antecedent"]),
    ("different", &["distinct", "disparate", "divergent", "heterogeneous", "contrasting"]),
    ("same", &["identical", "equivalent", "analogous", "corresponding", "homologous"]),
    ("large", &["substantial", "extensive", "considerable", "significant", "voluminous"]),
    // Verbs
    ("say", &["assert", "contend", "posit", "articulate", "postulate"]),
    ("think", &["consider", "contemplate", "conceptualize", "theorize", "hypothesize"]),
    ("see", &["observe", "examine", "investigate", "analyze", "scrutinize"]),
    ("know", &["comprehend", "understand", "ascertain", "discern", "recognize"]),
    ("get", &["obtain", "acquire", "procure", "attain", "secure"]),
    ("make", &["construct", "produce", "generate", "formulate", "synthesize"]),
    ("go", &["proceed", "advance", "progress", "continue", "ensue"]),
    ("come", &["approach", "advance", "progress", "emerge", "materialize"]),
    ("take", &["acquire", "obtain", "extract", "derive", "procure"]),
    ("find", &["discover", "identify", "ascertain", "determine", "establish"]),
    ("give", &["provide", "supply", "furnish", "contribute", "deliver"]),
    ("tell", &["inform", "communicate", "convey", "relate", "elucidate"]),
    ("work", &["function", "operate", "perform", "execute", "process"]),
    ("call", &["designate", "characterize", "denominate", "classify", "categorize"]),
    ("try", &["attempt", "endeavor", "strive", "undertake", "pursue"]),
    ("ask", &["inquire", "investigate", "examine", "explore", "interrogate"]),
    ("need", &["require", "necessitate", "entail", "warrant", "demand"]),
    ("feel", &["perceive", "discern", "sense", "apprehend", "experience"]),
    ("become", &["transform into", "develop into", "evolve into", "convert to", "transition to"]),
    ("leave", &["depart from", "withdraw from", "exit from", "abandon", "vacate"]),
    ("put", &["position", "situate", "place", "locate", "establish"]),
    ("mean", &["signify", "denote", "indicate", "represent", "imply"]),
    ("keep", &["maintain", "sustain", "preserve", "retain", "conserve"]),
    ("let", &["permit", "allow", "enable", "facilitate", "accommodate"]),
    ("begin", &["commence", "initiate", "instigate", "embark upon", "undertake"]),
    ("seem", &["appear", "manifest", "present as", "be perceived as", "be regarded as"]),
    ("help", &["assist", "facilitate", "support", "aid", "contribute to"]),
    ("show", &["demonstrate", "illustrate", "elucidate", "depict", "explicate"]),
    ("hear", &["perceive", "discern", "apprehend", "detect", "distinguish"]),
    ("play", &["engage in", "participate in", "perform", "execute", "conduct"]),
    ("run", &["operate", "function", "proceed", "progress", "execute"]),
    ("move", &["transfer", "relocate", "reposition", "transpose", "displace"]),
    ("like", &["prefer", "favor", "be partial to", "have a preference for", "be inclined toward"]),
    ("live", &["reside", "dwell", "inhabit", "occupy", "populate"]),
    ("believe", &["consider", "maintain", "hold that", "be of the opinion", "contend"]),
    ("bring", &["introduce", "present", "submit", "advance", "propose"]),
    ("happen", &["occur", "transpire", "take place", "come about", "materialize"]),
    ("use", &["utilize", "employ", "apply", "implement", "exercise"]),
    ("look", &["examine", "inspect", "scrutinize", "investigate", "analyze"]),
];

/// Synonym candidates keyed by lowercase headword.
pub static SYNONYMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SYNONYM_TABLE.iter().copied().collect());

/// Look up the candidate synonyms for a lowercase headword.
pub fn synonyms_for(word: &str) -> Option<&'static [&'static str]> {
    SYNONYMS.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_headword_has_three_to_five_candidates() {
        for (word, candidates) in SYNONYM_TABLE {
            assert!(
                (3..=5).contains(&candidates.len()),
                "{word} has {} candidates",
                candidates.len()
            );
        }
    }

    #[test]
    fn headwords_are_unique_and_lowercase() {
        assert_eq!(SYNONYMS.len(), SYNONYM_TABLE.len());
        for (word, _) in SYNONYM_TABLE {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert!(synonyms_for("good").is_some());
        assert!(synonyms_for("Good").is_none());
        assert!(synonyms_for("goodness").is_none());
    }
}
