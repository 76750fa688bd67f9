//! Active-to-passive conversion of the first eligible clause.

use tracing::{debug, trace};

use super::casing::{capitalize_first, lowercase_first};
use crate::dictionaries::lexicon::is_determiner;
use crate::error::{TaggerError, TaggerResult};
use crate::tagger::Tagger;

/// Rewrite the first clause of `sentence` that has a subject, a verb with a
/// past participle and an object into `<object> is <participle> by <subject>`.
///
/// Returns the sentence unchanged when no clause qualifies or the clause text
/// does not appear verbatim. Only [`TaggerError::Unavailable`] is propagated
/// from participle lookups; other lookup failures skip that clause.
pub fn convert_to_passive<T: Tagger + ?Sized>(tagger: &T, sentence: &str) -> TaggerResult<String> {
    let clauses = tagger.extract_clauses(sentence)?;

    for clause in &clauses {
        let Some((subject, verb, object)) = clause.triple() else {
            continue;
        };
        let participle = match tagger.to_participle(verb) {
            Ok(Some(p)) if !p.is_empty() => p,
            Ok(_) => continue,
            Err(TaggerError::Unavailable) => return Err(TaggerError::Unavailable),
            Err(err) => {
                debug!(verb, error = %err, "participle lookup failed");
                continue;
            }
        };

        let active = format!("{subject} {verb} {object}");
        let Some(pos) = sentence.find(&active) else {
            debug!(%active, "clause text not found verbatim");
            continue;
        };
        let at_start = sentence[..pos].chars().all(|c| !c.is_alphanumeric());
        let passive = passive_phrase(subject, &participle, object, at_start);
        trace!(%active, %passive, "converted clause");

        let mut out = String::with_capacity(sentence.len() + 8);
        out.push_str(&sentence[..pos]);
        out.push_str(&passive);
        out.push_str(&sentence[pos + active.len()..]);
        return Ok(out);
    }

    Ok(sentence.to_string())
}

fn passive_phrase(subject: &str, participle: &str, object: &str, at_start: bool) -> String {
    let agent = if at_start && starts_with_determiner(subject) {
        lowercase_first(subject)
    } else {
        subject.to_string()
    };
    let patient = if at_start {
        capitalize_first(object)
    } else {
        object.to_string()
    };
    format!("{patient} is {participle} by {agent}")
}

fn starts_with_determiner(phrase: &str) -> bool {
    phrase.split_whitespace().next().is_some_and(is_determiner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{Clause, RuleTagger, TaggedToken};

    #[test]
    fn converts_simple_clause() {
        let out = convert_to_passive(&RuleTagger::new(), "The team wrote the report.").unwrap();
        assert_eq!(out, "The report is written by the team.");
    }

    #[test]
    fn pronoun_subject_is_kept_verbatim() {
        let out = convert_to_passive(&RuleTagger::new(), "She wrote the report.").unwrap();
        assert_eq!(out, "The report is written by She.");
    }

    #[test]
    fn adverb_between_subject_and_verb_skips() {
        let sentence = "The team quickly wrote the report.";
        assert_eq!(
            convert_to_passive(&RuleTagger::new(), sentence).unwrap(),
            sentence
        );
    }

    #[test]
    fn non_verbatim_clause_is_a_silent_no_op() {
        let sentence = "The team  wrote the report.";
        assert_eq!(
            convert_to_passive(&RuleTagger::new(), sentence).unwrap(),
            sentence
        );
    }

    #[test]
    fn agent_keeps_capital_mid_sentence() {
        assert_eq!(
            passive_phrase("The team", "written", "the report", false),
            "the report is written by The team"
        );
        assert_eq!(
            passive_phrase("Alice", "written", "the report", true),
            "The report is written by Alice"
        );
    }

    struct FixedClause {
        parts: (&'static str, &'static str, &'static str),
        participle: TaggerResult<Option<String>>,
    }

    impl FixedClause {
        fn new(participle: TaggerResult<Option<String>>) -> Self {
            Self {
                parts: ("Researchers", "collected", "samples"),
                participle,
            }
        }
    }

    impl Tagger for FixedClause {
        fn segment_sentences(&self, text: &str) -> TaggerResult<Vec<String>> {
            Ok(vec![text.to_string()])
        }

        fn tag_tokens(&self, _sentence: &str) -> TaggerResult<Vec<TaggedToken>> {
            Ok(Vec::new())
        }

        fn extract_clauses(&self, sentence: &str) -> TaggerResult<Vec<Clause>> {
            Ok(vec![Clause {
                text: sentence.to_string(),
                subject: Some(self.parts.0.to_string()),
                verb: Some(self.parts.1.to_string()),
                object: Some(self.parts.2.to_string()),
            }])
        }

        fn to_participle(&self, _verb: &str) -> TaggerResult<Option<String>> {
            self.participle.clone()
        }
    }

    #[test]
    fn missing_or_empty_participle_skips() {
        let sentence = "Researchers collected samples.";
        for participle in [Ok(None), Ok(Some(String::new()))] {
            let tagger = FixedClause::new(participle);
            assert_eq!(convert_to_passive(&tagger, sentence).unwrap(), sentence);
        }
    }

    #[test]
    fn participle_failure_skips_but_unavailable_propagates() {
        let sentence = "Researchers collected samples.";
        let failing = FixedClause::new(Err(TaggerError::Failed("no model".to_string())));
        assert_eq!(convert_to_passive(&failing, sentence).unwrap(), sentence);

        let gone = FixedClause::new(Err(TaggerError::Unavailable));
        assert_eq!(
            convert_to_passive(&gone, sentence),
            Err(TaggerError::Unavailable)
        );
    }

    #[test]
    fn uses_tagger_participle() {
        let tagger = FixedClause::new(Ok(Some("collected".to_string())));
        assert_eq!(
            convert_to_passive(&tagger, "Researchers collected samples.").unwrap(),
            "Samples is collected by Researchers."
        );
    }

    #[test]
    fn pronoun_object_is_converted() {
        let tagger = FixedClause {
            parts: ("The team", "thanked", "them"),
            participle: Ok(Some("thanked".to_string())),
        };
        assert_eq!(
            convert_to_passive(&tagger, "The team thanked them.").unwrap(),
            "Them is thanked by the team."
        );
    }
}
