//! Closed-class word lists and open-class hints for part-of-speech tagging.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::synonyms::SYNONYM_TABLE;

/// Personal, reflexive and indefinite pronouns.
pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        "mine", "yours", "hers", "ours", "theirs", "someone", "somebody", "something", "anyone",
        "anybody", "anything", "everyone", "everybody", "everything", "nobody", "nothing",
        "one",
    ]
    .into_iter()
    .collect()
});

/// Articles, demonstratives, possessives and quantifiers that open noun phrases.
pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "its", "our",
        "their", "each", "every", "some", "any", "no", "all", "both", "many", "much", "few",
        "several", "another", "other", "such", "either", "neither", "most", "more", "less",
    ]
    .into_iter()
    .collect()
});

/// Prepositions and particles.
pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "across", "against", "along", "among", "around", "at", "behind",
        "below", "beneath", "beside", "between", "beyond", "by", "despite", "down", "during",
        "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out",
        "outside", "over", "past", "per", "through", "throughout", "to", "toward", "towards",
        "under", "underneath", "up", "upon", "via", "with", "within", "without",
    ]
    .into_iter()
    .collect()
});

/// Coordinating and subordinating conjunctions plus relative/interrogative words.
///
/// Every entry also marks a clause boundary.
pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while",
        "whereas", "when", "whenever", "where", "wherever", "if", "unless", "since", "until",
        "once", "than", "whether", "which", "who", "whom", "whose", "what", "how", "why",
    ]
    .into_iter()
    .collect()
});

/// Auxiliary and modal verbs.
pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "will", "would", "shall", "should", "can", "cannot", "could", "may",
        "might", "must", "ought",
    ]
    .into_iter()
    .collect()
});

/// Common adverbs that do not end in `-ly`.
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "never", "always", "often", "sometimes", "already", "still", "also", "just",
        "even", "very", "too", "quite", "rather", "almost", "soon", "now", "then", "here",
        "there", "again", "ever", "perhaps", "together", "however", "therefore", "moreover",
        "furthermore", "thus", "hence", "instead", "otherwise", "meanwhile", "nonetheless",
        "nevertheless", "consequently", "subsequently", "similarly", "additionally", "only",
        "well", "yesterday", "today", "tomorrow",
    ]
    .into_iter()
    .collect()
});

/// Adjectives beyond the synonym headwords, including `-ly` adjectives.
pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set: HashSet<&'static str> = [
        "great", "little", "long", "short", "young", "early", "late", "likely", "friendly",
        "lonely", "lovely", "daily", "weekly", "monthly", "yearly", "ugly", "silly", "holy",
        "public", "private", "social", "human", "whole", "real", "true", "false", "clear",
        "full", "simple", "strong", "weak", "free", "open", "possible", "able", "recent",
        "certain", "major", "minor", "main", "final", "key", "current", "general", "specific",
        "common", "local", "national", "global", "modern", "best", "better", "worse", "worst",
        "next", "last", "first", "own", "right", "wrong", "happy", "sad", "ready", "sure",
    ]
    .into_iter()
    .collect();
    set.extend([
        "good",
        "bad",
        "big",
        "small",
        "important",
        "hard",
        "easy",
        "high",
        "low",
        "new",
        "old",
        "different",
        "same",
        "large",
    ]);
    set
});

/// Nouns that would otherwise be caught by verb or adverb suffix heuristics.
pub static NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set: HashSet<&'static str> = [
        "thing", "nothing", "something", "anything", "everything", "king", "ring", "spring",
        "string", "wing", "morning", "evening", "building", "meeting", "ceiling", "family",
        "supply", "reply", "ally", "assembly", "italy", "bed", "need", "speed", "seed", "feed",
        "shed", "reed", "creed", "greed", "hundred", "idea", "problem", "person", "people",
        "world", "data", "report", "team", "code", "research", "study", "paper", "essay",
        "student", "teacher", "system", "society", "process", "shift", "future",
    ]
    .into_iter()
    .collect();
    set.extend(["way", "part", "time", "end", "place", "result"]);
    set
});

/// Words that are routinely both nouns and verbs; context decides.
pub static NOUN_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "work", "change", "need", "help", "use", "look", "play", "run", "move", "end", "place",
        "result", "shift", "show", "call", "try", "report", "study", "process", "answer",
        "plan", "test", "review", "support", "design", "focus", "impact", "increase", "decrease",
        "research", "control", "cause", "effect", "visit", "love", "hope", "time", "feed",
        "seed", "speed", "shed", "code", "paper", "like",
    ]
    .into_iter()
    .collect()
});

/// Regular verbs recognized by base form in addition to the irregular table
/// and the verb headwords of the synonym table.
pub static REGULAR_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set: HashSet<&'static str> = [
        "change", "create", "develop", "improve", "analyze", "analyse", "examine", "describe",
        "explain", "discuss", "suggest", "argue", "claim", "provide", "include", "require",
        "produce", "reduce", "increase", "decrease", "consider", "complete", "design",
        "publish", "review", "solve", "support", "test", "train", "study", "finish", "start",
        "stop", "want", "ignore", "answer", "plan", "watch", "listen", "open", "close", "walk",
        "talk", "ask", "visit", "love", "hate", "hope", "wish", "affect", "cause", "carry",
        "collect", "compare", "contain", "deliver", "discover", "enjoy", "expect", "follow",
        "form", "handle", "imagine", "involve", "join", "measure", "notice", "offer", "order",
        "own", "paint", "prepare", "present", "protect", "reach", "realize", "receive",
        "record", "remember", "repair", "replace", "report", "represent", "return", "save",
        "serve", "share", "suffer", "travel", "turn", "wait", "wonder", "shift", "evaluate",
        "assess", "adopt", "automate", "transform", "influence",
    ]
    .into_iter()
    .collect();
    // Verb headwords start at "say" in the synonym table.
    set.extend(
        SYNONYM_TABLE
            .iter()
            .skip_while(|(word, _)| *word != "say")
            .map(|(word, _)| *word),
    );
    set
});

/// Check if a word is a determiner.
pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(word.to_lowercase().as_str())
}
