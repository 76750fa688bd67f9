//! Irregular verb dictionary.
//!
//! Base forms with their simple past and past participle, used to convert verb
//! phrases to participles for passive constructions and to recognize inflected
//! verbs while tagging. Also carries adjective exceptions that look like
//! participles and linking verbs that take complements rather than objects.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Irregular verbs as `(base, simple past, past participle)`.
pub const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("be", "was", "been"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bet", "bet", "bet"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("breed", "bred", "bred"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("burn", "burnt", "burnt"),
    ("burst", "burst", "burst"),
    ("buy", "bought", "bought"),
    ("cast", "cast", "cast"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("cling", "clung", "clung"),
    ("come", "came", "come"),
    ("cost", "cost", "cost"),
    ("creep", "crept", "crept"),
    ("cut", "cut", "cut"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("do", "did", "done"),
    ("draw", "drew", "drawn"),
    ("dream", "dreamt", "dreamt"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("dwell", "dwelt", "dwelt"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fling", "flung", "flung"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forecast", "forecast", "forecast"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("forsake", "forsook", "forsaken"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grind", "ground", "ground"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("have", "had", "had"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hit", "hit", "hit"),
    ("hold", "held", "held"),
    ("hurt", "hurt", "hurt"),
    ("keep", "kept", "kept"),
    ("kneel", "knelt", "knelt"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("lean", "leant", "leant"),
    ("learn", "learnt", "learnt"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("let", "let", "let"),
    ("lie", "lay", "lain"),
    ("light", "lit", "lit"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("mistake", "mistook", "mistaken"),
    ("overcome", "overcame", "overcome"),
    ("overthrow", "overthrew", "overthrown"),
    ("pay", "paid", "paid"),
    ("prove", "proved", "proven"),
    ("put", "put", "put"),
    ("quit", "quit", "quit"),
    ("read", "read", "read"),
    ("rid", "rid", "rid"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("sew", "sewed", "sewn"),
    ("shake", "shook", "shaken"),
    ("shed", "shed", "shed"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("shrink", "shrank", "shrunk"),
    ("shut", "shut", "shut"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("slay", "slew", "slain"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("sling", "slung", "slung"),
    ("slit", "slit", "slit"),
    ("sow", "sowed", "sown"),
    ("speak", "spoke", "spoken"),
    ("speed", "sped", "sped"),
    ("spell", "spelt", "spelt"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("split", "split", "split"),
    ("spread", "spread", "spread"),
    ("spring", "sprang", "sprung"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("sting", "stung", "stung"),
    ("stink", "stank", "stunk"),
    ("stride", "strode", "stridden"),
    ("strike", "struck", "struck"),
    ("string", "strung", "strung"),
    ("strive", "strove", "striven"),
    ("swear", "swore", "sworn"),
    ("sweep", "swept", "swept"),
    ("swim", "swam", "swum"),
    ("swing", "swung", "swung"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("thrust", "thrust", "thrust"),
    ("tread", "trod", "trodden"),
    ("understand", "understood", "understood"),
    ("undergo", "underwent", "undergone"),
    ("undo", "undid", "undone"),
    ("upset", "upset", "upset"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weave", "wove", "woven"),
    ("weep", "wept", "wept"),
    ("win", "won", "won"),
    ("wind", "wound", "wound"),
    ("withdraw", "withdrew", "withdrawn"),
    ("wring", "wrung", "wrung"),
    ("write", "wrote", "written"),
];

/// Past participle keyed by base form.
static PARTICIPLES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    IRREGULAR_VERBS
        .iter()
        .map(|&(base, _, participle)| (base, participle))
        .collect()
});

/// Base form keyed by every irregular surface form (base, past, participle).
static BASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(base, past, participle) in IRREGULAR_VERBS {
        // First writer wins: "lay" is both a base and the past of "lie".
        map.entry(base).or_insert(base);
        map.entry(past).or_insert(base);
        map.entry(participle).or_insert(base);
    }
    map
});

/// Words ending in -ed/-en that are typically adjectives, not passive voice.
pub static ADJECTIVE_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "tired",
        "excited",
        "interested",
        "bored",
        "confused",
        "worried",
        "scared",
        "frightened",
        "amazed",
        "surprised",
        "shocked",
        "pleased",
        "satisfied",
        "disappointed",
        "frustrated",
        "embarrassed",
        "ashamed",
        "annoyed",
        "delighted",
        "thrilled",
        "stunned",
        "overwhelmed",
        "talented",
        "gifted",
        "blessed",
        "cursed",
        "aged",
        "beloved",
        "learned",
        "skilled",
        "experienced",
        "advanced",
        "supposed",
        "alleged",
        "concerned",
        "determined",
        "devoted",
        "distinguished",
        "educated",
        "enlightened",
        "equipped",
        "established",
        "esteemed",
        "extended",
        "informed",
        "inspired",
        "involved",
        "limited",
        "marked",
        "mixed",
        "organized",
        "packed",
        "prepared",
        "pronounced",
        "qualified",
        "refined",
        "relaxed",
        "relieved",
        "renowned",
        "reserved",
        "respected",
        "retired",
        "sophisticated",
        "trained",
        "troubled",
        "united",
        "unmarried",
        "used",
        "varied",
        "wasted",
        "wicked",
        "wounded",
    ]
    .into_iter()
    .collect()
});

/// Linking verbs that might be confused with passive voice auxiliaries.
pub static LINKING_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "seem",
        "seems",
        "seemed",
        "seeming",
        "appear",
        "appears",
        "appeared",
        "appearing",
        "become",
        "becomes",
        "became",
        "becoming",
        "feel",
        "feels",
        "felt",
        "feeling",
        "look",
        "looks",
        "looked",
        "looking",
        "remain",
        "remains",
        "remained",
        "remaining",
        "stay",
        "stays",
        "stayed",
        "staying",
        "sound",
        "sounds",
        "sounded",
        "sounding",
        "smell",
        "smells",
        "smelled",
        "smelling",
        "taste",
        "tastes",
        "tasted",
        "tasting",
    ]
    .into_iter()
    .collect()
});

/// Irregular past participle for a base form (`"write"` → `"written"`).
pub fn irregular_participle(base: &str) -> Option<&'static str> {
    PARTICIPLES.get(base.to_lowercase().as_str()).copied()
}

/// Base form of any irregular surface form (`"wrote"` → `"write"`).
pub fn irregular_base(word: &str) -> Option<&'static str> {
    BASES.get(word.to_lowercase().as_str()).copied()
}

/// Check if a word is likely an adjective exception.
pub fn is_adjective_exception(word: &str) -> bool {
    ADJECTIVE_EXCEPTIONS.contains(word.to_lowercase().as_str())
}

/// Check if a word is a linking verb.
pub fn is_linking_verb(word: &str) -> bool {
    LINKING_VERBS.contains(word.to_lowercase().as_str())
}
