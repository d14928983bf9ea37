use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Grammatical category assigned to a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    PluralNoun,
    ProperNoun,
    Pronoun,
    Verb,
    Modal,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
}

impl PosTag {
    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun)
    }
}

/// Part-of-speech capability consumed by the bio analyzer.
pub trait PosTagger {
    fn tag(&self, token: &str) -> PosTag;
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "few", "many", "much", "more", "most", "several", "such",
    "another", "what", "which", "whose",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their", "mine",
    "yours", "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "yourselves", "themselves", "who", "whom", "whoever", "something", "anything",
    "everything", "nothing", "someone", "anyone", "everyone", "somebody", "anybody", "everybody",
    "nobody", "none",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "among", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
    "off", "over", "under", "near", "behind", "beyond", "within", "without", "across", "along",
    "around", "past", "toward", "towards", "upon", "per", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "until", "since", "whereas", "whether", "than", "as",
];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

// base forms, frequent irregulars and auxiliaries; unigram lookup only
const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "go", "goes", "went", "gone", "get", "gets", "got", "make",
    "makes", "made", "see", "saw", "seen", "know", "knew", "known", "think", "thought", "take",
    "took", "want", "wants", "use", "find", "found", "give", "gave", "tell", "told", "work",
    "call", "try", "ask", "need", "feel", "felt", "become", "became", "leave", "left", "put",
    "mean", "meant", "keep", "kept", "let", "begin", "began", "seem", "help", "talk", "turn",
    "start", "show", "hear", "heard", "play", "run", "ran", "move", "like", "love", "enjoy",
    "prefer", "live", "believe", "hold", "bring", "brought", "happen", "write", "wrote",
    "written", "read", "sit", "stand", "lose", "lost", "pay", "paid", "meet", "met", "include",
    "continue", "set", "learn", "change", "lead", "understand", "watch", "follow", "stop",
    "create", "speak", "spoke", "allow", "add", "spend", "spent", "grow", "grew", "open",
    "walk", "win", "won", "offer", "remember", "teach", "taught", "build", "built", "design",
    "develop", "code", "study", "travel", "cook", "bake", "hike", "swim", "climb", "paint",
    "draw", "sing", "dance", "specialize", "focus",
];

const ADJECTIVES: &[&str] = &[
    "new", "good", "great", "big", "small", "large", "old", "young", "long", "short", "little",
    "own", "other", "same", "different", "important", "interesting", "interested", "artificial",
    "digital", "local", "national", "international", "recent", "early", "late", "high", "low",
    "public", "private", "strong", "happy", "avid", "passionate", "keen", "favorite", "daily",
    "weekly", "free", "full", "current", "popular",
];

const ADVERBS: &[&str] = &[
    "very", "really", "quite", "too", "also", "just", "now", "then", "soon", "often", "never",
    "always", "sometimes", "usually", "rarely", "here", "there", "well", "almost", "already",
    "still", "not", "even", "maybe", "perhaps", "mostly", "mainly", "currently", "recently",
];

static LEXICON: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for w in DETERMINERS {
        m.insert(*w, PosTag::Determiner);
    }
    for w in PRONOUNS {
        m.insert(*w, PosTag::Pronoun);
    }
    for w in PREPOSITIONS {
        m.insert(*w, PosTag::Preposition);
    }
    for w in CONJUNCTIONS {
        m.insert(*w, PosTag::Conjunction);
    }
    for w in MODALS {
        m.insert(*w, PosTag::Modal);
    }
    for w in VERBS {
        m.insert(*w, PosTag::Verb);
    }
    for w in ADJECTIVES {
        m.insert(*w, PosTag::Adjective);
    }
    for w in ADVERBS {
        m.insert(*w, PosTag::Adverb);
    }
    m
});

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Rule and lexicon based tagger. Closed-class and frequent open-class words
/// come from the lexicon; everything else goes through digit, capitalization
/// and suffix checks. Unknown lower-case words default to common noun, which
/// is the dominant category for out-of-lexicon vocabulary in lower-cased
/// free text.
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        LexiconTagger
    }

    fn is_lexicon_verb(word: &str) -> bool {
        matches!(LEXICON.get(word), Some(PosTag::Verb))
    }

    // whether an -ing/-ed remainder is an inflected known verb:
    // "lov" -> "love", "runn" -> "run", "read" -> "read"
    fn is_verb_stem(stem: &str) -> bool {
        if Self::is_lexicon_verb(stem) {
            return true;
        }
        let mut with_e = String::from(stem);
        with_e.push('e');
        if Self::is_lexicon_verb(&with_e) {
            return true;
        }
        let bytes = stem.as_bytes();
        if bytes.len() >= 2
            && bytes[bytes.len() - 1].is_ascii_alphabetic()
            && bytes[bytes.len() - 1] == bytes[bytes.len() - 2]
        {
            return Self::is_lexicon_verb(&stem[..stem.len() - 1]);
        }
        false
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, token: &str) -> PosTag {
        if token.chars().any(|c| c.is_ascii_digit()) {
            return PosTag::Numeral;
        }
        let lower = token.to_lowercase();
        if let Some(&tag) = LEXICON.get(lower.as_str()) {
            return tag;
        }
        if token.chars().next().map_or(false, |c| c.is_uppercase()) {
            return PosTag::ProperNoun;
        }
        if let Some(stem) = lower.strip_suffix("ing") {
            if stem.len() >= 2 && Self::is_verb_stem(stem) {
                return PosTag::Verb;
            }
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            if stem.len() >= 2 {
                if Self::is_verb_stem(stem) {
                    return PosTag::Verb;
                }
                return PosTag::Adjective;
            }
        }
        if lower.len() > 3 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        for suffix in ADJECTIVE_SUFFIXES {
            if lower.len() > suffix.len() + 2 && lower.ends_with(suffix) {
                return PosTag::Adjective;
            }
        }
        for suffix in VERB_SUFFIXES {
            if lower.len() > suffix.len() + 2 && lower.ends_with(suffix) {
                return PosTag::Verb;
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if stem.len() >= 3 && !stem.ends_with('s') {
                if Self::is_lexicon_verb(stem) {
                    return PosTag::Verb;
                }
                return PosTag::PluralNoun;
            }
        }
        PosTag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("the"), PosTag::Determiner);
        assert_eq!(tagger.tag("i"), PosTag::Pronoun);
        assert_eq!(tagger.tag("in"), PosTag::Preposition);
        assert_eq!(tagger.tag("and"), PosTag::Conjunction);
        assert_eq!(tagger.tag("should"), PosTag::Modal);
        // lexicon lookup is case-insensitive
        assert_eq!(tagger.tag("The"), PosTag::Determiner);
    }

    #[test]
    fn test_open_class_lexicon() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("love"), PosTag::Verb);
        assert_eq!(tagger.tag("am"), PosTag::Verb);
        assert_eq!(tagger.tag("artificial"), PosTag::Adjective);
        assert_eq!(tagger.tag("very"), PosTag::Adverb);
    }

    #[test]
    fn test_default_noun() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("space"), PosTag::Noun);
        assert_eq!(tagger.tag("science"), PosTag::Noun);
        assert_eq!(tagger.tag("software"), PosTag::Noun);
        assert_eq!(tagger.tag("intelligence"), PosTag::Noun);
    }

    #[test]
    fn test_gerund_of_known_verb_is_verb() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("going"), PosTag::Verb);
        assert_eq!(tagger.tag("loving"), PosTag::Verb);
        assert_eq!(tagger.tag("running"), PosTag::Verb);
    }

    #[test]
    fn test_ing_noun_survives() {
        // stems of these are not lexicon verbs, so they stay nouns
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("engineering"), PosTag::Noun);
        assert_eq!(tagger.tag("ring"), PosTag::Noun);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("quickly"), PosTag::Adverb);
        assert_eq!(tagger.tag("famous"), PosTag::Adjective);
        assert_eq!(tagger.tag("talented"), PosTag::Adjective);
        assert_eq!(tagger.tag("optimize"), PosTag::Verb);
    }

    #[test]
    fn test_plural() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("headlines"), PosTag::PluralNoun);
        assert_eq!(tagger.tag("sciences"), PosTag::PluralNoun);
        // third person singular of a known verb is not a noun
        assert_eq!(tagger.tag("loves"), PosTag::Verb);
        // too short to be analyzed as a plural
        assert_eq!(tagger.tag("gas"), PosTag::Noun);
    }

    #[test]
    fn test_proper_noun_and_numeral() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("NASA"), PosTag::ProperNoun);
        assert_eq!(tagger.tag("Rust"), PosTag::ProperNoun);
        assert_eq!(tagger.tag("2024"), PosTag::Numeral);
        assert_eq!(tagger.tag("32.3"), PosTag::Numeral);
    }

    #[test]
    fn test_is_noun() {
        assert!(PosTag::Noun.is_noun());
        assert!(PosTag::PluralNoun.is_noun());
        assert!(PosTag::ProperNoun.is_noun());
        assert!(!PosTag::Verb.is_noun());
        assert!(!PosTag::Numeral.is_noun());
    }
}
