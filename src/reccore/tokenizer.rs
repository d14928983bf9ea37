use unicode_segmentation::UnicodeSegmentation;

/// Word tokenizer shared by the bio and headline paths. Both sides must use
/// the same rule so that matching tokens are byte-identical after
/// normalization.
#[derive(Debug)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    pub fn parse_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

#[test]
fn test_parse_tokens() {
    let text = "Quarrel sir! no, sir!";
    let seg = Tokenizer::new();
    let normalized = seg.normalize(text);
    let tokens = seg.parse_tokens(&normalized);
    assert_eq!(tokens, vec!["quarrel", "sir", "no", "sir"]);
}

#[test]
fn test_contractions_and_numbers() {
    let seg = Tokenizer::new();
    let normalized = seg.normalize("Don't jump 32.3 feet");
    let tokens = seg.parse_tokens(&normalized);
    // word boundaries keep contractions and decimals whole
    assert_eq!(tokens, vec!["don't", "jump", "32.3", "feet"]);
}

#[test]
fn test_punctuation_only() {
    let seg = Tokenizer::new();
    let tokens = seg.parse_tokens("?! ... --- !!");
    assert!(tokens.is_empty());
}

#[test]
fn test_hyphens_split() {
    let seg = Tokenizer::new();
    let tokens = seg.parse_tokens("state-of-the-art engineering");
    assert_eq!(tokens, vec!["state", "of", "the", "art", "engineering"]);
}
