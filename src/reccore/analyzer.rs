use super::stopwords;
use super::tagger::{LexiconTagger, PosTagger};
use super::tokenizer::Tokenizer;
use std::collections::HashSet;
use whatlang::{detect, Lang};

/// Extracts the keyword set from a free-text bio: lower-case, tokenize, keep
/// noun-category tokens, drop stopwords.
pub struct BioAnalyzer {
    seg: Tokenizer,
    tagger: LexiconTagger,
    stopwords: HashSet<String>,
}

impl BioAnalyzer {
    pub fn new() -> Self {
        Self::with_stopwords(stopwords::english())
    }

    // stopwords must be pre-lowered, comparison is exact
    pub fn with_stopwords(stopwords: HashSet<String>) -> Self {
        BioAnalyzer {
            seg: Tokenizer::new(),
            tagger: LexiconTagger::new(),
            stopwords,
        }
    }

    pub fn extract_keywords(&self, bio: &str) -> HashSet<String> {
        if let Some(info) = detect(bio) {
            if info.lang() != Lang::Eng && info.is_reliable() {
                log::warn!(
                    "bio language detected as {}, keyword extraction assumes English",
                    info.lang().eng_name()
                );
            }
        }
        let normalized = self.seg.normalize(bio);
        let mut keywords = HashSet::new();
        for token in self.seg.parse_tokens(&normalized) {
            if !self.tagger.tag(token).is_noun() {
                continue;
            }
            if self.stopwords.contains(token) {
                continue;
            }
            keywords.insert(token.to_string());
        }
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(bio: &str) -> HashSet<String> {
        BioAnalyzer::new().extract_keywords(bio)
    }

    #[test]
    fn test_extract_nouns() {
        let kw = keywords("I am interested in software engineering and artificial intelligence");
        let expected: HashSet<String> = ["software", "engineering", "intelligence"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(kw, expected);
    }

    #[test]
    fn test_verbs_excluded() {
        let kw = keywords("I love Space and Science");
        let expected: HashSet<String> =
            ["space", "science"].iter().map(|s| s.to_string()).collect();
        assert_eq!(kw, expected);
    }

    #[test]
    fn test_empty_bio() {
        assert!(keywords("").is_empty());
    }

    #[test]
    fn test_punctuation_only_bio() {
        assert!(keywords("?! ... !!!").is_empty());
    }

    #[test]
    fn test_all_stopwords() {
        assert!(keywords("the and of in").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let kw = keywords("space space space");
        assert_eq!(kw.len(), 1);
        assert!(kw.contains("space"));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let kw = keywords("NASA and SpaceX fan");
        for k in &kw {
            assert_eq!(k, &k.to_lowercase());
        }
        assert!(kw.contains("nasa"));
        assert!(kw.contains("spacex"));
        assert!(kw.contains("fan"));
    }

    #[test]
    fn test_explicit_stopword_set() {
        let custom: HashSet<String> = ["space"].iter().map(|s| s.to_string()).collect();
        let analyzer = BioAnalyzer::with_stopwords(custom);
        let kw = analyzer.extract_keywords("space science");
        assert!(!kw.contains("space"));
        assert!(kw.contains("science"));
    }
}
