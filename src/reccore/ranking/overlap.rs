use crate::reccore::common::Score;
use crate::reccore::tokenizer::Tokenizer;
use std::collections::HashSet;

/// Number of distinct tokens the headline shares with the bio keyword set.
/// The headline is normalized and tokenized with the same rule as the bio,
/// then collapsed to a set, so repeated tokens never inflate the score.
pub fn count_overlap(keywords: &HashSet<String>, headline: &str, seg: &Tokenizer) -> Score {
    let normalized = seg.normalize(headline);
    let tokens: HashSet<&str> = seg.parse_tokens(&normalized).into_iter().collect();
    tokens.iter().filter(|&t| keywords.contains(*t)).count() as Score
}
