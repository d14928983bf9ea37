use super::analyzer::BioAnalyzer;
use super::common::Score;
use super::ranking::overlap::count_overlap;
use super::ranking::{competition_ranks, RankedHeadline};
use super::tokenizer::Tokenizer;

/// Front of the ranking pipeline. Stateless between calls: every invocation
/// builds the keyword set fresh and leaves nothing behind.
pub struct Engine {
    analyzer: BioAnalyzer,
    seg: Tokenizer,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            analyzer: BioAnalyzer::new(),
            seg: Tokenizer::new(),
        }
    }

    /// Ranks every headline by noun overlap with the bio. The table comes
    /// back sorted ascending by rank; headlines with equal scores share a
    /// rank and keep their input order.
    pub fn rank_headlines(&self, bio: &str, headlines: &[String]) -> Vec<RankedHeadline> {
        let keywords = self.analyzer.extract_keywords(bio);
        log::debug!("{} keywords extracted from bio", keywords.len());
        let scores: Vec<Score> = headlines
            .iter()
            .map(|h| count_overlap(&keywords, h, &self.seg))
            .collect();
        let ranks = competition_ranks(&scores);
        let mut table: Vec<RankedHeadline> = headlines
            .iter()
            .zip(ranks)
            .map(|(headline, rank)| RankedHeadline {
                headline: headline.clone(),
                rank,
            })
            .collect();
        table.sort_by_key(|row| row.rank);
        table
    }
}
