use serde::Serialize;

use crate::config::{RankingSettings, Settings};
use crate::core::criteria::CriteriaBreakdown;
use crate::core::scoring::score_lenders_with;
use crate::models::{Filters, LenderProfile, LenderWithScore};
use crate::services::{CacheStats, RangeCache};

/// Result of ranking a scored catalog for display
#[derive(Debug, Clone, Serialize)]
pub struct RankedLenders {
    pub lenders: Vec<LenderWithScore>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Lender matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every lender against the borrower filters (input order kept)
/// 2. Drop lenders under the configured minimum score
/// 3. Sort by score, highest first
/// 4. Truncate to the requested limit
///
/// Stage 1 alone is [`LenderMatcher::score`]; stages 2-4 are the display
/// layer's ranking and never alter the scores.
#[derive(Debug)]
pub struct LenderMatcher {
    ranking: RankingSettings,
    ranges: RangeCache,
}

impl LenderMatcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ranking: settings.ranking.clone(),
            ranges: RangeCache::new(settings.cache.range_cache_size),
        }
    }

    /// Score lenders, memoizing range parsing across calls
    ///
    /// Produces exactly what [`crate::core::score_lenders`] produces.
    pub fn score(&mut self, lenders: &[LenderProfile], filters: &Filters) -> Vec<LenderWithScore> {
        let ranges = &mut self.ranges;
        score_lenders_with(lenders, filters, |text| ranges.get_or_parse(text))
    }

    /// Rank scored lenders for display
    ///
    /// `limit` defaults to the configured default and is capped at the
    /// configured maximum. Ties keep their scoring order.
    pub fn rank(&self, scored: Vec<LenderWithScore>, limit: Option<usize>) -> RankedLenders {
        let total_candidates = scored.len();
        let limit = limit
            .unwrap_or(self.ranking.default_limit)
            .min(self.ranking.max_limit);

        let mut lenders: Vec<LenderWithScore> = scored
            .into_iter()
            .filter(|entry| entry.match_score >= self.ranking.min_score)
            .collect();

        // Stable sort, so equal scores stay in catalog order
        lenders.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        lenders.truncate(limit);

        tracing::info!(
            "Returning {} lenders (from {} candidates)",
            lenders.len(),
            total_candidates
        );

        RankedLenders {
            lenders,
            total_candidates,
        }
    }

    /// Score then rank
    pub fn find_matches(
        &mut self,
        lenders: &[LenderProfile],
        filters: &Filters,
        limit: Option<usize>,
    ) -> RankedLenders {
        let scored = self.score(lenders, filters);
        self.rank(scored, limit)
    }

    /// Badges for one lender's detail view
    pub fn breakdown(&self, lender: &LenderProfile, filters: &Filters) -> CriteriaBreakdown {
        CriteriaBreakdown::for_lender(lender, filters)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.ranges.stats()
    }
}

impl Default for LenderMatcher {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
