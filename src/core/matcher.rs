use crate::core::{
    criteria::normalize,
    filters::filter_pool,
    ranker::{rank, summarize},
    scoring::calculate_match_score,
};
use crate::models::{Candidate, RankedResult, ScoringWeights, SearchCriteria, SearchQuery};

/// Result of one search: the full ordered set plus aggregates
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<RankedResult>,
    pub total_found: usize,
    pub mean_score: f64,
}

/// Search facade - the engine's only entry point.
///
/// # Pipeline Stages
/// 1. Criteria normalization
/// 2. Filter pipeline over the pool
/// 3. Scoring of the surviving subset
/// 4. Stable ranking + aggregates
///
/// Stateless and side-effect free: the pool is read-only input and
/// each invocation is independent, so concurrent searches never
/// interact.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Run a search over a candidate pool.
    ///
    /// Never fails: malformed query fields fall back to "no
    /// constraint" in the normalizer, and an empty pool or filtered
    /// subset yields an empty result set, not an error.
    pub fn search(&self, pool: &[Candidate], query: &SearchQuery) -> SearchOutcome {
        let criteria = normalize(query);
        self.search_with_criteria(pool, &criteria)
    }

    /// Same pipeline over already-normalized criteria
    pub fn search_with_criteria(
        &self,
        pool: &[Candidate],
        criteria: &SearchCriteria,
    ) -> SearchOutcome {
        let surviving = filter_pool(pool, criteria);

        let scored: Vec<RankedResult> = surviving
            .into_iter()
            .map(|candidate| {
                let breakdown = calculate_match_score(candidate, criteria, &self.weights);
                RankedResult {
                    candidate: candidate.clone(),
                    score: breakdown.score,
                    matched_courses: breakdown.matched_courses,
                    matched_skills: breakdown.matched_skills,
                }
            })
            .collect();

        let results = rank(scored);
        let summary = summarize(&results);

        SearchOutcome {
            results,
            total_found: summary.total_found,
            mean_score: summary.mean_score,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
