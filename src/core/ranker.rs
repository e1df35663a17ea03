use crate::models::RankedResult;

/// Default top-K slice size for "best match" callers
pub const DEFAULT_TOP_K: usize = 1;

/// Aggregate statistics over the full surviving set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingSummary {
    pub total_found: usize,
    /// Arithmetic mean score; 0.0 for an empty set
    pub mean_score: f64,
}

/// Sort scored candidates descending by score.
///
/// The sort is stable, so candidates with equal scores keep their
/// pool-relative insertion order. This is the engine's defined
/// tie-break and is load-bearing: a caller sharding the pool across
/// threads must merge partial lists in pool order and run this sort
/// once over the merged set.
pub fn rank(mut results: Vec<RankedResult>) -> Vec<RankedResult> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Count and mean score over the full surviving set
pub fn summarize(results: &[RankedResult]) -> RankingSummary {
    if results.is_empty() {
        return RankingSummary {
            total_found: 0,
            mean_score: 0.0,
        };
    }
    let sum: u32 = results.iter().map(|r| u32::from(r.score)).sum();
    RankingSummary {
        total_found: results.len(),
        mean_score: f64::from(sum) / results.len() as f64,
    }
}

/// Leading slice of an already-ranked set
pub fn top_k(results: &[RankedResult], k: usize) -> &[RankedResult] {
    &results[..k.min(results.len())]
}
