// Core algorithm exports
pub mod criteria;
pub mod filters;
pub mod matcher;
pub mod ranker;
pub mod scoring;

pub use criteria::normalize;
pub use filters::{filter_pool, matches_criteria};
pub use matcher::{Matcher, SearchOutcome};
pub use ranker::{rank, summarize, top_k, RankingSummary};
pub use scoring::{calculate_match_score, ScoreBreakdown};
