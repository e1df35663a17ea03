//! Talent Algo - candidate matching and ranking engine for the talent
//! marketplace.
//!
//! The core is a pure, stateless pipeline: criteria normalization,
//! a multi-stage filter pipeline, weighted match scoring, and stable
//! ranking. Recruiter search, geographic search, and demo surfaces all
//! call the same engine instead of re-implementing it per screen.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{normalize, Matcher, SearchOutcome};
pub use crate::models::{
    Candidate, RankedResult, ScoringWeights, SearchCandidatesRequest, SearchCandidatesResponse,
    SearchCriteria, SearchQuery,
};
