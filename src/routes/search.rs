use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, SearchCandidatesRequest, SearchCandidatesResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_limit: u16,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search/candidates", web::post().to(search_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Candidate search endpoint
///
/// POST /api/v1/search/candidates
///
/// Request body:
/// ```json
/// {
///   "candidates": [ ... full pool ... ],
///   "query": { "location": "Milan", "requiredCourses": ["Network Security"], ... },
///   "limit": 20
/// }
/// ```
///
/// The service holds no candidate store; the caller supplies the full
/// pool per request and the engine filters, scores, and ranks it in
/// memory. Malformed or absent query fields relax to "no constraint",
/// so the only rejectable input is a protocol-level one (the limit).
async fn search_candidates(
    state: web::Data<AppState>,
    req: web::Json<SearchCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit.min(state.max_limit) as usize;

    tracing::info!(
        "Searching pool of {} candidates, limit: {}",
        req.candidates.len(),
        limit
    );

    let outcome = state.matcher.search(&req.candidates, &req.query);

    tracing::debug!(
        "Search matched {} of {} candidates (mean score {:.1})",
        outcome.total_found,
        req.candidates.len(),
        outcome.mean_score
    );

    // total_found and mean_score describe the full surviving set;
    // only the returned slice is capped
    let mut results = outcome.results;
    results.truncate(limit);

    HttpResponse::Ok().json(SearchCandidatesResponse {
        results,
        total_found: outcome.total_found,
        mean_score: outcome.mean_score,
    })
}
