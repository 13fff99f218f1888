use actix_web::{web, HttpResponse, Responder};

use crate::core::Ranker;
use crate::models::{HealthResponse, RankLeadsResponse, RankQuery, RawPreference};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/leads/rank", web::post().to(rank_leads));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank leads endpoint
///
/// POST /api/v1/leads/rank?dedupe=false
///
/// Request body: a bare JSON array of raw preference records, exactly as the
/// preference store hands them over. Malformed individual field values are
/// degraded by the engine, never rejected; only a structurally invalid body
/// (not an array of objects) produces a 400, handled upstream by the JSON
/// payload error handler.
async fn rank_leads(
    state: web::Data<AppState>,
    query: web::Query<RankQuery>,
    records: web::Json<Vec<RawPreference>>,
) -> impl Responder {
    let batch_id = uuid::Uuid::new_v4();
    let mut records = records.into_inner();
    let submitted = records.len();

    if query.dedupe {
        records = Ranker::dedupe_by_email(records);
        tracing::debug!(
            "Batch {}: deduplicated {} records down to {}",
            batch_id,
            submitted,
            records.len()
        );
    }

    let result = state.ranker.rank_leads(records, chrono::Utc::now());

    tracing::info!(
        "Batch {}: ranked {} leads ({} submitted)",
        batch_id,
        result.metrics.total_customers,
        submitted
    );

    HttpResponse::Ok().json(RankLeadsResponse {
        success: true,
        rankings: result.rankings,
        model_metrics: result.metrics,
    })
}
