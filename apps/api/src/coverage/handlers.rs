//! Axum route handlers for the Coverage API.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coverage::profiles::KeywordProfile;
use crate::coverage::report::{build_recommendation, CoverageReport};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub document_text: String,
    #[serde(default)]
    pub role_label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: CoverageReport,
    pub keyword_score: u32, // 0 – 100
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<KeywordProfile>,
    pub fallback: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub role: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores the supplied document text against the profile resolved from `role_label`.
/// Empty text is valid and yields zero matches; a missing role resolves to `general`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let role_label = request.role_label.as_deref().unwrap_or_default();

    let report = state.engine.analyze(&request.document_text, role_label);
    let keyword_score = report.keyword_score();

    info!(
        profile = %report.profile_id,
        matched = report.matched.len(),
        total = report.total_keywords(),
        "Coverage analyzed"
    );

    let recommendation = build_recommendation(&report);

    Ok(Json(AnalyzeResponse {
        report,
        keyword_score,
        recommendation,
    }))
}

/// GET /api/v1/profiles
///
/// Lists profiles in resolution order.
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<ProfileListResponse> {
    Json(ProfileListResponse {
        profiles: state.engine.table().profiles().to_vec(),
        fallback: state.engine.table().fallback().id.clone(),
    })
}

/// GET /api/v1/profiles/resolve?role=...
///
/// Previews which profile a job title would be scored against.
pub async fn handle_resolve_profile(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<KeywordProfile> {
    let role = query.role.as_deref().unwrap_or_default();
    Json(state.engine.resolve_profile(role).clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
