//! Axum route handlers for the ATS scoring API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::ats::{compute_ats_metrics, extract_keywords, AtsMetrics, KeywordSet};
use crate::errors::AppError;
use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: Option<Resume>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub metrics: AtsMetrics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeywordsResponse {
    pub keyword_set: KeywordSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores a résumé text against an optional job description and structured
/// record. Total by design: empty text yields a zero record, never an error.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let metrics = compute_ats_metrics(
        &request.resume_text,
        &request.job_description,
        request.resume.as_ref(),
    );
    Json(ScoreResponse { metrics })
}

/// POST /api/v1/ats/keywords
///
/// Extracts the term sets from arbitrary text. Useful for previewing what
/// the matcher will see in a job description before scoring against it.
pub async fn handle_extract_keywords(
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let keyword_set = extract_keywords(&request.text);
    Ok(Json(ExtractKeywordsResponse { keyword_set }))
}
