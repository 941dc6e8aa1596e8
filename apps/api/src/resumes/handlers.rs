//! Axum route handlers for the Résumé API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::resume::{Resume, SectionId};
use crate::render::compose_resume_plain_text;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub resume: Resume,
    /// Display order for rendering; defaults to the record's
    /// `active_sections` order when omitted.
    #[serde(default)]
    pub section_order: Option<Vec<SectionId>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeResponse {
    pub text: String,
    pub word_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/compose
///
/// Linearizes a structured record into the plain text the scoring engine
/// consumes. The UI calls this before scoring so both sides see one text.
pub async fn handle_compose(Json(request): Json<ComposeRequest>) -> Json<ComposeResponse> {
    let order = request
        .section_order
        .unwrap_or_else(|| request.resume.active_sections.clone());
    let text = compose_resume_plain_text(&request.resume, &order);
    let word_count = text.split_whitespace().count();
    Json(ComposeResponse { text, word_count })
}

/// GET /api/v1/resumes/demo
///
/// Returns the fully-populated sample record for a fresh session.
pub async fn handle_demo_resume() -> Json<Resume> {
    Json(Resume::demo())
}
