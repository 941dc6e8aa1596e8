pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::resumes::handlers as resumes;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/score", post(ats::handle_score))
        .route("/api/v1/ats/keywords", post(ats::handle_extract_keywords))
        // Resume API
        .route("/api/v1/resumes/compose", post(resumes::handle_compose))
        .route("/api/v1/resumes/demo", get(resumes::handle_demo_resume))
}
