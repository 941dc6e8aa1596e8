//! Score composition — blends the detector outputs into a single 0–100
//! score and assembles the `AtsMetrics` record returned to callers.
//!
//! Two weighting modes share one `SignalBundle`: with a job description the
//! keyword and industry signals participate and the section/length/
//! readability weights are scaled by 0.85; without one they are excluded and
//! the remaining weights sum to exactly 1.0.

use serde::{Deserialize, Serialize};

use crate::ats::keywords::{extract_keywords, industry_coverage, match_terms};
use crate::ats::signals::{
    format_consistency, optimal_length, quantifiable_achievements, readability,
};
use crate::ats::structure::{contact_completeness, section_completeness};
use crate::ats::suggestions::{build_suggestions, SuggestionContext, EMPTY_RESUME_SUGGESTION};
use crate::models::resume::Resume;

/// Present/missing lists are capped for display.
const KEYWORD_LIST_CAP: usize = 15;

/// Detector outputs, each pre-clamped to [0,1] by its detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalBundle {
    pub section: f64,
    pub keyword: f64,
    pub length: f64,
    pub readability: f64,
    pub contact: f64,
    pub achievement: f64,
    pub industry: f64,
    pub format: f64,
}

/// The metrics record returned to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsMetrics {
    pub word_count: usize,
    pub sections_filled: usize,
    /// Filled / active sections, 0–1, rounded to 2 decimals.
    pub section_ratio: f64,
    /// 0–1, rounded to 2 decimals.
    pub readability: f64,
    pub present_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    /// Composite 0–100.
    pub score: u32,
    pub keyword_match_rate: u32,
    pub contact_completeness: u32,
    pub quantifiable_achievements: u32,
    pub industry_coverage: u32,
    pub format_consistency: u32,
}

impl AtsMetrics {
    fn empty_with(suggestion: &str) -> Self {
        AtsMetrics {
            word_count: 0,
            sections_filled: 0,
            section_ratio: 0.0,
            readability: 0.0,
            present_keywords: vec![],
            missing_keywords: vec![],
            suggestions: vec![suggestion.to_string()],
            score: 0,
            keyword_match_rate: 0,
            contact_completeness: 0,
            quantifiable_achievements: 0,
            industry_coverage: 0,
            format_consistency: 0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Weighting modes
// ────────────────────────────────────────────────────────────────────────────

/// Weighted blend when a job description is present. The raw weights sum to
/// 1.2025, so the result is clamped to 100.
pub fn compose_score_with_jd(signals: &SignalBundle) -> u32 {
    let sum = signals.section * 0.3 * 0.85
        + signals.keyword * 0.25
        + signals.length * 0.2 * 0.85
        + signals.readability * 0.15 * 0.85
        + signals.contact * 0.1
        + signals.achievement * 0.15
        + signals.industry * 0.05
        + signals.format * 0.1;
    to_score(sum)
}

/// Weighted blend without a job description; keyword and industry signals
/// are excluded and the weights sum to exactly 1.0.
pub fn compose_score_without_jd(signals: &SignalBundle) -> u32 {
    let sum = signals.section * 0.3
        + signals.length * 0.2
        + signals.readability * 0.15
        + signals.contact * 0.1
        + signals.achievement * 0.15
        + signals.format * 0.1;
    to_score(sum)
}

fn to_score(sum: f64) -> u32 {
    ((sum * 100.0).round() as i64).clamp(0, 100) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Computes the full ATS metrics record for a résumé text, an optional job
/// description (empty string means absent), and an optional structured
/// record. Pure and total: never fails, identical inputs give identical
/// output.
pub fn compute_ats_metrics(
    resume_text: &str,
    job_description: &str,
    resume: Option<&Resume>,
) -> AtsMetrics {
    let text = resume_text.trim();
    if text.is_empty() {
        return AtsMetrics::empty_with(EMPTY_RESUME_SUGGESTION);
    }

    let word_count = text.split_whitespace().count();
    let resume_terms = extract_keywords(text);
    let jd = job_description.trim();
    let jd_terms = (!jd.is_empty()).then(|| extract_keywords(jd));

    let sections = section_completeness(resume);
    let signals = SignalBundle {
        section: sections.ratio(),
        keyword: 0.0,
        length: optimal_length(word_count),
        readability: readability(text),
        contact: contact_completeness(resume),
        achievement: quantifiable_achievements(text, word_count),
        industry: industry_coverage(&resume_terms, jd_terms.as_ref()),
        format: format_consistency(text),
    };

    let (present, missing, signals, score) = match &jd_terms {
        Some(jd_terms) => {
            let matched = match_terms(&resume_terms, jd_terms);
            let signals = SignalBundle {
                keyword: matched.match_rate,
                ..signals
            };
            (
                matched.present,
                matched.missing,
                signals,
                compose_score_with_jd(&signals),
            )
        }
        // No JD: the résumé's own industry terms stand in for matches.
        None => (
            resume_terms.industry_terms.iter().cloned().collect(),
            Vec::new(),
            signals,
            compose_score_without_jd(&signals),
        ),
    };

    let suggestions = build_suggestions(&SuggestionContext {
        resume,
        word_count,
        missing_keywords: &missing,
        signals: &signals,
        score,
        has_job_description: jd_terms.is_some(),
    });

    AtsMetrics {
        word_count,
        sections_filled: sections.filled,
        section_ratio: round2(signals.section),
        readability: round2(signals.readability),
        present_keywords: capped(present),
        missing_keywords: capped(missing),
        suggestions,
        score,
        keyword_match_rate: to_percent(signals.keyword),
        contact_completeness: to_percent(signals.contact),
        quantifiable_achievements: to_percent(signals.achievement),
        industry_coverage: to_percent(signals.industry),
        format_consistency: to_percent(signals.format),
    }
}

fn to_percent(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u32
}

fn round2(value: f64) -> f64 {
    (value.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn capped(mut list: Vec<String>) -> Vec<String> {
    list.truncate(KEYWORD_LIST_CAP);
    list
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
