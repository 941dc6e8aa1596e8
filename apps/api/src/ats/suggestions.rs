//! Suggestion generation — a fixed-priority rule list over the detector
//! outputs. Each rule contributes at most one string; the list is truncated
//! to the first six in evaluation order, never re-sorted.

use crate::ats::score::SignalBundle;
use crate::models::resume::Resume;

pub const MAX_SUGGESTIONS: usize = 6;

/// Shown alone when the résumé text is empty.
pub const EMPTY_RESUME_SUGGESTION: &str =
    "Add content to your resume to see ATS feedback.";

/// Inputs the rule list inspects. Borrowed from the scoring pipeline so the
/// rules see exactly the values that produced the score.
pub struct SuggestionContext<'a> {
    pub resume: Option<&'a Resume>,
    pub word_count: usize,
    pub missing_keywords: &'a [String],
    pub signals: &'a SignalBundle,
    pub score: u32,
    pub has_job_description: bool,
}

pub fn build_suggestions(ctx: &SuggestionContext) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(resume) = ctx.resume {
        if resume.summary.trim().len() <= 10 {
            out.push(
                "Write a professional summary of a sentence or two — it is often the first \
                 thing a recruiter reads."
                    .to_string(),
            );
        }
        let has_detailed_experience = resume
            .experience
            .iter()
            .any(|e| e.details.iter().any(|d| !d.trim().is_empty()));
        if !has_detailed_experience {
            out.push(
                "Add work experience entries with bullet points describing what you did and \
                 what it changed."
                    .to_string(),
            );
        }
        if resume.skills.iter().filter(|s| !s.trim().is_empty()).count() < 3 {
            out.push(
                "List at least three skills relevant to the roles you are targeting."
                    .to_string(),
            );
        }
    }

    if ctx.has_job_description && !ctx.missing_keywords.is_empty() {
        let top: Vec<&str> = ctx
            .missing_keywords
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        out.push(format!(
            "Incorporate terms the job description emphasizes: {}.",
            top.join(", ")
        ));
    }

    if ctx.signals.achievement < 0.5 {
        out.push(
            "Quantify your achievements with numbers, percentages, or dollar amounts."
                .to_string(),
        );
    }

    if ctx.signals.contact < 1.0 {
        out.push(
            "Complete your contact block — email, phone, and location at minimum."
                .to_string(),
        );
    }

    if ctx.word_count < 300 {
        out.push("Expand your resume with more detail; it currently reads as too short.".to_string());
    } else if ctx.word_count > 900 {
        out.push(
            "Condense your resume to the most relevant experience; it currently runs long."
                .to_string(),
        );
    }

    if ctx.signals.readability < 0.6 {
        out.push("Use shorter sentences that open with action verbs.".to_string());
    }

    if ctx.signals.industry < 0.5 {
        out.push(
            "Name specific technologies and tools instead of describing work generically."
                .to_string(),
        );
    }

    if ctx.signals.format < 1.0 {
        out.push("Stick to one date format and one bullet style throughout.".to_string());
    }

    if ctx.score < 50 {
        out.push(
            "Tailor the resume to the job description and rerun the check.".to_string(),
        );
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}
