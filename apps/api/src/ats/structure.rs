//! Structural analysis — completeness of the structured résumé record.
//!
//! Completeness is judged on the record alone, never on free-text section
//! headers: a "Skills:" line in the rendered text counts for nothing unless
//! the record's skill list satisfies the predicate.

use crate::models::resume::{Resume, SectionId};

/// Filled vs declared-active section counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionReport {
    pub filled: usize,
    pub active: usize,
}

impl SectionReport {
    pub fn ratio(&self) -> f64 {
        if self.active == 0 {
            return 0.0;
        }
        (self.filled as f64 / self.active as f64).clamp(0.0, 1.0)
    }
}

/// Counts how many declared active sections satisfy their completeness
/// predicate. No record → 0 filled of an assumed 5 active.
pub fn section_completeness(resume: Option<&Resume>) -> SectionReport {
    let Some(resume) = resume else {
        return SectionReport {
            filled: 0,
            active: SectionId::ALL.len(),
        };
    };
    let filled = resume
        .active_sections
        .iter()
        .filter(|s| section_is_filled(resume, **s))
        .count();
    SectionReport {
        filled,
        active: resume.active_sections.len(),
    }
}

fn section_is_filled(resume: &Resume, section: SectionId) -> bool {
    match section {
        SectionId::Summary => resume.summary.trim().len() > 10,
        SectionId::Experience => resume.experience.iter().any(|e| {
            !e.role.trim().is_empty()
                && !e.company.trim().is_empty()
                && !e.period.trim().is_empty()
                && e.details.iter().any(|d| !d.trim().is_empty())
        }),
        SectionId::Education => resume.education.iter().any(|e| {
            !e.school.trim().is_empty()
                && !e.degree.trim().is_empty()
                && !e.period.trim().is_empty()
        }),
        SectionId::Skills => resume.skills.iter().filter(|s| !s.trim().is_empty()).count() >= 3,
        SectionId::Projects => resume.projects.iter().any(|p| {
            !p.name.trim().is_empty()
                && !p.description.trim().is_empty()
                && p.highlights.iter().any(|h| !h.trim().is_empty())
        }),
    }
}

/// Contact completeness: email/phone/location are worth 0.5 each, the
/// profile links 0.17 each, additively, clamped to 1.0. No record → 0.
pub fn contact_completeness(resume: Option<&Resume>) -> f64 {
    let Some(resume) = resume else { return 0.0 };
    let c = &resume.contact;
    let mut score: f64 = 0.0;
    for field in [&c.email, &c.phone, &c.location] {
        if !field.trim().is_empty() {
            score += 0.5;
        }
    }
    for field in [&c.website, &c.github, &c.linkedin] {
        if !field.trim().is_empty() {
            score += 0.17;
        }
    }
    score.min(1.0)
}
