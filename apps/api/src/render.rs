//! Plain-text rendering of a résumé record — the linearization the scoring
//! engine receives. Sections appear in the caller's display order, which may
//! differ from the order of `active_sections`; sections not toggled active
//! are skipped.

use crate::models::resume::{Resume, SectionId};

pub fn compose_resume_plain_text(resume: &Resume, display_order: &[SectionId]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{} — {}", resume.full_name, resume.title));

    let contact: Vec<&str> = [
        resume.contact.email.as_str(),
        resume.contact.phone.as_str(),
        resume.contact.location.as_str(),
        resume.contact.website.as_str(),
        resume.contact.github.as_str(),
        resume.contact.linkedin.as_str(),
    ]
    .into_iter()
    .filter(|f| !f.is_empty())
    .collect();
    if !contact.is_empty() {
        lines.push(contact.join(" • "));
    }

    for section in display_order {
        if !resume.active_sections.contains(section) {
            continue;
        }
        match section {
            SectionId::Summary => {
                if !resume.summary.is_empty() {
                    lines.push(String::new());
                    lines.push("Summary:".to_string());
                    lines.push(resume.summary.clone());
                }
            }
            SectionId::Skills => {
                if !resume.skills.is_empty() {
                    lines.push(String::new());
                    lines.push("Skills:".to_string());
                    lines.push(resume.skills.join(", "));
                }
            }
            SectionId::Experience => {
                if !resume.experience.is_empty() {
                    lines.push(String::new());
                    lines.push("Experience:".to_string());
                    for entry in &resume.experience {
                        lines.push(format!(
                            "- {} — {} ({})",
                            entry.role, entry.company, entry.period
                        ));
                        for detail in &entry.details {
                            lines.push(format!("  • {detail}"));
                        }
                    }
                }
            }
            SectionId::Projects => {
                if !resume.projects.is_empty() {
                    lines.push(String::new());
                    lines.push("Projects:".to_string());
                    for project in &resume.projects {
                        if project.link.is_empty() {
                            lines.push(format!("- {}", project.name));
                        } else {
                            lines.push(format!("- {} ({})", project.name, project.link));
                        }
                        if !project.description.is_empty() {
                            lines.push(format!("  • {}", project.description));
                        }
                        for highlight in &project.highlights {
                            lines.push(format!("  • {highlight}"));
                        }
                    }
                }
            }
            SectionId::Education => {
                if !resume.education.is_empty() {
                    lines.push(String::new());
                    lines.push("Education:".to_string());
                    for entry in &resume.education {
                        lines.push(format!(
                            "- {} — {} ({})",
                            entry.degree, entry.school, entry.period
                        ));
                    }
                }
            }
        }
    }

    lines.join("\n")
}
