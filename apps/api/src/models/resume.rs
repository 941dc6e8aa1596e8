//! Résumé value records exchanged with the builder UI. All transient: the
//! service never persists them.

use serde::{Deserialize, Serialize};

/// The five content blocks a résumé can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Summary,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
    ];
}

/// Visual layout the UI renders the résumé with. Carried through unchanged;
/// scoring never depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Classic,
    Modern,
    Minimal,
    TwoColumn,
    Compact,
}

/// Contact block. Empty string means the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    #[serde(default)]
    pub link: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// The full structured résumé record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub layout: Layout,
    /// Sections the user has toggled on. Order here may differ from the
    /// display order used for rendering; uniqueness is not enforced.
    #[serde(default = "default_active_sections")]
    pub active_sections: Vec<SectionId>,
}

fn default_active_sections() -> Vec<SectionId> {
    SectionId::ALL.to_vec()
}

impl Resume {
    /// Fully-populated sample record for a fresh UI session and for tests.
    pub fn demo() -> Self {
        Resume {
            full_name: "Alex Johnson".to_string(),
            title: "Senior Frontend Engineer".to_string(),
            contact: Contact {
                email: "alex.johnson@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                website: "https://alex.dev".to_string(),
                github: "https://github.com/alex".to_string(),
                linkedin: "https://linkedin.com/in/alex".to_string(),
            },
            summary: "Frontend engineer with 7+ years building accessible, performant web \
                      apps. Specializes in React, TypeScript, and design systems."
                .to_string(),
            experience: vec![
                ExperienceItem {
                    role: "Senior Frontend Engineer".to_string(),
                    company: "Acme Corp".to_string(),
                    period: "2022 — Present".to_string(),
                    details: vec![
                        "Led migration to server components, improving TTI by 28%.".to_string(),
                        "Built a reusable component library adopted by 4 teams.".to_string(),
                        "Improved accessibility across the product to WCAG AA.".to_string(),
                    ],
                },
                ExperienceItem {
                    role: "Frontend Engineer".to_string(),
                    company: "Startup XYZ".to_string(),
                    period: "2019 — 2022".to_string(),
                    details: vec![
                        "Shipped an onboarding funnel that increased activation by 15%."
                            .to_string(),
                        "Implemented end-to-end type safety with TypeScript.".to_string(),
                    ],
                },
            ],
            education: vec![EducationItem {
                school: "University of Somewhere".to_string(),
                degree: "B.S. Computer Science".to_string(),
                period: "2015 — 2019".to_string(),
            }],
            skills: [
                "React",
                "Next.js",
                "TypeScript",
                "Node.js",
                "Tailwind CSS",
                "Testing Library",
                "Playwright",
                "Accessibility",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            projects: vec![ProjectItem {
                name: "OpenSource UI".to_string(),
                link: "https://github.com/alex/opensource-ui".to_string(),
                description: "Composable component library for accessible, themed UIs."
                    .to_string(),
                highlights: vec![
                    "2k+ stars".to_string(),
                    "Theming system".to_string(),
                    "ARIA-compliant primitives".to_string(),
                ],
            }],
            photo_url: String::new(),
            layout: Layout::Classic,
            active_sections: SectionId::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Layout::TwoColumn).unwrap(),
            r#""two-column""#
        );
        let layout: Layout = serde_json::from_str(r#""compact""#).unwrap();
        assert_eq!(layout, Layout::Compact);
    }

    #[test]
    fn test_section_id_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SectionId::Experience).unwrap(),
            r#""experience""#
        );
    }

    #[test]
    fn test_resume_deserializes_with_defaults() {
        let resume: Resume =
            serde_json::from_str(r#"{"fullName":"Sam","title":"Engineer"}"#).unwrap();
        assert_eq!(resume.full_name, "Sam");
        assert_eq!(resume.layout, Layout::Classic);
        assert_eq!(resume.active_sections, SectionId::ALL.to_vec());
        assert!(resume.experience.is_empty());
    }

    #[test]
    fn test_resume_round_trips_camel_case() {
        let demo = Resume::demo();
        let json = serde_json::to_string(&demo).unwrap();
        assert!(json.contains(r#""fullName""#));
        assert!(json.contains(r#""activeSections""#));
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, demo);
    }

    #[test]
    fn test_demo_record_activates_all_sections() {
        let demo = Resume::demo();
        assert_eq!(demo.active_sections.len(), 5);
        assert!(!demo.summary.is_empty());
        assert!(demo.skills.len() >= 3);
    }
}
