//! Keyword extraction — tokenizes raw text into keywords, 2–3 word phrases,
//! and the subset classified as industry terms, then partitions a job
//! description's term set into present/missing against a résumé's.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Common English function words excluded from the keyword set.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "before", "but", "by", "can", "could", "did", "do", "does", "during", "each",
    "few", "for", "from", "had", "has", "have", "having", "he", "her", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "me", "more", "most", "my", "no", "nor",
    "not", "of", "off", "on", "or", "our", "out", "over", "she", "should", "so", "some",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "up", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "why", "will", "with", "would", "you", "your",
];

const MIN_KEYWORD_LEN: usize = 2;
const MAX_KEYWORD_LEN: usize = 25;
const MAX_PHRASE_LEN: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Industry-term regex families
// ────────────────────────────────────────────────────────────────────────────

/// Programming languages and frameworks.
static LANGUAGE_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(javascript|typescript|python|java|golang|rust|ruby|php|scala|kotlin|swift|html|css|sass|react|angular|vue|svelte|next[ -]?js|node[ -]?js|express|django|flask|spring|rails|laravel|dotnet|flutter|tailwind)\b",
    )
    .unwrap()
});

/// Cloud and infrastructure platforms.
static CLOUD_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(aws|azure|gcp|google cloud|amazon web services|kubernetes|k8s|docker|terraform|ansible|jenkins|circleci|github actions|gitlab|heroku|vercel|netlify|serverless|lambda|cloudformation|nginx)\b",
    )
    .unwrap()
});

/// Databases and data stores.
static DATABASE_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(sql|mysql|postgresql|postgres|mongodb|mongo|redis|elasticsearch|dynamodb|sqlite|cassandra|oracle|mariadb|snowflake|bigquery|firestore)\b",
    )
    .unwrap()
});

/// Methodology and architecture acronyms.
static METHODOLOGY_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(agile|scrum|kanban|devops|microservices?|rest|restful|graphql|grpc|api|apis|tdd|bdd|cicd|ci cd|mvc|mvvm|oop|etl|saas|paas|soa)\b",
    )
    .unwrap()
});

/// Business acronyms.
static BUSINESS_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(kpi|kpis|roi|b2b|b2c|crm|erp|seo|sem|sla|slas|arr|mrr|cac|ltv|gtm|okr|okrs)\b")
        .unwrap()
});

/// Achievement-verb indicators.
static ACHIEVEMENT_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(led|managed|developed|implemented|designed|optimized|increased|reduced|improved)\b")
        .unwrap()
});

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Term sets extracted from a single text. Ordered sets so every list
/// derived from them is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSet {
    pub keywords: BTreeSet<String>,
    pub phrases: BTreeSet<String>,
    pub industry_terms: BTreeSet<String>,
}

/// Extracts keywords, 2–3 word phrases, and industry terms from raw text.
///
/// Tokenization: lowercase, every character outside `[0-9a-z_-]` becomes a
/// space, split on whitespace. Phrases are built from the raw token sequence
/// before stop-word filtering, so "managed a team" survives as a phrase even
/// though "a" is never a keyword.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let tokens = clean_tokens(text);

    let keywords: BTreeSet<String> = tokens
        .iter()
        .filter(|t| is_significant_keyword(t.as_str()))
        .cloned()
        .collect();

    let mut phrases = BTreeSet::new();
    for window_len in 2..=3 {
        for window in tokens.windows(window_len) {
            let phrase = window.join(" ");
            if phrase.len() <= MAX_PHRASE_LEN && is_significant_phrase(window) {
                phrases.insert(phrase);
            }
        }
    }

    let industry_terms: BTreeSet<String> = keywords
        .iter()
        .chain(phrases.iter())
        .filter(|t| is_industry_term(t))
        .cloned()
        .collect();

    KeywordSet {
        keywords,
        phrases,
        industry_terms,
    }
}

fn clean_tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn is_significant_keyword(token: &str) -> bool {
    (MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&token.len())
        && !is_stop_word(token)
        && !is_numeric(token)
}

/// A phrase is significant when at least one constituent word carries
/// meaning on its own: not a stop word, at least 3 chars, not purely numeric.
fn is_significant_phrase(words: &[String]) -> bool {
    words
        .iter()
        .any(|w| !is_stop_word(w) && w.len() >= 3 && !is_numeric(w))
}

/// Matches a keyword or phrase against the six fixed industry families.
pub fn is_industry_term(term: &str) -> bool {
    LANGUAGE_TERMS.is_match(term)
        || CLOUD_TERMS.is_match(term)
        || DATABASE_TERMS.is_match(term)
        || METHODOLOGY_TERMS.is_match(term)
        || BUSINESS_TERMS.is_match(term)
        || ACHIEVEMENT_TERMS.is_match(term)
}

// ────────────────────────────────────────────────────────────────────────────
// Job-description matching
// ────────────────────────────────────────────────────────────────────────────

/// Result of partitioning a job description's terms against a résumé's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatch {
    pub present: Vec<String>,
    pub missing: Vec<String>,
    /// |present| / |job-description terms|; 0.0 when the JD set is empty.
    pub match_rate: f64,
}

/// Partitions the JD term set (keywords ∪ phrases) into present and missing.
///
/// A term that is not an exact member of the résumé set is dropped from BOTH
/// lists when any résumé term is a substring of it or vice versa. Such terms
/// are treated as satisfied without inflating the present count — the match
/// rate denominator still includes them.
pub fn match_terms(resume: &KeywordSet, jd: &KeywordSet) -> KeywordMatch {
    let jd_terms: BTreeSet<&str> = jd
        .keywords
        .iter()
        .chain(jd.phrases.iter())
        .map(String::as_str)
        .collect();
    if jd_terms.is_empty() {
        return KeywordMatch::default();
    }

    let resume_terms: BTreeSet<&str> = resume
        .keywords
        .iter()
        .chain(resume.phrases.iter())
        .map(String::as_str)
        .collect();

    let mut present = Vec::new();
    let mut missing = Vec::new();
    for &term in &jd_terms {
        if resume_terms.contains(term) {
            present.push(term.to_string());
        } else if resume_terms
            .iter()
            .any(|&r| r.contains(term) || term.contains(r))
        {
            // partial overlap: excluded from both lists
        } else {
            missing.push(term.to_string());
        }
    }

    let match_rate = present.len() as f64 / jd_terms.len() as f64;
    KeywordMatch {
        present,
        missing,
        match_rate,
    }
}

/// Fraction of the JD's industry terms also present in the résumé's.
/// 1.0 when the JD mentions none. Without a JD, a proxy density of the
/// résumé's own industry terms against its keyword-set size (20% → 1.0).
pub fn industry_coverage(resume: &KeywordSet, jd: Option<&KeywordSet>) -> f64 {
    match jd {
        Some(jd) => {
            if jd.industry_terms.is_empty() {
                return 1.0;
            }
            let covered = jd
                .industry_terms
                .iter()
                .filter(|t| resume.industry_terms.contains(*t))
                .count();
            covered as f64 / jd.industry_terms.len() as f64
        }
        None => {
            if resume.keywords.is_empty() {
                return 0.0;
            }
            (5.0 * resume.industry_terms.len() as f64 / resume.keywords.len() as f64)
                .clamp(0.0, 1.0)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_empty_sets() {
        let set = extract_keywords("");
        assert!(set.keywords.is_empty());
        assert!(set.phrases.is_empty());
        assert!(set.industry_terms.is_empty());
    }

    #[test]
    fn test_stop_words_and_numbers_excluded_from_keywords() {
        let set = extract_keywords("the team shipped 2021 releases");
        assert!(!set.keywords.contains("the"), "stop word must be filtered");
        assert!(!set.keywords.contains("2021"), "pure number must be filtered");
        assert!(set.keywords.contains("team"));
        assert!(set.keywords.contains("shipped"));
    }

    #[test]
    fn test_keyword_length_bounds() {
        let long = "x".repeat(26);
        let text = format!("go rust {long}");
        let set = extract_keywords(&text);
        assert!(set.keywords.contains("go"), "2-char tokens are keywords");
        assert!(!set.keywords.contains(&long), "26-char token exceeds the cap");
    }

    #[test]
    fn test_punctuation_becomes_token_boundary() {
        let set = extract_keywords("React/Redux, Node.js!");
        assert!(set.keywords.contains("react"));
        assert!(set.keywords.contains("redux"));
        assert!(set.keywords.contains("node"));
        assert!(set.keywords.contains("js"));
    }

    #[test]
    fn test_hyphenated_tokens_survive_cleaning() {
        let set = extract_keywords("full-stack engineer");
        assert!(set.keywords.contains("full-stack"));
    }

    #[test]
    fn test_phrases_built_from_raw_token_sequence() {
        // "a" is a stop word, but phrase windows run over the raw sequence.
        let set = extract_keywords("managed a team");
        assert!(set.phrases.contains("managed a"));
        assert!(set.phrases.contains("a team"));
        assert!(set.phrases.contains("managed a team"));
    }

    #[test]
    fn test_insignificant_phrases_rejected() {
        let set = extract_keywords("of the in 10 25");
        assert!(
            set.phrases.is_empty(),
            "phrases of stop words and numbers must be rejected, got {:?}",
            set.phrases
        );
    }

    #[test]
    fn test_industry_terms_across_families() {
        let set =
            extract_keywords("kubernetes postgresql react scrum roi led migrations");
        for term in ["kubernetes", "postgresql", "react", "scrum", "roi", "led"] {
            assert!(
                set.industry_terms.contains(term),
                "{term} should be classified as an industry term"
            );
        }
        assert!(!set.industry_terms.contains("migrations"));
    }

    #[test]
    fn test_industry_phrase_classification() {
        let set = extract_keywords("led migration projects");
        assert!(
            set.industry_terms.contains("led migration"),
            "phrase containing an achievement verb is an industry term"
        );
    }

    #[test]
    fn test_java_not_matched_inside_javascript() {
        assert!(is_industry_term("java"));
        assert!(is_industry_term("javascript"));
        // word boundaries keep neither family matching inside a longer word
        assert!(!is_industry_term("javascripty"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Led migration to React and TypeScript, improving load time by 40%";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }

    #[test]
    fn test_exact_match_partition() {
        let resume = extract_keywords("python developer");
        let jd = extract_keywords("python react");
        let m = match_terms(&resume, &jd);
        assert!(m.present.contains(&"python".to_string()));
        assert!(m.missing.contains(&"react".to_string()));
    }

    #[test]
    fn test_partial_overlap_dropped_from_both_lists() {
        // "postgres" (résumé) is a substring of "postgresql" (JD): the JD
        // term must appear in NEITHER list, by design.
        let resume = extract_keywords("postgres");
        let jd = extract_keywords("postgresql");
        let m = match_terms(&resume, &jd);
        assert!(!m.present.contains(&"postgresql".to_string()));
        assert!(!m.missing.contains(&"postgresql".to_string()));
        assert_eq!(m.match_rate, 0.0, "dropped terms do not count as present");
    }

    #[test]
    fn test_empty_jd_set_scores_zero_rate() {
        let resume = extract_keywords("python");
        let m = match_terms(&resume, &KeywordSet::default());
        assert_eq!(m.match_rate, 0.0);
        assert!(m.present.is_empty());
        assert!(m.missing.is_empty());
    }

    #[test]
    fn test_match_rate_denominator_is_full_jd_set() {
        let resume = extract_keywords("python");
        let jd = extract_keywords("python golang terraform");
        let m = match_terms(&resume, &jd);
        // 6 JD terms: 3 keywords + 2 bigrams + 1 trigram; only "python" exact
        assert!(m.match_rate > 0.0 && m.match_rate < 0.5, "rate was {}", m.match_rate);
    }

    fn set_of(terms: &[&str]) -> BTreeSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_industry_coverage_with_jd() {
        let resume = KeywordSet {
            industry_terms: set_of(&["kubernetes", "docker"]),
            ..Default::default()
        };
        let jd = KeywordSet {
            industry_terms: set_of(&["kubernetes", "terraform"]),
            ..Default::default()
        };
        let coverage = industry_coverage(&resume, Some(&jd));
        assert!((coverage - 0.5).abs() < f64::EPSILON, "coverage was {coverage}");
    }

    #[test]
    fn test_industry_coverage_jd_without_industry_terms() {
        let resume = extract_keywords("kubernetes");
        let jd = extract_keywords("friendly workplace culture");
        assert!(jd.industry_terms.is_empty());
        assert_eq!(industry_coverage(&resume, Some(&jd)), 1.0);
    }

    #[test]
    fn test_industry_coverage_proxy_without_jd() {
        let resume = extract_keywords("react kubernetes postgresql python terraform");
        let coverage = industry_coverage(&resume, None);
        assert_eq!(coverage, 1.0, "all-industry keyword set saturates the proxy");

        let sparse = extract_keywords("walked dogs around town every weekend morning");
        assert_eq!(industry_coverage(&sparse, None), 0.0);
    }
}
