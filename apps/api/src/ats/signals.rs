//! Signal detectors — independent heuristics over the raw résumé text.
//! Every detector returns a score already clamped to [0,1].

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Words per expected quantified achievement.
const WORDS_PER_ACHIEVEMENT: usize = 150;

/// The six quantifiable-achievement patterns: percentages, dollar amounts,
/// `10k`/`50K+` shorthand, `2x` multipliers, durations, and an achievement
/// verb followed by a number within the same clause.
static ACHIEVEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+(?:\.\d+)?%",
        r"\$\s?\d[\d,]*(?:\.\d+)?\s?(?:[kKmMbB]\b)?",
        r"\b\d+[kK]\b\+?",
        r"\b\d+(?:\.\d+)?[xX]\b",
        r"(?i)\b\d+\+?\s*(?:years?|months?|weeks?)\b",
        r"(?i)\b(?:led|managed|developed|implemented|designed|optimized|increased|reduced|improved)\b[^.!?\n]{0,60}\d",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static NUMERIC_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{4}\b").unwrap());

static MONTH_NAME_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}\b")
        .unwrap()
});

const BULLET_GLYPHS: &[char] = &['•', '-', '*', '‣', '·', '▪'];

/// Sentence-opening verbs that signal an achievement-oriented writing style.
const ACTION_VERBS: &[&str] = &[
    "led", "managed", "developed", "implemented", "designed", "optimized", "increased",
    "reduced", "improved", "built", "created", "launched", "delivered", "architected",
    "spearheaded", "drove", "shipped", "established", "streamlined", "automated", "mentored",
    "negotiated", "analyzed", "achieved",
];

// ────────────────────────────────────────────────────────────────────────────
// Detectors
// ────────────────────────────────────────────────────────────────────────────

/// Density of quantified achievements: total pattern matches against
/// `max(2, word_count / 150)` expected, clamped.
pub fn quantifiable_achievements(text: &str, word_count: usize) -> f64 {
    let matches: usize = ACHIEVEMENT_PATTERNS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();
    let expected = (word_count / WORDS_PER_ACHIEVEMENT).max(2);
    (matches as f64 / expected as f64).clamp(0.0, 1.0)
}

/// Starts at 1.0; −0.2 when two or more date styles each recur, −0.2 when
/// bulleted lines mix glyphs. Floored at 0.
pub fn format_consistency(text: &str) -> f64 {
    let mut score: f64 = 1.0;

    let month_name = MONTH_NAME_YEAR.find_iter(text).count();
    let numeric = NUMERIC_MONTH_YEAR.find_iter(text).count();
    // month-name and slash dates contain a bare year; strip them before
    // counting the bare-year style on the remainder
    let stripped = MONTH_NAME_YEAR.replace_all(text, " ");
    let stripped = NUMERIC_MONTH_YEAR.replace_all(&stripped, " ");
    let bare = BARE_YEAR.find_iter(&stripped).count();

    let recurring_styles = [bare, numeric, month_name]
        .iter()
        .filter(|&&count| count > 1)
        .count();
    if recurring_styles > 1 {
        score -= 0.2;
    }

    let glyphs: BTreeSet<char> = text
        .lines()
        .filter_map(|line| line.trim_start().chars().next())
        .filter(|c| BULLET_GLYPHS.contains(c))
        .collect();
    if glyphs.len() > 1 {
        score -= 0.2;
    }

    score.max(0.0)
}

/// 0.7 · sentence-length score + 0.3 · action-verb score.
///
/// Sentences are split on `.!?` with fragments of ≤5 chars discarded. Mean
/// sentence length in [8,25] words scores 1.0, otherwise the score decays
/// linearly with distance from 17. The action-verb score is the fraction of
/// sentences whose first word is in the fixed verb list.
pub fn readability(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > 5)
        .collect();
    if sentences.is_empty() {
        return 0.0;
    }

    let total_words: usize = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .sum();
    let mean = total_words as f64 / sentences.len() as f64;
    let length_score = if (8.0..=25.0).contains(&mean) {
        1.0
    } else {
        (1.0 - (mean - 17.0).abs() / 17.0).max(0.0)
    };

    let action_count = sentences
        .iter()
        .filter(|s| {
            leading_word(s)
                .map(|w| ACTION_VERBS.contains(&w.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .count();
    let action_score = action_count as f64 / sentences.len() as f64;

    (0.7 * length_score + 0.3 * action_score).clamp(0.0, 1.0)
}

/// First alphabetic word of a sentence, skipping bullet glyphs.
fn leading_word(sentence: &str) -> Option<&str> {
    sentence
        .split_whitespace()
        .find(|w| w.chars().any(|c| c.is_ascii_alphabetic()))
        .map(|w| w.trim_matches(|c: char| !c.is_ascii_alphabetic()))
        .filter(|w| !w.is_empty())
}

/// Word-count bands: 400–700 is ideal, adjacent bands step down, and far
/// outside the bands the score falls off linearly from 550, floored at 0.2.
pub fn optimal_length(word_count: usize) -> f64 {
    match word_count {
        400..=700 => 1.0,
        300..=399 | 701..=900 => 0.8,
        200..=299 | 901..=1200 => 0.6,
        _ => (1.0 - (word_count as f64 - 550.0).abs() / 1000.0).max(0.2),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievements_counts_all_pattern_families() {
        let text = "Increased revenue 40%. Saved $2M. Served 10k+ users. \
                    Made builds 3x faster over 2 years.";
        let score = quantifiable_achievements(text, 16);
        assert_eq!(score, 1.0, "five hits against two expected saturates");
    }

    #[test]
    fn test_achievements_verb_followed_by_number() {
        let text = "Reduced deployment time from hours to 15 minutes";
        assert!(quantifiable_achievements(text, 8) > 0.0);
    }

    #[test]
    fn test_achievements_zero_for_unquantified_text() {
        let text = "Responsible for various tasks and helping the team succeed";
        assert_eq!(quantifiable_achievements(text, 9), 0.0);
    }

    #[test]
    fn test_achievements_normalized_by_length() {
        // 2 matches, 600 words → 4 expected → 0.5
        let score = quantifiable_achievements("Grew capacity 20% and cut costs 10%", 600);
        assert!((score - 0.5).abs() < f64::EPSILON, "score was {score}");
    }

    #[test]
    fn test_format_single_date_style_unpenalized() {
        let text = "Acme (2019 — 2022)\nStartup (2022 — 2024)";
        assert_eq!(format_consistency(text), 1.0);
    }

    #[test]
    fn test_format_mixed_recurring_date_styles_penalized() {
        let text = "Acme 03/2019 to 06/2022\nStartup January 2022 to March 2024";
        let score = format_consistency(text);
        assert!((score - 0.8).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_format_month_name_dates_not_double_counted_as_bare_years() {
        // Every year digit-run here belongs to a month-name date; the bare
        // style must not register as a second recurring style.
        let text = "January 2019\nMarch 2020\nJune 2021";
        assert_eq!(format_consistency(text), 1.0);
    }

    #[test]
    fn test_format_mixed_bullet_glyphs_penalized() {
        let text = "• Shipped the rewrite\n- Led the migration\n• Cut costs";
        let score = format_consistency(text);
        assert!((score - 0.8).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_format_penalties_stack() {
        let text = "03/2019 04/2020\nMay 2019 June 2020\n• one\n- two";
        let score = format_consistency(text);
        assert!((score - 0.6).abs() < 1e-9, "both penalties apply, got {score}");
    }

    #[test]
    fn test_readability_ideal_band() {
        let text = "Led the migration of our checkout flow to a faster stack this year. \
                    Improved conversion by reworking the slowest pages one by one.";
        let score = readability(text);
        assert!(score > 0.9, "score was {score}");
    }

    #[test]
    fn test_readability_short_fragments_discarded() {
        assert_eq!(readability("Ok. Up. No."), 0.0);
    }

    #[test]
    fn test_readability_rewards_action_verb_openers() {
        let with_verbs = "Built the deploy pipeline for every backend service we run. \
                          Shipped the new onboarding flow to all paying customers.";
        let without = "The deploy pipeline was assembled for every backend service we run. \
                       The new onboarding flow was given to all paying customers.";
        assert!(readability(with_verbs) > readability(without));
    }

    #[test]
    fn test_readability_bullet_prefix_skipped_for_verb_check() {
        let bulleted = "• Led migration to the new platform for nine teams this quarter.";
        let score = readability(bulleted);
        assert!(score > 0.9, "glyph must not hide the opening verb, got {score}");
    }

    #[test]
    fn test_readability_decays_for_run_on_sentences() {
        let words = vec!["word"; 60].join(" ");
        let score = readability(&format!("{words}."));
        assert!(score < 0.1, "60-word sentence should score near zero, got {score}");
    }

    #[test]
    fn test_optimal_length_bands() {
        assert_eq!(optimal_length(550), 1.0);
        assert_eq!(optimal_length(400), 1.0);
        assert_eq!(optimal_length(700), 1.0);
        assert_eq!(optimal_length(350), 0.8);
        assert_eq!(optimal_length(800), 0.8);
        assert_eq!(optimal_length(250), 0.6);
        assert_eq!(optimal_length(1000), 0.6);
    }

    #[test]
    fn test_optimal_length_falloff_floor() {
        assert_eq!(optimal_length(5000), 0.2);
        let hundred = optimal_length(100);
        assert!((hundred - 0.55).abs() < 1e-9, "score was {hundred}");
    }
}
