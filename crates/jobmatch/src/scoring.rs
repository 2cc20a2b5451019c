//! Match scoring — keyword overlap between résumé text and a job description.
//!
//! Default: `KeywordScorer` (pure-Rust, deterministic, fully testable). The
//! trait seam exists so a semantic backend can be swapped in later without
//! touching callers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Full match report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Integer percentage, always within `0..=100`.
    pub score: u32,
    /// Keywords found verbatim somewhere in the résumé text.
    pub matched: Vec<String>,
    /// Keywords with no occurrence in the résumé text.
    pub missing: Vec<String>,
    pub recommendation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The scorer seam. Implement this to swap backends without touching caller
/// code.
pub trait Scorer: Send + Sync {
    fn score(&self, resume_text: &str, job_description: &str)
        -> Result<MatchReport, MatchError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordScorer — default backend
// ────────────────────────────────────────────────────────────────────────────

/// Crude keyword scorer, preserved as-observed from the tool this library
/// grew out of: case-sensitive, punctuation kept, single-space tokenization,
/// plain substring matching. A known matching limitation, not a bug.
pub struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<MatchReport, MatchError> {
        compute_keyword_match(resume_text, job_description)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_keyword_match(
    resume_text: &str,
    job_description: &str,
) -> Result<MatchReport, MatchError> {
    if job_description.trim().is_empty() {
        return Err(MatchError::EmptyJobDescription);
    }
    if resume_text.is_empty() {
        return Err(MatchError::EmptyResumeText);
    }

    // Single-space split with duplicates collapsed. Runs of spaces produce
    // empty tokens, which stay in the set and trivially match — preserved
    // as-observed.
    let keywords: BTreeSet<&str> = job_description.split(' ').collect();

    // Unreachable after the blank check above, but the contract is a score
    // in 0..=100 no matter what, never a division by zero.
    if keywords.is_empty() {
        return Ok(MatchReport {
            score: 0,
            matched: vec![],
            missing: vec![],
            recommendation: "No keywords found in the job description.".to_string(),
        });
    }

    let (matched, missing): (Vec<&str>, Vec<&str>) = keywords
        .iter()
        .copied()
        .partition(|kw| resume_text.contains(kw));

    let score = (matched.len() * 100 / keywords.len()).min(100) as u32;
    let recommendation = build_recommendation(score, &missing);

    Ok(MatchReport {
        score,
        matched: matched.into_iter().map(String::from).collect(),
        missing: missing.into_iter().map(String::from).collect(),
        recommendation,
    })
}

/// Builds a human-readable recommendation line from score and missing terms.
fn build_recommendation(score: u32, missing: &[&str]) -> String {
    let top: Vec<&str> = missing.iter().take(3).copied().collect();

    if score >= 80 {
        "Strong match. The résumé already covers the key terms of this job description."
            .to_string()
    } else if score >= 50 {
        format!(
            "Moderate match ({score}/100). Consider working in: {}.",
            top.join(", ")
        )
    } else {
        format!("Low match ({score}/100). Missing terms: {}.", top.join(", "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(resume_text: &str, job_description: &str) -> u32 {
        compute_keyword_match(resume_text, job_description)
            .unwrap()
            .score
    }

    #[test]
    fn test_blank_job_description_is_an_error() {
        let result = compute_keyword_match("some resume text", "");
        assert!(matches!(result, Err(MatchError::EmptyJobDescription)));
    }

    #[test]
    fn test_whitespace_only_job_description_is_an_error() {
        let result = compute_keyword_match("some resume text", "   ");
        assert!(matches!(result, Err(MatchError::EmptyJobDescription)));
    }

    #[test]
    fn test_empty_resume_text_is_an_error() {
        let result = compute_keyword_match("", "Rust engineer");
        assert!(matches!(result, Err(MatchError::EmptyResumeText)));
    }

    #[test]
    fn test_all_keywords_present_scores_100() {
        let report =
            compute_keyword_match("Senior Rust engineer, distributed systems", "Rust engineer")
                .unwrap();
        assert_eq!(report.score, 100);
        assert_eq!(report.matched.len(), 2);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_no_keywords_present_scores_0() {
        let report = compute_keyword_match("Pastry chef with ten years of experience", "Rust engineer")
            .unwrap();
        assert_eq!(report.score, 0);
        assert!(report.matched.is_empty());
        assert_eq!(report.missing.len(), 2);
    }

    /// Two of three keywords match, and integer division floors: 2*100/3 = 66.
    #[test]
    fn test_partial_match_floors_the_percentage() {
        let score = score_of(
            "Experienced Python developer with cloud skills",
            "Python cloud engineer",
        );
        assert_eq!(score, 66);
    }

    #[test]
    fn test_score_is_always_within_bounds() {
        let cases = [
            ("Rust Rust Rust", "Rust"),
            ("x", "a b c d e f g h"),
            ("the quick brown fox", "the the the quick"),
        ];
        for (resume, jd) in cases {
            let score = score_of(resume, jd);
            assert!(score <= 100, "score {score} out of bounds for jd {jd:?}");
        }
    }

    #[test]
    fn test_duplicate_keywords_collapse_into_one() {
        // {Rust, Go}: one of two matches → 50, not 2-of-3.
        assert_eq!(score_of("Rust shop", "Rust Rust Go"), 50);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(score_of("python developer", "Python"), 0);
        assert_eq!(score_of("Python developer", "Python"), 100);
    }

    /// Substring matching is not word-boundary aware: a keyword can match
    /// inside an unrelated longer word.
    #[test]
    fn test_keyword_matches_inside_longer_word() {
        assert_eq!(score_of("JavaScript developer", "Java"), 100);
    }

    /// But it is still a real substring check: "happy" does not occur in
    /// "unhappiness" ("happi" ≠ "happy").
    #[test]
    fn test_no_false_positive_from_near_miss_substring() {
        assert_eq!(score_of("unhappiness", "happy"), 0);
        assert_eq!(score_of("unhappiness", "unhappiness"), 100);
    }

    /// Runs of spaces yield empty tokens, which trivially match as
    /// substrings. Documented as-observed behavior.
    #[test]
    fn test_double_space_keeps_empty_token() {
        assert_eq!(score_of("Python cloud", "Python  cloud"), 100);
        // {"", "Rust"}: empty token matches, "Rust" does not → 50.
        assert_eq!(score_of("Python cloud", "Rust  Rust"), 50);
    }

    #[test]
    fn test_scorer_is_usable_as_trait_object() {
        let scorer: &dyn Scorer = &KeywordScorer;
        let report = scorer.score("Rust developer", "Rust").unwrap();
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = compute_keyword_match("Rust developer", "Rust Go").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 50);
        assert_eq!(json["matched"][0], "Rust");
        assert_eq!(json["missing"][0], "Go");
    }

    #[test]
    fn test_recommendation_high_score() {
        let rec = build_recommendation(85, &[]);
        assert!(rec.contains("Strong match"));
    }

    #[test]
    fn test_recommendation_moderate_score_lists_missing_terms() {
        let rec = build_recommendation(60, &["Kafka"]);
        assert!(rec.contains("60"));
        assert!(rec.contains("Kafka"));
    }

    #[test]
    fn test_recommendation_low_score_caps_missing_terms_at_three() {
        let rec = build_recommendation(10, &["a", "b", "c", "d"]);
        assert!(rec.contains("a, b, c"));
        assert!(!rec.contains('d'));
    }
}
