use serde::{Deserialize, Serialize};

/// Keyword coverage of one document against one profile.
///
/// `matched` and `unmatched` partition the profile's keywords and keep profile order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub profile_id: String,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
    pub coverage_ratio: f64, // 0.0 – 1.0
}

impl CoverageReport {
    pub fn total_keywords(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Coverage as a whole percentage, rounded down. 0 for an empty profile.
    pub fn keyword_score(&self) -> u32 {
        let total = self.total_keywords();
        if total == 0 {
            return 0;
        }
        (self.matched.len() * 100 / total) as u32
    }
}

/// Builds a human-readable recommendation from the keyword score and missing keywords.
pub fn build_recommendation(report: &CoverageReport) -> String {
    if report.total_keywords() == 0 {
        return format!(
            "No keywords configured for profile '{}' — cannot score coverage.",
            report.profile_id
        );
    }

    let score = report.keyword_score();
    let top_missing: Vec<&str> = report
        .unmatched
        .iter()
        .take(3)
        .map(String::as_str)
        .collect();

    if score >= 80 {
        format!(
            "Strong keyword coverage ({score}/100) for '{}'.",
            report.profile_id
        )
    } else if score >= 50 {
        format!(
            "Moderate keyword coverage ({score}/100). Consider mentioning: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Low keyword coverage ({score}/100). Missing key terms: {}. Tailor your résumé to the target role.",
            top_missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(matched: &[&str], unmatched: &[&str]) -> CoverageReport {
        let total = matched.len() + unmatched.len();
        CoverageReport {
            profile_id: "software developer".to_string(),
            matched: matched.iter().map(|s| s.to_string()).collect(),
            unmatched: unmatched.iter().map(|s| s.to_string()).collect(),
            coverage_ratio: if total == 0 {
                0.0
            } else {
                matched.len() as f64 / total as f64
            },
        }
    }

    #[test]
    fn test_keyword_score_half() {
        let report = make_report(&["Git", "API"], &["React", "Agile"]);
        assert_eq!(report.keyword_score(), 50);
        assert_eq!(report.total_keywords(), 4);
    }

    #[test]
    fn test_keyword_score_rounds_down() {
        let report = make_report(&["Git"], &["React", "Agile"]);
        assert_eq!(report.keyword_score(), 33);
    }

    #[test]
    fn test_keyword_score_uses_integer_arithmetic() {
        // 0.29 * 100.0 is 28.999… in floating point
        let matched: Vec<String> = (0..29).map(|i| format!("kw{i}")).collect();
        let unmatched: Vec<String> = (29..100).map(|i| format!("kw{i}")).collect();
        let report = CoverageReport {
            profile_id: "general".to_string(),
            matched,
            unmatched,
            coverage_ratio: 0.29,
        };
        assert_eq!(report.keyword_score(), 29);
    }

    #[test]
    fn test_keyword_score_empty_profile_is_zero() {
        assert_eq!(make_report(&[], &[]).keyword_score(), 0);
    }

    #[test]
    fn test_recommendation_strong() {
        let rec = build_recommendation(&make_report(&["Git", "API", "React", "Agile"], &["SQL"]));
        assert!(rec.contains("Strong"));
        assert!(rec.contains("80"));
    }

    #[test]
    fn test_recommendation_moderate_lists_first_three_gaps() {
        let rec = build_recommendation(&make_report(
            &["A", "B", "C", "D", "E"],
            &["Git", "API", "Database", "Frontend", "Backend"],
        ));
        assert!(rec.contains("Moderate"));
        assert!(rec.contains("Git, API, Database"));
        assert!(!rec.contains("Frontend"));
    }

    #[test]
    fn test_recommendation_low() {
        let rec = build_recommendation(&make_report(&[], &["Scrum", "Budget"]));
        assert!(rec.contains("Low"));
        assert!(rec.contains("(0/100)"));
        assert!(rec.contains("Scrum, Budget"));
    }

    #[test]
    fn test_recommendation_empty_profile() {
        let rec = build_recommendation(&make_report(&[], &[]));
        assert!(rec.contains("No keywords configured"));
    }
}
