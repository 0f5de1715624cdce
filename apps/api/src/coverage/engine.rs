//! Keyword Coverage Engine — resolves a role label to a keyword profile and measures how
//! many of the profile's keywords a document mentions.
//!
//! Pure and synchronous: no I/O, no hidden state, no randomness. Shared across handlers as
//! `Arc<KeywordCoverageEngine>`.
//!
//! Algorithm:
//! 1. Lowercase the role label; the first profile (declaration order) whose id is a
//!    substring of it wins, otherwise `general`
//! 2. Lowercase the document once; each keyword matches if its lowercase form is a
//!    contiguous substring
//! 3. coverage_ratio = matched / total, or 0.0 for an empty profile

use crate::coverage::profiles::{KeywordProfile, ProfileTable};
use crate::coverage::report::CoverageReport;

#[derive(Debug, Clone, Default)]
pub struct KeywordCoverageEngine {
    table: ProfileTable,
}

impl KeywordCoverageEngine {
    pub fn new(table: ProfileTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ProfileTable {
        &self.table
    }

    /// Never fails. Ambiguous labels resolve to the earliest declared profile, e.g.
    /// "software developer and data scientist" → "software developer".
    pub fn resolve_profile(&self, role_label: &str) -> &KeywordProfile {
        let label = role_label.to_lowercase();
        self.table
            .profiles()
            .iter()
            .find(|profile| label.contains(&profile.id.to_lowercase()))
            .unwrap_or_else(|| self.table.fallback())
    }

    pub fn analyze(&self, document_text: &str, role_label: &str) -> CoverageReport {
        score_document(document_text, self.resolve_profile(role_label))
    }
}

/// Partitions the profile's keywords into matched/unmatched, preserving profile order.
///
/// Plain substring semantics: a one-letter keyword like "R" matches any document that
/// contains the letter.
pub fn score_document(document_text: &str, profile: &KeywordProfile) -> CoverageReport {
    let document = document_text.to_lowercase();

    let (matched, unmatched): (Vec<String>, Vec<String>) = profile
        .keywords
        .iter()
        .cloned()
        .partition(|keyword| document.contains(&keyword.to_lowercase()));

    let total = profile.keywords.len();
    let coverage_ratio = if total > 0 {
        matched.len() as f64 / total as f64
    } else {
        0.0
    };

    CoverageReport {
        profile_id: profile.id.clone(),
        matched,
        unmatched,
        coverage_ratio,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
