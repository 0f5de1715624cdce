//! Keyword profiles — the ordered role → keyword table the coverage engine resolves against.
//!
//! The table is plain data: swap it (via `KEYWORD_PROFILES_PATH`) without touching the
//! matching logic in `coverage::engine`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of the profile used when no role-specific profile matches.
pub const FALLBACK_PROFILE_ID: &str = "general";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A named, ordered list of keywords for one role category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordProfile {
    pub id: String,
    pub keywords: Vec<String>,
}

impl KeywordProfile {
    pub fn new(id: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Duplicate keyword profile: {0}")]
    DuplicateProfile(String),

    #[error("Keyword profile id must not be blank")]
    EmptyProfileId,

    #[error("Keyword profile table has no 'general' fallback profile")]
    MissingFallback,

    #[error("Failed to read keyword profiles from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid keyword profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered profile table. Declaration order is resolution order: the first profile whose
/// id appears in a role label wins.
///
/// Invariants (checked in `ProfileTable::new`):
/// - ids are non-blank (an empty id is a substring of every label)
/// - ids are unique, compared case-insensitively
/// - a `general` fallback profile exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<KeywordProfile>", into = "Vec<KeywordProfile>")]
pub struct ProfileTable {
    profiles: Vec<KeywordProfile>,
    fallback_index: usize,
}

impl ProfileTable {
    pub fn new(profiles: Vec<KeywordProfile>) -> Result<Self, ProfileError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if profile.id.trim().is_empty() {
                return Err(ProfileError::EmptyProfileId);
            }
            if !seen.insert(profile.id.to_lowercase()) {
                return Err(ProfileError::DuplicateProfile(profile.id.clone()));
            }
        }

        let fallback_index = profiles
            .iter()
            .position(|p| p.id.eq_ignore_ascii_case(FALLBACK_PROFILE_ID))
            .ok_or(ProfileError::MissingFallback)?;

        Ok(Self {
            profiles,
            fallback_index,
        })
    }

    /// Parses a JSON array of `{"id": ..., "keywords": [...]}` objects.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profiles: Vec<KeywordProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Profiles in resolution order.
    pub fn profiles(&self) -> &[KeywordProfile] {
        &self.profiles
    }

    pub fn fallback(&self) -> &KeywordProfile {
        &self.profiles[self.fallback_index]
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

impl TryFrom<Vec<KeywordProfile>> for ProfileTable {
    type Error = ProfileError;

    fn try_from(profiles: Vec<KeywordProfile>) -> Result<Self, Self::Error> {
        Self::new(profiles)
    }
}

impl From<ProfileTable> for Vec<KeywordProfile> {
    fn from(table: ProfileTable) -> Self {
        table.profiles
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        let profiles = default_profiles();
        let fallback_index = profiles.len() - 1;
        Self {
            profiles,
            fallback_index,
        }
    }
}

/// Built-in profiles. `general` must stay last so role-specific ids win first.
fn default_profiles() -> Vec<KeywordProfile> {
    vec![
        KeywordProfile::new(
            "software developer",
            &[
                "JavaScript", "Python", "React", "Node.js", "Git", "API", "Database", "Agile",
                "Frontend", "Backend",
            ],
        ),
        KeywordProfile::new(
            "marketing manager",
            &[
                "SEO", "SEM", "Analytics", "Campaign", "Social Media", "Content Marketing",
                "Brand Management", "Lead Generation",
            ],
        ),
        KeywordProfile::new(
            "data scientist",
            &[
                "Python", "R", "Machine Learning", "Statistics", "SQL", "Pandas", "NumPy",
                "Visualization", "Big Data",
            ],
        ),
        KeywordProfile::new(
            "project manager",
            &[
                "Agile", "Scrum", "Risk Management", "Budget", "Timeline", "Stakeholder",
                "Leadership", "Communication",
            ],
        ),
        KeywordProfile::new(
            FALLBACK_PROFILE_ID,
            &[
                "Leadership", "Communication", "Problem Solving", "Team Work",
                "Project Management", "Analysis", "Strategic Thinking",
            ],
        ),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
