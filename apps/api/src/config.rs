use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::coverage::profiles::ProfileTable;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON keyword profile table; the built-in table is used when unset.
    pub profiles_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profiles_path: std::env::var_os("KEYWORD_PROFILES_PATH").map(PathBuf::from),
        })
    }

    pub fn load_profiles(&self) -> Result<ProfileTable> {
        match &self.profiles_path {
            Some(path) => ProfileTable::from_path(path).with_context(|| {
                format!("Failed to load KEYWORD_PROFILES_PATH={}", path.display())
            }),
            None => Ok(ProfileTable::default()),
        }
    }
}
