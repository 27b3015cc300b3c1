// src/config.rs
use crate::application::pipeline::SlugPolicy;
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    media_root: PathBuf,
    slug_policy: SlugPolicy,
    allowed_origins: Vec<String>,
    max_upload_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://quill.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_media_root() -> PathBuf {
    PathBuf::from("media")
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {value:?}"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let media_root = lookup("MEDIA_ROOT").map_or_else(default_media_root, PathBuf::from);

        let defaults = SlugPolicy::default();
        let suffix_length = parse_number(
            "SLUG_SUFFIX_LENGTH",
            lookup("SLUG_SUFFIX_LENGTH"),
            defaults.suffix_length,
        )?;
        if !(1..=32).contains(&suffix_length) {
            return Err(ConfigError::Invalid(
                "SLUG_SUFFIX_LENGTH must be between 1 and 32".into(),
            ));
        }
        let max_attempts = parse_number(
            "SLUG_MAX_ATTEMPTS",
            lookup("SLUG_MAX_ATTEMPTS"),
            defaults.max_attempts,
        )?;
        if max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let max_upload_bytes = parse_number(
            "MAX_UPLOAD_BYTES",
            lookup("MAX_UPLOAD_BYTES"),
            DEFAULT_MAX_UPLOAD_BYTES,
        )?;

        Ok(Self {
            database_url,
            listen_addr,
            media_root,
            slug_policy: SlugPolicy {
                suffix_length,
                max_attempts,
            },
            allowed_origins,
            max_upload_bytes,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn media_root(&self) -> &PathBuf {
        &self.media_root
    }

    pub fn slug_policy(&self) -> SlugPolicy {
        self.slug_policy
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
