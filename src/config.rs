//! Client configuration.
//!
//! The backend base URL comes from the environment at boot time
//! (`CODEHIVE_API_URL`), defaulting to the local development backend.
//! Session state is persisted under the platform data directory unless
//! `CODEHIVE_SESSION_DIR` overrides it.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the session directory path
const APP_NAME: &str = "codehive";

/// Environment variable naming the backend base URL
const API_URL_VAR: &str = "CODEHIVE_API_URL";

/// Environment variable overriding the session storage directory
const SESSION_DIR_VAR: &str = "CODEHIVE_SESSION_DIR";

/// Default backend base URL for local development
const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Directory where the session store persists its token/user pair.
    pub fn session_dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var(SESSION_DIR_VAR) {
            return Ok(PathBuf::from(dir));
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}
