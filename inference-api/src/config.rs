//! Server configuration from `.env` and the process environment.

use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Origins allowed by CORS (the UI dev server).
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid INFER_BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_value = lookup("INFER_BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let allowed_origins = lookup("INFER_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|origin| origin.to_string())
                    .collect()
            });

        Ok(Self {
            bind_addr,
            allowed_origins,
        })
    }
}

/// Load the nearest `.env`, searching the current directory and its ancestors.
pub fn load_env_file() {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine current directory for .env lookup");
            return;
        }
    };

    for dir in cwd.ancestors() {
        let candidate = dir.join(".env");
        if candidate.exists() {
            load_from(&candidate);
            return;
        }
    }

    tracing::info!(
        cwd = %cwd.display(),
        "No .env file found in current directory or ancestors; using process environment only"
    );
}

fn load_from(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(_) => tracing::info!(path = %path.display(), "Loaded environment from .env"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to load .env file"),
    }
}
