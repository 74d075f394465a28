//! Shared configuration for the pantry CLI.
//!
//! TOML config file, `PANTRY_*` environment overrides, platform paths, and
//! translation to `pantry_core::PantryConfig`. Core never reads files; the
//! binary loads a [`Config`] here and hands core the translated result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pantry_core::{DEFAULT_BASE_URL, PantryConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Remote API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Where the login flag persists. Defaults to `session.json` in the
    /// platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,

    /// Default output format for list commands.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            session_file: None,
            output: default_output(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "pantry", "pantry")
}

fn home_fallback(sub: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(sub);
    p.push("pantry");
    p
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default location of the persisted session flags.
pub fn default_session_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(".local/share").join("session.json"),
        |dirs| dirs.data_dir().join("session.json"),
    )
}

// ── Loading / saving ────────────────────────────────────────────────

/// Load config from `path` layered over defaults, then `PANTRY_*` env vars.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PANTRY_"));

    Ok(figment.extract()?)
}

/// Load config from the canonical path.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the core session config, validating the base URL.
    pub fn to_pantry_config(&self) -> Result<PantryConfig, ConfigError> {
        let base_url: url::Url = self.base_url.parse().map_err(|e| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL '{}': {e}", self.base_url),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "base_url".into(),
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }
        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let session_file = self
            .session_file
            .clone()
            .unwrap_or_else(default_session_path);

        Ok(PantryConfig::new(base_url)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_session_file(session_file))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|jail| {
            let cfg = load_config_from(&jail.directory().join("missing.toml")).unwrap();
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.base_url, "https://dummyjson.com");
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    base_url = "http://localhost:9000"
                    timeout = 10
                    output = "json"
                "#,
            )?;
            jail.set_env("PANTRY_TIMEOUT", "5");

            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.base_url, "http://localhost:9000");
            assert_eq!(cfg.timeout, 5);
            assert_eq!(cfg.output, "json");
            Ok(())
        });
    }

    #[test]
    fn save_then_load_round_trip() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nested/config.toml");
            let cfg = Config {
                session_file: Some(PathBuf::from("/tmp/pantry-session.json")),
                ..Config::default()
            };
            save_config_to(&cfg, &path).unwrap();
            assert_eq!(load_config_from(&path).unwrap(), cfg);
            Ok(())
        });
    }

    #[test]
    fn translation_validates_url_and_timeout() {
        let bad_url = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(
            bad_url.to_pantry_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "base_url"
        ));

        let ftp = Config {
            base_url: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(ftp.to_pantry_config().is_err());

        let zero = Config {
            timeout: 0,
            ..Config::default()
        };
        assert!(zero.to_pantry_config().is_err());
    }

    #[test]
    fn translation_fills_session_path() {
        let cfg = Config {
            timeout: 12,
            ..Config::default()
        }
        .to_pantry_config()
        .unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(12));
        assert_eq!(cfg.base_url.as_str(), "https://dummyjson.com/");
        assert!(
            cfg.session_file
                .as_ref()
                .is_some_and(|p| p.ends_with("session.json"))
        );
    }
}
