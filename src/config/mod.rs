//! Runtime configuration for the intake process.
//!
//! Settings come from built-in defaults, optionally replaced by a JSON file,
//! then overridden by `INTAKE_*` environment variables.

use crate::tracker::adapters::JiraCloudClient;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`IntakeConfig::request_timeout_secs`].
pub const TIMEOUT_ENV: &str = "INTAKE_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding [`IntakeConfig::credential_store_dir`].
pub const STORE_DIR_ENV: &str = "INTAKE_CREDENTIAL_STORE_DIR";
/// Environment variable overriding [`IntakeConfig::log_filter`].
pub const LOG_ENV: &str = "INTAKE_LOG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`IntakeConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that was read.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A setting has an unusable value.
    #[error("invalid value '{value}' for {setting}: {reason}")]
    Invalid {
        /// Setting or environment variable name.
        setting: &'static str,
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Settings for the intake binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeConfig {
    /// Upper bound for one issue tracker request, in seconds.
    pub request_timeout_secs: u64,
    /// Directory holding one credential document per user.
    pub credential_store_dir: Utf8PathBuf,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: JiraCloudClient::DEFAULT_TIMEOUT.as_secs(),
            credential_store_dir: Utf8PathBuf::from("./credentials"),
            log_filter: "info".to_owned(),
        }
    }
}

impl IntakeConfig {
    /// Loads the defaults, replaced by the JSON file at `path` when given.
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] when the file
    /// cannot be used, and [`ConfigError::Invalid`] for unusable values.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let Some(file) = path else {
            return Ok(Self::default());
        };
        let contents = read_file(file).map_err(|source| ConfigError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: file.to_path_buf(),
                source,
            })?;
        config.validated()
    }

    /// Applies `INTAKE_*` overrides resolved through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when an override cannot be parsed or
    /// yields an unusable value.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            self.request_timeout_secs =
                raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    setting: TIMEOUT_ENV,
                    value: raw.clone(),
                    reason: "expected a whole number of seconds",
                })?;
        }
        if let Some(raw) = lookup(STORE_DIR_ENV) {
            self.credential_store_dir = Utf8PathBuf::from(raw);
        }
        if let Some(raw) = lookup(LOG_ENV) {
            self.log_filter = raw;
        }
        self.validated()
    }

    /// Loads the file at `path`, then applies the process environment.
    ///
    /// # Errors
    ///
    /// Propagates [`IntakeConfig::load`] and [`IntakeConfig::apply_overrides`]
    /// failures.
    pub fn from_environment(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        Self::load(path)?.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                setting: "request_timeout_secs",
                value: "0".to_owned(),
                reason: "the timeout must be at least one second",
            });
        }
        if self.credential_store_dir.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid {
                setting: "credential_store_dir",
                value: self.credential_store_dir.to_string(),
                reason: "the credential store needs a directory",
            });
        }
        Ok(self)
    }
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path names no file"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(name)
}
