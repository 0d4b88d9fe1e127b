//! Configuration loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (home directory from the platform, log level `warn`)
//! 2. Environment variables: `FILEBROWSE_*` prefix
//!
//! There is no config file: the host launches the plugin with its own
//! environment and arguments only.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::application::ApplicationError;

/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "FILEBROWSE";

/// Default log level when neither `-d` nor `FILEBROWSE_LOG_LEVEL` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings for filebrowse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory substituted for a leading `~` (default: the user's home)
    pub home_dir: Option<PathBuf>,
    /// Log level for stderr diagnostics (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            home_dir: default_home_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Home directory as known to the process environment.
fn default_home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned unchanged.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings from defaults and the process environment.
    ///
    /// Only `FILEBROWSE_*` variables are read; variables that are not valid
    /// UTF-8 are skipped instead of aborting the load.
    pub fn load() -> Result<Self, ApplicationError> {
        let prefix = format!("{ENV_PREFIX}_");
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| k.to_ascii_uppercase().starts_with(&prefix))
            .collect();
        Self::load_from(vars)
    }

    /// Load settings reading `FILEBROWSE_*` variables from `vars`.
    pub fn load_from(vars: HashMap<String, String>) -> Result<Self, ApplicationError> {
        Self::apply_env_overrides(Self::default(), vars)
    }

    /// Apply FILEBROWSE_* environment variables as explicit overrides.
    ///
    /// Only the override is shell-expanded; the platform home is used verbatim.
    fn apply_env_overrides(
        mut settings: Self,
        vars: HashMap<String, String>,
    ) -> Result<Self, ApplicationError> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(vars));
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("home_dir") {
            settings.home_dir = Some(PathBuf::from(expand_env_vars(&val)));
        }
        if let Ok(val) = config.get_string("log_level") {
            settings.log_level = val;
        }

        Ok(settings)
    }

    /// Parsed `log_level`.
    pub fn level_filter(&self) -> Result<LevelFilter, ApplicationError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|e| ApplicationError::Config {
            message: format!("invalid log level '{}': {}", self.log_level, e),
        })
    }

    /// Effective log level: `-d` flags win, otherwise `log_level` is parsed.
    ///
    /// An invalid `log_level` is only an error when no `-d` flag is given.
    pub fn effective_level(&self, verbosity: u8) -> Result<LevelFilter, ApplicationError> {
        match verbosity {
            0 => self.level_filter(),
            1 => Ok(LevelFilter::INFO),
            2 => Ok(LevelFilter::DEBUG),
            _ => Ok(LevelFilter::TRACE),
        }
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
