//! Dispatcher configuration with environment variable support.
//!
//! Values are read from `ROUTEKIT_`-prefixed environment variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `ROUTEKIT_REDIRECT_TRAILING_SLASH` | `true` |
//! | `ROUTEKIT_HANDLE_METHOD_NOT_ALLOWED` | `true` |
//!
//! # Example
//!
//! ```ignore
//! use routekit_http::RouterConfig;
//!
//! // ROUTEKIT_REDIRECT_TRAILING_SLASH=false
//! let config = RouterConfig::from_env()?;
//! assert!(!config.redirect_trailing_slash);
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
}

/// How the dispatcher turns lookup misses into responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Answer a miss whose trailing-slash variant matches with a redirect
    /// instead of a 404.
    pub redirect_trailing_slash: bool,
    /// Answer a miss that matches under another method with a 405.
    pub handle_method_not_allowed: bool,
}

impl RouterConfig {
    /// Prefix of the environment variables read by [`from_env`](Self::from_env).
    pub const ENV_PREFIX: &'static str = "ROUTEKIT_";

    /// Load configuration from `ROUTEKIT_*` environment variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        envy::prefixed(Self::ENV_PREFIX)
            .from_env::<Self>()
            .map_err(ConfigError::from)
    }

    /// Load configuration from explicit `(name, value)` pairs, named as the
    /// environment variables would be.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::ENV_PREFIX)
            .from_iter::<_, Self>(vars)
            .map_err(ConfigError::from)
    }

    /// Set whether trailing-slash misses are redirected.
    pub fn redirect_trailing_slash(mut self, enabled: bool) -> Self {
        self.redirect_trailing_slash = enabled;
        self
    }

    /// Set whether method mismatches produce 405 instead of 404.
    pub fn handle_method_not_allowed(mut self, enabled: bool) -> Self {
        self.handle_method_not_allowed = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            redirect_trailing_slash: true,
            handle_method_not_allowed: true,
        }
    }
}
