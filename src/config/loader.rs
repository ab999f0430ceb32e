//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.warpgen.toml` in the working directory
//! 4. `~/.config/warpgen/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::output::amnezia::ObfuscationParams;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub endpoint: EndpointConfig,
    pub amnezia: ObfuscationParams,
}

/// Remote service URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Key-material endpoint.
    pub key_url: String,
    /// Account-issuance endpoint.
    pub register_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key_url: constants::DEFAULT_KEY_URL.to_string(),
            register_url: constants::DEFAULT_REGISTER_URL.to_string(),
        }
    }
}

/// Endpoint selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL of the public candidate list.
    pub list_url: String,
    /// Fixed `host:port` to use instead of fetching the list.
    pub fixed: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            list_url: constants::DEFAULT_ENDPOINT_LIST_URL.to_string(),
            fixed: None,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, working-directory config, then applies
    /// environment variable overrides.
    pub fn load(working_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: working-directory config
        if let Some(dir) = working_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        let default_api = ApiConfig::default();
        if other.api.key_url != default_api.key_url {
            self.api.key_url = other.api.key_url;
        }
        if other.api.register_url != default_api.register_url {
            self.api.register_url = other.api.register_url;
        }

        let default_endpoint = EndpointConfig::default();
        if other.endpoint.list_url != default_endpoint.list_url {
            self.endpoint.list_url = other.endpoint.list_url;
        }
        if other.endpoint.fixed.is_some() {
            self.endpoint.fixed = other.endpoint.fixed;
        }

        let default_amnezia = ObfuscationParams::default();
        let d = toml::to_string(&default_amnezia).unwrap_or_default();
        let o = toml::to_string(&other.amnezia).unwrap_or_default();
        if o != d {
            self.amnezia = other.amnezia;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_KEY_URL) {
            self.api.key_url = val;
        }
        if let Ok(val) = env.var(constants::ENV_API_URL) {
            self.api.register_url = val;
        }
        if let Ok(val) = env.var(constants::ENV_ENDPOINT_URL) {
            self.endpoint.list_url = val;
        }
        if let Ok(val) = env.var(constants::ENV_ENDPOINT) {
            self.endpoint.fixed = Some(val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_shipped_services() {
        let config = Config::default();
        assert_eq!(config.api.key_url, constants::DEFAULT_KEY_URL);
        assert_eq!(config.api.register_url, constants::DEFAULT_REGISTER_URL);
        assert_eq!(config.endpoint.list_url, constants::DEFAULT_ENDPOINT_LIST_URL);
        assert!(config.endpoint.fixed.is_none());
        assert_eq!(config.amnezia.jc, 4);
    }

    #[test]
    fn env_vars_override_defaults() {
        let env = Env::mock([
            (constants::ENV_KEY_URL, "https://example.test/keys"),
            (constants::ENV_ENDPOINT, "10.0.0.1:1234"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);

        assert_eq!(config.api.key_url, "https://example.test/keys");
        assert_eq!(config.endpoint.fixed.as_deref(), Some("10.0.0.1:1234"));
        assert_eq!(
            config.api.register_url,
            constants::DEFAULT_REGISTER_URL,
            "untouched fields keep defaults",
        );
    }

    #[test]
    fn merge_keeps_base_for_default_fields() {
        let mut base = Config::default();
        base.api.key_url = "https://mirror.test/keys".to_string();

        base.merge(Config::default());
        assert_eq!(base.api.key_url, "https://mirror.test/keys");
    }

    #[test]
    fn merge_takes_non_default_fields() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.endpoint.fixed = Some("10.0.0.1:2408".to_string());
        other.amnezia.jc = 120;

        base.merge(other);
        assert_eq!(base.endpoint.fixed.as_deref(), Some("10.0.0.1:2408"));
        assert_eq!(base.amnezia.jc, 120);
    }

    #[test]
    fn parses_partial_toml() {
        let config: Config = toml::from_str(
            "[endpoint]\nfixed = \"188.114.96.1:955\"\n\n[amnezia]\njc = 8\n",
        )
        .unwrap();
        assert_eq!(config.endpoint.fixed.as_deref(), Some("188.114.96.1:955"));
        assert_eq!(config.amnezia.jc, 8);
        assert_eq!(config.api.key_url, constants::DEFAULT_KEY_URL);
    }
}
