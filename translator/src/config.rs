//! Translator configuration.
//!
//! Configuration is stored at `~/.glossa/config.toml`. The API key may also
//! come from the `GLOSSA_API_KEY` environment variable, which wins over the
//! file.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TranslationError;
use crate::provider::ProviderDef;
use crate::provider::ProviderId;

/// Environment variable consulted before the configured key.
pub const API_KEY_ENV: &str = "GLOSSA_API_KEY";

/// Settings a [`crate::Translator`] needs for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorSettings {
    /// API base, e.g. `https://api.openai.com`.
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl TranslatorSettings {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

/// On-disk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Provider identifier (e.g., "openai", "deepseek").
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Custom API base (for proxies or self-hosted endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Model name (overrides provider default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Target language code used when none is given.
    #[serde(default = "default_target_language")]
    pub default_target_language: String,
}

fn default_provider() -> String {
    ProviderId::default().as_str().to_string()
}

fn default_target_language() -> String {
    "zh-Hans".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            api_url: None,
            model: None,
            default_target_language: default_target_language(),
        }
    }
}

impl TranslatorConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".glossa").join("config.toml"))
    }

    /// Load configuration from the default path, or return default if not found.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<TranslatorConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse translator config: {}, using default", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read translator config: {}, using default", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Cannot determine config file path",
            ));
        };
        self.save_to(&path)
    }

    /// Write to `path`, owner read/write only on unix.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        fs::write(path, &content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            let _ = fs::set_permissions(path, permissions);
        }

        Ok(())
    }

    /// Unknown provider names fall back to the default provider.
    pub fn effective_provider(&self) -> ProviderId {
        self.provider.parse().unwrap_or_default()
    }

    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn effective_api_url(&self, provider: &ProviderDef) -> &str {
        self.api_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(provider.default_api_url)
    }

    pub fn effective_model(&self, provider: &ProviderDef) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(provider.default_model)
    }

    /// Resolve settings, reading the key override from the environment.
    pub fn resolve(&self) -> Result<TranslatorSettings, TranslationError> {
        self.resolve_with_env_key(std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn resolve_with_env_key(
        &self,
        env_key: Option<String>,
    ) -> Result<TranslatorSettings, TranslationError> {
        let provider_id = self.effective_provider();
        let provider = provider_id.definition();

        let api_key = env_key
            .filter(|k| !k.is_empty())
            .or_else(|| self.effective_api_key().map(String::from));
        let api_key = match api_key {
            Some(key) => key,
            None if provider.requires_api_key => {
                return Err(TranslationError::ApiKeyNotFound(provider.name.to_string()));
            }
            None => String::new(),
        };

        let api_url = self.effective_api_url(provider);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(TranslationError::InvalidConfig(format!(
                "api_url must be an http(s) URL, got {api_url:?}"
            )));
        }

        Ok(TranslatorSettings {
            api_url: api_url.to_string(),
            api_key,
            model: self.effective_model(provider).to_string(),
        })
    }
}
