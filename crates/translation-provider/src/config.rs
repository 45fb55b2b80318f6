use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bag::TranslatorBag;
use crate::dsn::Dsn;
use crate::provider::{ProviderError, TranslationProvider};

/// Errors that can occur while loading provider configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Locale translations are authored in.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

/// A single configured provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderEntry {
    pub name: String,
    pub dsn: String,
    /// Domains to pull. Advisory: providers may return more.
    #[serde(default)]
    pub domains: Vec<String>,
    /// Locales to pull. Advisory, like `domains`.
    #[serde(default)]
    pub locales: Vec<String>,
}

impl ProviderEntry {
    pub fn dsn(&self) -> Result<Dsn, ProviderError> {
        Dsn::parse(&self.dsn)
    }

    /// Pull this entry's domains and locales from `provider`.
    pub async fn read_from(
        &self,
        provider: &dyn TranslationProvider,
    ) -> Result<TranslatorBag, ProviderError> {
        provider.read(&self.domains, &self.locales).await
    }
}

impl ProvidersConfig {
    pub fn provider(&self, name: &str) -> Option<&ProviderEntry> {
        self.providers.iter().find(|p| p.name == name)
    }
}

fn default_locale() -> String {
    "en".into()
}

/// Config file path: `~/.config/translation-provider/providers.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("translation-provider").join("providers.toml"))
}

/// Load config from a TOML file.
pub fn load_config(path: &Path) -> Result<ProvidersConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}
