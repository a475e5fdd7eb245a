use crate::constants::{
    CATALOG_PATH, DEFAULT_CARD_TYPE, DEFAULT_LANGUAGE, PROFILE_PREFIX, SUPPORTED_LANGUAGES,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
    pub language: LanguageConfig,
    pub catalog: CatalogConfig,
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
    pub runtime: RuntimeConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Where documents and dictionaries are read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub root: PathBuf,
}

/// Supported languages and how loose tags map onto them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub default: String,
    pub supported: Vec<String>,
    /// Extra short forms, e.g. `br = "pt-BR"`. Keys are matched case-insensitively.
    pub aliases: BTreeMap<String, String>,
}

/// Feature catalog and per-profile document locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: String,
    pub profile_prefix: String,
    /// Card type used to translate catalog content.
    pub card_type: String,
}

/// Dictionary cache sizing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    pub cache_capacity: u64,
    pub default_card_type: String,
}

/// Logging sinks and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub json: bool,
    pub dir: Option<PathBuf>,
    pub max_files: usize,
}

/// Tokio runtime tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub worker_threads: Option<usize>,
    pub stack_size: usize,
    pub thread_name: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("resources") }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_LANGUAGE.to_owned(),
            supported: SUPPORTED_LANGUAGES.iter().map(|&tag| tag.to_owned()).collect(),
            aliases: BTreeMap::new(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: CATALOG_PATH.to_owned(),
            profile_prefix: PROFILE_PREFIX.to_owned(),
            card_type: DEFAULT_CARD_TYPE.to_owned(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self { cache_capacity: 1024, default_card_type: DEFAULT_CARD_TYPE.to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, json: false, dir: None, max_files: 10 }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { worker_threads: None, stack_size: 3 * 1024 * 1024, thread_name: "sdui-worker".to_owned() }
    }
}
