use crate::error::format_context;
use config::{Config, Environment, File};
use sdui_domain::config::ApiConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `SDUI__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "SDUI";

/// Errors raised while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid config{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Loads `T` from a config file overlaid with `SDUI__*` environment variables.
///
/// The file defaults to `server` (any extension `config` understands, usually
/// `server.toml`) and is optional: every section has defaults, so a bare
/// environment is enough to boot. Nested keys use a double underscore, so
/// `SDUI__LANGUAGE__DEFAULT=en-US` maps to `language.default`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when a source is malformed or its content
/// does not match `T`.
///
/// # Example
/// ```rust
/// use sdui_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads and validates the server configuration.
///
/// # Errors
/// Fails on malformed sources (see [`load_config`]) and on values that would
/// leave the server unable to answer requests.
pub fn load_api_config(path: Option<impl AsRef<Path>>) -> Result<ApiConfig, ConfigError> {
    let config: ApiConfig = load_config(path)?;
    validate(&config)?;
    Ok(config)
}

/// Rejects settings that deserialize fine but cannot work.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] naming the offending key.
pub fn validate(config: &ApiConfig) -> Result<(), ConfigError> {
    let invalid = |message: &'static str| ConfigError::Invalid { message: message.into(), context: None };

    if config.server.port == 0 {
        return Err(invalid("server.port must not be 0"));
    }
    if config.resources.root.as_os_str().is_empty() {
        return Err(invalid("resources.root must not be empty"));
    }
    if config.language.default.trim().is_empty() {
        return Err(invalid("language.default must not be empty"));
    }
    if config.catalog.path.trim().is_empty() {
        return Err(invalid("catalog.path must not be empty"));
    }
    if config.runtime.worker_threads == Some(0) {
        return Err(invalid("runtime.worker_threads must be at least 1"));
    }
    if let Some(ssl) = &config.server.ssl
        && (ssl.cert.as_os_str().is_empty() || ssl.key.as_os_str().is_empty())
    {
        return Err(invalid("server.ssl requires both cert and key"));
    }

    Ok(())
}
