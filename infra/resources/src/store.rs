use crate::error::ResourceError;
use async_trait::async_trait;
use std::fmt::Debug;

/// A read-only key → bytes lookup.
///
/// Keys are `/`-separated relative paths such as `i18n/black/en-US.json`.
/// Implementations only distinguish "no such key" ([`ResourceError::NotFound`])
/// from every other failure ([`ResourceError::Read`]).
#[async_trait]
pub trait ResourceStore: Debug + Send + Sync {
    /// Reads the full contents stored under `key`.
    ///
    /// # Errors
    /// [`ResourceError::NotFound`] when nothing is stored under `key`,
    /// [`ResourceError::Read`] for any other failure.
    async fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError>;
}
