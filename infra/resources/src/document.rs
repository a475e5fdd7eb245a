use crate::error::DocumentError;
use crate::store::ResourceStore;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads `key` from `store` and decodes it as JSON into `T`.
///
/// # Errors
/// * [`DocumentError::NotFound`] when the key has no backing bytes.
/// * [`DocumentError::Unreadable`] for any other store failure.
/// * [`DocumentError::Malformed`] when the bytes do not match the schema of `T`.
pub async fn load_document<T, S>(store: &S, key: &str) -> Result<T, DocumentError>
where
    T: DeserializeOwned,
    S: ResourceStore + ?Sized,
{
    let bytes = store.read(key).await?;

    let document = serde_json::from_slice(&bytes).map_err(|source| DocumentError::Malformed {
        key: key.to_owned().into(),
        source,
        context: None,
    })?;

    debug!(key, bytes = bytes.len(), "Document decoded");
    Ok(document)
}
