use crate::error::ResourceError;
use crate::security;
use crate::store::ResourceStore;
use async_trait::async_trait;
use private::Sealed;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{info, trace};

/// Filesystem-backed [`ResourceStore`] sandboxed to a single root directory.
///
/// The handle is reference-counted and cheap to clone.
///
/// # Example
///
/// ```rust
/// use sdui_resources::{FsResourceStore, ResourceStore, ResourceError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ResourceError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # std::fs::create_dir_all(tmp.path().join("i18n/black")).unwrap();
///     # std::fs::write(tmp.path().join("i18n/black/en-US.json"), b"{}").unwrap();
///     let store = FsResourceStore::builder().root(tmp.path()).connect().await?;
///     let bytes = store.read("i18n/black/en-US.json").await?;
///     assert_eq!(bytes, b"{}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FsResourceStore {
    root: Arc<Path>,
}

impl FsResourceStore {
    #[must_use = "The store is not usable until you call .connect()"]
    pub fn builder() -> FsResourceStoreBuilder {
        FsResourceStoreBuilder::new()
    }

    /// Canonical root every key is resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `key` to a physical path inside the sandbox.
    ///
    /// # Errors
    /// [`ResourceError::NotFound`] when the file does not exist,
    /// [`ResourceError::Read`] when the key escapes the root.
    pub fn resolve(&self, key: &str) -> Result<PathBuf, ResourceError> {
        security::resolve_key(&self.root, key)
    }
}

#[async_trait]
impl ResourceStore for FsResourceStore {
    async fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError> {
        let resolved = self.resolve(key)?;

        match fs::read(&resolved).await {
            Ok(data) => {
                trace!(key, bytes = data.len(), "Resource read");
                Ok(data)
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound { key: key.to_owned().into(), context: None })
            },
            Err(err) => Err(ResourceError::Read {
                key: key.to_owned().into(),
                source: err,
                context: Some(format!("Read failed: {}", resolved.display()).into()),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Type-state builder for [`FsResourceStore`]; a root is mandatory.
#[derive(Debug, Default)]
pub struct FsResourceStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    create: bool,
}

impl<S: Sealed> FsResourceStoreBuilder<S> {
    /// Creates the root directory on connect when it is missing.
    #[must_use = "Sets whether the root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }
}

impl FsResourceStoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory of the store"]
    pub fn root(self, path: impl Into<PathBuf>) -> FsResourceStoreBuilder<WithRoot> {
        FsResourceStoreBuilder { state: WithRoot(path.into()), create: self.create }
    }
}

impl FsResourceStoreBuilder<WithRoot> {
    /// Resolves the root to its canonical physical path and returns the store.
    ///
    /// # Errors
    /// [`ResourceError::Read`] if the root does not exist (and `create` is off),
    /// cannot be created, or is not a directory.
    pub async fn connect(self) -> Result<FsResourceStore, ResourceError> {
        let root = self.state.0;
        let label = || -> std::borrow::Cow<'static, str> { root.display().to_string().into() };

        if self.create {
            fs::create_dir_all(&root).await.map_err(|source| ResourceError::Read {
                key: label(),
                source,
                context: Some("Failed to create resource root".into()),
            })?;
        }

        let canonical = fs::canonicalize(&root).await.map_err(|source| ResourceError::Read {
            key: label(),
            source,
            context: Some("Failed to resolve resource root".into()),
        })?;

        if !canonical.is_dir() {
            return Err(ResourceError::Read {
                key: label(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                context: Some("Resource root must be a directory".into()),
            });
        }

        info!(root = %canonical.display(), "Resource store ready");
        Ok(FsResourceStore { root: canonical.into() })
    }
}
