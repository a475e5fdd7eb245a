//! Catalog feature slice: per-profile plugin trees and the default feature catalog.

mod features;
mod resolver;

pub use features::FeatureCatalog;
pub use resolver::{ProfileResolver, profile_key};

use sdui_domain::config::ApiConfig;
use sdui_domain::registry::{FeatureSlice, InitializedSlice};
use sdui_kernel::language::Languages;
use sdui_resources::ResourceStore;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct CatalogInner {
    pub profiles: ProfileResolver,
    pub features: FeatureCatalog,
    /// Card type whose dictionary translates catalog content.
    pub card_type: String,
}

/// Catalog feature state.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

impl Catalog {
    #[must_use]
    pub fn new(profiles: ProfileResolver, features: FeatureCatalog, card_type: impl Into<String>) -> Self {
        Self { inner: Arc::new(CatalogInner { profiles, features, card_type: card_type.into() }) }
    }
}

impl Deref for Catalog {
    type Target = CatalogInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Catalog {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the catalog slice: builds the profile resolver and loads the
/// feature catalog from `config.catalog.path`.
pub async fn init(config: &ApiConfig, store: Arc<dyn ResourceStore>, languages: Languages) -> InitializedSlice {
    let features = FeatureCatalog::load(store.as_ref(), &config.catalog.path).await;
    let profiles = ProfileResolver::new(store, languages, &config.catalog.profile_prefix);

    info!(plugins = features.len(), "Catalog slice initialized");

    InitializedSlice::new(Catalog::new(profiles, features, config.catalog.card_type.clone()))
}
