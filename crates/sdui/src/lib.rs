//! Facade crate for the SDUI content slices and shared modules.
//! Re-exports domain/kernel primitives, aggregates slice initialization and
//! composes the slices into the public content operations.
//!
//! ## Usage
//! - Add `sdui` with the `server` feature for the HTTP routes.
//! - Call [`init`] once at startup and register the returned slices in the
//!   `ApiState`; handlers reach them through [`content::ContentService`].

pub mod content;
#[cfg(feature = "server")]
pub mod server;

pub use sdui_domain as domain;
pub use sdui_kernel as kernel;
pub use sdui_resources as resources;

use sdui_domain::config::ApiConfig;
use sdui_domain::registry::InitializedSlice;
use sdui_kernel::language::Languages;
use sdui_resources::ResourceStore;
use std::sync::Arc;

/// Content slices.
pub mod features {
    pub use sdui_catalog as catalog;
    pub use sdui_localization as localization;
}

/// Initialize every content slice against `store`.
///
/// Slice initialization never fails: a missing catalog degrades to an empty one.
pub async fn init(config: &ApiConfig, store: Arc<dyn ResourceStore>, languages: &Languages) -> Vec<InitializedSlice> {
    vec![
        features::catalog::init(config, store.clone(), languages.clone()).await,
        features::localization::init(config, store, languages.clone()),
    ]
}
