//! Localization feature slice: cached translation dictionaries and plugin tree translation.
//!
//! ```rust
//! use sdui_kernel::language::Languages;
//! use sdui_kernel::model::{Benefit, BenefitGroup, PluginNode};
//! use sdui_localization::Localization;
//! use sdui_resources::MemoryResourceStore;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryResourceStore::new()
//!     .with("i18n/black/en-US.json", br#"{"vip_lounge":"Unlimited lounge access"}"#.to_vec());
//! let languages = Languages::default();
//! let localization = Localization::new(Arc::new(store), languages.clone(), 16);
//!
//! let node = PluginNode {
//!     benefit_groups: vec![Some(BenefitGroup {
//!         benefits: vec![Some(Benefit { text: Some("key:vip_lounge".into()), icon: None })],
//!         ..BenefitGroup::default()
//!     })],
//!     ..PluginNode::default()
//! };
//!
//! let en = languages.normalize(Some("en"));
//! let out = localization.translate(&[node], "black", &en).await;
//! let text = out[0].benefits().next().and_then(|b| b.text.clone());
//! assert_eq!(text.as_deref(), Some("Unlimited lounge access"));
//! # }
//! ```

mod dictionary;
mod loader;
mod translate;

pub use dictionary::Dictionary;
pub use loader::{DictionaryLoader, dictionary_key};
pub use translate::{Localize, translate_text};

use sdui_domain::config::ApiConfig;
use sdui_domain::registry::{FeatureSlice, InitializedSlice};
use sdui_kernel::language::{LanguageTag, Languages};
use sdui_resources::ResourceStore;
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct LocalizationInner {
    pub dictionaries: DictionaryLoader,
}

/// Localization feature state.
#[derive(Debug, Clone)]
pub struct Localization {
    inner: Arc<LocalizationInner>,
}

impl Localization {
    pub fn new(store: Arc<dyn ResourceStore>, languages: Languages, cache_capacity: u64) -> Self {
        let dictionaries = DictionaryLoader::with_capacity(store, languages, cache_capacity);
        Self { inner: Arc::new(LocalizationInner { dictionaries }) }
    }

    /// Translates `nodes` into `language` using the dictionary of `card_type`.
    ///
    /// The dictionary is resolved once per call; an empty input skips it entirely.
    /// Works on plain plugins as well as nullable entries, which stay `None`.
    pub async fn translate<T: Localize + Sync>(
        &self,
        nodes: &[T],
        card_type: &str,
        language: &LanguageTag,
    ) -> Vec<T> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let dictionary = self.dictionaries.get_tag(card_type, language).await;
        nodes.iter().map(|node| node.localize(&dictionary)).collect()
    }
}

impl Deref for Localization {
    type Target = LocalizationInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Localization {
    fn name(&self) -> &'static str {
        "localization"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the localization slice from `config.localization`.
pub fn init(config: &ApiConfig, store: Arc<dyn ResourceStore>, languages: Languages) -> InitializedSlice {
    let dictionaries = DictionaryLoader::with_capacity(store, languages, config.localization.cache_capacity)
        .with_default_card_type(&config.localization.default_card_type);

    info!(capacity = config.localization.cache_capacity, "Localization slice initialized");

    InitializedSlice::new(Localization { inner: Arc::new(LocalizationInner { dictionaries }) })
}
