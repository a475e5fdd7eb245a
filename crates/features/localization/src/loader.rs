use crate::dictionary::Dictionary;
use moka::future::Cache;
use sdui_domain::constants::{DEFAULT_CARD_TYPE, DICTIONARY_PREFIX};
use sdui_kernel::language::{Fallback, LanguageTag, Languages};
use sdui_resources::{DocumentError, ResourceStore, load_document};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

type CacheKey = (Arc<str>, LanguageTag);

/// Loads translation dictionaries and keeps them for the process lifetime.
///
/// Each (card type, language) pair is resolved at most once: concurrent first
/// requests for the same pair share a single load, and whatever that load
/// produced (including an empty dictionary) is what every later caller sees.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    store: Arc<dyn ResourceStore>,
    languages: Languages,
    default_card_type: Arc<str>,
    cache: Cache<CacheKey, Dictionary>,
}

impl DictionaryLoader {
    pub fn new(store: Arc<dyn ResourceStore>, languages: Languages) -> Self {
        Self::with_capacity(store, languages, 1024)
    }

    pub fn with_capacity(store: Arc<dyn ResourceStore>, languages: Languages, capacity: u64) -> Self {
        Self {
            store,
            languages,
            default_card_type: DEFAULT_CARD_TYPE.into(),
            cache: Cache::builder().name("dictionaries").max_capacity(capacity).build(),
        }
    }

    /// Card type used when the caller passes a blank one.
    #[must_use]
    pub fn with_default_card_type(mut self, card_type: impl AsRef<str>) -> Self {
        let card_type = card_type.as_ref().trim().to_lowercase();
        if !card_type.is_empty() {
            self.default_card_type = card_type.into();
        }
        self
    }

    /// Trims and lowercases `card_type`; blank input becomes the default card type.
    #[must_use]
    pub fn card_type(&self, card_type: &str) -> Arc<str> {
        match card_type.trim() {
            "" => self.default_card_type.clone(),
            raw => raw.to_lowercase().into(),
        }
    }

    /// Dictionary for a raw language string; the language is normalized first.
    pub async fn get(&self, card_type: &str, language: Option<&str>) -> Dictionary {
        let language = self.languages.normalize(language);
        self.get_tag(card_type, &language).await
    }

    /// Dictionary for an already normalized language.
    ///
    /// Never fails: a dictionary that is missing, unreadable, malformed or empty
    /// in both the requested and the default language resolves to an empty one.
    pub async fn get_tag(&self, card_type: &str, language: &LanguageTag) -> Dictionary {
        let card_type = self.card_type(card_type);
        let key = (card_type.clone(), language.clone());

        self.cache.get_with(key, self.load(card_type, language.clone())).await
    }

    /// Number of cached (card type, language) pairs, after pending cache
    /// maintenance has run.
    pub async fn cached(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    async fn load(&self, card_type: Arc<str>, language: LanguageTag) -> Dictionary {
        let chain = self.languages.fallback_chain(&language);
        let outcome = chain
            .first_some(|tag| {
                let card_type = card_type.clone();
                async move { self.load_one(&card_type, &tag).await }
            })
            .await;

        match outcome {
            Fallback::Found { value, language: used, fallback } => {
                if fallback {
                    info!(card_type = %card_type, requested = %language, used = %used, "Dictionary falls back to default language");
                }
                debug!(card_type = %card_type, language = %language, entries = value.len(), "Dictionary cached");
                value
            },
            Fallback::Exhausted => {
                warn!(card_type = %card_type, language = %language, "No dictionary available, translation keys pass through");
                Dictionary::default()
            },
        }
    }

    async fn load_one(&self, card_type: &str, language: &LanguageTag) -> Option<Dictionary> {
        let key = dictionary_key(card_type, language);

        match load_document::<Dictionary, _>(self.store.as_ref(), &key).await {
            Ok(dictionary) if dictionary.is_empty() => {
                warn!(key, "Dictionary is empty");
                None
            },
            Ok(dictionary) => Some(dictionary),
            Err(DocumentError::NotFound { .. }) => {
                warn!(key, "Dictionary not found");
                None
            },
            Err(e) => {
                error!(key, error = %e, "Dictionary could not be loaded");
                None
            },
        }
    }
}

/// Store key of a dictionary: `i18n/<card type>/<language>.json`.
#[must_use]
pub fn dictionary_key(card_type: &str, language: &LanguageTag) -> String {
    format!("{DICTIONARY_PREFIX}/{card_type}/{language}.json")
}
