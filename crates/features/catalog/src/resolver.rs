use sdui_kernel::language::{Fallback, LanguageTag, Languages};
use sdui_kernel::model::{PluginContainer, PluginNode};
use sdui_resources::{DocumentError, ResourceStore, load_document};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Loads the home document of a card profile with language fallback.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    store: Arc<dyn ResourceStore>,
    languages: Languages,
    prefix: Arc<str>,
}

impl ProfileResolver {
    pub fn new(store: Arc<dyn ResourceStore>, languages: Languages, prefix: &str) -> Self {
        Self { store, languages, prefix: prefix.trim_matches('/').into() }
    }

    #[must_use]
    pub fn key(&self, profile: &str, language: &LanguageTag) -> String {
        profile_key(&self.prefix, profile, language)
    }

    /// Plugins of `profile` in `language`, else in the default language, else none.
    ///
    /// A document that exists and decodes is returned as-is, even without plugins,
    /// and `null` entries keep their position. Only missing, unreadable or
    /// malformed documents move on to the next language. Profiles that are not a
    /// single path segment never reach the store.
    pub async fn load_by_profile(&self, profile: &str, language: &LanguageTag) -> Vec<Option<PluginNode>> {
        if !is_valid_profile(profile) {
            warn!(profile, "Rejecting profile that is not a single path segment");
            return Vec::new();
        }

        let chain = self.languages.fallback_chain(language);
        let outcome = chain.first_some(|tag| async move { self.load_one(profile, &tag).await }).await;

        match outcome {
            Fallback::Found { value, language: used, fallback } => {
                if fallback {
                    info!(profile, requested = %language, used = %used, "Profile content falls back to default language");
                }
                value
            },
            Fallback::Exhausted => {
                warn!(profile, language = %language, "No content available for profile");
                Vec::new()
            },
        }
    }

    async fn load_one(&self, profile: &str, language: &LanguageTag) -> Option<Vec<Option<PluginNode>>> {
        let key = self.key(profile, language);

        match load_document::<PluginContainer, _>(self.store.as_ref(), &key).await {
            Ok(container) => Some(container.children),
            Err(DocumentError::NotFound { .. }) => {
                warn!(key, "Profile document not found");
                None
            },
            Err(e) => {
                error!(key, error = %e, "Profile document could not be loaded");
                None
            },
        }
    }
}

/// Store key of a profile home document: `<prefix>/<profile>/home/<language>.json`.
#[must_use]
pub fn profile_key(prefix: &str, profile: &str, language: &LanguageTag) -> String {
    format!("{prefix}/{}/home/{language}.json", profile.to_lowercase())
}

/// A profile names exactly one directory under the prefix.
#[must_use]
fn is_valid_profile(profile: &str) -> bool {
    !profile.trim().is_empty() && !profile.contains(['/', '\\']) && !profile.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_must_be_a_single_segment() {
        assert!(is_valid_profile("black"));
        assert!(is_valid_profile("Black-Infinite"));
        assert!(!is_valid_profile(""));
        assert!(!is_valid_profile("  "));
        assert!(!is_valid_profile("../../sdui"));
        assert!(!is_valid_profile(".."));
        assert!(!is_valid_profile("black/home"));
        assert!(!is_valid_profile("..\\sdui"));
    }
}
