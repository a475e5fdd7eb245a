//! Outward content operations: resolve, filter, translate.

use sdui_catalog::Catalog;
use sdui_kernel::error::format_context;
use sdui_kernel::language::{LanguageTag, Languages};
use sdui_kernel::model::PluginNode;
use sdui_localization::Localization;
use std::borrow::Cow;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[cfg(feature = "server")]
    #[error("Content state error{}: {source}", format_context(.context))]
    State {
        source: sdui_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },
}

#[cfg(feature = "server")]
impl From<sdui_kernel::server::ApiStateError> for ContentError {
    fn from(source: sdui_kernel::server::ApiStateError) -> Self {
        Self::State { source, context: None }
    }
}

impl ContentError {
    fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Localized plugins together with the language they were resolved for.
///
/// `None` entries are `null`s of the source document, kept in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub plugins: Vec<Option<PluginNode>>,
    pub language: LanguageTag,
}

/// Composes the catalog and localization slices into the public operations.
///
/// Every operation returns a non-empty list or [`ContentError::NotFound`];
/// missing documents and dictionaries never surface as any other error.
#[derive(Debug, Clone)]
pub struct ContentService {
    catalog: Catalog,
    localization: Localization,
    languages: Languages,
}

impl ContentService {
    #[must_use]
    pub const fn new(catalog: Catalog, localization: Localization, languages: Languages) -> Self {
        Self { catalog, localization, languages }
    }

    /// Builds the service from the slices registered in `state`.
    ///
    /// # Errors
    /// [`ContentError::State`] when a slice is not registered.
    #[cfg(feature = "server")]
    pub fn from_state(state: &sdui_kernel::server::ApiState) -> Result<Self, ContentError> {
        Ok(Self::new(
            state.try_get_slice::<Catalog>()?.clone(),
            state.try_get_slice::<Localization>()?.clone(),
            state.languages.clone(),
        ))
    }

    /// Benefits of a card profile, translated with the profile's own dictionary.
    ///
    /// The language is negotiated from an `Accept-Language` header value.
    ///
    /// # Errors
    /// [`ContentError::NotFound`] when neither the requested nor the default
    /// language yields any plugin.
    pub async fn resolve_by_profile(
        &self,
        profile: &str,
        accept_language: Option<&str>,
    ) -> Result<Resolved, ContentError> {
        let language = self.languages.negotiate(accept_language);
        let plugins = self.catalog.profiles.load_by_profile(profile, &language).await;
        let plugins = self.localization.translate(&plugins, profile, &language).await;

        debug!(profile, language = %language, plugins = plugins.len(), "Resolved profile content");
        non_empty(plugins, language, || format!("No benefits found for profile: {profile}"))
    }

    /// Catalog plugins whose feature is in `features`, in catalog order.
    ///
    /// # Errors
    /// [`ContentError::NotFound`] when nothing matches.
    pub async fn resolve_by_feature<F: AsRef<str>>(
        &self,
        features: &[F],
        language: Option<&str>,
    ) -> Result<Resolved, ContentError> {
        let language = self.languages.normalize(language);
        let plugins: Vec<_> = self.catalog.features.by_feature(features).into_iter().map(Some).collect();
        let plugins = self.localization.translate(&plugins, &self.catalog.card_type, &language).await;

        non_empty(plugins, language, || "No plugins found for the requested features".to_owned())
    }

    /// The whole catalog.
    ///
    /// # Errors
    /// [`ContentError::NotFound`] when the catalog is empty.
    pub async fn resolve_all(&self, language: Option<&str>) -> Result<Resolved, ContentError> {
        let language = self.languages.normalize(language);
        let plugins =
            self.localization.translate(self.catalog.features.all(), &self.catalog.card_type, &language).await;

        non_empty(plugins, language, || "Plugin catalog is empty".to_owned())
    }
}

fn non_empty(
    plugins: Vec<Option<PluginNode>>,
    language: LanguageTag,
    message: impl FnOnce() -> String,
) -> Result<Resolved, ContentError> {
    if plugins.is_empty() {
        return Err(ContentError::not_found(message()));
    }
    Ok(Resolved { plugins, language })
}
