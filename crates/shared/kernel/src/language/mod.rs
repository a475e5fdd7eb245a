//! Language normalization.
//!
//! Every inbound language string (query value, path segment, `Accept-Language`
//! header) is mapped onto exactly one supported [`LanguageTag`]. The mapping is
//! total: unknown, empty or missing input yields the default tag, never an error.

mod fallback;

pub use fallback::{Fallback, FallbackChain};

use fxhash::FxHashMap;
use sdui_domain::config::LanguageConfig;
use sdui_domain::constants::DEFAULT_LANGUAGE;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// A canonical, supported language tag such as `pt-BR`.
///
/// Only [`Languages`] hands these out, so holding one proves the tag is
/// part of the configured set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(Arc<str>);

impl LanguageTag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
struct LanguagesInner {
    default: LanguageTag,
    supported: Vec<LanguageTag>,
    /// Lowercased canonical tag → tag.
    exact: FxHashMap<String, LanguageTag>,
    /// Lowercased short form (`en`, configured aliases) → tag.
    short: FxHashMap<String, LanguageTag>,
}

/// The supported language set and its normalization rules.
///
/// Cheap to clone; built once from [`LanguageConfig`] at startup.
#[derive(Debug, Clone)]
pub struct Languages {
    inner: Arc<LanguagesInner>,
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(&LanguageConfig::default())
    }
}

impl Languages {
    /// Builds the normalizer.
    ///
    /// The default language is always part of the supported set, even if the
    /// configuration forgot to list it. Short forms are the primary subtags of
    /// the supported tags (first listed tag wins), plus configured aliases.
    #[must_use]
    pub fn new(config: &LanguageConfig) -> Self {
        let default_raw = match config.default.trim() {
            "" => DEFAULT_LANGUAGE,
            tag => tag,
        };

        let mut supported: Vec<LanguageTag> = Vec::with_capacity(config.supported.len() + 1);
        let mut exact = FxHashMap::default();

        for raw in config.supported.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            let key = raw.to_lowercase();
            if exact.contains_key(&key) {
                continue;
            }
            let tag = LanguageTag(raw.into());
            exact.insert(key, tag.clone());
            supported.push(tag);
        }

        let default = if let Some(tag) = exact.get(&default_raw.to_lowercase()) {
            tag.clone()
        } else {
            warn!(default = default_raw, "Default language is not listed as supported, adding it");
            let tag = LanguageTag(default_raw.into());
            exact.insert(default_raw.to_lowercase(), tag.clone());
            supported.push(tag.clone());
            tag
        };

        let mut short = FxHashMap::default();
        for tag in &supported {
            if let Some(primary) = primary_subtag(tag.as_str()) {
                short.entry(primary).or_insert_with(|| tag.clone());
            }
        }

        for (alias, target) in &config.aliases {
            let alias = alias.trim().to_lowercase();
            match exact.get(&target.trim().to_lowercase()) {
                _ if alias.is_empty() || exact.contains_key(&alias) => {
                    warn!(alias, "Ignoring language alias that shadows a supported tag");
                },
                Some(tag) => {
                    short.insert(alias, tag.clone());
                },
                None => warn!(alias, target = %target, "Ignoring alias to an unsupported language"),
            }
        }

        Self { inner: Arc::new(LanguagesInner { default, supported, exact, short }) }
    }

    #[must_use]
    pub fn default_tag(&self) -> &LanguageTag {
        &self.inner.default
    }

    #[must_use]
    pub fn supported(&self) -> &[LanguageTag] {
        &self.inner.supported
    }

    /// Maps any input onto a supported tag.
    ///
    /// Exact (case-insensitive) matches win, then short forms such as `en`;
    /// everything else, including `None` and blank input, becomes the default.
    #[must_use]
    pub fn normalize(&self, input: Option<&str>) -> LanguageTag {
        input.and_then(|raw| self.lookup(raw)).unwrap_or_else(|| self.inner.default.clone())
    }

    /// Picks the best supported tag from an `Accept-Language` header value.
    ///
    /// Entries are tried by descending quality (ties keep header order); `*`
    /// and `q=0` entries are skipped. Besides exact and short-form matches, a
    /// regional variant falls back to its primary subtag (`en-GB` → `en-US`).
    #[must_use]
    pub fn negotiate(&self, header: Option<&str>) -> LanguageTag {
        let Some(header) = header else {
            return self.inner.default.clone();
        };

        let mut ranges: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                let quality = parts
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (!tag.is_empty() && tag != "*" && quality > 0.0).then_some((tag, quality))
            })
            .collect();
        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges
            .into_iter()
            .find_map(|(tag, _)| {
                self.lookup(tag).or_else(|| {
                    primary_subtag(tag).and_then(|primary| self.inner.short.get(&primary).cloned())
                })
            })
            .unwrap_or_else(|| self.inner.default.clone())
    }

    /// Ordered load attempts for `requested`: the tag itself, then the default.
    #[must_use]
    pub fn fallback_chain(&self, requested: &LanguageTag) -> FallbackChain {
        FallbackChain::new(requested.clone(), &self.inner.default)
    }

    fn lookup(&self, raw: &str) -> Option<LanguageTag> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.inner.exact.get(&key).or_else(|| self.inner.short.get(&key)).cloned()
    }
}

fn primary_subtag(tag: &str) -> Option<String> {
    tag.split(['-', '_']).next().filter(|p| !p.is_empty()).map(str::to_lowercase)
}
