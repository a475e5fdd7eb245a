use sdui_kernel::model::{PluginContainer, PluginNode};
use sdui_resources::{ResourceStore, load_document};
use std::sync::Arc;
use tracing::{error, info};

/// The default plugin catalog, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    plugins: Arc<[Option<PluginNode>]>,
}

impl FeatureCatalog {
    /// Loads the catalog document at `key`.
    ///
    /// Failure is not fatal: the catalog comes up empty and the error is logged,
    /// so every lookup reports "not found" until the process restarts.
    pub async fn load<S: ResourceStore + ?Sized>(store: &S, key: &str) -> Self {
        match load_document::<PluginContainer, _>(store, key).await {
            Ok(container) => {
                let catalog = Self::from_children(container.children);
                info!(key, plugins = catalog.len(), "Feature catalog loaded");
                catalog
            },
            Err(e) => {
                error!(key, error = %e, "Feature catalog unavailable, serving an empty catalog");
                Self::default()
            },
        }
    }

    /// Catalog entries as they appear in the document, `null` holes included.
    #[must_use]
    pub fn from_children(plugins: Vec<Option<PluginNode>>) -> Self {
        Self { plugins: plugins.into() }
    }

    #[must_use]
    pub fn all(&self) -> &[Option<PluginNode>] {
        &self.plugins
    }

    /// Plugins whose `feature` is one of `features`, in catalog order.
    ///
    /// `null` entries have no feature and never match.
    #[must_use]
    pub fn by_feature<F: AsRef<str>>(&self, features: &[F]) -> Vec<PluginNode> {
        if features.is_empty() {
            return Vec::new();
        }

        self.plugins
            .iter()
            .flatten()
            .filter(|plugin| {
                plugin
                    .feature
                    .as_deref()
                    .is_some_and(|feature| features.iter().any(|wanted| wanted.as_ref() == feature))
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugin(feature: Option<&str>, kind: &str) -> Option<PluginNode> {
        Some(PluginNode {
            kind: Some(kind.to_owned()),
            feature: feature.map(str::to_owned),
            ..PluginNode::default()
        })
    }

    fn catalog() -> FeatureCatalog {
        FeatureCatalog::from_children(vec![
            plugin(Some("black-card"), "a"),
            None,
            plugin(Some("points"), "b"),
            plugin(None, "c"),
            plugin(Some("black-card"), "d"),
        ])
    }

    fn kinds(plugins: &[PluginNode]) -> Vec<&str> {
        plugins.iter().filter_map(|p| p.kind.as_deref()).collect()
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let out = catalog().by_feature(&["points", "black-card"]);
        assert_eq!(kinds(&out), vec!["a", "b", "d"]);
    }

    #[test]
    fn duplicates_come_only_from_the_catalog() {
        let out = catalog().by_feature(&["points", "points"]);
        assert_eq!(kinds(&out), vec!["b"]);
    }

    #[test]
    fn null_entries_stay_in_the_catalog_but_never_match() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.all()[1].is_none());
        assert_eq!(kinds(&catalog.by_feature(&["black-card", "points"])), vec!["a", "b", "d"]);
    }

    #[test]
    fn empty_filter_or_catalog_yields_nothing() {
        assert!(catalog().by_feature::<&str>(&[]).is_empty());
        assert!(FeatureCatalog::default().by_feature(&["black-card"]).is_empty());
        assert!(catalog().by_feature(&["unknown"]).is_empty());
    }
}
