use sdui_domain::config::{
    ApiConfig, CatalogConfig, LanguageConfig, LocalizationConfig, ServerConfig,
};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let language = LanguageConfig::default();
    assert_eq!(language.default, "pt-BR");
    assert_eq!(language.supported, vec!["pt-BR", "en-US", "es-ES"]);
    assert!(language.aliases.is_empty());

    let catalog = CatalogConfig::default();
    assert_eq!(catalog.path, "sdui/plugins.json");
    assert_eq!(catalog.profile_prefix, "s3/exclusive-area");
    assert_eq!(catalog.card_type, "black");

    assert_eq!(LocalizationConfig::default().cache_capacity, 1024);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "resources": { "root": "/srv/content" },
        "language": { "default": "en-US", "supported": ["en-US", "fr-FR"], "aliases": { "br": "pt-BR" } },
        "catalog": { "path": "catalog.json" },
        "logging": { "json": true, "dir": "/var/log/sdui" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.resources.root, std::path::PathBuf::from("/srv/content"));
    assert_eq!(cfg.language.default, "en-US");
    assert_eq!(cfg.language.aliases.get("br").map(String::as_str), Some("pt-BR"));
    assert_eq!(cfg.catalog.path, "catalog.json");
    // Unspecified fields inside a present section keep their defaults.
    assert_eq!(cfg.catalog.profile_prefix, "s3/exclusive-area");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.max_files, 10);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.localization.default_card_type, "black");
    assert!(cfg.runtime.worker_threads.is_none());
}
