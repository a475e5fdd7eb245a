//! Well-known names shared by every slice.

/// Language served when a request names none or an unsupported one.
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Languages with authored content out of the box.
pub const SUPPORTED_LANGUAGES: &[&str] = &["pt-BR", "en-US", "es-ES"];

/// Card type used for dictionary lookups when the caller supplies none.
pub const DEFAULT_CARD_TYPE: &str = "black";

/// Marker that turns a benefit text into a dictionary lookup.
pub const TRANSLATION_KEY_PREFIX: &str = "key:";

/// Prefix of the per-profile home documents.
pub const PROFILE_PREFIX: &str = "s3/exclusive-area";

/// Root of the per-card-type dictionaries.
pub const DICTIONARY_PREFIX: &str = "i18n";

/// Catalog document loaded at startup.
pub const CATALOG_PATH: &str = "sdui/plugins.json";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const CARDS_TAG: &str = "Card Benefits";
pub const SDUI_TAG: &str = "SDUI";
