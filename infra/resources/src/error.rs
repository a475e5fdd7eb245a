use sdui_kernel::error::format_context;
use std::borrow::Cow;

/// Failure shapes of a raw resource lookup.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The key has no backing bytes.
    #[error("Resource not found{}: {key}", format_context(.context))]
    NotFound { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The bytes exist (or the key is unusable) but could not be read.
    #[error("Resource read failure{}: {key}: {source}", format_context(.context))]
    Read { key: Cow<'static, str>, source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Failure shapes of a decoded JSON document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document not found{}: {key}", format_context(.context))]
    NotFound { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Document unreadable{}: {source}", format_context(.context))]
    Unreadable { source: ResourceError, context: Option<Cow<'static, str>> },

    #[error("Malformed document{}: {key}: {source}", format_context(.context))]
    Malformed { key: Cow<'static, str>, source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl ResourceError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl DocumentError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ResourceError> for DocumentError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { key, context } => Self::NotFound { key, context },
            other => Self::Unreadable { source: other, context: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_when_present() {
        let err = ResourceError::NotFound {
            key: "i18n/black/en-US.json".into(),
            context: Some("dictionary".into()),
        };
        assert_eq!(err.to_string(), "Resource not found (dictionary): i18n/black/en-US.json");

        let bare = ResourceError::NotFound { key: "a.json".into(), context: None };
        assert_eq!(bare.to_string(), "Resource not found: a.json");
    }

    #[test]
    fn not_found_survives_document_conversion() {
        let doc: DocumentError =
            ResourceError::NotFound { key: "a.json".into(), context: None }.into();
        assert!(doc.is_not_found());

        let doc: DocumentError = ResourceError::Read {
            key: "a.json".into(),
            source: std::io::Error::other("disk"),
            context: None,
        }
        .into();
        assert!(matches!(doc, DocumentError::Unreadable { .. }));
    }
}
