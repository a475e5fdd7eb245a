use super::LanguageTag;
use std::future::Future;

/// Ordered language attempts for one load, ending in an implicit "nothing found".
///
/// The chain is `[requested, default]`, collapsed to a single attempt when the
/// requested tag already is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    attempts: Vec<LanguageTag>,
}

/// Outcome of walking a [`FallbackChain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback<T> {
    /// An attempt produced a value. `fallback` is true when it was not the first attempt.
    Found { value: T, language: LanguageTag, fallback: bool },
    /// Every attempt came back empty.
    Exhausted,
}

impl FallbackChain {
    pub(super) fn new(requested: LanguageTag, default: &LanguageTag) -> Self {
        let mut attempts = vec![requested];
        if attempts[0] != *default {
            attempts.push(default.clone());
        }
        Self { attempts }
    }

    #[must_use]
    pub fn attempts(&self) -> &[LanguageTag] {
        &self.attempts
    }

    /// Runs `attempt` for each language in order and stops at the first `Some`.
    pub async fn first_some<T, F, Fut>(&self, mut attempt: F) -> Fallback<T>
    where
        F: FnMut(LanguageTag) -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        for (index, language) in self.attempts.iter().enumerate() {
            if let Some(value) = attempt(language.clone()).await {
                return Fallback::Found { value, language: language.clone(), fallback: index > 0 };
            }
        }
        Fallback::Exhausted
    }
}

impl<T> Fallback<T> {
    /// The found value, or `empty` for an exhausted chain.
    pub fn unwrap_or(self, empty: T) -> T {
        match self {
            Self::Found { value, .. } => value,
            Self::Exhausted => empty,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl<T: Default> Fallback<T> {
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or(T::default())
    }
}
