//! Helpers shared by the workspace error enums.
//!
//! Every error variant carries `context: Option<Cow<'static, str>>`; displays
//! render it as `"<what> (<context>): <detail>"` through [`format_context`].

use std::borrow::Cow;

/// Renders an optional error context as ` (context)`, or nothing.
#[must_use]
#[allow(clippy::ref_option)]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_context_renders_nothing() {
        assert_eq!(format_context(&None), "");
    }

    #[test]
    fn present_context_is_parenthesized() {
        assert_eq!(format_context(&Some("i18n/black/en-US.json".into())), " (i18n/black/en-US.json)");
    }
}
