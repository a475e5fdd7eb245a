//! Pure tree translation.
//!
//! Translation rebuilds every node; the input is never touched. Only
//! [`Benefit::text`] values starting with the `key:` marker are rewritten, and
//! only when the dictionary knows the key.

use crate::dictionary::Dictionary;
use sdui_domain::constants::TRANSLATION_KEY_PREFIX;
use sdui_kernel::model::{Benefit, BenefitGroup, PluginNode};

/// Values that can produce a localized copy of themselves.
pub trait Localize {
    #[must_use]
    fn localize(&self, dictionary: &Dictionary) -> Self;
}

/// Resolves a single text value against `dictionary`.
///
/// Returns the original text for plain strings and for unknown keys.
#[must_use]
pub fn translate_text(text: &str, dictionary: &Dictionary) -> String {
    text.strip_prefix(TRANSLATION_KEY_PREFIX)
        .and_then(|key| dictionary.get(key))
        .unwrap_or(text)
        .to_owned()
}

impl Localize for Benefit {
    fn localize(&self, dictionary: &Dictionary) -> Self {
        Self {
            text: self.text.as_deref().map(|text| translate_text(text, dictionary)),
            icon: self.icon.clone(),
        }
    }
}

impl Localize for BenefitGroup {
    fn localize(&self, dictionary: &Dictionary) -> Self {
        Self {
            profile: self.profile.clone(),
            title: self.title.clone(),
            benefits: self.benefits.localize(dictionary),
        }
    }
}

impl Localize for PluginNode {
    fn localize(&self, dictionary: &Dictionary) -> Self {
        Self {
            kind: self.kind.clone(),
            feature: self.feature.clone(),
            title: self.title.clone(),
            modifier: self.modifier.clone(),
            style: self.style.clone(),
            benefit_groups: self.benefit_groups.localize(dictionary),
            points: self.points.clone(),
            children: self.children.localize(dictionary),
        }
    }
}

impl<T: Localize> Localize for Option<T> {
    fn localize(&self, dictionary: &Dictionary) -> Self {
        self.as_ref().map(|value| value.localize(dictionary))
    }
}

impl<T: Localize> Localize for Vec<T> {
    fn localize(&self, dictionary: &Dictionary) -> Self {
        self.iter().map(|value| value.localize(dictionary)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        [("vip_lounge", "Unlimited lounge access")].into_iter().collect()
    }

    #[test]
    fn known_key_is_replaced() {
        assert_eq!(translate_text("key:vip_lounge", &dictionary()), "Unlimited lounge access");
    }

    #[test]
    fn unknown_key_and_plain_text_pass_through() {
        let dict = dictionary();
        assert_eq!(translate_text("key:missing", &dict), "key:missing");
        assert_eq!(translate_text("vip_lounge", &dict), "vip_lounge");
        assert_eq!(translate_text("KEY:vip_lounge", &dict), "KEY:vip_lounge");
        assert_eq!(translate_text("key:", &dict), "key:");
    }

    #[test]
    fn icon_and_null_entries_are_untouched() {
        let group = BenefitGroup {
            profile: Some("black".to_owned()),
            title: None,
            benefits: vec![
                None,
                Some(Benefit {
                    text: Some("key:vip_lounge".to_owned()),
                    icon: Some("key:vip_lounge".to_owned()),
                }),
            ],
        };

        let out = group.localize(&dictionary());
        assert!(out.benefits[0].is_none());
        let benefit = out.benefits[1].as_ref().expect("benefit kept");
        assert_eq!(benefit.text.as_deref(), Some("Unlimited lounge access"));
        assert_eq!(benefit.icon.as_deref(), Some("key:vip_lounge"));
        assert_eq!(group.benefits[1].as_ref().and_then(|b| b.text.as_deref()), Some("key:vip_lounge"));
    }
}
