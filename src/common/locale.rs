//! Locale handling and localized strings.
//!
//! Spaces carry display text in several languages at once: classification
//! names and classification-defined column descriptions are stored as
//! [`LocalizedText`] and resolved to the caller's [`Locale`] at export time.
//! The ten fixed column headers come from a [`LabelBundle`] keyed by opaque
//! bundle keys, so callers can swap in their own translations.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A language tag such as `"en"` or `"pt"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a language tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into())
    }

    /// Get the language tag.
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en")
    }
}

/// A piece of text with one value per locale.
///
/// Resolution falls back from the exact tag to `"en"` to the first available
/// translation, so `content` always returns something renderable for
/// non-empty texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(flatten)]
    translations: BTreeMap<String, String>,
}

impl LocalizedText {
    /// Create a text with a single translation.
    pub fn of(locale: &str, text: impl Into<String>) -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(locale.to_string(), text.into());
        LocalizedText { translations }
    }

    /// Add a translation, builder style.
    pub fn with(mut self, locale: &str, text: impl Into<String>) -> Self {
        self.translations.insert(locale.to_string(), text.into());
        self
    }

    /// Parse from a JSON object of locale-tag/string pairs.
    ///
    /// Returns `None` when the value is not such an object; a bare JSON
    /// string is accepted as a locale-independent text under `"en"`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(LocalizedText::of("en", s.clone())),
            serde_json::Value::Object(map) => {
                let mut translations = BTreeMap::new();
                for (tag, text) in map {
                    translations.insert(tag.clone(), text.as_str()?.to_string());
                }
                Some(LocalizedText { translations })
            }
            _ => None,
        }
    }

    /// Resolve the text for a locale, falling back to English and then to
    /// any available translation. Empty texts resolve to `""`.
    pub fn content(&self, locale: &Locale) -> &str {
        self.translations
            .get(locale.tag())
            .or_else(|| self.translations.get("en"))
            .or_else(|| self.translations.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether the text has no translations at all.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Bundle keys for the fixed export column headers.
pub mod keys {
    pub const PATH: &str = "export.path";
    pub const NAME: &str = "export.name";
    pub const ID: &str = "export.id";
    pub const VALID_FROM: &str = "export.valid.from";
    pub const VALID_UNTIL: &str = "export.valid.until";
    pub const BLUEPRINT_NUMBER: &str = "export.blueprintNumber";
    pub const CLASSIFICATION: &str = "export.classification";
    pub const CAPACITY: &str = "export.capacity";
    pub const AREA: &str = "export.area";
    pub const OCCUPANTS: &str = "export.occupants";
}

/// A lookup table of localized labels keyed by bundle key.
#[derive(Debug, Clone, Default)]
pub struct LabelBundle {
    entries: HashMap<String, LocalizedText>,
}

impl LabelBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        LabelBundle::default()
    }

    /// Insert a label, builder style.
    pub fn with(mut self, key: &str, text: LocalizedText) -> Self {
        self.entries.insert(key.to_string(), text);
        self
    }

    /// Resolve a label for a locale. Unknown keys resolve to the key itself
    /// so a missing translation is visible in the output instead of blank.
    pub fn get(&self, key: &str, locale: &Locale) -> String {
        match self.entries.get(key) {
            Some(text) => text.content(locale).to_string(),
            None => key.to_string(),
        }
    }
}

/// Built-in English labels for the fixed export columns.
pub static BUILTIN_LABELS: Lazy<LabelBundle> = Lazy::new(|| {
    LabelBundle::new()
        .with(keys::PATH, LocalizedText::of("en", "Path"))
        .with(keys::NAME, LocalizedText::of("en", "Name"))
        .with(keys::ID, LocalizedText::of("en", "Identification"))
        .with(keys::VALID_FROM, LocalizedText::of("en", "Valid From"))
        .with(keys::VALID_UNTIL, LocalizedText::of("en", "Valid Until"))
        .with(
            keys::BLUEPRINT_NUMBER,
            LocalizedText::of("en", "Blueprint Number"),
        )
        .with(
            keys::CLASSIFICATION,
            LocalizedText::of("en", "Classification"),
        )
        .with(keys::CAPACITY, LocalizedText::of("en", "Capacity"))
        .with(keys::AREA, LocalizedText::of("en", "Area"))
        .with(keys::OCCUPANTS, LocalizedText::of("en", "Occupants"))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_fallback_chain() {
        let text = LocalizedText::of("en", "Floor").with("pt", "Piso");
        assert_eq!(text.content(&Locale::new("pt")), "Piso");
        assert_eq!(text.content(&Locale::new("en")), "Floor");
        // Unknown locale falls back to English
        assert_eq!(text.content(&Locale::new("de")), "Floor");

        // No English: falls back to the first available translation
        let text = LocalizedText::of("pt", "Piso");
        assert_eq!(text.content(&Locale::new("de")), "Piso");

        assert_eq!(LocalizedText::default().content(&Locale::default()), "");
    }

    #[test]
    fn test_from_json() {
        let value = serde_json::json!({"en": "Fire rating", "pt": "Resistência ao fogo"});
        let text = LocalizedText::from_json(&value).unwrap();
        assert_eq!(text.content(&Locale::new("pt")), "Resistência ao fogo");

        let bare = serde_json::json!("Fire rating");
        let text = LocalizedText::from_json(&bare).unwrap();
        assert_eq!(text.content(&Locale::default()), "Fire rating");

        assert!(LocalizedText::from_json(&serde_json::json!(42)).is_none());
        assert!(LocalizedText::from_json(&serde_json::json!({"en": 1})).is_none());
    }

    #[test]
    fn test_bundle_lookup() {
        let locale = Locale::default();
        assert_eq!(BUILTIN_LABELS.get(keys::PATH, &locale), "Path");
        assert_eq!(BUILTIN_LABELS.get("export.unknown", &locale), "export.unknown");

        let bundle = LabelBundle::new().with(keys::NAME, LocalizedText::of("pt", "Nome"));
        assert_eq!(bundle.get(keys::NAME, &Locale::new("pt")), "Nome");
    }
}
