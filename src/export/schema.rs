//! Export column schema.
//!
//! The schema has two parts: ten fixed columns resolved through the label
//! bundle, and a dynamic tail derived from classification metadata
//! specifications. Dynamic keys are deduplicated across classifications with
//! first-seen order and first-seen descriptions, so the layout is stable for
//! a given registry regardless of how many classifications share a key.

use std::collections::HashMap;

use crate::common::{keys, LabelBundle, Locale, LocalizedText, Result};
use crate::space::ClassificationRegistry;

/// Number of fixed columns preceding the dynamic metadata columns.
pub const FIXED_HEADER_COUNT: usize = 10;

const FIXED_HEADER_KEYS: [&str; FIXED_HEADER_COUNT] = [
    keys::PATH,
    keys::NAME,
    keys::ID,
    keys::VALID_FROM,
    keys::VALID_UNTIL,
    keys::BLUEPRINT_NUMBER,
    keys::CLASSIFICATION,
    keys::CAPACITY,
    keys::AREA,
    keys::OCCUPANTS,
];

/// The resolved column layout of one export call.
///
/// Built once per export and shared across the whole traversal; rows are
/// always aligned to `headers()`.
#[derive(Debug, Clone)]
pub struct ExportSchema {
    fixed_headers: Vec<String>,
    meta_keys: Vec<String>,
    meta_headers: Vec<String>,
    header_by_key: HashMap<String, LocalizedText>,
}

impl ExportSchema {
    /// Build the schema from all registered classifications.
    ///
    /// Fixed headers resolve through `labels` at `locale`; dynamic headers
    /// come from each classification's metadata specification in
    /// registration order, first occurrence of a key winning. A malformed
    /// specification aborts the build with no partial schema.
    pub fn build(
        registry: &ClassificationRegistry,
        labels: &LabelBundle,
        locale: &Locale,
    ) -> Result<Self> {
        let fixed_headers = FIXED_HEADER_KEYS
            .iter()
            .map(|key| labels.get(key, locale))
            .collect();

        let mut meta_keys = Vec::new();
        let mut meta_headers = Vec::new();
        let mut header_by_key = HashMap::new();
        for classification in registry.all() {
            for field in classification.metadata_fields()? {
                if !header_by_key.contains_key(&field.key) {
                    meta_headers.push(field.description.content(locale).to_string());
                    header_by_key.insert(field.key.clone(), field.description);
                    meta_keys.push(field.key);
                }
            }
        }

        Ok(ExportSchema {
            fixed_headers,
            meta_keys,
            meta_headers,
            header_by_key,
        })
    }

    /// All column headers, fixed columns first, aligned with row cells.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.column_count());
        headers.extend(self.fixed_headers.iter().cloned());
        headers.extend(self.meta_headers.iter().cloned());
        headers
    }

    /// The deduplicated dynamic metadata keys, in first-seen order.
    pub fn meta_keys(&self) -> &[String] {
        &self.meta_keys
    }

    /// The localized description recorded for a dynamic key.
    pub fn header_for(&self, key: &str) -> Option<&LocalizedText> {
        self.header_by_key.get(key)
    }

    /// Total number of columns.
    pub fn column_count(&self) -> usize {
        FIXED_HEADER_COUNT + self.meta_keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BUILTIN_LABELS;
    use crate::space::Classification;
    use serde_json::json;

    fn classification(name: &str, spec: serde_json::Value) -> Classification {
        Classification::new(LocalizedText::of("en", name)).with_metadata_spec(spec)
    }

    #[test]
    fn test_fixed_headers_order() {
        let registry = ClassificationRegistry::new();
        let schema =
            ExportSchema::build(&registry, &BUILTIN_LABELS, &Locale::default()).unwrap();

        assert_eq!(
            schema.headers(),
            vec![
                "Path",
                "Name",
                "Identification",
                "Valid From",
                "Valid Until",
                "Blueprint Number",
                "Classification",
                "Capacity",
                "Area",
                "Occupants",
            ]
        );
        assert_eq!(schema.column_count(), FIXED_HEADER_COUNT);
        assert!(schema.meta_keys().is_empty());
    }

    #[test]
    fn test_duplicate_keys_collapse_first_seen() {
        let mut registry = ClassificationRegistry::new();
        registry.register(classification(
            "Laboratory",
            json!([
                {"name": "fireRating", "description": {"en": "Fire rating"}},
                {"name": "floorCovering", "description": {"en": "Floor covering"}},
            ]),
        ));
        registry.register(classification(
            "Workshop",
            json!([
                {"name": "fireRating", "description": {"en": "Fire resistance class"}},
                {"name": "powerOutlets", "description": {"en": "Power outlets"}},
            ]),
        ));

        let schema =
            ExportSchema::build(&registry, &BUILTIN_LABELS, &Locale::default()).unwrap();

        assert_eq!(
            schema.meta_keys(),
            &["fireRating", "floorCovering", "powerOutlets"]
        );
        // The first classification's description wins for shared keys.
        assert_eq!(
            schema
                .header_for("fireRating")
                .unwrap()
                .content(&Locale::default()),
            "Fire rating"
        );
        assert_eq!(schema.column_count(), FIXED_HEADER_COUNT + 3);
        assert_eq!(schema.headers().len(), schema.column_count());
        assert_eq!(
            &schema.headers()[FIXED_HEADER_COUNT..],
            &["Fire rating", "Floor covering", "Power outlets"]
        );
    }

    #[test]
    fn test_malformed_spec_aborts_build() {
        let mut registry = ClassificationRegistry::new();
        registry.register(classification(
            "Laboratory",
            json!([{"name": "fireRating", "description": {"en": "Fire rating"}}]),
        ));
        registry.register(classification("Broken", json!([{"name": "orphan"}])));

        let result = ExportSchema::build(&registry, &BUILTIN_LABELS, &Locale::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_dynamic_headers_follow_locale() {
        let mut registry = ClassificationRegistry::new();
        registry.register(classification(
            "Laboratory",
            json!([
                {"name": "fireRating", "description": {"en": "Fire rating", "pt": "Resistência ao fogo"}},
            ]),
        ));

        let schema =
            ExportSchema::build(&registry, &BUILTIN_LABELS, &Locale::new("pt")).unwrap();
        assert_eq!(
            schema.headers()[FIXED_HEADER_COUNT],
            "Resistência ao fogo"
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy for metadata keys drawn from a small alphabet so that
        /// collisions across classifications are common.
        fn key_strategy() -> impl Strategy<Value = String> {
            "[a-e][0-9]"
        }

        fn spec_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec(key_strategy(), 0..6)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_meta_keys_unique_first_seen(specs in prop::collection::vec(spec_strategy(), 0..5)) {
                let mut registry = ClassificationRegistry::new();
                for (ci, keys) in specs.iter().enumerate() {
                    let entries: Vec<_> = keys
                        .iter()
                        .enumerate()
                        .map(|(fi, key)| {
                            serde_json::json!({
                                "name": key,
                                "description": {"en": format!("{ci}.{fi}")},
                            })
                        })
                        .collect();
                    registry.register(
                        Classification::new(LocalizedText::of("en", format!("C{ci}")))
                            .with_metadata_spec(serde_json::Value::Array(entries)),
                    );
                }

                let schema = ExportSchema::build(&registry, &BUILTIN_LABELS, &Locale::default()).unwrap();

                // Expected: flattened declaration order with duplicates dropped,
                // keeping the first-seen description.
                let mut expected_keys: Vec<&String> = Vec::new();
                let mut expected_desc: Vec<String> = Vec::new();
                for (ci, keys) in specs.iter().enumerate() {
                    for (fi, key) in keys.iter().enumerate() {
                        if !expected_keys.contains(&key) {
                            expected_keys.push(key);
                            expected_desc.push(format!("{ci}.{fi}"));
                        }
                    }
                }

                prop_assert_eq!(schema.meta_keys().iter().collect::<Vec<_>>(), expected_keys);
                prop_assert_eq!(&schema.headers()[FIXED_HEADER_COUNT..], expected_desc.as_slice());
                prop_assert_eq!(schema.headers().len(), schema.column_count());
            }
        }
    }
}
