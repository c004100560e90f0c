//! Entity normalization
//!
//! Raw catalog entries come in three shapes: a bare name string, a record
//! with optional model/texture/variant fields, or garbage. Normalization
//! resolves every shape into a [`CanonicalEntity`] and never fails; the
//! garbage shape degrades to an "unknown" placeholder with a warning.

use serde::Serialize;
use serde_json::Value;

use crate::summary::RunSummary;

/// Fallback name for entities whose entry carries no usable name.
const UNKNOWN_ENTITY: &str = "unknown";
/// Fallback name for variants whose entry carries no usable name.
const UNKNOWN_VARIANT: &str = "unknown_variant";

/// A normalized catalog entity with fully resolved references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalEntity {
    pub name: String,
    pub model: String,
    pub texture: String,
    pub variants: Vec<VariantRecord>,
}

/// A sub-form of an entity. Fields missing on the raw variant inherit
/// the parent entity's resolved values, never the raw catalog defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    pub name: String,
    pub display_name: String,
    pub model: String,
    pub texture: String,
}

/// Normalizes polymorphic raw entries into canonical records.
pub struct EntityResolver {
    summary: RunSummary,
}

impl EntityResolver {
    /// Create a resolver recording into the given tallies.
    pub fn new(summary: RunSummary) -> Self {
        Self { summary }
    }

    /// Normalize one raw entity entry. Total: every input shape maps to
    /// some canonical record.
    pub fn normalize(&self, raw: &Value) -> CanonicalEntity {
        match raw {
            Value::String(name) => CanonicalEntity {
                name: name.clone(),
                model: name.clone(),
                texture: name.clone(),
                variants: Vec::new(),
            },
            Value::Object(fields) => self.normalize_record(fields),
            other => {
                log::warn!("unexpected entity shape, substituting placeholder: {other}");
                self.summary.record_error();
                CanonicalEntity {
                    name: UNKNOWN_ENTITY.to_string(),
                    model: UNKNOWN_ENTITY.to_string(),
                    texture: UNKNOWN_ENTITY.to_string(),
                    variants: Vec::new(),
                }
            }
        }
    }

    fn normalize_record(&self, fields: &serde_json::Map<String, Value>) -> CanonicalEntity {
        let name = str_field(fields, "name").unwrap_or(UNKNOWN_ENTITY).to_string();
        let model = str_field(fields, "model").unwrap_or(&name).to_string();
        let texture = str_field(fields, "texture_name").unwrap_or(&name).to_string();

        let mut entity = CanonicalEntity {
            name,
            model,
            texture,
            variants: Vec::new(),
        };

        if let Some(Value::Array(items)) = fields.get("variants") {
            for item in items {
                match item {
                    Value::Object(variant) => {
                        let record = self.normalize_variant(variant, &entity);
                        entity.variants.push(record);
                    }
                    other => {
                        log::warn!(
                            "unexpected variant shape under entity {}, skipping: {other}",
                            entity.name
                        );
                        self.summary.record_error();
                    }
                }
            }
        }

        entity
    }

    /// Normalize one variant record against its parent entity.
    fn normalize_variant(
        &self,
        fields: &serde_json::Map<String, Value>,
        parent: &CanonicalEntity,
    ) -> VariantRecord {
        let name = str_field(fields, "name").unwrap_or(UNKNOWN_VARIANT).to_string();
        let display_name = str_field(fields, "display_name").unwrap_or(&name).to_string();
        let model = str_field(fields, "model").unwrap_or(&parent.model).to_string();
        let texture = str_field(fields, "texture_name")
            .unwrap_or(&parent.texture)
            .to_string();

        VariantRecord {
            name,
            display_name,
            model,
            texture,
        }
    }
}

fn str_field<'a>(fields: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}
