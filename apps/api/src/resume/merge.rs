use serde_json::{Map, Value};

use crate::models::resume::ValueKind;

/// Recursively merges `source` into `target`.
///
/// Mappings combine key by key. Every other kind of value (sequences,
/// scalars, null) replaces whatever `target` held at that key. Keys that
/// only exist in `target` are left alone.
pub fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        match incoming {
            Value::Object(incoming) => {
                let slot = target
                    .entry(key)
                    .or_insert_with(|| Value::Object(Map::new()));
                // A missing or non-mapping target value seeds an empty mapping.
                if ValueKind::of(slot) != ValueKind::Mapping {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(existing) = slot {
                    deep_merge(existing, incoming);
                }
            }
            replacement => {
                target.insert(key, replacement);
            }
        }
    }
}

/// One-level overwrite: each key in `source` fully replaces the same key in `target`.
pub fn shallow_overwrite(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        target.insert(key, incoming);
    }
}
