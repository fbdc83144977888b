//! Recursive JSON merge used to stack config layers.

use serde_json::Value;

/// Overlay one JSON value onto another.
///
/// Objects merge key by key so an overlay only touches the fields it sets;
/// any other value replaces the base slot wholesale.
pub(super) fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                deep_merge(base_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}
