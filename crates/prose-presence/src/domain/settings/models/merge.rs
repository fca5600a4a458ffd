// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use serde_json::Value;
use tracing::warn;

use super::KeyPath;

/// Looks up `path` in the override and the default document in parallel.
///
/// An override wins over the default. If both sides hold an object at the leaf, the override
/// is shallow-merged over the default. Intermediate segments that aren't objects are treated
/// as absent. Returns `None` if neither document contains the path.
pub(crate) fn resolve(path: &KeyPath, overrides: Option<&Value>, defaults: &Value) -> Option<Value> {
    let (parents, leaf) = path.split_leaf();

    let mut primary = overrides;
    let mut secondary = Some(defaults);

    for segment in parents {
        primary = primary.and_then(|value| value.get(segment));
        secondary = secondary.and_then(|value| value.get(segment));
    }

    let primary = primary.and_then(|value| value.get(leaf));
    let secondary = secondary.and_then(|value| value.get(leaf));

    match (primary, secondary) {
        (Some(Value::Object(overrides)), Some(Value::Object(defaults))) => {
            let mut merged = defaults.clone();
            merged.extend(overrides.clone());
            Some(Value::Object(merged))
        }
        (Some(value @ Value::Object(_)), Some(default)) if !default.is_null() => {
            warn!(
                "Option '{}' is an object but its default is not. Ignoring the default.",
                path
            );
            Some(value.clone())
        }
        (Some(value), _) => Some(value.clone()),
        (None, default) => default.cloned(),
    }
}
