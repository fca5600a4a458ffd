// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use crate::domain::settings::repos::{KeyValueStore, StorageHook};

/// A `KeyValueStore` that keeps everything in memory. Hooks run synchronously after a write,
/// without any lock held, so they may read and write the store again.
pub struct InMemoryKeyValueStore {
    name: String,
    items: Mutex<HashMap<String, Value>>,
    hooks: RwLock<HashMap<String, Vec<Arc<StorageHook>>>>,
}

impl InMemoryKeyValueStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Default::default(),
            hooks: Default::default(),
        }
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn get_item(&self, key: &str) -> Option<Value> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: Value) -> Result<()> {
        let old_value = self.items.lock().insert(key.to_string(), value.clone());

        let hooks = self.hooks.read().get(key).cloned().unwrap_or_default();
        for hook in hooks {
            hook(&value, old_value.as_ref());
        }

        Ok(())
    }

    fn register_hook(&self, key: &str, hook: StorageHook) {
        self.hooks
            .write()
            .entry(key.to_string())
            .or_default()
            .push(Arc::new(hook));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    #[test]
    fn test_calls_hooks_with_old_value() {
        let store = InMemoryKeyValueStore::new("jane.doe@prose.org");
        let calls = Arc::new(Mutex::new(vec![]));

        let hook_calls = calls.clone();
        store.register_hook(
            "options",
            Box::new(move |new, old| hook_calls.lock().push((new.clone(), old.cloned()))),
        );

        store.set_item("options", json!({"a": 1})).unwrap();
        store.set_item("options", json!({"a": 2})).unwrap();
        store.set_item("other", json!(true)).unwrap();

        assert_eq!(
            *calls.lock(),
            vec![
                (json!({"a": 1}), None),
                (json!({"a": 2}), Some(json!({"a": 1}))),
            ]
        );
    }

    #[test]
    fn test_hooks_may_write_the_store() {
        let store = Arc::new(InMemoryKeyValueStore::new(""));
        let counter = Arc::new(AtomicUsize::new(0));

        let weak_store = Arc::downgrade(&store);
        let hook_counter = counter.clone();
        store.register_hook(
            "a",
            Box::new(move |_, _| {
                hook_counter.fetch_add(1, Ordering::SeqCst);
                if let Some(store) = weak_store.upgrade() {
                    store.set_item("b", json!("written from hook")).unwrap();
                }
            }),
        );

        store.set_item("a", json!(1)).unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(store.get_item("b"), Some(json!("written from hook")));
    }
}
