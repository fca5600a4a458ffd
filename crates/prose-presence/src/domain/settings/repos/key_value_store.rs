// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use anyhow::Result;
use serde_json::Value;

/// Called with the new and the previous value after an item was written.
pub type StorageHook = Box<dyn Fn(&Value, Option<&Value>) + Send + Sync>;

/// The account's persistent storage.
pub trait KeyValueStore: Send + Sync {
    /// Identifies the account the storage belongs to. May be empty.
    fn name(&self) -> String;
    fn get_item(&self, key: &str) -> Option<Value>;
    fn set_item(&self, key: &str, value: Value) -> Result<()>;
    fn register_hook(&self, key: &str, hook: StorageHook);
}
