// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use in_memory_contact_registry::InMemoryContactRegistry;

mod in_memory_contact_registry;
