// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use contact_registry::ContactRegistry;

mod contact_registry;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::contact_registry::MockContactRegistry;
}
