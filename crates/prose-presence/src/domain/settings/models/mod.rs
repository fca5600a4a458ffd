// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use default_options::default_options;
pub use key_path::KeyPath;
pub(crate) use merge::resolve;

mod default_options;
mod key_path;
mod merge;
