// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use disco_info::DiscoInfo;
pub use presence_status::PresenceStatus;

mod disco_info;
mod presence_status;
