// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use contact::{Contact, Subscription};
pub use notice::{Notice, NoticeAction, NoticeType};

mod contact;
mod notice;
