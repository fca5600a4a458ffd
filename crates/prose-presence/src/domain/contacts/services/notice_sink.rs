// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use crate::domain::contacts::models::Notice;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait NoticeSink: Send + Sync {
    fn add_notice(&self, notice: Notice);
}
