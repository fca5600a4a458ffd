// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
/// The handful of queries the presence handling needs to run against a received stanza.
/// Children are matched by their local name, regardless of namespace.
pub trait StanzaQuery {
    fn attribute(&self, name: &str) -> Option<&str>;
    fn child(&self, tag: &str) -> Option<&Self>;
    /// The text of the first child named `tag`. `None` if there is no such child.
    fn child_text(&self, tag: &str) -> Option<String>;
    fn first_child_name(&self) -> Option<&str>;
}
