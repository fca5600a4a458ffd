// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use minidom::Element;

use crate::domain::presence::StanzaQuery;

impl StanzaQuery for Element {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attr(name)
    }

    fn child(&self, tag: &str) -> Option<&Self> {
        self.children().find(|child| child.name() == tag)
    }

    fn child_text(&self, tag: &str) -> Option<String> {
        StanzaQuery::child(self, tag).map(Element::text)
    }

    fn first_child_name(&self) -> Option<&str> {
        self.children().next().map(Element::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_presence_stanza() {
        let stanza = r#"<presence xmlns="jabber:client" from="friend@prose.org/phone" type="error">
            <error code="404" type="cancel">
                <item-not-found xmlns="urn:ietf:params:xml:ns:xmpp-stanzas"/>
                <text xmlns="urn:ietf:params:xml:ns:xmpp-stanzas">Not here</text>
            </error>
            <nick xmlns="http://jabber.org/protocol/nick">Bob</nick>
        </presence>"#
            .parse::<Element>()
            .unwrap();

        assert_eq!(stanza.attribute("from"), Some("friend@prose.org/phone"));
        assert_eq!(stanza.attribute("id"), None);
        assert_eq!(stanza.child_text("nick"), Some("Bob".to_string()));
        assert_eq!(stanza.child_text("show"), None);
        assert_eq!(stanza.first_child_name(), Some("error"));

        let error = StanzaQuery::child(&stanza, "error").unwrap();
        assert_eq!(error.attribute("code"), Some("404"));
        assert_eq!(error.first_child_name(), Some("item-not-found"));
        assert_eq!(error.child_text("text"), Some("Not here".to_string()));
    }

    #[test]
    fn test_first_child_of_empty_element() {
        let stanza = r#"<presence xmlns="jabber:client" from="friend@prose.org"/>"#
            .parse::<Element>()
            .unwrap();
        assert_eq!(stanza.first_child_name(), None);
    }
}
