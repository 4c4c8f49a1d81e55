//! Selector-or-handle inputs and their resolution.

use log::debug;
use sill_dom::{Document, NodeId};

/// What callers pass to name elements: CSS selector text, or a handle
/// from an earlier resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Css(String),
    Handle(NodeId),
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        Self::Css(text.to_owned())
    }
}

impl From<String> for Selector {
    fn from(text: String) -> Self {
        Self::Css(text)
    }
}

impl From<NodeId> for Selector {
    fn from(node: NodeId) -> Self {
        Self::Handle(node)
    }
}

/// The ordered result of resolving a [`Selector`] against a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSet {
    nodes: Vec<NodeId>,
}

impl ElementSet {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl From<Vec<NodeId>> for ElementSet {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl IntoIterator for ElementSet {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

/// Resolve to a single element: the first document-order match for CSS
/// text, or the handle itself when it still names a live element. A
/// handle that does not is a caller error, logged and mapped to `None`.
pub(crate) fn resolve_one(document: &Document, selector: &Selector) -> Option<NodeId> {
    match selector {
        Selector::Css(text) => sill_query::query_selector(document, text),
        Selector::Handle(node) => {
            if document.element(*node).is_some() {
                Some(*node)
            } else {
                debug!("handle {node:?} does not name a live element");
                None
            }
        }
    }
}

/// Resolve to every match: the full document-order match list for CSS
/// text, or a singleton set for a live handle.
pub(crate) fn resolve_many(document: &Document, selector: &Selector) -> Vec<NodeId> {
    match selector {
        Selector::Css(text) => sill_query::query_selector_all(document, text),
        Selector::Handle(node) => {
            if document.element(*node).is_some() {
                vec![*node]
            } else {
                debug!("handle {node:?} does not name a live element");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_impls() {
        assert_eq!(Selector::from("div.item"), Selector::Css("div.item".to_owned()));
        assert_eq!(
            Selector::from("p".to_owned()),
            Selector::Css("p".to_owned())
        );
        let node = NodeId::new(7);
        assert_eq!(Selector::from(node), Selector::Handle(node));
    }

    #[test]
    fn test_stale_handle_resolves_to_nothing() {
        let document = Document::new();
        let stale = Selector::Handle(NodeId::new(999));
        assert_eq!(resolve_one(&document, &stale), None);
        assert!(resolve_many(&document, &stale).is_empty());
    }

    #[test]
    fn test_live_handle_resolves_to_singleton() {
        let mut document = Document::new();
        let node = document.create_element("div");
        let selector = Selector::Handle(node);
        assert_eq!(resolve_one(&document, &selector), Some(node));
        assert_eq!(resolve_many(&document, &selector), vec![node]);
    }

    #[test]
    fn test_element_set_accessors() {
        let set = ElementSet::from(vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.first(), Some(NodeId::new(1)));
        assert!(set.contains(NodeId::new(2)));

        let collected: Vec<NodeId> = (&set).into_iter().collect();
        assert_eq!(collected, set.clone().into_vec());
    }
}
