//! Implementation of the selectors crate's Element trait for the arena.

use selectors::OpaqueElement;
use selectors::attr::{
    AttrSelectorOperation, AttrSelectorOperator, CaseSensitivity, NamespaceConstraint,
};
use sill_dom::{Document, ElementData, NodeData, NodeId};

/// A node viewed through the selectors crate: the document plus a node id.
#[derive(Clone)]
pub struct DocElement<'a> {
    document: &'a Document,
    node: NodeId,
}

impl<'a> std::fmt::Debug for DocElement<'a> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DocElement")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

impl<'a> DocElement<'a> {
    pub fn new(document: &'a Document, node: NodeId) -> Self {
        Self { document, node }
    }

    fn data(&self) -> Option<&'a ElementData> {
        self.document.element(self.node)
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.data().and_then(|data| data.attr(name))
    }

    fn is_element(&self) -> bool {
        self.data().is_some()
    }

    /// Element siblings sharing this node's parent, in document order.
    fn sibling_elements(&self) -> Vec<NodeId> {
        let Some(parent) = self.document.parent(self.node) else {
            return Vec::new();
        };
        self.document
            .children(parent)
            .iter()
            .copied()
            .filter(|sibling| self.document.element(*sibling).is_some() || *sibling == self.node)
            .collect()
    }
}

fn operator_matches(operator: AttrSelectorOperator, attr_value: &str, expected: &str) -> bool {
    match operator {
        AttrSelectorOperator::Equal => attr_value == expected,
        AttrSelectorOperator::Includes => {
            attr_value.split_whitespace().any(|part| part == expected)
        }
        AttrSelectorOperator::DashMatch => {
            attr_value == expected
                || (attr_value.starts_with(expected)
                    && attr_value[expected.len()..].starts_with('-'))
        }
        AttrSelectorOperator::Prefix => !expected.is_empty() && attr_value.starts_with(expected),
        AttrSelectorOperator::Suffix => !expected.is_empty() && attr_value.ends_with(expected),
        AttrSelectorOperator::Substring => !expected.is_empty() && attr_value.contains(expected),
    }
}

impl<'a> selectors::Element for DocElement<'a> {
    type Impl = SelectorImpl;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(&self.node)
    }

    fn parent_element(&self) -> Option<Self> {
        let mut current = self.document.parent(self.node)?;
        loop {
            let candidate = DocElement::new(self.document, current);
            if candidate.is_element() {
                return Some(candidate);
            }
            current = self.document.parent(current)?;
        }
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        let siblings = self.sibling_elements();
        let position = siblings.iter().position(|sibling| *sibling == self.node)?;
        siblings[..position]
            .last()
            .map(|sibling| DocElement::new(self.document, *sibling))
    }

    fn next_sibling_element(&self) -> Option<Self> {
        let siblings = self.sibling_elements();
        let position = siblings.iter().position(|sibling| *sibling == self.node)?;
        siblings
            .get(position + 1)
            .map(|sibling| DocElement::new(self.document, *sibling))
    }

    fn first_element_child(&self) -> Option<Self> {
        self.document
            .children(self.node)
            .iter()
            .find(|child| self.document.element(**child).is_some())
            .map(|child| DocElement::new(self.document, *child))
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, local_name: &str) -> bool {
        self.data()
            .is_some_and(|data| data.tag_name == local_name)
    }

    fn has_namespace(&self, _ns: &()) -> bool {
        true
    }

    fn is_same_type(&self, other: &Self) -> bool {
        match (self.data(), other.data()) {
            (Some(mine), Some(theirs)) => mine.tag_name == theirs.tag_name,
            _ => false,
        }
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&()>,
        local_name: &AttrString,
        operation: &AttrSelectorOperation<&AttrString>,
    ) -> bool {
        if !matches!(ns, NamespaceConstraint::Specific(())) {
            return false;
        }
        let Some(attr_value) = self.attr(&local_name.0) else {
            return false;
        };
        match operation {
            AttrSelectorOperation::Exists => true,
            AttrSelectorOperation::WithValue {
                operator,
                case_sensitivity,
                value,
            } => {
                if *case_sensitivity == CaseSensitivity::CaseSensitive {
                    operator_matches(*operator, attr_value, &value.0)
                } else {
                    operator_matches(
                        *operator,
                        &attr_value.to_ascii_lowercase(),
                        &value.0.to_ascii_lowercase(),
                    )
                }
            }
        }
    }

    fn match_non_ts_pseudo_class(
        &self,
        _pc: &NonTSPseudoClass,
        _context: &mut selectors::matching::MatchingContext<Self::Impl>,
    ) -> bool {
        false
    }

    fn match_pseudo_element(
        &self,
        _pe: &PseudoElement,
        _context: &mut selectors::matching::MatchingContext<Self::Impl>,
    ) -> bool {
        false
    }

    fn apply_selector_flags(&self, _flags: selectors::matching::ElementSelectorFlags) {
        // No-op: nothing tracks selector flags
    }

    fn is_link(&self) -> bool {
        self.data().is_some_and(|data| {
            (data.tag_name == "a" || data.tag_name == "area") && data.attr("href").is_some()
        })
    }

    fn is_html_slot_element(&self) -> bool {
        self.data().is_some_and(|data| data.tag_name == "slot")
    }

    fn has_id(&self, id: &AttrString, case_sensitivity: CaseSensitivity) -> bool {
        self.data()
            .and_then(ElementData::id)
            .is_some_and(|element_id| match case_sensitivity {
                CaseSensitivity::CaseSensitive => element_id == id.0,
                CaseSensitivity::AsciiCaseInsensitive => element_id.eq_ignore_ascii_case(&id.0),
            })
    }

    fn has_class(&self, name: &AttrString, case_sensitivity: CaseSensitivity) -> bool {
        self.data().is_some_and(|data| {
            data.classes().iter().any(|class| match case_sensitivity {
                CaseSensitivity::CaseSensitive => *class == name.0,
                CaseSensitivity::AsciiCaseInsensitive => class.eq_ignore_ascii_case(&name.0),
            })
        })
    }

    fn imported_part(&self, _name: &AttrString) -> Option<AttrString> {
        None
    }

    fn is_part(&self, _name: &AttrString) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.document
            .children(self.node)
            .iter()
            .all(|child| match self.document.node_data(*child) {
                Some(NodeData::Element(_)) => false,
                Some(NodeData::Text(text)) => text.trim().is_empty(),
                _ => true,
            })
    }

    fn is_root(&self) -> bool {
        self.data().is_some_and(|data| data.tag_name == "html")
    }
}

/// String wrapper that implements ToCss
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttrString(pub String);

impl From<&str> for AttrString {
    fn from(value: &str) -> Self {
        AttrString(value.to_owned())
    }
}

impl std::borrow::Borrow<str> for AttrString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl cssparser::ToCss for AttrString {
    fn to_css<W>(&self, dest: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        cssparser::serialize_string(&self.0, dest)
    }
}

/// Selector implementation types
#[derive(Debug, Clone, Copy)]
pub struct SelectorImpl;

impl selectors::SelectorImpl for SelectorImpl {
    type ExtraMatchingData<'a> = ();
    type AttrValue = AttrString;
    type Identifier = AttrString;
    type LocalName = AttrString;
    type NamespacePrefix = AttrString;
    type NamespaceUrl = ();
    type BorrowedLocalName = str;
    type BorrowedNamespaceUrl = ();
    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;
}

/// Non-tree-structural pseudo-classes. None are supported, so the enum is
/// uninhabited and every match arm is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonTSPseudoClass {}

impl selectors::parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = SelectorImpl;

    fn is_active_or_hover(&self) -> bool {
        match *self {}
    }

    fn is_user_action_state(&self) -> bool {
        match *self {}
    }
}

impl cssparser::ToCss for NonTSPseudoClass {
    fn to_css<W>(&self, _dest: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        match *self {}
    }
}

/// Pseudo-elements, likewise unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoElement {}

impl selectors::parser::PseudoElement for PseudoElement {
    type Impl = SelectorImpl;
}

impl cssparser::ToCss for PseudoElement {
    fn to_css<W>(&self, _dest: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        match *self {}
    }
}
