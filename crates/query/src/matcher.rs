//! Selector parsing and document-order queries.

use crate::element::{AttrString, DocElement, NonTSPseudoClass, PseudoElement, SelectorImpl};
use cssparser::{Parser, ParserInput};
use log::warn;
use selectors::NthIndexCache;
use selectors::matching::{
    IgnoreNthChildForInvalidation, MatchingContext, MatchingMode, NeedsSelectorFlags, QuirksMode,
    matches_selector,
};
use selectors::parser::{SelectorList, SelectorParseErrorKind};
use sill_dom::{Document, NodeId};

/// Parser for CSS selectors. Pseudo-classes and pseudo-elements are
/// rejected: matching runs against a static document with no user state.
pub struct SelectorParser;

impl<'i> selectors::parser::Parser<'i> for SelectorParser {
    type Impl = SelectorImpl;
    type Error = SelectorParseErrorKind<'i>;

    fn parse_non_ts_pseudo_class(
        &self,
        location: cssparser::SourceLocation,
        name: cssparser::CowRcStr<'i>,
    ) -> Result<NonTSPseudoClass, cssparser::ParseError<'i, SelectorParseErrorKind<'i>>> {
        Err(location
            .new_custom_error(SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name)))
    }

    fn parse_pseudo_element(
        &self,
        location: cssparser::SourceLocation,
        name: cssparser::CowRcStr<'i>,
    ) -> Result<PseudoElement, cssparser::ParseError<'i, SelectorParseErrorKind<'i>>> {
        Err(location
            .new_custom_error(SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name)))
    }

    fn parse_non_ts_functional_pseudo_class<'t>(
        &self,
        name: cssparser::CowRcStr<'i>,
        parser: &mut Parser<'i, 't>,
    ) -> Result<NonTSPseudoClass, cssparser::ParseError<'i, SelectorParseErrorKind<'i>>> {
        Err(parser
            .new_custom_error(SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name)))
    }

    fn default_namespace(&self) -> Option<()> {
        None
    }

    fn namespace_for_prefix(&self, _prefix: &AttrString) -> Option<()> {
        None
    }
}

/// Parse selector text into a selector list. Malformed input (including
/// unsupported pseudo-classes) logs a warning and yields `None`, which
/// callers treat as matching nothing.
pub fn parse_selector_list(selector_text: &str) -> Option<SelectorList<SelectorImpl>> {
    let mut input = ParserInput::new(selector_text);
    let mut parser = Parser::new(&mut input);

    match SelectorList::parse(
        &SelectorParser,
        &mut parser,
        selectors::parser::ParseRelative::No,
    ) {
        Ok(list) => Some(list),
        Err(error) => {
            warn!("unparseable selector {selector_text:?}: {error:?}");
            None
        }
    }
}

/// Whether any selector in the list matches the node.
pub fn selector_matches(
    document: &Document,
    node: NodeId,
    list: &SelectorList<SelectorImpl>,
) -> bool {
    let element = DocElement::new(document, node);
    let mut nth_index_cache = NthIndexCache::default();
    let mut context = MatchingContext::new(
        MatchingMode::Normal,
        None,
        &mut nth_index_cache,
        QuirksMode::NoQuirks,
        NeedsSelectorFlags::No,
        IgnoreNthChildForInvalidation::No,
    );

    list.0
        .iter()
        .any(|selector| matches_selector(selector, 0, None, &element, &mut context))
}

/// First element in document order matching the selector text.
pub fn query_selector(document: &Document, selector_text: &str) -> Option<NodeId> {
    let list = parse_selector_list(selector_text)?;
    document
        .elements()
        .find(|node| selector_matches(document, *node, &list))
}

/// Every element in document order matching the selector text.
pub fn query_selector_all(document: &Document, selector_text: &str) -> Vec<NodeId> {
    let Some(list) = parse_selector_list(selector_text) else {
        return Vec::new();
    };
    document
        .elements()
        .filter(|node| selector_matches(document, *node, &list))
        .collect()
}
