//! CSS selector matching over the document arena.
//!
//! Wraps the selectors crate's matching engine: an adapter implements its
//! Element trait over arena nodes, and the matcher exposes
//! `querySelector`-style lookups that walk the document in order.

mod element;
mod matcher;

pub use element::{AttrString, SelectorImpl};
pub use matcher::{
    SelectorParser, parse_selector_list, query_selector, query_selector_all, selector_matches,
};
