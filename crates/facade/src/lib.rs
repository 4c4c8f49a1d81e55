//! Convenience façade over an in-memory page.
//!
//! [`Viewport`] is the entry point, wrapping one [`Document`] behind a
//! shared lock. It bundles the page plumbing a host otherwise wires by
//! hand:
//! - selector-addressed lookups and geometry readers,
//! - inline style writes, show/hide, and batch class mutation,
//! - listener management with vendor-prefixed end events,
//! - animated scrolling on the ambient async runtime,
//! - cookie writes in `document.cookie` string form.
//!
//! Every operation takes either CSS selector text or a [`NodeId`] from an
//! earlier lookup, and readers degrade to documented defaults when the
//! selector resolves to nothing.

mod cookies;
mod events;
mod selector;
mod style;
mod viewport;

pub use events::{animation_end_event, transition_end_event};
pub use selector::{ElementSet, Selector};
pub use viewport::Viewport;

pub use sill_dom::{
    Cookie, CookieJar, CssFeature, Document, ElementData, Event, EventCallback, FeatureSupport,
    NodeData, NodeId, Rect, VendorPrefix, Window,
};
pub use sill_html::parse_html;
