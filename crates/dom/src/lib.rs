//! Data model for the simulated page environment.
//!
//! This crate provides:
//! - `Document`: node arena with parent/child relationships plus the host
//!   state that normally lives on the browser (window metrics, cookies,
//!   listeners, vendor-prefix support)
//! - `NodeData`/`ElementData`: per-node payloads with cached id/class/style
//! - `Window`: viewport metrics and clamped scroll position
//! - `Rect`: document-absolute layout boxes and viewport-relative reads

/// Unique identifier for a DOM node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// The Document node ID - root of the entire tree.
pub const DOCUMENT_NODE_ID: NodeId = NodeId::new(0);

pub mod cookies;
pub mod document;
pub mod events;
pub mod features;
pub mod geometry;
pub mod node;
pub mod style;
pub mod svg;
pub mod window;

pub use cookies::{Cookie, CookieJar};
pub use document::Document;
pub use events::{Event, EventCallback, ListenerRegistry};
pub use features::{CssFeature, FeatureSupport, VendorPrefix};
pub use geometry::Rect;
pub use node::{Attribute, ElementData, NodeData};
pub use window::Window;
