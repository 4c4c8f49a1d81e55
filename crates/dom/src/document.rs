//! Document arena and host state.

use crate::cookies::CookieJar;
use crate::events::ListenerRegistry;
use crate::features::FeatureSupport;
use crate::geometry::Rect;
use crate::node::{ElementData, NodeData};
use crate::window::Window;
use crate::{DOCUMENT_NODE_ID, NodeId};
use std::collections::HashMap;

/// The page: a node arena plus the host state a browser would own.
///
/// Node relationships and data are stored separately so tree walks and
/// payload reads stay independent. Layout boxes are seeded by the embedder
/// (or tests) in document-absolute coordinates.
pub struct Document {
    next_id: u64,
    node_data: HashMap<NodeId, NodeData>,
    parents: HashMap<NodeId, NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
    layout: HashMap<NodeId, Rect>,
    window: Window,
    cookies: CookieJar,
    listeners: ListenerRegistry,
    features: FeatureSupport,
}

impl Document {
    /// Create a document containing only the root document node.
    pub fn new() -> Self {
        let mut node_data = HashMap::new();
        node_data.insert(DOCUMENT_NODE_ID, NodeData::Document);
        Self {
            next_id: 1,
            node_data,
            parents: HashMap::new(),
            children: HashMap::new(),
            layout: HashMap::new(),
            window: Window::default(),
            cookies: CookieJar::default(),
            listeners: ListenerRegistry::default(),
            features: FeatureSupport::default(),
        }
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create an element node with the given tag name.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = self.alloc();
        self.node_data
            .insert(id, NodeData::Element(ElementData::new(tag_name.to_owned())));
        id
    }

    /// Create a text node.
    pub fn create_text(&mut self, text: String) -> NodeId {
        let id = self.alloc();
        self.node_data.insert(id, NodeData::Text(text));
        id
    }

    /// Create a comment node.
    pub fn create_comment(&mut self, text: String) -> NodeId {
        let id = self.alloc();
        self.node_data.insert(id, NodeData::Comment(text));
        id
    }

    /// Establish a parent-child relationship.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.parents.insert(child, parent);
        self.children.entry(parent).or_default().push(child);
    }

    /// Whether the node exists in this document.
    pub fn contains(&self, node: NodeId) -> bool {
        self.node_data.contains_key(&node)
    }

    /// Get data for a node.
    pub fn node_data(&self, node: NodeId) -> Option<&NodeData> {
        self.node_data.get(&node)
    }

    /// Get element data for a node, if it is an element.
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.node_data.get(&node).and_then(NodeData::as_element)
    }

    /// Get mutable element data for a node, if it is an element.
    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        self.node_data
            .get_mut(&node)
            .and_then(NodeData::as_element_mut)
    }

    /// Get parent of a node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    /// Get children of a node.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Depth-first walk starting at (and including) `root`, in document
    /// order.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![root],
        }
    }

    /// All element nodes in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(DOCUMENT_NODE_ID)
            .filter(|node| self.element(*node).is_some())
    }

    /// Store the document-absolute layout box for a node.
    pub fn set_layout_box(&mut self, node: NodeId, rect: Rect) {
        self.layout.insert(node, rect);
    }

    /// The document-absolute layout box for a node, if one was stored.
    pub fn layout_box(&self, node: NodeId) -> Option<Rect> {
        self.layout.get(&node).copied()
    }

    /// The viewport-relative bounding rect for a node.
    ///
    /// Elements computed as `display: none` (and nodes with no layout box)
    /// report an all-zero rect, matching how engines answer geometry
    /// queries for unrendered content.
    pub fn bounding_client_rect(&self, node: NodeId) -> Rect {
        if self.computes_display_none(node) {
            return Rect::default();
        }
        let Some(layout) = self.layout_box(node) else {
            return Rect::default();
        };
        layout.translated(-self.window.scroll_x(), -self.window.scroll_y())
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    pub fn cookies_mut(&mut self) -> &mut CookieJar {
        &mut self.cookies
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerRegistry {
        &mut self.listeners
    }

    pub fn features(&self) -> &FeatureSupport {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut FeatureSupport {
        &mut self.features
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a subtree in document order.
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        let children = self.document.children(node);
        self.stack.extend(children.iter().rev().copied());
        Some(node)
    }
}
