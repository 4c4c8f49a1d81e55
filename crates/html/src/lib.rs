//! HTML5 parsing using html5ever.
//!
//! Parses markup with html5ever's full tree builder, then converts the
//! resulting rcdom tree into a [`Document`] arena. Doctypes, processing
//! instructions and whitespace-only text are dropped during conversion.

use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use sill_dom::{DOCUMENT_NODE_ID, Document, NodeId};
use tendril::StrTendril;

/// Parse HTML into a fresh [`Document`].
pub fn parse_html(html: &str) -> Document {
    let input = StrTendril::from(html);
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(input);

    let mut document = Document::new();
    convert_node(&dom.document, &mut document, DOCUMENT_NODE_ID);
    document
}

/// Convert an rcdom node (and its subtree) into the arena, returning the
/// node it mapped to. Skipped nodes map to their parent.
fn convert_node(rc_node: &Handle, document: &mut Document, parent: NodeId) -> NodeId {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(child, document, parent);
            }
            parent
        }

        // Skip doctype nodes
        RcNodeData::Doctype { .. } => parent,

        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Skip whitespace-only text nodes
            if text.trim().is_empty() {
                return parent;
            }
            let node = document.create_text(text);
            document.append_child(parent, node);
            node
        }

        RcNodeData::Comment { contents } => {
            let node = document.create_comment(contents.to_string());
            document.append_child(parent, node);
            node
        }

        RcNodeData::Element { name, attrs, .. } => {
            let node = document.create_element(&name.local);
            if let Some(element) = document.element_mut(node) {
                for attr in attrs.borrow().iter() {
                    element.set_attr(&attr.name.local, &attr.value);
                }
            }
            document.append_child(parent, node);

            for child in rc_node.children.borrow().iter() {
                convert_node(child, document, node);
            }
            node
        }

        // Skip processing instructions
        RcNodeData::ProcessingInstruction { .. } => parent,
    }
}
