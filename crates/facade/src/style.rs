//! Inline style and class mutation.

use crate::selector::{ElementSet, Selector, resolve_many, resolve_one};
use crate::viewport::Viewport;
use futures::future::{self, Ready};
use log::warn;
use sill_dom::{ElementData, NodeId};

impl Viewport {
    /// Set one inline style property on the first matching element.
    ///
    /// Returns the element written to, or `None` (with a warning) when the
    /// selector resolves to nothing.
    pub fn css(
        &self,
        selector: impl Into<Selector>,
        property: &str,
        value: &str,
    ) -> Option<NodeId> {
        let selector = selector.into();
        let mut document = self.lock();
        let Some(node) = resolve_one(&document, &selector) else {
            warn!("unknown element for selector {selector:?}");
            return None;
        };
        if let Some(element) = document.element_mut(node) {
            element.set_style(property, value);
        }
        Some(node)
    }

    /// Hide the first matching element. A hard hide sets `display: none`
    /// and removes the element from layout; a soft hide sets
    /// `visibility: hidden` and keeps its box.
    pub fn hide(&self, selector: impl Into<Selector>, soft: bool) -> Option<NodeId> {
        if soft {
            self.css(selector, "visibility", "hidden")
        } else {
            self.css(selector, "display", "none")
        }
    }

    /// Undo either kind of hide: restore `display` (defaulting to
    /// `block`) and force `visibility: visible`.
    pub fn show(&self, selector: impl Into<Selector>, display: Option<&str>) -> Option<NodeId> {
        let selector = selector.into();
        self.css(selector.clone(), "display", display.unwrap_or("block"));
        self.css(selector, "visibility", "visible")
    }

    /// Toggle a class on every matching element.
    ///
    /// The mutation is applied before this returns; the future resolves
    /// immediately with the affected elements and exists so callers can
    /// sequence work after a batch update.
    pub fn toggle_class(&self, selector: impl Into<Selector>, class: &str) -> Ready<ElementSet> {
        self.apply_class_op(&selector.into(), class, ElementData::toggle_class)
    }

    /// Add a class to every matching element. Already-present classes are
    /// left alone.
    pub fn add_class(&self, selector: impl Into<Selector>, class: &str) -> Ready<ElementSet> {
        self.apply_class_op(&selector.into(), class, ElementData::add_class)
    }

    /// Remove a class from every matching element.
    pub fn remove_class(&self, selector: impl Into<Selector>, class: &str) -> Ready<ElementSet> {
        self.apply_class_op(&selector.into(), class, ElementData::remove_class)
    }

    fn apply_class_op(
        &self,
        selector: &Selector,
        class: &str,
        op: fn(&mut ElementData, &str),
    ) -> Ready<ElementSet> {
        let mut document = self.lock();
        let nodes = resolve_many(&document, selector);
        for &node in &nodes {
            if let Some(element) = document.element_mut(node) {
                op(element, class);
            }
        }
        future::ready(ElementSet::from(nodes))
    }
}
