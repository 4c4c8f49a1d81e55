//! Listener attachment, event delivery, and vendor-prefixed end events.

use crate::selector::{ElementSet, Selector, resolve_many, resolve_one};
use crate::viewport::Viewport;
use log::debug;
use sill_dom::{CssFeature, Event, EventCallback, NodeId, VendorPrefix};
use std::sync::Arc;

impl Viewport {
    /// Attach a callback to every element matching the selector.
    ///
    /// Returns the elements the callback was attached to; an empty set
    /// means nothing matched and nothing was registered.
    pub fn add_listener(
        &self,
        selector: impl Into<Selector>,
        event_type: &str,
        callback: EventCallback,
    ) -> ElementSet {
        let selector = selector.into();
        let mut document = self.lock();
        let nodes = resolve_many(&document, &selector);
        for &node in &nodes {
            document
                .listeners_mut()
                .add(node, event_type, Arc::clone(&callback));
        }
        ElementSet::from(nodes)
    }

    /// Detach a callback from every element matching the selector.
    ///
    /// Identity is the `Arc` allocation, so this needs a clone of the
    /// handle passed to [`Viewport::add_listener`].
    pub fn remove_listener(
        &self,
        selector: impl Into<Selector>,
        event_type: &str,
        callback: &EventCallback,
    ) -> ElementSet {
        let selector = selector.into();
        let mut document = self.lock();
        let nodes = resolve_many(&document, &selector);
        for &node in &nodes {
            document.listeners_mut().remove(node, event_type, callback);
        }
        ElementSet::from(nodes)
    }

    /// Deliver an event to the first element matching the selector and
    /// return how many callbacks ran.
    ///
    /// Callbacks run on a snapshot taken up front, so a callback that
    /// adds or removes listeners does not alter this delivery, and the
    /// document is unlocked while they run.
    pub fn dispatch(&self, target: impl Into<Selector>, event_type: &str) -> usize {
        let target = target.into();
        let (node, callbacks) = {
            let document = self.lock();
            let Some(node) = resolve_one(&document, &target) else {
                return 0;
            };
            (node, document.listeners().snapshot(node, event_type))
        };
        let event = Event::new(event_type, node);
        for callback in &callbacks {
            callback(&event);
        }
        callbacks.len()
    }

    /// Attach a callback to the animation-end event under the vendor
    /// prefix the host reports.
    ///
    /// Returns the resolved element even when animations are unsupported
    /// and no listener could be attached; `None` only when the selector
    /// resolves to nothing.
    pub fn animation_end(
        &self,
        selector: impl Into<Selector>,
        callback: EventCallback,
    ) -> Option<NodeId> {
        let node = self.element(selector)?;
        let prefix = self.lock().features().prefix(CssFeature::Animation);
        match prefix {
            Some(prefix) => {
                self.add_listener(node, animation_end_event(prefix), callback);
            }
            None => debug!("animations unsupported, listener for {node:?} not attached"),
        }
        Some(node)
    }

    /// Attach a callback to the transition-end event under the vendor
    /// prefix the host reports.
    ///
    /// Opera never shipped a transition-end event, so under the Opera
    /// prefix this resolves the element but attaches nothing, the same as
    /// when transitions are unsupported.
    pub fn transition_end(
        &self,
        selector: impl Into<Selector>,
        callback: EventCallback,
    ) -> Option<NodeId> {
        let node = self.element(selector)?;
        let prefix = self.lock().features().prefix(CssFeature::Transition);
        match prefix.and_then(transition_end_event) {
            Some(event_type) => {
                self.add_listener(node, event_type, callback);
            }
            None => debug!("transition end unavailable, listener for {node:?} not attached"),
        }
        Some(node)
    }
}

/// Name of the animation-end event under a vendor prefix.
pub fn animation_end_event(prefix: VendorPrefix) -> &'static str {
    match prefix {
        VendorPrefix::Standard | VendorPrefix::Moz => "animationend",
        VendorPrefix::WebKit => "webkitAnimationEnd",
        VendorPrefix::Opera => "oAnimationEnd",
    }
}

/// Name of the transition-end event under a vendor prefix. Opera has
/// none.
pub fn transition_end_event(prefix: VendorPrefix) -> Option<&'static str> {
    match prefix {
        VendorPrefix::Standard | VendorPrefix::Moz => Some("transitionend"),
        VendorPrefix::WebKit => Some("webkitTransitionEnd"),
        VendorPrefix::Opera => None,
    }
}
