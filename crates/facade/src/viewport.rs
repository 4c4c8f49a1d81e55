//! The façade handle: construction, lookup, geometry, and scrolling.

use crate::selector::{ElementSet, Selector, resolve_many, resolve_one};
use log::warn;
use parking_lot::Mutex;
use sill_dom::style::leading_int;
use sill_dom::{Document, NodeId, Rect};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

/// Cadence of the animated scroll loop.
const SCROLL_STEP_INTERVAL: Duration = Duration::from_millis(15);

/// Offset added to `from_top` so scroll triggers fire slightly before an
/// element's top edge reaches the viewport bottom.
const SCROLL_TRIGGER_OFFSET: f32 = 100.0;

/// Convenience façade over one page.
///
/// Cheap to clone; clones share the same document. Lookups accept either
/// CSS selector text or a [`NodeId`] handle from an earlier lookup, and
/// every reader degrades to a documented default instead of failing when
/// the selector resolves to nothing.
#[derive(Clone)]
pub struct Viewport {
    document: Arc<Mutex<Document>>,
}

impl Viewport {
    /// A façade over an empty document.
    pub fn new() -> Self {
        Self::from_document(Document::new())
    }

    /// Parse markup and wrap the resulting document.
    pub fn from_html(html: &str) -> Self {
        Self::from_document(sill_html::parse_html(html))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Run a closure against the underlying document. This is the host
    /// access seam: embedders and tests use it to seed layout boxes,
    /// window metrics, and feature support.
    pub fn with_document<T>(&self, func: impl FnOnce(&mut Document) -> T) -> T {
        func(&mut self.document.lock())
    }

    pub(crate) fn lock(&self) -> parking_lot::MutexGuard<'_, Document> {
        self.document.lock()
    }

    /// First element matching the selector, `None` when nothing matches.
    pub fn element(&self, selector: impl Into<Selector>) -> Option<NodeId> {
        let selector = selector.into();
        resolve_one(&self.lock(), &selector)
    }

    /// Every element matching the selector, in document order.
    pub fn elements(&self, selector: impl Into<Selector>) -> ElementSet {
        let selector = selector.into();
        ElementSet::from(resolve_many(&self.lock(), &selector))
    }

    /// Current vertical scroll offset.
    pub fn scroll_top(&self) -> f32 {
        self.lock().window().scroll_y()
    }

    /// Viewport width.
    pub fn window_width(&self) -> f32 {
        self.lock().window().inner_width()
    }

    /// Viewport height.
    pub fn window_height(&self) -> f32 {
        self.lock().window().inner_height()
    }

    /// Viewport-relative bounding rect, all-zero when the selector does
    /// not resolve.
    pub fn client_rect(&self, selector: impl Into<Selector>) -> Rect {
        let selector = selector.into();
        let document = self.lock();
        resolve_one(&document, &selector)
            .map(|node| document.bounding_client_rect(node))
            .unwrap_or_default()
    }

    /// Viewport-relative top edge, `0` when the selector does not resolve.
    pub fn client_top(&self, selector: impl Into<Selector>) -> f32 {
        self.client_rect(selector).top()
    }

    /// Viewport-relative left edge, `0` when the selector does not
    /// resolve.
    pub fn client_left(&self, selector: impl Into<Selector>) -> f32 {
        self.client_rect(selector).left()
    }

    /// Scroll-trigger point for an element: its document-absolute top,
    /// pushed one viewport height up and nudged by
    /// [`SCROLL_TRIGGER_OFFSET`], rounded to whole pixels. An unresolved
    /// selector contributes a zero top edge, so the result still reflects
    /// the current scroll position.
    pub fn from_top(&self, selector: impl Into<Selector>) -> i32 {
        let selector = selector.into();
        let document = self.lock();
        let top = resolve_one(&document, &selector)
            .map_or(0.0, |node| document.bounding_client_rect(node).top());
        let window = document.window();
        (top + window.scroll_y() - window.inner_height() + SCROLL_TRIGGER_OFFSET).round() as i32
    }

    /// Computed height in whole pixels, `0` when unresolved or not a
    /// pixel value.
    pub fn height(&self, selector: impl Into<Selector>) -> i32 {
        self.computed_int(&selector.into(), "height")
    }

    /// Computed width in whole pixels, `0` when unresolved or not a pixel
    /// value.
    pub fn width(&self, selector: impl Into<Selector>) -> i32 {
        self.computed_int(&selector.into(), "width")
    }

    /// Half the computed height: the vertical center, measured from the
    /// element's top edge.
    pub fn height_center(&self, selector: impl Into<Selector>) -> f32 {
        self.height(selector) as f32 / 2.0
    }

    /// Half the computed width.
    pub fn width_center(&self, selector: impl Into<Selector>) -> f32 {
        self.width(selector) as f32 / 2.0
    }

    fn computed_int(&self, selector: &Selector, property: &str) -> i32 {
        let document = self.lock();
        resolve_one(&document, selector)
            .and_then(|node| document.computed_value(node, property))
            .and_then(|value| leading_int(&value))
            .unwrap_or(0)
    }

    /// Total length of an SVG path element, `0` with a warning when the
    /// selector does not resolve or names something that is not a path.
    pub fn path_len(&self, selector: impl Into<Selector>) -> f32 {
        let selector = selector.into();
        let document = self.lock();
        let Some(node) = resolve_one(&document, &selector) else {
            warn!("no path element for {selector:?}, returning length 0");
            return 0.0;
        };
        match document.path_length(node) {
            Some(length) => length,
            None => {
                warn!("element for {selector:?} is not a path, returning length 0");
                0.0
            }
        }
    }

    /// Animate the scroll offset toward `distance`.
    ///
    /// The step is fixed at call time, `-scroll / (duration_ms / 15)`, and
    /// applied every 15 ms until the offset is no longer above `distance`;
    /// there is no easing and no cancellation handle. A zero duration
    /// degenerates to one clamped jump to the top. Requires an ambient
    /// async runtime; called without one, it warns and does nothing.
    pub fn scroll_to(&self, distance: f32, duration_ms: f32) {
        let step = {
            let document = self.lock();
            let step_ms = SCROLL_STEP_INTERVAL.as_millis() as f32;
            -document.window().scroll_y() / (duration_ms / step_ms)
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("scroll_to needs a running async runtime, ignoring");
            return;
        };

        let document = Arc::clone(&self.document);
        let _ = runtime.spawn(async move {
            let start = time::Instant::now() + SCROLL_STEP_INTERVAL;
            let mut ticker = time::interval_at(start, SCROLL_STEP_INTERVAL);
            loop {
                ticker.tick().await;
                let mut document = document.lock();
                if document.window().scroll_y() > distance {
                    document.window_mut().scroll_by(0.0, step);
                } else {
                    break;
                }
            }
        });
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
