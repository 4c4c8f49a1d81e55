//! Window metrics and scroll state.

/// Viewport metrics and scroll position for the page.
///
/// Scroll writes clamp to the scrollable range, which is what ends an
/// animated scroll at the top edge instead of overshooting into negative
/// offsets.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    inner_width: f32,
    inner_height: f32,
    content_width: f32,
    content_height: f32,
    scroll_x: f32,
    scroll_y: f32,
}

impl Window {
    pub fn new(inner_width: f32, inner_height: f32) -> Self {
        Self {
            inner_width,
            inner_height,
            content_width: inner_width,
            content_height: inner_height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn inner_width(&self) -> f32 {
        self.inner_width
    }

    pub fn inner_height(&self) -> f32 {
        self.inner_height
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Resize the viewport, keeping the scroll position in range.
    pub fn set_inner_size(&mut self, width: f32, height: f32) {
        self.inner_width = width;
        self.inner_height = height;
        self.clamp_scroll();
    }

    /// Set the size of the laid-out page content, keeping the scroll
    /// position in range.
    pub fn set_content_size(&mut self, width: f32, height: f32) {
        self.content_width = width;
        self.content_height = height;
        self.clamp_scroll();
    }

    pub fn max_scroll_x(&self) -> f32 {
        (self.content_width - self.inner_width).max(0.0)
    }

    pub fn max_scroll_y(&self) -> f32 {
        (self.content_height - self.inner_height).max(0.0)
    }

    /// Scroll to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll();
    }

    /// Scroll relative to the current offset, clamped to the scrollable
    /// range.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll_to(self.scroll_x + dx, self.scroll_y + dy);
    }

    fn clamp_scroll(&mut self) {
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll_x());
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y());
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut window = Window::new(1000.0, 600.0);
        window.set_content_size(1000.0, 2600.0);

        window.scroll_to(0.0, 5000.0);
        assert_eq!(window.scroll_y(), 2000.0);

        window.scroll_to(0.0, -50.0);
        assert_eq!(window.scroll_y(), 0.0);
    }

    #[test]
    fn test_content_smaller_than_viewport_cannot_scroll() {
        let mut window = Window::new(1000.0, 600.0);
        window.set_content_size(500.0, 300.0);
        window.scroll_by(100.0, 100.0);
        assert_eq!(window.scroll_x(), 0.0);
        assert_eq!(window.scroll_y(), 0.0);
    }

    #[test]
    fn test_shrinking_content_pulls_scroll_back() {
        let mut window = Window::new(1000.0, 600.0);
        window.set_content_size(1000.0, 2600.0);
        window.scroll_to(0.0, 1800.0);

        window.set_content_size(1000.0, 1000.0);
        assert_eq!(window.scroll_y(), 400.0);
    }
}
