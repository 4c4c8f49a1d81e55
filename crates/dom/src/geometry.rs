//! Rectangle type shared by layout boxes and viewport-relative reads.

/// A rectangle in CSS pixels.
///
/// Layout boxes stored on the [`Document`](crate::Document) use
/// document-absolute coordinates; [`Document::bounding_client_rect`]
/// translates them into viewport-relative ones.
///
/// [`Document::bounding_client_rect`]: crate::Document::bounding_client_rect
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The rect shifted by the given offsets.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_translated() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let moved = rect.translated(-10.0, 5.0);
        assert_eq!(moved, Rect::new(0.0, 25.0, 100.0, 50.0));
    }
}
