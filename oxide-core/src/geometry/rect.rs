use nalgebra::{Point2, Vector2};

/// An axis-aligned rectangle in integer pixels.
///
/// Whether the position is in screen space or relative to a parent depends on where
/// the rectangle comes from; see [super::DerivedGeometry].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X of the top-left corner.
    pub left: i32,
    /// Y of the top-left corner.
    pub top: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

/// The content area of a frame in screen space: the one mutable input of the geometry.
pub type ContentRect = Rect;

/// Largest coordinate or extent a [ContentRect] may have, in either direction.
///
/// Keeps every derived edge well inside `i32`.
pub const MAX_COORDINATE: i32 = 1 << 24;

impl Rect {
    /// Create a rectangle.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: Point2<i32>, size: Vector2<i32>) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point2<i32> {
        Point2::new(self.left, self.top)
    }

    /// Width and height.
    pub fn size(&self) -> Vector2<i32> {
        Vector2::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// The same rectangle moved by `delta`. Saturates at the edges of `i32`.
    pub fn translate(&self, delta: Vector2<i32>) -> Self {
        Self::new(
            self.left.saturating_add(delta.x),
            self.top.saturating_add(delta.y),
            self.width,
            self.height,
        )
    }

    /// Convert a rectangle relative to a parent into the parent's coordinate space.
    pub fn offset_by(&self, parent_origin: Point2<i32>) -> Self {
        self.translate(parent_origin.coords)
    }

    /// The same rectangle with extents in `0..=MAX_COORDINATE` and the origin within
    /// `MAX_COORDINATE` of zero.
    pub fn clamped(&self) -> Self {
        Self::new(
            self.left.clamp(-MAX_COORDINATE, MAX_COORDINATE),
            self.top.clamp(-MAX_COORDINATE, MAX_COORDINATE),
            self.width.clamp(0, MAX_COORDINATE),
            self.height.clamp(0, MAX_COORDINATE),
        )
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `point` lies inside. The right and bottom edges are exclusive.
    pub fn contains(&self, point: Point2<i32>) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((left, top, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10, 20, 30, 40);
        assert!(rect.contains(Point2::new(10, 20)));
        assert!(rect.contains(Point2::new(39, 59)));
        assert!(!rect.contains(Point2::new(40, 20)));
        assert!(!rect.contains(Point2::new(10, 60)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(0, 0, 0, 10);
        assert!(rect.is_empty());
        assert!(!rect.contains(Point2::new(0, 0)));
    }

    #[test]
    fn test_offset_by_parent_origin() {
        // content of the default parent frame, placed at the pane's screen origin
        let local = Rect::new(6, 42, 640, 380);
        assert_eq!(local.offset_by(Point2::new(294, 58)), Rect::new(300, 100, 640, 380));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Rect::new(1, 2, -5, 7).clamped(), Rect::new(1, 2, 0, 7));
        assert_eq!(
            Rect::new(i32::MIN, i32::MAX, i32::MAX, 7).clamped(),
            Rect::new(-MAX_COORDINATE, MAX_COORDINATE, MAX_COORDINATE, 7)
        );
    }

    #[test]
    fn test_translate_saturates() {
        let rect = Rect::new(i32::MAX - 5, i32::MIN + 5, 10, 10);
        let moved = rect.translate(Vector2::new(20, -20));
        assert_eq!(moved.origin(), Point2::new(i32::MAX, i32::MIN));
        assert_eq!(moved.right(), i32::MAX);
    }
}
