use nalgebra::Point2;

use crate::geometry::Rect;
use crate::paint::DisplayList;

/// A visual part of a frame that can paint itself and be hit by the pointer.
///
/// Bounds are relative to the parent; painting gets the parent's screen origin.
pub trait Element {
    /// Bounds relative to the parent element.
    fn bounds(&self) -> Rect;

    /// Paint into `list` in screen space.
    fn paint(&self, parent_origin: Point2<i32>, list: &mut DisplayList);

    /// Whether a point relative to the parent hits this element.
    fn hit_test(&self, point: Point2<i32>) -> bool {
        self.bounds().contains(point)
    }

    /// Bounds in screen space.
    fn screen_bounds(&self, parent_origin: Point2<i32>) -> Rect {
        self.bounds().offset_by(parent_origin)
    }
}
