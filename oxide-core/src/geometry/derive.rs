use nalgebra::{Point2, Vector2};
use oxide_theme::metrics::{FrameRole, SkinMetrics, MAX_METRIC};

use super::{ContentRect, Rect};
use crate::region::FrameRegion;

/// The three numbers the derivation depends on, resolved for one frame role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameMetrics {
    /// Width of the decoration band (`d`).
    pub decoration_border_width: i32,
    /// Width of the outer frame line (`f`).
    pub frame_border_width: i32,
    /// Title-bar height for the role (`h`).
    pub title_bar_height: i32,
}

impl FrameMetrics {
    /// Resolve the metrics of a skin for the given role.
    pub fn from_skin(metrics: &SkinMetrics, role: FrameRole) -> Self {
        Self {
            decoration_border_width: metrics.decoration_border_width,
            frame_border_width: metrics.frame_border_width,
            title_bar_height: metrics.title_bar_height(role),
        }
    }

    /// Derive every decorative rectangle from the content rectangle.
    ///
    /// The content is [clamped](Rect::clamped) and each metric kept in `0..=MAX_METRIC`
    /// first, so no edge can overflow. Widths that would go negative on a narrow frame are
    /// clamped to zero.
    pub fn derive(&self, content: &ContentRect) -> DerivedGeometry {
        let d = self.decoration_border_width.clamp(0, MAX_METRIC);
        let f = self.frame_border_width.clamp(0, MAX_METRIC);
        let h = self.title_bar_height.clamp(0, MAX_METRIC);
        let ContentRect {
            left,
            top,
            width,
            height,
        } = content.clamped();

        DerivedGeometry {
            outer_frame: Rect::new(
                left - d - f,
                top - 2 * d - h - f,
                width + 2 * d + 2 * f,
                height + 3 * d + h + 2 * f,
            ),
            decoration_pane: Rect::new(f, f, width + 2 * d, height + 3 * d + h),
            title_handle: Rect::new(0, 0, (width - 2 * h).max(0), h + 2 * d),
            minimize_button: Rect::new(width - 2 * h, d, h, h),
            close_button: Rect::new(width + d - h, d, h, h),
            content_area: Rect::new(d, 2 * d + h, width, height),
        }
    }
}

/// Derive the geometry of a frame. Pure: equal inputs give equal outputs.
pub fn derive_geometry(content: &ContentRect, metrics: &SkinMetrics, role: FrameRole) -> DerivedGeometry {
    FrameMetrics::from_skin(metrics, role).derive(content)
}

/// Every rectangle of a decorated frame.
///
/// Each rectangle is relative to its visual parent:
///
/// - `outer_frame` is in screen space
/// - `decoration_pane` is relative to `outer_frame`
/// - the title handle, both buttons and `content_area` are relative to `decoration_pane`
///
/// Moving a frame therefore only changes `outer_frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedGeometry {
    /// The whole frame including the outer line, in screen space.
    pub outer_frame: Rect,
    /// The decoration band and everything inside it.
    pub decoration_pane: Rect,
    /// The draggable strip at the top left.
    pub title_handle: Rect,
    /// The minimize button.
    pub minimize_button: Rect,
    /// The close button.
    pub close_button: Rect,
    /// The client content.
    pub content_area: Rect,
}

impl DerivedGeometry {
    /// The same geometry with the frame moved by `delta`.
    pub fn translated(&self, delta: Vector2<i32>) -> Self {
        Self {
            outer_frame: self.outer_frame.translate(delta),
            ..*self
        }
    }

    /// Screen position of the decoration pane's origin.
    pub fn decoration_origin(&self) -> Point2<i32> {
        self.decoration_pane.offset_by(self.outer_frame.origin()).origin()
    }

    /// A region's rectangle in screen space.
    pub fn screen_rect(&self, region: FrameRegion) -> Rect {
        let origin = self.decoration_origin();
        match region {
            FrameRegion::OuterBorder => self.outer_frame,
            FrameRegion::Decoration => self.decoration_pane.offset_by(self.outer_frame.origin()),
            FrameRegion::TitleHandle => self.title_handle.offset_by(origin),
            FrameRegion::MinimizeButton => self.minimize_button.offset_by(origin),
            FrameRegion::CloseButton => self.close_button.offset_by(origin),
            FrameRegion::Content => self.content_area.offset_by(origin),
        }
    }

    /// The content area in screen space. Equals the content rectangle it was derived from.
    pub fn content_screen_rect(&self) -> Rect {
        self.screen_rect(FrameRegion::Content)
    }

    /// Find the innermost region under a screen point.
    pub fn hit_test(&self, point: Point2<i32>) -> Option<FrameRegion> {
        FrameRegion::HIT_ORDER
            .into_iter()
            .find(|region| self.screen_rect(*region).contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MAX_COORDINATE;

    const METRICS: FrameMetrics = FrameMetrics {
        decoration_border_width: 6,
        frame_border_width: 1,
        title_bar_height: 30,
    };

    #[test]
    fn test_default_frame_geometry() {
        let geometry = METRICS.derive(&Rect::new(300, 100, 640, 380));

        assert_eq!(geometry.outer_frame, Rect::new(293, 57, 654, 430));
        assert_eq!(geometry.decoration_pane, Rect::new(1, 1, 652, 428));
        assert_eq!(geometry.title_handle, Rect::new(0, 0, 580, 42));
        assert_eq!(geometry.minimize_button, Rect::new(580, 6, 30, 30));
        assert_eq!(geometry.close_button, Rect::new(616, 6, 30, 30));
        assert_eq!(geometry.content_area, Rect::new(6, 42, 640, 380));
    }

    #[test]
    fn test_content_round_trip() {
        let content = Rect::new(-40, 17, 200, 61);
        assert_eq!(METRICS.derive(&content).content_screen_rect(), content);
    }

    #[test]
    fn test_narrow_frame_clamps_title_handle() {
        // W = 40 is narrower than both buttons (2h = 60)
        let geometry = METRICS.derive(&Rect::new(0, 0, 40, 10));
        assert_eq!(geometry.title_handle.width, 0);
        assert_eq!(geometry.minimize_button, Rect::new(-20, 6, 30, 30));
        assert_eq!(geometry.close_button, Rect::new(16, 6, 30, 30));
    }

    #[test]
    fn test_extreme_content_does_not_overflow() {
        let geometry = METRICS.derive(&Rect::new(0, 0, i32::MAX, 100));
        assert_eq!(geometry.content_area.width, MAX_COORDINATE);
        assert_eq!(geometry.outer_frame.width, MAX_COORDINATE + 14);

        let geometry = METRICS.derive(&Rect::new(i32::MIN, i32::MIN, 10, 10));
        assert_eq!(geometry.outer_frame.left, -MAX_COORDINATE - 7);
        assert_eq!(geometry.outer_frame.top, -MAX_COORDINATE - 43);
    }

    #[test]
    fn test_oversized_metrics_are_capped() {
        let metrics = FrameMetrics {
            decoration_border_width: i32::MAX,
            frame_border_width: i32::MAX,
            title_bar_height: i32::MAX,
        };
        let geometry = metrics.derive(&Rect::new(0, 0, 10, 10));
        assert_eq!(geometry.decoration_pane.left, MAX_METRIC);
        assert_eq!(geometry.content_area.top, 3 * MAX_METRIC);
    }

    #[test]
    fn test_negative_content_extent_is_zero() {
        let geometry = METRICS.derive(&Rect::new(10, 10, -5, -5));
        assert_eq!(geometry.content_area, Rect::new(6, 42, 0, 0));
        assert_eq!(geometry.outer_frame.width, 14);
    }

    #[test]
    fn test_hit_test_regions() {
        let geometry = METRICS.derive(&Rect::new(300, 100, 640, 380));

        assert_eq!(geometry.hit_test(Point2::new(400, 200)), Some(FrameRegion::Content));
        assert_eq!(geometry.hit_test(Point2::new(310, 70)), Some(FrameRegion::TitleHandle));
        // minimize starts at 294 + 580, 58 + 6
        assert_eq!(geometry.hit_test(Point2::new(874, 64)), Some(FrameRegion::MinimizeButton));
        assert_eq!(geometry.hit_test(Point2::new(910, 64)), Some(FrameRegion::CloseButton));
        // gap between the two buttons
        assert_eq!(geometry.hit_test(Point2::new(906, 64)), Some(FrameRegion::Decoration));
        assert_eq!(geometry.hit_test(Point2::new(293, 57)), Some(FrameRegion::OuterBorder));
        assert_eq!(geometry.hit_test(Point2::new(292, 57)), None);
    }
}
