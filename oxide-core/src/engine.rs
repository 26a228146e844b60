//! # Frame Decoration Engine
//!
//! Owns the content rectangle of one frame and keeps the derived geometry in step with it.
//!
//! There are two ways the geometry changes:
//!
//! - **Translation** ([FrameDecorationEngine::translate]): only the outer frame moves, every
//!   interior rectangle is relative to its parent and stays as it is.
//! - **Everything else** ([FrameDecorationEngine::set_bounds], [FrameDecorationEngine::set_metrics]):
//!   the whole geometry is derived again.
//!
//! Both paths finish before returning, so a renderer never sees a content rectangle and a
//! geometry that disagree.

use nalgebra::Vector2;
use oxide_theme::metrics::{FrameRole, SkinMetrics};

use crate::geometry::{ContentRect, DerivedGeometry, FrameMetrics, Rect};
use crate::update::Update;

/// Keeps a frame's [DerivedGeometry] consistent with its [ContentRect].
#[derive(Debug, Clone)]
pub struct FrameDecorationEngine {
    role: FrameRole,
    content: ContentRect,
    metrics: FrameMetrics,
    geometry: DerivedGeometry,
}

impl FrameDecorationEngine {
    /// Content rectangle of a newly created frame.
    pub const DEFAULT_CONTENT: ContentRect = Rect::new(300, 100, 640, 380);

    /// Create an engine with the default content rectangle.
    pub fn new(role: FrameRole, metrics: &SkinMetrics) -> Self {
        Self::with_content(role, metrics, Self::DEFAULT_CONTENT)
    }

    /// Create an engine with the given content rectangle.
    pub fn with_content(role: FrameRole, metrics: &SkinMetrics, content: ContentRect) -> Self {
        let metrics = FrameMetrics::from_skin(metrics, role);
        let content = clamp_content(content);
        Self {
            role,
            content,
            metrics,
            geometry: metrics.derive(&content),
        }
    }

    /// The frame role the title-bar height is resolved for.
    pub fn role(&self) -> FrameRole {
        self.role
    }

    /// The content rectangle in screen space.
    pub fn content_rect(&self) -> ContentRect {
        self.content
    }

    /// The metrics currently in effect.
    pub fn metrics(&self) -> FrameMetrics {
        self.metrics
    }

    /// The current derived geometry.
    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    /// Replace the content rectangle and derive the geometry again.
    pub fn set_bounds(&mut self, bounds: ContentRect) -> Update {
        let bounds = clamp_content(bounds);
        if bounds == self.content {
            return Update::empty();
        }

        let mut update = Update::LAYOUT | Update::DRAW;
        if bounds.origin() != self.content.origin() {
            update |= Update::MOVE;
        }

        self.content = bounds;
        self.recompute();
        update
    }

    /// Move the content rectangle by `delta`.
    ///
    /// Only the outer frame is repositioned. The move stops at
    /// [MAX_COORDINATE](crate::geometry::MAX_COORDINATE).
    pub fn translate(&mut self, delta: Vector2<i32>) -> Update {
        let moved = self.content.translate(delta).clamped();
        let applied = moved.origin() - self.content.origin();
        if applied == Vector2::zeros() {
            return Update::empty();
        }

        self.content = moved;
        self.geometry = self.geometry.translated(applied);
        debug_assert_eq!(self.geometry, self.metrics.derive(&self.content));

        log::trace!("Translated frame by ({}, {})", applied.x, applied.y);
        Update::MOVE | Update::DRAW
    }

    /// Adopt new skin metrics. The content rectangle is left untouched.
    pub fn set_metrics(&mut self, metrics: &SkinMetrics) -> Update {
        let metrics = FrameMetrics::from_skin(metrics, self.role);
        if metrics == self.metrics {
            return Update::DRAW;
        }

        self.metrics = metrics;
        let outer_before = self.geometry.outer_frame;
        self.recompute();

        let mut update = Update::LAYOUT | Update::DRAW;
        if self.geometry.outer_frame.origin() != outer_before.origin() {
            update |= Update::MOVE;
        }
        update
    }

    fn recompute(&mut self) {
        self.geometry = self.metrics.derive(&self.content);
        log::debug!(
            "Derived frame geometry for {:?} content {:?}: outer {:?}",
            self.role,
            self.content,
            self.geometry.outer_frame
        );
    }
}

fn clamp_content(content: ContentRect) -> ContentRect {
    let clamped = content.clamped();
    if clamped != content {
        log::warn!("Content rectangle {:?} out of range, clamped to {:?}", content, clamped);
    }
    clamped
}
