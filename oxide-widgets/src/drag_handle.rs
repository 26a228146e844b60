//! # Drag Handle
//!
//! The title strip of a frame. Pressing it starts a [DragSession]; every move while the
//! session lasts yields the distance travelled since the previous move, which the frame
//! applies to its content rectangle.
//!
//! A session ends on release. It is also abandoned when the window loses focus, or when the
//! pointer comes back without the button held, since the release was then delivered
//! somewhere else.

use nalgebra::{Point2, Vector2};
use oxide_core::element::Element;
use oxide_core::geometry::Rect;
use oxide_core::host::FrameHost;
use oxide_core::input::PointerEvent;
use oxide_core::paint::DisplayList;
use oxide_core::update::Update;
use oxide_theme::font::FontSpec;
use oxide_theme::metrics::FrameRole;
use oxide_theme::skin::Skin;
use vello::peniko::Color;
use winit::window::CursorIcon;

/// An active drag, anchored at the last seen screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    anchor: Point2<i32>,
}

impl DragSession {
    /// Start a session at `anchor`.
    pub fn new(anchor: Point2<i32>) -> Self {
        Self { anchor }
    }

    /// The screen position the next delta is measured from.
    pub fn anchor(&self) -> Point2<i32> {
        self.anchor
    }

    /// Distance from the anchor to `position`. The anchor moves to `position`.
    pub fn advance(&mut self, position: Point2<i32>) -> Vector2<i32> {
        let delta = Vector2::new(
            position.x.saturating_sub(self.anchor.x),
            position.y.saturating_sub(self.anchor.y),
        );
        self.anchor = position;
        delta
    }
}

/// What a pointer event did to a [DragHandle].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragStep {
    /// What needs refreshing.
    pub update: Update,
    /// How far the frame should move.
    pub delta: Option<Vector2<i32>>,
}

impl DragStep {
    fn update(update: Update) -> Self {
        Self {
            update,
            delta: None,
        }
    }
}

/// The draggable title strip of a frame, showing the title.
#[derive(Debug, Clone)]
pub struct DragHandle {
    bounds: Rect,
    label: String,
    font: FontSpec,
    color: Color,
    session: Option<DragSession>,
}

impl DragHandle {
    /// Create a handle with an empty title, styled for `role`.
    pub fn new(skin: &dyn Skin, role: FrameRole) -> Self {
        Self {
            bounds: Rect::default(),
            label: String::new(),
            font: skin.title_font(role).clone(),
            color: skin.title_text_color(role),
            session: None,
        }
    }

    /// Show `title`. The label gets one leading space of padding.
    pub fn set_title(&mut self, title: &str) {
        self.label = format!(" {}", title);
    }

    /// The label as drawn.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label font.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Label color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Take font and color from another skin.
    pub fn restyle(&mut self, skin: &dyn Skin, role: FrameRole) {
        self.font = skin.title_font(role).clone();
        self.color = skin.title_text_color(role);
    }

    /// Position the handle relative to its parent.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the active session without moving.
    pub fn abandon(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Abandoned drag anchored at {:?}", session.anchor());
        }
    }

    /// React to a pointer event routed to this handle.
    pub fn handle_event(&mut self, event: &PointerEvent, host: &mut dyn FrameHost) -> DragStep {
        match event {
            PointerEvent::Enter { primary_down } => {
                if !primary_down {
                    self.abandon();
                }
                host.set_cursor(CursorIcon::Move);
                DragStep::update(Update::CURSOR)
            },
            PointerEvent::Exit => {
                if !self.is_dragging() {
                    host.set_cursor(CursorIcon::Default);
                    return DragStep::update(Update::CURSOR);
                }
                DragStep::default()
            },
            PointerEvent::Down { position } => {
                log::debug!("Drag started at {:?}", position);
                self.session = Some(DragSession::new(*position));
                DragStep::default()
            },
            PointerEvent::Move { position } => match self.session.as_mut() {
                Some(session) => {
                    let delta = session.advance(*position);
                    log::trace!("Drag moved by ({}, {})", delta.x, delta.y);
                    DragStep {
                        update: Update::MOVE | Update::DRAW,
                        delta: Some(delta),
                    }
                },
                None => DragStep::default(),
            },
            PointerEvent::Up { position } => {
                if self.session.take().is_some() {
                    log::debug!("Drag ended at {:?}", position);
                }
                DragStep::default()
            },
            PointerEvent::FocusLost => {
                self.abandon();
                DragStep::default()
            },
        }
    }
}

impl Element for DragHandle {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, parent_origin: Point2<i32>, list: &mut DisplayList) {
        list.text(
            self.screen_bounds(parent_origin),
            self.label.clone(),
            self.font.clone(),
            self.color,
        );
    }
}
