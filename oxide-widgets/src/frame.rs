//! # Decorated Frame
//!
//! A [Frame] ties a [FrameDecorationEngine] to the parts drawn on top of it: the
//! [DragHandle] title strip and the minimize and close [ThemedButton]s.
//!
//! The frame owns its [FrameHost] and talks to it for everything outside its own
//! rectangles: window title, window placement, cursor, iconify and dispose.
//!
//! ## Pointer Routing
//!
//! Events arrive in screen space through [Frame::handle_pointer]:
//!
//! - moves update which region is hovered, sending `Exit`/`Enter` to the parts involved
//! - a press captures the part under the pointer; moves and the release go to that part
//!   even when the pointer has left it
//! - focus loss, or the pointer coming back without the button held, drops the capture
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use oxide_core::host::RecordingHost;
//! use oxide_theme::metrics::FrameRole;
//! use oxide_theme::skin::default::DefaultSkin;
//! use oxide_widgets::frame::Frame;
//!
//! let mut frame = Frame::new(FrameRole::Parent, Arc::new(DefaultSkin::new()), RecordingHost::new()).unwrap();
//! frame.set_title("Inventory");
//! frame.center_in_viewport(1920, 1080);
//!
//! assert_eq!(frame.content_area().left, 640);
//! assert_eq!(frame.host().last_title(), Some("Inventory"));
//! ```

use std::fmt;
use std::sync::Arc;

use oxide_core::element::Element;
use oxide_core::engine::FrameDecorationEngine;
use oxide_core::geometry::{DerivedGeometry, Rect};
use oxide_core::host::FrameHost;
use oxide_core::input::PointerEvent;
use oxide_core::paint::DisplayList;
use oxide_core::region::FrameRegion;
use oxide_core::update::Update;
use oxide_theme::config::SkinSource;
use oxide_theme::error::SkinResult;
use oxide_theme::metrics::FrameRole;
use oxide_theme::registry::SkinRegistry;
use oxide_theme::skin::Skin;
use vello::Scene;
use winit::window::CursorIcon;

use crate::button::ThemedButton;
use crate::drag_handle::DragHandle;
use crate::icon::{DefaultIcons, GlyphKind, IconProvider};

/// A window frame with a custom title bar, minimize and close buttons.
pub struct Frame<H: FrameHost> {
    role: FrameRole,
    skin: Arc<dyn Skin>,
    engine: FrameDecorationEngine,
    title: String,
    handle: DragHandle,
    minimize: ThemedButton,
    close: ThemedButton,
    host: H,
    hovered: Option<FrameRegion>,
    captured: Option<FrameRegion>,
    cursor: CursorIcon,
}

impl<H: FrameHost> Frame<H> {
    /// Create a frame with the default content rectangle.
    ///
    /// Minimize asks the host to iconify and close asks it to dispose, until other actions
    /// are bound. Fails if the skin is invalid.
    pub fn new(role: FrameRole, skin: Arc<dyn Skin>, host: H) -> SkinResult<Self> {
        skin.validate()?;

        let icons = DefaultIcons;
        let engine = FrameDecorationEngine::new(role, skin.metrics());
        let minimize = ThemedButton::new(skin.as_ref())
            .with_glyph(icons.glyph(GlyphKind::Minimize, role))
            .with_action(|host| {
                host.request_iconify();
                Ok(())
            });
        let close = ThemedButton::new(skin.as_ref())
            .with_glyph(icons.glyph(GlyphKind::Close, role))
            .with_action(|host| {
                host.request_dispose();
                Ok(())
            });

        let mut frame = Self {
            role,
            handle: DragHandle::new(skin.as_ref(), role),
            skin,
            engine,
            title: String::new(),
            minimize,
            close,
            host,
            hovered: None,
            captured: None,
            cursor: CursorIcon::Default,
        };
        frame.layout_parts();
        frame.host.set_outer_bounds(frame.engine.geometry().outer_frame);
        Ok(frame)
    }

    /// Create a frame with the skin selected by `OXIDE_SKIN`, looked up in `registry`.
    ///
    /// Falls back to the default skin when the selection cannot be resolved.
    pub fn from_env(role: FrameRole, registry: &SkinRegistry, host: H) -> SkinResult<Self> {
        let skin = SkinSource::from_env_or_default().resolve_or_default(registry);
        Self::new(role, skin, host)
    }

    /// Replace the button glyphs.
    pub fn with_icons(mut self, icons: impl IconProvider) -> Self {
        self.minimize.set_glyph(icons.glyph(GlyphKind::Minimize, self.role));
        self.close.set_glyph(icons.glyph(GlyphKind::Close, self.role));
        self
    }

    /// Whether this is a parent or a child frame.
    pub fn role(&self) -> FrameRole {
        self.role
    }

    /// The skin in use.
    pub fn skin(&self) -> &Arc<dyn Skin> {
        &self.skin
    }

    /// The title as set, without padding.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the window title and the title strip label.
    pub fn set_title(&mut self, title: impl Into<String>) -> Update {
        self.title = title.into();
        self.host.set_window_title(&self.title);
        self.handle.set_title(&self.title);
        Update::TITLE | Update::DRAW
    }

    /// Place the content area at `left`/`top` with the given size, in screen space.
    pub fn set_bounds(&mut self, left: i32, top: i32, width: i32, height: i32) -> Update {
        let update = self.engine.set_bounds(Rect::new(left, top, width, height));
        if !update.is_empty() {
            self.layout_parts();
            self.host.set_outer_bounds(self.engine.geometry().outer_frame);
        }
        update
    }

    /// Place the content area at `bounds`, in screen space.
    pub fn set_bounds_rect(&mut self, bounds: Rect) -> Update {
        self.set_bounds(bounds.left, bounds.top, bounds.width, bounds.height)
    }

    /// The content area in screen space.
    pub fn content_area(&self) -> Rect {
        self.engine.content_rect()
    }

    /// The current geometry.
    pub fn geometry(&self) -> &DerivedGeometry {
        self.engine.geometry()
    }

    /// Center the content area (not the outer frame) in a viewport of the given size.
    pub fn center_in_viewport(&mut self, screen_width: i32, screen_height: i32) -> Update {
        let content = self.engine.content_rect();
        self.set_bounds(
            screen_width / 2 - content.width / 2,
            screen_height / 2 - content.height / 2,
            content.width,
            content.height,
        )
    }

    /// Switch to another skin. The content area keeps its position and size.
    ///
    /// An invalid skin is rejected and the current one stays in use.
    pub fn set_skin(&mut self, skin: Arc<dyn Skin>) -> SkinResult<Update> {
        if let Err(err) = skin.validate() {
            log::warn!("Rejected skin '{}', keeping '{}': {}", skin.name(), self.skin.name(), err);
            return Err(err);
        }

        let update = self.engine.set_metrics(skin.metrics());
        self.minimize.restyle(skin.as_ref());
        self.close.restyle(skin.as_ref());
        self.handle.restyle(skin.as_ref(), self.role);
        log::debug!("Frame skin changed from '{}' to '{}'", self.skin.name(), skin.name());
        self.skin = skin;

        if update.intersects(Update::LAYOUT | Update::MOVE) {
            self.layout_parts();
            self.host.set_outer_bounds(self.engine.geometry().outer_frame);
        }
        Ok(update | Update::DRAW)
    }

    /// Bind the minimize button.
    pub fn set_minimize_action(
        &mut self,
        action: impl FnMut(&mut dyn FrameHost) -> anyhow::Result<()> + 'static,
    ) {
        self.minimize.set_action(action);
    }

    /// Bind the close button.
    pub fn set_close_action(&mut self, action: impl FnMut(&mut dyn FrameHost) -> anyhow::Result<()> + 'static) {
        self.close.set_action(action);
    }

    /// The minimize button.
    pub fn minimize_button(&self) -> &ThemedButton {
        &self.minimize
    }

    /// The close button.
    pub fn close_button(&self) -> &ThemedButton {
        &self.close
    }

    /// The title strip.
    pub fn drag_handle(&self) -> &DragHandle {
        &self.handle
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give up the frame and return its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The region under the pointer, if any.
    pub fn hovered(&self) -> Option<FrameRegion> {
        self.hovered
    }

    /// Route a pointer event to the part it concerns.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Update {
        log::trace!("Frame pointer event {:?}", event);
        match event {
            PointerEvent::Down { position } => {
                let region = self.engine.geometry().hit_test(position);
                let mut update = self.hover(region);
                self.captured = region.filter(is_interactive);
                if let Some(part) = self.captured {
                    update |= self.dispatch(part, &event);
                }
                update
            },
            PointerEvent::Move { position } => {
                let mut update = Update::empty();
                if let Some(part) = self.captured {
                    update |= self.dispatch(part, &event);
                }
                update | self.hover(self.engine.geometry().hit_test(position))
            },
            PointerEvent::Up { position } => {
                let mut update = Update::empty();
                if let Some(part) = self.captured.take() {
                    update |= self.dispatch(part, &event);
                }
                update | self.hover(self.engine.geometry().hit_test(position))
            },
            PointerEvent::Enter { primary_down } => {
                if !primary_down && self.captured.is_some() {
                    log::debug!("Pointer came back without the button held, dropping capture");
                    self.release_capture()
                } else {
                    Update::empty()
                }
            },
            PointerEvent::Exit => self.hover(None),
            PointerEvent::FocusLost => self.release_capture(),
        }
    }

    /// Describe the frame as a display list in screen space.
    pub fn paint(&self) -> DisplayList {
        let geometry = self.engine.geometry();
        let pane_origin = geometry.decoration_origin();
        let mut list = DisplayList::new();

        list.fill(geometry.outer_frame, self.skin.frame_border_color());
        list.fill(
            geometry.screen_rect(FrameRegion::Decoration),
            self.skin.decoration_border_color(),
        );
        list.fill(geometry.content_screen_rect(), self.skin.content_background());

        self.handle.paint(pane_origin, &mut list);
        self.minimize.paint(pane_origin, &mut list);
        self.close.paint(pane_origin, &mut list);
        list
    }

    /// Encode the frame's shapes into a vello scene.
    pub fn render(&self, scene: &mut Scene) {
        self.paint().encode(scene);
    }

    fn layout_parts(&mut self) {
        let geometry = *self.engine.geometry();
        self.handle.set_bounds(geometry.title_handle);
        self.minimize.set_bounds(geometry.minimize_button);
        self.close.set_bounds(geometry.close_button);
    }

    fn dispatch(&mut self, region: FrameRegion, event: &PointerEvent) -> Update {
        match region {
            FrameRegion::TitleHandle => {
                let step = self.handle.handle_event(event, &mut self.host);
                match step.delta {
                    Some(delta) => {
                        let update = self.engine.translate(delta);
                        if update.contains(Update::MOVE) {
                            self.host.set_outer_bounds(self.engine.geometry().outer_frame);
                        }
                        step.update | update
                    },
                    None => step.update,
                }
            },
            FrameRegion::MinimizeButton => self.minimize.handle_event(event, &mut self.host),
            FrameRegion::CloseButton => self.close.handle_event(event, &mut self.host),
            FrameRegion::OuterBorder | FrameRegion::Decoration | FrameRegion::Content => Update::empty(),
        }
    }

    fn hover(&mut self, region: Option<FrameRegion>) -> Update {
        if region == self.hovered {
            return Update::empty();
        }

        let mut update = Update::empty();
        if let Some(old) = self.hovered.take() {
            update |= self.dispatch(old, &PointerEvent::Exit);
            if old == FrameRegion::TitleHandle && !self.handle.is_dragging() {
                self.cursor = CursorIcon::Default;
            }
        }
        if let Some(new) = region {
            let primary_down = self.captured.is_some();
            update |= self.dispatch(new, &PointerEvent::Enter { primary_down });
            if new == FrameRegion::TitleHandle {
                self.cursor = CursorIcon::Move;
            }
        }
        self.hovered = region;

        let wanted = region.map_or(CursorIcon::Default, |region| region.cursor());
        if wanted != self.cursor && !self.handle.is_dragging() {
            self.host.set_cursor(wanted);
            self.cursor = wanted;
            update |= Update::CURSOR;
        }
        update
    }

    fn release_capture(&mut self) -> Update {
        self.captured = None;
        let mut update = Update::empty();
        update |= self.handle.handle_event(&PointerEvent::FocusLost, &mut self.host).update;
        update |= self.minimize.handle_event(&PointerEvent::FocusLost, &mut self.host);
        update |= self.close.handle_event(&PointerEvent::FocusLost, &mut self.host);
        update
    }
}

fn is_interactive(region: &FrameRegion) -> bool {
    matches!(region, FrameRegion::TitleHandle) || region.is_button()
}

impl<H: FrameHost> fmt::Debug for Frame<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("role", &self.role)
            .field("skin", &self.skin.name())
            .field("title", &self.title)
            .field("content", &self.engine.content_rect())
            .field("hovered", &self.hovered)
            .field("captured", &self.captured)
            .finish()
    }
}
