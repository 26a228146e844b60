//! # Pointer Input
//!
//! Frames and their parts react to [PointerEvent]s in screen coordinates. A host running on
//! winit can produce them with a [PointerTranslator].

use nalgebra::{Point2, Vector2};
use winit::event::{ElementState, MouseButton, WindowEvent};

/// A pointer event delivered to a frame, with positions in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered. `primary_down` tells whether the primary button is held.
    Enter {
        /// Whether the primary button was already down when entering.
        primary_down: bool,
    },
    /// The pointer left.
    Exit,
    /// The primary button was pressed.
    Down {
        /// Screen position.
        position: Point2<i32>,
    },
    /// The pointer moved.
    Move {
        /// Screen position.
        position: Point2<i32>,
    },
    /// The primary button was released.
    Up {
        /// Screen position.
        position: Point2<i32>,
    },
    /// The window lost focus. Any press in progress will not see its release.
    FocusLost,
}

impl PointerEvent {
    /// The screen position carried by the event, if any.
    pub fn position(&self) -> Option<Point2<i32>> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => Some(*position),
            PointerEvent::Enter { .. } | PointerEvent::Exit | PointerEvent::FocusLost => None,
        }
    }
}

/// Turns winit window events into [PointerEvent]s.
///
/// winit reports cursor positions relative to the window, so the translator tracks the
/// window's screen origin. Keep it current with [PointerTranslator::set_window_origin] or by
/// feeding it the `Moved` events of the window.
#[derive(Debug, Clone)]
pub struct PointerTranslator {
    window_origin: Point2<i32>,
    cursor: Option<Point2<i32>>,
    primary_down: bool,
}

impl PointerTranslator {
    /// Create a translator for a window at the given screen origin.
    pub fn new(window_origin: Point2<i32>) -> Self {
        Self {
            window_origin,
            cursor: None,
            primary_down: false,
        }
    }

    /// Update the screen origin of the window.
    pub fn set_window_origin(&mut self, origin: Point2<i32>) {
        self.window_origin = origin;
    }

    /// The screen origin of the window.
    pub fn window_origin(&self) -> Point2<i32> {
        self.window_origin
    }

    /// Whether the primary button is currently held.
    pub fn primary_down(&self) -> bool {
        self.primary_down
    }

    /// Translate a window event. Events that carry no pointer meaning give `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::Moved(position) => {
                self.window_origin = Point2::new(position.x, position.y);
                None
            },
            WindowEvent::CursorEntered { .. } => Some(PointerEvent::Enter {
                primary_down: self.primary_down,
            }),
            WindowEvent::CursorLeft { .. } => Some(PointerEvent::Exit),
            WindowEvent::CursorMoved { position, .. } => {
                let local = Point2::new(position.x.round() as i32, position.y.round() as i32);
                self.cursor = Some(local);
                Some(PointerEvent::Move {
                    position: self.to_screen(local),
                })
            },
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let Some(local) = self.cursor else {
                    log::trace!("Ignoring mouse {:?} before any cursor position", state);
                    return None;
                };
                let position = self.to_screen(local);
                match state {
                    ElementState::Pressed => {
                        self.primary_down = true;
                        Some(PointerEvent::Down { position })
                    },
                    ElementState::Released => {
                        self.primary_down = false;
                        Some(PointerEvent::Up { position })
                    },
                }
            },
            WindowEvent::Focused(false) => {
                self.primary_down = false;
                Some(PointerEvent::FocusLost)
            },
            _ => None,
        }
    }

    fn to_screen(&self, local: Point2<i32>) -> Point2<i32> {
        self.window_origin + Vector2::new(local.x, local.y)
    }
}

impl Default for PointerTranslator {
    fn default() -> Self {
        Self::new(Point2::origin())
    }
}
