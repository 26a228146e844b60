//! # Display List
//!
//! Frames describe what to draw as a flat list of [PaintCommand]s in screen space.
//! A renderer can walk the list itself or encode the shapes into a vello [Scene].
//!
//! Text and glyphs are only described here: the host owns fonts and icon images.

use oxide_theme::border::BorderSpec;
use oxide_theme::font::FontSpec;
use vello::kurbo::{Affine, Stroke};
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::geometry::Rect;

/// A single drawing instruction.
#[derive(Debug, Clone)]
pub enum PaintCommand {
    /// Fill a rectangle.
    Fill {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Draw a border inside a rectangle.
    Border {
        /// Outer edge of the border.
        rect: Rect,
        /// Color and width.
        border: BorderSpec,
    },
    /// Draw a line of text, vertically centered in `rect`.
    Text {
        /// Area the text is laid out in.
        rect: Rect,
        /// The text.
        text: String,
        /// Font to use.
        font: FontSpec,
        /// Text color.
        color: Color,
    },
    /// Draw an icon, centered in `rect`.
    Glyph {
        /// Area of the owning control.
        rect: Rect,
        /// Icon resource name.
        name: String,
        /// Icon edge length in pixels.
        size: u32,
    },
}

/// An ordered list of [PaintCommand]s. Later commands paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<PaintCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: PaintCommand) {
        self.commands.push(command);
    }

    /// Append a fill.
    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.push(PaintCommand::Fill { rect, color });
    }

    /// Append a border. Empty borders are skipped.
    pub fn border(&mut self, rect: Rect, border: BorderSpec) {
        if !border.is_empty() {
            self.push(PaintCommand::Border { rect, border });
        }
    }

    /// Append a line of text.
    pub fn text(&mut self, rect: Rect, text: impl Into<String>, font: FontSpec, color: Color) {
        self.push(PaintCommand::Text {
            rect,
            text: text.into(),
            font,
            color,
        });
    }

    /// Append an icon.
    pub fn glyph(&mut self, rect: Rect, name: impl Into<String>, size: u32) {
        self.push(PaintCommand::Glyph {
            rect,
            name: name.into(),
            size,
        });
    }

    /// The commands in paint order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Encode the fills and borders into a vello scene.
    ///
    /// Text and glyphs are skipped; the host draws them with its own font and icon stack.
    pub fn encode(&self, scene: &mut Scene) {
        for command in &self.commands {
            match command {
                PaintCommand::Fill { rect, color } => {
                    scene.fill(
                        Fill::NonZero,
                        Affine::IDENTITY,
                        &Brush::Solid(*color),
                        None,
                        &to_kurbo(rect),
                    );
                },
                PaintCommand::Border { rect, border } => {
                    // Strokes are centered on the path, so inset by half the width.
                    let half = border.width as f64 / 2.0;
                    let path = to_kurbo(rect).inset(-half);
                    scene.stroke(
                        &Stroke::new(border.width as f64),
                        Affine::IDENTITY,
                        &Brush::Solid(border.color),
                        None,
                        &path,
                    );
                },
                PaintCommand::Text { text, .. } => {
                    log::trace!("Skipping text '{}' while encoding scene", text);
                },
                PaintCommand::Glyph { name, .. } => {
                    log::trace!("Skipping glyph '{}' while encoding scene", name);
                },
            }
        }
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a PaintCommand;
    type IntoIter = std::slice::Iter<'a, PaintCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

fn to_kurbo(rect: &Rect) -> vello::kurbo::Rect {
    vello::kurbo::Rect::new(
        rect.left as f64,
        rect.top as f64,
        rect.right() as f64,
        rect.bottom() as f64,
    )
}
