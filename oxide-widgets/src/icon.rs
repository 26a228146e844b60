use oxide_theme::metrics::FrameRole;

/// Which control a glyph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    /// The minimize button.
    Minimize,
    /// The close button.
    Close,
}

impl GlyphKind {
    fn stem(&self) -> &'static str {
        match self {
            GlyphKind::Minimize => "minimize",
            GlyphKind::Close => "close",
        }
    }
}

/// An icon placed inside a control button. The image itself is opaque to frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonGlyph {
    /// Resource name the host loads the image from.
    pub name: String,
    /// Edge length of the square image.
    pub size: u32,
}

/// Supplies glyphs for the control buttons.
pub trait IconProvider {
    /// The glyph for a control of a frame with the given role.
    /// `None` leaves the button blank.
    fn glyph(&self, kind: GlyphKind, role: FrameRole) -> Option<ButtonGlyph>;
}

/// The bundled icon set: 24×24 images for parent frames and 18×18 for child frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIcons;

impl DefaultIcons {
    /// Edge length of the icons for a frame role.
    pub fn size_for(role: FrameRole) -> u32 {
        match role {
            FrameRole::Parent => 24,
            FrameRole::Child => 18,
        }
    }
}

impl IconProvider for DefaultIcons {
    fn glyph(&self, kind: GlyphKind, role: FrameRole) -> Option<ButtonGlyph> {
        let size = Self::size_for(role);
        Some(ButtonGlyph {
            name: format!("icons/{}_icon_{}x{}.png", kind.stem(), size, size),
            size,
        })
    }
}

/// A provider without icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn glyph(&self, _kind: GlyphKind, _role: FrameRole) -> Option<ButtonGlyph> {
        None
    }
}
