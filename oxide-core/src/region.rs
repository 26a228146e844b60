use winit::window::CursorIcon;

/// Region of a decorated frame for hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameRegion {
    /// The outer frame line.
    OuterBorder,
    /// The decoration band, outside every control.
    Decoration,
    /// The title strip (for dragging).
    TitleHandle,
    /// Minimize button.
    MinimizeButton,
    /// Close button.
    CloseButton,
    /// Client content.
    Content,
}

impl FrameRegion {
    /// Regions from innermost to outermost. The first one containing a point wins.
    pub const HIT_ORDER: [FrameRegion; 6] = [
        FrameRegion::Content,
        FrameRegion::MinimizeButton,
        FrameRegion::CloseButton,
        FrameRegion::TitleHandle,
        FrameRegion::Decoration,
        FrameRegion::OuterBorder,
    ];

    /// Check if this is one of the control buttons
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(self, FrameRegion::MinimizeButton | FrameRegion::CloseButton)
    }

    /// Cursor the host should show over this region.
    pub fn cursor(&self) -> CursorIcon {
        match self {
            FrameRegion::TitleHandle => CursorIcon::Move,
            FrameRegion::MinimizeButton | FrameRegion::CloseButton => CursorIcon::Pointer,
            FrameRegion::OuterBorder | FrameRegion::Decoration | FrameRegion::Content => {
                CursorIcon::Default
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_affordance() {
        assert_eq!(FrameRegion::TitleHandle.cursor(), CursorIcon::Move);
        assert_eq!(FrameRegion::CloseButton.cursor(), CursorIcon::Pointer);
        assert_eq!(FrameRegion::Content.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_buttons() {
        assert!(FrameRegion::MinimizeButton.is_button());
        assert!(!FrameRegion::TitleHandle.is_button());
    }
}
