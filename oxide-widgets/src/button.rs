use std::fmt;

use nalgebra::Point2;
use oxide_core::element::Element;
use oxide_core::geometry::Rect;
use oxide_core::host::FrameHost;
use oxide_core::input::PointerEvent;
use oxide_core::paint::DisplayList;
use oxide_core::update::Update;
use oxide_theme::border::BorderSpec;
use oxide_theme::font::FontSpec;
use oxide_theme::skin::Skin;
use vello::peniko::Color;

use crate::icon::ButtonGlyph;

/// Closure run when a button is pressed.
///
/// Errors are logged and otherwise ignored; they never keep the button from updating.
pub type ButtonAction = Box<dyn FnMut(&mut dyn FrameHost) -> anyhow::Result<()>>;

/// Colors and borders of a [ThemedButton], taken from a skin.
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Background while selected.
    pub selected: Color,
    /// Background while not selected.
    pub unselected: Color,
    /// Text and glyph color.
    pub foreground: Color,
    /// Label font.
    pub font: FontSpec,
    /// Border while hovered.
    pub hover_border: BorderSpec,
    /// Border while not hovered.
    pub default_border: BorderSpec,
}

impl ButtonStyle {
    /// Read the button style of a skin.
    pub fn from_skin(skin: &dyn Skin) -> Self {
        let metrics = skin.metrics();
        Self {
            selected: skin.button_background(true),
            unselected: skin.button_background(false),
            foreground: metrics.palette.button_text,
            font: metrics.fonts.button.clone(),
            hover_border: skin.button_hover_border(),
            default_border: skin.button_default_border(),
        }
    }
}

/// A control button drawn with skin colors.
///
/// Selection is the only state: it is set on press and cleared on release. Hovering only
/// swaps the border.
///
/// ### Theming
/// Styling the button requires the following skin values:
/// - `button_selected` - The background while pressed.
/// - `button_unselected` - The background otherwise.
/// - `button_hover` - The border while the pointer is over the button.
/// - `button_default` - The border otherwise.
pub struct ThemedButton {
    bounds: Rect,
    style: ButtonStyle,
    selected: bool,
    hovered: bool,
    background: Color,
    glyph: Option<ButtonGlyph>,
    action: Option<ButtonAction>,
}

impl ThemedButton {
    /// Create an unselected button styled by `skin`.
    pub fn new(skin: &dyn Skin) -> Self {
        let style = ButtonStyle::from_skin(skin);
        Self {
            bounds: Rect::default(),
            background: style.unselected,
            style,
            selected: false,
            hovered: false,
            glyph: None,
            action: None,
        }
    }

    /// Sets the glyph drawn inside the button.
    pub fn with_glyph(mut self, glyph: Option<ButtonGlyph>) -> Self {
        self.glyph = glyph;
        self
    }

    /// Sets the function to be called when the button is pressed.
    pub fn with_action(
        mut self,
        action: impl FnMut(&mut dyn FrameHost) -> anyhow::Result<()> + 'static,
    ) -> Self {
        self.set_action(action);
        self
    }

    /// Bind the function to be called when the button is pressed.
    pub fn set_action(&mut self, action: impl FnMut(&mut dyn FrameHost) -> anyhow::Result<()> + 'static) {
        self.action = Some(Box::new(action));
    }

    /// The bound action, if any.
    pub fn action(&self) -> Option<&ButtonAction> {
        self.action.as_ref()
    }

    /// Remove and return the bound action.
    pub fn take_action(&mut self) -> Option<ButtonAction> {
        self.action.take()
    }

    /// Select or deselect the button. The background follows immediately.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.background = self.background_for(selected);
    }

    /// Whether the button is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the pointer is over the button.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The current background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The current border.
    pub fn border(&self) -> BorderSpec {
        if self.hovered {
            self.style.hover_border
        } else {
            self.style.default_border
        }
    }

    /// The glyph drawn inside the button.
    pub fn glyph(&self) -> Option<&ButtonGlyph> {
        self.glyph.as_ref()
    }

    /// Replace the glyph.
    pub fn set_glyph(&mut self, glyph: Option<ButtonGlyph>) {
        self.glyph = glyph;
    }

    /// The style in use.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Take colors and borders from another skin, keeping the selection state.
    pub fn restyle(&mut self, skin: &dyn Skin) {
        self.style = ButtonStyle::from_skin(skin);
        self.background = self.background_for(self.selected);
    }

    /// Position the button relative to its parent.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// React to a pointer event routed to this button.
    pub fn handle_event(&mut self, event: &PointerEvent, host: &mut dyn FrameHost) -> Update {
        match event {
            PointerEvent::Enter { .. } => {
                self.hovered = true;
                Update::DRAW
            },
            PointerEvent::Exit => {
                self.hovered = false;
                Update::DRAW
            },
            PointerEvent::Down { .. } => {
                self.press(host);
                Update::DRAW
            },
            PointerEvent::Up { .. } | PointerEvent::FocusLost => {
                if self.selected {
                    self.set_selected(false);
                    Update::DRAW
                } else {
                    Update::empty()
                }
            },
            PointerEvent::Move { .. } => Update::empty(),
        }
    }

    /// Run the bound action, then select the button.
    ///
    /// The button ends up selected even if the action fails or panics.
    pub fn press(&mut self, host: &mut dyn FrameHost) {
        let _select = SelectOnDrop {
            selected: &mut self.selected,
            background: &mut self.background,
            color: self.style.selected,
        };

        match self.action.as_mut() {
            Some(action) => {
                if let Err(err) = action(host) {
                    log::warn!("Button action failed: {:#}", err);
                }
            },
            None => log::trace!("Button pressed without an action"),
        }
    }

    fn background_for(&self, selected: bool) -> Color {
        if selected {
            self.style.selected
        } else {
            self.style.unselected
        }
    }
}

struct SelectOnDrop<'a> {
    selected: &'a mut bool,
    background: &'a mut Color,
    color: Color,
}

impl Drop for SelectOnDrop<'_> {
    fn drop(&mut self) {
        *self.selected = true;
        *self.background = self.color;
    }
}

impl Element for ThemedButton {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, parent_origin: Point2<i32>, list: &mut DisplayList) {
        let rect = self.screen_bounds(parent_origin);
        list.fill(rect, self.background);
        list.border(rect, self.border());
        if let Some(glyph) = &self.glyph {
            list.glyph(rect, glyph.name.clone(), glyph.size);
        }
    }
}

impl fmt::Debug for ThemedButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemedButton")
            .field("bounds", &self.bounds)
            .field("selected", &self.selected)
            .field("hovered", &self.hovered)
            .field("glyph", &self.glyph)
            .field("action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    use oxide_core::host::{HostRequest, RecordingHost};
    use oxide_core::paint::PaintCommand;
    use oxide_theme::skin::default::DefaultSkin;
    use oxide_theme::skin::slate::SlateSkin;

    fn rgb(color: Color) -> (u8, u8, u8) {
        let rgba = color.to_rgba8();
        (rgba.r, rgba.g, rgba.b)
    }

    fn down() -> PointerEvent {
        PointerEvent::Down {
            position: Point2::new(0, 0),
        }
    }

    fn up() -> PointerEvent {
        PointerEvent::Up {
            position: Point2::new(0, 0),
        }
    }

    #[test]
    fn test_press_selects_and_release_deselects() {
        let skin = DefaultSkin::new();
        let mut button = ThemedButton::new(&skin);
        let mut host = RecordingHost::new();

        button.handle_event(&down(), &mut host);
        assert!(button.is_selected());
        assert_eq!(rgb(button.background()), rgb(skin.button_background(true)));

        button.handle_event(&up(), &mut host);
        assert!(!button.is_selected());
        assert_eq!(rgb(button.background()), rgb(skin.button_background(false)));
    }

    #[test]
    fn test_action_runs_once_per_press() {
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        let mut button = ThemedButton::new(&DefaultSkin::new()).with_action(move |host| {
            counter.set(counter.get() + 1);
            host.request_iconify();
            Ok(())
        });
        let mut host = RecordingHost::new();

        button.handle_event(&down(), &mut host);
        button.handle_event(&up(), &mut host);
        button.handle_event(&down(), &mut host);

        assert_eq!(presses.get(), 2);
        assert_eq!(host.count(&HostRequest::Iconify), 2);
    }

    #[test]
    fn test_hover_is_visual_only() {
        let skin = DefaultSkin::new();
        let mut button = ThemedButton::new(&skin);
        let mut host = RecordingHost::new();

        button.handle_event(&PointerEvent::Enter { primary_down: false }, &mut host);
        assert!(button.is_hovered());
        assert!(!button.is_selected());
        assert_eq!(button.border().width, 1);

        button.handle_event(&PointerEvent::Exit, &mut host);
        assert!(button.border().is_empty());
        assert!(host.requests().is_empty());
    }

    #[test]
    fn test_failing_action_still_selects() {
        let mut button = ThemedButton::new(&DefaultSkin::new())
            .with_action(|_| Err(anyhow::anyhow!("window manager went away")));

        button.handle_event(&down(), &mut RecordingHost::new());
        assert!(button.is_selected());
    }

    #[test]
    fn test_panicking_action_still_selects() {
        let mut button = ThemedButton::new(&DefaultSkin::new()).with_action(|_| panic!("boom"));
        let mut host = RecordingHost::new();

        let result = panic::catch_unwind(AssertUnwindSafe(|| button.press(&mut host)));

        assert!(result.is_err());
        assert!(button.is_selected());
    }

    #[test]
    fn test_set_selected_updates_background() {
        let skin = DefaultSkin::new();
        let mut button = ThemedButton::new(&skin);

        button.set_selected(true);
        assert_eq!(rgb(button.background()), rgb(skin.button_background(true)));
        button.set_selected(false);
        assert_eq!(rgb(button.background()), rgb(skin.button_background(false)));
    }

    #[test]
    fn test_restyle_keeps_selection() {
        let mut button = ThemedButton::new(&DefaultSkin::new());
        button.set_selected(true);

        let slate = SlateSkin::new();
        button.restyle(&slate);

        assert!(button.is_selected());
        assert_eq!(rgb(button.background()), rgb(slate.button_background(true)));
    }

    #[test]
    fn test_action_accessors() {
        let mut button = ThemedButton::new(&DefaultSkin::new());
        assert!(button.action().is_none());

        button.set_action(|_| Ok(()));
        assert!(button.action().is_some());
        assert!(button.take_action().is_some());
        assert!(button.action().is_none());
    }

    #[test]
    fn test_paint_in_screen_space() {
        let mut button = ThemedButton::new(&DefaultSkin::new()).with_glyph(Some(ButtonGlyph {
            name: "icons/close_icon_24x24.png".to_string(),
            size: 24,
        }));
        button.set_bounds(Rect::new(616, 6, 30, 30));

        let mut list = DisplayList::new();
        button.paint(Point2::new(294, 58), &mut list);

        match &list.commands()[0] {
            PaintCommand::Fill { rect, .. } => assert_eq!(*rect, Rect::new(910, 64, 30, 30)),
            other => panic!("expected fill, got {:?}", other),
        }
        assert!(matches!(&list.commands()[1], PaintCommand::Glyph { size: 24, .. }));
    }
}
