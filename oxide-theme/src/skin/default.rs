use vello::peniko::Color;

use crate::border::BorderSpec;
use crate::font::FontSpec;
use crate::metrics::{SkinFonts, SkinMetrics, SkinPalette};
use crate::skin::Skin;

/// The default Oxide skin.
///
/// Steel-blue decoration band with a dark one pixel frame line, chosen to sit next to
/// metal-style form controls without clashing.
#[derive(Debug, Clone)]
pub struct DefaultSkin {
    metrics: SkinMetrics,
}

impl DefaultSkin {
    /// Create the default skin.
    pub fn new() -> Self {
        let white = Color::from_rgb8(255, 255, 255);
        Self {
            metrics: SkinMetrics {
                decoration_border_width: 6,
                frame_border_width: 1,
                parent_title_bar_height: 30,
                child_title_bar_height: 18,
                palette: SkinPalette {
                    frame_border: Color::from_rgb8(51, 51, 51),
                    decoration_border: Color::from_rgb8(122, 138, 153),
                    content_background: Color::from_rgb8(238, 238, 238),
                    hover_border: white,
                    parent_title_text: white,
                    child_title_text: white,
                    button_text: white,
                    button_selected: Color::from_rgb8(122, 138, 153),
                    button_unselected: Color::from_rgb8(163, 184, 204),
                    control_text: Color::from_rgb8(51, 51, 51),
                    shade: Color::from_rgb8(219, 229, 239),
                },
                fonts: SkinFonts {
                    parent_title: FontSpec::bold("Monospaced", 22.0),
                    child_title: FontSpec::bold("Monospaced", 18.0),
                    button: FontSpec::bold("Monospaced", 20.0),
                    control: FontSpec::plain("Monospaced", 13.0),
                },
                button_hover_border: BorderSpec::line(white),
                button_default_border: BorderSpec::NONE,
            },
        }
    }
}

impl Default for DefaultSkin {
    fn default() -> Self {
        Self::new()
    }
}

impl Skin for DefaultSkin {
    fn name(&self) -> &str {
        "default"
    }

    fn metrics(&self) -> &SkinMetrics {
        &self.metrics
    }
}
