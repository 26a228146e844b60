use vello::peniko::Color;

use crate::border::BorderSpec;
use crate::font::FontSpec;
use crate::metrics::{SkinFonts, SkinMetrics, SkinPalette};
use crate::skin::Skin;

/// A darker, more compact skin.
///
/// Thinner decoration band and shorter title bars than [super::default::DefaultSkin],
/// which makes it useful for dense child frames.
#[derive(Debug, Clone)]
pub struct SlateSkin {
    metrics: SkinMetrics,
}

impl SlateSkin {
    /// Create the slate skin.
    pub fn new() -> Self {
        let text = Color::from_rgb8(220, 220, 220);
        Self {
            metrics: SkinMetrics {
                decoration_border_width: 4,
                frame_border_width: 1,
                parent_title_bar_height: 24,
                child_title_bar_height: 16,
                palette: SkinPalette {
                    frame_border: Color::from_rgb8(20, 20, 24),
                    decoration_border: Color::from_rgb8(58, 64, 74),
                    content_background: Color::from_rgb8(40, 40, 44),
                    hover_border: Color::from_rgb8(100, 150, 255),
                    parent_title_text: text,
                    child_title_text: Color::from_rgb8(180, 180, 186),
                    button_text: text,
                    button_selected: Color::from_rgb8(58, 64, 74),
                    button_unselected: Color::from_rgb8(80, 88, 100),
                    control_text: text,
                    shade: Color::from_rgb8(50, 50, 56),
                },
                fonts: SkinFonts {
                    parent_title: FontSpec::bold("Sans", 16.0),
                    child_title: FontSpec::bold("Sans", 12.0),
                    button: FontSpec::bold("Sans", 14.0),
                    control: FontSpec::plain("Sans", 12.0),
                },
                button_hover_border: BorderSpec::line(Color::from_rgb8(100, 150, 255)),
                button_default_border: BorderSpec::NONE,
            },
        }
    }
}

impl Default for SlateSkin {
    fn default() -> Self {
        Self::new()
    }
}

impl Skin for SlateSkin {
    fn name(&self) -> &str {
        "slate"
    }

    fn metrics(&self) -> &SkinMetrics {
        &self.metrics
    }
}
