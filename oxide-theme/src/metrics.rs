use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::border::BorderSpec;
use crate::error::{SkinError, SkinResult};
use crate::font::FontSpec;

/// The role a frame is constructed with.
///
/// Parent frames use the larger title bar and title font, child frames the smaller ones.
/// A frame keeps its role for its whole lifetime; swapping skins never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameRole {
    /// A top-level application frame.
    #[default]
    Parent,
    /// A secondary frame owned by a parent.
    Child,
}

impl FrameRole {
    /// Whether this is the parent role.
    pub fn is_parent(&self) -> bool {
        matches!(self, FrameRole::Parent)
    }
}

/// Colors supplied by a skin.
#[derive(Debug, Clone, Copy)]
pub struct SkinPalette {
    /// Outermost one-line frame border.
    pub frame_border: Color,
    /// The decoration band around the content area, including the title strip.
    pub decoration_border: Color,
    /// Background of the content area.
    pub content_background: Color,
    /// Border color used while the pointer hovers a control.
    pub hover_border: Color,
    /// Title text on parent frames.
    pub parent_title_text: Color,
    /// Title text on child frames.
    pub child_title_text: Color,
    /// Text drawn on title-bar buttons.
    pub button_text: Color,
    /// Button background while selected (pressed).
    pub button_selected: Color,
    /// Button background while unselected.
    pub button_unselected: Color,
    /// Text color for generic form controls placed in the content area.
    pub control_text: Color,
    /// Secondary shade for panels placed in the content area.
    pub shade: Color,
}

/// Fonts supplied by a skin.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinFonts {
    /// Title font on parent frames.
    pub parent_title: FontSpec,
    /// Title font on child frames.
    pub child_title: FontSpec,
    /// Title-bar button font.
    pub button: FontSpec,
    /// Font for generic form controls placed in the content area.
    pub control: FontSpec,
}

/// Largest border width or title-bar height a skin may declare.
pub const MAX_METRIC: i32 = 4096;

/// The complete, immutable value set of a skin.
#[derive(Debug, Clone)]
pub struct SkinMetrics {
    /// Width of the decoration band around the content area.
    pub decoration_border_width: i32,
    /// Width of the outer frame line around the decoration band.
    pub frame_border_width: i32,
    /// Title-bar height for parent frames.
    pub parent_title_bar_height: i32,
    /// Title-bar height for child frames.
    pub child_title_bar_height: i32,
    /// Colors.
    pub palette: SkinPalette,
    /// Fonts.
    pub fonts: SkinFonts,
    /// Border drawn around a button while hovered.
    pub button_hover_border: BorderSpec,
    /// Border drawn around a button otherwise.
    pub button_default_border: BorderSpec,
}

impl SkinMetrics {
    /// Title-bar height for the given role.
    pub fn title_bar_height(&self, role: FrameRole) -> i32 {
        match role {
            FrameRole::Parent => self.parent_title_bar_height,
            FrameRole::Child => self.child_title_bar_height,
        }
    }

    /// Title font for the given role.
    pub fn title_font(&self, role: FrameRole) -> &FontSpec {
        match role {
            FrameRole::Parent => &self.fonts.parent_title,
            FrameRole::Child => &self.fonts.child_title,
        }
    }

    /// Title text color for the given role.
    pub fn title_text_color(&self, role: FrameRole) -> Color {
        match role {
            FrameRole::Parent => self.palette.parent_title_text,
            FrameRole::Child => self.palette.child_title_text,
        }
    }

    /// Check the numeric invariants every skin must satisfy.
    ///
    /// Border widths must be `>= 0` and both title-bar heights `> 0`. Nothing may exceed
    /// [MAX_METRIC].
    pub fn validate(&self, skin: &str) -> SkinResult<()> {
        let non_negative = [
            ("decoration_border_width", self.decoration_border_width),
            ("frame_border_width", self.frame_border_width),
            ("button_hover_border.width", self.button_hover_border.width),
            ("button_default_border.width", self.button_default_border.width),
        ];
        for (metric, value) in non_negative {
            if !(0..=MAX_METRIC).contains(&value) {
                return Err(SkinError::invalid(skin, metric, value));
            }
        }

        let positive = [
            ("parent_title_bar_height", self.parent_title_bar_height),
            ("child_title_bar_height", self.child_title_bar_height),
        ];
        for (metric, value) in positive {
            if !(1..=MAX_METRIC).contains(&value) {
                return Err(SkinError::invalid(skin, metric, value));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::default::DefaultSkin;
    use crate::skin::Skin;

    #[test]
    fn test_title_bar_height_by_role() {
        let metrics = DefaultSkin::new().metrics().clone();
        assert_eq!(metrics.title_bar_height(FrameRole::Parent), 30);
        assert_eq!(metrics.title_bar_height(FrameRole::Child), 18);
        assert_eq!(metrics.title_font(FrameRole::Parent).size, 22.0);
        assert_eq!(metrics.title_font(FrameRole::Child).size, 18.0);
    }

    #[test]
    fn test_validate_rejects_zero_title_bar() {
        let mut metrics = DefaultSkin::new().metrics().clone();
        metrics.child_title_bar_height = 0;

        match metrics.validate("broken") {
            Err(SkinError::InvalidMetric { metric, value, .. }) => {
                assert_eq!(metric, "child_title_bar_height");
                assert_eq!(value, 0);
            },
            other => panic!("expected InvalidMetric, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_border() {
        let mut metrics = DefaultSkin::new().metrics().clone();
        metrics.frame_border_width = -1;
        assert!(metrics.validate("broken").is_err());

        metrics.frame_border_width = 0;
        assert!(metrics.validate("flat").is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_metric() {
        let mut metrics = DefaultSkin::new().metrics().clone();
        metrics.parent_title_bar_height = MAX_METRIC;
        assert!(metrics.validate("tall").is_ok());

        metrics.decoration_border_width = i32::MAX;
        assert!(matches!(
            metrics.validate("huge"),
            Err(SkinError::InvalidMetric {
                metric: "decoration_border_width",
                ..
            })
        ));
    }
}
