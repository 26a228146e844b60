//! # Skin System
//!
//! A skin is a read-only capability: for a fixed identity it answers every metric a frame
//! needs. Skins carry no behavior and no mutable state, so one skin can decorate any
//! number of frames at once.
//!
//! ## Built-in Skins
//!
//! - **[default::DefaultSkin]**: steel-blue decoration band, monospaced bold titles
//! - **[slate::SlateSkin]**: darker band with thinner borders and shorter title bars
//!
//! Skins loaded from files are [custom::CustomSkin]s, see [crate::config::SkinConfig].
//!
//! ## Custom Skin Implementation
//!
//! ```rust
//! use oxide_theme::metrics::SkinMetrics;
//! use oxide_theme::skin::{default::DefaultSkin, Skin};
//!
//! #[derive(Debug)]
//! struct WideSkin {
//!     metrics: SkinMetrics,
//! }
//!
//! impl WideSkin {
//!     fn new() -> Self {
//!         let mut metrics = DefaultSkin::new().metrics().clone();
//!         metrics.decoration_border_width = 12;
//!         Self { metrics }
//!     }
//! }
//!
//! impl Skin for WideSkin {
//!     fn name(&self) -> &str {
//!         "wide"
//!     }
//!
//!     fn metrics(&self) -> &SkinMetrics {
//!         &self.metrics
//!     }
//! }
//!
//! assert!(WideSkin::new().validate().is_ok());
//! ```

use std::fmt::Debug;

use vello::peniko::Color;

use crate::border::BorderSpec;
use crate::error::SkinResult;
use crate::font::FontSpec;
use crate::metrics::{FrameRole, SkinMetrics};

/// Skin built from a [crate::config::SkinConfig].
pub mod custom;
/// The default Oxide skin.
pub mod default;
/// The Slate skin.
pub mod slate;

/// Base trait for all skins.
///
/// Implementors provide a name and a [SkinMetrics] snapshot. Every other accessor is
/// derived from those two and should not need overriding.
pub trait Skin: Debug + Send + Sync {
    /// Unique name of the skin, used by the [crate::registry::SkinRegistry].
    fn name(&self) -> &str;

    /// The full metric set.
    fn metrics(&self) -> &SkinMetrics;

    /// Check the skin's numeric invariants.
    fn validate(&self) -> SkinResult<()> {
        self.metrics().validate(self.name())
    }

    /// Width of the decoration band.
    fn decoration_border_width(&self) -> i32 {
        self.metrics().decoration_border_width
    }

    /// Width of the outer frame line.
    fn frame_border_width(&self) -> i32 {
        self.metrics().frame_border_width
    }

    /// Title-bar height for the given frame role.
    fn title_bar_height(&self, role: FrameRole) -> i32 {
        self.metrics().title_bar_height(role)
    }

    /// Title font for the given frame role.
    fn title_font(&self, role: FrameRole) -> &FontSpec {
        self.metrics().title_font(role)
    }

    /// Title text color for the given frame role.
    fn title_text_color(&self, role: FrameRole) -> Color {
        self.metrics().title_text_color(role)
    }

    /// Color of the outer frame line.
    fn frame_border_color(&self) -> Color {
        self.metrics().palette.frame_border
    }

    /// Color of the decoration band.
    fn decoration_border_color(&self) -> Color {
        self.metrics().palette.decoration_border
    }

    /// Background of the content area.
    fn content_background(&self) -> Color {
        self.metrics().palette.content_background
    }

    /// Border drawn around a hovered button.
    fn button_hover_border(&self) -> BorderSpec {
        self.metrics().button_hover_border
    }

    /// Border drawn around a button that is not hovered.
    fn button_default_border(&self) -> BorderSpec {
        self.metrics().button_default_border
    }

    /// Button background for the given selection state.
    fn button_background(&self, selected: bool) -> Color {
        let palette = &self.metrics().palette;
        if selected {
            palette.button_selected
        } else {
            palette.button_unselected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::{default::DefaultSkin, slate::SlateSkin};

    #[test]
    fn test_builtin_skins_are_valid() {
        assert!(DefaultSkin::new().validate().is_ok());
        assert!(SlateSkin::new().validate().is_ok());
    }

    #[test]
    fn test_button_background_follows_selection() {
        let skin = DefaultSkin::new();
        let selected = skin.button_background(true).to_rgba8();
        let unselected = skin.button_background(false).to_rgba8();

        assert_eq!((selected.r, selected.g, selected.b), (122, 138, 153));
        assert_eq!((unselected.r, unselected.g, unselected.b), (163, 184, 204));
    }

    #[test]
    fn test_skins_usable_as_trait_objects() {
        let skins: Vec<Box<dyn Skin>> = vec![Box::new(DefaultSkin::new()), Box::new(SlateSkin::new())];
        let names: Vec<&str> = skins.iter().map(|skin| skin.name()).collect();
        assert_eq!(names, vec!["default", "slate"]);
    }
}
