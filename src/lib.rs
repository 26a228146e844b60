#![warn(missing_docs)]

//! Skinnable, self-decorated application frames.
//!
//! A frame draws its own title bar, minimize and close buttons around a content area and
//! can be dragged by its title strip. Colors, fonts and border widths come from a skin that
//! can be swapped at runtime without moving the content.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use oxide_core as core;
pub use oxide_theme as theme;
pub use oxide_widgets as widgets;

/// A "prelude" for users of oxide.
///
/// Importing this module brings into scope the most common types
/// needed to decorate a window.
///
/// ```rust
/// use oxide::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::engine::FrameDecorationEngine;
    pub use crate::core::geometry::{derive_geometry, ContentRect, DerivedGeometry, Rect};
    pub use crate::core::host::{FrameHost, HostRequest, RecordingHost};
    pub use crate::core::input::{PointerEvent, PointerTranslator};
    pub use crate::core::paint::{DisplayList, PaintCommand};
    pub use crate::core::region::FrameRegion;
    pub use crate::core::update::Update;

    // Skins
    pub use crate::theme::config::{SkinConfig, SkinSource};
    pub use crate::theme::error::{SkinError, SkinResult};
    pub use crate::theme::metrics::{FrameRole, SkinMetrics};
    pub use crate::theme::registry::SkinRegistry;
    pub use crate::theme::skin::{custom::CustomSkin, default::DefaultSkin, slate::SlateSkin, Skin};

    // Math
    pub use nalgebra::{Point2, Vector2};

    // Widgets
    pub use crate::widgets::button::ThemedButton;
    pub use crate::widgets::drag_handle::DragHandle;
    pub use crate::widgets::frame::Frame;
    pub use crate::widgets::icon::{DefaultIcons, IconProvider};
}
