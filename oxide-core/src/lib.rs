#![warn(missing_docs)]

//! Core library for oxide => See `oxide` crate.
//!
//! Contains the frame geometry, the decoration engine and the pointer event contract.

pub use vello as vg;

/// Contains useful types for interacting with winit.
pub mod window {
    pub use winit::dpi::*;
    pub use winit::event::*;
    pub use winit::window::CursorIcon;
}

/// Contains the [element::Element] trait for paintable, hit-testable parts.
pub mod element;

/// Contains the [engine::FrameDecorationEngine].
pub mod engine;

/// Contains [geometry::Rect] and the geometry derivation.
pub mod geometry;

/// Contains the [host::FrameHost] trait.
pub mod host;

/// Contains the pointer event contract and winit translation.
pub mod input;

/// Contains the [paint::DisplayList] handed to renderers.
pub mod paint;

/// Contains [region::FrameRegion] for hit testing.
pub mod region;

/// Contains the [update::Update] flags.
pub mod update;
