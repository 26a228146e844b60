#![warn(missing_docs)]

//! Widget library for oxide => See `oxide` crate.
//!
//! Contains the decorated [frame::Frame] and the parts it is built from.

/// Contains the [button::ThemedButton] widget.
pub mod button;

/// Contains the [drag_handle::DragHandle] widget.
pub mod drag_handle;

/// Contains the [frame::Frame] composition root.
pub mod frame;

/// Contains button glyphs and the [icon::IconProvider] trait.
pub mod icon;
