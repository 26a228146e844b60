//! # Frame Geometry
//!
//! Integer pixel rectangles and the closed-form derivation of every decorative
//! rectangle from the content area.

mod derive;
mod rect;

pub use derive::{derive_geometry, DerivedGeometry, FrameMetrics};
pub use rect::{ContentRect, Rect, MAX_COORDINATE};
