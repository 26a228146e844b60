#![warn(missing_docs)]

//! # Oxide Skinning System
//!
//! Skins parameterize how an oxide frame looks without touching how it is laid out.
//! A skin supplies border widths, title-bar heights, fonts and colors; the frame
//! geometry in `oxide-core` only ever reads the numbers it needs from a skin.
//!
//! ## Overview
//!
//! - **[Skin](skin::Skin)**: the read-only capability every skin implements
//! - **[SkinMetrics](metrics::SkinMetrics)**: the complete value set a skin exposes
//! - **[FrameRole](metrics::FrameRole)**: parent frames use the larger title bar, child frames the smaller one
//! - **[SkinConfig](config::SkinConfig)**: skins described in TOML files
//! - **[SkinRegistry](registry::SkinRegistry)**: named skins available at runtime
//! - **Built-in Skins**: [DefaultSkin](skin::default::DefaultSkin) and [SlateSkin](skin::slate::SlateSkin)
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_theme::metrics::FrameRole;
//! use oxide_theme::skin::{default::DefaultSkin, Skin};
//!
//! let skin = DefaultSkin::new();
//! assert_eq!(skin.title_bar_height(FrameRole::Parent), 30);
//! assert_eq!(skin.title_bar_height(FrameRole::Child), 18);
//! ```
//!
//! ## Skin Configuration
//!
//! ```rust,no_run
//! use oxide_theme::config::{SkinConfig, SkinSource};
//! use oxide_theme::registry::SkinRegistry;
//!
//! // From a TOML file describing every metric
//! let skin = SkinConfig::from_file("ember.toml").unwrap().into_skin().unwrap();
//!
//! // From the OXIDE_SKIN environment variable
//! let registry = SkinRegistry::new();
//! let skin = SkinSource::from_env_or_default().resolve_or_default(&registry);
//! ```
//!
//! ### Environment Variables
//!
//! ```bash
//! export OXIDE_SKIN=default          # Use the default skin
//! export OXIDE_SKIN=slate            # Use the slate skin
//! export OXIDE_SKIN=named:ember      # Use a skin registered as "ember"
//! export OXIDE_SKIN=file:ember.toml  # Load a skin file
//! ```

/// Contains the [border::BorderSpec] struct.
pub mod border;
/// Contains the [config::SkinConfig] struct for file-based skins.
pub mod config;
/// Contains the [error::SkinError] type.
pub mod error;
/// Contains the [font::FontSpec] struct.
pub mod font;
/// Contains [metrics::SkinMetrics] and [metrics::FrameRole].
pub mod metrics;
/// Contains the [registry::SkinRegistry] for named skins.
pub mod registry;
/// Hex string (de)serialization for colors.
pub mod serde_color;
/// Contains the [skin::Skin] trait and built-in skins.
pub mod skin;

pub use vello::peniko::Color;
