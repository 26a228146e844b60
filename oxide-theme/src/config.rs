//! # Skin Configuration
//!
//! Skins can be described in TOML files and selected through the `OXIDE_SKIN`
//! environment variable.
//!
//! A skin file must supply every metric. There are no partial overrides: a file that
//! omits one is rejected with [SkinError::MissingMetric] and the caller keeps whatever
//! skin it had before.
//!
//! ## File Format
//!
//! ```toml
//! name = "ember"
//!
//! [metrics]
//! decoration_border_width = 6
//! frame_border_width = 1
//! parent_title_bar_height = 30
//! child_title_bar_height = 18
//!
//! [colors]
//! frame_border = "#333333"
//! decoration_border = "#7a8a99"
//! content_background = "#eeeeee"
//! hover_border = "#ffffff"
//! parent_title_text = "#ffffff"
//! child_title_text = "#ffffff"
//! button_text = "#ffffff"
//! button_selected = "#7a8a99"
//! button_unselected = "#a3b8cc"
//! control_text = "#333333"
//! shade = "#dbe5ef"
//!
//! [fonts]
//! parent_title = { family = "Monospaced", weight = "bold", size = 22 }
//! child_title = { family = "Monospaced", weight = "bold", size = 18 }
//! button = { family = "Monospaced", weight = "bold", size = 20 }
//! control = { family = "Monospaced", size = 13 }
//!
//! [borders]
//! button_hover = { color = "#ffffff", width = 1 }
//! button_default = { color = "#00000000", width = 0 }
//! ```
//!
//! ## Environment Variables
//!
//! - `OXIDE_SKIN`: `default`, `slate`, `named:<name>` or `file:<path>`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use vello::peniko::Color;

use crate::border::BorderSpec;
use crate::error::{SkinError, SkinResult};
use crate::font::FontSpec;
use crate::metrics::{SkinFonts, SkinMetrics, SkinPalette};
use crate::registry::SkinRegistry;
use crate::skin::custom::CustomSkin;
use crate::skin::default::DefaultSkin;
use crate::skin::Skin;

/// Name of the environment variable selecting the skin.
pub const SKIN_ENV: &str = "OXIDE_SKIN";

const INLINE_SOURCE: &str = "<inline>";

/// A skin description as read from a TOML file.
///
/// Every value is optional here so that omissions surface as
/// [SkinError::MissingMetric] from [SkinConfig::into_skin] instead of an opaque parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinConfig {
    /// Skin name.
    pub name: Option<String>,
    /// Border widths and title-bar heights.
    #[serde(default)]
    pub metrics: MetricsSection,
    /// Colors.
    #[serde(default)]
    pub colors: ColorsSection,
    /// Fonts.
    #[serde(default)]
    pub fonts: FontsSection,
    /// Button borders.
    #[serde(default)]
    pub borders: BordersSection,
}

/// `[metrics]` table of a skin file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct MetricsSection {
    pub decoration_border_width: Option<i32>,
    pub frame_border_width: Option<i32>,
    pub parent_title_bar_height: Option<i32>,
    pub child_title_bar_height: Option<i32>,
}

/// A color written as a hex string.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct HexColor(#[serde(with = "crate::serde_color")] pub Color);

/// `[colors]` table of a skin file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct ColorsSection {
    pub frame_border: Option<HexColor>,
    pub decoration_border: Option<HexColor>,
    pub content_background: Option<HexColor>,
    pub hover_border: Option<HexColor>,
    pub parent_title_text: Option<HexColor>,
    pub child_title_text: Option<HexColor>,
    pub button_text: Option<HexColor>,
    pub button_selected: Option<HexColor>,
    pub button_unselected: Option<HexColor>,
    pub control_text: Option<HexColor>,
    pub shade: Option<HexColor>,
}

/// `[fonts]` table of a skin file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct FontsSection {
    pub parent_title: Option<FontSpec>,
    pub child_title: Option<FontSpec>,
    pub button: Option<FontSpec>,
    pub control: Option<FontSpec>,
}

/// `[borders]` table of a skin file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct BordersSection {
    pub button_hover: Option<BorderSpec>,
    pub button_default: Option<BorderSpec>,
}

fn require<T>(value: Option<T>, skin: &str, metric: &'static str) -> SkinResult<T> {
    value.ok_or_else(|| SkinError::missing(skin, metric))
}

fn require_color(value: Option<HexColor>, skin: &str, metric: &'static str) -> SkinResult<Color> {
    require(value, skin, metric).map(|hex| hex.0)
}

impl SkinConfig {
    /// Load a skin description from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SkinResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SkinError::file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Load a skin description from TOML content.
    pub fn from_toml(content: &str) -> SkinResult<Self> {
        Self::parse(content, Path::new(INLINE_SOURCE))
    }

    fn parse(content: &str, origin: &Path) -> SkinResult<Self> {
        toml::from_str(content).map_err(|err| SkinError::parse_error(origin, err.to_string()))
    }

    /// Build the skin, failing on the first missing or invalid metric.
    pub fn into_skin(self) -> SkinResult<CustomSkin> {
        let name = require(self.name, "<unnamed>", "name")?;
        let skin = name.as_str();

        let metrics = SkinMetrics {
            decoration_border_width: require(
                self.metrics.decoration_border_width,
                skin,
                "decoration_border_width",
            )?,
            frame_border_width: require(self.metrics.frame_border_width, skin, "frame_border_width")?,
            parent_title_bar_height: require(
                self.metrics.parent_title_bar_height,
                skin,
                "parent_title_bar_height",
            )?,
            child_title_bar_height: require(
                self.metrics.child_title_bar_height,
                skin,
                "child_title_bar_height",
            )?,
            palette: SkinPalette {
                frame_border: require_color(self.colors.frame_border, skin, "frame_border")?,
                decoration_border: require_color(
                    self.colors.decoration_border,
                    skin,
                    "decoration_border",
                )?,
                content_background: require_color(
                    self.colors.content_background,
                    skin,
                    "content_background",
                )?,
                hover_border: require_color(self.colors.hover_border, skin, "hover_border")?,
                parent_title_text: require_color(
                    self.colors.parent_title_text,
                    skin,
                    "parent_title_text",
                )?,
                child_title_text: require_color(
                    self.colors.child_title_text,
                    skin,
                    "child_title_text",
                )?,
                button_text: require_color(self.colors.button_text, skin, "button_text")?,
                button_selected: require_color(self.colors.button_selected, skin, "button_selected")?,
                button_unselected: require_color(
                    self.colors.button_unselected,
                    skin,
                    "button_unselected",
                )?,
                control_text: require_color(self.colors.control_text, skin, "control_text")?,
                shade: require_color(self.colors.shade, skin, "shade")?,
            },
            fonts: SkinFonts {
                parent_title: require(self.fonts.parent_title, skin, "fonts.parent_title")?,
                child_title: require(self.fonts.child_title, skin, "fonts.child_title")?,
                button: require(self.fonts.button, skin, "fonts.button")?,
                control: require(self.fonts.control, skin, "fonts.control")?,
            },
            button_hover_border: require(self.borders.button_hover, skin, "borders.button_hover")?,
            button_default_border: require(
                self.borders.button_default,
                skin,
                "borders.button_default",
            )?,
        };

        CustomSkin::new(name.clone(), metrics)
    }
}

/// Where a skin comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinSource {
    /// The built-in default skin.
    Default,
    /// The built-in slate skin.
    Slate,
    /// A skin registered under a name.
    Named(String),
    /// A skin file.
    File(PathBuf),
}

impl Default for SkinSource {
    fn default() -> Self {
        Self::Default
    }
}

impl SkinSource {
    /// Read the source from `OXIDE_SKIN`, falling back to [SkinSource::Default].
    pub fn from_env_or_default() -> Self {
        match env::var(SKIN_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::Default,
        }
    }

    /// Parse `default`, `slate`, `named:<name>` or `file:<path>`.
    ///
    /// Anything else is treated as a registered skin name.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if let Some(name) = source.strip_prefix("named:") {
            return Self::Named(name.to_string());
        }
        if let Some(path) = source.strip_prefix("file:") {
            return Self::File(PathBuf::from(path));
        }
        match source.to_lowercase().as_str() {
            "" | "default" => Self::Default,
            "slate" => Self::Slate,
            _ => Self::Named(source.to_string()),
        }
    }

    /// Resolve the source to a validated skin.
    pub fn resolve(&self, registry: &SkinRegistry) -> SkinResult<Arc<dyn Skin>> {
        match self {
            SkinSource::Default => registry.get("default"),
            SkinSource::Slate => registry.get("slate"),
            SkinSource::Named(name) => registry.get(name),
            SkinSource::File(path) => {
                let skin = SkinConfig::from_file(path)?.into_skin()?;
                Ok(Arc::new(skin))
            },
        }
    }

    /// Resolve the source, falling back to [DefaultSkin] when it cannot be resolved.
    pub fn resolve_or_default(&self, registry: &SkinRegistry) -> Arc<dyn Skin> {
        match self.resolve(registry) {
            Ok(skin) => skin,
            Err(err) => {
                log::warn!("Cannot resolve skin {:?}, using default skin: {}", self, err);
                Arc::new(DefaultSkin::new())
            },
        }
    }
}
