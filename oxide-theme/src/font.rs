use serde::{Deserialize, Serialize};

/// Weight of a [FontSpec].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Plain,
    /// Bold weight.
    Bold,
}

/// A font request handed to the host's text renderer.
///
/// Skins only describe fonts. Resolving the family to an actual face is up to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name, e.g. `"Monospaced"`.
    pub family: String,
    /// Font weight.
    #[serde(default)]
    pub weight: FontWeight,
    /// Point size.
    pub size: f32,
}

impl FontSpec {
    /// A regular font of the given family and size.
    pub fn plain(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Plain,
            size,
        }
    }

    /// A bold font of the given family and size.
    pub fn bold(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Bold,
            size,
        }
    }
}
