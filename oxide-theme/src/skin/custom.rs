use crate::error::SkinResult;
use crate::metrics::SkinMetrics;
use crate::skin::Skin;

/// A skin assembled at runtime, usually from a skin file.
#[derive(Debug, Clone)]
pub struct CustomSkin {
    name: String,
    metrics: SkinMetrics,
}

impl CustomSkin {
    /// Create a custom skin, rejecting metrics that break the skin invariants.
    pub fn new(name: impl Into<String>, metrics: SkinMetrics) -> SkinResult<Self> {
        let name = name.into();
        metrics.validate(&name)?;
        Ok(Self { name, metrics })
    }
}

impl Skin for CustomSkin {
    fn name(&self) -> &str {
        &self.name
    }

    fn metrics(&self) -> &SkinMetrics {
        &self.metrics
    }
}
