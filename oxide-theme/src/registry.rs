use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{SkinError, SkinResult};
use crate::skin::default::DefaultSkin;
use crate::skin::slate::SlateSkin;
use crate::skin::Skin;

/// Named skins available at runtime, kept in registration order.
///
/// Skins are shared behind [Arc] so several frames can be decorated by the same skin.
#[derive(Debug)]
pub struct SkinRegistry {
    skins: IndexMap<String, Arc<dyn Skin>>,
}

impl SkinRegistry {
    /// Create a registry holding the built-in skins.
    pub fn new() -> Self {
        let mut skins: IndexMap<String, Arc<dyn Skin>> = IndexMap::new();
        for skin in [
            Arc::new(DefaultSkin::new()) as Arc<dyn Skin>,
            Arc::new(SlateSkin::new()) as Arc<dyn Skin>,
        ] {
            skins.insert(skin.name().to_string(), skin);
        }
        Self { skins }
    }

    /// Create a registry without any skins.
    pub fn empty() -> Self {
        Self {
            skins: IndexMap::new(),
        }
    }

    /// Register a skin under its own name, replacing any skin of the same name.
    ///
    /// Invalid skins are rejected and the registry is left unchanged.
    pub fn register(&mut self, skin: Arc<dyn Skin>) -> SkinResult<()> {
        skin.validate()?;
        let name = skin.name().to_string();
        if self.skins.insert(name.clone(), skin).is_some() {
            log::debug!("Replaced registered skin '{}'", name);
        }
        Ok(())
    }

    /// Look up a skin by name.
    pub fn get(&self, name: &str) -> SkinResult<Arc<dyn Skin>> {
        self.skins
            .get(name)
            .cloned()
            .ok_or_else(|| SkinError::not_found(name))
    }

    /// Whether a skin of that name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.skins.contains_key(name)
    }

    /// Registered skin names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.skins.keys().map(String::as_str).collect()
    }
}

impl Default for SkinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FrameRole;
    use crate::skin::custom::CustomSkin;

    #[test]
    fn test_builtin_skins_registered() {
        let registry = SkinRegistry::new();
        assert_eq!(registry.names(), vec!["default", "slate"]);
        assert_eq!(
            registry.get("slate").unwrap().title_bar_height(FrameRole::Parent),
            24
        );
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = SkinRegistry::new();
        let mut metrics = DefaultSkin::new().metrics().clone();
        metrics.parent_title_bar_height = 40;
        let tall = CustomSkin::new("default", metrics).unwrap();

        registry.register(Arc::new(tall)).unwrap();

        assert_eq!(registry.names(), vec!["default", "slate"]);
        assert_eq!(
            registry.get("default").unwrap().title_bar_height(FrameRole::Parent),
            40
        );
    }

    #[test]
    fn test_get_unknown_skin() {
        let registry = SkinRegistry::empty();
        assert!(matches!(registry.get("default"), Err(SkinError::SkinNotFound { .. })));
    }
}
