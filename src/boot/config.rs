//! Boot Configuration
//!
//! An explicit, immutable-after-init description of everything the bootstrap
//! touches: which style layers to register and where to mount. Keeping this
//! in one object (rather than ad hoc globals) makes the initialization order
//! auditable and lets tests run the sequence against their own documents.
//!
//! There is no file or environment loading here: style resources are
//! compiled in, so the whole configuration is known at build time.

use super::layers::StyleLayerSet;
use super::target::MountTarget;

/// Configuration consumed by [`Bootstrap`](super::Bootstrap)
#[derive(Debug, Clone)]
pub struct BootConfig {
    /// Ordered presentation layers, registered before anything renders
    pub layers: StyleLayerSet,
    /// Where the root component attaches
    pub target: MountTarget,
}

impl BootConfig {
    /// Assemble a configuration from parts
    pub fn new(layers: StyleLayerSet, target: MountTarget) -> Self {
        Self { layers, target }
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            layers: StyleLayerSet::bundled(),
            target: MountTarget::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BootConfig::default();
        assert_eq!(config.target.id(), "app");
        assert_eq!(config.layers.len(), 4);
    }
}
