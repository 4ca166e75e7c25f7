//! Mount Target
//!
//! The single host-document location the rendered tree attaches to. The host
//! environment provides it (see `index.html`); the bootstrap only resolves
//! it, never creates or destroys it.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::error::{BootError, BootResult};

/// Identifies the element the root component attaches to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTarget {
    id: String,
}

impl MountTarget {
    /// Element id the shipped `index.html` exposes
    pub const DEFAULT_ID: &'static str = "app";

    /// Target a specific element id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The element id this target resolves against
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up the target element in the given document.
    ///
    /// Absence is a fatal startup condition, not a degraded mode: the caller
    /// gets [`BootError::MountTargetMissing`] and must not mount anything.
    pub fn resolve(&self, document: &Document) -> BootResult<HtmlElement> {
        let element = document
            .get_element_by_id(&self.id)
            .ok_or_else(|| BootError::MountTargetMissing(self.id.clone()))?;

        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| BootError::MountTargetKind(self.id.clone()))
    }
}

impl Default for MountTarget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_id() {
        let target = MountTarget::default();
        assert_eq!(target.id(), "app");
    }

    #[test]
    fn test_custom_id() {
        let target = MountTarget::new("workspace");
        assert_eq!(target.id(), "workspace");
        assert_ne!(target, MountTarget::default());
    }
}
