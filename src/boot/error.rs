//! Bootstrap error types
//!
//! Defines all errors that can abort application startup. None of these are
//! recovered locally: the bootstrap performs no retries, no fallback styling,
//! and no partial mount, so every variant propagates to the entry point and
//! halts startup visibly.

use thiserror::Error;

/// Errors that can occur during application bootstrap
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootError {
    /// A declared style layer has no retrievable content
    #[error("style layer '{0}' has no retrievable content")]
    StyleResolution(String),

    /// A style layer set was declared with no layers
    #[error("style layer set is empty")]
    LayerSetEmpty,

    /// Two layers in the same set share a name
    #[error("duplicate style layer '{0}'")]
    LayerDuplicate(String),

    /// The declared order contradicts the layers' application ranks
    #[error("style layer '{0}' declared out of rank order")]
    LayerOrdering(String),

    /// The host document refused a style element (no head, DOM exception)
    #[error("style injection failed: {0}")]
    StyleInjection(String),

    /// The host environment exposes no document at all
    #[error("host environment exposes no document")]
    HostDocument,

    /// The designated mount element is absent from the host document
    #[error("mount target '#{0}' not found in host document")]
    MountTargetMissing(String),

    /// The mount id resolved to something other than an HTML element
    #[error("mount target '#{0}' is not an HTML element")]
    MountTargetKind(String),

    /// The root component factory failed internally
    #[error("root component construction failed: {0}")]
    ComponentConstruction(String),

    /// The bootstrap already ran in this process (exactly-once guard)
    #[error("bootstrap already ran in this process")]
    AlreadyBootstrapped,
}

/// Result type alias for bootstrap operations
pub type BootResult<T> = Result<T, BootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BootError::StyleResolution("markdown".to_string());
        assert_eq!(
            err.to_string(),
            "style layer 'markdown' has no retrievable content"
        );

        let err = BootError::MountTargetMissing("app".to_string());
        assert_eq!(err.to_string(), "mount target '#app' not found in host document");

        let err = BootError::AlreadyBootstrapped;
        assert_eq!(err.to_string(), "bootstrap already ran in this process");
    }
}
