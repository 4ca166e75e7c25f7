//! # Folio Workspace
//!
//! Client-side rendered (CSR) Leptos application for browsing structured
//! data and markdown documents, compiled to WebAssembly.
//!
//! The crate's core is the deterministic startup contract in [`boot`]:
//!
//! 1. Register the global style layers in declared order — base
//!    reset/variables, theme, structured-data rendering, document-markup
//!    rendering. Overlays may assume the base layer's tokens exist.
//! 2. Instantiate exactly one root component, with no arguments.
//! 3. Attach it to the single designated mount target (`#app`).
//!
//! The sequence is synchronous and fail-fast: a missing style resource or
//! mount target aborts startup visibly rather than presenting a partially
//! styled or partially mounted page. It runs exactly once per process; a
//! second invocation is rejected.
//!
//! ## Modules
//!
//! - [`boot`]: style layers, mount target, root-component seam, and the
//!   bootstrap orchestration itself
//! - [`app`]: the root component tree
//! - [`components`]: panels for the two content rendering modes

pub mod app;
pub mod boot;
pub mod components;

// Re-export the startup surface for convenience
pub use boot::{
    bootstrap, AppRoot, BootConfig, BootError, BootResult, Bootstrap, LayerKind, MountTarget,
    RootComponent, StyleLayer, StyleLayerSet,
};
