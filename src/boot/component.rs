//! Root Component seam
//!
//! The bootstrap consumes the root of the UI tree through a minimal
//! interface: constructible with no arguments, attachable to a target. That
//! keeps the startup sequence independent of component internals and lets
//! tests substitute a double for the real tree.

use leptos::*;
use web_sys::HtmlElement;

use super::error::BootResult;
use crate::app::App;

/// A unit of UI the bootstrap can instantiate and attach.
///
/// `attach` consumes the instance, so a given instance attaches at most
/// once; the bootstrap's one-shot guard ensures at most one instance is ever
/// created per process.
pub trait RootComponent: Sized {
    /// No-argument construction. A failure here is a fatal startup error;
    /// the bootstrap performs no retry and no fallback rendering.
    fn create() -> BootResult<Self>;

    /// Attach the instantiated tree to the resolved mount element. After
    /// this call the host environment's rendering lifecycle owns the tree.
    fn attach(self, target: HtmlElement);
}

/// The Folio application tree behind the [`RootComponent`] seam
#[derive(Debug, Default)]
pub struct AppRoot;

impl RootComponent for AppRoot {
    fn create() -> BootResult<Self> {
        Ok(Self)
    }

    fn attach(self, target: HtmlElement) {
        mount_to(target, || view! { <App /> });
    }
}
