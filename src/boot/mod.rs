//! Application Bootstrap
//!
//! The startup sequence that prepares and displays the application for the
//! first time: register the style layers, instantiate the root component,
//! attach it to the mount target. The sequence is linear, synchronous, and
//! run-to-completion — no step suspends, no step retries, and no observable
//! intermediate state is exposed. Either the whole sequence completes and
//! the application is live, or it fails and nothing is mounted.
//!
//! Bootstrapping is exactly-once per [`Bootstrap`] instance (and, through
//! [`bootstrap`], per process). A second invocation is rejected rather than
//! risking two root components attached to the same target.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use web_sys::Document;

pub mod component;
pub mod config;
pub mod error;
pub mod layers;
pub mod target;

pub use component::{AppRoot, RootComponent};
pub use config::BootConfig;
pub use error::{BootError, BootResult};
pub use layers::{LayerKind, StyleLayer, StyleLayerSet};
pub use target::MountTarget;

/// One-shot latch: the first acquisition wins, every later one fails.
///
/// The bootstrap has exactly one caller (the process entry point), so this
/// is not a lock; it is the explicit single-use guard that turns "calling
/// bootstrap twice" from undefined behavior into a reported error.
#[derive(Debug, Default)]
struct OnceLatch {
    fired: AtomicBool,
}

impl OnceLatch {
    fn try_acquire(&self) -> bool {
        !self.fired.swap(true, Ordering::SeqCst)
    }
}

/// Orchestrates the startup sequence described in the module docs
#[derive(Debug)]
pub struct Bootstrap {
    config: BootConfig,
    latch: OnceLatch,
}

impl Bootstrap {
    /// Prepare a bootstrap with the given configuration. Nothing touches the
    /// document until [`run`](Bootstrap::run) is called.
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            latch: OnceLatch::default(),
        }
    }

    /// The configuration this bootstrap will apply
    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// Run the startup sequence against the given document.
    ///
    /// Order of operations:
    /// 1. Acquire the one-shot latch; a repeat call fails with
    ///    [`BootError::AlreadyBootstrapped`] before touching the document.
    /// 2. Resolve the mount target. Resolution happens ahead of style
    ///    registration so a missing target leaves the document entirely
    ///    unmodified — no orphaned style elements on an unrelated page.
    /// 3. Register every style layer, in declared order. Rendering never
    ///    observes an unstyled or partially styled tree.
    /// 4. Instantiate exactly one root component and attach it.
    ///
    /// Any failure is terminal for this instance: the latch stays consumed,
    /// matching the single forward-only lifecycle (unmounted to
    /// mounted-or-failed, no transitions back).
    pub fn run<R: RootComponent>(&self, document: &Document) -> BootResult<()> {
        if !self.latch.try_acquire() {
            return Err(BootError::AlreadyBootstrapped);
        }

        let target = self.config.target.resolve(document)?;
        self.config.layers.register(document)?;

        let root = R::create()?;
        root.attach(target);

        web_sys::console::log_1(
            &format!(
                "folio: mounted at #{} with {} style layers",
                self.config.target.id(),
                self.config.layers.len()
            )
            .into(),
        );
        Ok(())
    }
}

/// Process-wide bootstrap instance backing [`bootstrap`]
static PROCESS_BOOT: OnceLock<Bootstrap> = OnceLock::new();

/// Boot the application: default layer set, default mount target, the
/// [`AppRoot`] component tree, and the browser window's document.
///
/// Exactly-once per process; a second call returns
/// [`BootError::AlreadyBootstrapped`].
pub fn bootstrap() -> BootResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::HostDocument)?;

    PROCESS_BOOT
        .get_or_init(|| Bootstrap::new(BootConfig::default()))
        .run::<AppRoot>(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let latch = OnceLatch::default();
        assert!(latch.try_acquire());
        assert!(!latch.try_acquire());
        assert!(!latch.try_acquire());
    }

    #[test]
    fn test_bootstrap_holds_config() {
        let boot = Bootstrap::new(BootConfig::default());
        assert_eq!(boot.config().target.id(), "app");
    }
}
