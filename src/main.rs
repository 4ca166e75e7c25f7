//! Folio Workspace
//!
//! Entry point for the WASM application. Installs the panic hook (the host
//! environment's top-level error reporting, through which construction-time
//! panics surface), then runs the bootstrap sequence. A bootstrap error is
//! reported to the console and the page stays visibly unmounted — there is
//! no retry and no degraded render.

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(err) = folio_ui::bootstrap() {
        web_sys::console::error_1(&format!("folio failed to start: {}", err).into());
    }
}
