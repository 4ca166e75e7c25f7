//! App Root Component
//!
//! The top-level tree the bootstrap instantiates. Kept deliberately small:
//! a header, one panel per content rendering mode, and a footer. The boot
//! sequence only depends on this through the `RootComponent` seam.

use leptos::*;

use crate::components::{DataView, DocView};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Folio"</h1>
                <span class="app-tagline">"workspace viewer"</span>
            </header>

            <main class="app-main">
                <DataView />
                <DocView />
            </main>

            <footer class="app-footer">
                "Folio renders structured data and markdown side by side."
            </footer>
        </div>
    }
}
