//! Structured Data View
//!
//! Key/value rendering for JSON-like documents. The markup relies on the
//! structured-data style layer (`json-*` classes), which in turn consumes
//! the base layer's tokens.

use leptos::*;

/// Panel showing a structured-data document
#[component]
pub fn DataView() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">"Structured data"</h2>
            <dl class="json-view">
                <div class="json-entry">
                    <dt class="json-key">"name"</dt>
                    <dd class="json-string">"\"folio-workspace\""</dd>
                </div>
                <div class="json-entry">
                    <dt class="json-key">"documents"</dt>
                    <dd class="json-number">"12"</dd>
                </div>
                <div class="json-entry">
                    <dt class="json-key">"readonly"</dt>
                    <dd class="json-bool">"false"</dd>
                </div>
                <div class="json-entry">
                    <dt class="json-key">"last_opened"</dt>
                    <dd class="json-null">"null"</dd>
                </div>
            </dl>
        </section>
    }
}
