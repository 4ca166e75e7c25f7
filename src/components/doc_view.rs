//! Document View
//!
//! Prose rendering for markdown documents. The markup relies on the
//! document-markup style layer (`markdown-body`), which in turn consumes
//! the base layer's tokens.

use leptos::*;

/// Panel showing a markdown document
#[component]
pub fn DocView() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">"Document"</h2>
            <article class="markdown-body">
                <h2>"Getting started"</h2>
                <p>
                    "Folio keeps every document in a plain directory. Drop a "
                    <code>".json"</code>
                    " or "
                    <code>".md"</code>
                    " file into the workspace and it shows up here."
                </p>
                <blockquote>
                    <p>"Structured data and prose share one theme."</p>
                </blockquote>
                <ul>
                    <li>"Browse the workspace tree"</li>
                    <li>"Open a document in either rendering mode"</li>
                </ul>
            </article>
        </section>
    }
}
