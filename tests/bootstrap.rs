//! End-to-end bootstrap scenarios, run in a browser.
//!
//! Each test namespaces its mount id and layer names so the shared page
//! document never causes cross-test interference: style registration is
//! keyed by the marker attribute, and mount targets are created per test.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use folio_ui::{
    AppRoot, BootConfig, BootError, BootResult, Bootstrap, LayerKind, MountTarget, RootComponent,
    StyleLayer, StyleLayerSet,
};

wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static CREATED: Cell<usize> = Cell::new(0);
}

/// Test double for the root component: counts constructions and attaches a
/// single paragraph so the mounted subtree is observable.
struct FakeRoot;

impl RootComponent for FakeRoot {
    fn create() -> BootResult<Self> {
        CREATED.with(|count| count.set(count.get() + 1));
        Ok(Self)
    }

    fn attach(self, target: HtmlElement) {
        let document = target.owner_document().unwrap();
        let node = document.create_element("p").unwrap();
        node.set_text_content(Some("mounted"));
        target.append_child(&node).unwrap();
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_mount(id: &str) -> HtmlElement {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element.dyn_into().unwrap()
}

fn layer_element(name: &str) -> Option<web_sys::Element> {
    document()
        .query_selector(&format!("style[data-folio-layer=\"{}\"]", name))
        .unwrap()
}

/// Index of a layer's style element among all injected layer elements.
fn layer_position(name: &str) -> usize {
    let all = document()
        .query_selector_all("style[data-folio-layer]")
        .unwrap();
    for i in 0..all.length() {
        let element: web_sys::Element = all.get(i).unwrap().dyn_into().unwrap();
        if element.get_attribute("data-folio-layer").as_deref() == Some(name) {
            return i as usize;
        }
    }
    panic!("layer '{}' not registered", name);
}

#[wasm_bindgen_test]
fn scenario_a_full_bootstrap() {
    let mount = add_mount("scenario-a");
    let boot = Bootstrap::new(BootConfig::new(
        StyleLayerSet::bundled(),
        MountTarget::new("scenario-a"),
    ));

    boot.run::<AppRoot>(&document()).unwrap();

    // All four layers active, in declared order, base/theme before overlays.
    for name in ["base", "theme", "json", "markdown"] {
        assert!(layer_element(name).is_some(), "layer '{}' missing", name);
    }
    assert!(layer_position("base") < layer_position("theme"));
    assert!(layer_position("theme") < layer_position("json"));
    assert!(layer_position("json") < layer_position("markdown"));

    // The mount subtree is non-empty and carries theme-derived markup.
    assert!(mount.child_element_count() > 0);
    assert!(mount.query_selector(".app-shell").unwrap().is_some());
}

#[wasm_bindgen_test]
fn scenario_b_missing_target() {
    let layers = StyleLayerSet::new(vec![
        StyleLayer::new("b-base", LayerKind::Base, "body {}"),
        StyleLayer::new("b-json", LayerKind::StructuredData, ".json-view {}"),
    ])
    .unwrap();
    let boot = Bootstrap::new(BootConfig::new(layers, MountTarget::new("no-such-element")));

    let before = CREATED.with(Cell::get);
    let result = boot.run::<FakeRoot>(&document());

    assert_eq!(
        result,
        Err(BootError::MountTargetMissing("no-such-element".to_string()))
    );
    // The document is otherwise unmodified: no orphaned style elements.
    assert!(layer_element("b-base").is_none());
    assert!(layer_element("b-json").is_none());
    // And the component factory never ran.
    assert_eq!(CREATED.with(Cell::get), before);
}

#[wasm_bindgen_test]
fn scenario_c_unresolvable_layer() {
    let mount = add_mount("scenario-c");
    let layers = StyleLayerSet::new(vec![
        StyleLayer::new("c-base", LayerKind::Base, "body {}"),
        StyleLayer::new("c-json", LayerKind::StructuredData, "   \n"),
    ])
    .unwrap();
    let boot = Bootstrap::new(BootConfig::new(layers, MountTarget::new("scenario-c")));

    let before = CREATED.with(Cell::get);
    let result = boot.run::<FakeRoot>(&document());

    assert_eq!(result, Err(BootError::StyleResolution("c-json".to_string())));
    // Fails as a whole: the resolvable layer was not injected either.
    assert!(layer_element("c-base").is_none());
    // Instantiation was never invoked and nothing was mounted.
    assert_eq!(CREATED.with(Cell::get), before);
    assert_eq!(mount.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn registration_is_idempotent() {
    let layers = StyleLayerSet::new(vec![
        StyleLayer::new("i-base", LayerKind::Base, "body {}"),
        StyleLayer::new("i-theme", LayerKind::Theme, ":root {}"),
    ])
    .unwrap();

    layers.register(&document()).unwrap();
    layers.register(&document()).unwrap();

    let all = document()
        .query_selector_all("style[data-folio-layer=\"i-base\"], style[data-folio-layer=\"i-theme\"]")
        .unwrap();
    assert_eq!(all.length(), 2);
    assert!(layer_position("i-base") < layer_position("i-theme"));
}

#[wasm_bindgen_test]
fn second_run_is_rejected() {
    let mount = add_mount("run-twice");
    let layers = StyleLayerSet::new(vec![StyleLayer::new("t-base", LayerKind::Base, "body {}")])
        .unwrap();
    let boot = Bootstrap::new(BootConfig::new(layers, MountTarget::new("run-twice")));

    boot.run::<FakeRoot>(&document()).unwrap();
    let result = boot.run::<FakeRoot>(&document());

    assert_eq!(result, Err(BootError::AlreadyBootstrapped));
    // Still exactly one attached instance.
    assert_eq!(mount.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn failed_run_is_terminal() {
    let layers = StyleLayerSet::new(vec![StyleLayer::new("f-base", LayerKind::Base, "body {}")])
        .unwrap();
    let boot = Bootstrap::new(BootConfig::new(layers, MountTarget::new("never-exists")));

    assert!(matches!(
        boot.run::<FakeRoot>(&document()),
        Err(BootError::MountTargetMissing(_))
    ));
    // One initial state, one terminal state, no transitions back.
    assert_eq!(
        boot.run::<FakeRoot>(&document()),
        Err(BootError::AlreadyBootstrapped)
    );
}

#[wasm_bindgen_test]
fn non_html_target_is_rejected() {
    let document = document();
    let svg = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_id("svg-target");
    document.body().unwrap().append_child(&svg).unwrap();

    let result = MountTarget::new("svg-target").resolve(&document);
    assert_eq!(result, Err(BootError::MountTargetKind("svg-target".to_string())));
}
