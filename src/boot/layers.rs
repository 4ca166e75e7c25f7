//! Style Layer Set
//!
//! An ordered, immutable-after-construction collection of global presentation
//! layers. Layers are applied to the host document exactly once, in declared
//! order, before any content renders: the base layer defines design tokens,
//! the theme layer maps them to a palette, and the content-type overlays
//! (structured data, document markup) consume them. That load order is an
//! invariant, not a coincidence.
//!
//! Registration is idempotent: each layer leaves a marker attribute on its
//! `<style>` element, and a layer whose marker is already present is skipped,
//! so re-registering the same set changes neither content nor order.

use web_sys::Document;

use super::error::{BootError, BootResult};

/// Attribute marking injected style elements, keyed by layer name.
const LAYER_ATTR: &str = "data-folio-layer";

const BASE_CSS: &str = include_str!("../../assets/base.css");
const THEME_CSS: &str = include_str!("../../assets/theme.css");
const JSON_CSS: &str = include_str!("../../assets/json.css");
const MARKDOWN_CSS: &str = include_str!("../../assets/markdown.css");

/// Category of a presentation layer, ordered by application rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Reset rules and design tokens; always first
    Base,
    /// Palette and application chrome; after base, before overlays
    Theme,
    /// Key/value and tabular rendering rules
    StructuredData,
    /// Prose rendering rules
    DocumentMarkup,
}

impl LayerKind {
    /// Application rank. Overlays share a rank; their relative order is
    /// whatever the set declares.
    fn rank(self) -> u8 {
        match self {
            LayerKind::Base => 0,
            LayerKind::Theme => 1,
            LayerKind::StructuredData | LayerKind::DocumentMarkup => 2,
        }
    }
}

/// A single globally scoped presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleLayer {
    name: &'static str,
    kind: LayerKind,
    css: &'static str,
}

impl StyleLayer {
    /// Create a layer. Content is resolved at build time (`include_str!` for
    /// the bundled layers); resolvability is checked when the set registers.
    pub fn new(name: &'static str, kind: LayerKind, css: &'static str) -> Self {
        Self { name, kind, css }
    }

    /// Stable identifier, used for the idempotence marker
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Layer category
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// CSS source text
    pub fn css(&self) -> &'static str {
        self.css
    }

    /// A layer with nothing but whitespace cannot style anything; treat it
    /// the same as a resource that failed to resolve.
    fn is_resolvable(&self) -> bool {
        !self.css.trim().is_empty()
    }
}

/// Ordered set of style layers, validated at construction and immutable
/// afterwards
#[derive(Debug, Clone)]
pub struct StyleLayerSet {
    layers: Vec<StyleLayer>,
}

impl StyleLayerSet {
    /// Build a set from an ordered list of layers.
    ///
    /// Validates the structural invariants up front: the list is non-empty,
    /// names are unique, and no overlay is declared ahead of the base/theme
    /// layers it depends on. Content resolvability is checked at
    /// registration time (see [`StyleLayerSet::register`]).
    pub fn new(ordered: Vec<StyleLayer>) -> BootResult<Self> {
        if ordered.is_empty() {
            return Err(BootError::LayerSetEmpty);
        }

        let mut max_rank = 0;
        for (i, layer) in ordered.iter().enumerate() {
            if ordered[..i].iter().any(|prev| prev.name == layer.name) {
                return Err(BootError::LayerDuplicate(layer.name.to_string()));
            }
            let rank = layer.kind.rank();
            if rank < max_rank {
                return Err(BootError::LayerOrdering(layer.name.to_string()));
            }
            max_rank = rank;
        }

        Ok(Self { layers: ordered })
    }

    /// The four shipped layers in declared order: base, theme, json,
    /// markdown. Content is compiled in from `assets/`, so the set is valid
    /// by construction.
    pub fn bundled() -> Self {
        Self {
            layers: vec![
                StyleLayer::new("base", LayerKind::Base, BASE_CSS),
                StyleLayer::new("theme", LayerKind::Theme, THEME_CSS),
                StyleLayer::new("json", LayerKind::StructuredData, JSON_CSS),
                StyleLayer::new("markdown", LayerKind::DocumentMarkup, MARKDOWN_CSS),
            ],
        }
    }

    /// Number of layers in the set
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the set is empty (never true for a constructed set)
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate layers in declared order
    pub fn iter(&self) -> impl Iterator<Item = &StyleLayer> {
        self.layers.iter()
    }

    /// First layer whose content failed to resolve, if any
    fn unresolvable(&self) -> Option<&StyleLayer> {
        self.layers.iter().find(|layer| !layer.is_resolvable())
    }

    /// Apply every layer to the document head, in declared order.
    ///
    /// All layers are resolved before any is injected: one unresolvable
    /// resource fails the whole set with nothing added to the document,
    /// rather than leaving a partially styled page behind. Layers whose
    /// marker element already exists are skipped, which makes repeated
    /// registration of the same set a no-op.
    pub fn register(&self, document: &Document) -> BootResult<()> {
        if let Some(layer) = self.unresolvable() {
            return Err(BootError::StyleResolution(layer.name.to_string()));
        }

        let head = document
            .head()
            .ok_or_else(|| BootError::StyleInjection("document has no <head>".to_string()))?;

        for layer in &self.layers {
            let selector = format!("style[{}=\"{}\"]", LAYER_ATTR, layer.name);
            let existing = document
                .query_selector(&selector)
                .map_err(|e| BootError::StyleInjection(format!("{:?}", e)))?;
            if existing.is_some() {
                continue;
            }

            let element = document
                .create_element("style")
                .map_err(|e| BootError::StyleInjection(format!("{:?}", e)))?;
            element
                .set_attribute(LAYER_ATTR, layer.name)
                .map_err(|e| BootError::StyleInjection(format!("{:?}", e)))?;
            element.set_text_content(Some(layer.css));
            head.append_child(&element)
                .map_err(|e| BootError::StyleInjection(format!("{:?}", e)))?;
        }

        Ok(())
    }
}
