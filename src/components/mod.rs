//! UI Components
//!
//! Leptos components for the two content rendering modes.

pub mod data_view;
pub mod doc_view;

pub use data_view::DataView;
pub use doc_view::DocView;
