//! promptform-core — assumption form state and rendering
//!
//! The form is a static catalog of per-product field descriptors plus a
//! mutable session: edit a field, the narrative prompts recompose; switch
//! product, the active field set swaps and stale values are pruned. The view
//! module builds the DomNode tree for the live page, and export bakes an
//! inert standalone copy.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod export;
pub mod session;
pub mod view;

pub use catalog::{FieldDescriptor, FieldGroups, PromptDescriptor};
pub use error::Error;
pub use export::{export_document, ExportError, ExportedDocument};
pub use session::Session;
