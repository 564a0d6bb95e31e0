//! Kakapoly Core - Document models, traits, and validation.
//!
//! This crate describes the two record kinds of the icon store (icon sets and
//! icons), the rules they are validated against, and the store contract the
//! other Kakapoly crates program against. It has no dependencies on other
//! Kakapoly crates.

pub mod document;
pub mod dump;
pub mod error;
pub mod icon;
pub mod icon_set;
pub mod storage;
pub mod validation;

// Re-exports for convenience
pub use document::{new_id, Document};
pub use dump::Dump;
pub use error::{StoreError, ValidationError};
pub use icon::{Icon, IconPatch};
pub use icon_set::{IconSet, IconSetPatch};
pub use storage::DocumentStore;
pub use validation::Validator;
