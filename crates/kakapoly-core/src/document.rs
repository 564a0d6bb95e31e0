use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;

/// Generate a fresh opaque document id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A record kind that can live in a store collection.
///
/// The declared shape is the Rust type itself; `validate` covers the rules a
/// type cannot express (non-empty keys, id length, slug charset).
pub trait Document: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, as used in fixture file names and error messages.
    const COLLECTION: &'static str;

    /// Partial update merged by `DocumentStore::update`.
    type Patch: Send;

    fn id(&self) -> &str;

    /// Look up a string-valued field by its serialized (camelCase) name.
    /// Unknown or non-string fields return `None`.
    fn field(&self, name: &str) -> Option<&str>;

    fn validate(&self) -> Result<(), ValidationError>;

    fn apply(&mut self, patch: Self::Patch);

    /// Secondary keys that must be unique within the collection.
    fn unique_keys(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}
