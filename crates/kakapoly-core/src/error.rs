use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Document not found in {collection}: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("Dangling reference {collection}.{field} -> {id}")]
    DanglingReference {
        collection: &'static str,
        field: &'static str,
        id: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{collection}.{field} cannot be empty")]
    EmptyField {
        collection: &'static str,
        field: &'static str,
    },

    #[error("{collection}.id too long: {len} chars (max 100)")]
    IdTooLong { collection: &'static str, len: usize },

    #[error("Invalid slug {0:?}: only [a-zA-Z0-9_-] allowed")]
    InvalidSlug(String),

    #[error("Duplicate id in {collection}: {id}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("Duplicate {field} in {collection}: {value}")]
    DuplicateKey {
        collection: &'static str,
        field: &'static str,
        value: String,
    },
}
