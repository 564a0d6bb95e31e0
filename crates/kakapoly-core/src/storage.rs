use crate::document::Document;
use crate::error::StoreError;

/// Trait for a collection of documents of one kind.
///
/// Implementations must be safe to call from several tasks at once: the
/// id and unique-key checks of `insert` and the write itself happen as one
/// atomic step.
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Validate and insert a document.
    /// Fails if the document is malformed or its id / unique keys collide.
    fn insert(&self, doc: T) -> Result<T, StoreError>;

    /// Merge a patch into an existing document and return the result.
    fn update(&self, id: &str, patch: T::Patch) -> Result<T, StoreError>;

    /// First inserted document whose `field` equals `value`.
    fn find_one_by(&self, field: &str, value: &str) -> Option<T>;

    fn find_by_id(&self, id: &str) -> Option<T> {
        self.find_one_by("id", id)
    }

    /// All documents, in insertion order.
    fn find_all(&self) -> Vec<T>;

    /// All documents as a serializable sequence, in insertion order.
    fn export_all(&self) -> Vec<T> {
        self.find_all()
    }

    /// Insert the document unless one with the same id already exists.
    /// Returns Ok(true) if inserted, Ok(false) if the id was present.
    fn upsert_if_absent(&self, doc: T) -> Result<bool, StoreError>;

    /// Batch form of `upsert_if_absent`. Returns the number inserted.
    fn bulk_upsert_if_absent<I>(&self, docs: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut inserted = 0;
        for doc in docs {
            if self.upsert_if_absent(doc)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
