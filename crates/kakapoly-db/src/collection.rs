use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use kakapoly_core::{Document, DocumentStore, StoreError, ValidationError};

struct Inner<T> {
    docs: Vec<T>,
    /// id -> position in `docs`
    index: HashMap<String, usize>,
}

impl<T: Document> Inner<T> {
    /// Check the unique keys of `doc` against every other document.
    /// `skip` is the position of the document being replaced, if any.
    fn check_unique_keys(&self, doc: &T, skip: Option<usize>) -> Result<(), ValidationError> {
        for (field, value) in doc.unique_keys() {
            let taken = self
                .docs
                .iter()
                .enumerate()
                .filter(|(pos, _)| Some(*pos) != skip)
                .any(|(_, other)| {
                    other
                        .unique_keys()
                        .iter()
                        .any(|(f, v)| *f == field && *v == value)
                });
            if taken {
                return Err(ValidationError::DuplicateKey {
                    collection: T::COLLECTION,
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    fn push(&mut self, doc: T) {
        self.index.insert(doc.id().to_string(), self.docs.len());
        self.docs.push(doc);
    }
}

/// Thread-safe, insertion-ordered collection of one document kind.
pub struct Collection<T> {
    inner: RwLock<Inner<T>>,
}

impl<T: Document> Collection<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                docs: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }

    // Documents are only ever pushed or replaced whole, so a panic in
    // another holder cannot leave them half-written.
    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve a list of ids, preserving their order.
    /// Returns the first id that has no document.
    pub fn find_many<'a>(&self, ids: &'a [String]) -> Result<Vec<T>, &'a str> {
        let inner = self.read();
        ids.iter()
            .map(|id| match inner.index.get(id) {
                Some(&pos) => Ok(inner.docs[pos].clone()),
                None => Err(id.as_str()),
            })
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().index.contains_key(id)
    }
}

impl<T: Document> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> DocumentStore<T> for Collection<T> {
    fn insert(&self, doc: T) -> Result<T, StoreError> {
        doc.validate()?;

        let mut inner = self.write();
        if inner.index.contains_key(doc.id()) {
            return Err(ValidationError::DuplicateId {
                collection: T::COLLECTION,
                id: doc.id().to_string(),
            }
            .into());
        }
        inner.check_unique_keys(&doc, None)?;
        inner.push(doc.clone());

        Ok(doc)
    }

    fn update(&self, id: &str, patch: T::Patch) -> Result<T, StoreError> {
        let mut inner = self.write();
        let pos = *inner.index.get(id).ok_or_else(|| StoreError::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        })?;

        let mut updated = inner.docs[pos].clone();
        updated.apply(patch);
        updated.validate()?;
        inner.check_unique_keys(&updated, Some(pos))?;
        inner.docs[pos] = updated.clone();

        Ok(updated)
    }

    fn find_one_by(&self, field: &str, value: &str) -> Option<T> {
        let inner = self.read();
        if field == "id" {
            return inner.index.get(value).map(|&pos| inner.docs[pos].clone());
        }
        inner
            .docs
            .iter()
            .find(|doc| doc.field(field) == Some(value))
            .cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.read().docs.clone()
    }

    fn upsert_if_absent(&self, doc: T) -> Result<bool, StoreError> {
        doc.validate()?;

        let mut inner = self.write();
        if inner.index.contains_key(doc.id()) {
            return Ok(false);
        }
        inner.check_unique_keys(&doc, None)?;
        inner.push(doc);

        Ok(true)
    }

    fn len(&self) -> usize {
        self.read().docs.len()
    }
}
