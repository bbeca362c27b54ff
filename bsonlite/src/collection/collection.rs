use crate::collection::{Document, WriteResult};
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use crate::types::ObjectId;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named collection of documents.
///
/// `Collection` is a cheap-to-clone handle; all clones share the same
/// underlying state through `Arc`. Documents are keyed internally by a
/// generated [ObjectId], in id order, and the documents themselves are stored
/// exactly as authored (no identifier field is injected).
///
/// A handle that outlives a [`Database::drop_collection`] call becomes stale:
/// every operation through it fails with `ErrorKind::CollectionDropped`.
///
/// [`Database::drop_collection`]: crate::database::Database::drop_collection
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::doc;
///
/// let collection = db.collection("users")?;
/// let result = collection.insert(doc! { name: "Alice" })?;
/// assert_eq!(result.affected_count(), 1);
/// assert_eq!(collection.size()?, 1);
/// ```
#[derive(Clone)]
pub struct Collection {
    inner: Arc<CollectionInner>,
}

struct CollectionInner {
    name: String,
    documents: RwLock<BTreeMap<ObjectId, Document>>,
    dropped: AtomicBool,
    store_closed: Arc<AtomicBool>,
}

impl Collection {
    pub(crate) fn new(name: &str, store_closed: Arc<AtomicBool>) -> Self {
        Collection {
            inner: Arc::new(CollectionInner {
                name: name.to_string(),
                documents: RwLock::new(BTreeMap::new()),
                dropped: AtomicBool::new(false),
                store_closed,
            }),
        }
    }

    /// Gets the name of this collection.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Inserts a single document into this collection.
    ///
    /// The store assigns a fresh [ObjectId] to key the document; the document
    /// content is stored unmodified. Any failure propagates to the caller
    /// unchanged; there is no retry.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to insert
    ///
    /// # Returns
    ///
    /// A [WriteResult] listing the assigned id.
    pub fn insert(&self, document: Document) -> BsonliteResult<WriteResult> {
        self.check_state()?;
        let id = ObjectId::new();
        self.inner.documents.write().insert(id, document);
        log::debug!("Inserted document {} into '{}'", id, self.inner.name);
        Ok(WriteResult::new(vec![id]))
    }

    /// Inserts multiple documents into this collection.
    ///
    /// This is more efficient than calling `insert()` repeatedly as the write
    /// lock is taken once for the whole batch.
    pub fn insert_many(&self, documents: Vec<Document>) -> BsonliteResult<WriteResult> {
        self.check_state()?;
        let mut store = self.inner.documents.write();
        let mut ids = Vec::with_capacity(documents.len());
        for document in documents {
            let id = ObjectId::new();
            store.insert(id, document);
            ids.push(id);
        }
        log::debug!("Inserted {} documents into '{}'", ids.len(), self.inner.name);
        Ok(WriteResult::new(ids))
    }

    /// Gets the number of documents in this collection.
    pub fn size(&self) -> BsonliteResult<usize> {
        self.check_state()?;
        Ok(self.inner.documents.read().len())
    }

    /// Checks whether this collection holds no documents.
    pub fn is_empty(&self) -> BsonliteResult<bool> {
        Ok(self.size()? == 0)
    }

    /// Gets every document in this collection, in insertion-id order.
    pub fn find_all(&self) -> BsonliteResult<Vec<Document>> {
        self.check_state()?;
        Ok(self.inner.documents.read().values().cloned().collect())
    }

    /// Gets the document stored under the given id.
    pub fn get_by_id(&self, id: &ObjectId) -> BsonliteResult<Option<Document>> {
        self.check_state()?;
        Ok(self.inner.documents.read().get(id).cloned())
    }

    /// Marks this collection dropped and destroys its contents.
    pub(crate) fn mark_dropped(&self) {
        self.inner.dropped.store(true, Ordering::SeqCst);
        self.inner.documents.write().clear();
    }

    fn check_state(&self) -> BsonliteResult<()> {
        if self.inner.store_closed.load(Ordering::SeqCst) {
            log::error!("Operation on collection '{}' after store close", self.inner.name);
            return Err(BsonliteError::new(
                &format!(
                    "Collection '{}' is not accessible: store is closed",
                    self.inner.name
                ),
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        if self.inner.dropped.load(Ordering::SeqCst) {
            log::error!("Operation on dropped collection '{}'", self.inner.name);
            return Err(BsonliteError::new(
                &format!("Collection '{}' has been dropped", self.inner.name),
                ErrorKind::CollectionDropped,
            ));
        }
        Ok(())
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Collection(\"{}\")", self.inner.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    fn test_collection() -> Collection {
        Collection::new("test", Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn insert_stores_document_unmodified() {
        let collection = test_collection();
        let document = doc! { name: "Alice", age: 30 };
        let result = collection.insert(document.clone()).unwrap();
        assert_eq!(result.affected_count(), 1);

        let stored = collection.find_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], document);
        assert_eq!(stored[0].size(), 2);
    }

    #[test]
    fn insert_assigns_retrievable_id() {
        let collection = test_collection();
        let result = collection.insert(doc! { x: 1 }).unwrap();
        let id = result.affected_ids()[0];
        let fetched = collection.get_by_id(&id).unwrap();
        assert_eq!(fetched, Some(doc! { x: 1 }));
    }

    #[test]
    fn insert_many_assigns_distinct_ids() {
        let collection = test_collection();
        let documents = vec![doc! { n: 1 }, doc! { n: 2 }, doc! { n: 3 }];
        let result = collection.insert_many(documents).unwrap();
        assert_eq!(result.affected_count(), 3);
        let mut ids = result.affected_ids().clone();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(collection.size().unwrap(), 3);
    }

    #[test]
    fn size_and_is_empty() {
        let collection = test_collection();
        assert!(collection.is_empty().unwrap());
        collection.insert(doc! {}).unwrap();
        assert_eq!(collection.size().unwrap(), 1);
        assert!(!collection.is_empty().unwrap());
    }

    #[test]
    fn dropped_collection_rejects_operations() {
        let collection = test_collection();
        collection.insert(doc! { x: 1 }).unwrap();
        collection.mark_dropped();

        let result = collection.insert(doc! { x: 2 });
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::CollectionDropped);
        assert!(collection.size().is_err());
        assert!(collection.find_all().is_err());
    }

    #[test]
    fn closed_store_rejects_operations() {
        let closed = Arc::new(AtomicBool::new(false));
        let collection = Collection::new("test", closed.clone());
        collection.insert(doc! { x: 1 }).unwrap();

        closed.store(true, Ordering::SeqCst);
        let result = collection.size();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::StoreAlreadyClosed);
    }

    #[test]
    fn debug_shows_name() {
        let collection = test_collection();
        assert_eq!(format!("{:?}", collection), "Collection(\"test\")");
    }

    #[test]
    fn clones_share_state() {
        let collection = test_collection();
        let other = collection.clone();
        collection.insert(doc! { x: 1 }).unwrap();
        assert_eq!(other.size().unwrap(), 1);
    }
}
