use crate::collection::Collection;
use crate::common::{INTERNAL_NAME_SEPARATOR, RESERVED_NAME_PREFIX};
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use dashmap::DashMap;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named logical database: a registry of named [Collection]s.
///
/// `Database` is a cheap-to-clone handle sharing state through `Arc`. It is
/// obtained from [`Bsonlite::database`](crate::bsonlite::Bsonlite::database)
/// which creates the database implicitly on first use, so selecting a
/// database that does not exist yet is never an error.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::bsonlite::Bsonlite;
///
/// let engine = Bsonlite::new();
/// let db = engine.database("sample_db")?;
///
/// let collection = db.collection("users")?;
/// assert!(db.has_collection("users")?);
///
/// // Dropping is idempotent in outcome: absent collections are ignored
/// db.drop_collection("users")?;
/// assert!(!db.has_collection("users")?);
/// ```
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

struct DatabaseInner {
    name: String,
    collections: DashMap<String, Collection>,
    store_closed: Arc<AtomicBool>,
}

impl Database {
    pub(crate) fn new(name: &str, store_closed: Arc<AtomicBool>) -> Self {
        Database {
            inner: Arc::new(DatabaseInner {
                name: name.to_string(),
                collections: DashMap::new(),
                store_closed,
            }),
        }
    }

    /// Gets the name of this database.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Gets the collection with the given name, creating it if absent.
    ///
    /// # Arguments
    ///
    /// * `name` - The collection name
    ///
    /// # Returns
    ///
    /// A [Collection] handle. All handles for the same name share state.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is invalid, or
    /// `StoreAlreadyClosed` if the engine has been closed.
    pub fn collection(&self, name: &str) -> BsonliteResult<Collection> {
        self.check_open()?;
        validate_collection_name(name)?;
        let collection = self
            .inner
            .collections
            .entry(name.to_string())
            .or_insert_with(|| {
                log::debug!("Creating collection '{}' in '{}'", name, self.inner.name);
                Collection::new(name, self.inner.store_closed.clone())
            });
        Ok(collection.clone())
    }

    /// Explicitly creates a collection with the given name.
    ///
    /// Unlike [`Database::collection`], this fails if the collection already
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns a `CollectionAlreadyExists` error if a collection with this
    /// name is present.
    pub fn create_collection(&self, name: &str) -> BsonliteResult<Collection> {
        self.check_open()?;
        validate_collection_name(name)?;
        if self.inner.collections.contains_key(name) {
            log::error!("Collection '{}' already exists in '{}'", name, self.inner.name);
            return Err(BsonliteError::new(
                &format!("Collection '{}' already exists", name),
                ErrorKind::CollectionAlreadyExists,
            ));
        }
        let collection = Collection::new(name, self.inner.store_closed.clone());
        self.inner
            .collections
            .insert(name.to_string(), collection.clone());
        log::info!("Created collection '{}' in '{}'", name, self.inner.name);
        Ok(collection)
    }

    /// Checks whether a collection with the given name exists.
    pub fn has_collection(&self, name: &str) -> BsonliteResult<bool> {
        self.check_open()?;
        Ok(self.inner.collections.contains_key(name))
    }

    /// Drops the collection with the given name, destroying its contents.
    ///
    /// Dropping a collection that does not exist is not an error: the outcome
    /// (no such collection) is the same either way. The destruction is
    /// irreversible and asks for no confirmation.
    pub fn drop_collection(&self, name: &str) -> BsonliteResult<()> {
        self.check_open()?;
        match self.inner.collections.remove(name) {
            Some((_, collection)) => {
                collection.mark_dropped();
                log::info!("Dropped collection '{}' from '{}'", name, self.inner.name);
            }
            None => {
                log::debug!(
                    "Collection '{}' not present in '{}', nothing to drop",
                    name,
                    self.inner.name
                );
            }
        }
        Ok(())
    }

    /// Lists the names of all collections in this database.
    pub fn list_collection_names(&self) -> BsonliteResult<HashSet<String>> {
        self.check_open()?;
        Ok(self
            .inner
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect())
    }

    fn check_open(&self) -> BsonliteResult<()> {
        if self.inner.store_closed.load(Ordering::SeqCst) {
            log::error!("Operation on database '{}' after store close", self.inner.name);
            return Err(BsonliteError::new(
                &format!("Database '{}' is not accessible: store is closed", self.inner.name),
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        Ok(())
    }
}

impl Debug for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Database(\"{}\")", self.inner.name)
    }
}

/// Validates a database or collection name.
pub(crate) fn validate_name(kind: &str, name: &str) -> BsonliteResult<()> {
    if name.is_empty() {
        return Err(BsonliteError::new(
            &format!("{} name must not be empty", kind),
            ErrorKind::ValidationError,
        ));
    }
    if name.contains(INTERNAL_NAME_SEPARATOR) {
        return Err(BsonliteError::new(
            &format!(
                "{} name '{}' must not contain '{}'",
                kind, name, INTERNAL_NAME_SEPARATOR
            ),
            ErrorKind::ValidationError,
        ));
    }
    if name.starts_with(RESERVED_NAME_PREFIX) {
        return Err(BsonliteError::new(
            &format!("{} name '{}' uses a reserved prefix", kind, name),
            ErrorKind::ValidationError,
        ));
    }
    Ok(())
}

fn validate_collection_name(name: &str) -> BsonliteResult<()> {
    validate_name("Collection", name)
}
