use crate::common::BSONLITE_VERSION;
use crate::database::{validate_name, Database};
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The embedded bsonlite engine.
///
/// `Bsonlite` is the entry point for all operations. It hosts any number of
/// named logical databases, each created implicitly on first use, the way a
/// server resolves `getSiblingDB`.
///
/// `Bsonlite` uses the PIMPL (Pointer to Implementation) design pattern
/// internally: instances are cheap to clone and all clones share the same
/// underlying state through `Arc`, so the engine can be handed across
/// threads freely. Closing the engine invalidates every database and
/// collection handle derived from it.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::bsonlite::Bsonlite;
/// use bsonlite::doc;
///
/// let engine = Bsonlite::new();
/// let db = engine.database("sample_db")?;
/// let collection = db.collection("users")?;
/// collection.insert(doc! { name: "Alice" })?;
/// engine.close()?;
/// ```
#[derive(Clone)]
pub struct Bsonlite {
    inner: Arc<BsonliteInner>,
}

struct BsonliteInner {
    databases: DashMap<String, Database>,
    closed: Arc<AtomicBool>,
}

impl Bsonlite {
    /// Creates a new in-memory engine with no databases.
    pub fn new() -> Self {
        log::info!("Initialized bsonlite engine version {}", BSONLITE_VERSION);
        Bsonlite {
            inner: Arc::new(BsonliteInner {
                databases: DashMap::new(),
                closed: Arc::new(AtomicBool::new(false)),
            }),
        }
    }

    /// Resolves the logical database with the given name, creating it
    /// implicitly if it does not exist yet.
    ///
    /// # Arguments
    ///
    /// * `name` - The database name
    ///
    /// # Returns
    ///
    /// A [Database] handle. All handles for the same name share state.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is invalid, or
    /// `StoreAlreadyClosed` if the engine has been closed.
    pub fn database(&self, name: &str) -> BsonliteResult<Database> {
        self.check_open()?;
        validate_name("Database", name)?;
        let database = self
            .inner
            .databases
            .entry(name.to_string())
            .or_insert_with(|| {
                log::info!("Creating database '{}'", name);
                Database::new(name, self.inner.closed.clone())
            });
        Ok(database.clone())
    }

    /// Checks whether a database with the given name has been created.
    pub fn has_database(&self, name: &str) -> BsonliteResult<bool> {
        self.check_open()?;
        Ok(self.inner.databases.contains_key(name))
    }

    /// Lists the names of all databases in this engine.
    pub fn list_database_names(&self) -> BsonliteResult<HashSet<String>> {
        self.check_open()?;
        Ok(self
            .inner
            .databases
            .iter()
            .map(|entry| entry.key().clone())
            .collect())
    }

    /// Closes the engine, invalidating every derived handle.
    ///
    /// # Errors
    ///
    /// Returns a `StoreAlreadyClosed` error if the engine was already closed.
    pub fn close(&self) -> BsonliteResult<()> {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return Err(BsonliteError::new(
                "Engine is already closed",
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        log::info!("Closed bsonlite engine");
        Ok(())
    }

    /// Checks whether the engine has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    fn check_open(&self) -> BsonliteResult<()> {
        if self.is_closed() {
            log::error!("Operation on closed engine");
            return Err(BsonliteError::new(
                "Engine is closed",
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        Ok(())
    }
}

impl Default for Bsonlite {
    fn default() -> Self {
        Bsonlite::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    #[test]
    fn database_is_created_implicitly() {
        let engine = Bsonlite::new();
        assert!(!engine.has_database("sample_db").unwrap());
        let db = engine.database("sample_db").unwrap();
        assert_eq!(db.name(), "sample_db");
        assert!(engine.has_database("sample_db").unwrap());
    }

    #[test]
    fn database_handles_share_state() {
        let engine = Bsonlite::new();
        let first = engine.database("db").unwrap();
        let second = engine.database("db").unwrap();
        first.collection("users").unwrap();
        assert!(second.has_collection("users").unwrap());
    }

    #[test]
    fn list_database_names() {
        let engine = Bsonlite::new();
        engine.database("a").unwrap();
        engine.database("b").unwrap();
        let names = engine.list_database_names().unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("a"));
    }

    #[test]
    fn rejects_invalid_database_names() {
        let engine = Bsonlite::new();
        for bad in ["", "a|b", "$bsonlite_meta"] {
            let result = engine.database(bad);
            assert!(result.is_err(), "expected '{}' to be rejected", bad);
            assert_eq!(result.unwrap_err().kind(), &ErrorKind::ValidationError);
        }
    }

    #[test]
    fn close_invalidates_handles() {
        let engine = Bsonlite::new();
        let db = engine.database("db").unwrap();
        let collection = db.collection("users").unwrap();
        collection.insert(doc! { x: 1 }).unwrap();

        engine.close().unwrap();
        assert!(engine.is_closed());
        assert!(engine.database("db").is_err());
        assert!(db.collection("users").is_err());
        assert!(collection.size().is_err());
    }

    #[test]
    fn double_close_is_an_error() {
        let engine = Bsonlite::new();
        engine.close().unwrap();
        let result = engine.close();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::StoreAlreadyClosed);
    }

    #[test]
    fn clones_share_closed_state() {
        let engine = Bsonlite::new();
        let clone = engine.clone();
        engine.close().unwrap();
        assert!(clone.is_closed());
    }
}
