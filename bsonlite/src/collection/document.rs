use im::OrdMap;
use smallvec::SmallVec;

use crate::common::{ReadExecutor, Value};
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use crate::FIELD_SEPARATOR;
use itertools::Itertools;
use std::fmt::{Debug, Display};

type FieldVec = SmallVec<[String; 8]>;

/// Represents a document: an ordered mapping from field names to [Value]s.
///
/// Document keys are always [String]s and values are [Value]s, so a single
/// document can mix every supported value kind. Nested documents are
/// supported as well: the value under a nested document can be retrieved
/// with a key separated by the field separator (default: `.`), e.g. for
/// `{"a": {"b": 1}}` calling `document.get("a.b")` returns `1`.
///
/// Unlike many document stores, no identifier field is injected into the
/// document on insertion; a document always holds exactly the fields its
/// author put there. Collections track identity separately.
///
/// ## Lock-Free Design
///
/// This struct uses `im::OrdMap` (a persistent ordered map):
/// - O(1) cloning via internal Arc sharing
/// - Mutations create new maps via structural sharing
/// - Each mutated document is completely independent
#[derive(Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Document {
    /// Persistent ordered map: O(1) clone via internal Arc, O(log n) mutations
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    /// Checks if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the number of top-level fields in the document.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates the specified value with the specified key in this document.
    ///
    /// If the key already exists, its value is updated. The key may be an
    /// embedded path (e.g. `"location.city"`), in which case intermediate
    /// nested documents are created as needed.
    ///
    /// # Arguments
    ///
    /// * `key` - The key as a string slice. Cannot be empty.
    /// * `value` - The value to associate with the key. Can be any type that
    ///   implements `Into<Value>`.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorKind::InvalidFieldName` error if the key or any path
    /// segment is empty, or if a path segment traverses a non-document value.
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> BsonliteResult<()> {
        let path = split_path(key)?;
        self.put_path(&path, value.into())
    }

    fn put_path(&mut self, path: &[String], value: Value) -> BsonliteResult<()> {
        let (first, rest) = match path.split_first() {
            Some(split) => split,
            None => {
                return Err(BsonliteError::new(
                    "Document field path must not be empty",
                    ErrorKind::InvalidFieldName,
                ))
            }
        };

        if rest.is_empty() {
            self.data.insert(first.clone(), value);
            return Ok(());
        }

        let mut nested = match self.data.get(first) {
            Some(Value::Document(doc)) => doc.clone(),
            None => Document::new(),
            Some(other) => {
                log::error!("Cannot traverse {} value at '{}'", other.type_name(), first);
                return Err(BsonliteError::new(
                    &format!(
                        "Cannot set embedded field: '{}' holds a {} value",
                        first,
                        other.type_name()
                    ),
                    ErrorKind::InvalidFieldName,
                ));
            }
        };
        nested.put_path(rest, value)?;
        self.data.insert(first.clone(), Value::Document(nested));
        Ok(())
    }

    /// Gets the value associated with the specified key.
    ///
    /// The key may be an embedded path (e.g. `"location.city"`). A missing
    /// field yields [Value::Null].
    ///
    /// # Errors
    ///
    /// Returns an `ErrorKind::InvalidFieldName` error if the key or any path
    /// segment is empty.
    pub fn get(&self, key: &str) -> BsonliteResult<Value> {
        let path = split_path(key)?;
        let mut current = match self.data.get(&path[0]) {
            Some(value) => value.clone(),
            None => return Ok(Value::Null),
        };
        for segment in &path[1..] {
            current = match current {
                Value::Document(doc) => match doc.data.get(segment) {
                    Some(value) => value.clone(),
                    None => return Ok(Value::Null),
                },
                _ => return Ok(Value::Null),
            };
        }
        Ok(current)
    }

    /// Checks whether the document contains the given top-level key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes the value associated with the given top-level key.
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if the key was absent.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Gets the top-level field names in this document, in sorted order.
    pub fn fields(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    /// Iterates over the top-level key-value pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .data
            .iter()
            .map(|(key, value)| format!("{:?}: {}", key, value))
            .join(", ");
        write!(f, "{{{}}}", body)
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Splits a field key on the configured separator, validating every segment.
fn split_path(key: &str) -> BsonliteResult<FieldVec> {
    let path: FieldVec = FIELD_SEPARATOR.read_with(|separator| {
        key.split(separator.as_str())
            .map(|segment| segment.to_string())
            .collect()
    });
    if path.iter().any(|segment| segment.is_empty()) {
        log::error!("Invalid document field key: '{}'", key);
        return Err(BsonliteError::new(
            &format!("Invalid document field key: '{}'", key),
            ErrorKind::InvalidFieldName,
        ));
    }
    Ok(path)
}

/// Strips the quotes `stringify!` leaves around string-literal keys.
pub fn normalize(key: &str) -> String {
    key.trim_matches('"').to_string()
}

/// A macro to create a [Document] from key-value literals.
///
/// Keys may be identifiers or string literals; values may be expressions,
/// nested `{ ... }` documents, or `[ ... ]` arrays.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::doc;
///
/// let simple = doc!{
///     name: "Alice",
///     age: 30
/// };
///
/// // Nested documents and arrays
/// let complex = doc!{
///     user: {
///         name: "Charlie",
///         tags: ["admin", "user"]
///     },
///     values: [1, 2, 3]
/// };
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document (with braces for backward compat)
    ({}) => {
        $crate::collection::Document::new()
    };

    // match an empty document (new syntax)
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs (old syntax with outer braces - for backward compat)
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    // match a document with key value pairs (new syntax without outer braces)
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, function call, arithmetic in parens, literals, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
