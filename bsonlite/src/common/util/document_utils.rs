use std::collections::BTreeMap;

use crate::{collection::Document, errors::BsonliteResult, Value};

/// Creates an empty document.
pub fn empty_document() -> Document {
    Document::new()
}

/// Creates a document from a [BTreeMap].
pub fn document_from_map(map: &BTreeMap<String, Value>) -> BsonliteResult<Document> {
    // create document from map and validate the keys as well
    let mut doc = Document::new();
    for (key, value) in map.iter() {
        doc.put(key, value.clone())?;
    }
    Ok(doc)
}

/// Creates a document with a single key-value pair.
pub fn create_document(key: &str, value: Value) -> BsonliteResult<Document> {
    let mut doc = Document::new();
    doc.put(key, value)?;
    Ok(doc)
}
