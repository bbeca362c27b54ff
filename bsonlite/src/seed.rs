//! Sample-data seeding: builds the all-types demonstration collection.
//!
//! This module reproduces the classic seeding script: resolve the sample
//! database, drop the demonstration collection to ensure a clean slate,
//! recreate it, and insert one document whose fields exercise every supported
//! value kind exactly once. The drop is intentionally destructive and asks
//! for no confirmation; any failure propagates to the caller unchanged.

use crate::bsonlite::Bsonlite;
use crate::collection::Document;
use crate::common::Value;
use crate::errors::BsonliteResult;
use crate::types::{Binary, BinarySubtype, Code, DateTime, Decimal128, ObjectId, Regex, Timestamp};
use crate::{doc, val};

/// Name of the sample database.
pub const SAMPLE_DB: &str = "sample_db";
/// Name of the demonstration collection holding the all-types document.
pub const ALL_TYPES_COLLECTION: &str = "all_types_demo";

/// Number of fields in the all-types document: one per supported value kind.
pub const ALL_TYPES_FIELD_COUNT: usize = 18;

/// Builds the all-types document.
///
/// The document carries exactly one field per supported value kind, 18 in
/// all. Three fields are generated fresh on every call (`objectid_field`,
/// `date_field`, `timestamp_field`); the rest are fixed literals. The
/// base64 literal in `binary_field` decodes to the bytes of `"Hello World"`.
///
/// # Returns
///
/// The freshly constructed document.
pub fn all_types_document() -> BsonliteResult<Document> {
    let mut document = Document::new();
    document.put("double_field", 123.45)?;
    document.put("string_field", "Hello MongoDB")?;
    document.put("object_field", doc! { nested_key: "nested_value" })?;
    document.put("array_field", vec![val!(1), val!(2), val!(3), val!("four")])?;
    document.put(
        "binary_field",
        Binary::from_base64(BinarySubtype::Generic, "SGVsbG8gV29ybGQ=")?,
    )?;
    document.put("undefined_field", Value::Undefined)?;
    document.put("objectid_field", ObjectId::new())?;
    document.put("boolean_field", true)?;
    document.put("date_field", DateTime::now())?;
    document.put("null_field", Value::Null)?;
    document.put("regex_field", Regex::new("pattern", "i")?)?;
    document.put("javascript_field", Code::new("function() { return true; }"))?;
    document.put("int32_field", 100)?;
    document.put("timestamp_field", Timestamp::next())?;
    document.put("int64_field", 9223372036854775807i64)?;
    document.put("decimal128_field", "12345.6789".parse::<Decimal128>()?)?;
    document.put("minkey_field", Value::MinKey)?;
    document.put("maxkey_field", Value::MaxKey)?;
    Ok(document)
}

/// Seeds the sample database with the all-types demonstration collection.
///
/// Executes strictly in sequence: resolve [SAMPLE_DB], drop
/// [ALL_TYPES_COLLECTION] if present (destroying any prior contents),
/// recreate it explicitly, and insert one freshly built all-types document.
/// Re-running against a populated collection therefore always leaves exactly
/// one document behind.
///
/// # Arguments
///
/// * `engine` - The engine to seed
///
/// # Returns
///
/// The document that was inserted.
///
/// # Errors
///
/// Any failure from the underlying store propagates unchanged; no step is
/// retried and no error is swallowed.
pub fn seed_all_types(engine: &Bsonlite) -> BsonliteResult<Document> {
    let db = engine.database(SAMPLE_DB)?;

    // drop first to ensure a clean slate
    db.drop_collection(ALL_TYPES_COLLECTION)?;
    let collection = db.create_collection(ALL_TYPES_COLLECTION)?;

    let document = all_types_document()?;
    collection.insert(document.clone())?;
    log::info!(
        "Seeded '{}' collection in '{}' with the all-types document",
        ALL_TYPES_COLLECTION,
        SAMPLE_DB
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_exactly_one_field_per_kind() {
        let document = all_types_document().unwrap();
        assert_eq!(document.size(), ALL_TYPES_FIELD_COUNT);

        let mut kinds: Vec<&str> = document
            .iter()
            .map(|(_, value)| value.type_name())
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), ALL_TYPES_FIELD_COUNT);
    }

    #[test]
    fn document_field_names_match_the_script() {
        let document = all_types_document().unwrap();
        for field in [
            "double_field",
            "string_field",
            "object_field",
            "array_field",
            "binary_field",
            "undefined_field",
            "objectid_field",
            "boolean_field",
            "date_field",
            "null_field",
            "regex_field",
            "javascript_field",
            "int32_field",
            "timestamp_field",
            "int64_field",
            "decimal128_field",
            "minkey_field",
            "maxkey_field",
        ] {
            assert!(document.contains_key(field), "missing field '{}'", field);
        }
    }

    #[test]
    fn literal_fields_hold_the_script_values() {
        let document = all_types_document().unwrap();
        assert_eq!(
            document.get("double_field").unwrap(),
            Value::Double(123.45)
        );
        assert_eq!(document.get("string_field").unwrap(), val!("Hello MongoDB"));
        assert_eq!(
            document.get("object_field.nested_key").unwrap(),
            val!("nested_value")
        );
        assert_eq!(document.get("int32_field").unwrap(), Value::Int32(100));
        assert_eq!(
            document.get("int64_field").unwrap(),
            Value::Int64(i64::MAX)
        );
        assert_eq!(document.get("boolean_field").unwrap(), Value::Bool(true));
    }

    #[test]
    fn binary_field_decodes_to_hello_world() {
        let document = all_types_document().unwrap();
        let binary_value = document.get("binary_field").unwrap();
        let binary = binary_value.as_binary().unwrap();
        assert_eq!(binary.bytes(), b"Hello World");
        assert_eq!(binary.subtype().tag(), 0);
    }

    #[test]
    fn generated_fields_are_fresh_per_call() {
        let first = all_types_document().unwrap();
        let second = all_types_document().unwrap();
        assert_ne!(
            first.get("objectid_field").unwrap(),
            second.get("objectid_field").unwrap()
        );
        assert_ne!(
            first.get("timestamp_field").unwrap(),
            second.get("timestamp_field").unwrap()
        );
    }

    #[test]
    fn seeding_creates_collection_with_one_document() {
        let engine = Bsonlite::new();
        let inserted = seed_all_types(&engine).unwrap();

        let db = engine.database(SAMPLE_DB).unwrap();
        assert!(db.has_collection(ALL_TYPES_COLLECTION).unwrap());
        let collection = db.collection(ALL_TYPES_COLLECTION).unwrap();
        assert_eq!(collection.size().unwrap(), 1);
        assert_eq!(collection.find_all().unwrap()[0], inserted);
    }

    #[test]
    fn reseeding_destroys_prior_contents() {
        let engine = Bsonlite::new();
        let db = engine.database(SAMPLE_DB).unwrap();
        let collection = db.collection(ALL_TYPES_COLLECTION).unwrap();
        collection.insert(doc! { stale: true }).unwrap();
        collection.insert(doc! { stale: true }).unwrap();

        seed_all_types(&engine).unwrap();

        let reseeded = db.collection(ALL_TYPES_COLLECTION).unwrap();
        let documents = reseeded.find_all().unwrap();
        assert_eq!(documents.len(), 1);
        assert!(!documents[0].contains_key("stale"));
    }

    #[test]
    fn seeding_a_closed_engine_fails_loudly() {
        let engine = Bsonlite::new();
        engine.close().unwrap();
        assert!(seed_all_types(&engine).is_err());
    }
}
